//! Reserved address range table.
//!
//! Holds the IPv4 and IPv6 blocks that are never a legitimate outbound
//! destination: loopback, link-local, private-use, documentation, multicast,
//! reserved, and other special-purpose space. The table is built once and is
//! read-only afterward; there is no API to add or remove a row.

mod table;
mod types;

use std::net::IpAddr;
use std::str::FromStr;

use ip_network::IpNetwork;
use once_cell::sync::Lazy;

use crate::error_handling::CheckError;

pub use types::{RangePurpose, ReservedRange};

/// Process-wide table, parsed on first use.
static GLOBAL_TABLE: Lazy<RangeTable> = Lazy::new(|| match RangeTable::build() {
    Ok(table) => table,
    // A bad literal is a defect in the shipped table; nothing can be checked safely.
    Err(e) => panic!("reserved range table is invalid: {e}"),
});

/// An immutable set of reserved CIDR blocks.
///
/// Membership is a union over all rows: [`contains`](Self::contains) answers
/// `true` if any row of the address's family contains it. Row order only
/// decides which row [`matching`](Self::matching) reports.
#[derive(Debug, Clone)]
pub struct RangeTable {
    ranges: Vec<ReservedRange>,
}

impl RangeTable {
    /// Parses the built-in range list.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::MalformedRange` for the first literal that fails to
    /// parse, including literals whose host bits are set (e.g. `10.0.0.1/8`).
    pub fn build() -> Result<Self, CheckError> {
        Self::from_literals(table::RESERVED_RANGES)
    }

    /// Returns the process-wide table.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in list is malformed.
    pub fn global() -> &'static RangeTable {
        &GLOBAL_TABLE
    }

    pub(crate) fn from_literals(
        literals: &[(&str, RangePurpose, &'static str)],
    ) -> Result<Self, CheckError> {
        let ranges = literals
            .iter()
            .map(|&(literal, purpose, reference)| {
                IpNetwork::from_str(literal)
                    .map(|network| ReservedRange::new(network, purpose, reference))
                    .map_err(|e| CheckError::MalformedRange {
                        literal: literal.to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ranges })
    }

    /// Returns `true` if `addr` lies in at least one row of its own family.
    ///
    /// No family normalization happens here: `::ffff:127.0.0.1` is an IPv6
    /// address and only IPv6 rows are consulted. See
    /// [`is_private`](crate::is_private) for the normalizing entry point.
    pub fn contains(&self, addr: IpAddr) -> bool {
        self.matching(addr).is_some()
    }

    /// Returns the first row containing `addr`, if any.
    pub fn matching(&self, addr: IpAddr) -> Option<&ReservedRange> {
        self.ranges.iter().find(|range| range.contains(addr))
    }

    /// Iterates over every row.
    pub fn iter(&self) -> impl Iterator<Item = &ReservedRange> {
        self.ranges.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// `true` if the table has no rows. The built-in table never is.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_build_parses_every_literal() {
        let table = RangeTable::build().expect("built-in table must parse");
        assert_eq!(table.len(), table::RESERVED_RANGES.len());
        assert!(!table.is_empty());
    }

    #[test]
    fn test_build_rejects_garbage_literal() {
        let result = RangeTable::from_literals(&[
            ("10.0.0.0/8", RangePurpose::PrivateUse, "RFC 1918"),
            ("10.0.0.0/33", RangePurpose::PrivateUse, "RFC 1918"),
        ]);
        match result {
            Err(CheckError::MalformedRange { literal, .. }) => assert_eq!(literal, "10.0.0.0/33"),
            other => panic!("expected MalformedRange, got {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_host_bits() {
        let result =
            RangeTable::from_literals(&[("10.0.0.1/8", RangePurpose::PrivateUse, "RFC 1918")]);
        assert!(matches!(result, Err(CheckError::MalformedRange { .. })));
    }

    #[test]
    fn test_build_rejects_missing_prefix() {
        let result =
            RangeTable::from_literals(&[("not-an-address", RangePurpose::Reserved, "RFC 0")]);
        assert!(matches!(result, Err(CheckError::MalformedRange { .. })));
    }

    #[test]
    fn test_no_duplicate_rows() {
        let table = RangeTable::global();
        let unique: HashSet<String> = table.iter().map(|r| r.network().to_string()).collect();
        assert_eq!(unique.len(), table.len());
    }

    #[test]
    fn test_every_purpose_is_used() {
        let table = RangeTable::global();
        for purpose in RangePurpose::iter() {
            assert!(
                table.iter().any(|r| r.purpose() == purpose),
                "no row for {purpose:?}"
            );
        }
    }

    #[test]
    fn test_both_families_present() {
        let table = RangeTable::global();
        assert!(table.iter().any(|r| r.is_ipv4()));
        assert!(table.iter().any(|r| !r.is_ipv4()));
    }

    #[test]
    fn test_matching_reports_row() {
        let table = RangeTable::global();
        let row = table.matching(ip("172.20.1.1")).unwrap();
        assert_eq!(row.network().to_string(), "172.16.0.0/12");
        assert_eq!(row.purpose(), RangePurpose::PrivateUse);

        let row = table.matching(ip("fe80::1")).unwrap();
        assert_eq!(row.purpose(), RangePurpose::LinkLocal);

        assert!(table.matching(ip("8.8.8.8")).is_none());
    }

    #[test]
    fn test_contains_does_not_normalize_mapped_addresses() {
        let table = RangeTable::global();
        assert!(table.contains(ip("127.0.0.1")));
        assert!(!table.contains(ip("::ffff:127.0.0.1")));
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(RangeTable::global(), RangeTable::global()));
    }
}
