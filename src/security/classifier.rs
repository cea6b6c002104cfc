//! Address and hostname classification.
//!
//! Two decisions are exposed:
//! - [`is_private`]: is this address inside the reserved range table?
//! - [`resolves_to_private`]: does this hostname resolve to anything that is?
//!
//! Both fail closed. A hostname whose lookup succeeds with no addresses is
//! private, and so is one where any single address is private. Resolver
//! errors are returned to the caller and never turned into a verdict.

use std::net::IpAddr;

use log::debug;

use super::resolver::{HostResolver, SystemResolver};
use super::types::{AddressVerdict, HostReport};
use crate::error_handling::CheckError;
use crate::ranges::{RangeTable, ReservedRange};

/// Folds IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) into plain IPv4.
///
/// A mapped address reaches the same host as the IPv4 address it embeds, so
/// it is looked up against the IPv4 rows. Every other address is returned
/// unchanged.
pub fn normalize(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map_or(addr, IpAddr::V4),
        IpAddr::V4(_) => addr,
    }
}

/// Returns the reserved block `addr` falls in, after normalization.
pub fn reserved_range(addr: IpAddr) -> Option<&'static ReservedRange> {
    RangeTable::global().matching(normalize(addr))
}

/// Returns `true` if `addr` is loopback, private, link-local, documentation,
/// multicast, reserved, or otherwise non-public.
///
/// # Examples
///
/// ```
/// use private_address_check::is_private;
///
/// assert!(is_private("10.1.2.3".parse().unwrap()));
/// assert!(is_private("::1".parse().unwrap()));
/// assert!(is_private("::ffff:127.0.0.1".parse().unwrap()));
/// assert!(!is_private("8.8.8.8".parse().unwrap()));
/// ```
pub fn is_private(addr: IpAddr) -> bool {
    match reserved_range(addr) {
        Some(range) => {
            debug!("{addr} is in reserved range {range}");
            true
        }
        None => false,
    }
}

/// Parses an IP address literal.
///
/// Surrounding whitespace is ignored and IPv6 literals may be wrapped in
/// brackets (`[::1]`). Anything else is `CheckError::InvalidAddress`.
pub fn parse_address(input: &str) -> Result<IpAddr, CheckError> {
    let trimmed = input.trim();
    let literal = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);
    literal
        .parse::<IpAddr>()
        .map_err(|_| CheckError::InvalidAddress(input.to_string()))
}

/// [`is_private`] for string input.
///
/// # Errors
///
/// Returns `CheckError::InvalidAddress` if `input` is not an IP literal.
/// Malformed input is never reported as public.
pub fn is_private_str(input: &str) -> Result<bool, CheckError> {
    parse_address(input).map(is_private)
}

/// Resolves `hostname` with `resolver`, mapping resolver errors into
/// `CheckError::Resolution` with the original error as the source.
pub fn resolve_addresses<R: HostResolver>(
    resolver: &R,
    hostname: &str,
) -> Result<Vec<IpAddr>, CheckError> {
    resolver
        .lookup(hostname)
        .map_err(|source| CheckError::Resolution {
            hostname: hostname.to_string(),
            source,
        })
}

/// Returns `true` if `hostname` resolves to no addresses or to at least one
/// private address, using the system resolver.
///
/// # Errors
///
/// Returns `CheckError::Resolution` if the lookup itself fails (unknown host,
/// resolver unreachable).
pub fn resolves_to_private(hostname: &str) -> Result<bool, CheckError> {
    resolves_to_private_with(&SystemResolver, hostname)
}

/// [`resolves_to_private`] with an explicit resolver.
pub fn resolves_to_private_with<R: HostResolver>(
    resolver: &R,
    hostname: &str,
) -> Result<bool, CheckError> {
    let addrs = resolve_addresses(resolver, hostname)?;
    if addrs.is_empty() {
        debug!("{hostname} resolved to no addresses; treating as private");
        return Ok(true);
    }
    Ok(addrs.into_iter().any(is_private))
}

/// Resolves `hostname` and classifies every returned address.
///
/// `inspect_host(r, h)?.is_private()` always equals
/// `resolves_to_private_with(r, h)?`; the report additionally says which
/// address matched which range.
pub fn inspect_host<R: HostResolver>(
    resolver: &R,
    hostname: &str,
) -> Result<HostReport, CheckError> {
    let addresses = resolve_addresses(resolver, hostname)?
        .into_iter()
        .map(|addr| AddressVerdict::new(addr, reserved_range(addr)))
        .collect();
    Ok(HostReport {
        hostname: hostname.to_string(),
        addresses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::RangePurpose;
    use std::io;

    struct FixedResolver(Vec<&'static str>);

    impl HostResolver for FixedResolver {
        fn lookup(&self, _hostname: &str) -> io::Result<Vec<IpAddr>> {
            Ok(self.0.iter().map(|s| s.parse().unwrap()).collect())
        }
    }

    struct FailingResolver;

    impl HostResolver for FailingResolver {
        fn lookup(&self, _hostname: &str) -> io::Result<Vec<IpAddr>> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such host"))
        }
    }

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_normalize_mapped() {
        assert_eq!(normalize(ip("::ffff:10.0.0.1")), ip("10.0.0.1"));
        assert_eq!(normalize(ip("::ffff:8.8.8.8")), ip("8.8.8.8"));
    }

    #[test]
    fn test_normalize_leaves_others_alone() {
        assert_eq!(normalize(ip("10.0.0.1")), ip("10.0.0.1"));
        assert_eq!(normalize(ip("::1")), ip("::1"));
        // IPv4-compatible (deprecated) form is not folded
        assert_eq!(normalize(ip("::10.0.0.1")), ip("::10.0.0.1"));
        assert_eq!(normalize(ip("2606:4700:4700::1111")), ip("2606:4700:4700::1111"));
    }

    #[test]
    fn test_is_private_mapped_addresses() {
        assert!(is_private(ip("::ffff:127.0.0.1")));
        assert!(is_private(ip("::ffff:192.168.1.1")));
        assert!(!is_private(ip("::ffff:1.1.1.1")));
    }

    #[test]
    fn test_reserved_range_reports_purpose() {
        let range = reserved_range(ip("100.64.0.1")).unwrap();
        assert_eq!(range.purpose(), RangePurpose::SharedAddressSpace);
        assert!(reserved_range(ip("1.1.1.1")).is_none());
    }

    #[test]
    fn test_parse_address_forms() {
        assert_eq!(parse_address(" 10.0.0.1 ").unwrap(), ip("10.0.0.1"));
        assert_eq!(parse_address("[::1]").unwrap(), ip("::1"));
        assert_eq!(parse_address("fe80::1").unwrap(), ip("fe80::1"));
    }

    #[test]
    fn test_is_private_str_rejects_garbage() {
        for bad in ["", "localhost", "256.0.0.1", "10.0.0.0/8", "[10.0.0.1", "1.2.3"] {
            assert!(
                matches!(is_private_str(bad), Err(CheckError::InvalidAddress(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_resolution_is_private() {
        let resolver = FixedResolver(vec![]);
        assert!(resolves_to_private_with(&resolver, "empty.example").unwrap());
        let report = inspect_host(&resolver, "empty.example").unwrap();
        assert!(report.is_empty());
        assert!(report.is_private());
    }

    #[test]
    fn test_mixed_resolution_is_private() {
        let resolver = FixedResolver(vec!["93.184.216.34", "10.0.0.5"]);
        assert!(resolves_to_private_with(&resolver, "mixed.example").unwrap());
    }

    #[test]
    fn test_all_public_resolution() {
        let resolver = FixedResolver(vec!["93.184.216.34", "2606:2800:220:1::1"]);
        assert!(!resolves_to_private_with(&resolver, "public.example").unwrap());
    }

    #[test]
    fn test_resolution_error_propagates() {
        match resolves_to_private_with(&FailingResolver, "gone.example") {
            Err(CheckError::Resolution { hostname, source }) => {
                assert_eq!(hostname, "gone.example");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Resolution error, got {other:?}"),
        }
        assert!(inspect_host(&FailingResolver, "gone.example").is_err());
    }

    #[test]
    fn test_inspect_host_matches_verdict() {
        let resolver = FixedResolver(vec!["8.8.8.8", "fd00::1"]);
        let report = inspect_host(&resolver, "dual.example").unwrap();
        assert_eq!(report.hostname, "dual.example");
        assert_eq!(report.addresses.len(), 2);
        assert!(!report.addresses[0].is_private());
        assert_eq!(report.addresses[1].purpose, Some(RangePurpose::UniqueLocal));
        assert_eq!(report.addresses[1].range.as_deref(), Some("fc00::/7"));
        assert_eq!(
            report.is_private(),
            resolves_to_private_with(&resolver, "dual.example").unwrap()
        );
    }

    #[test]
    fn test_localhost_resolves_to_private() {
        assert!(resolves_to_private("localhost").unwrap());
    }
}
