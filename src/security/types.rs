//! Verdict types.

use std::net::IpAddr;

use serde::Serialize;

use crate::ranges::{RangePurpose, ReservedRange};

/// Classification of a single address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressVerdict {
    /// The address as given or as returned by the resolver
    pub address: IpAddr,
    /// The reserved block it fell in (CIDR notation), if any
    pub range: Option<String>,
    /// What that block is reserved for
    pub purpose: Option<RangePurpose>,
}

impl AddressVerdict {
    pub(crate) fn new(address: IpAddr, range: Option<&ReservedRange>) -> Self {
        Self {
            address,
            range: range.map(|r| r.network().to_string()),
            purpose: range.map(ReservedRange::purpose),
        }
    }

    /// `true` if the address is in reserved space
    pub fn is_private(&self) -> bool {
        self.purpose.is_some()
    }
}

/// Every address a hostname resolved to, with a verdict for each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostReport {
    /// The hostname that was resolved
    pub hostname: String,
    /// One entry per resolved address, in resolver order
    pub addresses: Vec<AddressVerdict>,
}

impl HostReport {
    /// Fail-closed verdict: `true` if nothing resolved or anything is private.
    pub fn is_private(&self) -> bool {
        self.addresses.is_empty() || self.addresses.iter().any(AddressVerdict::is_private)
    }

    /// `true` if the resolver answered successfully with no addresses
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
