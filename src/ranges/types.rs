//! Reserved range types.

use std::fmt;
use std::net::IpAddr;

use ip_network::IpNetwork;
use serde::Serialize;
use strum_macros::{EnumIter as EnumIterMacro, IntoStaticStr};

/// Why a block of address space is considered non-public.
///
/// One variant per row kind in the IANA special-purpose registries that the
/// range table draws from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, IntoStaticStr, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RangePurpose {
    /// Loopback (127.0.0.0/8, ::1/128)
    Loopback,
    /// "This network", valid only as a source address (0.0.0.0/8)
    ThisNetwork,
    /// Unspecified address (::/128)
    Unspecified,
    /// Link-local (169.254.0.0/16, fe80::/10)
    LinkLocal,
    /// Private-use (RFC 1918)
    PrivateUse,
    /// Shared Address Space / carrier-grade NAT (100.64.0.0/10)
    SharedAddressSpace,
    /// IETF protocol assignments (192.0.0.0/24)
    IetfProtocolAssignments,
    /// Documentation and example ranges (TEST-NET-1..3, 2001:db8::/32)
    Documentation,
    /// 6to4 relay anycast (192.88.99.0/24)
    SixToFourRelay,
    /// Network benchmark testing (198.18.0.0/15)
    Benchmarking,
    /// Multicast (224.0.0.0/4, ff00::/8)
    Multicast,
    /// Reserved for future use (240.0.0.0/4)
    Reserved,
    /// Limited broadcast (255.255.255.255/32)
    LimitedBroadcast,
    /// IPv4/IPv6 translation (64:ff9b::/96)
    Translation,
    /// Discard-only prefix (100::/64)
    DiscardOnly,
    /// Teredo tunneling (2001::/32)
    Teredo,
    /// ORCHID and ORCHIDv2 (2001:10::/28, 2001:20::/28)
    Orchid,
    /// 6to4 (2002::/16)
    SixToFour,
    /// Unique local addresses (fc00::/7)
    UniqueLocal,
}

impl RangePurpose {
    /// Returns a short code for the purpose (for JSON output and logs)
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns a human-readable description of the purpose
    pub fn description(&self) -> &'static str {
        match self {
            RangePurpose::Loopback => "Loopback",
            RangePurpose::ThisNetwork => "Current network (only valid as source address)",
            RangePurpose::Unspecified => "Unspecified address",
            RangePurpose::LinkLocal => "Link-local",
            RangePurpose::PrivateUse => "Private network",
            RangePurpose::SharedAddressSpace => "Shared Address Space (carrier-grade NAT)",
            RangePurpose::IetfProtocolAssignments => "IETF Protocol Assignments",
            RangePurpose::Documentation => "Documentation and examples",
            RangePurpose::SixToFourRelay => "IPv6 to IPv4 relay",
            RangePurpose::Benchmarking => "Network benchmark tests",
            RangePurpose::Multicast => "Multicast",
            RangePurpose::Reserved => "Reserved (former Class E network)",
            RangePurpose::LimitedBroadcast => "Limited broadcast",
            RangePurpose::Translation => "IPv4/IPv6 translation",
            RangePurpose::DiscardOnly => "Discard-only prefix",
            RangePurpose::Teredo => "Teredo tunneling",
            RangePurpose::Orchid => "ORCHID",
            RangePurpose::SixToFour => "6to4",
            RangePurpose::UniqueLocal => "Unique local address",
        }
    }
}

impl fmt::Display for RangePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One CIDR block of non-public address space.
///
/// Constructed only by [`RangeTable::build`](super::RangeTable::build); the
/// network is parsed strictly, so a literal with host bits set never makes it
/// into a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedRange {
    network: IpNetwork,
    purpose: RangePurpose,
    reference: &'static str,
}

impl ReservedRange {
    pub(crate) fn new(network: IpNetwork, purpose: RangePurpose, reference: &'static str) -> Self {
        Self {
            network,
            purpose,
            reference,
        }
    }

    /// The CIDR block
    pub fn network(&self) -> &IpNetwork {
        &self.network
    }

    /// What the block is reserved for
    pub fn purpose(&self) -> RangePurpose {
        self.purpose
    }

    /// The RFC that assigns the block
    pub fn reference(&self) -> &'static str {
        self.reference
    }

    /// `true` if the block is an IPv4 block
    pub fn is_ipv4(&self) -> bool {
        matches!(self.network, IpNetwork::V4(_))
    }

    /// Family-correct containment test.
    ///
    /// An address of the other family never matches; this is not an error.
    pub fn contains(&self, addr: IpAddr) -> bool {
        match (&self.network, addr) {
            (IpNetwork::V4(net), IpAddr::V4(ip)) => net.contains(ip),
            (IpNetwork::V6(net), IpAddr::V6(ip)) => net.contains(ip),
            _ => false,
        }
    }
}

impl fmt::Display for ReservedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.network, self.purpose, self.reference)
    }
}
