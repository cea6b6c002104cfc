//! The canonical list of non-public address blocks.
//!
//! Sources:
//! - https://www.iana.org/assignments/iana-ipv4-special-registry/iana-ipv4-special-registry.xhtml
//! - https://www.iana.org/assignments/iana-ipv6-special-registry/iana-ipv6-special-registry.xhtml
//!
//! Rows may be added; removing or narrowing one opens an SSRF bypass.

use super::RangePurpose;

/// `(cidr literal, purpose, reference)` for every reserved block.
pub(crate) const RESERVED_RANGES: &[(&str, RangePurpose, &str)] = &[
    // IPv4
    ("127.0.0.0/8", RangePurpose::Loopback, "RFC 1122"),
    ("0.0.0.0/8", RangePurpose::ThisNetwork, "RFC 791"),
    ("169.254.0.0/16", RangePurpose::LinkLocal, "RFC 3927"),
    ("10.0.0.0/8", RangePurpose::PrivateUse, "RFC 1918"),
    ("100.64.0.0/10", RangePurpose::SharedAddressSpace, "RFC 6598"),
    ("172.16.0.0/12", RangePurpose::PrivateUse, "RFC 1918"),
    ("192.0.0.0/24", RangePurpose::IetfProtocolAssignments, "RFC 6890"),
    ("192.0.2.0/24", RangePurpose::Documentation, "RFC 5737"), // TEST-NET-1
    ("192.88.99.0/24", RangePurpose::SixToFourRelay, "RFC 7526"), // includes 2002::/16
    ("192.168.0.0/16", RangePurpose::PrivateUse, "RFC 1918"),
    ("198.18.0.0/15", RangePurpose::Benchmarking, "RFC 2544"),
    ("198.51.100.0/24", RangePurpose::Documentation, "RFC 5737"), // TEST-NET-2
    ("203.0.113.0/24", RangePurpose::Documentation, "RFC 5737"), // TEST-NET-3
    ("224.0.0.0/4", RangePurpose::Multicast, "RFC 5771"),
    ("240.0.0.0/4", RangePurpose::Reserved, "RFC 1112"),
    ("255.255.255.255/32", RangePurpose::LimitedBroadcast, "RFC 919"),
    // IPv6
    ("::1/128", RangePurpose::Loopback, "RFC 4291"),
    ("::/128", RangePurpose::Unspecified, "RFC 4291"),
    ("64:ff9b::/96", RangePurpose::Translation, "RFC 6052"),
    ("100::/64", RangePurpose::DiscardOnly, "RFC 6666"),
    ("2001::/32", RangePurpose::Teredo, "RFC 4380"),
    ("2001:10::/28", RangePurpose::Orchid, "RFC 4843"), // deprecated
    ("2001:20::/28", RangePurpose::Orchid, "RFC 7343"),
    ("2001:db8::/32", RangePurpose::Documentation, "RFC 3849"),
    ("2002::/16", RangePurpose::SixToFour, "RFC 3056"),
    ("fc00::/7", RangePurpose::UniqueLocal, "RFC 4193"),
    ("fe80::/10", RangePurpose::LinkLocal, "RFC 4291"),
    ("ff00::/8", RangePurpose::Multicast, "RFC 4291"),
];
