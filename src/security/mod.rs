//! SSRF checks for addresses, hostnames, and URLs.
//!
//! This module decides whether a destination is non-public:
//! - Single addresses are tested against the reserved [`RangeTable`](crate::RangeTable)
//! - Hostnames are resolved and every returned address is tested
//! - http(s) URLs are reduced to one of the two cases above
//!
//! Every uncertain path is fail-closed. An empty resolver answer counts as
//! private. A resolver error is returned, never guessed at.

mod classifier;
mod resolver;
mod types;
mod url_validation;

pub use classifier::{
    inspect_host, is_private, is_private_str, normalize, parse_address, reserved_range,
    resolve_addresses, resolves_to_private, resolves_to_private_with,
};
pub use resolver::{HostResolver, SystemResolver};
pub use types::{AddressVerdict, HostReport};
pub use url_validation::{url_host, url_targets_private};
