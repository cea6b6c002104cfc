//! URL target checks.
//!
//! Answers "would fetching this URL reach non-public address space?" for
//! http:// and https:// URLs:
//! - IP literal hosts (`http://10.0.0.1`, `http://[::1]`) are classified directly
//! - Domain hosts go through the same resolution policy as
//!   [`resolves_to_private`](super::resolves_to_private)
//!
//! Anything else (file://, ftp://, missing host) is rejected as an invalid
//! URL rather than given a verdict.

use url::{Host, Url};

use super::classifier::{is_private, resolves_to_private_with};
use super::resolver::HostResolver;
use crate::error_handling::CheckError;

/// Returns `true` if `url_str` targets private or reserved address space.
///
/// # Errors
///
/// - `CheckError::InvalidUrl` if the URL does not parse, is not http(s), or
///   has no host
/// - `CheckError::Resolution` if the host is a domain and the lookup fails
///
/// # Examples
///
/// ```
/// use private_address_check::{url_targets_private, SystemResolver};
///
/// assert!(url_targets_private(&SystemResolver, "http://127.0.0.1:8080/admin").unwrap());
/// assert!(url_targets_private(&SystemResolver, "http://[fd00::1]/").unwrap());
/// assert!(url_targets_private(&SystemResolver, "file:///etc/passwd").is_err());
/// ```
pub fn url_targets_private<R: HostResolver>(
    resolver: &R,
    url_str: &str,
) -> Result<bool, CheckError> {
    match url_host(url_str)? {
        Host::Ipv4(ip) => Ok(is_private(ip.into())),
        Host::Ipv6(ip) => Ok(is_private(ip.into())),
        Host::Domain(domain) => resolves_to_private_with(resolver, &domain),
    }
}

/// Extracts the host of an http(s) URL.
///
/// IPv4 hosts in decimal, hex, or octal shorthand (`http://2130706433/`) come
/// back canonicalized as `Host::Ipv4`, so they cannot slip past the range
/// table as "domains".
///
/// # Errors
///
/// Returns `CheckError::InvalidUrl` if the URL does not parse, is not http(s),
/// or has no host.
pub fn url_host(url_str: &str) -> Result<Host<String>, CheckError> {
    let url = Url::parse(url_str).map_err(|e| invalid_url(url_str, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid_url(
                url_str,
                format!("unsupported scheme '{scheme}' (only http:// and https:// allowed)"),
            ));
        }
    }

    url.host()
        .map(|host| host.to_owned())
        .ok_or_else(|| invalid_url(url_str, "URL has no host component".to_string()))
}

fn invalid_url(url: &str, reason: String) -> CheckError {
    CheckError::InvalidUrl {
        url: url.to_string(),
        reason,
    }
}
