//! CLI target parsing.

use std::fmt;
use std::net::IpAddr;

use url::Host;

use crate::error_handling::CheckError;
use crate::security::parse_address;

/// One thing to check, as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// An IP literal (`10.0.0.1`, `[::1]`)
    Address(IpAddr),
    /// An http(s) URL; its host decides the verdict
    Url(String),
    /// A hostname to resolve
    Hostname(String),
}

impl Target {
    /// Classifies raw input.
    ///
    /// IP literals win over hostnames, anything with a scheme separator is a
    /// URL, and the rest is parsed as a URL host would be. Bare hostnames are
    /// therefore IDNA-encoded (`bücher.example` becomes
    /// `xn--bcher-kva.example`) and shorthand IPv4 (`0x7f.1`) becomes an
    /// address, exactly as in `http://<host>/`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidHostname` for blank input or input that
    /// contains characters no hostname can carry.
    pub fn parse(input: &str) -> Result<Self, CheckError> {
        let trimmed = input.trim();
        if let Ok(addr) = parse_address(trimmed) {
            return Ok(Target::Address(addr));
        }
        if trimmed.contains("://") {
            return Ok(Target::Url(trimmed.to_string()));
        }
        match Host::parse(trimmed) {
            Ok(Host::Domain(domain)) => Ok(Target::Hostname(domain)),
            Ok(Host::Ipv4(ip)) => Ok(Target::Address(ip.into())),
            Ok(Host::Ipv6(ip)) => Ok(Target::Address(ip.into())),
            Err(_) => Err(CheckError::InvalidHostname(input.to_string())),
        }
    }

    /// Short label used in output.
    pub fn kind(&self) -> &'static str {
        match self {
            Target::Address(_) => "address",
            Target::Url(_) => "url",
            Target::Hostname(_) => "hostname",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Address(addr) => write!(f, "{addr}"),
            Target::Url(url) => f.write_str(url),
            Target::Hostname(host) => f.write_str(host),
        }
    }
}
