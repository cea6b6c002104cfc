//! private_address_check library: SSRF guard for outbound destinations
//!
//! Decides whether an IP address, a hostname, or an http(s) URL points at
//! private, reserved, or otherwise non-public address space, so a server can
//! refuse to make requests on an attacker's behalf to its own infrastructure.
//!
//! # Example
//!
//! ```
//! use private_address_check::{is_private, resolves_to_private};
//!
//! assert!(is_private("192.168.1.1".parse().unwrap()));
//! assert!(!is_private("1.1.1.1".parse().unwrap()));
//!
//! // Resolves through the system resolver; errors are returned, not guessed at
//! assert!(resolves_to_private("localhost").unwrap());
//! ```
//!
//! # Policy
//!
//! - The reserved range table ([`RangeTable`]) is built once and never changes.
//! - IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are checked as IPv4.
//! - A hostname is private if it resolves to *any* private address, or to
//!   none at all.
//! - Resolver failures surface as [`CheckError::Resolution`].
//!
//! This crate does not connect anywhere, cache lookups, or pin the resolved
//! address for the caller's later connection; DNS rebinding between the check
//! and the connect is the caller's concern.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
mod ranges;
mod security;

// Re-export public API
pub use app::{RunReport, Target, TargetOutcome};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{CheckError, ConfigValidationError, InitializationError};
pub use ranges::{RangePurpose, RangeTable, ReservedRange};
pub use run::run_checks;
pub use security::{
    inspect_host, is_private, is_private_str, normalize, parse_address, reserved_range,
    resolve_addresses, resolves_to_private, resolves_to_private_with, url_host,
    url_targets_private, AddressVerdict, HostReport, HostResolver, SystemResolver,
};

// Internal run module (checks every configured target)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{check_targets, RunReport};
    use crate::config::Config;
    use crate::security::HostResolver;

    /// Checks every target in `config` with `resolver`.
    ///
    /// Individual target failures are recorded in the report, not returned;
    /// see [`RunReport::exit_code`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn run_checks<R: HostResolver>(config: &Config, resolver: &R) -> Result<RunReport> {
        config.validate().context("Invalid configuration")?;

        let report = check_targets(resolver, &config.targets, config.resolve_hosts);
        info!(
            "Checked {} target(s): {} private, {} failed",
            report.outcomes.len(),
            report.private_count(),
            report.error_count()
        );
        Ok(report)
    }
}
