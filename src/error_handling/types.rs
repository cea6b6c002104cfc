//! Error type definitions.
//!
//! This module defines the errors returned by the address checks and by
//! binary initialization.

use log::SetLoggerError;
use thiserror::Error;

/// Errors returned by address, hostname, and URL checks.
///
/// None of these is ever turned into a verdict: callers see either a boolean
/// or one of these values.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A literal in the built-in range table did not parse.
    ///
    /// This indicates a defect in the shipped table, not bad input.
    #[error("Malformed reserved range literal '{literal}': {reason}")]
    MalformedRange {
        /// The offending CIDR literal
        literal: String,
        /// Parser message
        reason: String,
    },

    /// The caller passed something that is not an IP address literal.
    #[error("Invalid IP address: '{0}'")]
    InvalidAddress(String),

    /// The caller passed something that is not a usable hostname.
    #[error("Invalid hostname: '{0}'")]
    InvalidHostname(String),

    /// The caller passed a URL that cannot be checked.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as given
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The resolver failed; the resolver's own error is the source.
    #[error("Failed to resolve '{hostname}': {source}")]
    Resolution {
        /// The hostname that was looked up
        hostname: String,
        /// The resolver error, unchanged
        #[source]
        source: std::io::Error,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error returned by [`Config::validate`](crate::Config::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid configuration for '{field}': {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}
