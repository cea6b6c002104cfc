//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the verdicts printed to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per target
    Plain,
    /// One JSON object per target (JSON Lines)
    Json,
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "private_address_check",
    version,
    about = "Check whether IP addresses, hostnames, or URLs point at private or reserved address space"
)]
pub struct Opt {
    /// IP addresses, hostnames, or http(s) URLs to check
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Log level (overrides RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Verdict output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Do not resolve hostnames; unresolved hostnames are reported as unsafe
    #[arg(long)]
    pub no_resolve: bool,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use private_address_check::Config;
///
/// let config = Config {
///     targets: vec!["10.0.0.1".to_string(), "example.com".to_string()],
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Targets to check
    pub targets: Vec<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Verdict output format
    pub output: OutputFormat,

    /// Resolve hostname targets (when false they are reported unsafe)
    pub resolve_hosts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
            resolve_hosts: true,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            targets: opt.targets,
            log_level: opt.log_level,
            log_format: opt.log_format,
            output: opt.output,
            resolve_hosts: !opt.no_resolve,
        }
    }
}

impl Config {
    /// Checks the configuration before a run.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.targets.is_empty() {
            return Err(ConfigValidationError {
                field: "targets",
                message: "at least one address, hostname, or URL is required".to_string(),
            });
        }
        if let Some(blank) = self.targets.iter().position(|t| t.trim().is_empty()) {
            return Err(ConfigValidationError {
                field: "targets",
                message: format!("target #{} is blank", blank + 1),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_config_resolves_hosts() {
        let config = Config::default();
        assert!(config.resolve_hosts);
        assert_eq!(config.output, OutputFormat::Plain);
    }

    #[test]
    fn test_validate_requires_targets() {
        let err = Config::default().validate().unwrap_err();
        assert_eq!(err.field, "targets");
        assert!(err.message.contains("at least one"));
    }

    #[test]
    fn test_validate_rejects_blank_target() {
        let config = Config {
            targets: vec!["10.0.0.1".to_string(), "  ".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("#2"));
    }

    #[test]
    fn test_from_opt_inverts_no_resolve() {
        let opt = Opt::try_parse_from(["private_address_check", "--no-resolve", "example.com"])
            .unwrap();
        let config = Config::from(opt);
        assert!(!config.resolve_hosts);
        assert_eq!(config.targets, vec!["example.com".to_string()]);
    }
}
