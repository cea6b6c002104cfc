//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (exit codes, environment variables)
//! - CLI option types and parsing
//! - The library-level [`Config`] built from those options

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
