//! Binary initialization.
//!
//! The library itself needs no setup: the reserved range table is built
//! lazily on first use. Only the CLI installs a logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
