//! Configuration constants.

/// Process exit code when every target is public.
pub const EXIT_ALL_PUBLIC: i32 = 0;

/// Process exit code when a target could not be checked (bad input,
/// resolution failure).
pub const EXIT_CHECK_FAILED: i32 = 1;

/// Process exit code when at least one target is private or reserved.
pub const EXIT_PRIVATE_FOUND: i32 = 2;

/// Environment variable read by the logger before CLI overrides.
pub const LOG_ENV_VAR: &str = "RUST_LOG";
