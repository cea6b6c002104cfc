//! Error handling.
//!
//! This module provides:
//! - [`CheckError`] for the address/hostname/URL checks
//! - [`InitializationError`] for binary setup (logger)
//! - [`ConfigValidationError`] for configuration checks
//!
//! Propagation is fail-closed throughout: an error is never reinterpreted as
//! "public". Resolver errors are carried as the `source` of
//! [`CheckError::Resolution`] so the original `io::Error` stays inspectable.

mod types;

// Re-export public API
pub use types::{CheckError, ConfigValidationError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_resolution_error_keeps_source() {
        let err = CheckError::Resolution {
            hostname: "nope.invalid".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such host"),
        };
        let source = err
            .source()
            .and_then(|s| s.downcast_ref::<io::Error>())
            .expect("source should be the io::Error");
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("nope.invalid"));
    }

    #[test]
    fn test_invalid_address_message() {
        let err = CheckError::InvalidAddress("999.1.1.1".to_string());
        assert_eq!(err.to_string(), "Invalid IP address: '999.1.1.1'");
    }

    #[test]
    fn test_malformed_range_message() {
        let err = CheckError::MalformedRange {
            literal: "10.0.0.1/8".to_string(),
            reason: "host bits set".to_string(),
        };
        assert!(err.to_string().contains("10.0.0.1/8"));
        assert!(err.to_string().contains("host bits set"));
    }
}
