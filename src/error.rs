//! Error types for fuzzmatch.
//!
//! The index operations themselves are total and never fail. Errors only
//! surface at the edges: reading vocabularies, loading configuration and the
//! command line front-end. All of them are represented by [`Error`].
//!
//! # Examples
//!
//! ```
//! use fuzzmatch::error::{Error, Result};
//!
//! fn check_limit(limit: usize) -> Result<()> {
//!     if limit == 0 {
//!         return Err(Error::invalid_config("limit must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_limit(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for fuzzmatch operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors while reading vocabularies or configuration.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A vocabulary line that could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Configuration values that are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for operations that may fail with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new parse error for the given 1-based line number.
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        Error::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = Error::parse(3, "weight is not a number");
        assert_eq!(
            error.to_string(),
            "Parse error on line 3: weight is not a number"
        );

        let error = Error::invalid_config("limit must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: limit must be at least 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::from(io_error);

        match error {
            Error::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = Error::from(json_error);
        assert!(matches!(error, Error::Json(_)));
    }
}
