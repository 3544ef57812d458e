//! Error types for grotto.
//!
//! Only caller mistakes (bad configuration) and I/O failures are reported
//! through [`CaveError`]. Broken internal invariants, such as a marching
//! squares configuration outside `0..=15`, panic instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`CaveError`].
pub type Result<T> = std::result::Result<T, CaveError>;

/// Errors that can occur while generating or exporting a cave.
#[derive(Error, Debug)]
pub enum CaveError {
    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error saving mesh to file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}

impl CaveError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        CaveError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_message() {
        let err = CaveError::invalid_param("width", 1, "must be greater than 1");
        assert_eq!(
            err.to_string(),
            "invalid parameter: width = 1 (must be greater than 1)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CaveError = io.into();
        assert!(matches!(err, CaveError::Io(_)));
    }
}
