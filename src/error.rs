//! Error types for the setreg library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for setreg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the setreg library
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read settings source '{}': {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid declaration '{name}': missing required field '{field}'")]
    MissingField { name: String, field: &'static str },

    #[error("Invalid declaration '{name}': unknown value type '{given}'")]
    UnknownType { name: String, given: String },

    #[error("Invalid declaration '{name}': {reason}")]
    InvalidDeclaration { name: String, reason: String },

    // -------------------------------------------------------------------------
    // Source Errors
    // -------------------------------------------------------------------------
    #[error("Failed to parse settings source '{}': {reason}", .path.display())]
    SourceParse { path: PathBuf, reason: String },

    #[error("Unsupported settings source format: '{}'", .path.display())]
    UnsupportedFormat { path: PathBuf },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is a declaration validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. }
                | Error::UnknownType { .. }
                | Error::InvalidDeclaration { .. }
        )
    }

    /// Check if this is a source resolution or parse error
    #[must_use]
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            Error::SourceRead { .. } | Error::SourceParse { .. } | Error::UnsupportedFormat { .. }
        )
    }
}
