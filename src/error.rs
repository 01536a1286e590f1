//! Custom error types for Alokasi
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Why a draft entry could not be committed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidEntryReason {
    #[error("label is required")]
    EmptyLabel,

    #[error("amount is required")]
    EmptyAmount,

    #[error("amount is too large")]
    Overflow,
}

/// Errors raised by ledger operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// A draft had an empty label or amount at commit time
    #[error("Invalid entry: {0}")]
    InvalidEntry(InvalidEntryReason),
}

/// The main error type for Alokasi operations
#[derive(Error, Debug)]
pub enum AlokasiError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Bad command-line input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Ledger rejected an operation
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl AlokasiError {
    /// Check if this is a rejected ledger entry
    pub fn is_invalid_entry(&self) -> bool {
        matches!(self, Self::Ledger(LedgerError::InvalidEntry(_)))
    }
}

impl From<std::io::Error> for AlokasiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AlokasiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Alokasi operations
pub type AlokasiResult<T> = Result<T, AlokasiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlokasiError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_entry_display() {
        let err = LedgerError::InvalidEntry(InvalidEntryReason::EmptyLabel);
        assert_eq!(err.to_string(), "Invalid entry: label is required");

        let err: AlokasiError = LedgerError::InvalidEntry(InvalidEntryReason::EmptyAmount).into();
        assert_eq!(err.to_string(), "Invalid entry: amount is required");
        assert!(err.is_invalid_entry());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AlokasiError = io_err.into();
        assert!(matches!(err, AlokasiError::Io(_)));
        assert!(!err.is_invalid_entry());
    }
}
