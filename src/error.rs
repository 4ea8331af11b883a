//! Error types for Recman

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Recman operations
pub type Result<T> = std::result::Result<T, RecmanError>;

/// Main error type for Recman
#[derive(Error, Debug)]
pub enum RecmanError {
    /// Command-line argument errors
    #[error("{0}")]
    Argument(#[from] ArgumentError),

    /// Store mutation errors
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Malformed JSON input (item argument or store file)
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Failure to turn records into JSON
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Store file could not be read or written
    #[error("I/O error on '{path}': {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while turning process arguments into an invocation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Flag '{0}' has no value")]
    DanglingFlag(String),

    #[error("-{0} flag has to be specified")]
    Missing(&'static str),

    #[error("Operation {0} not allowed!")]
    UnknownOperation(String),
}

/// Store mutation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Item with id {0} already exists")]
    DuplicateKey(String),

    #[error("Item with id {0} not found")]
    NotFound(String),
}

/// Specialized result type for argument handling
pub type ArgumentResult<T> = std::result::Result<T, ArgumentError>;

/// Specialized result type for store mutations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_messages() {
        assert_eq!(
            StoreError::DuplicateKey("1".to_string()).to_string(),
            "Item with id 1 already exists"
        );
        assert_eq!(
            StoreError::NotFound("7".to_string()).to_string(),
            "Item with id 7 not found"
        );
    }

    #[test]
    fn test_argument_error_messages() {
        assert_eq!(
            ArgumentError::Missing("fileName").to_string(),
            "-fileName flag has to be specified"
        );
        assert_eq!(
            ArgumentError::UnknownOperation("purge".to_string()).to_string(),
            "Operation purge not allowed!"
        );
    }

    #[test]
    fn test_top_level_wraps_transparently() {
        let err: RecmanError = StoreError::NotFound("x".to_string()).into();
        assert_eq!(err.to_string(), "Item with id x not found");
    }
}
