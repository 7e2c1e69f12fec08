//! Unified error types for sheetio.
//!
//! Every tabular source reports failures through this enum, so a row stream
//! can pass them to its caller without translating them.
use thiserror::Error;

/// Main error type for tabular source operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row or field could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The source or its configuration is not usable
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Corrupted or malformed document
    #[error("Corrupted file: {0}")]
    CorruptedFile(String),

    /// Worksheet or other component not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// Unsupported feature or encoding
    #[error("Unsupported feature: {0}")]
    Unsupported(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for sheetio operations.
pub type Result<T> = std::result::Result<T, Error>;
