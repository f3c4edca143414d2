//! Error types for the Table Schema model

use thiserror::Error;

/// Result type for Table Schema model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Table Schema model operations
#[derive(Error, Debug)]
pub enum Error {
    /// A type name outside the closed Table Schema type set
    #[error("Unknown field type: {0}")]
    UnknownType(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
