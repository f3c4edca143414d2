//! Error types for mapping conversion

use thiserror::Error;

/// Error type for mapping conversion
#[derive(Error, Debug)]
pub enum Error {
    /// Schema model error
    #[error("Schema error: {0}")]
    Core(#[from] tableschema_core::Error),

    /// Indexed object field without a nested schema
    #[error(
        "Must define es:schema for object field `{path}` \
         (or disable it with es:index=false)"
    )]
    MissingEsSchema {
        /// Dotted path of the offending field
        path: String,
    },

    /// Array field without a declared item type
    #[error("Must define es:itemType for array field `{path}`")]
    MissingItemType {
        /// Dotted path of the offending field
        path: String,
    },

    /// Array field whose item type is itself an array
    #[error("Arrays of arrays are not supported (field `{path}` declares es:itemType=array)")]
    NestedArray {
        /// Dotted path of the offending field
        path: String,
    },

    /// Date format with a strptime directive outside the supported set
    #[error("Unsupported strptime directive `{0}` in date format")]
    UnsupportedDateDirective(String),
}

/// Result type for mapping conversion
pub type Result<T> = std::result::Result<T, Error>;
