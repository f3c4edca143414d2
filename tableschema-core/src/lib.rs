//! Table Schema descriptor model
//!
//! This crate provides the abstract schema vocabulary shared by the
//! conversion crates: a closed set of field types, field descriptors with
//! their `es:`-prefixed engine hints, and the schema descriptor that
//! groups them.

#![warn(missing_docs)]

pub mod error;
pub mod schema;

// Re-export key types for convenience
pub use error::{Error, Result};
pub use schema::{Field, FieldType, SchemaDescriptor};
