//! Table Schema to Elasticsearch mapping conversion
//!
//! This crate converts a Table Schema descriptor into the engine's index
//! mapping configuration, and performs the lossy reverse conversion from
//! mapping properties back to a descriptor. Both directions are pure
//! transformations over in-memory structures; submitting the mapping to
//! an engine is the caller's concern.

#![warn(missing_docs)]

pub mod date_format;
mod error;
pub mod generator;
pub mod mapping;
pub mod reverse;

pub use date_format::{convert_date_format, DEFAULT_DATE_FORMAT};
pub use error::{Error, Result};
pub use generator::{
    convert_field, descriptor_to_mapping, descriptor_to_mapping_with, DefaultVariant,
    MappingGenerator, MappingVariant,
};
pub use mapping::{Mapping, Property, PropertyMap};
pub use reverse::mapping_properties_to_descriptor;

// Re-export core types
pub use tableschema_core::{Field, FieldType, SchemaDescriptor};
