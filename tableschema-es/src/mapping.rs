//! Elasticsearch mapping output structures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Map from field name to per-field property specification
pub type PropertyMap = BTreeMap<String, Property>;

/// Per-field property specification of the target engine
///
/// The tag is the engine's field type name; variant payloads carry the
/// formatting and indexing directives the generator emits for that type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    /// 64-bit integer, stored but not indexed
    Long {
        /// Skip values the engine cannot parse instead of rejecting the document
        ignore_malformed: bool,
        /// Whether the engine builds query structures for this field
        index: bool,
    },

    /// Fixed-precision decimal, stored but not indexed
    ScaledFloat {
        /// Multiplier applied before storing as an integer
        scaling_factor: u32,
        /// Skip values the engine cannot parse instead of rejecting the document
        ignore_malformed: bool,
        /// Whether the engine builds query structures for this field
        index: bool,
    },

    /// Analyzed full-text field
    Text,

    /// True/false field
    Boolean,

    /// Date field with an explicit accepted pattern
    Date {
        /// Skip values the engine cannot parse instead of rejecting the document
        ignore_malformed: bool,
        /// Accepted date pattern in the engine's syntax
        format: String,
    },

    /// Nested object with its own property map
    Object {
        /// Properties of the nested fields; empty when disabled
        properties: PropertyMap,
        /// Whether the engine expands this object at all
        enabled: bool,
        /// Whether the engine may add unmapped sub-fields on its own
        dynamic: bool,
    },
}

/// A complete engine mapping descriptor
///
/// Holds the generated `properties` tree plus any caller-supplied base
/// entries, which serialize alongside it at the top level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mapping {
    /// Caller-supplied base entries merged into the mapping root
    #[serde(flatten)]
    pub base: Map<String, Value>,

    /// Generated per-field property specifications
    pub properties: PropertyMap,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapping seeded with caller-supplied base entries
    pub fn with_base(base: Map<String, Value>) -> Self {
        Self {
            base,
            properties: PropertyMap::new(),
        }
    }
}
