//! Schema descriptor model for Table Schema fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Abstract field type of a Table Schema field
///
/// The type universe is closed: a descriptor carrying any other type name
/// is rejected when it is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Whole number
    Integer,

    /// Decimal number
    Number,

    /// UTF-8 text
    String,

    /// True/false value
    Boolean,

    /// Calendar date
    Date,

    /// Date with time of day
    DateTime,

    /// Time of day
    Time,

    /// Nested record with its own field list (carried in `es:schema`)
    Object,

    /// Sequence of values of a single item type (carried in `es:itemType`)
    Array,
}

impl FieldType {
    /// The wire name of this type as it appears in a descriptor
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::String => "string",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Time => "time",
            FieldType::Object => "object",
            FieldType::Array => "array",
        }
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "integer" => Ok(FieldType::Integer),
            "number" => Ok(FieldType::Number),
            "string" => Ok(FieldType::String),
            "boolean" => Ok(FieldType::Boolean),
            "date" => Ok(FieldType::Date),
            "datetime" => Ok(FieldType::DateTime),
            "time" => Ok(FieldType::Time),
            "object" => Ok(FieldType::Object),
            "array" => Ok(FieldType::Array),
            other => Err(Error::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field in a schema descriptor, with a name, an abstract type, and
/// optional `es:` extension hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Name of the field, unique within its enclosing field list
    pub name: String,

    /// Abstract type of the field
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Date/time pattern, either `fmt:`-prefixed strptime or absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Whether the field is indexed/expanded by the engine; absent means true
    #[serde(rename = "es:index", default, skip_serializing_if = "Option::is_none")]
    pub es_index: Option<bool>,

    /// Nested schema describing this field's own fields, required for
    /// indexed `object` fields
    #[serde(rename = "es:schema", default, skip_serializing_if = "Option::is_none")]
    pub es_schema: Option<SchemaDescriptor>,

    /// Item type carried by `array` fields
    #[serde(rename = "es:itemType", default, skip_serializing_if = "Option::is_none")]
    pub es_item_type: Option<FieldType>,
}

impl Field {
    /// Create a new field with no extension hints
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            format: None,
            es_index: None,
            es_schema: None,
            es_item_type: None,
        }
    }

    /// Get the name of this field
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the engine indexes this field (`es:index`, default true)
    pub fn is_indexed(&self) -> bool {
        self.es_index.unwrap_or(true)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.field_type)
    }
}

/// A schema descriptor: an ordered list of fields
///
/// Field order matters only for output determinism; names are assumed
/// unique within one field list, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    /// Fields in this schema
    pub fields: Vec<Field>,
}

impl SchemaDescriptor {
    /// Create a new schema descriptor with the given fields
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Get all fields in this schema
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get the number of fields in this schema
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if this schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize this descriptor to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Serialization)
    }

    /// Deserialize a descriptor from JSON
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(Error::Serialization)
    }
}

impl fmt::Display for SchemaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Schema: {} fields", self.fields.len())?;
        for field in &self.fields {
            writeln!(f, "  {}", field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("integer", FieldType::Integer)]
    #[test_case("number", FieldType::Number)]
    #[test_case("string", FieldType::String)]
    #[test_case("boolean", FieldType::Boolean)]
    #[test_case("date", FieldType::Date)]
    #[test_case("datetime", FieldType::DateTime)]
    #[test_case("time", FieldType::Time)]
    #[test_case("object", FieldType::Object)]
    #[test_case("array", FieldType::Array)]
    fn test_field_type_wire_names(name: &str, expected: FieldType) {
        assert_eq!(name.parse::<FieldType>().unwrap(), expected);
        assert_eq!(expected.to_string(), name);
    }

    #[test]
    fn test_unknown_field_type_rejected() {
        let err = "geo".parse::<FieldType>().unwrap_err();
        assert!(matches!(err, Error::UnknownType(ref t) if t == "geo"));
    }

    #[test]
    fn test_descriptor_json_round_trip() {
        let descriptor = SchemaDescriptor::new(vec![
            Field::new("id", FieldType::Integer),
            Field {
                format: Some("fmt:%Y-%m-%d".to_string()),
                ..Field::new("born", FieldType::Date)
            },
            Field {
                es_item_type: Some(FieldType::String),
                ..Field::new("tags", FieldType::Array)
            },
        ]);

        let json = descriptor.to_json().unwrap();
        let parsed = SchemaDescriptor::from_json(&json).unwrap();
        assert_eq!(parsed, descriptor);
    }

    #[test]
    fn test_descriptor_wire_vocabulary() {
        let json = r#"{
            "fields": [
                {"name": "meta", "type": "object", "es:index": false},
                {"name": "tags", "type": "array", "es:itemType": "string"}
            ]
        }"#;

        let descriptor = SchemaDescriptor::from_json(json).unwrap();
        assert_eq!(descriptor.len(), 2);
        assert!(!descriptor.fields[0].is_indexed());
        assert_eq!(descriptor.fields[1].es_item_type, Some(FieldType::String));

        // Hints serialize back under their es:-prefixed names
        let out = descriptor.to_json().unwrap();
        assert!(out.contains("\"es:index\":false"));
        assert!(out.contains("\"es:itemType\":\"string\""));
    }

    #[test]
    fn test_descriptor_with_unknown_type_fails_to_parse() {
        let json = r#"{"fields": [{"name": "loc", "type": "geo"}]}"#;
        assert!(SchemaDescriptor::from_json(json).is_err());
    }

    #[test]
    fn test_index_defaults_to_true() {
        let field = Field::new("x", FieldType::String);
        assert!(field.is_indexed());
    }
}
