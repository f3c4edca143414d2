//! Reverse conversion: engine mapping properties to a schema descriptor
//!
//! This direction is deliberately lossy. Date formats, array-ness,
//! nested `es:` hints and indexing flags cannot be recovered; only the
//! six recognized engine type names survive, and anything else degrades
//! to `string`.

use serde_json::{Map, Value};
use tableschema_core::{Field, FieldType, SchemaDescriptor};
use tracing::trace;

/// Build a best-effort schema descriptor from an engine mapping's
/// `properties` map
///
/// Never fails; unrecognized or absent engine types become `string`
/// fields. Output order follows the input map's iteration order.
pub fn mapping_properties_to_descriptor(properties: &Map<String, Value>) -> SchemaDescriptor {
    let mut fields = Vec::with_capacity(properties.len());
    for (name, property) in properties {
        let engine_type = property.get("type").and_then(Value::as_str);
        let field_type = schema_field_type(engine_type);
        trace!(name = %name, engine_type = ?engine_type, schema_type = %field_type, "recovered field");
        fields.push(Field::new(name, field_type));
    }
    SchemaDescriptor::new(fields)
}

/// Reverse type table; unknown engine types default to `string`
fn schema_field_type(engine_type: Option<&str>) -> FieldType {
    match engine_type {
        Some("long") => FieldType::Integer,
        Some("scaled_float") => FieldType::Number,
        Some("text") => FieldType::String,
        Some("boolean") => FieldType::Boolean,
        Some("date") => FieldType::Date,
        Some("object") => FieldType::Object,
        _ => FieldType::String,
    }
}
