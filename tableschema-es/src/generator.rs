//! Forward conversion: schema descriptor to engine mapping

use serde_json::{Map, Value};
use tableschema_core::{Field, FieldType, SchemaDescriptor};
use tracing::debug;

use crate::date_format::convert_date_format;
use crate::error::{Error, Result};
use crate::mapping::{Mapping, Property, PropertyMap};

/// Fixed scaling factor applied to `number` fields stored as scaled floats
const NUMBER_SCALING_FACTOR: u32 = 100;

/// Customization hook for mapping generation
///
/// The stock behavior is [`DefaultVariant`]; a variant can seed base
/// entries into the mapping root or intercept individual fields before
/// the fixed type rules apply. The per-field hook is consulted
/// recursively for nested object schemas.
pub trait MappingVariant {
    /// Extra top-level entries seeded into the mapping before generation
    fn base(&self) -> Map<String, Value> {
        Map::new()
    }

    /// Convert one field at the given dotted-path prefix
    fn convert_field(&self, field: &Field, prefix: &str) -> Result<(String, Property)>
    where
        Self: Sized,
    {
        convert_field(self, field, prefix)
    }
}

/// The stock mapping rules with no base entries
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVariant;

impl MappingVariant for DefaultVariant {}

/// One-shot generator holding the mapping accumulator for a single call
///
/// A generator is constructed fresh per conversion; nothing is shared
/// across calls.
#[derive(Debug, Default)]
pub struct MappingGenerator {
    mapping: Mapping,
}

impl MappingGenerator {
    /// Create a generator over an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator seeded with caller-supplied base entries
    pub fn with_base(base: Map<String, Value>) -> Self {
        Self {
            mapping: Mapping::with_base(base),
        }
    }

    /// Build the `properties` tree from the descriptor and return the
    /// completed mapping
    ///
    /// All-or-nothing: any conversion error aborts with no partial output.
    pub fn generate<V: MappingVariant>(
        mut self,
        descriptor: &SchemaDescriptor,
        variant: &V,
    ) -> Result<Mapping> {
        update_properties(variant, &mut self.mapping.properties, descriptor, "")?;
        debug!(fields = descriptor.len(), "generated engine mapping");
        Ok(self.mapping)
    }
}

/// Convert a schema descriptor to an engine mapping using the stock rules
pub fn descriptor_to_mapping(descriptor: &SchemaDescriptor) -> Result<Mapping> {
    descriptor_to_mapping_with(descriptor, &DefaultVariant)
}

/// Convert a schema descriptor to an engine mapping using the given variant
pub fn descriptor_to_mapping_with<V: MappingVariant>(
    descriptor: &SchemaDescriptor,
    variant: &V,
) -> Result<Mapping> {
    MappingGenerator::with_base(variant.base()).generate(descriptor, variant)
}

/// Convert every field of a schema and merge the results into the
/// accumulator, last write winning on duplicate names
fn update_properties<V: MappingVariant>(
    variant: &V,
    properties: &mut PropertyMap,
    schema: &SchemaDescriptor,
    prefix: &str,
) -> Result<()> {
    for field in schema.fields() {
        let (name, property) = variant.convert_field(field, prefix)?;
        properties.insert(name, property);
    }
    Ok(())
}

/// Convert a single field into its `(name, property)` pair using the
/// fixed type rules
///
/// Variants overriding [`MappingVariant::convert_field`] delegate here
/// for the fields they do not intercept.
pub fn convert_field<V: MappingVariant>(
    variant: &V,
    field: &Field,
    prefix: &str,
) -> Result<(String, Property)> {
    let property = convert_type(variant, field.field_type, field, prefix)?;
    Ok((field.name.clone(), property))
}

/// Apply the fixed type-rule table for one field
///
/// `field_type` is passed separately from the field so the `array` arm can
/// re-enter with the declared item type. The nested-schema recursion runs
/// only in the `object` arm.
fn convert_type<V: MappingVariant>(
    variant: &V,
    field_type: FieldType,
    field: &Field,
    prefix: &str,
) -> Result<Property> {
    match field_type {
        FieldType::Integer => Ok(Property::Long {
            ignore_malformed: true,
            index: false,
        }),
        FieldType::Number => Ok(Property::ScaledFloat {
            scaling_factor: NUMBER_SCALING_FACTOR,
            ignore_malformed: true,
            index: false,
        }),
        FieldType::String => Ok(Property::Text),
        FieldType::Boolean => Ok(Property::Boolean),
        FieldType::Date | FieldType::DateTime | FieldType::Time => Ok(Property::Date {
            ignore_malformed: true,
            format: convert_date_format(field.format.as_deref())?,
        }),
        FieldType::Object => {
            let enabled = field.is_indexed();
            let mut properties = PropertyMap::new();
            if enabled {
                let subschema =
                    field.es_schema.as_ref().ok_or_else(|| Error::MissingEsSchema {
                        path: field_path(prefix, field.name()),
                    })?;
                let child_prefix = format!("{}{}.", prefix, field.name());
                update_properties(variant, &mut properties, subschema, &child_prefix)?;
            }
            Ok(Property::Object {
                properties,
                enabled,
                dynamic: false,
            })
        }
        FieldType::Array => {
            let item_type = field.es_item_type.ok_or_else(|| Error::MissingItemType {
                path: field_path(prefix, field.name()),
            })?;
            if item_type == FieldType::Array {
                return Err(Error::NestedArray {
                    path: field_path(prefix, field.name()),
                });
            }
            // The engine treats a single value and an array of values the
            // same for a given field type, so the item type's rule applies
            // unchanged.
            convert_type(variant, item_type, field, prefix)
        }
    }
}

fn field_path(prefix: &str, name: &str) -> String {
    format!("{prefix}{name}")
}
