//! Rewrites a value object's schema into its underlying primitive's schema.
//!
//! Same outcome as the generated reflection filter, driven by an explicit
//! [`ValueObjectRegistry`] instead of attribute lookup at request time.

use serde_json::{Map, Value};
use valobj_openapi_codegen::map_to_json_schema_type;

use crate::error::FilterError;
use crate::properties::PublicProperties;
use crate::registry::ValueObjectRegistry;
use crate::schema::OpenApiSchema;

/// Produces the schema for an underlying primitive type.
pub trait SchemaGenerator<S> {
    fn generate_schema(&self, underlying_type_name: &str) -> S;
}

/// Emits `{ "type": <keyword> }` using the same table as the mapping
/// extension, so both strategies agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveSchemaGenerator;

impl SchemaGenerator<OpenApiSchema> for PrimitiveSchemaGenerator {
    fn generate_schema(&self, underlying_type_name: &str) -> OpenApiSchema {
        OpenApiSchema::of_type(map_to_json_schema_type(underlying_type_name))
    }
}

impl SchemaGenerator<Map<String, Value>> for PrimitiveSchemaGenerator {
    fn generate_schema(&self, underlying_type_name: &str) -> Map<String, Value> {
        let mut schema = Map::new();
        schema.insert(
            "type".to_string(),
            Value::String(map_to_json_schema_type(underlying_type_name).to_string()),
        );
        schema
    }
}

/// Copies `source`'s public properties onto `dest`, driven by `dest`'s
/// property list. Returns how many properties were written.
///
/// Every destination property must exist on `source` by exact name;
/// otherwise [`FilterError::MissingSourceProperty`] is returned. Properties
/// that are not readable on the source or not writable on the destination
/// are skipped. Writes go to a copy of `dest` that replaces it only once
/// every write succeeded, so on any error `dest` is left untouched.
///
/// `source` and `dest` cannot be the same object: the borrow rules forbid
/// it, so there is no identity check.
pub fn copy_public_properties<S: PublicProperties + Clone>(
    source: &S,
    dest: &mut S,
) -> Result<usize, FilterError> {
    let mut writes = Vec::new();
    for dest_prop in dest.properties() {
        let source_prop =
            source
                .property(&dest_prop.name)
                .ok_or_else(|| FilterError::MissingSourceProperty {
                    property: dest_prop.name.clone(),
                })?;
        if !source_prop.readable || !dest_prop.writable {
            continue;
        }
        let value = source
            .get(&source_prop.name)
            .ok_or_else(|| FilterError::MissingSourceProperty {
                property: source_prop.name.clone(),
            })?;
        writes.push((dest_prop.name, value));
    }

    let count = writes.len();
    let mut staged = dest.clone();
    for (name, value) in writes {
        staged.set(&name, value)?;
    }
    *dest = staged;
    Ok(count)
}

pub struct SchemaFilter<G> {
    registry: ValueObjectRegistry,
    generator: G,
}

impl SchemaFilter<PrimitiveSchemaGenerator> {
    pub fn with_primitive_schemas(registry: ValueObjectRegistry) -> Self {
        Self::new(registry, PrimitiveSchemaGenerator)
    }
}

impl<G> SchemaFilter<G> {
    pub fn new(registry: ValueObjectRegistry, generator: G) -> Self {
        Self {
            registry,
            generator,
        }
    }

    pub fn registry(&self) -> &ValueObjectRegistry {
        &self.registry
    }

    /// Rewrites `schema` if `type_id` is a registered value object.
    ///
    /// Returns `Ok(false)` for unregistered types, which are left alone.
    pub fn apply<S>(&self, type_id: &str, schema: &mut S) -> Result<bool, FilterError>
    where
        S: PublicProperties + Clone,
        G: SchemaGenerator<S>,
    {
        let Some(underlying) = self.registry.underlying_type(type_id) else {
            return Ok(false);
        };
        let generated = self.generator.generate_schema(underlying);
        let written = copy_public_properties(&generated, schema)?;
        tracing::debug!(type_id, underlying, written, "rewrote value object schema");
        Ok(true)
    }
}
