//! `valobj-openapi-filter` - value-object schema rewriting without reflection.
//!
//! Register each value object with its underlying primitive once, then run
//! [`SchemaFilter::apply`] over the schemas your OpenAPI generator produced.
//! A registered type's schema is replaced, property by property, with the
//! schema of its primitive.
//!
//! ```
//! use valobj_openapi_codegen::WorkItem;
//! use valobj_openapi_filter::{OpenApiSchema, SchemaFilter, ValueObjectRegistry};
//!
//! let registry = ValueObjectRegistry::from_work_items(&[
//!     WorkItem::new("App.Age", "System.Int32"),
//! ]).unwrap();
//! let filter = SchemaFilter::with_primitive_schemas(registry);
//!
//! let mut schema = OpenApiSchema::of_type("object");
//! assert!(filter.apply("App.Age", &mut schema).unwrap());
//! assert_eq!(schema.schema_type.as_deref(), Some("integer"));
//! ```

pub mod error;
pub mod filter;
pub mod properties;
pub mod registry;
pub mod schema;

pub use error::FilterError;
pub use filter::{copy_public_properties, PrimitiveSchemaGenerator, SchemaFilter, SchemaGenerator};
pub use properties::{PropertyDescriptor, PublicProperties, SCHEMA_KEYWORDS};
pub use registry::ValueObjectRegistry;
pub use schema::OpenApiSchema;
