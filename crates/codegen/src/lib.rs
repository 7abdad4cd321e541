//! `valobj-openapi-codegen` - Swashbuckle schema artifacts for value objects.
//!
//! Given the global configuration, the compilation's symbol table and the
//! discovered value objects, [`synthesize`] produces at most one C# source
//! unit that lets Swashbuckle describe each value object as its underlying
//! primitive:
//!
//! - `GenerateSwashbuckleSchemaFilter` emits a reflection-based
//!   `ISchemaFilter` (`SwashbuckleSchemaFilter_g.cs`);
//! - `GenerateSwashbuckleMappingExtensionMethod` emits a `MapVogenTypes`
//!   extension with one `MapType<T>` call per value object
//!   (`SwashbuckleSchemaExtensions_g.cs`).
//!
//! Nothing is emitted if the compilation does not reference Swashbuckle.
//!
//! # Example
//!
//! ```
//! use valobj_openapi_codegen::{
//!     synthesize, SchemaCustomization, SynthesisConfig, WorkItem, SCHEMA_FILTER_INTERFACE,
//! };
//!
//! let config = SynthesisConfig::new(SchemaCustomization::GenerateSwashbuckleMappingExtensionMethod);
//! let symbols: &[&str] = &[SCHEMA_FILTER_INTERFACE];
//! let items = [WorkItem::new("App.Age", "System.Int32")];
//!
//! let artifact = synthesize(Some(&config), symbols, &items).unwrap();
//! assert_eq!(artifact.name, "SwashbuckleSchemaExtensions_g.cs");
//! assert!(artifact.text.contains(r#"MapType<App.Age>(o, () => new global::Microsoft.OpenApi.Models.OpenApiSchema { Type = "integer" })"#));
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod preamble;
pub mod probe;
pub mod synthesize;
pub mod templates;
pub mod type_map;
pub mod types;
pub mod work_items;

pub use config::SynthesisConfig;
pub use error::ConfigError;
pub use host::{generate, CollectingSink, SourceSink};
pub use preamble::PREAMBLE;
pub use probe::{probe, SymbolTable, SCHEMA_FILTER_INTERFACE};
pub use synthesize::synthesize;
pub use templates::{
    generate_mapping_extension, generate_schema_filter, EXTENSIONS_ARTIFACT_NAME,
    FILTER_ARTIFACT_NAME,
};
pub use type_map::{map_to_json_schema_type, FALLBACK_SCHEMA_TYPE, SCHEMA_TYPES};
pub use types::{Artifact, SchemaCustomization, WorkItem};
pub use work_items::{format_registration, format_registrations};
