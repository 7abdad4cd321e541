//! Underlying primitive → JSON-schema `type` keyword.

/// Keyword used for any primitive the table does not know.
pub const FALLBACK_SCHEMA_TYPE: &str = "object";

/// Every keyword [`map_to_json_schema_type`] can return.
pub const SCHEMA_TYPES: [&str; 5] = ["integer", "number", "string", "boolean", "object"];

static PRIMITIVE_SCHEMA_TYPES: &[(&str, &str)] = &[
    ("System.Int32", "integer"),
    ("System.Single", "number"),
    ("System.Decimal", "number"),
    ("System.Double", "number"),
    ("System.String", "string"),
    ("System.Boolean", "boolean"),
];

/// Maps the metadata name of a primitive to its JSON-schema type keyword.
///
/// Total: unrecognized names, including the empty string, map to `object`
/// so an unusual primitive never fails a compilation.
///
/// ```
/// use valobj_openapi_codegen::map_to_json_schema_type;
///
/// assert_eq!(map_to_json_schema_type("System.Int32"), "integer");
/// assert_eq!(map_to_json_schema_type("System.Guid"), "object");
/// ```
pub fn map_to_json_schema_type(primitive_type_name: &str) -> &'static str {
    PRIMITIVE_SCHEMA_TYPES
        .iter()
        .find(|(name, _)| *name == primitive_type_name)
        .map(|(_, keyword)| *keyword)
        .unwrap_or(FALLBACK_SCHEMA_TYPE)
}
