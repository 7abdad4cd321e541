//! Per-item registration lines for the mapping extension.

use crate::type_map::map_to_json_schema_type;
use crate::types::WorkItem;

/// One `MapType<T>` call binding the value object to its primitive's schema.
///
/// ```
/// use valobj_openapi_codegen::{format_registration, WorkItem};
///
/// let line = format_registration(&WorkItem::new("App.Age", "System.Int32"));
/// assert!(line.contains("MapType<App.Age>"));
/// assert!(line.contains(r#"Type = "integer""#));
/// ```
pub fn format_registration(item: &WorkItem) -> String {
    let schema_type = map_to_json_schema_type(&item.underlying_type_name);
    tracing::trace!(
        type_name = %item.type_name,
        underlying = %item.underlying_type_name,
        schema_type,
        "formatting schema registration"
    );
    format!(
        "global::Microsoft.Extensions.DependencyInjection.SwaggerGenOptionsExtensions.MapType<{}>(o, () => new global::Microsoft.OpenApi.Models.OpenApiSchema {{ Type = \"{}\" }});",
        item.type_name, schema_type
    )
}

/// All registration lines, in input order, each indented and newline-terminated.
///
/// Duplicate items produce duplicate lines.
pub fn format_registrations(items: &[WorkItem], indent: &str) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(indent);
        out.push_str(&format_registration(item));
        out.push('\n');
    }
    out
}
