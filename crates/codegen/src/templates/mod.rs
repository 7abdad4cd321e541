//! Source skeletons for the two artifact kinds.

mod mapping_extension;
mod schema_filter;

pub use mapping_extension::{
    generate_mapping_extension, EXTENSIONS_ARTIFACT_NAME, EXTENSIONS_CLASS_NAME,
    MAP_TYPES_METHOD_NAME,
};
pub use schema_filter::{generate_schema_filter, FILTER_ARTIFACT_NAME, FILTER_CLASS_NAME};

use crate::config::SynthesisConfig;
use crate::preamble::{generated_code_attribute, PREAMBLE};

pub(crate) const TAB: &str = "    ";

fn indent_lines(text: &str, indent: &str, out: &mut String) {
    for line in text.lines() {
        if !line.is_empty() {
            out.push_str(indent);
            out.push_str(line);
        }
        out.push('\n');
    }
}

/// Wraps one class declaration into a complete compilation unit: preamble,
/// optional namespace block and optional `GeneratedCode` attribute.
pub(crate) fn compilation_unit(config: &SynthesisConfig, class: &str) -> String {
    let mut decl = String::new();
    if let Some(attr) = generated_code_attribute(config) {
        decl.push_str(&attr);
        decl.push('\n');
    }
    decl.push_str(class);

    let mut out = String::with_capacity(PREAMBLE.len() + decl.len() + 64);
    out.push_str(PREAMBLE);
    out.push('\n');
    match config.namespace.as_deref() {
        Some(ns) => {
            out.push_str(&format!("namespace {}\n{{\n", ns));
            indent_lines(&decl, TAB, &mut out);
            out.push_str("}\n");
        }
        None => indent_lines(&decl, "", &mut out),
    }
    out
}
