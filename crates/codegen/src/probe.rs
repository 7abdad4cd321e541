//! Capability probe: is the schema framework referenced at all?

use std::collections::{BTreeSet, HashSet};

/// Metadata name of the schema framework's filter interface.
pub const SCHEMA_FILTER_INTERFACE: &str = "Swashbuckle.AspNetCore.SwaggerGen.ISchemaFilter";

/// Symbol lookups the host compilation answers for us.
pub trait SymbolTable {
    /// Whether a type with this fully qualified metadata name resolves.
    fn contains_type(&self, metadata_name: &str) -> bool;
}

impl SymbolTable for HashSet<String> {
    fn contains_type(&self, metadata_name: &str) -> bool {
        self.contains(metadata_name)
    }
}

impl SymbolTable for BTreeSet<String> {
    fn contains_type(&self, metadata_name: &str) -> bool {
        self.contains(metadata_name)
    }
}

impl SymbolTable for [&str] {
    fn contains_type(&self, metadata_name: &str) -> bool {
        self.iter().any(|name| *name == metadata_name)
    }
}

impl<T: SymbolTable + ?Sized> SymbolTable for &T {
    fn contains_type(&self, metadata_name: &str) -> bool {
        (**self).contains_type(metadata_name)
    }
}

/// Returns `false` when the filter interface cannot be resolved.
///
/// A miss only means "don't generate"; it is not reported.
pub fn probe<C: SymbolTable + ?Sized>(compilation: &C) -> bool {
    compilation.contains_type(SCHEMA_FILTER_INTERFACE)
}
