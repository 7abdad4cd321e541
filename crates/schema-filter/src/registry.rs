//! Value-object type → underlying primitive, built once at startup.

use std::collections::HashMap;

use valobj_openapi_codegen::WorkItem;

use crate::error::FilterError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueObjectRegistry {
    entries: HashMap<String, String>,
}

impl ValueObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from the same work items the synthesizer consumes.
    pub fn from_work_items<'a, I>(items: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = &'a WorkItem>,
    {
        let mut registry = Self::new();
        for item in items {
            registry.register(&item.type_name, &item.underlying_type_name)?;
        }
        Ok(registry)
    }

    /// Registering the same pair twice is a no-op; a different underlying
    /// type for a known value object is rejected.
    pub fn register(
        &mut self,
        type_id: impl Into<String>,
        underlying_type_name: impl Into<String>,
    ) -> Result<(), FilterError> {
        let type_id = type_id.into();
        let underlying = underlying_type_name.into();
        match self.entries.get(&type_id) {
            Some(existing) if *existing == underlying => Ok(()),
            Some(existing) => Err(FilterError::ConflictingRegistration {
                type_id,
                existing: existing.clone(),
                requested: underlying,
            }),
            None => {
                self.entries.insert(type_id, underlying);
                Ok(())
            }
        }
    }

    pub fn underlying_type(&self, type_id: &str) -> Option<&str> {
        self.entries.get(type_id).map(String::as_str)
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.entries.contains_key(type_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
