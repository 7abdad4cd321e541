//! Public property surface of a schema object.

use serde_json::{Map, Value};

use crate::error::FilterError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub readable: bool,
    pub writable: bool,
}

impl PropertyDescriptor {
    pub fn read_write(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            readable: true,
            writable: true,
        }
    }

    pub fn read_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            readable: true,
            writable: false,
        }
    }
}

/// Name-addressed access to an object's public instance properties.
///
/// Names are case-sensitive.
pub trait PublicProperties {
    fn properties(&self) -> Vec<PropertyDescriptor>;

    fn property(&self, name: &str) -> Option<PropertyDescriptor> {
        self.properties().into_iter().find(|p| p.name == name)
    }

    /// Current value; `None` only when no property has this name.
    fn get(&self, name: &str) -> Option<Value>;

    fn set(&mut self, name: &str, value: Value) -> Result<(), FilterError>;
}

/// OpenAPI schema keywords a `Map` schema exposes as properties.
///
/// The shape is fixed, like a typed schema object: a keyword absent from the
/// map reads as `null`, and writing `null` removes it. `$ref` is read-only.
/// Keys outside this list (vendor `x-` extensions and the like) are not
/// properties and are never touched.
pub const SCHEMA_KEYWORDS: &[&str] = &[
    "type",
    "format",
    "title",
    "description",
    "nullable",
    "readOnly",
    "writeOnly",
    "deprecated",
    "default",
    "example",
    "enum",
    "items",
    "properties",
    "additionalProperties",
    "required",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "multipleOf",
    "minLength",
    "maxLength",
    "pattern",
    "minItems",
    "maxItems",
    "uniqueItems",
    "minProperties",
    "maxProperties",
    "allOf",
    "oneOf",
    "anyOf",
    "not",
];

const REF_KEYWORD: &str = "$ref";

impl PublicProperties for Map<String, Value> {
    fn properties(&self) -> Vec<PropertyDescriptor> {
        let mut out: Vec<PropertyDescriptor> = SCHEMA_KEYWORDS
            .iter()
            .map(|name| PropertyDescriptor::read_write(*name))
            .collect();
        out.push(PropertyDescriptor::read_only(REF_KEYWORD));
        out
    }

    fn property(&self, name: &str) -> Option<PropertyDescriptor> {
        if name == REF_KEYWORD {
            Some(PropertyDescriptor::read_only(name))
        } else {
            SCHEMA_KEYWORDS
                .iter()
                .any(|k| *k == name)
                .then(|| PropertyDescriptor::read_write(name))
        }
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.property(name)?;
        Some(Map::get(self, name).cloned().unwrap_or(Value::Null))
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), FilterError> {
        match self.property(name) {
            None => Err(FilterError::InvalidPropertyValue {
                property: name.to_string(),
                reason: "no such property".to_string(),
            }),
            Some(p) if !p.writable => Err(FilterError::ReadOnlyProperty {
                property: name.to_string(),
            }),
            Some(_) => {
                if value.is_null() {
                    self.remove(name);
                } else {
                    self.insert(name.to_string(), value);
                }
                Ok(())
            }
        }
    }
}
