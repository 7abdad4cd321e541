//! A typed OpenAPI schema object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FilterError;
use crate::properties::{PropertyDescriptor, PublicProperties};

/// The subset of an OpenAPI schema object value-object rewriting touches.
///
/// Every field is a public property under its JSON keyword. `$ref` is
/// read-only: a filter may read it but never overwrite it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenApiSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(rename = "readOnly", default)]
    pub read_only: bool,
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<OpenApiSchema>>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

const READ_WRITE: &[&str] = &[
    "type",
    "format",
    "title",
    "description",
    "nullable",
    "readOnly",
    "enum",
    "items",
    "properties",
    "example",
];

impl OpenApiSchema {
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Default::default()
        }
    }

    pub fn reference(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }
}

fn invalid(property: &str, err: impl std::fmt::Display) -> FilterError {
    FilterError::InvalidPropertyValue {
        property: property.to_string(),
        reason: err.to_string(),
    }
}

fn decode<T: serde::de::DeserializeOwned>(property: &str, value: Value) -> Result<T, FilterError> {
    serde_json::from_value(value).map_err(|e| invalid(property, e))
}

fn encode<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl PublicProperties for OpenApiSchema {
    fn properties(&self) -> Vec<PropertyDescriptor> {
        let mut out: Vec<PropertyDescriptor> = READ_WRITE
            .iter()
            .map(|name| PropertyDescriptor::read_write(*name))
            .collect();
        out.push(PropertyDescriptor::read_only("$ref"));
        out
    }

    fn get(&self, name: &str) -> Option<Value> {
        let value = match name {
            "type" => encode(&self.schema_type),
            "format" => encode(&self.format),
            "title" => encode(&self.title),
            "description" => encode(&self.description),
            "nullable" => Value::Bool(self.nullable),
            "readOnly" => Value::Bool(self.read_only),
            "enum" => Value::Array(self.enum_values.clone()),
            "items" => encode(&self.items),
            "properties" => Value::Object(self.properties.clone()),
            "example" => self.example.clone().unwrap_or(Value::Null),
            "$ref" => encode(&self.reference),
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), FilterError> {
        match name {
            "type" => self.schema_type = decode(name, value)?,
            "format" => self.format = decode(name, value)?,
            "title" => self.title = decode(name, value)?,
            "description" => self.description = decode(name, value)?,
            "nullable" => self.nullable = decode(name, value)?,
            "readOnly" => self.read_only = decode(name, value)?,
            "enum" => self.enum_values = decode(name, value)?,
            "items" => self.items = decode(name, value)?,
            "properties" => self.properties = decode(name, value)?,
            "example" => {
                self.example = match value {
                    Value::Null => None,
                    v => Some(v),
                }
            }
            "$ref" => {
                return Err(FilterError::ReadOnlyProperty {
                    property: name.to_string(),
                })
            }
            _ => return Err(invalid(name, "no such property")),
        }
        Ok(())
    }
}
