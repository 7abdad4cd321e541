//! Integration tests for schema rewriting through the typed registry.

use serde_json::{json, Map, Value};
use valobj_openapi_codegen::WorkItem;
use valobj_openapi_filter::{
    copy_public_properties, FilterError, OpenApiSchema, PropertyDescriptor, PublicProperties,
    SchemaFilter, SchemaGenerator, ValueObjectRegistry, SCHEMA_KEYWORDS,
};

fn registry() -> ValueObjectRegistry {
    ValueObjectRegistry::from_work_items(&[
        WorkItem::new("App.Age", "System.Int32"),
        WorkItem::new("App.Name", "System.String"),
        WorkItem::new("App.Price", "System.Decimal"),
        WorkItem::new("App.Id", "System.Guid"),
    ])
    .unwrap()
}

fn obj(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        other => panic!("expected object, got {}", other),
    }
}

fn wrapper_schema() -> OpenApiSchema {
    OpenApiSchema {
        schema_type: Some("object".into()),
        properties: obj(json!({"value": {"type": "integer", "format": "int32"}})),
        ..Default::default()
    }
}

#[test]
fn rewrites_registered_types() {
    let filter = SchemaFilter::with_primitive_schemas(registry());
    let cases = [
        ("App.Age", "integer"),
        ("App.Name", "string"),
        ("App.Price", "number"),
        ("App.Id", "object"),
    ];
    for (type_id, keyword) in cases {
        let mut schema = wrapper_schema();
        assert!(filter.apply(type_id, &mut schema).unwrap(), "{}", type_id);
        assert_eq!(schema, OpenApiSchema::of_type(keyword), "{}", type_id);
    }
}

#[test]
fn unregistered_type_is_untouched() {
    let filter = SchemaFilter::with_primitive_schemas(registry());
    let mut schema = wrapper_schema();
    assert!(!filter.apply("App.Order", &mut schema).unwrap());
    assert_eq!(schema, wrapper_schema());
}

#[test]
fn map_wrapper_schema_is_rewritten() {
    let filter = SchemaFilter::with_primitive_schemas(registry());
    let mut schema = obj(json!({
        "type": "object",
        "description": "Age",
        "additionalProperties": false,
        "required": ["value"],
        "properties": {"value": {"type": "integer", "format": "int32"}},
        "x-value-object": true
    }));
    assert!(filter.apply("App.Age", &mut schema).unwrap());
    assert_eq!(
        schema,
        obj(json!({"type": "integer", "x-value-object": true}))
    );
}

#[test]
fn map_schema_with_matching_shape() {
    let filter = SchemaFilter::with_primitive_schemas(registry());
    let mut schema = obj(json!({"type": "object"}));
    assert!(filter.apply("App.Name", &mut schema).unwrap());
    assert_eq!(schema, obj(json!({"type": "string"})));
}

#[test]
fn map_reference_is_kept() {
    let filter = SchemaFilter::with_primitive_schemas(registry());
    let mut schema = obj(json!({"$ref": "#/components/schemas/Age"}));
    filter.apply("App.Age", &mut schema).unwrap();
    assert_eq!(
        schema,
        obj(json!({"$ref": "#/components/schemas/Age", "type": "integer"}))
    );
}

#[test]
fn lookup_is_case_sensitive() {
    let source = obj(json!({"type": "integer"}));
    let mut dest = obj(json!({"Type": "object"}));
    copy_public_properties(&source, &mut dest).unwrap();
    assert_eq!(dest, obj(json!({"Type": "object", "type": "integer"})));
}

#[test]
fn map_copy_covers_every_keyword() {
    let source = obj(json!({"type": "integer", "format": "int32"}));
    let mut dest = obj(json!({"type": "object", "minimum": 0}));
    assert_eq!(
        copy_public_properties(&source, &mut dest).unwrap(),
        SCHEMA_KEYWORDS.len()
    );
    assert_eq!(dest, obj(json!({"type": "integer", "format": "int32"})));
}

// -------------------------------------------------- All-or-nothing copying

/// Two fixed properties plus an optional third; rejects `null` writes.
#[derive(Debug, Clone, PartialEq)]
struct Strict {
    a: Value,
    b: Value,
    c: Option<Value>,
}

impl Strict {
    fn new(a: Value, b: Value) -> Self {
        Strict { a, b, c: None }
    }
}

impl PublicProperties for Strict {
    fn properties(&self) -> Vec<PropertyDescriptor> {
        let mut out = vec![
            PropertyDescriptor::read_write("a"),
            PropertyDescriptor::read_write("b"),
        ];
        if self.c.is_some() {
            out.push(PropertyDescriptor::read_write("c"));
        }
        out
    }

    fn get(&self, name: &str) -> Option<Value> {
        match name {
            "a" => Some(self.a.clone()),
            "b" => Some(self.b.clone()),
            "c" => self.c.clone(),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), FilterError> {
        if value.is_null() {
            return Err(FilterError::InvalidPropertyValue {
                property: name.to_string(),
                reason: "null".to_string(),
            });
        }
        match name {
            "a" => self.a = value,
            "b" => self.b = value,
            "c" => self.c = Some(value),
            _ => {
                return Err(FilterError::InvalidPropertyValue {
                    property: name.to_string(),
                    reason: "no such property".to_string(),
                })
            }
        }
        Ok(())
    }
}

#[test]
fn failed_write_leaves_destination_untouched() {
    let source = Strict::new(json!(1), Value::Null);
    let mut dest = Strict::new(json!(0), json!(0));
    assert_eq!(
        copy_public_properties(&source, &mut dest).unwrap_err(),
        FilterError::InvalidPropertyValue {
            property: "b".into(),
            reason: "null".into()
        }
    );
    assert_eq!(dest, Strict::new(json!(0), json!(0)));
}

#[test]
fn missing_source_property_is_fatal() {
    let source = Strict::new(json!(1), json!(2));
    let mut dest = Strict {
        c: Some(json!(0)),
        ..Strict::new(json!(0), json!(0))
    };
    assert_eq!(
        copy_public_properties(&source, &mut dest).unwrap_err(),
        FilterError::MissingSourceProperty {
            property: "c".into()
        }
    );
    assert_eq!(dest.a, json!(0));
    assert_eq!(dest.c, Some(json!(0)));
}

#[test]
fn successful_copy_writes_everything() {
    let source = Strict::new(json!(1), json!(2));
    let mut dest = Strict::new(json!(0), json!(0));
    assert_eq!(copy_public_properties(&source, &mut dest).unwrap(), 2);
    assert_eq!(dest, source);
}

struct FormattedIntegers;

impl SchemaGenerator<OpenApiSchema> for FormattedIntegers {
    fn generate_schema(&self, underlying_type_name: &str) -> OpenApiSchema {
        let mut schema = OpenApiSchema::of_type("integer");
        if underlying_type_name == "System.Int32" {
            schema.format = Some("int32".into());
        }
        schema.nullable = false;
        schema
    }
}

#[test]
fn custom_generator() {
    let filter = SchemaFilter::new(registry(), FormattedIntegers);
    let mut schema = OpenApiSchema {
        description: Some("Age in years".into()),
        ..wrapper_schema()
    };
    filter.apply("App.Age", &mut schema).unwrap();
    assert_eq!(schema.schema_type.as_deref(), Some("integer"));
    assert_eq!(schema.format.as_deref(), Some("int32"));
    // full-shape copy: the generated schema has no description
    assert_eq!(schema.description, None);
}

#[test]
fn reference_survives_rewrite() {
    let filter = SchemaFilter::with_primitive_schemas(registry());
    let mut schema = OpenApiSchema::reference("#/components/schemas/Age");
    filter.apply("App.Age", &mut schema).unwrap();
    assert_eq!(schema.schema_type.as_deref(), Some("integer"));
    assert_eq!(
        schema.get("$ref"),
        Some(json!("#/components/schemas/Age"))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        FilterError::MissingSourceProperty {
            property: "Type".into()
        }
        .to_string(),
        "property \"Type\" not found on generated schema"
    );
}
