//! Reflection-based schema filter.
//!
//! The emitted filter does its work when the consuming application builds
//! its OpenAPI document: for a type carrying the value-object marker
//! attribute it generates the schema of the attribute's generic argument and
//! copies that schema's public properties over the wrapper's schema.
//!
//! Property lookup on the generated schema throws `MissingMemberException`
//! on a miss. Nothing at synthesis time can detect that case.

use crate::config::SynthesisConfig;
use crate::probe::SCHEMA_FILTER_INTERFACE;
use crate::types::Artifact;

use super::compilation_unit;

pub const FILTER_ARTIFACT_NAME: &str = "SwashbuckleSchemaFilter_g.cs";
pub const FILTER_CLASS_NAME: &str = "VogenSchemaFilter";

const SCHEMA_FILTER_BODY: &str = r#"{
    private const global::System.Reflection.BindingFlags _flags = global::System.Reflection.BindingFlags.Public | global::System.Reflection.BindingFlags.Instance;

    public void Apply(global::Microsoft.OpenApi.Models.OpenApiSchema schema, global::Swashbuckle.AspNetCore.SwaggerGen.SchemaFilterContext context)
    {
        var attribute = global::System.Linq.Enumerable.FirstOrDefault(
            global::System.Reflection.CustomAttributeExtensions.GetCustomAttributes(context.Type),
            a => a.GetType().IsGenericType && a.GetType().GetGenericTypeDefinition() == typeof(global::Vogen.ValueObjectAttribute<>));

        if (attribute is null)
        {
            return;
        }

        var underlyingType = attribute.GetType().GetGenericArguments()[0];

        var schemaValueObject = context.SchemaGenerator.GenerateSchema(
            underlyingType,
            context.SchemaRepository,
            context.MemberInfo,
            context.ParameterInfo);

        TryCopyPublicProperties(schemaValueObject, schema);
    }

    private static void TryCopyPublicProperties<T>(T oldObject, T newObject) where T : class
    {
        if (ReferenceEquals(oldObject, newObject))
        {
            return;
        }

        var type = typeof(T);

        var propertyList = type.GetProperties(_flags);

        if (propertyList.Length <= 0)
        {
            return;
        }

        foreach (var newObjProp in propertyList)
        {
            var oldProp = type.GetProperty(newObjProp.Name, _flags)
                ?? throw new global::System.MissingMemberException(type.FullName, newObjProp.Name);

            if (!oldProp.CanRead || !newObjProp.CanWrite)
            {
                continue;
            }

            var value = oldProp.GetValue(oldObject);
            newObjProp.SetValue(newObject, value);
        }
    }
}
"#;

fn schema_filter_class() -> String {
    format!(
        "public class {} : global::{}\n{}",
        FILTER_CLASS_NAME, SCHEMA_FILTER_INTERFACE, SCHEMA_FILTER_BODY
    )
}

/// Builds the schema filter artifact. The skeleton is fixed; only the
/// configuration's namespace and tool identity vary.
pub fn generate_schema_filter(config: &SynthesisConfig) -> Artifact {
    Artifact {
        name: FILTER_ARTIFACT_NAME,
        text: compilation_unit(config, &schema_filter_class()),
    }
}
