//! Text shared by every generated source unit.

use valobj_openapi_util::as_string;

use crate::config::SynthesisConfig;

pub const PREAMBLE: &str = "\
// ------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by a source generator.
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
// ------------------------------------------------------------------------------

// Suppress warnings about [Obsolete] member usage in generated code.
#pragma warning disable CS0618

// Suppress warnings for 'Override methods on comparable types'.
#pragma warning disable CA1036

// Suppress Error MA0097 : A class that implements IComparable<T> or IComparable should override comparison operators
#pragma warning disable MA0097

// Suppress warning for 'The annotation for nullable reference types should only be used in code within a '#nullable' annotations context. Auto-generated code requires an explicit '#nullable' directive in source.'
// The generator copies signatures from the BCL, e.g. for `TryParse`, and some of those have nullable annotations.
#pragma warning disable CS8669

// Suppress warnings about CS1591: Missing XML comment for publicly visible type or member 'Type_or_Member'
#pragma warning disable CS1591

#nullable enable
";

/// `[GeneratedCode(...)]` line for the configured tool, if any.
pub(crate) fn generated_code_attribute(config: &SynthesisConfig) -> Option<String> {
    let (name, version) = config.generated_code_identity()?;
    Some(format!(
        "[global::System.CodeDom.Compiler.GeneratedCode({}, {})]",
        as_string(name),
        as_string(version)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_marks_file_generated() {
        assert!(PREAMBLE.contains("<auto-generated>"));
        assert!(PREAMBLE.ends_with("#nullable enable\n"));
    }

    #[test]
    fn attribute_escapes_values() {
        let config = SynthesisConfig::default().with_generator("My \"Gen\"", "1.0").unwrap();
        assert_eq!(
            generated_code_attribute(&config).as_deref(),
            Some(r#"[global::System.CodeDom.Compiler.GeneratedCode("My \"Gen\"", "1.0")]"#)
        );
    }

    #[test]
    fn no_attribute_by_default() {
        assert_eq!(generated_code_attribute(&SynthesisConfig::default()), None);
    }
}
