//! Global synthesis configuration.
//!
//! The consuming project states its choice once per compilation. Everything
//! in here is optional; an empty document is the same as "generate nothing".

use serde::Deserialize;
use valobj_openapi_util::is_qualified_name;

use crate::error::ConfigError;
use crate::types::SchemaCustomization;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Selected emission strategy. `None` resolves to [`SchemaCustomization::Omit`].
    #[serde(default)]
    pub customizations: Option<SchemaCustomization>,

    /// Namespace wrapping the generated classes. Global namespace when absent.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Tool name stamped into a `GeneratedCode` attribute on generated classes.
    #[serde(default)]
    pub generator_name: Option<String>,

    /// Tool version for the `GeneratedCode` attribute. Defaults to this
    /// crate's version when only `generator_name` is given.
    #[serde(default)]
    pub generator_version: Option<String>,
}

impl SynthesisConfig {
    pub fn new(customizations: SchemaCustomization) -> Self {
        Self {
            customizations: Some(customizations),
            ..Default::default()
        }
    }

    /// Parses and validates a TOML document.
    ///
    /// ```
    /// use valobj_openapi_codegen::{SchemaCustomization, SynthesisConfig};
    ///
    /// let config = SynthesisConfig::from_toml_str(
    ///     r#"customizations = "GenerateSwashbuckleSchemaFilter""#,
    /// ).unwrap();
    /// assert_eq!(
    ///     config.effective_customization(),
    ///     SchemaCustomization::GenerateSwashbuckleSchemaFilter
    /// );
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SynthesisConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the fields the TOML loader and the `with_*` builders check.
    ///
    /// The fields are public, so a config assembled by struct literal is only
    /// checked when this is called.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ns) = &self.namespace {
            if !is_qualified_name(ns) {
                return Err(ConfigError::InvalidNamespace(ns.clone()));
            }
        }
        if matches!(self.generator_name.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(ConfigError::Empty("generator_name"));
        }
        if matches!(self.generator_version.as_deref(), Some(version) if version.trim().is_empty()) {
            return Err(ConfigError::Empty("generator_version"));
        }
        Ok(())
    }

    pub fn effective_customization(&self) -> SchemaCustomization {
        self.customizations.unwrap_or_default()
    }

    /// `(name, version)` for the `GeneratedCode` attribute, if one is wanted.
    pub fn generated_code_identity(&self) -> Option<(&str, &str)> {
        let name = self.generator_name.as_deref()?;
        let version = self
            .generator_version
            .as_deref()
            .unwrap_or(env!("CARGO_PKG_VERSION"));
        Some((name, version))
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Result<Self, ConfigError> {
        self.namespace = Some(namespace.into());
        self.validate()?;
        Ok(self)
    }

    pub fn with_generator(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        self.generator_name = Some(name.into());
        self.generator_version = Some(version.into());
        self.validate()?;
        Ok(self)
    }
}
