//! Synthesis inputs and outputs.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// One discovered value object.
///
/// Both names are fully qualified. `underlying_type_name` uses the metadata
/// name of the backing primitive, e.g. `System.Int32`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct WorkItem {
    pub type_name: String,
    pub underlying_type_name: String,
}

impl WorkItem {
    pub fn new(type_name: impl Into<String>, underlying_type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            underlying_type_name: underlying_type_name.into(),
        }
    }
}

/// A finished unit of generated source, ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Hint name the host files the source under. Fixed per artifact kind.
    pub name: &'static str,
    pub text: String,
}

/// Which OpenAPI customization, if any, gets generated.
///
/// The numeric values match the flag values the consuming project writes in
/// its global configuration attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "SelectorRepr")]
pub enum SchemaCustomization {
    #[default]
    Omit,
    GenerateSwashbuckleSchemaFilter,
    GenerateSwashbuckleMappingExtensionMethod,
}

impl SchemaCustomization {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Omit => "Omit",
            Self::GenerateSwashbuckleSchemaFilter => "GenerateSwashbuckleSchemaFilter",
            Self::GenerateSwashbuckleMappingExtensionMethod => {
                "GenerateSwashbuckleMappingExtensionMethod"
            }
        }
    }

    pub fn flag(self) -> i64 {
        match self {
            Self::Omit => 0,
            Self::GenerateSwashbuckleSchemaFilter => 1,
            Self::GenerateSwashbuckleMappingExtensionMethod => 2,
        }
    }

    pub fn from_flag(flag: i64) -> Result<Self, ConfigError> {
        match flag {
            0 => Ok(Self::Omit),
            1 => Ok(Self::GenerateSwashbuckleSchemaFilter),
            2 => Ok(Self::GenerateSwashbuckleMappingExtensionMethod),
            other => Err(ConfigError::UnknownCustomization(other.to_string())),
        }
    }
}

impl fmt::Display for SchemaCustomization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaCustomization {
    type Err = ConfigError;

    /// Accepts member names in any case, with or without `_`/`-` separators,
    /// and the numeric flag values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(flag) = trimmed.parse::<i64>() {
            return Self::from_flag(flag);
        }
        let normalized: String = trimmed
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "omit" | "none" | "disabled" => Ok(Self::Omit),
            "generateswashbuckleschemafilter" => Ok(Self::GenerateSwashbuckleSchemaFilter),
            "generateswashbucklemappingextensionmethod" => {
                Ok(Self::GenerateSwashbuckleMappingExtensionMethod)
            }
            _ => Err(ConfigError::UnknownCustomization(s.to_string())),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectorRepr {
    Flag(i64),
    Name(String),
}

impl TryFrom<SelectorRepr> for SchemaCustomization {
    type Error = ConfigError;

    fn try_from(repr: SelectorRepr) -> Result<Self, Self::Error> {
        match repr {
            SelectorRepr::Flag(flag) => Self::from_flag(flag),
            SelectorRepr::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_omit() {
        assert_eq!(SchemaCustomization::default(), SchemaCustomization::Omit);
    }

    #[test]
    fn parses_member_names() {
        assert_eq!(
            "GenerateSwashbuckleSchemaFilter".parse::<SchemaCustomization>(),
            Ok(SchemaCustomization::GenerateSwashbuckleSchemaFilter)
        );
        assert_eq!(
            "generate_swashbuckle_mapping_extension_method".parse::<SchemaCustomization>(),
            Ok(SchemaCustomization::GenerateSwashbuckleMappingExtensionMethod)
        );
        assert_eq!(
            "disabled".parse::<SchemaCustomization>(),
            Ok(SchemaCustomization::Omit)
        );
    }

    #[test]
    fn parses_flags() {
        assert_eq!(
            "2".parse::<SchemaCustomization>(),
            Ok(SchemaCustomization::GenerateSwashbuckleMappingExtensionMethod)
        );
        assert!(matches!(
            "3".parse::<SchemaCustomization>(),
            Err(ConfigError::UnknownCustomization(v)) if v == "3"
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for sel in [
            SchemaCustomization::Omit,
            SchemaCustomization::GenerateSwashbuckleSchemaFilter,
            SchemaCustomization::GenerateSwashbuckleMappingExtensionMethod,
        ] {
            assert_eq!(sel.to_string().parse::<SchemaCustomization>(), Ok(sel));
            assert_eq!(SchemaCustomization::from_flag(sel.flag()), Ok(sel));
        }
    }

    #[test]
    fn rejects_unknown_name() {
        assert!("GenerateEverything".parse::<SchemaCustomization>().is_err());
    }
}
