use thiserror::Error;

/// Failures while loading [`SynthesisConfig`](crate::SynthesisConfig).
///
/// Synthesis itself never fails; only the configuration layer does.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(String),

    #[error("unknown schema customization: {0}")]
    UnknownCustomization(String),

    #[error("invalid namespace: {0:?}")]
    InvalidNamespace(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}
