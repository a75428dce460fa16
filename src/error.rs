use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Handler type '{tag}' is not supported, must be one of ['toml', 'xml', 'yaml', 'json']")]
    InvalidHandlerType { tag: String },

    #[error("Error '{resource}' configuration resource not found")]
    ResourceNotFound { resource: String },

    #[error("Error parsing '{resource}' configuration resource")]
    Parse { resource: String },

    #[error("The key '{0}' does not exist, and can not be removed")]
    MissingKey(String),

    #[error("Invalid configuration key '{0}': keys must be non-empty strings")]
    InvalidKey(String),

    #[error("The {format} handler requires the '{feature}' feature of resconfig to be enabled")]
    DependencyMissing {
        format: &'static str,
        feature: &'static str,
    },
}

/// Failure of a parser adapter to turn resource content into a mapping.
///
/// Never surfaced to callers directly: the handler logs it and reports
/// [`LoadOutcome::ParseError`](crate::LoadOutcome::ParseError).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[cfg(feature = "yaml")]
    #[error("YAML document has no configuration equivalent: {0}")]
    YamlValue(serde_json::Error),

    #[error("invalid XML: {0}")]
    Xml(String),

    #[error("document root is not a mapping")]
    NotAMapping,

    #[error("document contains no usable configuration data")]
    NoUsableData,

    #[error("document contains an empty key")]
    EmptyKey,
}
