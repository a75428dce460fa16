use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An untyped configuration value.
pub type ConfigValue = serde_json::Value;

/// A mapping of configuration keys to values, as produced by a parser adapter.
pub type ConfigMap = serde_json::Map<String, ConfigValue>;

/// Result of a single [`Handler::load`](crate::Handler::load) call.
///
/// This is a status, not an error: the [`Container`](crate::Container) turns
/// the two failure outcomes into [`ConfigError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The resource was found, parsed and merged into the store.
    Loaded,
    /// No search directory contains the resource.
    ResourceNotFound,
    /// The resource was found but did not yield a usable mapping.
    ParseError,
}

impl LoadOutcome {
    /// Stable numeric status code.
    pub fn code(self) -> u16 {
        match self {
            LoadOutcome::Loaded => 100,
            LoadOutcome::ResourceNotFound => 101,
            LoadOutcome::ParseError => 102,
        }
    }
}

/// Per-call options for loading a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Prefix every loaded key with the resource's base name
    /// (`"{name}.{key}"`). Defaults to `false`.
    pub prepend_resource_name: bool,
}

impl LoadOptions {
    /// Options with resource-name prefixing turned on.
    pub fn prefixed() -> Self {
        Self {
            prepend_resource_name: true,
        }
    }
}

/// How a freshly parsed mapping is combined with the existing store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Recursive union: scalars are overwritten by the later load, nested
    /// mappings are merged key by key, colliding arrays are concatenated.
    #[default]
    Union,
    /// Flat replacement of top-level keys.
    Overwrite,
}

/// The closed set of supported resource formats.
///
/// Serializes as its [`tag`](HandlerType::tag), so an application can keep
/// the format choice in its own settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerType {
    /// TOML, the native configuration format.
    #[serde(rename = "toml", alias = "native")]
    Native,
    Xml,
    #[serde(alias = "yml")]
    Yaml,
    Json,
}

impl HandlerType {
    pub const ALL: [HandlerType; 4] = [
        HandlerType::Native,
        HandlerType::Xml,
        HandlerType::Yaml,
        HandlerType::Json,
    ];

    /// The canonical tag accepted by [`FromStr`].
    pub fn tag(self) -> &'static str {
        match self {
            HandlerType::Native => "toml",
            HandlerType::Xml => "xml",
            HandlerType::Yaml => "yaml",
            HandlerType::Json => "json",
        }
    }

    /// File extensions stripped from a resource name when deriving its key prefix.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            HandlerType::Native => &["toml"],
            HandlerType::Xml => &["xml"],
            HandlerType::Yaml => &["yaml", "yml"],
            HandlerType::Json => &["json"],
        }
    }
}

impl fmt::Display for HandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for HandlerType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toml" | "native" => Ok(HandlerType::Native),
            "xml" => Ok(HandlerType::Xml),
            "yaml" | "yml" => Ok(HandlerType::Yaml),
            "json" => Ok(HandlerType::Json),
            _ => Err(ConfigError::InvalidHandlerType { tag: s.to_string() }),
        }
    }
}
