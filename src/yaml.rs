//! Handler for YAML resources.
//!
//! YAML support lives behind the `yaml` Cargo feature. Without it,
//! [`YamlHandler::new`] fails with [`ConfigError::DependencyMissing`] instead
//! of deferring the problem to the first load.

use tracing::debug;

use crate::error::{ConfigError, ParseError};
use crate::file::ResDirs;
use crate::handler::{Handler, HandlerCore};
use crate::types::{ConfigMap, HandlerType, LoadOptions, LoadOutcome};

#[derive(Debug, Clone)]
pub struct YamlHandler {
    core: HandlerCore,
}

impl YamlHandler {
    pub fn new(res_dirs: ResDirs) -> Result<Self, ConfigError> {
        if !cfg!(feature = "yaml") {
            return Err(ConfigError::DependencyMissing {
                format: "YAML",
                feature: "yaml",
            });
        }
        debug!(dirs = res_dirs.len(), "creating YAML config handler");
        Ok(Self {
            core: HandlerCore::new(res_dirs),
        })
    }
}

impl Handler for YamlHandler {
    fn core(&self) -> &HandlerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut HandlerCore {
        &mut self.core
    }

    fn load(&mut self, resource: &str, options: LoadOptions) -> LoadOutcome {
        self.core
            .load_with(resource, options, HandlerType::Yaml, parse_yaml)
    }
}

/// Parse a YAML document whose root must be a mapping. An empty document
/// (or an explicit `null`) carries no configuration and is rejected.
#[cfg(feature = "yaml")]
pub fn parse_yaml(content: &str) -> Result<ConfigMap, ParseError> {
    if content.trim().is_empty() {
        return Err(ParseError::NoUsableData);
    }
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    let value = serde_json::to_value(yaml).map_err(ParseError::YamlValue)?;
    crate::handler::into_mapping(value)
}

#[cfg(not(feature = "yaml"))]
pub fn parse_yaml(_content: &str) -> Result<ConfigMap, ParseError> {
    Err(ParseError::NoUsableData)
}
