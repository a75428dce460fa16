//! Handler for TOML resources, the native configuration format.

use tracing::debug;

use crate::error::ParseError;
use crate::file::ResDirs;
use crate::handler::{Handler, HandlerCore};
use crate::types::{ConfigMap, ConfigValue, HandlerType, LoadOptions, LoadOutcome};

#[derive(Debug, Clone, Default)]
pub struct NativeHandler {
    core: HandlerCore,
}

impl NativeHandler {
    pub fn new(res_dirs: ResDirs) -> Self {
        debug!(dirs = res_dirs.len(), "creating TOML config handler");
        Self {
            core: HandlerCore::new(res_dirs),
        }
    }
}

impl Handler for NativeHandler {
    fn core(&self) -> &HandlerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut HandlerCore {
        &mut self.core
    }

    fn load(&mut self, resource: &str, options: LoadOptions) -> LoadOutcome {
        self.core
            .load_with(resource, options, HandlerType::Native, parse_toml)
    }
}

/// Parse a TOML document. A document that defines no keys carries no
/// configuration and is rejected.
pub fn parse_toml(content: &str) -> Result<ConfigMap, ParseError> {
    let table: toml::Table = content.parse()?;
    if table.is_empty() {
        return Err(ParseError::NoUsableData);
    }
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_value(value)))
        .collect())
}

fn toml_to_value(value: toml::Value) -> ConfigValue {
    match value {
        toml::Value::String(s) => ConfigValue::String(s),
        toml::Value::Integer(i) => ConfigValue::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(ConfigValue::Number)
            .unwrap_or(ConfigValue::Null),
        toml::Value::Boolean(b) => ConfigValue::Bool(b),
        toml::Value::Datetime(dt) => ConfigValue::String(dt.to_string()),
        toml::Value::Array(arr) => ConfigValue::Array(arr.into_iter().map(toml_to_value).collect()),
        toml::Value::Table(tbl) => ConfigValue::Object(
            tbl.into_iter()
                .map(|(key, value)| (key, toml_to_value(value)))
                .collect(),
        ),
    }
}
