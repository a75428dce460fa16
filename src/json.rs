//! Handler for JSON resources.

use tracing::debug;

use crate::error::ParseError;
use crate::file::ResDirs;
use crate::handler::{self, Handler, HandlerCore};
use crate::types::{ConfigMap, ConfigValue, HandlerType, LoadOptions, LoadOutcome};

#[derive(Debug, Clone, Default)]
pub struct JsonHandler {
    core: HandlerCore,
}

impl JsonHandler {
    pub fn new(res_dirs: ResDirs) -> Self {
        debug!(dirs = res_dirs.len(), "creating JSON config handler");
        Self {
            core: HandlerCore::new(res_dirs),
        }
    }
}

impl Handler for JsonHandler {
    fn core(&self) -> &HandlerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut HandlerCore {
        &mut self.core
    }

    fn load(&mut self, resource: &str, options: LoadOptions) -> LoadOutcome {
        self.core
            .load_with(resource, options, HandlerType::Json, parse_json)
    }
}

/// Parse a JSON document whose root must be an object. `null` is rejected;
/// an empty object is accepted and merges nothing.
pub fn parse_json(content: &str) -> Result<ConfigMap, ParseError> {
    let value: ConfigValue = serde_json::from_str(content)?;
    handler::into_mapping(value)
}
