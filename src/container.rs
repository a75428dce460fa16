//! The public key/value facade over a single handler.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::factory::FormatHandler;
use crate::handler::Handler;
use crate::types::{ConfigValue, LoadOptions, LoadOutcome};

/// Map-like access to configuration values, backed by exactly one [`Handler`].
///
/// The container holds no state of its own. It forwards every call to the
/// handler and turns the handler's boolean and [`LoadOutcome`] results into
/// [`ConfigError`]s.
#[derive(Debug, Clone)]
pub struct Container<H: Handler = FormatHandler> {
    handler: H,
}

impl<H: Handler> Container<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn has(&self, key: &str) -> bool {
        self.handler.exists(key)
    }

    /// Read a value. `Ok(None)` when the key is not set.
    pub fn read(&self, key: &str) -> Result<Option<&ConfigValue>, ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::InvalidKey(key.to_string()));
        }
        Ok(self.handler.get(key))
    }

    pub fn write(&mut self, key: &str, value: impl Into<ConfigValue>) -> Result<(), ConfigError> {
        if !self.handler.set(key, value.into()) {
            return Err(ConfigError::InvalidKey(key.to_string()));
        }
        Ok(())
    }

    pub fn delete(&mut self, key: &str) -> Result<(), ConfigError> {
        if !self.handler.remove(key) {
            return Err(ConfigError::MissingKey(key.to_string()));
        }
        Ok(())
    }

    /// Load a resource through the handler.
    ///
    /// ```ignore
    /// container.load("database.json", LoadOptions::default())?;
    /// container.load("cache.json", LoadOptions::prefixed())?; // keys become "cache.*"
    /// ```
    pub fn load(&mut self, resource: &str, options: LoadOptions) -> Result<(), ConfigError> {
        match self.handler.load(resource, options) {
            LoadOutcome::Loaded => Ok(()),
            LoadOutcome::ParseError => Err(ConfigError::Parse {
                resource: resource.to_string(),
            }),
            LoadOutcome::ResourceNotFound => Err(ConfigError::ResourceNotFound {
                resource: resource.to_string(),
            }),
        }
    }

    pub fn add_res_dir(&mut self, dir: impl Into<PathBuf>) {
        self.handler.add_res_dir(dir.into());
    }

    pub fn add_res_dirs<I, P>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.handler
            .add_res_dirs(dirs.into_iter().map(Into::into).collect());
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}
