//! Handler selection by format tag.

use std::path::PathBuf;

use tracing::debug;

use crate::container::Container;
use crate::error::ConfigError;
use crate::file::ResDirs;
use crate::handler::{Handler, HandlerCore};
use crate::json::JsonHandler;
use crate::native::NativeHandler;
use crate::types::{HandlerType, LoadOptions, LoadOutcome};
use crate::xml::XmlHandler;
use crate::yaml::YamlHandler;

/// One of the supported format handlers, chosen by [`HandlerType`].
#[derive(Debug, Clone)]
pub enum FormatHandler {
    Native(NativeHandler),
    Xml(XmlHandler),
    Yaml(YamlHandler),
    Json(JsonHandler),
}

impl FormatHandler {
    /// Construct the handler for `handler_type` searching `res_dirs` in order.
    ///
    /// Fails with [`ConfigError::DependencyMissing`] if the format's Cargo
    /// feature is disabled.
    pub fn new<I, P>(handler_type: HandlerType, res_dirs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let res_dirs = ResDirs::new(res_dirs);
        Ok(match handler_type {
            HandlerType::Native => FormatHandler::Native(NativeHandler::new(res_dirs)),
            HandlerType::Xml => FormatHandler::Xml(XmlHandler::new(res_dirs)?),
            HandlerType::Yaml => FormatHandler::Yaml(YamlHandler::new(res_dirs)?),
            HandlerType::Json => FormatHandler::Json(JsonHandler::new(res_dirs)),
        })
    }

    pub fn handler_type(&self) -> HandlerType {
        match self {
            FormatHandler::Native(_) => HandlerType::Native,
            FormatHandler::Xml(_) => HandlerType::Xml,
            FormatHandler::Yaml(_) => HandlerType::Yaml,
            FormatHandler::Json(_) => HandlerType::Json,
        }
    }
}

impl Handler for FormatHandler {
    fn core(&self) -> &HandlerCore {
        match self {
            FormatHandler::Native(h) => h.core(),
            FormatHandler::Xml(h) => h.core(),
            FormatHandler::Yaml(h) => h.core(),
            FormatHandler::Json(h) => h.core(),
        }
    }

    fn core_mut(&mut self) -> &mut HandlerCore {
        match self {
            FormatHandler::Native(h) => h.core_mut(),
            FormatHandler::Xml(h) => h.core_mut(),
            FormatHandler::Yaml(h) => h.core_mut(),
            FormatHandler::Json(h) => h.core_mut(),
        }
    }

    fn load(&mut self, resource: &str, options: LoadOptions) -> LoadOutcome {
        match self {
            FormatHandler::Native(h) => h.load(resource, options),
            FormatHandler::Xml(h) => h.load(resource, options),
            FormatHandler::Yaml(h) => h.load(resource, options),
            FormatHandler::Json(h) => h.load(resource, options),
        }
    }
}

/// Build a [`Container`] around the handler named by `handler_type`
/// (case-insensitive: `toml`, `xml`, `yaml`, `json`).
pub fn init<I, P>(handler_type: &str, res_dirs: I) -> Result<Container, ConfigError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let handler_type: HandlerType = handler_type.parse()?;
    debug!(%handler_type, "initializing config container");
    let handler = FormatHandler::new(handler_type, res_dirs)?;
    Ok(Container::new(handler))
}
