//! Clap adapter for resconfig.
//!
//! The **optional bootstrap layer** that decides which handler to build and
//! which resources to preload, compiled only when the `clap` Cargo feature
//! is enabled (on by default).
//!
//! [`ConfigArgs`] can be flattened into any clap `#[derive(Parser)]` struct.
//! [`ConfigArgs::into_container()`] goes through the same
//! [`factory::init`](crate::factory::init) path as programmatic callers, so an
//! unknown `--format` surfaces as
//! [`ConfigError::InvalidHandlerType`](crate::ConfigError::InvalidHandlerType).

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::container::Container;
use crate::error::ConfigError;
use crate::factory;
use crate::types::LoadOptions;

/// Clap-derived args describing how to build and fill a [`Container`].
///
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     config: ConfigArgs,
/// }
/// ```
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Resource format: toml, xml, yaml or json.
    #[arg(short, long, default_value = "toml", global = true)]
    pub format: String,

    /// Directory to search for resources. Repeatable; earlier directories win.
    #[arg(short = 'd', long = "res-dir", global = true)]
    pub res_dirs: Vec<PathBuf>,

    /// Resource to load at startup. Repeatable; loaded in order.
    #[arg(short = 'l', long = "load", global = true)]
    pub resources: Vec<String>,

    /// Prefix loaded keys with the resource's base name.
    #[arg(long, global = true)]
    pub prepend: bool,
}

impl ConfigArgs {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            prepend_resource_name: self.prepend,
        }
    }

    /// Build the container and load every requested resource in order,
    /// stopping at the first failure.
    pub fn into_container(self) -> Result<Container, ConfigError> {
        let options = self.load_options();
        let mut container = factory::init(&self.format, self.res_dirs)?;
        for resource in &self.resources {
            debug!(resource = %resource, "preloading config resource");
            container.load(resource, options)?;
        }
        Ok(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::write_resource;
    use clap::Parser;
    use serde_json::json;
    use tempfile::TempDir;

    /// Wrapper so we can use `try_parse_from` on the args.
    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    fn parse(args: &[&str]) -> ConfigArgs {
        TestCli::try_parse_from(args).unwrap().config
    }

    #[test]
    fn defaults() {
        let args = parse(&["test"]);
        assert_eq!(args.format, "toml");
        assert!(args.res_dirs.is_empty());
        assert!(args.resources.is_empty());
        assert_eq!(args.load_options(), LoadOptions::default());
    }

    #[test]
    fn repeated_res_dirs_keep_order() {
        let args = parse(&["test", "-d", "primary", "--res-dir", "fallback"]);
        assert_eq!(
            args.res_dirs,
            vec![PathBuf::from("primary"), PathBuf::from("fallback")]
        );
    }

    #[test]
    fn prepend_flag_sets_option() {
        let args = parse(&["test", "--prepend"]);
        assert_eq!(args.load_options(), LoadOptions::prefixed());
    }

    #[test]
    fn unknown_format_is_invalid_handler_type() {
        let args = parse(&["test", "--format", "ini"]);
        assert!(matches!(
            args.into_container(),
            Err(ConfigError::InvalidHandlerType { .. })
        ));
    }

    #[test]
    fn into_container_preloads_resources() {
        let dir = TempDir::new().unwrap();
        write_resource(&dir, "db.json", r#"{"host": "x"}"#);
        write_resource(&dir, "cache.json", r#"{"ttl": 60}"#);
        let res_dir = dir.path().to_string_lossy().into_owned();

        let args = parse(&[
            "test", "-f", "json", "-d", res_dir.as_str(), "-l", "db.json", "-l", "cache.json", "--prepend",
        ]);
        let container = args.into_container().unwrap();
        assert_eq!(container.read("db.host").unwrap(), Some(&json!("x")));
        assert_eq!(container.read("cache.ttl").unwrap(), Some(&json!(60)));
    }

    #[test]
    fn into_container_stops_at_missing_resource() {
        let dir = TempDir::new().unwrap();
        let res_dir = dir.path().to_string_lossy().into_owned();
        let args = parse(&["test", "-f", "json", "-d", res_dir.as_str(), "-l", "nope.json"]);
        assert!(matches!(
            args.into_container(),
            Err(ConfigError::ResourceNotFound { resource }) if resource == "nope.json"
        ));
    }
}
