//! Pluggable configuration loading. Point a handler at some directories, load
//! resources by name, and read values back from a single flat store.
//!
//! ```ignore
//! let mut config = resconfig::factory::init("json", ["./config", "/etc/myapp"])?;
//! config.load("database.json", LoadOptions::default())?;
//! let host = config.read("host")?;
//! ```
//!
//! # Handlers and the container
//!
//! A [`Handler`] owns two things: the key/value [`ConfigStore`] and the
//! ordered list of directories ([`ResDirs`]) that resource names are resolved
//! against. There is one handler per format:
//!
//! | Format | Handler | Cargo feature |
//! |--------|---------|---------------|
//! | TOML   | [`NativeHandler`] | always available |
//! | JSON   | [`JsonHandler`] | always available |
//! | YAML   | [`YamlHandler`] | `yaml` (default) |
//! | XML    | [`XmlHandler`] | `xml` (default) |
//!
//! Handlers report each load as a [`LoadOutcome`] status rather than an
//! error. The [`Container`] wraps exactly one handler, exposes map-like
//! `has`/`read`/`write`/`delete` operations, and turns failed outcomes into
//! [`ConfigError`]s carrying the resource name.
//!
//! [`FormatHandler`] is the closed set of handlers, selected by
//! [`HandlerType`]; [`factory::init`] parses a format tag and wraps the
//! resulting handler in a container.
//!
//! # Resolution order
//!
//! Directories are searched **in the order they were added** and the first
//! directory containing the resource wins, so earlier directories shadow
//! later ones. Directories are not checked when added; one that does not
//! exist simply never matches.
//!
//! # Merging
//!
//! Every successful load merges its mapping into the store. The default
//! [`MergeStrategy::Union`]:
//!
//! - overwrites scalars with the later load's value,
//! - merges nested mappings key by key,
//! - concatenates colliding arrays.
//!
//! [`MergeStrategy::Overwrite`] replaces top-level keys wholesale instead.
//! Merging happens only after the whole resource has parsed, so a failed
//! load never leaves a half-merged store.
//!
//! # Key prefixing
//!
//! With [`LoadOptions::prefixed()`], every loaded key is rewritten as
//! `"{name}.{key}"` where `name` is the resource's file name with the
//! format's extension stripped (`cache.yml` → `cache`). Keys are never
//! interpreted as paths; `"cache.ttl"` is one flat key.
//!
//! # Missing dependencies
//!
//! Building without the `yaml` or `xml` feature keeps the handler types, but
//! their constructors fail immediately with
//! [`ConfigError::DependencyMissing`].
//!
//! # Threading
//!
//! Handlers are plain owned state with no internal locking. Wrap the
//! container in a `Mutex` to share it across threads.

pub mod error;
pub mod factory;
pub mod types;

#[cfg(feature = "clap")]
mod cli;
mod container;
mod file;
mod handler;
mod json;
pub(crate) mod merge;
mod native;
mod store;
mod xml;
mod yaml;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::ConfigArgs;
pub use container::Container;
pub use error::{ConfigError, ParseError};
pub use factory::FormatHandler;
pub use file::ResDirs;
pub use handler::{Handler, HandlerCore};
pub use json::JsonHandler;
pub use native::NativeHandler;
pub use store::ConfigStore;
pub use types::{ConfigMap, ConfigValue, HandlerType, LoadOptions, LoadOutcome, MergeStrategy};
pub use xml::XmlHandler;
pub use yaml::YamlHandler;
