//! The handler abstraction: store ownership plus the load/merge protocol.
//!
//! Every format handler embeds a [`HandlerCore`] and implements
//! [`Handler::load`] by handing its parser adapter to
//! [`HandlerCore::load_with`]. The pipeline is:
//!
//! 1. Resolve the resource against the search directories
//!    (`ResourceNotFound` if no directory has it)
//! 2. Read it (a read failure is reported as `ParseError`)
//! 3. Parse it into a mapping (`ParseError` on any adapter failure)
//! 4. Optionally prefix every key with the resource's base name
//! 5. Merge into the store and return `Loaded`
//!
//! The store is only touched in step 5, so a failed load never leaves a
//! partially merged store behind.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::ParseError;
use crate::file::{self, ResDirs};
use crate::store::{self, ConfigStore};
use crate::types::{ConfigMap, ConfigValue, HandlerType, LoadOptions, LoadOutcome, MergeStrategy};

/// State shared by every format handler: the store, the search directories
/// and the merge discipline.
#[derive(Debug, Clone, Default)]
pub struct HandlerCore {
    store: ConfigStore,
    res_dirs: ResDirs,
    merge_strategy: MergeStrategy,
}

impl HandlerCore {
    pub fn new(res_dirs: ResDirs) -> Self {
        Self {
            res_dirs,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    pub fn res_dirs(&self) -> &ResDirs {
        &self.res_dirs
    }

    pub fn res_dirs_mut(&mut self) -> &mut ResDirs {
        &mut self.res_dirs
    }

    pub fn merge_strategy(&self) -> MergeStrategy {
        self.merge_strategy
    }

    pub fn set_merge_strategy(&mut self, strategy: MergeStrategy) {
        self.merge_strategy = strategy;
    }

    /// Run the load pipeline for `resource` with the given parser adapter.
    ///
    /// `format` supplies the extensions stripped when deriving the key prefix.
    pub fn load_with<F>(
        &mut self,
        resource: &str,
        options: LoadOptions,
        format: HandlerType,
        parse: F,
    ) -> LoadOutcome
    where
        F: FnOnce(&str) -> Result<ConfigMap, ParseError>,
    {
        let Some(path) = self.res_dirs.resolve(resource) else {
            return LoadOutcome::ResourceNotFound;
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(resource, path = %path.display(), error = %e, "failed to read config resource");
                return LoadOutcome::ParseError;
            }
        };

        let mut loaded = match parse(&content).and_then(reject_empty_keys) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(resource, path = %path.display(), %format, error = %e, "failed to parse config resource");
                return LoadOutcome::ParseError;
            }
        };

        if options.prepend_resource_name {
            let name = file::resource_base_name(&path, format.extensions());
            loaded = store::prepend_resource_name(loaded, &name);
        }

        debug!(resource, path = %path.display(), keys = loaded.len(), "loaded config resource");
        self.store.merge(loaded, self.merge_strategy);
        LoadOutcome::Loaded
    }
}

/// A configuration handler for one resource format.
///
/// Implementors provide access to their [`HandlerCore`] and the
/// format-specific [`load`](Handler::load); the key/value operations and
/// directory management come for free.
pub trait Handler {
    fn core(&self) -> &HandlerCore;

    fn core_mut(&mut self) -> &mut HandlerCore;

    /// Resolve, parse and merge `resource` into the store.
    fn load(&mut self, resource: &str, options: LoadOptions) -> LoadOutcome;

    /// Set a value, overwriting any existing one. `false` if the key is empty.
    fn set(&mut self, key: &str, value: ConfigValue) -> bool {
        self.core_mut().store_mut().set(key, value)
    }

    /// Look up a value; `None` when the key is absent.
    fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.core().store().get(key)
    }

    /// Remove a value; `false` when the key is absent.
    fn remove(&mut self, key: &str) -> bool {
        self.core_mut().store_mut().remove(key)
    }

    fn exists(&self, key: &str) -> bool {
        self.core().store().exists(key)
    }

    fn add_res_dir(&mut self, dir: PathBuf) {
        self.core_mut().res_dirs_mut().push(dir);
    }

    fn add_res_dirs(&mut self, dirs: Vec<PathBuf>) {
        self.core_mut().res_dirs_mut().extend(dirs);
    }

    /// First existing `{dir}/{resource}` across the search directories.
    fn resolve(&self, resource: &str) -> Option<PathBuf> {
        self.core().res_dirs().resolve(resource)
    }

    fn prepend_resource_name(&self, loaded: ConfigMap, name: &str) -> ConfigMap {
        store::prepend_resource_name(loaded, name)
    }

    fn store(&self) -> &ConfigStore {
        self.core().store()
    }

    fn set_merge_strategy(&mut self, strategy: MergeStrategy) {
        self.core_mut().set_merge_strategy(strategy);
    }
}

/// Store keys are non-empty, so a document defining `""` is rejected whole.
fn reject_empty_keys(loaded: ConfigMap) -> Result<ConfigMap, ParseError> {
    if loaded.contains_key("") {
        return Err(ParseError::EmptyKey);
    }
    Ok(loaded)
}

/// Unwrap a parsed document into its root mapping.
pub(crate) fn into_mapping(value: ConfigValue) -> Result<ConfigMap, ParseError> {
    match value {
        ConfigValue::Object(map) => Ok(map),
        ConfigValue::Null => Err(ParseError::NoUsableData),
        _ => Err(ParseError::NotAMapping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::write_resource;
    use serde_json::json;
    use tempfile::TempDir;

    /// Handler whose adapter parses `key=value` lines, so the pipeline can be
    /// tested without any real format.
    struct LineHandler {
        core: HandlerCore,
    }

    fn parse_lines(content: &str) -> Result<ConfigMap, ParseError> {
        let mut map = ConfigMap::new();
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            let (key, value) = line.split_once('=').ok_or(ParseError::NotAMapping)?;
            map.insert(key.trim().into(), json!(value.trim()));
        }
        if map.is_empty() {
            return Err(ParseError::NoUsableData);
        }
        Ok(map)
    }

    impl Handler for LineHandler {
        fn core(&self) -> &HandlerCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut HandlerCore {
            &mut self.core
        }

        fn load(&mut self, resource: &str, options: LoadOptions) -> LoadOutcome {
            self.core
                .load_with(resource, options, HandlerType::Native, parse_lines)
        }
    }

    fn handler(dirs: &[&TempDir]) -> LineHandler {
        LineHandler {
            core: HandlerCore::new(ResDirs::new(dirs.iter().map(|d| d.path()))),
        }
    }

    #[test]
    fn load_merges_into_store() {
        let dir = TempDir::new().unwrap();
        write_resource(&dir, "app.toml", "host = x\nport = 1\n");
        let mut h = handler(&[&dir]);

        assert_eq!(h.load("app.toml", LoadOptions::default()), LoadOutcome::Loaded);
        assert_eq!(h.get("host"), Some(&json!("x")));
        assert_eq!(h.get("port"), Some(&json!("1")));
    }

    #[test]
    fn missing_resource_leaves_store_untouched() {
        let dir = TempDir::new().unwrap();
        let mut h = handler(&[&dir]);
        h.set("kept", json!(true));

        assert_eq!(
            h.load("missing.toml", LoadOptions::default()),
            LoadOutcome::ResourceNotFound
        );
        assert_eq!(h.store().len(), 1);
    }

    #[test]
    fn parse_failure_leaves_previous_keys_intact() {
        let dir = TempDir::new().unwrap();
        write_resource(&dir, "good.toml", "host = x\n");
        write_resource(&dir, "bad.toml", "host = y\nnot a pair\n");
        let mut h = handler(&[&dir]);

        assert_eq!(h.load("good.toml", LoadOptions::default()), LoadOutcome::Loaded);
        assert_eq!(h.load("bad.toml", LoadOptions::default()), LoadOutcome::ParseError);
        assert_eq!(h.get("host"), Some(&json!("x")));
    }

    #[test]
    fn no_usable_data_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write_resource(&dir, "empty.toml", "\n\n");
        let mut h = handler(&[&dir]);
        assert_eq!(h.load("empty.toml", LoadOptions::default()), LoadOutcome::ParseError);
        assert!(h.store().is_empty());
    }

    #[test]
    fn empty_key_rejects_whole_document() {
        let dir = TempDir::new().unwrap();
        write_resource(&dir, "good.toml", "host = x\n");
        write_resource(&dir, "blank.toml", "port = 1\n = 2\n");
        let mut h = handler(&[&dir]);

        assert_eq!(h.load("good.toml", LoadOptions::default()), LoadOutcome::Loaded);
        assert_eq!(h.load("blank.toml", LoadOptions::default()), LoadOutcome::ParseError);
        assert_eq!(h.load("blank.toml", LoadOptions::prefixed()), LoadOutcome::ParseError);
        assert!(!h.exists(""));
        assert!(!h.exists("port"));
        assert_eq!(h.store().len(), 1);
    }

    #[test]
    fn absolute_resource_outside_res_dirs_is_not_found() {
        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let secret = write_resource(&elsewhere, "secret.toml", "s = 1\n");
        let mut h = handler(&[&dir]);

        let outcome = h.load(&secret.to_string_lossy(), LoadOptions::default());
        assert_eq!(outcome, LoadOutcome::ResourceNotFound);
        assert!(h.store().is_empty());
    }

    #[test]
    fn prefix_is_derived_from_resource_name() {
        let dir = TempDir::new().unwrap();
        write_resource(&dir, "db.toml", "host = x\n");
        let mut h = handler(&[&dir]);

        assert_eq!(h.load("db.toml", LoadOptions::prefixed()), LoadOutcome::Loaded);
        assert_eq!(h.load("db.toml", LoadOptions::prefixed()), LoadOutcome::Loaded);
        assert_eq!(h.get("db.host"), Some(&json!("x")));
        assert!(!h.exists("host"));
        assert_eq!(h.store().len(), 1);
    }

    #[test]
    fn prefix_keeps_foreign_extension() {
        let dir = TempDir::new().unwrap();
        write_resource(&dir, "db.conf", "host = x\n");
        let mut h = handler(&[&dir]);
        assert_eq!(h.load("db.conf", LoadOptions::prefixed()), LoadOutcome::Loaded);
        assert!(h.exists("db.conf.host"));
    }

    #[test]
    fn later_load_overwrites_scalars() {
        let dir = TempDir::new().unwrap();
        write_resource(&dir, "a.toml", "host = a\nport = 1\n");
        write_resource(&dir, "b.toml", "host = b\n");
        let mut h = handler(&[&dir]);

        h.load("a.toml", LoadOptions::default());
        h.load("b.toml", LoadOptions::default());
        assert_eq!(h.get("host"), Some(&json!("b")));
        assert_eq!(h.get("port"), Some(&json!("1")));
    }

    #[test]
    fn res_dirs_are_appended_and_searched_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_resource(&first, "app.toml", "from = first\n");
        write_resource(&second, "app.toml", "from = second\n");

        let mut h = handler(&[]);
        assert_eq!(h.resolve("app.toml"), None);
        h.add_res_dirs(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(h.resolve("app.toml"), Some(first.path().join("app.toml")));

        h.load("app.toml", LoadOptions::default());
        assert_eq!(h.get("from"), Some(&json!("first")));
    }

    #[test]
    fn unreadable_resource_is_parse_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bin.toml"), [0xff, 0xfe, 0x00]).unwrap();
        let mut h = handler(&[&dir]);
        assert_eq!(h.load("bin.toml", LoadOptions::default()), LoadOutcome::ParseError);
    }

    #[test]
    fn into_mapping_rejects_non_objects() {
        assert!(matches!(into_mapping(json!(null)), Err(ParseError::NoUsableData)));
        assert!(matches!(into_mapping(json!([1, 2])), Err(ParseError::NotAMapping)));
        assert!(into_mapping(json!({"a": 1})).unwrap().contains_key("a"));
    }
}
