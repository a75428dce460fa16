//! The flat key/value store owned by every handler.

use crate::merge;
use crate::types::{ConfigMap, ConfigValue, MergeStrategy};

/// Flat mapping of configuration keys to untyped values.
///
/// Keys are never interpreted as paths: `"database.url"` is a single key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    values: ConfigMap,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. Returns `false` and leaves the store
    /// untouched if the key is empty.
    pub fn set(&mut self, key: &str, value: ConfigValue) -> bool {
        if key.is_empty() {
            return false;
        }
        self.values.insert(key.to_string(), value);
        true
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Remove `key`, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn exists(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge a fully parsed mapping into the store.
    pub fn merge(&mut self, loaded: ConfigMap, strategy: MergeStrategy) {
        let current = std::mem::take(&mut self.values);
        self.values = merge::merge(current, loaded, strategy);
    }
}

/// Rewrite every key of `loaded` as `"{name}.{key}"`.
pub fn prepend_resource_name(loaded: ConfigMap, name: &str) -> ConfigMap {
    loaded
        .into_iter()
        .map(|(key, value)| (format!("{name}.{key}"), value))
        .collect()
}
