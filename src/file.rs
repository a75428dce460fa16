//! Resource discovery across an ordered list of search directories.
//!
//! [`ResDirs`] holds directories in **priority-descending** order: the first
//! directory that contains the resource wins, so directories added earlier
//! shadow those added later. Nothing is validated when a directory is added;
//! a directory that does not exist simply never matches.
//!
//! Reading the resolved file is kept separate from resolution so that a
//! missing resource and an unreadable one stay distinguishable.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

/// Ordered list of directories searched for configuration resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResDirs {
    dirs: Vec<PathBuf>,
}

impl ResDirs {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one directory. Duplicates are kept.
    pub fn push(&mut self, dir: impl Into<PathBuf>) {
        self.dirs.push(dir.into());
    }

    /// Append several directories, preserving their order.
    pub fn extend<I, P>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.dirs.extend(dirs.into_iter().map(Into::into));
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Resolve `resource` to the first `{dir}/{resource}` that exists as a file.
    ///
    /// An absolute resource name never resolves, since joining it would
    /// discard the search directory.
    pub fn resolve(&self, resource: &str) -> Option<PathBuf> {
        let rooted = Path::new(resource)
            .components()
            .any(|c| matches!(c, Component::Prefix(_) | Component::RootDir));
        if rooted {
            debug!(resource, "absolute config resource name is not searched");
            return None;
        }
        let found = self
            .dirs
            .iter()
            .map(|dir| dir.join(resource))
            .find(|candidate| candidate.is_file());
        match &found {
            Some(path) => debug!(resource, path = %path.display(), "resolved config resource"),
            None => debug!(resource, dirs = self.dirs.len(), "config resource not found"),
        }
        found
    }
}

/// Derive the key prefix for a resource from its file name, stripping the
/// first matching extension in `extensions`.
///
/// `"conf/db.json"` with `["json"]` gives `"db"`; an extension that is not in
/// the list is kept (`"db.conf"` stays `"db.conf"`).
pub fn resource_base_name(path: &Path, extensions: &[&str]) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    for ext in extensions {
        if let Some(stem) = file_name.strip_suffix(&format!(".{ext}"))
            && !stem.is_empty()
        {
            return stem.to_string();
        }
    }
    file_name
}
