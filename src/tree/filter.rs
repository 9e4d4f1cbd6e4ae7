//! Name-based exclusion for tree walking

use std::collections::HashSet;

use super::config::WalkerConfig;

/// Immutable set of excluded directory and file names.
///
/// Matching is exact equality against an entry's base name. Both sets are
/// consulted for every entry whatever its type, so a file named `cache` is
/// skipped just like a directory named `cache`.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    dirs: HashSet<String>,
    files: HashSet<String>,
}

impl ExclusionSet {
    pub fn new<D, F>(dirs: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &WalkerConfig) -> Self {
        Self::new(
            config.excluded_dirs.iter().cloned(),
            config.excluded_files.iter().cloned(),
        )
    }

    /// Check if a base name should be skipped.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.dirs.contains(name) || self.files.contains(name)
    }
}

impl From<&WalkerConfig> for ExclusionSet {
    fn from(config: &WalkerConfig) -> Self {
        Self::from_config(config)
    }
}
