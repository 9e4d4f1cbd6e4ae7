//! Configuration types for tree walkers

/// Directory names skipped unless the caller builds its own config.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".venv",
    ".git",
    "__pycache__",
    "cache",
    "Library",
    "Logs",
    "Temp",
    ".next",
    "node_modules",
];

/// File names skipped by default. `*.txt` is a literal name, not a pattern.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[".DS_Store", "*.txt"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    pub excluded_dirs: Vec<String>,
    pub excluded_files: Vec<String>,
}

impl WalkerConfig {
    /// A config with nothing excluded.
    pub fn empty() -> Self {
        Self {
            excluded_dirs: Vec::new(),
            excluded_files: Vec::new(),
        }
    }

    /// Add directory names on top of the current list.
    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add file names on top of the current list.
    pub fn exclude_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_files.extend(names.into_iter().map(Into::into));
        self
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self::empty()
            .exclude_dirs(DEFAULT_EXCLUDED_DIRS.iter().copied())
            .exclude_files(DEFAULT_EXCLUDED_FILES.iter().copied())
    }
}
