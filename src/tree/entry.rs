//! Directory listing and sibling ordering

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, TreeError};

use super::filter::ExclusionSet;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    /// Real directories only; symlinks to directories count as leaves.
    pub is_dir: bool,
}

impl DirectoryEntry {
    /// Sibling order: directories first, then by raw file name. The lossy
    /// display name can collide for distinct non-UTF-8 names.
    pub fn sort_order(&self, other: &Self) -> Ordering {
        other
            .is_dir
            .cmp(&self.is_dir)
            .then_with(|| self.path.file_name().cmp(&other.path.file_name()))
    }
}

/// Read, filter, and sort the immediate children of `dir`.
pub fn read_and_filter_entries(dir: &Path, exclusions: &ExclusionSet) -> Result<Vec<DirectoryEntry>> {
    let read_err = |source| TreeError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name().to_string_lossy().to_string();

        if exclusions.is_excluded(&name) {
            debug!(path = %entry.path().display(), "skipping excluded entry");
            continue;
        }

        // DirEntry::file_type does not follow symlinks
        let is_dir = entry.file_type().map_err(read_err)?.is_dir();
        entries.push(DirectoryEntry {
            path: entry.path(),
            name,
            is_dir,
        });
    }

    entries.sort_by(DirectoryEntry::sort_order);
    trace!(dir = %dir.display(), count = entries.len(), "listed directory");
    Ok(entries)
}
