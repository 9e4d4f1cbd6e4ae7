//! TreeRenderer - depth-first rendering of a directory as box-drawing lines

use std::io;
use std::path::Path;

use termcolor::NoColor;
use tracing::debug;

use crate::error::Result;
use crate::output::{OutputConfig, StreamingFormatter};

use super::config::WalkerConfig;
use super::entry::{read_and_filter_entries, DirectoryEntry};
use super::filter::ExclusionSet;
use super::utils::child_prefix;

/// Callback for streaming output - receives node information for display.
pub trait TreeOutput {
    /// The first line: the root as the user named it.
    fn output_root(&mut self, name: &str) -> io::Result<()>;

    fn output_node(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str)
        -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Number of entries printed by one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub directories: usize,
    pub files: usize,
}

/// Siblings of one directory still waiting to be printed.
struct Frame {
    pending: std::vec::IntoIter<DirectoryEntry>,
    prefix: String,
}

impl Frame {
    fn new(entries: Vec<DirectoryEntry>, prefix: String) -> Self {
        Self {
            pending: entries.into_iter(),
            prefix,
        }
    }

    /// Next sibling and whether it is the last one of this directory.
    fn next_sibling(&mut self) -> Option<(DirectoryEntry, bool)> {
        let entry = self.pending.next()?;
        Some((entry, self.pending.len() == 0))
    }
}

/// Streaming tree renderer. Output is produced while walking; memory use is
/// one listing per open directory level.
pub struct TreeRenderer {
    exclusions: ExclusionSet,
}

impl TreeRenderer {
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    pub fn from_config(config: &WalkerConfig) -> Self {
        Self::new(ExclusionSet::from_config(config))
    }

    /// Render everything below `dir`, starting at the left margin.
    pub fn render<O: TreeOutput>(&self, dir: &Path, output: &mut O) -> Result<RenderSummary> {
        self.render_with_prefix(dir, "", output)
    }

    /// Render everything below `dir`, with every line starting with `prefix`.
    ///
    /// Stops at the first directory that cannot be listed; lines already
    /// handed to `output` stay written.
    pub fn render_with_prefix<O: TreeOutput>(
        &self,
        dir: &Path,
        prefix: &str,
        output: &mut O,
    ) -> Result<RenderSummary> {
        let mut summary = RenderSummary::default();
        let mut stack = vec![Frame::new(
            read_and_filter_entries(dir, &self.exclusions)?,
            prefix.to_string(),
        )];

        while let Some(frame) = stack.last_mut() {
            let Some((entry, is_last)) = frame.next_sibling() else {
                stack.pop();
                continue;
            };

            output.output_node(&entry.name, entry.is_dir, is_last, &frame.prefix)?;

            if !entry.is_dir {
                summary.files += 1;
                continue;
            }
            summary.directories += 1;

            let new_prefix = child_prefix(&frame.prefix, is_last);
            debug!(path = %entry.path.display(), depth = stack.len(), "descending");
            let children = read_and_filter_entries(&entry.path, &self.exclusions)?;
            if !children.is_empty() {
                stack.push(Frame::new(children, new_prefix));
            }
        }

        output.finish()?;
        Ok(summary)
    }

    /// Render `dir` with its root line into a plain string.
    pub fn render_to_string(&self, dir: &Path) -> Result<String> {
        let mut formatter =
            StreamingFormatter::with_writer(OutputConfig::plain(), NoColor::new(Vec::new()));
        formatter.output_root(&dir.display().to_string())?;
        self.render(dir, &mut formatter)?;
        let bytes = formatter.into_inner().into_inner();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::from_config(&WalkerConfig::default())
    }
}
