//! Directory tree walking logic
//!
//! `TreeRenderer` lists each directory, drops excluded names, orders the
//! rest (directories first, then by name) and hands every entry to a
//! `TreeOutput` together with the prefix it should be drawn with.

mod config;
mod entry;
mod filter;
mod utils;
mod walker;

pub use config::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES, WalkerConfig};
pub use entry::{DirectoryEntry, read_and_filter_entries};
pub use filter::ExclusionSet;
pub use utils::{child_prefix, connector};
pub use walker::{RenderSummary, TreeOutput, TreeRenderer};
