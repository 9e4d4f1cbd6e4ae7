//! dirtree - print a directory as an ASCII tree, skipping noise directories

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{OutputConfig, StreamingFormatter};
pub use tree::{
    DirectoryEntry, ExclusionSet, RenderSummary, TreeOutput, TreeRenderer, WalkerConfig,
};
