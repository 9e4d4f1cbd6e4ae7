//! Error types for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a render.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    /// True when the output sink went away (e.g. `tree dir | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, TreeError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_dir_message_names_path() {
        let err = TreeError::ReadDir {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope"), "{}", msg);
        assert!(msg.contains("No such file or directory"), "{}", msg);
    }

    #[test]
    fn test_io_error_converts_to_output() {
        let err: TreeError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, TreeError::Output(_)));
        assert!(err.is_broken_pipe());
    }

    #[test]
    fn test_read_dir_is_not_broken_pipe() {
        let err = TreeError::ReadDir {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe"),
        };
        assert!(!err.is_broken_pipe());
    }
}
