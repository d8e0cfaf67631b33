//! Bulk load error module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading keys from a line-oriented source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("Key source not found: {0}")]
    FileNotFound(PathBuf),

    /// The source could not be opened.
    #[error("Failed to open key source {path:?}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Reading a line failed, including lines that are not valid UTF-8.
    #[error("Failed to read line {line}: {source}")]
    Read {
        /// 1-based number of the line being read
        line: usize,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}
