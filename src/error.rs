//! Error types for the Concordancer library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`ConcordanceError`] enum. Only the edges of the system can fail: reading
//! the input document or the stop-word list, writing the report, and loading
//! configuration. Every in-memory transformation of the token pipeline is a
//! total function and returns plain values.
//!
//! # Examples
//!
//! ```
//! use concordancer::error::{ConcordanceError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ConcordanceError::invalid_argument("target word must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for Concordancer operations.
#[derive(Error, Debug)]
pub enum ConcordanceError {
    /// I/O errors not tied to a specific file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be found, read or written
    #[error("Cannot access '{}': {source}", path.display())]
    FileAccess {
        /// The file or directory the operation was applied to
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Configuration errors (malformed or incomplete settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ConcordanceError.
pub type Result<T> = std::result::Result<T, ConcordanceError>;

impl ConcordanceError {
    /// Create a new file access error for the given path.
    pub fn file_access<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        ConcordanceError::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ConcordanceError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ConcordanceError::InvalidArgument(msg.into())
    }

    /// Whether this error came from the filesystem.
    pub fn is_file_access(&self) -> bool {
        matches!(
            self,
            ConcordanceError::FileAccess { .. } | ConcordanceError::Io(_)
        )
    }
}
