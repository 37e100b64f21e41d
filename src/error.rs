//! Error types for the Lexfix library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexfixError`] enum. Distance metrics never fail; errors come from index
//! import/export, word-list loading and the command line front end.
//!
//! # Examples
//!
//! ```
//! use lexfix::error::{LexfixError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexfixError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexfix operations.
#[derive(Error, Debug)]
pub enum LexfixError {
    /// I/O errors (reading word lists, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index integrity errors (inconsistent imports, dangling words)
    #[error("Index error: {0}")]
    Index(String),

    /// Word-list parsing errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised by external collaborators such as indexed sources
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexfixError.
pub type Result<T> = std::result::Result<T, LexfixError>;

impl LexfixError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        LexfixError::Index(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        LexfixError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexfixError::InvalidArgument(msg.into())
    }
}
