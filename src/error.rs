//! Error types for the lexdist library.
//!
//! All fallible operations return [`LexdistError`] through the [`Result`]
//! alias. The core algorithms (distance, alignment, search) never fail; errors
//! come from reading cost tables, input lines and command-line values.
//!
//! # Examples
//!
//! ```
//! use lexdist::error::{LexdistError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexdistError::invalid_argument("negative cost"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexdist operations.
#[derive(Error, Debug)]
pub enum LexdistError {
    /// I/O errors (opening files, reading stdin, writing stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A malformed cost-table or input line.
    #[error("Format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// A symbol field that does not decode to a valid symbol for the mode.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid argument or configuration value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Worker pool construction failed.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LexdistError.
pub type Result<T> = std::result::Result<T, LexdistError>;

impl LexdistError {
    /// Create a new format error for the given 1-based line number.
    pub fn format<S: Into<String>>(line: usize, msg: S) -> Self {
        LexdistError::Format {
            line,
            message: msg.into(),
        }
    }

    /// Create a new decode error.
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        LexdistError::Decode(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexdistError::InvalidArgument(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        LexdistError::ThreadPool(msg.into())
    }

    /// Attach a line number to a decode error raised while parsing a table
    /// field. Other errors pass through unchanged.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            LexdistError::Decode(msg) => LexdistError::format(line, msg),
            other => other,
        }
    }
}
