//! Error types for the termregex library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TermRegexError`] enum.
//!
//! # Examples
//!
//! ```
//! use termregex::error::{Result, TermRegexError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TermRegexError::config("split pattern matches the empty string"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for term conversion.
///
/// Configuration errors are raised once, when a converter is built. A
/// classification error means the scanner reached an offset no rule
/// accepts, which the rule set is meant to make impossible.
#[derive(Error, Debug)]
pub enum TermRegexError {
    /// I/O errors (reading terms, writing results)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid converter configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// No classification rule matched at the given byte offset
    #[error("Classification error: no rule matches at offset {offset} of {input:?}")]
    Classification { offset: usize, input: String },

    /// A generated pattern could not be compiled into a matcher
    #[error("Compile error: {0}")]
    Compile(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TermRegexError.
pub type Result<T> = std::result::Result<T, TermRegexError>;

impl TermRegexError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TermRegexError::Config(msg.into())
    }

    /// Create a new classification error for `input` at byte `offset`.
    pub fn classification<S: Into<String>>(offset: usize, input: S) -> Self {
        TermRegexError::Classification {
            offset,
            input: input.into(),
        }
    }

    /// Create a new compile error.
    pub fn compile<S: Into<String>>(msg: S) -> Self {
        TermRegexError::Compile(msg.into())
    }

    /// Whether this error was raised while building a converter.
    pub fn is_config(&self) -> bool {
        matches!(self, TermRegexError::Config(_))
    }
}
