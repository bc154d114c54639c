//! # termregex
//!
//! Converts multi-word vocabulary terms into regular expressions that match
//! the term and its common orthographic variants, for term recognition in
//! free text.
//!
//! ## Features
//!
//! - Case folding of each word's first letter
//! - Simple English plurals, including `y` → `ies`
//! - `ae` / `e` spelling variants ("anaemia" vs. "anemia")
//! - Configurable separators, trailing context and stop words
//! - Output for the `regex` crate or POSIX extended regexes
//!
//! ```
//! use termregex::TermConverter;
//!
//! let converter = TermConverter::with_defaults().unwrap();
//! let re = converter.compile("coronary artery").unwrap();
//! assert!(re.is_match("Coronary arteries were"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod escape;
pub mod orthography;

pub use config::ConverterConfig;
pub use converter::TermConverter;
pub use error::{Result, TermRegexError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
