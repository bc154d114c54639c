//! Term analysis: splitting a term into spans and classifying them.
//!
//! This module provides the front half of the conversion pipeline: the
//! span types, the stop word set and the rule-based tokenizer.

pub mod span;
pub mod stop_words;
pub mod tokenizer;

// Re-export commonly used types
pub use span::*;
pub use stop_words::*;
pub use tokenizer::*;
