//! Stop word set.
//!
//! Stop words are short function words that are copied into the generated
//! regex verbatim: no escaping, no case class, no plural suffix. They are
//! matched case-sensitively and only where they cover a whole word.
//!
//! # Examples
//!
//! ```
//! use termregex::analysis::stop_words::StopWords;
//!
//! let stop_words = StopWords::from_words(["of", "the"]).unwrap();
//! assert!(stop_words.is_stop_word("of"));
//! assert!(!stop_words.is_stop_word("Of"));
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::error::{Result, TermRegexError};

/// Default stop words: function words common in biomedical terms plus
/// small roman numerals.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "ii", "iii", "iv", "vi", "it", "up", "of", "and", "the", "to", "or", "with", "due", "in",
    "other", "as", "by", "without",
];

/// Default stop words as a HashSet.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_STOP_WORDS.iter().map(|&s| s.to_string()).collect()
});

/// An immutable set of stop words supporting longest-prefix lookup.
#[derive(Clone, Debug)]
pub struct StopWords {
    /// Membership set
    words: Arc<HashSet<String>>,
    /// The same words, longest first
    by_length: Arc<Vec<String>>,
}

impl StopWords {
    /// Create a stop word set with the default words.
    pub fn new() -> Self {
        Self::build(DEFAULT_STOP_WORDS_SET.clone())
    }

    /// Create a stop word set from a list of words.
    ///
    /// Empty words are rejected: a zero-length stop word would let the
    /// scanner stand still.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words.into_iter().map(|s| s.into()).collect();
        if words.iter().any(|w| w.is_empty()) {
            return Err(TermRegexError::config("stop words must not be empty"));
        }
        Ok(Self::build(words))
    }

    fn build(words: HashSet<String>) -> Self {
        let mut by_length: Vec<String> = words.iter().cloned().collect();
        by_length.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        StopWords {
            words: Arc::new(words),
            by_length: Arc::new(by_length),
        }
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Stop words that `text` starts with, longest first.
    pub fn prefixes_of<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.by_length
            .iter()
            .map(String::as_str)
            .filter(move |w| text.starts_with(w))
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}
