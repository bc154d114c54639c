//! Span types produced by term tokenization.
//!
//! A term is split into alternating separator and word spans. Each span
//! carries its byte offsets in the input and the [`SpanKind`] decided by
//! the classifier.
//!
//! # Examples
//!
//! ```
//! use termregex::analysis::span::{SpanKind, WordSpan};
//!
//! let span = WordSpan::new("anaemia", 4, SpanKind::Ordinary);
//! assert_eq!(span.end_offset, 11);
//! assert!(span.kind.is_word());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a span of the input term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// A run of separator characters, replaced by the separator sub-pattern.
    Separator,
    /// A configured stop word, copied verbatim.
    Stopword,
    /// A word starting with an ASCII letter, escaped and rewritten.
    Ordinary,
    /// A word starting with anything else, escaped only.
    Funny,
}

impl SpanKind {
    /// Tie-break rank when two rules match spans of equal length; higher wins.
    pub fn precedence(self) -> u8 {
        match self {
            SpanKind::Stopword => 3,
            SpanKind::Ordinary => 2,
            SpanKind::Funny => 1,
            SpanKind::Separator => 0,
        }
    }

    /// Whether this span is a word rather than a separator run.
    pub fn is_word(self) -> bool {
        !matches!(self, SpanKind::Separator)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Separator => "separator",
            SpanKind::Stopword => "stopword",
            SpanKind::Ordinary => "ordinary",
            SpanKind::Funny => "funny",
        };
        f.write_str(name)
    }
}

/// A classified span of the input term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpan {
    /// The text of the span as it appears in the input
    pub text: String,

    /// The byte offset where this span starts in the input
    pub start_offset: usize,

    /// The byte offset where this span ends in the input
    pub end_offset: usize,

    /// How the span will be rendered
    pub kind: SpanKind,
}

impl WordSpan {
    /// Create a span starting at `start_offset`; the end offset follows from the text.
    pub fn new<S: Into<String>>(text: S, start_offset: usize, kind: SpanKind) -> Self {
        let text = text.into();
        let end_offset = start_offset + text.len();
        WordSpan {
            text,
            start_offset,
            end_offset,
            kind,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for WordSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}..{} {:?}",
            self.kind, self.start_offset, self.end_offset, self.text
        )
    }
}

/// A span stream is the tokenizer's output, in input order.
pub type SpanStream = Box<dyn Iterator<Item = WordSpan> + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        assert!(SpanKind::Stopword.precedence() > SpanKind::Ordinary.precedence());
        assert!(SpanKind::Ordinary.precedence() > SpanKind::Funny.precedence());
        assert!(SpanKind::Funny.precedence() > SpanKind::Separator.precedence());
    }

    #[test]
    fn test_span_offsets() {
        let span = WordSpan::new("αβ", 2, SpanKind::Funny);
        assert_eq!(span.len(), 4);
        assert_eq!(span.end_offset, 6);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_display() {
        let span = WordSpan::new(" - ", 3, SpanKind::Separator);
        assert_eq!(span.to_string(), "separator@3..6 \" - \"");
        assert!(!span.kind.is_word());
    }
}
