//! Per-dialect escaping of literal term text.
//!
//! An [`Escaper`] appends each character of a word to an output buffer,
//! either as is or as an escape sequence that makes it match itself in the
//! target regex dialect. Escaping is total: every `char` has an output.
//!
//! # Examples
//!
//! ```
//! use termregex::escape::{Escaper, RustRegexEscaper};
//!
//! let mut out = String::new();
//! RustRegexEscaper.escape_into("e.g.", &mut out);
//! assert_eq!(out, r"e\.g\.");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Regex dialects a converter can target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegexDialect {
    /// Syntax accepted by the `regex` crate.
    #[default]
    Rust,
    /// POSIX extended regular expressions (`grep -E`).
    PosixExtended,
}

impl RegexDialect {
    /// The escaper producing literal text for this dialect.
    pub fn escaper(self) -> Arc<dyn Escaper> {
        match self {
            RegexDialect::Rust => Arc::new(RustRegexEscaper),
            RegexDialect::PosixExtended => Arc::new(PosixExtendedEscaper),
        }
    }
}

impl fmt::Display for RegexDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexDialect::Rust => write!(f, "rust"),
            RegexDialect::PosixExtended => write!(f, "posix-extended"),
        }
    }
}

/// Trait for escaping literal text into a regex dialect.
///
/// Only [`Escaper::escape_char`] is required; the provided
/// [`Escaper::escape_into`] applies it to every character of a word.
pub trait Escaper: Send + Sync {
    /// Append `c` to `out`, escaped if it is special in this dialect.
    fn escape_char(&self, c: char, out: &mut String);

    /// Append every character of `text` to `out`, escaped as needed.
    fn escape_into(&self, text: &str, out: &mut String) {
        out.reserve(text.len());
        for c in text.chars() {
            self.escape_char(c, out);
        }
    }

    /// Escape `text` into a fresh string.
    fn escape(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.escape_into(text, &mut out);
        out
    }

    /// Get the name of this escaper (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Escaper for the `regex` crate syntax.
///
/// Delegates to [`regex::escape`] so the set of escaped characters always
/// agrees with the parser that will compile the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct RustRegexEscaper;

impl Escaper for RustRegexEscaper {
    fn escape_char(&self, c: char, out: &mut String) {
        let mut buf = [0u8; 4];
        out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
    }

    fn escape_into(&self, text: &str, out: &mut String) {
        out.push_str(&regex::escape(text));
    }

    fn name(&self) -> &'static str {
        "rust"
    }
}

/// Characters with special meaning in a POSIX ERE outside bracket expressions.
const POSIX_EXTENDED_META: &[char] = &[
    '.', '[', ']', '(', ')', '*', '+', '?', '{', '}', '|', '^', '$', '\\',
];

/// Escaper for POSIX extended regular expressions.
#[derive(Clone, Copy, Debug, Default)]
pub struct PosixExtendedEscaper;

impl Escaper for PosixExtendedEscaper {
    fn escape_char(&self, c: char, out: &mut String) {
        if POSIX_EXTENDED_META.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }

    fn name(&self) -> &'static str {
        "posix-extended"
    }
}
