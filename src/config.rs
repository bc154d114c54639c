//! Configuration for term conversion.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::stop_words::DEFAULT_STOP_WORDS;
use crate::error::Result;
use crate::escape::RegexDialect;

/// Pattern splitting a term into words: runs of space, tab, hyphen or underscore.
///
/// Newlines are deliberately not separators.
pub const DEFAULT_SPLIT_PATTERN: &str = r"[ \t_-]+";

/// Sub-pattern emitted between the patterns generated for two words.
pub const DEFAULT_SEPARATOR_PATTERN: &str = "[ _-]*";

/// Sub-pattern appended once at the end of every generated regex.
pub const DEFAULT_TRAILING_CONTEXT: &str = "[^A-Za-z0-9]";

/// Configuration of a [`TermConverter`](crate::converter::TermConverter).
///
/// Every field has a default, so a JSON document may override any subset:
///
/// ```
/// use termregex::config::ConverterConfig;
///
/// let config = ConverterConfig::from_json_str(r#"{ "trailing_context": "" }"#).unwrap();
/// assert_eq!(config.trailing_context, "");
/// assert_eq!(config.split_pattern, ConverterConfig::default().split_pattern);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Regex (in `regex` crate syntax) matching a separator run in the input term.
    pub split_pattern: String,
    /// Sub-pattern written to the output in place of each separator run.
    pub separator_pattern: String,
    /// Sub-pattern appended once at the end of the output; empty to omit.
    pub trailing_context: String,
    /// Words copied to the output verbatim, matched case-sensitively.
    pub stop_words: Vec<String>,
    /// Dialect of the generated regex.
    pub dialect: RegexDialect,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            split_pattern: DEFAULT_SPLIT_PATTERN.to_string(),
            separator_pattern: DEFAULT_SEPARATOR_PATTERN.to_string(),
            trailing_context: DEFAULT_TRAILING_CONTEXT.to_string(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            dialect: RegexDialect::default(),
        }
    }
}

impl ConverterConfig {
    /// Set the pattern that splits a term into words.
    pub fn with_split_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.split_pattern = pattern.into();
        self
    }

    /// Set the sub-pattern emitted between words.
    pub fn with_separator_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.separator_pattern = pattern.into();
        self
    }

    /// Set the trailing-context sub-pattern; an empty string disables it.
    pub fn with_trailing_context<S: Into<String>>(mut self, pattern: S) -> Self {
        self.trailing_context = pattern.into();
        self
    }

    /// Replace the stop word list.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Set the target regex dialect.
    pub fn with_dialect(mut self, dialect: RegexDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
