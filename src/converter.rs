//! Term to regex conversion.
//!
//! [`TermConverter`] ties the pipeline together: the tokenizer splits and
//! classifies the term, each span is rendered according to its kind, and
//! the results are appended to one output buffer in input order:
//!
//! ```text
//! Separator → separator sub-pattern
//! Stopword  → copied verbatim
//! Funny     → escaped
//! Ordinary  → escaped, then orthographic rewrites
//! (end)     → trailing-context sub-pattern, if configured
//! ```
//!
//! A converter is immutable once built. Every call allocates its own output
//! buffer, so one converter can be shared freely between threads.
//!
//! # Examples
//!
//! ```
//! use termregex::converter::TermConverter;
//!
//! let converter = TermConverter::with_defaults().unwrap();
//! assert_eq!(converter.convert("anaemia").unwrap(), "[Aa]na?emias?[^A-Za-z0-9]");
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use regex::Regex;

use crate::analysis::span::{SpanKind, WordSpan};
use crate::analysis::stop_words::StopWords;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::term::TermTokenizer;
use crate::config::ConverterConfig;
use crate::error::{Result, TermRegexError};
use crate::escape::{Escaper, RegexDialect};
use crate::orthography::OrthographicTransformer;

/// Converts multi-word terms into regexes matching their orthographic variants.
#[derive(Clone)]
pub struct TermConverter {
    config: ConverterConfig,
    tokenizer: TermTokenizer,
    escaper: Arc<dyn Escaper>,
    transformer: OrthographicTransformer,
}

impl TermConverter {
    /// Build a converter, validating the configuration once.
    ///
    /// The split pattern must compile and must not match the empty string.
    /// For the Rust dialect the separator and trailing-context sub-patterns
    /// must compile as well.
    pub fn build(config: ConverterConfig) -> Result<Self> {
        let stop_words = StopWords::from_words(config.stop_words.iter().cloned())?;
        let tokenizer = TermTokenizer::new(&config.split_pattern, stop_words)?;

        if config.dialect == RegexDialect::Rust {
            validate_sub_pattern("separator", &config.separator_pattern)?;
            validate_sub_pattern("trailing context", &config.trailing_context)?;
        }

        log::info!(
            "built converter: dialect={} split={:?} separator={:?} trailing={:?} stop_words={}",
            config.dialect,
            config.split_pattern,
            config.separator_pattern,
            config.trailing_context,
            tokenizer.stop_words().len()
        );

        Ok(TermConverter {
            escaper: config.dialect.escaper(),
            config,
            tokenizer,
            transformer: OrthographicTransformer::new(),
        })
    }

    /// Build a converter from the default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::build(ConverterConfig::default())
    }

    /// Get the configuration this converter was built from.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Split and classify `term` without rendering it.
    pub fn spans(&self, term: &str) -> Result<Vec<WordSpan>> {
        Ok(self.tokenizer.tokenize(term)?.collect())
    }

    /// Convert `term` into a regex matching it and its orthographic variants.
    ///
    /// Every input is accepted; the empty term yields the trailing context
    /// alone.
    pub fn convert(&self, term: &str) -> Result<String> {
        let mut out = String::with_capacity(term.len() * 2 + self.config.trailing_context.len());
        let mut scratch = String::new();

        for span in self.tokenizer.tokenize(term)? {
            match span.kind {
                SpanKind::Separator => out.push_str(&self.config.separator_pattern),
                SpanKind::Stopword => out.push_str(&span.text),
                SpanKind::Funny => self.escaper.escape_into(&span.text, &mut out),
                SpanKind::Ordinary => {
                    scratch.clear();
                    self.escaper.escape_into(&span.text, &mut scratch);
                    self.transformer.transform_into(&scratch, &mut out);
                }
            }
        }
        out.push_str(&self.config.trailing_context);

        log::debug!("converted {term:?} -> {out:?}");
        Ok(out)
    }

    /// Convert many terms in parallel, preserving order.
    ///
    /// Fails with the first error encountered, if any.
    pub fn convert_batch<S>(&self, terms: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        terms
            .par_iter()
            .map(|term| self.convert(term.as_ref()))
            .collect()
    }

    /// Convert `term` and compile the result into a matcher.
    ///
    /// Only available for the Rust dialect.
    pub fn compile(&self, term: &str) -> Result<Regex> {
        if self.config.dialect != RegexDialect::Rust {
            return Err(TermRegexError::config(format!(
                "cannot compile patterns of the {} dialect",
                self.config.dialect
            )));
        }
        let pattern = self.convert(term)?;
        Regex::new(&pattern)
            .map_err(|e| TermRegexError::compile(format!("pattern {pattern:?} for {term:?}: {e}")))
    }
}

fn validate_sub_pattern(what: &str, pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Ok(());
    }
    Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| TermRegexError::config(format!("invalid {what} pattern {pattern:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> TermConverter {
        TermConverter::with_defaults().unwrap()
    }

    fn bare_converter() -> TermConverter {
        TermConverter::build(ConverterConfig::default().with_trailing_context("")).unwrap()
    }

    #[test]
    fn test_convert_single_word() {
        assert_eq!(
            converter().convert("anaemia").unwrap(),
            "[Aa]na?emias?[^A-Za-z0-9]"
        );
        assert_eq!(bare_converter().convert("anaemia").unwrap(), "[Aa]na?emias?");
    }

    #[test]
    fn test_convert_with_stop_words() {
        assert_eq!(
            converter().convert("of the anemia").unwrap(),
            "of[ _-]*the[ _-]*[Aa]nemias?[^A-Za-z0-9]"
        );
    }

    #[test]
    fn test_stop_words_pass_through() {
        let converter = bare_converter();
        for word in crate::analysis::stop_words::DEFAULT_STOP_WORDS {
            assert_eq!(converter.convert(word).unwrap(), *word);
        }
    }

    #[test]
    fn test_separators_are_equivalent() {
        let converter = converter();
        let expected = converter.convert("a b").unwrap();
        assert_eq!(expected, "[Aa][ _-]*[Bb][^A-Za-z0-9]");
        assert_eq!(converter.convert("a-b").unwrap(), expected);
        assert_eq!(converter.convert("a_b").unwrap(), expected);
        assert_eq!(converter.convert("a \t-b").unwrap(), expected);
    }

    #[test]
    fn test_funny_words_are_escaped_only() {
        assert_eq!(
            bare_converter().convert("5-HT (R)").unwrap(),
            r"5[ _-]*HTs?[ _-]*\(R\)"
        );
    }

    #[test]
    fn test_ordinary_words_are_escaped_before_rewriting() {
        assert_eq!(bare_converter().convert("e.g.").unwrap(), r"[Ee]\.g\.");
        assert_eq!(bare_converter().convert("c++").unwrap(), r"[Cc]\+\+");
    }

    #[test]
    fn test_empty_term() {
        assert_eq!(converter().convert("").unwrap(), "[^A-Za-z0-9]");
        assert_eq!(bare_converter().convert("").unwrap(), "");
    }

    #[test]
    fn test_posix_extended_dialect() {
        let config = ConverterConfig::default()
            .with_trailing_context("")
            .with_dialect(RegexDialect::PosixExtended);
        let converter = TermConverter::build(config).unwrap();

        assert_eq!(converter.convert("x-ray (c)").unwrap(), r"[Xx][ _-]*[Rr]a(y|ies)[ _-]*\(c\)");
        assert!(converter.compile("x-ray").is_err());
    }

    #[test]
    fn test_invalid_configuration() {
        let err = TermConverter::build(ConverterConfig::default().with_split_pattern("(")).err();
        assert!(err.is_some_and(|e| e.is_config()));

        let err =
            TermConverter::build(ConverterConfig::default().with_separator_pattern("[")).err();
        assert!(err.is_some_and(|e| e.is_config()));

        let err = TermConverter::build(ConverterConfig::default().with_trailing_context("(?")).err();
        assert!(err.is_some_and(|e| e.is_config()));

        let err = TermConverter::build(ConverterConfig::default().with_stop_words([""])).err();
        assert!(err.is_some_and(|e| e.is_config()));
    }

    #[test]
    fn test_compile_matches_variants() {
        let re = converter().compile("anaemia").unwrap();
        assert!(re.is_match("anaemia."));
        assert!(re.is_match("Anemias "));
        assert!(!re.is_match("anaemiax"));

        let re = converter().compile("coronary artery").unwrap();
        assert!(re.is_match("Coronary arteries,"));
        assert!(re.is_match("coronary-artery "));
    }

    #[test]
    fn test_convert_batch_preserves_order() {
        let converter = bare_converter();
        let terms = vec!["anaemia", "of", "x-ray", ""];
        let converted = converter.convert_batch(&terms).unwrap();
        let expected: Vec<String> = terms.iter().map(|t| converter.convert(t).unwrap()).collect();
        assert_eq!(converted, expected);
    }

    #[test]
    fn test_spans() {
        let spans = converter().spans("deficiency of iron").unwrap();
        let kinds: Vec<SpanKind> = spans.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SpanKind::Ordinary,
                SpanKind::Separator,
                SpanKind::Stopword,
                SpanKind::Separator,
                SpanKind::Ordinary,
            ]
        );
    }

    #[test]
    fn test_converter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TermConverter>();
    }
}
