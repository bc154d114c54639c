//! Rule-based term tokenizer.
//!
//! At every scan offset four rules are tried:
//!
//! | Rule      | Matches                                                   |
//! |-----------|-----------------------------------------------------------|
//! | Separator | adjacent non-empty split-pattern matches starting here    |
//! | Stopword  | a stop word starting here and ending at a word boundary   |
//! | Ordinary  | the run up to the next separator, starting with `[A-Za-z]`|
//! | Funny     | the run up to the next separator, starting otherwise      |
//!
//! The longest candidate wins. Equal lengths are resolved by
//! [`SpanKind::precedence`]: Stopword, then Ordinary, then Funny, then
//! Separator. The scanner then resumes right after the winning span.

use std::ops::Range;

use regex::{Match, Regex};

use super::Tokenizer;
use crate::analysis::span::{SpanKind, SpanStream, WordSpan};
use crate::analysis::stop_words::StopWords;
use crate::error::{Result, TermRegexError};

/// Splits a term on a separator regex and classifies the resulting words.
#[derive(Clone, Debug)]
pub struct TermTokenizer {
    /// Pattern matching one separator run
    split: Regex,
    /// Words copied verbatim
    stop_words: StopWords,
}

impl TermTokenizer {
    /// Create a tokenizer from a split pattern and a stop word set.
    ///
    /// Fails if the pattern does not compile or matches the empty string.
    pub fn new(split_pattern: &str, stop_words: StopWords) -> Result<Self> {
        let split = Regex::new(split_pattern).map_err(|e| {
            TermRegexError::config(format!("invalid split pattern {split_pattern:?}: {e}"))
        })?;
        if split.is_match("") {
            return Err(TermRegexError::config(format!(
                "split pattern {split_pattern:?} matches the empty string"
            )));
        }

        Ok(TermTokenizer { split, stop_words })
    }

    /// Get the split pattern used by this tokenizer.
    pub fn split_pattern(&self) -> &str {
        self.split.as_str()
    }

    /// Get the stop words recognized by this tokenizer.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Leftmost non-empty separator run starting at or after `from`.
    ///
    /// Adjacent matches are merged, so a run is as long as possible even
    /// when an alternation in the split pattern prefers a shorter branch.
    fn next_separator(&self, text: &str, from: usize) -> Option<Range<usize>> {
        let first = self.next_separator_match(text, from)?;
        let mut end = first.end();
        while let Some(m) = self.split.find_at(text, end) {
            if m.start() != end || m.is_empty() {
                break;
            }
            end = m.end();
        }
        Some(first.start()..end)
    }

    /// Leftmost non-empty match of the split pattern at or after `from`.
    fn next_separator_match<'t>(&self, text: &'t str, from: usize) -> Option<Match<'t>> {
        let mut at = from;
        while at <= text.len() {
            let m = self.split.find_at(text, at)?;
            if !m.is_empty() {
                return Some(m);
            }
            // Step over an empty match to the next char boundary.
            at = m.end() + text[m.end()..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }

    /// Whether `offset` ends a word: end of input or the start of a separator.
    fn is_word_boundary(&self, text: &str, offset: usize) -> bool {
        offset == text.len()
            || self
                .next_separator(text, offset)
                .is_some_and(|r| r.start == offset)
    }

    /// Decide the span starting at `pos`.
    fn classify_at(&self, text: &str, pos: usize) -> Result<WordSpan> {
        let rest = &text[pos..];
        let separator = self.next_separator(text, pos);
        let mut candidates: Vec<(usize, SpanKind)> = Vec::with_capacity(3);

        let word_end = match separator {
            Some(r) if r.start == pos => {
                candidates.push((r.len(), SpanKind::Separator));
                pos
            }
            Some(r) => r.start,
            None => text.len(),
        };
        if word_end > pos {
            let kind = match rest.chars().next() {
                Some(c) if c.is_ascii_alphabetic() => SpanKind::Ordinary,
                _ => SpanKind::Funny,
            };
            candidates.push((word_end - pos, kind));
        }

        if let Some(word) = self
            .stop_words
            .prefixes_of(rest)
            .find(|w| self.is_word_boundary(text, pos + w.len()))
        {
            candidates.push((word.len(), SpanKind::Stopword));
        }

        let (len, kind) = candidates
            .into_iter()
            .max_by_key(|&(len, kind)| (len, kind.precedence()))
            .ok_or_else(|| TermRegexError::classification(pos, text))?;

        Ok(WordSpan::new(&rest[..len], pos, kind))
    }
}

impl Tokenizer for TermTokenizer {
    fn tokenize(&self, text: &str) -> Result<SpanStream> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let span = self.classify_at(text, pos)?;
            log::debug!("classified {span}");
            pos = span.end_offset;
            spans.push(span);
        }

        Ok(Box::new(spans.into_iter()))
    }

    fn name(&self) -> &'static str {
        "term"
    }
}
