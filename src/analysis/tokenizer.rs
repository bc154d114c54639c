//! Tokenizers splitting a term into classified spans.
//!
//! A tokenizer is the first stage of conversion: it walks the term once,
//! left to right, and yields separator and word spans in input order. The
//! concatenation of the yielded span texts is always the input itself.
//!
//! # Examples
//!
//! ```
//! use termregex::analysis::span::SpanKind;
//! use termregex::analysis::stop_words::StopWords;
//! use termregex::analysis::tokenizer::Tokenizer;
//! use termregex::analysis::tokenizer::term::TermTokenizer;
//!
//! let tokenizer = TermTokenizer::new(r"[ \t_-]+", StopWords::new()).unwrap();
//! let kinds: Vec<_> = tokenizer.tokenize("of anemia").unwrap().map(|s| s.kind).collect();
//! assert_eq!(kinds, vec![SpanKind::Stopword, SpanKind::Separator, SpanKind::Ordinary]);
//! ```

use crate::analysis::span::SpanStream;
use crate::error::Result;

/// Trait for tokenizers that split a term into classified spans.
///
/// The trait requires `Send + Sync` so one configured tokenizer can serve
/// concurrent conversions.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given term into a stream of spans.
    ///
    /// # Arguments
    ///
    /// * `text` - The term to tokenize
    ///
    /// # Returns
    ///
    /// A `SpanStream` covering the whole input, or a classification error
    /// if some offset is accepted by no rule.
    fn tokenize(&self, text: &str) -> Result<SpanStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod term;
