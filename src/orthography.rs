//! Orthographic rewrites for ordinary words.
//!
//! Three rewrites turn an escaped word into a pattern that also matches
//! common spelling variants. They run in this order:
//!
//! 1. Digraph: `Xae` becomes `Xa?e` for any single character `X`, so
//!    "anaemia" also matches "anemia". A leading `ae` is left alone.
//! 2. Case class: if the word contains an ASCII lowercase letter and starts
//!    with an ASCII letter, the first letter becomes `[Aa]`.
//! 3. Plural: for words longer than one character (measured after step 1,
//!    before step 2), a trailing `y` becomes `(y|ies)` and any other
//!    trailing letter except `s`/`S` gains `s?`.
//!
//! # Examples
//!
//! ```
//! use termregex::orthography::OrthographicTransformer;
//!
//! let transformer = OrthographicTransformer::new();
//! assert_eq!(transformer.transform("anaemia"), "[Aa]na?emias?");
//! assert_eq!(transformer.transform("artery"), "[Aa]rter(y|ies)");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Any character followed by `ae`.
static DIGRAPH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(.)ae").expect("digraph pattern should be valid"));

const DIGRAPH_REPLACEMENT: &str = "${1}a?e";

const PLURAL_Y: &str = "(y|ies)";

const PLURAL_S: &str = "s?";

/// Applies the digraph, case-class and plural rewrites to escaped words.
#[derive(Clone, Debug, Default)]
pub struct OrthographicTransformer;

impl OrthographicTransformer {
    /// Create a new transformer.
    pub fn new() -> Self {
        OrthographicTransformer
    }

    /// Rewrite an escaped ordinary word into a fresh string.
    pub fn transform(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() + 8);
        self.transform_into(word, &mut out);
        out
    }

    /// Rewrite an escaped ordinary word, appending the result to `out`.
    pub fn transform_into(&self, word: &str, out: &mut String) {
        let word = substitute_digraphs(word);
        let length = word.chars().count();

        let start = out.len();
        push_case_class(&word, out);
        if length > 1 {
            push_plural_suffix(out, start);
        }
    }
}

/// Replace every `Xae` with `Xa?e`, scanning left to right without overlap.
pub fn substitute_digraphs(word: &str) -> String {
    DIGRAPH_PATTERN
        .replace_all(word, DIGRAPH_REPLACEMENT)
        .into_owned()
}

/// Append `word`, widening its first letter to `[Uu]` when the word has a
/// lowercase letter somewhere.
pub fn push_case_class(word: &str, out: &mut String) {
    let mut chars = word.chars();
    match chars.next() {
        Some(first)
            if first.is_ascii_alphabetic() && word.bytes().any(|b| b.is_ascii_lowercase()) =>
        {
            out.push('[');
            out.push(first.to_ascii_uppercase());
            out.push(first.to_ascii_lowercase());
            out.push(']');
            out.push_str(chars.as_str());
        }
        _ => out.push_str(word),
    }
}

/// Rewrite the tail of `out[start..]` to tolerate an English plural.
fn push_plural_suffix(out: &mut String, start: usize) {
    let Some(last) = out[start..].chars().next_back() else {
        return;
    };

    if last == 'y' {
        out.pop();
        out.push_str(PLURAL_Y);
    } else if last != 's' && last != 'S' && last.is_alphabetic() {
        out.push_str(PLURAL_S);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(word: &str) -> String {
        OrthographicTransformer::new().transform(word)
    }

    #[test]
    fn test_digraph_substitution() {
        assert_eq!(substitute_digraphs("anaemia"), "ana?emia");
        assert_eq!(substitute_digraphs("haemorrhage"), "ha?emorrhage");
        assert_eq!(substitute_digraphs("oesophagus"), "oesophagus");
    }

    #[test]
    fn test_leading_digraph_is_kept() {
        assert_eq!(substitute_digraphs("aetiology"), "aetiology");
        assert_eq!(substitute_digraphs("ae"), "ae");
    }

    #[test]
    fn test_digraph_matches_do_not_overlap() {
        // "aeae": the first match is "eae" at offset 1.
        assert_eq!(substitute_digraphs("aeae"), "aea?e");
        // "xaeae": "xae" consumes the first "ae", leaving the second without context.
        assert_eq!(substitute_digraphs("xaeae"), "xa?eae");
    }

    #[test]
    fn test_case_class() {
        let mut out = String::new();
        push_case_class("anemia", &mut out);
        assert_eq!(out, "[Aa]nemia");

        let mut out = String::new();
        push_case_class("Anemia", &mut out);
        assert_eq!(out, "[Aa]nemia");
    }

    #[test]
    fn test_case_class_needs_lowercase() {
        let mut out = String::new();
        push_case_class("DNA", &mut out);
        assert_eq!(out, "DNA");

        let mut out = String::new();
        push_case_class("A1", &mut out);
        assert_eq!(out, "A1");
    }

    #[test]
    fn test_plural_y() {
        assert_eq!(transform("artery"), "[Aa]rter(y|ies)");
        assert_eq!(transform("ay"), "[Aa](y|ies)");
        // Uppercase Y is an ordinary letter.
        assert_eq!(transform("XY"), "XYs?");
    }

    #[test]
    fn test_plural_s() {
        assert_eq!(transform("anemia"), "[Aa]nemias?");
        assert_eq!(transform("HT"), "HTs?");
        assert_eq!(transform("virus"), "[Vv]irus");
        assert_eq!(transform("AIDS"), "AIDS");
    }

    #[test]
    fn test_plural_after_non_ascii_letter() {
        assert_eq!(transform("café"), "[Cc]afés?");
        assert_eq!(transform("Ω"), "Ω");
    }

    #[test]
    fn test_no_plural_after_non_letter() {
        assert_eq!(transform("Il2"), "[Ii]l2");
        assert_eq!(transform(r"e\.g\."), r"[Ee]\.g\.");
    }

    #[test]
    fn test_single_character_word() {
        assert_eq!(transform("a"), "[Aa]");
        assert_eq!(transform("B"), "B");
        assert_eq!(transform("y"), "[Yy]");
    }

    #[test]
    fn test_end_to_end_word() {
        assert_eq!(transform("anaemia"), "[Aa]na?emias?");
        assert_eq!(transform("Haematology"), "[Hh]a?ematolog(y|ies)");
    }

    #[test]
    fn test_transform_into_appends() {
        let mut out = String::from("x[ _-]*");
        OrthographicTransformer::new().transform_into("cell", &mut out);
        assert_eq!(out, "x[ _-]*[Cc]ells?");
    }
}
