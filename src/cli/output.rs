//! Output formatting for converted terms.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::Result;

/// One converted term.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionRecord<'a> {
    pub term: &'a str,
    pub regex: &'a str,
}

/// Totals reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub terms: usize,
    pub failed_verifications: usize,
}

/// Write one converted term in the requested format, followed by a newline.
pub fn write_conversion<W: Write>(
    writer: &mut W,
    term: &str,
    regex: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => writeln!(writer, "{}", printable(regex))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, &ConversionRecord { term, regex })?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Render control characters visibly so each result stays on one line.
///
/// `\n`, `\r` and `\t` keep their usual escapes; other control characters
/// become `\uXXXX`. Everything else, backslashes included, is unchanged.
pub fn printable(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
