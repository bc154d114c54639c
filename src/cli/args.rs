//! Command line argument parsing for the termregex CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::escape::RegexDialect;

/// termregex - convert vocabulary terms read from stdin into regexes
#[derive(Parser, Debug, Clone)]
#[command(name = "termregex")]
#[command(about = "Convert multi-word terms into regexes matching their orthographic variants")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TermRegexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Converter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "TERMREGEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pattern splitting a term into words
    #[arg(long = "split", value_name = "REGEX")]
    pub split_pattern: Option<String>,

    /// Sub-pattern emitted between words
    #[arg(long = "separator", value_name = "REGEX")]
    pub separator_pattern: Option<String>,

    /// Sub-pattern appended once at the end of every regex
    #[arg(long, value_name = "REGEX", conflicts_with = "no_trailing_context")]
    pub trailing_context: Option<String>,

    /// Do not append a trailing-context sub-pattern
    #[arg(long)]
    pub no_trailing_context: bool,

    /// Comma-separated stop words copied verbatim
    #[arg(long, value_name = "WORDS", value_delimiter = ',', conflicts_with = "no_stop_words")]
    pub stop_words: Option<Vec<String>>,

    /// Do not treat any word as a stop word
    #[arg(long)]
    pub no_stop_words: bool,

    /// Dialect of the generated regexes
    #[arg(short, long)]
    pub dialect: Option<DialectArg>,

    /// Log the classified spans of every term (needs -vv)
    #[arg(long)]
    pub explain: bool,

    /// Compile every result and check that it matches its own term
    #[arg(long)]
    pub verify: bool,
}

impl TermRegexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One printable regex per line
    Human,
    /// One JSON object per line with the term and its regex
    Json,
}

/// Regex dialects selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectArg {
    /// Syntax of the Rust `regex` crate
    Rust,
    /// POSIX extended regular expressions
    PosixExtended,
}

impl From<DialectArg> for RegexDialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Rust => RegexDialect::Rust,
            DialectArg::PosixExtended => RegexDialect::PosixExtended,
        }
    }
}
