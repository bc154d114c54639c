//! Command implementation for the termregex CLI.

use std::io::{self, BufRead, Write};

use crate::cli::args::TermRegexArgs;
use crate::cli::output::{ConversionSummary, write_conversion};
use crate::config::ConverterConfig;
use crate::converter::TermConverter;
use crate::error::Result;
use crate::escape::RegexDialect;

/// Execute the CLI: convert every line of stdin to stdout.
pub fn execute_command(args: TermRegexArgs) -> Result<()> {
    let converter = TermConverter::build(build_config(&args)?)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = convert_lines(&converter, stdin.lock(), stdout.lock(), &args)?;

    log::info!("converted {} terms", summary.terms);
    if summary.failed_verifications > 0 {
        return Err(anyhow::anyhow!(
            "{} of {} terms failed verification",
            summary.failed_verifications,
            summary.terms
        )
        .into());
    }
    Ok(())
}

/// Assemble the converter configuration: file (or defaults), then flags.
pub fn build_config(args: &TermRegexArgs) -> Result<ConverterConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            ConverterConfig::from_json_file(path)?
        }
        None => ConverterConfig::default(),
    };

    if let Some(pattern) = &args.split_pattern {
        config.split_pattern = pattern.clone();
    }
    if let Some(pattern) = &args.separator_pattern {
        config.separator_pattern = pattern.clone();
    }
    if let Some(pattern) = &args.trailing_context {
        config.trailing_context = pattern.clone();
    }
    if args.no_trailing_context {
        config.trailing_context.clear();
    }
    if let Some(words) = &args.stop_words {
        config.stop_words = words.clone();
    }
    if args.no_stop_words {
        config.stop_words.clear();
    }
    if let Some(dialect) = args.dialect {
        config.dialect = dialect.into();
    }

    Ok(config)
}

/// Convert each line of `reader`, writing one result line per input line.
///
/// Conversion and I/O errors abort the run. Verification failures are
/// logged and counted.
pub fn convert_lines<R: BufRead, W: Write>(
    converter: &TermConverter,
    mut reader: R,
    mut writer: W,
    args: &TermRegexArgs,
) -> Result<ConversionSummary> {
    let verify = args.verify && converter.config().dialect == RegexDialect::Rust;
    if args.verify && !verify {
        log::warn!(
            "--verify is only supported for the rust dialect, not {}",
            converter.config().dialect
        );
    }

    let mut summary = ConversionSummary::default();
    let mut buf = Vec::new();
    while read_line_lossy(&mut reader, &mut buf)? {
        let term = String::from_utf8_lossy(&buf);
        let term = term.as_ref();
        let regex = converter.convert(term)?;

        if args.explain {
            for span in converter.spans(term)? {
                log::info!("{term:?}: {span}");
            }
        }
        if verify && !verify_conversion(converter, term) {
            summary.failed_verifications += 1;
        }

        write_conversion(&mut writer, term, &regex, args.output_format)?;
        summary.terms += 1;
    }
    writer.flush()?;

    Ok(summary)
}

/// Read one line into `buf` without its `\n` or `\r\n` terminator.
///
/// Returns `false` at end of input. Invalid UTF-8 is left for the caller
/// to replace rather than failing the run.
fn read_line_lossy<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}

/// Check that the regex generated for `term` compiles and matches the term,
/// either alone or followed by a space for trailing contexts that need one.
pub fn verify_conversion(converter: &TermConverter, term: &str) -> bool {
    match converter.compile(term) {
        Ok(re) if re.is_match(term) || re.is_match(&format!("{term} ")) => true,
        Ok(re) => {
            log::warn!("regex {:?} does not match its term {term:?}", re.as_str());
            false
        }
        Err(e) => {
            log::warn!("{e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;

    fn args(extra: &[&str]) -> TermRegexArgs {
        let mut argv = vec!["termregex"];
        argv.extend_from_slice(extra);
        TermRegexArgs::try_parse_from(argv).unwrap()
    }

    fn run(extra: &[&str], input: &str) -> (String, ConversionSummary) {
        let args = args(extra);
        let converter = TermConverter::build(build_config(&args).unwrap()).unwrap();
        let mut out = Vec::new();
        let summary = convert_lines(&converter, Cursor::new(input), &mut out, &args).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_convert_lines() {
        let (out, summary) = run(&[], "anaemia\nof the anemia\n");
        assert_eq!(
            out,
            "[Aa]na?emias?[^A-Za-z0-9]\nof[ _-]*the[ _-]*[Aa]nemias?[^A-Za-z0-9]\n"
        );
        assert_eq!(summary.terms, 2);
    }

    #[test]
    fn test_empty_lines_are_converted() {
        let (out, summary) = run(&["--no-trailing-context"], "\nx\n");
        assert_eq!(out, "\n[Xx]\n");
        assert_eq!(summary.terms, 2);
    }

    #[test]
    fn test_flag_overrides() {
        let (out, _) = run(
            &["--no-trailing-context", "--stop-words", "de", "--separator", r"\s+"],
            "maladie de Crohn\n",
        );
        assert_eq!(out, r"[Mm]aladies?\s+de\s+[Cc]rohns?".to_string() + "\n");

        let (out, _) = run(&["--no-trailing-context", "--no-stop-words"], "of\n");
        assert_eq!(out, "[Oo]fs?\n");
    }

    #[test]
    fn test_config_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"trailing_context": "$", "stop_words": ["x"]}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let config = build_config(&args(&["--config", path])).unwrap();
        assert_eq!(config.trailing_context, "$");
        assert_eq!(config.stop_words, vec!["x".to_string()]);

        let config = build_config(&args(&["--config", path, "--no-trailing-context"])).unwrap();
        assert_eq!(config.trailing_context, "");
    }

    #[test]
    fn test_json_output() {
        let (out, _) = run(&["--format", "json", "--no-trailing-context"], "x-ray\n");
        assert_eq!(out, "{\"term\":\"x-ray\",\"regex\":\"[Xx][ _-]*[Rr]a(y|ies)\"}\n");
    }

    #[test]
    fn test_verify() {
        let (_, summary) = run(&["--verify"], "anaemia\ncoronary artery\n5-HT (R)\n");
        assert_eq!(summary.failed_verifications, 0);

        // Tabs split words but the default separator sub-pattern does not match them.
        let (_, summary) = run(&["--verify"], "a\tb\n");
        assert_eq!(summary.failed_verifications, 1);
    }

    #[test]
    fn test_verify_with_end_anchor() {
        let (out, summary) = run(&["--verify", "--trailing-context", "$"], "anemia\n");
        assert_eq!(out, "[Aa]nemias?$\n");
        assert_eq!(summary.failed_verifications, 0);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let args = args(&["--no-trailing-context"]);
        let converter = TermConverter::build(build_config(&args).unwrap()).unwrap();
        let mut out = Vec::new();
        let input: &[u8] = b"an\xffemia\r\nx\n";

        let summary = convert_lines(&converter, input, &mut out, &args).unwrap();
        assert_eq!(summary.terms, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[Aa]n\u{fffd}emias?\n[Xx]\n"
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        let (out, summary) = run(&["--no-trailing-context"], "x\ny");
        assert_eq!(out, "[Xx]\n[Yy]\n");
        assert_eq!(summary.terms, 2);
    }

    #[test]
    fn test_verify_skipped_for_posix() {
        let (_, summary) = run(&["--verify", "--dialect", "posix-extended"], "a\tb\n");
        assert_eq!(summary.failed_verifications, 0);
    }

    #[test]
    fn test_invalid_config_file() {
        let result = build_config(&args(&["--config", "/nonexistent/termregex.json"]));
        assert!(result.is_err());
    }
}
