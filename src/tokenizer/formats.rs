//! Output renderings
//!
//! The binary prints a scan in one of the [`OutputFormat`]s. `tsv` is streamed while scanning;
//! the other two are rendered once the scan is over.

use super::config::OutputFormat;
use super::error::Result;
use super::observer::{DiagnosticWriter, EventLog, MatchRecord};
use super::scanner::Scanner;
use super::sink::TokenSink;
use std::io::Write;

/// Scan `input` and write it to `out` in `format`, returning the token buffer.
pub fn write_scan<W: Write>(
    scanner: &Scanner,
    input: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<TokenSink> {
    match format {
        OutputFormat::Tsv => {
            let mut diagnostics = DiagnosticWriter::new(&mut *out);
            let sink = scanner.scan_with(input, &mut diagnostics)?;
            diagnostics.finish()?;
            Ok(sink)
        }
        OutputFormat::Tokens => {
            let sink = scanner.scan(input)?;
            out.write_all(render_tokens(&sink).as_bytes())?;
            Ok(sink)
        }
        OutputFormat::Json => {
            let mut log = EventLog::new();
            let sink = scanner.scan_with(input, &mut log)?;
            writeln!(out, "{}", render_json(log.records())?)?;
            Ok(sink)
        }
    }
}

/// One token per line
pub fn render_tokens(sink: &TokenSink) -> String {
    sink.tokens().fold(String::new(), |mut text, token| {
        text.push_str(token);
        text.push('\n');
        text
    })
}

/// Pretty JSON array of match records
pub fn render_json(records: &[MatchRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
