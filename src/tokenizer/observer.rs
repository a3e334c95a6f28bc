//! Match events
//!
//! The scanner itself prints nothing. Each time a rule is selected it produces a [`MatchEvent`];
//! whoever drives the scan decides what to do with it through a [`MatchObserver`]. The
//! console format of the command-line tool, one `<text>\t<rule name>` line per match, is
//! [`DiagnosticWriter`].

use super::grammar::Rule;
use serde::Serialize;
use std::io::{self, Write};
use std::ops::Range;

/// A rule selected at one scan position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent<'a> {
    /// The matched substring (may be empty for patterns that match empty)
    pub text: &'a str,
    /// Index of the selected rule in its grammar
    pub rule_index: usize,
    pub rule: &'a Rule,
    /// Byte range of `text` in the scanned input
    pub span: Range<usize>,
}

impl MatchEvent<'_> {
    /// Detach the event from the scanner and the input.
    pub fn to_record(&self) -> MatchRecord {
        MatchRecord {
            text: self.text.to_string(),
            rule: self.rule.name().to_string(),
            start: self.span.start,
            end: self.span.end,
        }
    }
}

/// Owned form of a [`MatchEvent`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub text: String,
    pub rule: String,
    pub start: usize,
    pub end: usize,
}

/// Receives match events in scan order
pub trait MatchObserver {
    fn on_match(&mut self, event: &MatchEvent<'_>);
}

impl<F> MatchObserver for F
where
    F: FnMut(&MatchEvent<'_>),
{
    fn on_match(&mut self, event: &MatchEvent<'_>) {
        self(event)
    }
}

/// Ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl MatchObserver for NoDiagnostics {
    fn on_match(&mut self, _event: &MatchEvent<'_>) {}
}

/// Collects owned records of every event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    records: Vec<MatchRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MatchRecord> {
        self.records
    }
}

impl MatchObserver for EventLog {
    fn on_match(&mut self, event: &MatchEvent<'_>) {
        self.records.push(event.to_record());
    }
}

/// Writes one `<text>\t<rule name>` line per event.
///
/// Writing stops at the first I/O error, which is kept and returned by [`finish`](Self::finish).
#[derive(Debug)]
pub struct DiagnosticWriter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> DiagnosticWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and return the writer, or the first error hit while writing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> MatchObserver for DiagnosticWriter<W> {
    fn on_match(&mut self, event: &MatchEvent<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = writeln!(self.out, "{}\t{}", event.text, event.rule.name()) {
            self.error = Some(error);
        }
    }
}
