//! Anchored Pattern Matching
//!
//! A rule's pattern is compiled once into a [`CompiledPattern`]. Matching is always anchored:
//! the scanner hands over the remaining suffix of the input and a pattern only counts as
//! matching when its match starts at offset 0 of that suffix. A pattern that would match
//! further along is reported as no match.
//!
//! ## Example
//!
//! ```text
//! Pattern:  [0-9]+
//! Text:     "42 apples"   -> matched, length 2
//! Text:     "apples 42"   -> no match (a match exists, but not at offset 0)
//! ```
//!
//! Anchoring is done by wrapping the pattern as `^(?:pattern)`, so `^` and `\b` inside a pattern
//! treat the start of the suffix as the start of the text.

use regex::Regex;
use thiserror::Error;

/// Result of testing one pattern at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Whether the pattern matched at offset 0
    pub matched: bool,

    /// Byte length of the match; 0 when nothing matched (or the pattern matched empty)
    pub length: usize,
}

impl PatternMatch {
    /// A successful match of `length` bytes
    pub fn matched(length: usize) -> Self {
        Self {
            matched: true,
            length,
        }
    }

    /// A failed match
    pub fn no_match() -> Self {
        Self {
            matched: false,
            length: 0,
        }
    }
}

/// A rule pattern that is not valid in the matching dialect
#[derive(Debug, Error)]
#[error("rule {index} ({name}): {source}")]
pub struct PatternError {
    /// Position of the offending rule in its grammar
    pub index: usize,
    pub pattern: String,
    pub name: String,
    #[source]
    pub source: regex::Error,
}

/// A pattern compiled for anchored matching
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    regex: Regex,
}

impl CompiledPattern {
    /// Compile `pattern` for anchored matching.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        // Validate on its own first: wrapping can balance a stray `)` into a different pattern
        Regex::new(pattern)?;
        let regex = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern text as written in the grammar
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Test whether the pattern matches starting exactly at offset 0 of `text`.
    pub fn try_match_at(&self, text: &str) -> PatternMatch {
        match self.regex.find(text) {
            Some(found) if found.start() == 0 => PatternMatch::matched(found.end()),
            _ => PatternMatch::no_match(),
        }
    }
}
