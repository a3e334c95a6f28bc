//! Crate-level error type
//!
//! Each component reports its own error type; [`Error`] gathers them for callers that drive the
//! whole pipeline (load grammar, build scanner, scan, render). None of these errors is retried
//! and the library never terminates the process: the binary prints the message and exits with
//! a non-zero status.

use super::grammar::GrammarError;
use super::matcher::PatternError;
use super::sink::CapacityError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The grammar source could not be opened or read
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// A grammar rule's pattern is not a valid pattern
    #[error("invalid pattern in {0}")]
    Pattern(#[from] PatternError),

    /// The token buffer was too small for the input
    #[error(transparent)]
    Capacity(#[from] CapacityError),

    /// Wrong argument shape or a non-positive rule count
    #[error("{0}")]
    InvalidInvocation(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to serialize tokens: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// A self-test case produced different tokens than expected
    #[error("test {case} failed for input {input:?}: expected {expected:?}, got {actual:?}")]
    FixtureMismatch {
        case: usize,
        input: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },
}
