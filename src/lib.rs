//! # tokenizer
//!
//! A grammar-driven lexical scanner.
//!
//! A grammar is an ordered list of `(pattern, name)` rules, usually loaded from a plain text
//! file (see [grammar](tokenizer::grammar)). The scanner walks the input left to right: it skips
//! whitespace, tries every rule anchored at the current position in grammar order, and keeps the
//! first one that matches. Characters no rule recognizes are dropped silently.
//!
//! Order is priority. This is not a longest-match lexer: an earlier rule wins even when a later
//! one would have matched more input.
//!
//! File Layout
//!
//! src/tokenizer
//!   ├── grammar     Rules, grammars and the grammar file loader
//!   ├── matcher     Anchored pattern matching over the remaining input
//!   ├── scanner     The skip / match / advance loop
//!   ├── sink        The capacity-bounded token buffer handed to callers
//!   ├── observer    Match events and the diagnostics printed from them
//!   ├── formats     Output renderings used by the binary
//!   ├── config      Layered TOML configuration
//!   └── testing     Acceptance fixtures and the self-test runner

pub mod tokenizer;

pub use tokenizer::error::{Error, Result};
pub use tokenizer::grammar::{Grammar, GrammarLoader, Rule};
pub use tokenizer::scanner::Scanner;
pub use tokenizer::sink::TokenSink;
