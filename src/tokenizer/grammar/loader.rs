//! Grammar loading
//!
//! `GrammarLoader` reads grammar text from a file, a reader or a string and turns it into a
//! [`Grammar`]. Reading is the only fallible step: once the text is in memory every line either
//! yields a rule or is blank and skipped.
//!
//! # Example
//!
//! ```ignore
//! use tokenizer::GrammarLoader;
//!
//! // All rules from a file
//! let grammar = GrammarLoader::from_path("grammar.tok")?.load(None);
//!
//! // Only the first ten rules
//! let grammar = GrammarLoader::from_string("[0-9]+ NUMBER\n").load(Some(10));
//! ```

use super::{Grammar, Rule};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while getting hold of grammar text
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The grammar file could not be opened
    #[error("{}: File Not Found", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The grammar source was opened but could not be read
    #[error("failed to read grammar: {0}")]
    Read(#[from] io::Error),
}

/// Builds grammars from external text
#[derive(Debug, Clone)]
pub struct GrammarLoader {
    source: String,
}

impl GrammarLoader {
    /// Load grammar text from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GrammarError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                GrammarError::SourceUnavailable {
                    path: path.to_path_buf(),
                    source,
                }
            }
            _ => GrammarError::Read(source),
        })?;
        Ok(Self { source })
    }

    /// Load grammar text from any reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, GrammarError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Self { source })
    }

    /// Load grammar text from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Build a grammar from the first `count` rules of the source, or from all of them when
    /// `count` is `None`.
    ///
    /// A source with fewer rules than requested yields what it has; callers asking for a
    /// specific count are expected to know the source satisfies it.
    pub fn load(&self, count: Option<usize>) -> Grammar {
        let rules = self.source.lines().filter_map(parse_rule_line);
        match count {
            Some(count) => rules.take(count).collect(),
            None => rules.collect(),
        }
    }
}

/// Split one grammar line into its pattern and name.
///
/// Returns `None` for blank lines. The name is the remainder of the line after the pattern,
/// with leading whitespace trimmed; a line holding only a pattern gets an empty name.
pub fn parse_rule_line(line: &str) -> Option<Rule> {
    let line = line.strip_suffix('\r').unwrap_or(line).trim_start();
    if line.is_empty() {
        return None;
    }
    let (pattern, name) = match line.find(char::is_whitespace) {
        Some(split) => (&line[..split], line[split..].trim_start()),
        None => (line, ""),
    };
    Some(Rule::new(pattern, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn name_is_the_rest_of_the_line() {
        let rule = parse_rule_line("[0-9]+\t  DECIMAL CONSTANT").expect("rule");
        assert_eq!(rule.pattern(), "[0-9]+");
        assert_eq!(rule.name(), "DECIMAL CONSTANT");
    }

    #[test]
    fn name_keeps_inner_and_trailing_text() {
        let rule = parse_rule_line("if\\b KEYWORD  if ").expect("rule");
        assert_eq!(rule.name(), "KEYWORD  if ");
    }

    #[test]
    fn pattern_only_line_has_empty_name() {
        let rule = parse_rule_line("foo").expect("rule");
        assert_eq!(rule.pattern(), "foo");
        assert_eq!(rule.name(), "");
    }

    #[test]
    fn blank_lines_and_carriage_returns() {
        assert_eq!(parse_rule_line(""), None);
        assert_eq!(parse_rule_line("   \t"), None);
        assert_eq!(parse_rule_line("\r"), None);
        let rule = parse_rule_line(";  SEMICOLON\r").expect("rule");
        assert_eq!(rule.name(), "SEMICOLON");
    }

    #[test]
    fn load_respects_requested_count() {
        let loader = GrammarLoader::from_string("a A\n\nb B\nc C\n");
        assert_eq!(loader.load(None).len(), 3);
        assert_eq!(loader.load(Some(2)).len(), 2);
        assert_eq!(loader.load(Some(2)).get(1), Some(&Rule::new("b", "B")));
        assert_eq!(loader.load(Some(10)).len(), 3);
    }

    #[test]
    fn loads_from_file_and_reader() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[a-z]+ WORD").expect("write");
        let grammar = GrammarLoader::from_path(file.path()).expect("load").load(None);
        assert_eq!(grammar.rules(), &[Rule::new("[a-z]+", "WORD")]);

        let grammar = GrammarLoader::from_reader("x X\n".as_bytes())
            .expect("read")
            .load(None);
        assert_eq!(grammar.len(), 1);
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = GrammarLoader::from_path("definitely/not/here.tok").unwrap_err();
        assert!(matches!(err, GrammarError::SourceUnavailable { .. }));
        assert_eq!(err.to_string(), "definitely/not/here.tok: File Not Found");
    }
}
