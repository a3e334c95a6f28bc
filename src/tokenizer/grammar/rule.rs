//! A single lexical rule: a pattern and the name shown when it matches.

use std::fmt;

/// One `(pattern, name)` lexical definition.
///
/// The pattern is regular-expression text in the dialect of the `regex` crate. The name is a
/// display label only; it never reaches the token buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pattern: String,
    name: String,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            name: name.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.pattern, self.name)
    }
}
