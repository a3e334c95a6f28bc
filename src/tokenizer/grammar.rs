//! Grammars
//!
//!     A grammar is the ordered list of rules the scanner tries at every position. Order is
//!     priority: at any position the lowest-index rule that matches is selected, even when a
//!     later rule would consume more input. Grammars are built once (usually by the
//!     [loader](loader)) and are read-only afterwards.
//!
//! Grammar Files
//!
//!     One rule per line: a whitespace-delimited pattern, then the rest of the line as the
//!     rule's name. The name is free text and may contain spaces:
//!
//!         0[xX][0-9a-fA-F]+    HEXADECIMAL CONSTANT
//!         [A-Za-z_][A-Za-z0-9_]*    IDENTIFIER
//!
//!     There is no comment syntax; `#` is an ordinary pattern.

pub mod loader;
pub mod rule;

pub use loader::{GrammarError, GrammarLoader};
pub use rule::Rule;

use once_cell::sync::Lazy;

/// Text of the built-in C grammar (the same file that ships as `grammar.tok`)
pub const BUILTIN_GRAMMAR_SOURCE: &str = include_str!("../../grammar.tok");

static BUILTIN: Lazy<Grammar> =
    Lazy::new(|| GrammarLoader::from_string(BUILTIN_GRAMMAR_SOURCE).load(None));

/// An ordered, immutable sequence of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The C lexical grammar bundled with the crate.
    pub fn builtin() -> &'static Grammar {
        &BUILTIN
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for Grammar {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Grammar {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_grammar_loads_every_line() {
        let grammar = Grammar::builtin();
        assert_eq!(grammar.len(), BUILTIN_GRAMMAR_SOURCE.lines().count());
        assert_eq!(grammar.get(0).map(Rule::name), Some("COMMENT block"));
        assert_eq!(grammar.rules().last().map(Rule::pattern), Some("#"));
    }

    #[test]
    fn builtin_keywords_precede_identifiers() {
        let grammar = Grammar::builtin();
        let position = |name: &str| grammar.iter().position(|rule| rule.name() == name);
        let identifier = position("IDENTIFIER").expect("identifier rule");
        assert!(position("KEYWORD while").expect("while rule") < identifier);
        assert!(position("KEYWORD sizeof").expect("sizeof rule") < identifier);
    }

    #[test]
    fn collects_rules_in_order() {
        let grammar: Grammar = vec![Rule::new("a", "A"), Rule::new("b", "B")]
            .into_iter()
            .collect();
        let names: Vec<_> = grammar.iter().map(Rule::name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
