//! Scanner
//!
//!     The scanner turns an input string into the substrings its grammar recognizes. It keeps a
//!     byte cursor into the input and repeats until the cursor reaches the end:
//!
//!         1. Skip any run of whitespace. Whitespace never produces tokens.
//!         2. Try the rules in grammar order, each anchored at the cursor. The first rule that
//!            matches is selected and no later rule is tried, even one that would match more.
//!         3. On a match, the matched substring is a token and the cursor moves past it.
//!         4. When nothing matches, the character under the cursor is dropped silently and the
//!            cursor moves one character forward.
//!
//! Progress
//!
//!     Every step consumes at least one character. A rule whose pattern matches the empty
//!     string is still selected (and yields an empty token), but the cursor then moves one
//!     character forward, so such a grammar cannot stall the scan. Because of this an input of
//!     `n` characters never yields more than `n` tokens.
//!
//! Patterns are compiled once when the scanner is built, so an invalid pattern is reported
//! before any input is scanned.

use super::grammar::{Grammar, Rule};
use super::matcher::{CompiledPattern, PatternError, PatternMatch};
use super::observer::{MatchEvent, MatchObserver, NoDiagnostics};
use super::sink::{CapacityError, TokenSink};

/// A grammar with every pattern compiled, ready to scan any number of inputs.
#[derive(Debug, Clone)]
pub struct Scanner {
    grammar: Grammar,
    compiled: Vec<CompiledPattern>,
}

impl Scanner {
    /// Compile every rule of `grammar`.
    ///
    /// Fails on the first rule whose pattern does not compile; no partial scanner is built.
    pub fn new(grammar: Grammar) -> Result<Self, PatternError> {
        let compiled = grammar
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                CompiledPattern::new(rule.pattern()).map_err(|source| PatternError {
                    index,
                    pattern: rule.pattern().to_string(),
                    name: rule.name().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { grammar, compiled })
    }

    /// A scanner over the bundled C grammar.
    pub fn builtin() -> Result<Self, PatternError> {
        Self::new(Grammar::builtin().clone())
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The first rule, in grammar order, matching anchored at the start of `rest`.
    pub fn first_match<'s>(&'s self, rest: &str) -> Option<(usize, &'s Rule, PatternMatch)> {
        self.grammar
            .iter()
            .zip(&self.compiled)
            .enumerate()
            .find_map(|(index, (rule, pattern))| {
                let found = pattern.try_match_at(rest);
                found.matched.then_some((index, rule, found))
            })
    }

    /// Lazily scan `input`, yielding one event per selected rule.
    pub fn events<'a>(&'a self, input: &'a str) -> Scan<'a> {
        Scan {
            scanner: self,
            input,
            position: 0,
        }
    }

    /// Scan `input` into a freshly sized token buffer.
    pub fn scan(&self, input: &str) -> Result<TokenSink, CapacityError> {
        self.scan_with(input, &mut NoDiagnostics)
    }

    /// Scan `input` into a freshly sized token buffer, reporting every match to `observer`.
    pub fn scan_with<O>(&self, input: &str, observer: &mut O) -> Result<TokenSink, CapacityError>
    where
        O: MatchObserver + ?Sized,
    {
        let mut sink = TokenSink::for_input(input);
        self.scan_into(input, &mut sink, observer)?;
        Ok(sink)
    }

    /// Scan `input` into a caller-provided buffer.
    ///
    /// Fails as soon as the buffer runs out of slots; tokens appended before that stay in it.
    pub fn scan_into<O>(
        &self,
        input: &str,
        sink: &mut TokenSink,
        observer: &mut O,
    ) -> Result<(), CapacityError>
    where
        O: MatchObserver + ?Sized,
    {
        for event in self.events(input) {
            sink.append(event.text)?;
            observer.on_match(&event);
        }
        Ok(())
    }

    /// The token texts of `input`, without a capacity bound.
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        self.events(input)
            .map(|event| event.text.to_string())
            .collect()
    }
}

/// An in-progress scan over one input; see [`Scanner::events`].
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    scanner: &'a Scanner,
    input: &'a str,
    position: usize,
}

impl Scan<'_> {
    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a> Iterator for Scan<'a> {
    type Item = MatchEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.input[self.position..];
            self.position += rest.len() - rest.trim_start().len();

            let rest = &self.input[self.position..];
            let current = rest.chars().next()?;

            match self.scanner.first_match(rest) {
                Some((rule_index, rule, found)) => {
                    let start = self.position;
                    let end = start + found.length;
                    self.position = if found.length == 0 {
                        start + current.len_utf8()
                    } else {
                        end
                    };
                    return Some(MatchEvent {
                        text: &self.input[start..end],
                        rule_index,
                        rule,
                        span: start..end,
                    });
                }
                None => self.position += current.len_utf8(),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At most one token per remaining character, and characters never outnumber bytes
        (0, Some(self.input.len() - self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::observer::EventLog;

    fn scanner(rules: &[(&str, &str)]) -> Scanner {
        let grammar = rules
            .iter()
            .map(|(pattern, name)| Rule::new(*pattern, *name))
            .collect();
        Scanner::new(grammar).expect("valid grammar")
    }

    #[test]
    fn first_rule_wins_over_longer_match() {
        let scanner = scanner(&[("<", "LESS"), ("<=", "LESS OR EQUAL")]);
        // `=` matches no rule on its own and is dropped
        assert_eq!(scanner.tokenize("<="), vec!["<"]);

        let mut log = EventLog::new();
        let sink = scanner.scan_with("<=<", &mut log).expect("sized sink");
        assert_eq!(sink.into_tokens(), vec!["<", "<"]);
        let rules: Vec<_> = log.records().iter().map(|r| r.rule.as_str()).collect();
        assert_eq!(rules, vec!["LESS", "LESS"]);
    }

    #[test]
    fn unmatched_characters_are_dropped() {
        let scanner = scanner(&[("[a-z]+", "WORD")]);
        assert_eq!(scanner.tokenize("ab$%cd 9 ef"), vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn empty_input_and_empty_grammar_produce_nothing() {
        assert!(scanner(&[("[a-z]+", "WORD")]).tokenize("").is_empty());
        assert!(scanner(&[]).tokenize("some input").is_empty());
    }

    #[test]
    fn zero_length_match_still_advances() {
        let scanner = scanner(&[("x*", "XS")]);
        assert_eq!(scanner.tokenize("xxaxx"), vec!["xx", "", "xx"]);
    }

    #[test]
    fn trailing_whitespace_ends_the_scan() {
        let scanner = scanner(&[("", "EMPTY")]);
        assert_eq!(scanner.tokenize("   "), Vec::<String>::new());
    }

    #[test]
    fn multibyte_characters_are_dropped_whole() {
        let scanner = scanner(&[("[a-z]+", "WORD")]);
        assert_eq!(scanner.tokenize("añb€c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn events_carry_rule_and_span() {
        let scanner = scanner(&[("[0-9]+", "NUMBER"), ("[a-z]+", "WORD")]);
        let mut log = EventLog::new();
        let sink = scanner.scan_with("  ab 12", &mut log).expect("sized sink");
        assert_eq!(sink.into_tokens(), vec!["ab", "12"]);
        let spans: Vec<_> = log
            .records()
            .iter()
            .map(|record| (record.rule.as_str(), record.start, record.end))
            .collect();
        assert_eq!(spans, vec![("WORD", 2, 4), ("NUMBER", 5, 7)]);
    }

    #[test]
    fn scan_into_reports_a_full_sink() {
        let scanner = scanner(&[("[a-z]", "LETTER")]);
        let mut sink = TokenSink::with_capacity(2);
        let err = scanner
            .scan_into("abc", &mut sink, &mut NoDiagnostics)
            .unwrap_err();
        assert_eq!(err, CapacityError { capacity: 2 });
        assert_eq!(sink.into_tokens(), vec!["a", "b"]);
    }

    #[test]
    fn invalid_pattern_names_the_rule() {
        let grammar = vec![Rule::new("[a-z]+", "WORD"), Rule::new("(oops", "BROKEN")]
            .into_iter()
            .collect();
        let err = Scanner::new(grammar).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.name, "BROKEN");
        assert_eq!(err.pattern, "(oops");
    }

    #[test]
    fn builtin_grammar_compiles() {
        let scanner = Scanner::builtin().expect("builtin grammar compiles");
        assert_eq!(
            scanner.tokenize("x->y >>= 0x1F;"),
            vec!["x", "->", "y", ">>=", "0x1F", ";"]
        );
    }
}
