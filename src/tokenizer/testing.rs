//! Acceptance fixtures and the self-test runner
//!
//! These are the literal input / expected-token tables the tool checks itself against with
//! `tokenizer --test`. They assume the built-in C grammar (or a grammar with the same rules in
//! the same order).
//!
//! Token sequences are compared strictly: same length and same texts. A prefix comparison
//! would let a scan with extra trailing tokens pass.

use super::error::{Error, Result};
use super::observer::DiagnosticWriter;
use super::scanner::Scanner;
use std::io::Write;

/// One input and the tokens the built-in grammar must produce for it
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub input: &'static str,
    pub expected: &'static [&'static str],
}

pub const ACCEPTANCE_FIXTURES: &[Fixture] = &[
    Fixture {
        input: "for (int i = 0; i < 10; i++) {}",
        expected: &[
            "for", "(", "int", "i", "=", "0", ";", "i", "<", "10", ";", "i", "++", ")", "{", "}",
        ],
    },
    Fixture {
        input: "",
        expected: &[],
    },
    Fixture {
        input: "array[xyz ] += pi 3.14159e-10     ",
        expected: &["array", "[", "xyz", "]", "+=", "pi", "3.14159e-10"],
    },
    Fixture {
        input: "0x4356abdc 0777 []",
        expected: &["0x4356abdc", "0777", "[", "]"],
    },
    Fixture {
        input: "while (i >> 1 >= 0 && b & 2 == NULL)",
        expected: &[
            "while", "(", "i", ">>", "1", ">=", "0", "&&", "b", "&", "2", "==", "NULL", ")",
        ],
    },
    Fixture {
        input: "()[]{}.->sizeof,!~>><<^|++--+/||&&?:==!=<><=>==+=-=*=/=%=>>=<<=&=^=|=&-*\"'#",
        expected: &[
            "(", ")", "[", "]", "{", "}", ".", "->", "sizeof", ",", "!", "~", ">>", "<<", "^", "|",
            "++", "--", "+", "/", "||", "&&", "?", ":", "==", "!=", "<", ">", "<=", ">=", "=",
            "+=", "-=", "*=", "/=", "%=", ">>=", "<<=", "&=", "^=", "|=", "&", "-", "*", "\"",
            "'", "#",
        ],
    },
];

/// True when both sequences have the same length and the same texts in the same order.
pub fn tokens_equal<A, B>(actual: &[A], expected: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, b)| a.as_ref() == b.as_ref())
}

/// Run every acceptance fixture through `scanner`, printing banners and match diagnostics to
/// `out`. Stops at the first mismatch.
///
/// Returns the number of fixtures that passed.
pub fn run_self_test<W: Write>(scanner: &Scanner, out: &mut W) -> Result<usize> {
    for (index, fixture) in ACCEPTANCE_FIXTURES.iter().enumerate() {
        let case = index + 1;
        writeln!(out, "============BEGINNING TEST {case}==========")?;
        writeln!(out, "input: '{}'\n", fixture.input)?;

        let mut diagnostics = DiagnosticWriter::new(&mut *out);
        let sink = scanner.scan_with(fixture.input, &mut diagnostics)?;
        diagnostics.finish()?;

        let actual = sink.into_tokens();
        if !tokens_equal(&actual, fixture.expected) {
            return Err(Error::FixtureMismatch {
                case,
                input: fixture.input.to_string(),
                expected: fixture.expected.iter().map(|t| t.to_string()).collect(),
                actual,
            });
        }
        writeln!(out, "=============TEST {case} PASSED============\n")?;
    }
    writeln!(out, "===============> All tests passed <================")?;
    Ok(ACCEPTANCE_FIXTURES.len())
}
