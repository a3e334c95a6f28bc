//! Acceptance scenarios for the built-in C grammar
//!
//! Each case scans a literal input with the bundled grammar and checks the exact token
//! sequence, length included.

use rstest::rstest;
use tokenizer::tokenizer::observer::DiagnosticWriter;
use tokenizer::tokenizer::testing::{tokens_equal, ACCEPTANCE_FIXTURES};
use tokenizer::Scanner;

fn builtin() -> Scanner {
    Scanner::builtin().expect("builtin grammar compiles")
}

#[rstest]
#[case::for_loop(
    "for (int i = 0; i < 10; i++) {}",
    &["for", "(", "int", "i", "=", "0", ";", "i", "<", "10", ";", "i", "++", ")", "{", "}"]
)]
#[case::empty("", &[])]
#[case::float_and_trailing_space(
    "array[xyz ] += pi 3.14159e-10     ",
    &["array", "[", "xyz", "]", "+=", "pi", "3.14159e-10"]
)]
#[case::hex_and_octal("0x4356abdc 0777 []", &["0x4356abdc", "0777", "[", "]"])]
#[case::operators(
    "while (i >> 1 >= 0 && b & 2 == NULL)",
    &["while", "(", "i", ">>", "1", ">=", "0", "&&", "b", "&", "2", "==", "NULL", ")"]
)]
#[case::comments_and_literals(
    "x = \"a b\"; /* note */ c = 'q'; // tail",
    &["x", "=", "\"a b\"", ";", "/* note */", "c", "=", "'q'", ";", "// tail"]
)]
#[case::keyword_prefix_is_an_identifier("format intx sizeof(x)", &["format", "intx", "sizeof", "(", "x", ")"])]
#[case::unknown_characters_dropped("a @ b $ `c`", &["a", "b", "c"])]
fn scans_to_expected_tokens(#[case] input: &str, #[case] expected: &[&str]) {
    let sink = builtin().scan(input).expect("sink sized for input");
    let tokens = sink.into_tokens();
    assert!(
        tokens_equal(&tokens, expected),
        "input {input:?}: expected {expected:?}, got {tokens:?}"
    );
}

#[test]
fn every_acceptance_fixture_passes() {
    let scanner = builtin();
    for fixture in ACCEPTANCE_FIXTURES {
        assert_eq!(scanner.tokenize(fixture.input), fixture.expected);
    }
}

#[test]
fn empty_slots_follow_the_produced_tokens() {
    let input = "0x4356abdc 0777 []";
    let sink = builtin().scan(input).expect("sink sized for input");
    assert_eq!(sink.capacity(), input.chars().count());
    assert_eq!(sink.len(), 4);
    assert!(sink.slots()[..4].iter().all(Option::is_some));
    assert!(sink.slots()[4..].iter().all(Option::is_none));
}

#[test]
fn diagnostics_pair_tokens_with_rule_names() {
    let mut writer = DiagnosticWriter::new(Vec::new());
    builtin()
        .scan_with("0x4356abdc 0777 []", &mut writer)
        .expect("sink sized for input");
    let diagnostics = String::from_utf8(writer.finish().expect("in-memory write")).unwrap();

    insta::assert_snapshot!(diagnostics, @r"
    0x4356abdc	HEXADECIMAL CONSTANT
    0777	OCTAL CONSTANT
    [	LEFT BRACKET
    ]	RIGHT BRACKET
    ");
}
