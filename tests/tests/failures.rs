// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use lexa::{ScanErrorKind, Scanner, TokenKind};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{drain, drain_pairs, init_logging, pairs};

#[rstest]
#[case("$", '$', 0)]
#[case("int x = 10 @ 2;", '@', 11)]
#[case("a && b", '&', 2)]
#[case("struct s { int a; }", '{', 9)]
#[case("f(a, b)", ',', 3)]
#[case("arr[0]", '[', 3)]
#[case("s.len", '.', 1)]
#[case("my_var", '_', 2)]
fn unexpected_character(#[case] input: &str, #[case] character: char, #[case] offset: usize) {
    let error = drain(input).unwrap_err();

    assert_eq!(error.kind(), ScanErrorKind::UnexpectedCharacter { character });
    assert_eq!(error.offset(), offset);
}

#[test]
fn unsupported_compound_operators_split_into_single_operators() {
    assert_eq!(drain_pairs("x++ -> y"), pairs(&[
        (TokenKind::Identifier, "x"),
        (TokenKind::Operator, "+"),
        (TokenKind::Operator, "+"),
        (TokenKind::Operator, "-"),
        (TokenKind::Operator, ">"),
        (TokenKind::Identifier, "y"),
        (TokenKind::EndOfInput, ""),
    ]));
}

#[rstest]
#[case("\"Unterminated", 0)]
#[case("char c = \"x;", 9)]
fn unterminated_string_literal(#[case] input: &str, #[case] offset: usize) {
    let error = drain(input).unwrap_err();

    assert_eq!(error.kind(), ScanErrorKind::UnterminatedStringLiteral);
    assert_eq!(error.offset(), offset);
    assert_eq!(error.to_string(), format!("Unterminated string literal at position {offset}"));
}

#[test]
fn tokens_before_a_failure_are_kept() {
    init_logging();

    let (tokens, error) = Scanner::new("int x = $").collect_all();

    let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(texts, ["int", "x", "="]);

    let error = error.unwrap();
    assert_eq!(error.kind(), ScanErrorKind::UnexpectedCharacter { character: '$' });
    assert_eq!(error.offset(), 8);
}

#[test]
fn failures_are_reported_in_order() {
    init_logging();

    let (tokens, error) = Scanner::new("a @ \"b").collect_all();

    assert_eq!(tokens.len(), 1);
    assert_eq!(error.map(|e| e.kind()), Some(ScanErrorKind::UnexpectedCharacter { character: '@' }));
}
