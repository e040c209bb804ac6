// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use lexa::{tokenize, Scanner, TokenKind};
use rstest::rstest;
use tests::drain;

#[rstest]
#[case("int x = 10 + 20;")]
#[case("  if(a!=b)  return  \"not equal\" ;\n")]
#[case("float f=1;\n\tdouble d = f * 2 / 3 % 4;")]
#[case("\"a b c\"\"\"x1")]
#[case("\n\n")]
fn every_non_whitespace_character_is_in_exactly_one_token(#[case] input: &str) {
    let tokens = drain(input).unwrap();
    let chars: Vec<char> = input.chars().collect();
    let mut covered = vec![0; chars.len()];

    for token in &tokens {
        let range = token.range();
        for offset in range.start().offset()..range.end().offset() {
            covered[offset] += 1;
        }
    }

    for (offset, c) in chars.iter().enumerate() {
        let expected = if c.is_whitespace() && !inside_string(&tokens, offset) { 0 } else { 1 };
        assert_eq!(covered[offset], expected, "character {c:?} at offset {offset} of {input:?}");
    }

    let end = tokens.last().unwrap();
    assert_eq!(end.kind(), TokenKind::EndOfInput);
    assert_eq!(end.begin().offset(), chars.len());
}

fn inside_string(tokens: &[lexa::Token], offset: usize) -> bool {
    tokens.iter()
        .filter(|t| t.kind() == TokenKind::StringLiteral)
        .any(|t| t.range().contains(lexa::FileLocation::new(offset, 0, 0)))
}

#[rstest]
#[case("int x = 10 + 20;")]
#[case("a $ b")]
#[case("\"open")]
fn scanning_is_deterministic(#[case] input: &str) {
    assert_eq!(tokenize(input), tokenize(input));
}

#[test]
fn cursor_never_moves_backwards() {
    let mut scanner = Scanner::new("while (i < 10) i = i + 1;");
    let mut previous = scanner.cursor().offset();

    loop {
        let token = scanner.next_token().unwrap();
        assert!(scanner.cursor().offset() >= previous);
        previous = scanner.cursor().offset();

        if token.is_end_of_input() {
            break;
        }
    }

    assert_eq!(previous, 25);
}

#[test]
fn tokenize_leaves_out_the_end_marker() {
    let tokens = tokenize("a b").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.kind() == TokenKind::Identifier));
}
