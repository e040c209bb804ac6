// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use lexa::TokenKind::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{drain_pairs, pairs};

#[rstest]
#[case(
    "int x = 10 + 20;",
    &[
        (Keyword, "int"),
        (Identifier, "x"),
        (Operator, "="),
        (Number, "10"),
        (Operator, "+"),
        (Number, "20"),
        (StatementEnd, ";"),
        (EndOfInput, ""),
    ],
)]
#[case(
    "int x = 42;",
    &[
        (Keyword, "int"),
        (Identifier, "x"),
        (Operator, "="),
        (Number, "42"),
        (StatementEnd, ";"),
        (EndOfInput, ""),
    ],
)]
#[case(
    "()",
    &[
        (Parenthesis, "("),
        (Parenthesis, ")"),
        (EndOfInput, ""),
    ],
)]
#[case(
    "12x",
    &[
        (Number, "12"),
        (Identifier, "x"),
        (EndOfInput, ""),
    ],
)]
#[case(
    "if (a<=b) return \"yes\";",
    &[
        (Keyword, "if"),
        (Parenthesis, "("),
        (Identifier, "a"),
        (Operator, "<="),
        (Identifier, "b"),
        (Parenthesis, ")"),
        (Keyword, "return"),
        (StringLiteral, "yes"),
        (StatementEnd, ";"),
        (EndOfInput, ""),
    ],
)]
#[case(
    "while (!done) count = count % 7 - 1;",
    &[
        (Keyword, "while"),
        (Parenthesis, "("),
        (Operator, "!"),
        (Identifier, "done"),
        (Parenthesis, ")"),
        (Identifier, "count"),
        (Operator, "="),
        (Identifier, "count"),
        (Operator, "%"),
        (Number, "7"),
        (Operator, "-"),
        (Number, "1"),
        (StatementEnd, ";"),
        (EndOfInput, ""),
    ],
)]
#[case(
    "a===b",
    &[
        (Identifier, "a"),
        (Operator, "=="),
        (Operator, "="),
        (Identifier, "b"),
        (EndOfInput, ""),
    ],
)]
#[case(
    "x=-1;",
    &[
        (Identifier, "x"),
        (Operator, "="),
        (Operator, "-"),
        (Number, "1"),
        (StatementEnd, ";"),
        (EndOfInput, ""),
    ],
)]
#[case(
    "\"multi\nline\" ;",
    &[
        (StringLiteral, "multi\nline"),
        (StatementEnd, ";"),
        (EndOfInput, ""),
    ],
)]
fn statements(#[case] input: &str, #[case] expected: &[(lexa::TokenKind, &str)]) {
    assert_eq!(drain_pairs(input), pairs(expected));
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("\n\t  \r\n")]
fn whitespace_only_is_a_single_end_of_input(#[case] input: &str) {
    assert_eq!(drain_pairs(input), pairs(&[(EndOfInput, "")]));
}
