// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Serialize)]
pub enum TokenKind {
    #[strum(serialize = "IDENTIFIER")]
    #[serde(rename = "IDENTIFIER")]
    Identifier,

    #[strum(serialize = "NUMBER")]
    #[serde(rename = "NUMBER")]
    Number,

    #[strum(serialize = "OPERATOR")]
    #[serde(rename = "OPERATOR")]
    Operator,

    #[strum(serialize = "KEYWORD")]
    #[serde(rename = "KEYWORD")]
    Keyword,

    #[strum(serialize = "STRING")]
    #[serde(rename = "STRING")]
    StringLiteral,

    #[strum(serialize = "PARENTHESIS")]
    #[serde(rename = "PARENTHESIS")]
    Parenthesis,

    #[strum(serialize = "ENDING")]
    #[serde(rename = "ENDING")]
    StatementEnd,

    #[strum(serialize = "END_OF_FILE")]
    #[serde(rename = "END_OF_FILE")]
    EndOfInput,
}

impl TokenKind {
    /// The name shown to users in token listings.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
