// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{FileLocation, FileRange, Keyword};

use super::TokenKind;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    begin: FileLocation,
    end: FileLocation,
}

impl Token {
    #[must_use]
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>, begin: FileLocation, end: FileLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            begin,
            end,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched text. String literals have their quotes stripped.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn begin(&self) -> FileLocation {
        self.begin
    }

    #[must_use]
    pub const fn end(&self) -> FileLocation {
        self.end
    }

    /// The characters of the input this token was scanned from, quotes included.
    #[must_use]
    pub fn range(&self) -> FileRange {
        (self.begin, self.end).into()
    }

    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    #[must_use]
    pub fn as_keyword(&self) -> Option<Keyword> {
        if self.kind != TokenKind::Keyword {
            return None;
        }

        Keyword::parse(&self.text)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::StringLiteral => f.write_fmt(format_args!("{}(\"{}\")", self.kind, self.text)),
            TokenKind::EndOfInput => self.kind.fmt(f),
            _ => f.write_fmt(format_args!("{}({})", self.kind, self.text)),
        }
    }
}
