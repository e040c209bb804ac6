// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod lexer;
mod util;

pub use self::{
    lexer::{Keyword, Scanner, ScanError, ScanErrorKind, Token, TokenKind},
    util::{FileLocation, FileRange},
};

/// Scans all of `input`, stopping at the first failure.
///
/// The returned tokens do not include the [`TokenKind::EndOfInput`] marker.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(input).collect()
}
