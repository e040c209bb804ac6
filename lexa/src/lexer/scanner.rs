// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display, iter::FusedIterator, str::Chars};

use strum::AsRefStr;
use thiserror::Error;

use crate::{FileLocation, Keyword, Token, TokenKind};

/// Position of the character under the cursor, both as a location for users
/// and as a byte index for slicing the input.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    location: FileLocation,
    byte: usize,
}

impl Cursor {
    const START: Self = Self { location: FileLocation::START, byte: 0 };

    #[must_use]
    const fn advance(self, c: char) -> Self {
        Self {
            location: self.location.advance(c),
            byte: self.byte + c.len_utf8(),
        }
    }
}

/// Turns source text into [`Token`]s, one per call to [`Scanner::next_token`].
///
/// The scanner is fail-fast: the first character it cannot classify ends the
/// scan with a [`ScanError`], and it is not meant to be resumed after that.
pub struct Scanner<'source_code> {
    input: &'source_code str,
    chars: Chars<'source_code>,

    /// The character at `cursor`, once it has been peeked.
    current: Option<char>,
    cursor: Cursor,
    halted: bool,
}

impl<'source_code> Scanner<'source_code> {
    #[must_use]
    pub fn new(input: &'source_code str) -> Self {
        Self {
            input,
            chars: input.chars(),
            current: None,
            cursor: Cursor::START,
            halted: false,
        }
    }

    /// Scans the next token. At the end of the input this returns an
    /// [`TokenKind::EndOfInput`] token, and keeps doing so on every later call.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        self.skip_whitespace();

        let begin = self.cursor.location;
        let Some(ch) = self.peek_char() else {
            return Ok(Token::new(TokenKind::EndOfInput, "", begin, begin));
        };

        let token = match ch {
            '0'..='9' => self.consume_number(),
            'a'..='z' | 'A'..='Z' => self.consume_identifier_or_keyword(),
            '"' => self.consume_string()?,
            '+' | '-' | '*' | '/' | '%' | '=' | '!' | '<' | '>' => self.consume_operator(),
            '(' | ')' => self.consume_single_char_token(TokenKind::Parenthesis),
            ';' => self.consume_single_char_token(TokenKind::StatementEnd),

            character => {
                return Err(self.fail(begin, ScanErrorKind::UnexpectedCharacter { character }));
            }
        };

        log::trace!("{token} at {}", token.begin());
        Ok(token)
    }

    /// Location of the next character to be scanned.
    #[must_use]
    pub const fn cursor(&self) -> FileLocation {
        self.cursor.location
    }

    /// Drains the scanner. The tokens produced before a failure are kept.
    ///
    /// The [`TokenKind::EndOfInput`] marker is not part of the returned tokens.
    pub fn collect_all(self) -> (Vec<Token>, Option<ScanError>) {
        let mut tokens = Vec::new();

        for result in self {
            match result {
                Ok(token) => tokens.push(token),
                Err(error) => return (tokens, Some(error)),
            }
        }

        (tokens, None)
    }

    #[must_use]
    fn consume_single_char_token(&mut self, kind: TokenKind) -> Token {
        let begin = self.cursor;

        self.consume_char();

        self.token_since(begin, kind)
    }

    fn consume_operator(&mut self) -> Token {
        let begin = self.cursor;
        let first = self.next_char();

        // `<=`, `>=`, `==` and `!=` are the only operators longer than one character.
        if matches!(first, Some('<' | '>' | '=' | '!')) && self.peek_char() == Some('=') {
            self.consume_char();
        }

        self.token_since(begin, TokenKind::Operator)
    }

    fn consume_string(&mut self) -> Result<Token, ScanError> {
        let begin = self.cursor;
        debug_assert_eq!(self.peek_char(), Some('"'));
        self.consume_char();

        let content_begin = self.cursor.byte;
        self.consume_while(|c| c != '"');
        let content_end = self.cursor.byte;

        if self.peek_char() != Some('"') {
            return Err(self.fail(begin.location, ScanErrorKind::UnterminatedStringLiteral));
        }

        self.consume_char();

        Ok(Token::new(
            TokenKind::StringLiteral,
            &self.input[content_begin..content_end],
            begin.location,
            self.cursor.location,
        ))
    }

    fn consume_identifier_or_keyword(&mut self) -> Token {
        let begin = self.cursor;

        self.consume_while(|c| c.is_ascii_alphanumeric());

        let text = &self.input[begin.byte..self.cursor.byte];
        let kind = match Keyword::parse(text) {
            Some(..) => TokenKind::Keyword,
            None => TokenKind::Identifier,
        };

        self.token_since(begin, kind)
    }

    /// Digits only: `12x` is the number `12` followed by the identifier `x`.
    fn consume_number(&mut self) -> Token {
        let begin = self.cursor;

        self.consume_while(|c| c.is_ascii_digit());

        self.token_since(begin, TokenKind::Number)
    }

    fn skip_whitespace(&mut self) {
        self.consume_while(char::is_whitespace);
    }

    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek_char() {
            if !predicate(c) {
                break;
            }

            self.consume_char();
        }
    }

    fn token_since(&self, begin: Cursor, kind: TokenKind) -> Token {
        let text = &self.input[begin.byte..self.cursor.byte];
        Token::new(kind, text, begin.location, self.cursor.location)
    }

    fn fail(&mut self, location: FileLocation, kind: ScanErrorKind) -> ScanError {
        let error = ScanError { location, kind };
        log::debug!("Scan failed: {error}");
        self.halted = true;
        error
    }

    fn peek_char(&mut self) -> Option<char> {
        if self.current.is_none() {
            self.current = self.chars.next();
        }

        self.current
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        if let Some(c) = self.current.take() {
            self.cursor = self.cursor.advance(c);
        }
    }
}

/// Yields every token up to, but not including, the end-of-input marker.
/// After a failure has been yielded the iterator is exhausted.
impl<'source_code> Iterator for Scanner<'source_code> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_end_of_input() => None,
            result => Some(result),
        }
    }
}

impl FusedIterator for Scanner<'_> {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanError {
    pub location: FileLocation,
    pub kind: ScanErrorKind,
}

impl ScanError {
    /// Zero-based character offset of the offending character, or of the
    /// opening quote of an unterminated string.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.location.offset()
    }

    #[must_use]
    pub const fn location(&self) -> FileLocation {
        self.location
    }

    #[must_use]
    pub const fn kind(&self) -> ScanErrorKind {
        self.kind
    }
}

impl Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} at position {}", self.kind, self.offset()))
    }
}

impl Error for ScanError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
pub enum ScanErrorKind {
    #[error("Unexpected character: '{character}'")]
    UnexpectedCharacter { character: char },

    #[error("Unterminated string literal")]
    UnterminatedStringLiteral,
}

impl ScanErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
