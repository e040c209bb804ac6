// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use lexa::{ScanError, Scanner, Token, TokenKind};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).filter(None, log::LevelFilter::max()).try_init();
}

/// Calls `next_token` until the end-of-input marker, which is included in the result.
pub fn drain(input: &str) -> Result<Vec<Token>, ScanError> {
    init_logging();

    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token()?;
        let done = token.is_end_of_input();
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}

/// Like [`drain`], but only keeps what a token listing would show.
pub fn drain_pairs(input: &str) -> Vec<(TokenKind, String)> {
    drain(input)
        .unwrap_or_else(|e| panic!("Failed to scan {input:?}: {e}"))
        .into_iter()
        .map(|token| (token.kind(), token.text().to_string()))
        .collect()
}

/// Shorthand for writing expected `(kind, text)` pairs.
pub fn pairs(expected: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    expected.iter()
        .map(|(kind, text)| (*kind, text.to_string()))
        .collect()
}
