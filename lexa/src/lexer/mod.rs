// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod keyword;
mod scanner;
mod token;
mod token_kind;

pub use self::{
    keyword::Keyword,
    scanner::{
        Scanner,
        ScanError,
        ScanErrorKind,
    },
    token::Token,
    token_kind::TokenKind,
};
