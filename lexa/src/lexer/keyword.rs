// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::str::FromStr;

use strum::IntoEnumIterator;

/// The reserved words. Matching is exact and case sensitive, so `Int` and
/// `intX` are identifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter, strum::EnumString, strum::EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Int,
    Float,
    Double,
    Char,
    Void,
    If,
    Else,
    While,
    For,
    Return,
    Break,
    Continue,
    Switch,
    Case,
    Default,
    Struct,
    Class,
    Public,
    Private,
    Protected,
    Try,
    Catch,
    Throw,
    Const,
    Static,
    True,
    False,
}

impl Keyword {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        Self::from_str(input).ok()
    }
}
