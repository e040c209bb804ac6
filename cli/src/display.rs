// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{borrow::Cow, io::Write};

use lexa::{Token, TokenKind};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayOptions {
    pub format: OutputFormat,
    pub locations: bool,
}

/// Writes tokens as a listing of their type and value.
pub struct TokenListing<'tokens> {
    tokens: &'tokens [Token],
    options: DisplayOptions,
}

impl<'tokens> TokenListing<'tokens> {
    const TYPE_HEADING: &'static str = "Token Type";
    const VALUE_HEADING: &'static str = "Value";
    const LOCATION_HEADING: &'static str = "Location";

    #[must_use]
    pub fn new(tokens: &'tokens [Token], options: DisplayOptions) -> Self {
        Self {
            tokens,
            options,
        }
    }

    pub fn write_to(&self, out: &mut impl Write) -> anyhow::Result<()> {
        match self.options.format {
            OutputFormat::Table => self.write_table(out)?,
            OutputFormat::Plain => self.write_plain(out)?,
            OutputFormat::Json => self.write_json(out)?,
        }

        Ok(())
    }

    fn write_table(&self, out: &mut impl Write) -> std::io::Result<()> {
        let values: Vec<Cow<'_, str>> = self.tokens.iter().map(|t| printable(t.text())).collect();

        let type_width = self.tokens.iter()
            .map(|t| t.kind().name().len())
            .chain(std::iter::once(Self::TYPE_HEADING.len()))
            .max()
            .unwrap_or_default();

        let value_width = values.iter()
            .map(|v| v.chars().count())
            .chain(std::iter::once(Self::VALUE_HEADING.len()))
            .max()
            .unwrap_or_default();

        if self.options.locations {
            writeln!(out, "{:type_width$}  {:value_width$}  {}", Self::TYPE_HEADING, Self::VALUE_HEADING, Self::LOCATION_HEADING)?;
            writeln!(out, "{}  {}  {}", "-".repeat(type_width), "-".repeat(value_width), "-".repeat(Self::LOCATION_HEADING.len()))?;
        } else {
            writeln!(out, "{:type_width$}  {}", Self::TYPE_HEADING, Self::VALUE_HEADING)?;
            writeln!(out, "{}  {}", "-".repeat(type_width), "-".repeat(value_width))?;
        }

        for (token, value) in self.tokens.iter().zip(&values) {
            let kind = token.kind().name();

            if self.options.locations {
                writeln!(out, "{kind:type_width$}  {value:value_width$}  {}", token.begin())?;
            } else {
                writeln!(out, "{kind:type_width$}  {value}")?;
            }
        }

        Ok(())
    }

    fn write_plain(&self, out: &mut impl Write) -> std::io::Result<()> {
        for token in self.tokens {
            write!(out, "Token Type: {}, Value: {}", token.kind(), printable(token.text()))?;

            if self.options.locations {
                write!(out, ", Location: {}", token.begin())?;
            }

            writeln!(out)?;
        }

        Ok(())
    }

    fn write_json(&self, out: &mut impl Write) -> serde_json::Result<()> {
        if self.options.locations {
            serde_json::to_writer_pretty(&mut *out, self.tokens)?;
        } else {
            let rows: Vec<Row<'_>> = self.tokens.iter()
                .map(|token| Row { kind: token.kind(), text: token.text() })
                .collect();

            serde_json::to_writer_pretty(&mut *out, &rows)?;
        }

        writeln!(out).map_err(serde_json::Error::io)
    }
}

#[derive(Serialize)]
struct Row<'token> {
    kind: TokenKind,
    text: &'token str,
}

/// String literals may contain line breaks, which would break up the listing.
fn printable(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r', '\t']) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t"))
}
