// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Write};

use colored::{ColoredString, Colorize};
use lexa::{FileRange, ScanError, ScanErrorKind};

/// Renders a diagnostic pointing into the scanned source, e.g.
///
/// ```text
/// error: Unexpected character: '$' at position 8
///
/// 1 | int x = $
///   |         ^ hint: ...
///
/// In main.c:1:9
/// ```
pub struct ErrorPrinter<'source> {
    name: &'source str,
    source_code: &'source str,
    range: FileRange,
    message: String,
    hint: Option<String>,

    line_number: ColoredString,
}

impl<'source> ErrorPrinter<'source> {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(name: &'source str, source_code: &'source str, range: FileRange, message: impl Display) -> Self {
        Self {
            name,
            source_code,
            range,
            message: message.to_string(),
            hint: None,

            line_number: format!("{}", range.start().line() + 1).blue().bold(),
        }
    }

    #[must_use = "Use the `print` method to actually print"]
    pub fn for_scan_error(name: &'source str, source_code: &'source str, error: &ScanError) -> Self {
        let hint = match error.kind() {
            ScanErrorKind::UnexpectedCharacter { .. } => "only letters, digits, `\"`, `(`, `)`, `;` and the operators `+ - * / % = ! < >` are allowed",
            ScanErrorKind::UnterminatedStringLiteral => "this string is never closed with a `\"`",
        };

        Self::new(name, source_code, error.location().as_zero_range(), error)
            .hint(hint.to_string())
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    pub fn print(self) {
        eprint!("{}", self.render());
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Writing into a `String` cannot fail.
        _ = self.render_prelude(&mut out);
        _ = self.render_lines(&mut out);
        _ = self.render_postlude(&mut out);

        out
    }

    fn render_prelude(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}: {}", "error".red().bold(), self.message.bold())?;
        writeln!(out)
    }

    fn render_lines(&self, out: &mut String) -> std::fmt::Result {
        let lines: Vec<&str> = self.source_code.lines().collect();
        let line = self.range.start().line();

        if let Some(previous) = line.checked_sub(1).and_then(|index| lines.get(index)) {
            if !previous.trim().is_empty() {
                self.render_line(out, false, previous)?;
            }
        }

        self.render_line(out, true, lines.get(line).copied().unwrap_or_default())?;
        self.render_error_indicator(out)?;

        if let Some(next) = lines.get(line + 1) {
            self.render_line(out, false, next)?;
        }

        Ok(())
    }

    fn render_line(&self, out: &mut String, is_primary: bool, line: &str) -> std::fmt::Result {
        self.render_line_prefix(out, is_primary)?;
        writeln!(out, "{line}")
    }

    fn render_error_indicator(&self, out: &mut String) -> std::fmt::Result {
        let spaces = " ".repeat(self.range.start().column());
        let caret = "^".red().bold();
        let tildes = "~".repeat(self.range.len().saturating_sub(1)).red();

        let hint = match &self.hint {
            Some(hint) => format!("hint: {hint}").red().bold(),
            None => "".bold(),
        };

        self.render_line_prefix(out, false)?;
        writeln!(out, "{spaces}{caret}{tildes} {hint}")
    }

    fn render_line_prefix(&self, out: &mut String, is_primary: bool) -> std::fmt::Result {
        let separator = " | ".blue().bold();

        if is_primary {
            write!(out, "{}{separator}", self.line_number)
        } else {
            write!(out, "{}{separator}", " ".repeat(self.line_number.len()))
        }
    }

    fn render_postlude(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out)?;

        let line = self.range.start().line() + 1;
        let column = self.range.start().column() + 1;

        writeln!(out, "In {}:{line}:{column}", self.name)?;
        writeln!(out)
    }
}
