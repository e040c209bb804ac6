// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use colored::Colorize;
use lexa::{Keyword, Scanner};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{display::{DisplayOptions, TokenListing}, error::ErrorPrinter};

const PROMPT: &str = "lexa> ";

/// Commands typed with a leading dot. Anything else is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Keywords,
}

impl ReplCommand {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().strip_prefix('.')?.to_lowercase().as_str() {
            "help" | "h" | "?" => Some(Self::Help),
            "exit" | "quit" | "q" => Some(Self::Exit),
            "keywords" | "k" => Some(Self::Keywords),
            _ => None,
        }
    }

    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".keywords", "List the reserved words"),
            (".exit", "Leave the REPL"),
        ]
    }
}

pub struct Repl {
    options: DisplayOptions,
}

impl Repl {
    #[must_use]
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            options,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let mut editor = DefaultEditor::new()?;

        println!("lexa {}, type {} for help", env!("CARGO_PKG_VERSION"), ".help".bold());

        loop {
            let line = match editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };

            if line.trim().is_empty() {
                continue;
            }

            _ = editor.add_history_entry(line.as_str());

            if !line.trim_start().starts_with('.') {
                self.scan(&line)?;
                continue;
            }

            match ReplCommand::parse(&line) {
                Some(ReplCommand::Exit) => break,
                Some(ReplCommand::Help) => print_help(),
                Some(ReplCommand::Keywords) => print_keywords(),
                None => eprintln!("{}: unknown command {}, try {}", "error".red().bold(), line.trim(), ".help".bold()),
            }
        }

        log::debug!("Leaving the REPL");
        Ok(())
    }

    fn scan(&self, line: &str) -> anyhow::Result<()> {
        let (tokens, error) = Scanner::new(line).collect_all();

        let mut stdout = std::io::stdout().lock();
        TokenListing::new(&tokens, self.options).write_to(&mut stdout)?;

        if let Some(error) = error {
            ErrorPrinter::for_scan_error("<repl>", line, &error).print();
        }

        Ok(())
    }
}

fn print_help() {
    for (command, description) in ReplCommand::all_commands() {
        println!("  {command:12} {description}");
    }
}

fn print_keywords() {
    let keywords: Vec<String> = Keyword::iter_variants().map(|k| k.as_ref().to_string()).collect();
    println!("{}", keywords.join(" "));
}
