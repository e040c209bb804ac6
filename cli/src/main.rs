// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod display;
mod error;
mod input;
mod logger;
mod repl;

use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::Subcommand;
use colored::Colorize;
use lexa::Scanner;
use log::LevelFilter;

use self::{
    config::{ConfigRoot, OutputFormat},
    display::{DisplayOptions, TokenListing},
    error::ErrorPrinter,
    input::Input,
    logger::Logger,
    repl::Repl,
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path of the config file, `lexa.toml` in the working directory by default
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of a file, of `--source`, or of standard input
    Tokens {
        file: Option<PathBuf>,

        #[arg(short = 'e', long, conflicts_with = "file")]
        source: Option<String>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Show where each token starts
        #[arg(short, long)]
        locations: bool,
    },

    /// Scan lines interactively
    Repl,
}

fn main() -> ExitCode {
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = ConfigRoot::load(args.config.as_deref())?;

    let level = if args.verbose || config.log.debug {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    Logger::initialize(level);

    if !config.display.color {
        colored::control::set_override(false);
    }

    match args.command {
        Commands::Tokens { file, source, format, locations } => {
            let input = Input::read(file, source)?;
            let options = DisplayOptions {
                format: format.unwrap_or(config.display.format),
                locations: locations || config.display.locations,
            };

            list_tokens(&input, options)
        }

        Commands::Repl => {
            let options = DisplayOptions {
                format: config.display.format,
                locations: config.display.locations,
            };

            Repl::new(options).run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Prints every token that could be scanned. A scan failure is reported after
/// the tokens that preceded it.
fn list_tokens(input: &Input, options: DisplayOptions) -> anyhow::Result<ExitCode> {
    if input.is_empty() {
        eprintln!("{}: {}", "error".red().bold(), "No input provided!".bold());
        return Ok(ExitCode::from(2));
    }

    let (tokens, error) = Scanner::new(&input.contents).collect_all();
    log::info!("Scanned {} tokens from {}", tokens.len(), input.name);

    let mut stdout = std::io::stdout().lock();
    TokenListing::new(&tokens, options).write_to(&mut stdout)?;
    stdout.flush()?;

    match error {
        None => Ok(ExitCode::SUCCESS),
        Some(error) => {
            ErrorPrinter::for_scan_error(&input.name, &input.contents, &error).print();
            Ok(ExitCode::FAILURE)
        }
    }
}
