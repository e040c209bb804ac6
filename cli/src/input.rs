// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io::Read, path::PathBuf};

use anyhow::Context;

/// Source text handed to the scanner, with the name used in diagnostics.
#[derive(Debug, Clone)]
pub struct Input {
    pub name: String,
    pub contents: String,
}

impl Input {
    pub fn read(file: Option<PathBuf>, source: Option<String>) -> anyhow::Result<Self> {
        if let Some(contents) = source {
            return Ok(Self {
                name: "<source>".to_string(),
                contents,
            });
        }

        if let Some(path) = file {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            return Ok(Self {
                name: path.display().to_string(),
                contents,
            });
        }

        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)
            .context("Failed to read standard input")?;

        Ok(Self {
            name: "<stdin>".to_string(),
            contents,
        })
    }

    /// Whitespace-only input counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.trim().is_empty()
    }
}
