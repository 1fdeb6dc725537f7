// LookupCommand - Resolves cipher suite names against the bundled tables
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::show::describe;
use super::{Command, paint};
use crate::Args;
use crate::ciphers::{CIPHER_SUITE_TABLES, CipherSuite, CipherSuiteTables, Classification};
use async_trait::async_trait;
use colored::Colorize;
use serde::Serialize;

/// Outcome of one name lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub name: String,
    pub found: bool,
    pub classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher_suite: Option<CipherSuite>,
}

/// LookupCommand reports the classification of each `--lookup` name
pub struct LookupCommand {
    args: Args,
}

impl LookupCommand {
    /// Create a new LookupCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn resolve(tables: &CipherSuiteTables, names: &[String]) -> Vec<LookupResult> {
        names
            .iter()
            .map(|name| {
                let (suite, found) = tables.get_cipher_suite(name);
                LookupResult {
                    name: name.clone(),
                    found,
                    classification: suite.classification,
                    cipher_suite: found.then_some(suite),
                }
            })
            .collect()
    }

    pub fn render_text(results: &[LookupResult]) -> String {
        let mut out = String::new();
        for result in results {
            let line = match &result.cipher_suite {
                Some(suite) => format!("{:<12} {}", paint(result.classification), describe(suite)),
                None => format!(
                    "{:<12} {} {}",
                    paint(result.classification),
                    result.name,
                    "(not registered)".dimmed()
                ),
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[async_trait]
impl Command for LookupCommand {
    async fn execute(&self) -> anyhow::Result<()> {
        let results = Self::resolve(&CIPHER_SUITE_TABLES, &self.args.lookup);

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            print!("{}", Self::render_text(&results));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LookupCommand"
    }
}
