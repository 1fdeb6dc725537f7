// ShowCommand - Lists the bundled cipher suite tables
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, paint};
use crate::Args;
use crate::ciphers::{CIPHER_SUITE_TABLES, CipherSuite, CipherSuiteTables};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// ShowCommand prints every tier of the process-wide tables
pub struct ShowCommand {
    args: Args,
}

impl ShowCommand {
    /// Create a new ShowCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Tier listing as JSON, keyed by tier name
    pub fn render_json(tables: &CipherSuiteTables) -> anyhow::Result<String> {
        let mut tiers = Map::new();
        for (classification, suites) in tables.iter() {
            tiers.insert(
                classification.as_str().to_string(),
                serde_json::to_value(suites)?,
            );
        }
        Ok(serde_json::to_string_pretty(&Value::Object(tiers))?)
    }

    /// Tier listing for the terminal
    pub fn render_text(tables: &CipherSuiteTables) -> String {
        let mut out = String::new();
        for (classification, suites) in tables.iter() {
            out.push_str(&format!("{} ({})\n", paint(classification), suites.len()));
            for suite in suites {
                out.push_str(&format!("  {}\n", describe(suite)));
            }
            out.push('\n');
        }
        out
    }
}

pub(crate) fn describe(suite: &CipherSuite) -> String {
    format!(
        "{:<52} {:<10} {:<28} {:<7} {}",
        suite.name,
        suite.protocol,
        suite.encryption,
        suite.hash,
        suite.supported_versions.join(",")
    )
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(&self) -> anyhow::Result<()> {
        if self.args.json {
            println!("{}", Self::render_json(&CIPHER_SUITE_TABLES)?);
        } else {
            print!("{}", Self::render_text(&CIPHER_SUITE_TABLES));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ShowCommand"
    }
}
