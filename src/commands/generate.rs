// GenerateCommand - Fetch, classify and emit the tier tables
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, paint};
use crate::Args;
use crate::config::GeneratorConfig;
use crate::generator::{
    ArtifactFormat, ArtifactMetadata, Formatter, GenerationReport, Generator, Passthrough,
    Rustfmt, emitter_for,
};
use crate::registry::{HttpRecordSource, RecordParser, RecordSource, SnapshotRecordSource};
use anyhow::Context;
use async_trait::async_trait;
use colored::Colorize;
use tracing::info;

/// GenerateCommand runs the generator pipeline once and writes the artifact
pub struct GenerateCommand {
    args: Args,
}

impl GenerateCommand {
    /// Create a new GenerateCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Assemble the pipeline for a resolved configuration
    pub fn build(&self, config: &GeneratorConfig) -> anyhow::Result<Generator> {
        let policy = config
            .load_policy()
            .context("Failed to load classification policy")?;

        let source: Box<dyn RecordSource> = if self.args.offline {
            info!("Offline mode: using the bundled registry snapshot");
            Box::new(SnapshotRecordSource)
        } else {
            Box::new(HttpRecordSource::with_timeout(
                config.registry_url.clone(),
                config.timeout(),
            )?)
        };

        let metadata = ArtifactMetadata::new(&config.package, source.location(), &policy.revision);
        let emitter = emitter_for(config.format, metadata)?;

        let formatter: Box<dyn Formatter> =
            if config.format == ArtifactFormat::Rust && config.rustfmt {
                Box::new(Rustfmt::default())
            } else {
                Box::new(Passthrough)
            };

        Ok(Generator::new(
            source,
            RecordParser::with_policy(&policy),
            emitter,
            formatter,
        ))
    }

    fn print_report(report: &GenerationReport) {
        if let Some(output) = &report.output {
            println!(
                "{} Generated {} cipher suites into {} ({} bytes)",
                "✓".green(),
                report.grouped.total(),
                output.display(),
                report.bytes_written
            );
        }

        for (classification, count) in report.grouped.counts() {
            println!("  {:<12} {}", paint(classification), count);
        }

        if report.skipped > 0 {
            println!("  {:<12} {}", "skipped".dimmed(), report.skipped);
        }
    }
}

#[async_trait]
impl Command for GenerateCommand {
    async fn execute(&self) -> anyhow::Result<()> {
        let config = self.args.resolve_config()?;
        let generator = self.build(&config)?;

        let report = generator
            .run(&config.output)
            .await
            .with_context(|| format!("Failed to generate {}", config.output.display()))?;

        Self::print_report(&report);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "GenerateCommand"
    }
}
