// ciphersuites - TLS cipher suite classifications from the IANA registry
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use anyhow::{Context, Result};
use ciphersuites::commands::CommandRouter;
use ciphersuites::{Args, GeneratorConfig};
use clap::Parser;
use colored::Colorize;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging - respect RUST_LOG environment variable, -v forces debug
    let log_level = if args.verbose > 0 {
        Level::DEBUG
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|s| s.parse::<Level>().ok())
            .unwrap_or(Level::INFO)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // Handle --config-example (generate example config and exit)
    if let Some(config_path) = &args.config_example {
        GeneratorConfig::create_example(config_path)?;
        println!(
            "{} Example configuration saved to: {}",
            "✓".green(),
            config_path.display()
        );
        return Ok(());
    }

    let command = CommandRouter::route(args);
    debug!("Executing {}", command.name());
    command.execute().await
}
