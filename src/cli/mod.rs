// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;
use crate::config::GeneratorConfig;
use crate::generator::ArtifactFormat;
use clap::Parser;
use std::path::PathBuf;

/// ciphersuites - TLS cipher suite classification generator
///
/// Fetches the IANA TLS Cipher Suites registry, classifies every suite into
/// recommended, secure, weak or insecure, and emits the tier tables as a Rust
/// module (default) or JSON document.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ciphersuites")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Output file path
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Module name for the generated code
    #[arg(short = 'p', long = "package", value_name = "NAME")]
    pub package: Option<String>,

    /// Artifact format
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<ArtifactFormat>,

    /// Registry feed URL
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Registry fetch timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Classification policy override (TOML)
    #[arg(long = "policy", value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Skip the rustfmt pass
    #[arg(long = "no-rustfmt")]
    pub no_rustfmt: bool,

    /// Use the registry snapshot bundled with this build instead of fetching
    #[arg(long = "offline")]
    pub offline: bool,

    /// Configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write an example configuration file and exit
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,

    /// List the bundled cipher suite tables by tier and exit
    #[arg(long = "show-ciphers")]
    pub show_ciphers: bool,

    /// Look up cipher suites by name in the bundled tables and exit
    #[arg(short = 'l', long = "lookup", value_name = "NAME")]
    pub lookup: Vec<String>,

    /// Print --show-ciphers / --lookup results as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Configuration file values overridden by command line flags
    pub fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(url) = &self.url {
            config.registry_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }
        if let Some(policy) = &self.policy {
            config.policy = Some(policy.clone());
        }
        if self.no_rustfmt {
            config.rustfmt = false;
        }

        config.validate()?;
        Ok(config)
    }
}
