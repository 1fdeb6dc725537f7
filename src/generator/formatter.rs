// Formatter - Final formatting pass over generated source

use crate::Result;
use crate::error::CipherSuiteError;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Formats a rendered artifact before it is written
pub trait Formatter: Send + Sync {
    fn format(&self, code: String) -> Result<String>;
}

/// Leaves the artifact untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn format(&self, code: String) -> Result<String> {
        Ok(code)
    }
}

/// Edition rustfmt parses generated modules with
pub const DEFAULT_EDITION: &str = "2024";

/// Pipes the artifact through `rustfmt`
#[derive(Debug, Clone)]
pub struct Rustfmt {
    program: String,
    edition: String,
}

impl Default for Rustfmt {
    fn default() -> Self {
        Self {
            program: "rustfmt".to_string(),
            edition: DEFAULT_EDITION.to_string(),
        }
    }
}

impl Rustfmt {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = edition.into();
        self
    }
}

impl Formatter for Rustfmt {
    fn format(&self, code: String) -> Result<String> {
        debug!("Formatting {} bytes with {}", code.len(), self.program);

        let mut child = Command::new(&self.program)
            .args(["--edition", self.edition.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                CipherSuiteError::emission(format!("failed to run {}: {}", self.program, e))
            })?;

        // rustfmt reads all of stdin before writing anything
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(code.as_bytes()).map_err(|e| {
                CipherSuiteError::emission(format!("failed to send code to {}: {}", self.program, e))
            })?;
        }

        let output = child.wait_with_output().map_err(|e| {
            CipherSuiteError::emission(format!("failed to wait for {}: {}", self.program, e))
        })?;

        if !output.status.success() {
            return Err(CipherSuiteError::emission(format!(
                "failed to format generated code: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| {
            CipherSuiteError::emission(format!("{} produced invalid UTF-8: {}", self.program, e))
        })
    }
}
