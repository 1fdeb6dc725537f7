// Command trait - Defines the interface for all command implementations
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use async_trait::async_trait;

/// Command trait - One operational mode of the ciphersuites binary
///
/// Commands own the parsed arguments they were routed with and report
/// failures as `anyhow::Error` so the binary can attach context.
#[async_trait]
pub trait Command: Send + Sync {
    /// Execute the command asynchronously
    async fn execute(&self) -> anyhow::Result<()>;

    /// Get a human-readable name for this command (for logging/debugging)
    fn name(&self) -> &'static str;
}
