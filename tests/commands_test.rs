// Copyright (c) 2025 Marc Rivero López
// Licensed under GPLv3. See LICENSE file for details.

//! Commands Module Integration Tests
//!
//! Covers command naming, router priority and an offline generation run.

use ciphersuites::Args;
use ciphersuites::commands::{
    Command, CommandRouter, GenerateCommand, LookupCommand, ShowCommand,
};
use ciphersuites::generator::ArtifactFormat;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Command Creation and Naming Tests
// ============================================================================

#[test]
fn test_generate_command_creation_and_name() {
    let cmd = GenerateCommand::new(Args::default());
    assert_eq!(cmd.name(), "GenerateCommand");
}

#[test]
fn test_show_command_creation_and_name() {
    let mut args = Args::default();
    args.show_ciphers = true;
    let cmd = ShowCommand::new(args);
    assert_eq!(cmd.name(), "ShowCommand");
}

#[test]
fn test_lookup_command_creation_and_name() {
    let mut args = Args::default();
    args.lookup = vec!["TLS_AES_128_GCM_SHA256".to_string()];
    let cmd = LookupCommand::new(args);
    assert_eq!(cmd.name(), "LookupCommand");
}

// ============================================================================
// Router Tests
// ============================================================================

#[test]
fn test_router_defaults_to_generate() {
    let cmd = CommandRouter::route(Args::default());
    assert_eq!(cmd.name(), "GenerateCommand");
}

#[test]
fn test_router_show_takes_priority_over_lookup() {
    let mut args = Args::default();
    args.show_ciphers = true;
    args.lookup = vec!["TLS_AES_128_GCM_SHA256".to_string()];
    assert_eq!(CommandRouter::route(args).name(), "ShowCommand");
}

#[test]
fn test_router_lookup() {
    let mut args = Args::default();
    args.lookup = vec!["UNKNOWN_CIPHER_SUITE".to_string()];
    assert_eq!(CommandRouter::route(args).name(), "LookupCommand");
}

// ============================================================================
// Execution Tests
// ============================================================================

#[tokio::test]
async fn test_routed_offline_generation_without_rustfmt() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("ciphersuites.gen.rs");

    let mut args = Args::default();
    args.offline = true;
    args.no_rustfmt = true;
    args.format = Some(ArtifactFormat::Rust);
    args.output = Some(output.clone());

    CommandRouter::route(args).execute().await.unwrap();

    let code = std::fs::read_to_string(&output).unwrap();
    assert!(code.contains("pub mod ciphersuites {"));
    assert!(code.contains("\"TLS_AES_128_GCM_SHA256\""));
}

#[tokio::test]
async fn test_generate_with_missing_config_file_fails() {
    let mut args = Args::default();
    args.offline = true;
    args.config = Some(PathBuf::from("/nonexistent/ciphersuites.toml"));

    assert!(CommandRouter::route(args).execute().await.is_err());
}

#[tokio::test]
async fn test_lookup_command_executes() {
    let mut args = Args::default();
    args.lookup = vec![
        "TLS_AES_128_GCM_SHA256".to_string(),
        "UNKNOWN_CIPHER_SUITE".to_string(),
    ];
    args.json = true;

    assert!(LookupCommand::new(args).execute().await.is_ok());
}
