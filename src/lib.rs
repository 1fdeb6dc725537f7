// ciphersuites - TLS cipher suite classifications from the IANA registry
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! Classified TLS cipher suites generated from the IANA TLS Cipher Suites
//! registry.
//!
//! The library answers "how secure is this suite?" from tables bundled with
//! the build ([`get_cipher_suite`], [`get_classification`]) and exposes the
//! pipeline that regenerates those tables from a live registry feed
//! ([`generator::Generator`]).

pub mod ciphers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod registry;

// Re-export commonly used types
pub use crate::ciphers::{
    CipherSuite, CipherSuiteTables, Classification, find_cipher_suite, get_cipher_suite,
    get_classification,
};
pub use crate::cli::Args;
pub use crate::config::GeneratorConfig;
pub use crate::error::CipherSuiteError;

/// Result type for cipher suite operations
pub type Result<T> = std::result::Result<T, CipherSuiteError>;
