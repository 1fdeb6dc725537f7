// Generator configuration

use crate::Result;
use crate::error::CipherSuiteError;
use crate::generator::ArtifactFormat;
use crate::registry::{ClassificationPolicy, IANA_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Registry feed location
    pub registry_url: String,

    /// Fetch timeout in seconds
    pub timeout_seconds: u64,

    /// Artifact path
    pub output: PathBuf,

    /// Module name of the generated Rust artifact
    pub package: String,

    pub format: ArtifactFormat,

    /// Run rustfmt over Rust artifacts
    pub rustfmt: bool,

    /// Optional classification policy override (TOML)
    pub policy: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            registry_url: IANA_URL.to_string(),
            timeout_seconds: 30,
            output: PathBuf::from("ciphersuites.gen.rs"),
            package: "ciphersuites".to_string(),
            format: ArtifactFormat::Rust,
            rustfmt: true,
            policy: None,
        }
    }
}

impl GeneratorConfig {
    /// Create config from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| CipherSuiteError::file_system(&path, e))?;
        let config: GeneratorConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.registry_url.trim().is_empty() {
            return Err(CipherSuiteError::config("registry_url is empty"));
        }
        if self.timeout_seconds == 0 {
            return Err(CipherSuiteError::config("timeout_seconds must be positive"));
        }
        if self.package.trim().is_empty() {
            return Err(CipherSuiteError::config("package is empty"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Policy named by the config, or the built-in one
    pub fn load_policy(&self) -> Result<ClassificationPolicy> {
        match &self.policy {
            Some(path) => ClassificationPolicy::from_file(path),
            None => Ok(ClassificationPolicy::default()),
        }
    }

    /// Write an example configuration file
    pub fn create_example<P: AsRef<Path>>(path: P) -> Result<()> {
        let body = toml::to_string_pretty(&Self::default())
            .map_err(|e| CipherSuiteError::config(format!("failed to serialize example: {}", e)))?;
        let content = format!(
            "# ciphersuites generator configuration\n\
             # Command line flags take precedence over these values.\n\
             # policy = \"policy.toml\"\n\n{}",
            body
        );
        std::fs::write(&path, content).map_err(|e| CipherSuiteError::file_system(&path, e))
    }
}
