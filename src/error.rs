// Error types for cipher suite generation and lookup
//
// Fatal failures (transport, decoding, emission, configuration) are modelled by
// `CipherSuiteError`. Rejected registry rows are not errors: they are reported
// as a `SkipReason` and the pipeline carries on.

use std::io;
use thiserror::Error;

/// Main error type for the generation pipeline
#[derive(Debug, Error)]
pub enum CipherSuiteError {
    /// The registry could not be reached or the transfer failed
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry answered with anything other than 200 OK
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    /// The registry feed did not even contain a header row
    #[error("failed to read CSV header: registry feed is empty")]
    EmptyRegistry,

    /// A row of the registry feed could not be decoded
    #[error("failed to read CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// The generated artifact could not be rendered or formatted
    #[error("failed to emit generated code: {details}")]
    Emission { details: String },

    /// Invalid configuration, policy or CLI parameters
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// File system errors
    #[error("File system error: {path}: {source}")]
    FileSystem {
        path: String,
        #[source]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML configuration or policy parse errors
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CipherSuiteError {
    pub fn config(message: impl Into<String>) -> Self {
        CipherSuiteError::Config {
            message: message.into(),
        }
    }

    pub fn emission(details: impl Into<String>) -> Self {
        CipherSuiteError::Emission {
            details: details.into(),
        }
    }

    pub fn file_system(path: impl AsRef<std::path::Path>, source: io::Error) -> Self {
        CipherSuiteError::FileSystem {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Why a registry row was not admitted as a cipher suite
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("row has {found} fields, at least {required} required")]
    TooFewFields { found: usize, required: usize },

    #[error("placeholder entry: {description}")]
    Placeholder { description: String },

    #[error("codepoint range {value}")]
    CodepointRange { value: String },

    #[error("description {description:?} lacks the {prefix} prefix")]
    MissingPrefix {
        description: String,
        prefix: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CipherSuiteError::UnexpectedStatus { status: 503 };
        assert_eq!(err.to_string(), "unexpected status code: 503");

        let err = CipherSuiteError::config("package label is empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: package label is empty"
        );

        let err = CipherSuiteError::file_system(
            "/tmp/out.rs",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("File system error: /tmp/out.rs"));
    }

    #[test]
    fn test_skip_reason_messages() {
        let reason = SkipReason::TooFewFields {
            found: 3,
            required: 6,
        };
        assert_eq!(reason.to_string(), "row has 3 fields, at least 6 required");

        let reason = SkipReason::CodepointRange {
            value: "0x00,0x1C-1D".to_string(),
        };
        assert_eq!(reason.to_string(), "codepoint range 0x00,0x1C-1D");
    }
}
