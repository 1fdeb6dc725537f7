// Classification policy - keyword tables driving extraction and classification
//
// Every heuristic the pipeline applies lives here as data. A policy file may
// override any subset of the fields.

use crate::ciphers::{TLS1_0, TLS1_1, TLS1_2, TLS1_3};
use crate::error::CipherSuiteError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Revision of the built-in policy
pub const BUILTIN_POLICY_REVISION: &str = "2025.1";

/// Condition under which a version rule fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VersionTrigger {
    /// Registry codepoint starts with the prefix, e.g. `0x13,`
    CodepointPrefix { prefix: String },
    /// Suite name contains any of the given substrings
    NameContains { any_of: Vec<String> },
}

impl VersionTrigger {
    pub fn matches(&self, description: &str, value: &str) -> bool {
        match self {
            VersionTrigger::CodepointPrefix { prefix } => value.starts_with(prefix.as_str()),
            VersionTrigger::NameContains { any_of } => {
                any_of.iter().any(|needle| description.contains(needle.as_str()))
            }
        }
    }
}

/// One entry of the ordered version inference table; first match wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRule {
    pub trigger: VersionTrigger,
    pub versions: Vec<String>,
}

/// Data tables for record admission, component extraction, version inference
/// and security classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationPolicy {
    pub revision: String,

    /// Prefix every admitted suite name carries
    pub suite_prefix: String,

    /// Description markers of placeholder rows
    pub skip_markers: Vec<String>,

    /// Marker of a codepoint range row
    pub range_marker: String,

    /// Marker of deliberately weakened legacy suites
    pub export_marker: String,

    /// Separator between key exchange and bulk cipher in legacy names
    pub with_marker: String,

    /// Hash suffix candidates, longest first
    pub hash_suffixes: Vec<String>,

    pub insecure_keywords: Vec<String>,
    pub weak_keywords: Vec<String>,

    /// Authenticated modes exempt from the weak keyword match
    pub aead_exemptions: Vec<String>,

    pub version_rules: Vec<VersionRule>,
    pub default_versions: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        let all_versions = strings(&[TLS1_0, TLS1_1, TLS1_2, TLS1_3]);
        let modern_versions = strings(&[TLS1_2, TLS1_3]);

        Self {
            revision: BUILTIN_POLICY_REVISION.to_string(),
            suite_prefix: "TLS_".to_string(),
            skip_markers: strings(&["Reserved", "Unassigned", "avoid conflicts"]),
            range_marker: "-".to_string(),
            export_marker: "EXPORT".to_string(),
            with_marker: "_WITH_".to_string(),
            hash_suffixes: strings(&["SHA512", "SHA384", "SHA256", "SHA", "MD5", "SM3"]),
            insecure_keywords: strings(&[
                "NULL", "EXPORT", "DES40", "DES_CBC", "RC4", "RC2", "anon", "MD5",
            ]),
            weak_keywords: strings(&["3DES", "CBC", "IDEA", "SEED"]),
            aead_exemptions: strings(&["GCM", "CCM"]),
            version_rules: vec![
                VersionRule {
                    trigger: VersionTrigger::CodepointPrefix {
                        prefix: "0x13,".to_string(),
                    },
                    versions: strings(&[TLS1_3]),
                },
                // Approximation kept as is: EXPORT suites are listed under every
                // version, TLS 1.3 included.
                VersionRule {
                    trigger: VersionTrigger::NameContains {
                        any_of: strings(&["EXPORT"]),
                    },
                    versions: all_versions.clone(),
                },
                VersionRule {
                    trigger: VersionTrigger::NameContains {
                        any_of: strings(&["SHA256", "SHA384"]),
                    },
                    versions: modern_versions.clone(),
                },
                VersionRule {
                    trigger: VersionTrigger::NameContains {
                        any_of: strings(&["GCM"]),
                    },
                    versions: modern_versions,
                },
            ],
            default_versions: all_versions,
        }
    }
}

impl ClassificationPolicy {
    /// Load a policy from a TOML file. Fields absent from the file keep their
    /// built-in values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| CipherSuiteError::file_system(&path, e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let policy: ClassificationPolicy = toml::from_str(content)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Reject tables that would let an entity through without a hash
    /// candidate list or with an empty version set.
    pub fn validate(&self) -> Result<()> {
        if self.suite_prefix.is_empty() {
            return Err(CipherSuiteError::config("policy suite_prefix is empty"));
        }
        if self.hash_suffixes.is_empty() {
            return Err(CipherSuiteError::config("policy hash_suffixes is empty"));
        }
        if self.default_versions.is_empty() {
            return Err(CipherSuiteError::config("policy default_versions is empty"));
        }
        if let Some(rule) = self.version_rules.iter().find(|r| r.versions.is_empty()) {
            return Err(CipherSuiteError::config(format!(
                "policy version rule {:?} yields no versions",
                rule.trigger
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_policy_is_valid() {
        let policy = ClassificationPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.revision, BUILTIN_POLICY_REVISION);
        assert_eq!(policy.version_rules.len(), 4);
    }

    #[test]
    fn test_hash_suffixes_longest_first() {
        let policy = ClassificationPolicy::default();
        let sha = policy.hash_suffixes.iter().position(|s| s == "SHA").unwrap();
        for longer in ["SHA512", "SHA384", "SHA256"] {
            let pos = policy.hash_suffixes.iter().position(|s| s == longer).unwrap();
            assert!(pos < sha, "{} must be tried before SHA", longer);
        }
    }

    #[test]
    fn test_partial_toml_override() {
        let policy = ClassificationPolicy::from_toml(
            r#"
revision = "audit-2"
weak_keywords = ["3DES", "CBC", "IDEA", "SEED", "CAMELLIA"]
"#,
        )
        .unwrap();

        assert_eq!(policy.revision, "audit-2");
        assert!(policy.weak_keywords.contains(&"CAMELLIA".to_string()));
        // untouched tables keep their built-in values
        assert_eq!(policy.suite_prefix, "TLS_");
        assert_eq!(policy.version_rules.len(), 4);
    }

    #[test]
    fn test_toml_version_rules() {
        let policy = ClassificationPolicy::from_toml(
            r#"
default_versions = ["TLS1.2"]

[[version_rules]]
versions = ["TLS1.3"]
trigger = { kind = "codepoint_prefix", prefix = "0x13," }
"#,
        )
        .unwrap();

        assert_eq!(policy.version_rules.len(), 1);
        assert!(policy.version_rules[0].trigger.matches("TLS_X", "0x13,0x01"));
        assert_eq!(policy.default_versions, vec!["TLS1.2".to_string()]);
    }

    #[test]
    fn test_rejects_empty_tables() {
        let err = ClassificationPolicy::from_toml("hash_suffixes = []").unwrap_err();
        assert!(matches!(err, CipherSuiteError::Config { .. }));

        let err = ClassificationPolicy::from_toml("default_versions = []").unwrap_err();
        assert!(matches!(err, CipherSuiteError::Config { .. }));
    }

    #[test]
    fn test_trigger_matching() {
        let trigger = VersionTrigger::NameContains {
            any_of: vec!["SHA256".to_string(), "SHA384".to_string()],
        };
        assert!(trigger.matches("TLS_RSA_WITH_AES_256_CBC_SHA384", "0x00,0x3D"));
        assert!(!trigger.matches("TLS_RSA_WITH_AES_256_CBC_SHA", "0x00,0x35"));
    }
}
