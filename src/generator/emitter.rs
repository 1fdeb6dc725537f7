// Emitters - Render grouped cipher suites as a source artifact

use super::grouper::GroupedCipherSuites;
use crate::Result;
use crate::ciphers::{CipherSuite, Classification};
use crate::error::CipherSuiteError;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Artifact flavours the generator can emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Standalone Rust module with tier tables and accessors
    #[default]
    Rust,
    /// JSON document with the four tier tables
    Json,
}

/// Provenance recorded in every artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactMetadata {
    /// Module name (Rust) or package label (JSON)
    pub package: String,
    /// Where the registry rows came from
    pub source: String,
    pub policy_revision: String,
}

impl ArtifactMetadata {
    pub fn new(
        package: impl Into<String>,
        source: impl Into<String>,
        policy_revision: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            source: source.into(),
            policy_revision: policy_revision.into(),
        }
    }
}

/// Renders grouped cipher suites into artifact text
pub trait Emitter: Send + Sync {
    fn render(&self, grouped: &GroupedCipherSuites) -> Result<String>;
}

pub fn emitter_for(format: ArtifactFormat, metadata: ArtifactMetadata) -> Result<Box<dyn Emitter>> {
    let emitter: Box<dyn Emitter> = match format {
        ArtifactFormat::Rust => Box::new(RustEmitter::new(metadata)?),
        ArtifactFormat::Json => Box::new(JsonEmitter::new(metadata)),
    };
    Ok(emitter)
}

/// Strict and reserved keywords of every Rust edition; none of them can name
/// a module
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Check that a package label can be used as a Rust module name
pub fn validate_package(package: &str) -> Result<()> {
    let mut chars = package.chars();
    let valid_start = chars
        .next()
        .map(|c| c == '_' || c.is_ascii_alphabetic())
        .unwrap_or(false);

    if !valid_start
        || package == "_"
        || !chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
    {
        return Err(CipherSuiteError::config(format!(
            "package label {:?} is not a valid Rust identifier",
            package
        )));
    }

    if RUST_KEYWORDS.contains(&package) {
        return Err(CipherSuiteError::config(format!(
            "package label {:?} is a Rust keyword",
            package
        )));
    }

    Ok(())
}

/// Emits a self-contained Rust module
pub struct RustEmitter {
    metadata: ArtifactMetadata,
}

impl RustEmitter {
    pub fn new(metadata: ArtifactMetadata) -> Result<Self> {
        validate_package(&metadata.package)?;
        Ok(Self { metadata })
    }

    fn table_name(classification: Classification) -> &'static str {
        match classification {
            Classification::Recommended => "RECOMMENDED_CIPHER_SUITES",
            Classification::Secure => "SECURE_CIPHER_SUITES",
            Classification::Weak => "WEAK_CIPHER_SUITES",
            Classification::Insecure => "INSECURE_CIPHER_SUITES",
            Classification::Unknown => "UNKNOWN_CIPHER_SUITES",
        }
    }

    fn variant(classification: Classification) -> &'static str {
        match classification {
            Classification::Recommended => "Recommended",
            Classification::Secure => "Secure",
            Classification::Weak => "Weak",
            Classification::Insecure => "Insecure",
            Classification::Unknown => "Unknown",
        }
    }

    fn write_entry(out: &mut String, suite: &CipherSuite) -> std::fmt::Result {
        let versions: Vec<String> = suite
            .supported_versions
            .iter()
            .map(|v| format!("{:?}", v))
            .collect();

        writeln!(out, "        CipherSuite {{")?;
        writeln!(out, "            name: {:?},", suite.name)?;
        writeln!(out, "            protocol: {:?},", suite.protocol)?;
        writeln!(out, "            encryption: {:?},", suite.encryption)?;
        writeln!(out, "            hash: {:?},", suite.hash)?;
        writeln!(
            out,
            "            classification: Classification::{},",
            Self::variant(suite.classification)
        )?;
        writeln!(
            out,
            "            supported_versions: &[{}],",
            versions.join(", ")
        )?;
        writeln!(out, "        }},")
    }

    fn write_module(&self, out: &mut String, grouped: &GroupedCipherSuites) -> std::fmt::Result {
        writeln!(
            out,
            "// Code generated by ciphersuites v{} from {}. DO NOT EDIT.",
            env!("CARGO_PKG_VERSION"),
            self.metadata.source
        )?;
        writeln!(
            out,
            "// Classification policy revision {}.",
            self.metadata.policy_revision
        )?;
        writeln!(out)?;
        writeln!(out, "#[allow(dead_code)]")?;
        writeln!(out, "pub mod {} {{", self.metadata.package)?;
        out.push_str(PRELUDE);

        for (classification, suites) in grouped.iter() {
            writeln!(out)?;
            writeln!(
                out,
                "    /// {} cipher suites, sorted by name.",
                Self::variant(classification)
            )?;
            writeln!(
                out,
                "    pub static {}: &[CipherSuite] = &[",
                Self::table_name(classification)
            )?;
            for suite in suites {
                Self::write_entry(out, suite)?;
            }
            writeln!(out, "    ];")?;
        }

        out.push_str(ACCESSORS);
        writeln!(out, "}}")
    }
}

impl Emitter for RustEmitter {
    fn render(&self, grouped: &GroupedCipherSuites) -> Result<String> {
        let mut out = String::new();
        self.write_module(&mut out, grouped)
            .map_err(|e| CipherSuiteError::emission(format!("failed to render module: {}", e)))?;
        Ok(out)
    }
}

const PRELUDE: &str = r#"    /// Security class a cipher suite falls under.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Classification {
        Unknown,
        Recommended,
        Secure,
        Weak,
        Insecure,
    }

    /// Security attributes associated with a cipher suite.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CipherSuite {
        pub name: &'static str,
        pub protocol: &'static str,
        pub encryption: &'static str,
        pub hash: &'static str,
        pub classification: Classification,
        pub supported_versions: &'static [&'static str],
    }

    impl CipherSuite {
        /// Returned by lookups of unregistered names.
        pub const UNKNOWN: CipherSuite = CipherSuite {
            name: "",
            protocol: "",
            encryption: "",
            hash: "",
            classification: Classification::Unknown,
            supported_versions: &[],
        };

        pub fn is_recommended(&self) -> bool {
            self.classification == Classification::Recommended
        }

        pub fn is_secure(&self) -> bool {
            self.classification == Classification::Secure
        }

        pub fn is_weak(&self) -> bool {
            self.classification == Classification::Weak
        }

        pub fn is_insecure(&self) -> bool {
            self.classification == Classification::Insecure
        }
    }
"#;

const ACCESSORS: &str = r#"
    fn find(table: &'static [CipherSuite], name: &str) -> Option<&'static CipherSuite> {
        table
            .binary_search_by(|suite| suite.name.cmp(name))
            .ok()
            .map(|index| &table[index])
    }

    /// Retrieves a cipher suite by name, probing Recommended, Secure, Weak
    /// then Insecure.
    pub fn get_cipher_suite(name: &str) -> (CipherSuite, bool) {
        find(RECOMMENDED_CIPHER_SUITES, name)
            .or_else(|| find(SECURE_CIPHER_SUITES, name))
            .or_else(|| find(WEAK_CIPHER_SUITES, name))
            .or_else(|| find(INSECURE_CIPHER_SUITES, name))
            .map(|suite| (*suite, true))
            .unwrap_or((CipherSuite::UNKNOWN, false))
    }

    /// Returns the security classification of a cipher suite, `Unknown` if
    /// it is not registered.
    pub fn get_classification(name: &str) -> Classification {
        get_cipher_suite(name).0.classification
    }
"#;

#[derive(Serialize)]
struct JsonTiers<'a> {
    recommended: &'a [CipherSuite],
    secure: &'a [CipherSuite],
    weak: &'a [CipherSuite],
    insecure: &'a [CipherSuite],
}

#[derive(Serialize)]
struct JsonArtifact<'a> {
    package: &'a str,
    source: &'a str,
    policy_revision: &'a str,
    generated_by: String,
    tiers: JsonTiers<'a>,
}

/// Emits the tier tables as pretty-printed JSON
pub struct JsonEmitter {
    metadata: ArtifactMetadata,
}

impl JsonEmitter {
    pub fn new(metadata: ArtifactMetadata) -> Self {
        Self { metadata }
    }
}

impl Emitter for JsonEmitter {
    fn render(&self, grouped: &GroupedCipherSuites) -> Result<String> {
        let artifact = JsonArtifact {
            package: &self.metadata.package,
            source: &self.metadata.source,
            policy_revision: &self.metadata.policy_revision,
            generated_by: format!("ciphersuites v{}", env!("CARGO_PKG_VERSION")),
            tiers: JsonTiers {
                recommended: &grouped.recommended,
                secure: &grouped.secure,
                weak: &grouped.weak,
                insecure: &grouped.insecure,
            },
        };

        let mut json = serde_json::to_string_pretty(&artifact)?;
        json.push('\n');
        Ok(json)
    }
}
