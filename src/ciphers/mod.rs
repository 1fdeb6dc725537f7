// Ciphers module - Cipher suite data model and runtime lookup

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod lookup;

pub use lookup::{
    CIPHER_SUITE_TABLES, CipherSuiteTables, find_cipher_suite, get_cipher_suite,
    get_classification,
};

/// Protocol version labels a cipher suite may be negotiated under
pub const TLS1_0: &str = "TLS1.0";
pub const TLS1_1: &str = "TLS1.1";
pub const TLS1_2: &str = "TLS1.2";
pub const TLS1_3: &str = "TLS1.3";

/// All version labels, oldest first
pub const TLS_VERSIONS: [&str; 4] = [TLS1_0, TLS1_1, TLS1_2, TLS1_3];

/// Security class a cipher suite falls under
///
/// `Unknown` is only ever produced by a lookup miss; no stored cipher suite
/// carries it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    #[default]
    Unknown,
    Recommended,
    Secure,
    Weak,
    Insecure,
}

impl Classification {
    /// Order in which the tier tables are searched on lookup
    pub const PRECEDENCE: [Classification; 4] = [
        Classification::Recommended,
        Classification::Secure,
        Classification::Weak,
        Classification::Insecure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Recommended => "recommended",
            Classification::Secure => "secure",
            Classification::Weak => "weak",
            Classification::Insecure => "insecure",
            Classification::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Classification::Unknown
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Security attributes of a registered TLS cipher suite
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherSuite {
    /// Registry name, e.g. `TLS_AES_128_GCM_SHA256`
    pub name: String,
    /// `TLS`, or `TLS EXPORT` for deliberately weakened legacy suites
    pub protocol: String,
    pub encryption: String,
    pub hash: String,
    pub classification: Classification,
    /// Versions of the TLS protocol that can negotiate this cipher suite
    pub supported_versions: Vec<String>,
}

impl CipherSuite {
    /// Returns true if the cipher suite is secure and recommended for use.
    pub fn is_recommended(&self) -> bool {
        self.classification == Classification::Recommended
    }

    /// Returns true if the cipher suite is secure.
    pub fn is_secure(&self) -> bool {
        self.classification == Classification::Secure
    }

    /// Returns true if the cipher suite is weak.
    pub fn is_weak(&self) -> bool {
        self.classification == Classification::Weak
    }

    /// Returns true if the cipher suite is insecure.
    pub fn is_insecure(&self) -> bool {
        self.classification == Classification::Insecure
    }

    pub fn is_export(&self) -> bool {
        self.protocol.ends_with("EXPORT")
    }

    pub fn supports(&self, version: &str) -> bool {
        self.supported_versions.iter().any(|v| v == version)
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] Protocol={} Enc={} Hash={} Versions={}",
            self.name,
            self.classification,
            self.protocol,
            self.encryption,
            self.hash,
            self.supported_versions.join(",")
        )
    }
}
