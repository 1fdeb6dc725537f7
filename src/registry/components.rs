// Component extraction - Splits a suite name into protocol, cipher and hash

use super::policy::ClassificationPolicy;

/// Protocol, bulk encryption and hash parts of a suite name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteComponents {
    pub protocol: String,
    pub encryption: String,
    pub hash: String,
}

/// Decomposes registry names such as `TLS_DHE_RSA_WITH_AES_128_GCM_SHA256`
/// (legacy) or `TLS_AES_128_GCM_SHA256` (TLS 1.3) into their components
pub struct ComponentExtractor {
    suite_prefix: String,
    export_marker: String,
    with_marker: String,
    /// `_`-prefixed hash suffix candidates, longest first
    hash_markers: Vec<String>,
}

impl ComponentExtractor {
    pub fn new(policy: &ClassificationPolicy) -> Self {
        Self {
            suite_prefix: policy.suite_prefix.clone(),
            export_marker: policy.export_marker.clone(),
            with_marker: policy.with_marker.clone(),
            hash_markers: policy
                .hash_suffixes
                .iter()
                .map(|suffix| format!("_{}", suffix))
                .collect(),
        }
    }

    pub fn extract(&self, name: &str) -> SuiteComponents {
        let protocol = if name.contains(self.export_marker.as_str()) {
            format!("TLS {}", self.export_marker)
        } else {
            "TLS".to_string()
        };

        let parts = name.strip_prefix(self.suite_prefix.as_str()).unwrap_or(name);

        let (encryption, hash) = match parts.find(self.with_marker.as_str()) {
            Some(idx) => self.split_legacy(&parts[idx + self.with_marker.len()..]),
            None => Self::split_modern(parts),
        };

        SuiteComponents {
            protocol,
            encryption,
            hash,
        }
    }

    /// Everything after `_WITH_`: the bulk cipher, then a hash suffix. The
    /// candidates are tried longest first so `_SHA` never matches inside
    /// `_SHA256`.
    fn split_legacy(&self, remainder: &str) -> (String, String) {
        for marker in &self.hash_markers {
            if let Some(idx) = remainder.rfind(marker.as_str()) {
                let hash = remainder[idx + 1..].to_string();
                let encryption = remainder[..idx].replace('_', " ");
                return (encryption, hash);
            }
        }

        (remainder.replace('_', " "), String::new())
    }

    /// TLS 1.3 style names have no key exchange part: the last token is the
    /// hash and the rest is the AEAD.
    fn split_modern(parts: &str) -> (String, String) {
        let tokens: Vec<&str> = parts.split('_').collect();
        match tokens.split_last() {
            Some((hash, rest)) if !rest.is_empty() => (rest.join(" "), hash.to_string()),
            _ => (String::new(), String::new()),
        }
    }
}

impl Default for ComponentExtractor {
    fn default() -> Self {
        Self::new(&ClassificationPolicy::default())
    }
}
