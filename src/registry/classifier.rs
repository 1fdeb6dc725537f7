// Security classifier - Maps registry status and suite name to a tier

use super::policy::ClassificationPolicy;
use crate::ciphers::Classification;

/// Value of the registry's `Recommended` column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryStatus {
    /// `Y`
    Recommended,
    /// `N`
    NotRecommended,
    /// `D`
    Discouraged,
    /// Anything else, kept verbatim
    Other(String),
}

impl RegistryStatus {
    pub fn parse(flag: &str) -> Self {
        match flag {
            "Y" => RegistryStatus::Recommended,
            "N" => RegistryStatus::NotRecommended,
            "D" => RegistryStatus::Discouraged,
            other => RegistryStatus::Other(other.to_string()),
        }
    }
}

/// Determines the security tier of a cipher suite
pub struct SecurityClassifier {
    insecure_keywords: Vec<String>,
    weak_keywords: Vec<String>,
    aead_exemptions: Vec<String>,
}

impl SecurityClassifier {
    /// Keyword tables are upper-cased once here; matching is
    /// case-insensitive.
    pub fn new(policy: &ClassificationPolicy) -> Self {
        let upper = |items: &[String]| items.iter().map(|s| s.to_uppercase()).collect();

        Self {
            insecure_keywords: upper(&policy.insecure_keywords),
            weak_keywords: upper(&policy.weak_keywords),
            aead_exemptions: upper(&policy.aead_exemptions),
        }
    }

    /// Classify a suite from its `Recommended` flag, `DTLS-OK` flag and name.
    ///
    /// The DTLS flag is accepted but does not influence the tier.
    pub fn classify(&self, recommended: &str, _dtls_ok: &str, name: &str) -> Classification {
        match RegistryStatus::parse(recommended) {
            RegistryStatus::Recommended => Classification::Recommended,
            RegistryStatus::Discouraged => Classification::Insecure,
            RegistryStatus::NotRecommended => {
                let name_upper = name.to_uppercase();
                if self.contains_insecure_algorithm(&name_upper) {
                    Classification::Insecure
                } else if self.contains_weak_algorithm(&name_upper) {
                    Classification::Weak
                } else {
                    Classification::Secure
                }
            }
            // Unknown registry status is never promoted
            RegistryStatus::Other(_) => Classification::Weak,
        }
    }

    fn contains_insecure_algorithm(&self, name_upper: &str) -> bool {
        contains_any(name_upper, &self.insecure_keywords)
    }

    fn contains_weak_algorithm(&self, name_upper: &str) -> bool {
        // GCM and CCM are authenticated modes even where the name shares
        // characters with a weak token
        if contains_any(name_upper, &self.aead_exemptions) {
            return false;
        }
        contains_any(name_upper, &self.weak_keywords)
    }
}

impl Default for SecurityClassifier {
    fn default() -> Self {
        Self::new(&ClassificationPolicy::default())
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(recommended: &str, name: &str) -> Classification {
        SecurityClassifier::default().classify(recommended, "Y", name)
    }

    #[test]
    fn test_registry_flags() {
        assert_eq!(
            classify("Y", "TLS_AES_128_GCM_SHA256"),
            Classification::Recommended
        );
        assert_eq!(
            classify("D", "TLS_AES_128_GCM_SHA256"),
            Classification::Insecure
        );
        assert_eq!(classify("", "TLS_AES_128_GCM_SHA256"), Classification::Weak);
        assert_eq!(classify("?", "TLS_AES_128_GCM_SHA256"), Classification::Weak);
    }

    #[test]
    fn test_insecure_keywords() {
        for name in [
            "TLS_NULL_WITH_NULL_NULL",
            "TLS_RSA_EXPORT_WITH_RC4_40_MD5",
            "TLS_RSA_WITH_DES_CBC_SHA",
            "TLS_RSA_WITH_RC4_128_SHA",
            "TLS_DH_anon_WITH_RC4_128_MD5",
            "TLS_KRB5_WITH_3DES_EDE_CBC_MD5",
        ] {
            assert_eq!(classify("N", name), Classification::Insecure, "{}", name);
        }
    }

    #[test]
    fn test_anon_matches_case_insensitively() {
        assert_eq!(
            classify("N", "TLS_DH_anon_WITH_AES_128_CBC_SHA"),
            Classification::Insecure
        );
        assert_eq!(
            classify("N", "TLS_DH_anon_WITH_AES_256_GCM_SHA384"),
            Classification::Insecure
        );
    }

    #[test]
    fn test_weak_keywords() {
        for name in [
            "TLS_RSA_WITH_3DES_EDE_CBC_SHA",
            "TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA",
            "TLS_RSA_WITH_IDEA_CBC_SHA",
            "TLS_DHE_RSA_WITH_SEED_CBC_SHA",
        ] {
            assert_eq!(classify("N", name), Classification::Weak, "{}", name);
        }
    }

    #[test]
    fn test_aead_exemption() {
        assert_eq!(
            classify("N", "TLS_AES_128_CCM_8_SHA256"),
            Classification::Secure
        );
        assert_eq!(
            classify("N", "TLS_RSA_WITH_AES_128_GCM_SHA256"),
            Classification::Secure
        );
        // The exemption does not reach insecure keywords
        assert_eq!(
            classify("N", "TLS_PSK_WITH_NULL_SHA256"),
            Classification::Insecure
        );
    }

    #[test]
    fn test_secure_fallthrough() {
        assert_eq!(classify("N", "TLS_AEGIS_128L_SHA256"), Classification::Secure);
        assert_eq!(
            classify("N", "TLS_PSK_WITH_CHACHA20_POLY1305_SHA256"),
            Classification::Secure
        );
    }

    #[test]
    fn test_custom_policy_tables() {
        let policy = ClassificationPolicy {
            weak_keywords: vec!["CHACHA20".to_string()],
            ..Default::default()
        };
        let classifier = SecurityClassifier::new(&policy);
        assert_eq!(
            classifier.classify("N", "N", "TLS_PSK_WITH_CHACHA20_POLY1305_SHA256"),
            Classification::Weak
        );
        assert_eq!(
            classifier.classify("N", "N", "TLS_RSA_WITH_3DES_EDE_CBC_SHA"),
            Classification::Secure
        );
    }

    #[test]
    fn test_registry_status_parse() {
        assert_eq!(RegistryStatus::parse("Y"), RegistryStatus::Recommended);
        assert_eq!(RegistryStatus::parse("N"), RegistryStatus::NotRecommended);
        assert_eq!(RegistryStatus::parse("D"), RegistryStatus::Discouraged);
        assert_eq!(
            RegistryStatus::parse("y"),
            RegistryStatus::Other("y".to_string())
        );
    }
}
