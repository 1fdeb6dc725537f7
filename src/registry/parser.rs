// Record parser - Converts registry rows into classified cipher suites

use super::RawRecord;
use super::classifier::SecurityClassifier;
use super::components::ComponentExtractor;
use super::policy::ClassificationPolicy;
use super::versions::VersionInferencer;
use crate::ciphers::CipherSuite;
use crate::error::SkipReason;

/// Minimum number of positional fields a registry row must expose
pub const MIN_RECORD_FIELDS: usize = 6;

/// Admits or rejects registry rows and builds the cipher suite for admitted
/// ones
pub struct RecordParser {
    suite_prefix: String,
    skip_markers: Vec<String>,
    range_marker: String,
    extractor: ComponentExtractor,
    inferencer: VersionInferencer,
    classifier: SecurityClassifier,
}

impl RecordParser {
    pub fn new() -> Self {
        Self::with_policy(&ClassificationPolicy::default())
    }

    pub fn with_policy(policy: &ClassificationPolicy) -> Self {
        Self {
            suite_prefix: policy.suite_prefix.clone(),
            skip_markers: policy.skip_markers.clone(),
            range_marker: policy.range_marker.clone(),
            extractor: ComponentExtractor::new(policy),
            inferencer: VersionInferencer::new(policy),
            classifier: SecurityClassifier::new(policy),
        }
    }

    /// Convert one registry row into a cipher suite.
    ///
    /// A rejected row is not a failure: the caller skips it and moves on.
    pub fn parse_record(&self, record: &RawRecord) -> Result<CipherSuite, SkipReason> {
        if record.len() < MIN_RECORD_FIELDS {
            return Err(SkipReason::TooFewFields {
                found: record.len(),
                required: MIN_RECORD_FIELDS,
            });
        }

        let value = record.value();
        let description = record.description();

        self.check_admissible(description, value)?;

        let classification =
            self.classifier
                .classify(record.recommended(), record.dtls_ok(), description);
        let components = self.extractor.extract(description);
        let supported_versions = self.inferencer.infer(description, value);

        Ok(CipherSuite {
            name: description.to_string(),
            protocol: components.protocol,
            encryption: components.encryption,
            hash: components.hash,
            classification,
            supported_versions,
        })
    }

    /// Skip reserved, unassigned and range rows, and anything that is not a
    /// TLS suite name
    fn check_admissible(&self, description: &str, value: &str) -> Result<(), SkipReason> {
        if self
            .skip_markers
            .iter()
            .any(|marker| description.contains(marker.as_str()))
        {
            return Err(SkipReason::Placeholder {
                description: description.to_string(),
            });
        }

        if value.contains(self.range_marker.as_str()) {
            return Err(SkipReason::CodepointRange {
                value: value.to_string(),
            });
        }

        if !description.starts_with(self.suite_prefix.as_str()) {
            return Err(SkipReason::MissingPrefix {
                description: description.to_string(),
                prefix: self.suite_prefix.clone(),
            });
        }

        Ok(())
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ciphers::Classification;

    fn record(fields: &[&str]) -> RawRecord {
        RawRecord::new(fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_parse_tls13_record() {
        let parser = RecordParser::new();
        let suite = parser
            .parse_record(&record(&[
                "0x13,0x04",
                "TLS_AES_128_CCM_SHA256",
                "Y",
                "Y",
                "[RFC8446]",
                "",
            ]))
            .unwrap();

        assert_eq!(suite.name, "TLS_AES_128_CCM_SHA256");
        assert_eq!(suite.protocol, "TLS");
        assert_eq!(suite.encryption, "AES 128 CCM");
        assert_eq!(suite.hash, "SHA256");
        assert_eq!(suite.classification, Classification::Recommended);
        assert_eq!(suite.supported_versions, vec!["TLS1.3"]);
    }

    #[test]
    fn test_parse_legacy_record() {
        let parser = RecordParser::new();
        let suite = parser
            .parse_record(&record(&[
                "0x00,0x86",
                "TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA",
                "Y",
                "N",
                "[RFC5932]",
                "",
            ]))
            .unwrap();

        assert_eq!(suite.encryption, "CAMELLIA 256 CBC");
        assert_eq!(suite.hash, "SHA");
        assert_eq!(suite.classification, Classification::Weak);
        assert_eq!(
            suite.supported_versions,
            vec!["TLS1.0", "TLS1.1", "TLS1.2", "TLS1.3"]
        );
    }

    #[test]
    fn test_rejects_short_rows() {
        let parser = RecordParser::new();
        let err = parser
            .parse_record(&record(&["0x13,0x01", "TLS_AES_128_GCM_SHA256", "Y", "Y", "[RFC8446]"]))
            .unwrap_err();
        assert_eq!(
            err,
            SkipReason::TooFewFields {
                found: 5,
                required: MIN_RECORD_FIELDS
            }
        );
    }

    #[test]
    fn test_rejects_placeholders() {
        let parser = RecordParser::new();
        for description in [
            "Reserved",
            "Unassigned",
            "Reserved to avoid conflicts with SSLv3",
            "Reserved for Private Use",
        ] {
            let err = parser
                .parse_record(&record(&["0x0A,0x0A", description, "Y", "N", "[RFC8701]", ""]))
                .unwrap_err();
            assert!(matches!(err, SkipReason::Placeholder { .. }), "{}", description);
        }
    }

    #[test]
    fn test_rejects_ranges() {
        let parser = RecordParser::new();
        let err = parser
            .parse_record(&record(&["0x00,0x5D-5F", "TLS_PRETEND_SHA", "", "", "", ""]))
            .unwrap_err();
        assert!(matches!(err, SkipReason::CodepointRange { .. }));
    }

    #[test]
    fn test_rejects_missing_prefix() {
        let parser = RecordParser::new();
        let err = parser
            .parse_record(&record(&["0x00,0xFF", "SSL_RSA_WITH_NULL_MD5", "N", "N", "", ""]))
            .unwrap_err();
        assert!(matches!(err, SkipReason::MissingPrefix { .. }));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let parser = RecordParser::new();
        let suite = parser
            .parse_record(&record(&[
                "0x00,0x18",
                "TLS_DH_anon_WITH_RC4_128_MD5",
                "N",
                "N",
                "[RFC5246][RFC6347]",
                "",
                "trailing",
                "columns",
            ]))
            .unwrap();
        assert_eq!(suite.classification, Classification::Insecure);
    }
}
