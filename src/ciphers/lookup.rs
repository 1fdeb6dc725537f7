// Cipher suite lookup - Immutable tier tables and the runtime query API

use super::{CipherSuite, Classification};
use crate::Result;
use crate::generator::grouper::{GroupedCipherSuites, group_by_classification};
use crate::registry::{
    ClassificationPolicy, REGISTRY_SNAPSHOT, RawRecord, RecordParser, parse_records, read_records,
};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::io::Read;

lazy_static! {
    /// Tier tables built from the embedded registry snapshot on first use
    pub static ref CIPHER_SUITE_TABLES: CipherSuiteTables = CipherSuiteTables::from_snapshot()
        .expect("Failed to build cipher suite tables from registry snapshot");
}

/// Four name-keyed tables, one per classification tier
///
/// Tables are filled at construction and only ever read afterwards, so a
/// shared reference can be queried from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct CipherSuiteTables {
    recommended: HashMap<String, CipherSuite>,
    secure: HashMap<String, CipherSuite>,
    weak: HashMap<String, CipherSuite>,
    insecure: HashMap<String, CipherSuite>,
}

fn index(suites: Vec<CipherSuite>) -> HashMap<String, CipherSuite> {
    suites
        .into_iter()
        .map(|suite| (suite.name.clone(), suite))
        .collect()
}

impl CipherSuiteTables {
    pub fn from_grouped(grouped: GroupedCipherSuites) -> Self {
        Self::from_tiers(
            grouped.recommended,
            grouped.secure,
            grouped.weak,
            grouped.insecure,
        )
    }

    /// Build directly from per-tier lists. Unlike `from_grouped`, names are
    /// not de-duplicated across tiers; lookups resolve a name present in
    /// several tiers by tier precedence.
    pub fn from_tiers(
        recommended: Vec<CipherSuite>,
        secure: Vec<CipherSuite>,
        weak: Vec<CipherSuite>,
        insecure: Vec<CipherSuite>,
    ) -> Self {
        Self {
            recommended: index(recommended),
            secure: index(secure),
            weak: index(weak),
            insecure: index(insecure),
        }
    }

    pub fn from_records(records: &[RawRecord], policy: &ClassificationPolicy) -> Self {
        let parser = RecordParser::with_policy(policy);
        let parsed = parse_records(records, &parser);
        Self::from_grouped(group_by_classification(parsed.suites))
    }

    /// Build from registry CSV text including its header row
    pub fn from_csv<R: Read>(reader: R, policy: &ClassificationPolicy) -> Result<Self> {
        let records = read_records(reader)?;
        Ok(Self::from_records(&records, policy))
    }

    pub fn from_snapshot() -> Result<Self> {
        Self::from_csv(REGISTRY_SNAPSHOT.as_bytes(), &ClassificationPolicy::default())
    }

    fn table(&self, classification: Classification) -> Option<&HashMap<String, CipherSuite>> {
        match classification {
            Classification::Recommended => Some(&self.recommended),
            Classification::Secure => Some(&self.secure),
            Classification::Weak => Some(&self.weak),
            Classification::Insecure => Some(&self.insecure),
            Classification::Unknown => None,
        }
    }

    /// Search Recommended, Secure, Weak then Insecure and return the first hit
    pub fn find(&self, name: &str) -> Option<&CipherSuite> {
        Classification::PRECEDENCE
            .iter()
            .filter_map(|classification| self.table(*classification))
            .find_map(|table| table.get(name))
    }

    /// Same search as `find`. A miss yields an entity with `Unknown`
    /// classification and no attributes, paired with `false`.
    pub fn get_cipher_suite(&self, name: &str) -> (CipherSuite, bool) {
        match self.find(name) {
            Some(suite) => (suite.clone(), true),
            None => (CipherSuite::default(), false),
        }
    }

    /// Classification of a suite, `Unknown` when it is not registered
    pub fn get_classification(&self, name: &str) -> Classification {
        self.find(name)
            .map(|suite| suite.classification)
            .unwrap_or(Classification::Unknown)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Suites of one tier sorted by name
    pub fn tier(&self, classification: Classification) -> Vec<&CipherSuite> {
        let mut suites: Vec<&CipherSuite> = self
            .table(classification)
            .map(|table| table.values().collect())
            .unwrap_or_default();
        suites.sort_by(|a, b| a.name.cmp(&b.name));
        suites
    }

    /// Tiers in lookup precedence order
    pub fn iter(&self) -> impl Iterator<Item = (Classification, Vec<&CipherSuite>)> {
        Classification::PRECEDENCE
            .into_iter()
            .map(move |classification| (classification, self.tier(classification)))
    }

    pub fn len(&self) -> usize {
        self.recommended.len() + self.secure.len() + self.weak.len() + self.insecure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Look up a registered cipher suite by name in the process-wide tables
pub fn find_cipher_suite(name: &str) -> Option<&'static CipherSuite> {
    CIPHER_SUITE_TABLES.find(name)
}

/// Retrieve a cipher suite by name; `false` and an `Unknown` entity on miss
pub fn get_cipher_suite(name: &str) -> (CipherSuite, bool) {
    CIPHER_SUITE_TABLES.get_cipher_suite(name)
}

/// Security classification of a cipher suite, `Unknown` if not registered
pub fn get_classification(name: &str) -> Classification {
    CIPHER_SUITE_TABLES.get_classification(name)
}
