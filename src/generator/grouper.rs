// Grouper - Partitions classified cipher suites into tier tables

use crate::ciphers::{CipherSuite, Classification};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Cipher suites partitioned by classification, each tier sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCipherSuites {
    pub recommended: Vec<CipherSuite>,
    pub secure: Vec<CipherSuite>,
    pub weak: Vec<CipherSuite>,
    pub insecure: Vec<CipherSuite>,
}

impl GroupedCipherSuites {
    /// Suites of one tier. `Unknown` is never stored and yields an empty
    /// slice.
    pub fn tier(&self, classification: Classification) -> &[CipherSuite] {
        match classification {
            Classification::Recommended => &self.recommended,
            Classification::Secure => &self.secure,
            Classification::Weak => &self.weak,
            Classification::Insecure => &self.insecure,
            Classification::Unknown => &[],
        }
    }

    /// Tiers in lookup precedence order
    pub fn iter(&self) -> impl Iterator<Item = (Classification, &[CipherSuite])> {
        Classification::PRECEDENCE
            .into_iter()
            .map(move |classification| (classification, self.tier(classification)))
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, suites)| suites.len()).sum()
    }

    pub fn counts(&self) -> Vec<(Classification, usize)> {
        self.iter()
            .map(|(classification, suites)| (classification, suites.len()))
            .collect()
    }

    fn tier_mut(&mut self, classification: Classification) -> Option<&mut Vec<CipherSuite>> {
        match classification {
            Classification::Recommended => Some(&mut self.recommended),
            Classification::Secure => Some(&mut self.secure),
            Classification::Weak => Some(&mut self.weak),
            Classification::Insecure => Some(&mut self.insecure),
            Classification::Unknown => None,
        }
    }
}

/// Organise cipher suites by their security classification.
///
/// Names stay unique across all tiers: a repeated name keeps its first
/// occurrence. Suites without a classification are dropped.
pub fn group_by_classification(
    suites: impl IntoIterator<Item = CipherSuite>,
) -> GroupedCipherSuites {
    let mut grouped = GroupedCipherSuites::default();
    let mut seen = HashSet::new();

    for suite in suites {
        if !seen.insert(suite.name.clone()) {
            warn!("Dropping duplicate cipher suite {}", suite.name);
            continue;
        }

        let classification = suite.classification;
        match grouped.tier_mut(classification) {
            Some(tier) => tier.push(suite),
            None => warn!("Dropping unclassified cipher suite {}", suite.name),
        }
    }

    for tier in [
        &mut grouped.recommended,
        &mut grouped.secure,
        &mut grouped.weak,
        &mut grouped.insecure,
    ] {
        tier.sort_by(|a, b| a.name.cmp(&b.name));
    }

    grouped
}
