// Registry module - IANA TLS cipher suite registry ingestion
//
// Rows of the registry feed flow through `RecordParser`, which admits or
// rejects each row and runs component extraction, version inference and
// security classification on the admitted ones.

use crate::Result;
use crate::ciphers::CipherSuite;
use crate::error::CipherSuiteError;
use async_trait::async_trait;
use std::io::Read;
use tracing::debug;

pub mod classifier;
pub mod components;
pub mod fetcher;
pub mod parser;
pub mod policy;
pub mod versions;

pub use classifier::{RegistryStatus, SecurityClassifier};
pub use components::{ComponentExtractor, SuiteComponents};
pub use fetcher::{
    DEFAULT_TIMEOUT, HttpRecordSource, IANA_URL, REGISTRY_SNAPSHOT, SnapshotRecordSource,
    StaticRecordSource,
};
pub use parser::{MIN_RECORD_FIELDS, RecordParser};
pub use policy::{ClassificationPolicy, VersionRule, VersionTrigger};
pub use versions::VersionInferencer;

/// One positional row of the registry feed:
/// value, description, DTLS-OK, recommended, then unused trailing fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<String>,
}

impl RawRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    /// Registry codepoint, e.g. `0x13,0x01`
    pub fn value(&self) -> &str {
        self.field(0)
    }

    pub fn description(&self) -> &str {
        self.field(1)
    }

    pub fn dtls_ok(&self) -> &str {
        self.field(2)
    }

    pub fn recommended(&self) -> &str {
        self.field(3)
    }
}

impl From<csv::StringRecord> for RawRecord {
    fn from(record: csv::StringRecord) -> Self {
        Self::new(record.iter().map(str::to_string).collect())
    }
}

/// Decode the registry CSV, skipping the header row.
///
/// Rows may have any width; shape validation is left to `RecordParser`.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    if reader.headers()?.is_empty() {
        return Err(CipherSuiteError::EmptyRegistry);
    }

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(RawRecord::from(record?));
    }

    Ok(records)
}

/// Source of raw registry rows
///
/// The generator only depends on this capability, so tests and offline runs
/// can supply fixed rows instead of reaching the network.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>>;

    /// Human-readable origin, recorded in generated artifacts
    fn location(&self) -> String;
}

/// Outcome of running every row through the parser
#[derive(Debug, Default)]
pub struct ParsedRegistry {
    pub suites: Vec<CipherSuite>,
    pub skipped: usize,
}

/// Parse every row, keeping admitted suites in registry order
pub fn parse_records(records: &[RawRecord], parser: &RecordParser) -> ParsedRegistry {
    let mut parsed = ParsedRegistry::default();

    for record in records {
        match parser.parse_record(record) {
            Ok(suite) => parsed.suites.push(suite),
            Err(reason) => {
                debug!("Skipping registry row {:?}: {}", record.value(), reason);
                parsed.skipped += 1;
            }
        }
    }

    parsed
}

/// Fetch from a source and parse the result
pub async fn collect_cipher_suites(
    source: &dyn RecordSource,
    parser: &RecordParser,
) -> Result<ParsedRegistry> {
    let records = source.fetch_records().await?;
    Ok(parse_records(&records, parser))
}
