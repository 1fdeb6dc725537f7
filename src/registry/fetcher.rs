// Registry fetchers - Record sources for the IANA cipher suite registry

use super::{RawRecord, RecordSource, read_records};
use crate::Result;
use crate::error::CipherSuiteError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

/// Location of the IANA TLS Cipher Suites registry
pub const IANA_URL: &str = "https://www.iana.org/assignments/tls-parameters/tls-parameters-4.csv";

/// Upper bound on the single registry fetch
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Registry snapshot compiled into the crate
pub const REGISTRY_SNAPSHOT: &str = include_str!("../../data/tls-parameters-4.csv");

/// Retrieves the registry over HTTP
///
/// One attempt is made; any transport failure or non-200 answer aborts.
pub struct HttpRecordSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRecordSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ciphersuites/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        info!("Fetching cipher suite registry from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(CipherSuiteError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from registry", body.len());

        read_records(body.as_ref())
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Serves the snapshot embedded at build time
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotRecordSource;

#[async_trait]
impl RecordSource for SnapshotRecordSource {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        read_records(REGISTRY_SNAPSHOT.as_bytes())
    }

    fn location(&self) -> String {
        IANA_URL.to_string()
    }
}

/// Fixed in-memory rows
#[derive(Debug, Clone, Default)]
pub struct StaticRecordSource {
    records: Vec<RawRecord>,
}

impl StaticRecordSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Build from CSV text including its header row
    pub fn from_csv(data: &str) -> Result<Self> {
        Ok(Self::new(read_records(data.as_bytes())?))
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }

    fn location(&self) -> String {
        "static records".to_string()
    }
}
