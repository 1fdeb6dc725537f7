// Generator module - Turns registry rows into an emitted tier-table artifact
//
// fetch -> parse/classify -> group -> render -> format -> write
//
// Every step before the write is fallible and runs in memory, so a failure
// leaves no artifact behind.

use crate::Result;
use crate::error::CipherSuiteError;
use crate::registry::{RecordParser, RecordSource, collect_cipher_suites};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

pub mod emitter;
pub mod formatter;
pub mod grouper;

pub use emitter::{
    ArtifactFormat, ArtifactMetadata, Emitter, JsonEmitter, RustEmitter, emitter_for,
    validate_package,
};
pub use formatter::{Formatter, Passthrough, Rustfmt};
pub use grouper::{GroupedCipherSuites, group_by_classification};

/// Result of a generation run
#[derive(Debug)]
pub struct GenerationReport {
    pub grouped: GroupedCipherSuites,
    /// Registry rows that were not admitted
    pub skipped: usize,
    pub output: Option<PathBuf>,
    pub bytes_written: usize,
}

/// Drives one generation run over a record source
pub struct Generator {
    source: Box<dyn RecordSource>,
    parser: RecordParser,
    emitter: Box<dyn Emitter>,
    formatter: Box<dyn Formatter>,
}

impl Generator {
    pub fn new(
        source: Box<dyn RecordSource>,
        parser: RecordParser,
        emitter: Box<dyn Emitter>,
        formatter: Box<dyn Formatter>,
    ) -> Self {
        Self {
            source,
            parser,
            emitter,
            formatter,
        }
    }

    /// Fetch, classify and group without rendering
    pub async fn classify(&self) -> Result<(GroupedCipherSuites, usize)> {
        let parsed = collect_cipher_suites(self.source.as_ref(), &self.parser).await?;
        info!(
            "Parsed {} cipher suites ({} rows skipped)",
            parsed.suites.len(),
            parsed.skipped
        );

        Ok((group_by_classification(parsed.suites), parsed.skipped))
    }

    /// Produce the final, formatted artifact text in memory
    pub async fn render(&self) -> Result<(String, GenerationReport)> {
        let (grouped, skipped) = self.classify().await?;

        info!("Rendering artifact");
        let code = self.emitter.render(&grouped)?;

        info!("Formatting artifact");
        let code = self.formatter.format(code)?;

        let report = GenerationReport {
            grouped,
            skipped,
            output: None,
            bytes_written: 0,
        };
        Ok((code, report))
    }

    /// Render and write the artifact to `output`
    pub async fn run(&self, output: &Path) -> Result<GenerationReport> {
        let (code, mut report) = self.render().await?;

        write_artifact(output, &code)?;
        info!("Wrote {} bytes to {}", code.len(), output.display());

        report.output = Some(output.to_path_buf());
        report.bytes_written = code.len();
        Ok(report)
    }
}

/// Write an artifact through a temporary file in the target directory so
/// readers never see a partially written one
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if path.file_name().is_none() {
        return Err(CipherSuiteError::config(format!(
            "output path {} has no file name",
            path.display()
        )));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on any error path removes it
    let tmp = NamedTempFile::new_in(dir).map_err(|e| CipherSuiteError::file_system(dir, e))?;
    tmp.as_file()
        .write_all(contents.as_bytes())
        .map_err(|e| CipherSuiteError::file_system(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| CipherSuiteError::file_system(path, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StaticRecordSource;
    use tempfile::TempDir;

    const FEED: &str = "Value,Description,DTLS,Recommended,Reference,Comment\n\
\"0x13,0x01\",TLS_AES_128_GCM_SHA256,Y,Y,[RFC8446],\n\
\"0x00,0x0A\",TLS_RSA_WITH_3DES_EDE_CBC_SHA,Y,N,[RFC5246],\n\
\"0x00,0x47-4F\",Reserved to avoid conflicts with deployed implementations,,,[Pasi_Eronen],\n";

    struct FailingFormatter;

    impl Formatter for FailingFormatter {
        fn format(&self, _code: String) -> Result<String> {
            Err(CipherSuiteError::emission("formatter rejected input"))
        }
    }

    fn generator(formatter: Box<dyn Formatter>) -> Generator {
        let metadata = ArtifactMetadata::new("tables", "static records", "test");
        Generator::new(
            Box::new(StaticRecordSource::from_csv(FEED).unwrap()),
            RecordParser::new(),
            Box::new(RustEmitter::new(metadata).unwrap()),
            formatter,
        )
    }

    #[tokio::test]
    async fn test_run_writes_artifact() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("tables.rs");

        let report = generator(Box::new(Passthrough)).run(&output).await.unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(report.grouped.recommended.len(), 1);
        assert_eq!(report.grouped.weak.len(), 1);
        assert_eq!(report.output.as_deref(), Some(output.as_path()));

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.len(), report.bytes_written);
        assert!(written.contains("TLS_RSA_WITH_3DES_EDE_CBC_SHA"));
    }

    #[tokio::test]
    async fn test_format_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("tables.rs");

        let err = generator(Box::new(FailingFormatter))
            .run(&output)
            .await
            .unwrap_err();

        assert!(matches!(err, CipherSuiteError::Emission { .. }));
        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_artifact_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("tables.json");
        std::fs::write(&output, "old").unwrap();

        write_artifact(&output, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_artifact_ignores_stale_sibling_entries() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("tables.rs");
        std::fs::create_dir(dir.path().join(".tables.rs.tmp")).unwrap();
        std::fs::write(dir.path().join(".tables.rs.tmp.old"), "stale").unwrap();

        write_artifact(&output, "pub mod tables {}").unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "pub mod tables {}"
        );
        assert!(dir.path().join(".tables.rs.tmp").is_dir());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_write_artifact_failed_persist_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("tables.rs");
        std::fs::create_dir(&output).unwrap();
        std::fs::write(output.join("occupied"), "x").unwrap();

        let err = write_artifact(&output, "new").unwrap_err();
        assert!(matches!(err, CipherSuiteError::FileSystem { .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_artifact_missing_directory() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("missing").join("tables.rs");

        let err = write_artifact(&output, "x").unwrap_err();
        assert!(matches!(err, CipherSuiteError::FileSystem { .. }));
        assert!(!output.exists());
    }
}
