use crate::adapters::outbound::network::raw_report::parse_raw_report;
use crate::license_report::domain::Report;
use crate::ports::outbound::ReportRepository;
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// RawReportFileReader adapter for reading a saved raw report from disk
///
/// The file holds the JSON returned by IQ Server's raw report endpoint. The
/// application ID and stage are not checked against its content.
pub struct RawReportFileReader {
    path: PathBuf,
}

impl RawReportFileReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Safely read the report with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read report metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read report: {}", e))
    }

    fn read_report(&self) -> Result<Report> {
        let content =
            Self::safe_read_file(&self.path).map_err(|e| ReportError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        parse_raw_report(&content).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse raw report {}: {}",
                self.path.display(),
                e
            )
        })
    }
}

#[async_trait]
impl ReportRepository for RawReportFileReader {
    async fn fetch_report(&self, app_id: &str, stage: &str) -> Result<Report> {
        tracing::debug!(path = %self.path.display(), app_id, stage, "reading raw report from file");

        self.read_report().map_err(|e| {
            ReportError::Backend {
                app_id: app_id.to_string(),
                stage: stage.to_string(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RAW_REPORT: &str = r#"{
        "components": [
            {
                "packageUrl": "pkg:maven/commons-io/commons-io@2.6",
                "licenseData": {
                    "declaredLicenses": [ { "licenseId": "Apache-2.0", "licenseName": "Apache-2.0" } ],
                    "observedLicenses": [ { "licenseId": "Not-Supported", "licenseName": "Not Supported" } ]
                }
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_read_report_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("raw.json");
        fs::write(&path, RAW_REPORT).unwrap();

        let reader = RawReportFileReader::new(path);
        let report = reader.fetch_report("app1", "build").await.unwrap();

        assert_eq!(report.components().len(), 1);
        assert_eq!(
            report.components()[0].display_name(),
            Some("pkg:maven/commons-io/commons-io@2.6")
        );
    }

    #[tokio::test]
    async fn test_read_report_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let reader = RawReportFileReader::new(temp_dir.path().join("missing.json"));

        let error = reader.fetch_report("app1", "build").await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ReportError>(),
            Some(ReportError::Backend { .. })
        ));
        assert!(format!("{}", error).contains("missing.json"));
    }

    #[tokio::test]
    async fn test_read_report_directory() {
        let temp_dir = TempDir::new().unwrap();
        let reader = RawReportFileReader::new(temp_dir.path().to_path_buf());

        let error = reader.fetch_report("app1", "build").await.unwrap_err();
        assert!(format!("{}", error).contains("is not a regular file"));
    }

    #[tokio::test]
    async fn test_read_report_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("raw.json");
        fs::write(&path, "{ not json").unwrap();

        let reader = RawReportFileReader::new(path);
        let error = reader.fetch_report("app1", "build").await.unwrap_err();
        assert!(format!("{}", error).contains("Failed to parse raw report"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_read_report_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("raw.json");
        fs::write(&target, RAW_REPORT).unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let reader = RawReportFileReader::new(link);
        let error = reader.fetch_report("app1", "build").await.unwrap_err();
        assert!(format!("{}", error).contains("symbolic link"));
    }
}
