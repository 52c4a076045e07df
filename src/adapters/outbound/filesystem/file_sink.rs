use crate::license_report::domain::License;
use crate::ports::outbound::{OutputSink, ReportRenderer};
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// FileSink adapter for writing the rendered report to a file
///
/// An existing file is overwritten. The file is opened once, and closed
/// when the writer goes out of scope, whether rendering or writing
/// succeeded or not.
pub struct FileSink {
    output_path: PathBuf,
    renderer: Arc<dyn ReportRenderer>,
}

impl FileSink {
    pub fn new(output_path: PathBuf, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self {
            output_path,
            renderer,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn write_error(&self, details: impl ToString) -> ReportError {
        ReportError::FileWriteError {
            path: self.output_path.clone(),
            details: details.to_string(),
        }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(self
                    .write_error(format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ))
                    .into());
            }
        }
        Ok(())
    }

    /// Rejects an existing output path that is a symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(&self.output_path) {
            if metadata.is_symlink() {
                return Err(self
                    .write_error("Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.")
                    .into());
            }
            if metadata.is_dir() {
                return Err(self.write_error("Output path is a directory").into());
            }
        }
        Ok(())
    }

    fn write(&self, app_id: &str, licenses: &[License]) -> Result<()> {
        let file = File::create(&self.output_path).map_err(|e| self.write_error(e))?;
        let mut writer = BufWriter::new(file);

        let html = self.renderer.render(app_id, licenses)?;

        writer
            .write_all(html.as_bytes())
            .map_err(|e| self.write_error(e))?;
        writer.flush().map_err(|e| self.write_error(e))?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl OutputSink for FileSink {
    async fn deliver(&self, app_id: &str, licenses: &[License]) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        self.write(app_id, licenses)?;

        tracing::debug!(
            path = %self.output_path.display(),
            licenses = licenses.len(),
            "report written"
        );
        Ok(())
    }
}
