use crate::shared::error::ReportError;
use crate::shared::Result;
use std::path::PathBuf;

/// Default address the HTTP server listens on (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Output mode for the rendered report
///
/// Exactly one mode is used per run: the page is either written once to a
/// file or served over HTTP until the process is terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Write the page to the given path
    File(PathBuf),
    /// Serve the page on `host:port`
    Serve { host: String, port: u16 },
}

impl OutputMode {
    /// Selects the output mode from the `file` and `serve` options
    ///
    /// # Errors
    /// Returns a configuration error when neither or both options are set
    pub fn select(
        file: Option<PathBuf>,
        serve: Option<u16>,
        host: Option<String>,
    ) -> Result<Self> {
        match (file, serve) {
            (Some(path), None) => {
                if path.as_os_str().is_empty() {
                    return Err(ReportError::configuration(
                        "The 'file' path must not be empty",
                        "Pass --file <PATH> with the HTML file to create",
                    )
                    .into());
                }
                Ok(OutputMode::File(path))
            }
            (None, Some(port)) => Ok(OutputMode::Serve {
                host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            }),
            (None, None) => Err(ReportError::configuration(
                "Missing required argument. One of 'file' or 'serve' must be used",
                "Pass --file <PATH> to save the report, or --serve <PORT> to serve it. See --help",
            )
            .into()),
            (Some(_), Some(_)) => Err(ReportError::configuration(
                "Only one of 'file' or 'serve' can be used",
                "Remove either --file or --serve",
            )
            .into()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            OutputMode::File(path) => format!("file {}", path.display()),
            OutputMode::Serve { host, port } => format!("http://{}:{}/", host, port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_configuration_error(result: Result<OutputMode>) -> bool {
        matches!(
            result.unwrap_err().downcast_ref::<ReportError>(),
            Some(ReportError::Configuration { .. })
        )
    }

    #[test]
    fn test_select_file() {
        let mode = OutputMode::select(Some(PathBuf::from("licenses.html")), None, None).unwrap();
        assert_eq!(mode, OutputMode::File(PathBuf::from("licenses.html")));
    }

    #[test]
    fn test_select_serve_default_host() {
        let mode = OutputMode::select(None, Some(8080), None).unwrap();
        assert_eq!(
            mode,
            OutputMode::Serve {
                host: "0.0.0.0".to_string(),
                port: 8080
            }
        );
    }

    #[test]
    fn test_select_serve_custom_host() {
        let mode = OutputMode::select(None, Some(8080), Some("127.0.0.1".to_string())).unwrap();
        assert_eq!(mode.describe(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_select_neither() {
        let result = OutputMode::select(None, None, None);
        assert!(is_configuration_error(result));
    }

    #[test]
    fn test_select_neither_message() {
        let error = OutputMode::select(None, None, None).unwrap_err();
        let message = format!("{}", error);
        assert!(message.contains("One of 'file' or 'serve' must be used"));
    }

    #[test]
    fn test_select_both() {
        let result = OutputMode::select(Some(PathBuf::from("licenses.html")), Some(8080), None);
        assert!(is_configuration_error(result));
    }

    #[test]
    fn test_select_empty_file_path() {
        let result = OutputMode::select(Some(PathBuf::new()), None, None);
        assert!(is_configuration_error(result));
    }

    #[test]
    fn test_describe_file() {
        let mode = OutputMode::File(PathBuf::from("out/licenses.html"));
        assert_eq!(mode.describe(), "file out/licenses.html");
    }
}
