use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish an operator mistake from a
/// failure while talking to IQ Server or writing the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report written, or server shut down cleanly
    Success = 0,
    /// Invalid command-line arguments or configuration
    InvalidArguments = 2,
    /// Backend, I/O, render or bind failure
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned from the pipeline.
    ///
    /// Configuration problems map to [`ExitCode::InvalidArguments`]; anything
    /// else is an application error.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ReportError>() {
            Some(ReportError::Configuration { .. }) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    Configuration { message: String, hint: String },

    #[error("Failed to fetch the '{stage}' report for application '{app_id}'\nDetails: {details}\n\n💡 Hint: Check the IQ Server URL, the credentials and that the application has been evaluated at this stage")]
    Backend {
        app_id: String,
        stage: String,
        details: String,
    },

    #[error("Failed to render the license report\nDetails: {details}")]
    Render { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to listen on {address}\nDetails: {details}\n\n💡 Hint: Choose a free port or stop the process that is using it")]
    ServerBind { address: String, details: String },
}

impl ReportError {
    pub fn configuration(message: impl Into<String>, hint: impl Into<String>) -> Self {
        ReportError::Configuration {
            message: message.into(),
            hint: hint.into(),
        }
    }
}
