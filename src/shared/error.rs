use reqwest::StatusCode;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - nothing at or above the `--fail-on` threshold was shown
    Success = 0,
    /// Findings at or above the configured threshold were reported
    FindingsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (server error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FindingsDetected => write!(f, "Findings Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for talking to the scanning service.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The service answered with a non-success status. `message` is the
    /// response body (or its `detail` field) as sent by the server.
    #[error("{message}")]
    ServerError { status: StatusCode, message: String },

    #[error("Could not reach the scanning service at {url}\nDetails: {details}\n\n💡 Hint: Check that the service is running and that --server points to it")]
    Connection { url: String, details: String },

    #[error("Invalid server URL: {url}\nReason: {reason}\n\n💡 Hint: Use an absolute URL such as http://localhost:8000")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Invalid repository URL: {url}\nReason: {reason}\n\n💡 Hint: Use a URL of the form https://github.com/owner/repo")]
    InvalidRepositoryUrl { url: String, reason: String },

    #[error("No files to upload\n\n💡 Hint: {hint}")]
    NoFilesToUpload { hint: String },

    #[error("Unexpected response from {endpoint}\nDetails: {details}")]
    InvalidResponse { endpoint: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Two files would be uploaded as '{name}': {first} and {second}\n\n💡 Hint: Upload the files from a common parent directory so their names stay distinct")]
    DuplicateUploadName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },
}
