use crate::scan_reporting::domain::{ScanReport, ServiceHealth};
use crate::shared::Result;
use async_trait::async_trait;

/// A file ready to be sent to the scanning service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Filename reported in the multipart part
    pub name: String,
    pub content: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// ScanService port for the remote scanning API
///
/// Every call is a single request: no retries, no caching, no cancellation.
/// A non-success response surfaces as [`crate::shared::error::ScanError::ServerError`]
/// carrying the server's message.
///
/// Implementations must be `Send + Sync` so use cases can hold them across
/// `.await` points.
#[async_trait]
pub trait ScanService: Send + Sync {
    /// Uploads source files and returns the resulting report
    async fn submit_files(&self, files: Vec<UploadFile>) -> Result<ScanReport>;

    /// Asks the service to fetch and scan a public repository
    async fn submit_repository(&self, repo_url: &str) -> Result<ScanReport>;

    /// Lists every report the service currently holds
    async fn list_reports(&self) -> Result<Vec<ScanReport>>;

    /// Fetches one report by scan id
    async fn fetch_report(&self, scan_id: &str) -> Result<ScanReport>;

    /// Queries the health endpoint
    async fn check_health(&self) -> Result<ServiceHealth>;
}
