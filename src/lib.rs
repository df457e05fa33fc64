//! sentinel-scan - command-line client for the SentinelScan vulnerability scanner
//!
//! This library uploads source files or submits repository URLs to a
//! SentinelScan service, and renders the returned reports as text, Markdown
//! or JSON. It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_reporting`): Reports, findings and severity ordering
//! - **Application Layer** (`application`): Use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP client, filesystem, console and formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sentinel_scan::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let scan_service = HttpScanClient::new("http://localhost:8000", Duration::from_secs(60))?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ScanRepositoryUseCase::new(scan_service, progress_reporter);
//!
//! // Execute
//! let report = use_case
//!     .execute(RepositoryScanRequest::new("https://github.com/owner/repo"))
//!     .await?;
//!
//! // Format output
//! let view = ReportReadModelBuilder::build_report(&report, SeverityFilter::High);
//! let output = MarkdownFormatter::new().format_report(&view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod scan_reporting;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemSourceReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::HttpScanClient;
    pub use crate::application::dto::{OutputFormat, RepositoryScanRequest, UploadRequest};
    pub use crate::application::read_models::{HistoryView, ReportReadModelBuilder, ReportView};
    pub use crate::application::use_cases::{
        BrowseReportsUseCase, ScanFilesUseCase, ScanRepositoryUseCase,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportFormatter, ScanService, SourceFileReader,
        UploadFile,
    };
    pub use crate::scan_reporting::domain::{
        ScanReport, ScanSummary, ServiceHealth, Severity, SeverityFilter, SourceFile,
        Vulnerability,
    };
    pub use crate::scan_reporting::services::FindingsTable;
    pub use crate::shared::Result;
}
