pub mod scan_report;
pub mod severity;
pub mod source_file;
pub mod vulnerability;

pub use scan_report::{ScanReport, ScanSummary, ServiceHealth};
pub use severity::{Severity, SeverityFilter};
pub use source_file::SourceFile;
pub use vulnerability::Vulnerability;
