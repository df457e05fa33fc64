//! Single-report view

use super::finding_view::FindingsTableView;
use crate::scan_reporting::domain::ScanSummary;
use serde::Serialize;

/// Everything needed to render one report
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    /// RFC 3339 timestamp of when this view was rendered
    pub generated_at: String,
    pub scan_id: String,
    pub status: String,
    /// Source label, `upload` when the service sent none
    pub source: String,
    pub files_scanned: usize,
    pub summary: ScanSummary,
    pub findings: FindingsTableView,
}
