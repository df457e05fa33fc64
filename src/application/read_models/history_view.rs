//! History list views

use serde::Serialize;

/// Shown instead of a list when the service holds no reports
pub const NO_HISTORY_MESSAGE: &str = "No previous scans.";

/// Previous scans, in the order the service returned them
#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub generated_at: String,
    pub entries: Vec<HistoryEntry>,
}

impl HistoryView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line of the history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub scan_id: String,
    pub source: String,
    pub status: String,
    pub total_issues: usize,
    pub files_scanned: usize,
}
