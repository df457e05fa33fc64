//! Findings table views

use crate::scan_reporting::domain::{Severity, SeverityFilter};
use serde::Serialize;

/// Shown in place of a table body when no finding passes the filter
pub const NO_FINDINGS_MESSAGE: &str = "No vulnerabilities found.";

/// Findings table after filtering and ordering
#[derive(Debug, Clone, Serialize)]
pub struct FindingsTableView {
    /// Active severity filter
    pub filter: SeverityFilter,
    /// Count per known level over the unfiltered findings
    pub level_counts: Vec<LevelCount>,
    /// Rows in display order
    pub rows: Vec<FindingRow>,
}

impl FindingsTableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when any displayed row is at least as severe as `threshold`
    pub fn has_rows_meeting(&self, threshold: &Severity) -> bool {
        self.rows.iter().any(|row| row.severity.meets(threshold))
    }
}

/// Findings count for one severity level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    pub level: Severity,
    pub count: usize,
}

/// One row of the findings table
#[derive(Debug, Clone, Serialize)]
pub struct FindingRow {
    pub severity: Severity,
    pub rule_id: String,
    pub title: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}
