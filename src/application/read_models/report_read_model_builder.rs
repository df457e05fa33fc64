//! Builder for constructing report and history views from domain objects

use super::finding_view::{FindingRow, FindingsTableView, LevelCount};
use super::history_view::{HistoryEntry, HistoryView};
use super::report_view::ReportView;
use crate::scan_reporting::domain::{ScanReport, SeverityFilter, Vulnerability};
use crate::scan_reporting::services::FindingsTable;
use chrono::Utc;

/// Builds read models from reports returned by the scanning service
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    /// Builds the view of a single report with `filter` applied to its findings
    pub fn build_report(report: &ScanReport, filter: SeverityFilter) -> ReportView {
        ReportView {
            generated_at: Self::timestamp(),
            scan_id: report.scan_id.clone(),
            status: report.status.clone(),
            source: report.source_label().to_string(),
            files_scanned: report.files_scanned,
            summary: report.summary(),
            findings: Self::build_findings(&report.vulnerabilities, filter),
        }
    }

    /// Builds the history list
    pub fn build_history(reports: &[ScanReport]) -> HistoryView {
        let entries = reports
            .iter()
            .map(|report| HistoryEntry {
                scan_id: report.scan_id.clone(),
                source: report.source_label().to_string(),
                status: report.status.clone(),
                total_issues: report.summary().total,
                files_scanned: report.files_scanned,
            })
            .collect();

        HistoryView {
            generated_at: Self::timestamp(),
            entries,
        }
    }

    fn build_findings(vulnerabilities: &[Vulnerability], filter: SeverityFilter) -> FindingsTableView {
        let level_counts = FindingsTable::level_counts(vulnerabilities)
            .into_iter()
            .map(|(level, count)| LevelCount { level, count })
            .collect();

        let rows = FindingsTable::arrange(vulnerabilities, filter)
            .into_iter()
            .map(|v| FindingRow {
                severity: v.severity.clone(),
                rule_id: v.rule_id.clone(),
                title: v.title.clone(),
                file: v.file.clone(),
                line: v.line,
                column: v.column,
                description: v.description.clone(),
                snippet: v.snippet().map(str::to_string),
                recommendation: v.recommendation().map(str::to_string),
            })
            .collect();

        FindingsTableView {
            filter,
            level_counts,
            rows,
        }
    }

    fn timestamp() -> String {
        Utc::now().to_rfc3339()
    }
}
