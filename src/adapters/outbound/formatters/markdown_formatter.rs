use crate::application::read_models::{
    FindingRow, FindingsTableView, HistoryView, ReportView, NO_FINDINGS_MESSAGE,
    NO_HISTORY_MESSAGE,
};
use crate::ports::outbound::ReportFormatter;
use crate::scan_reporting::domain::{ScanSummary, Severity};
use crate::shared::Result;

/// Markdown table header for the summary
const SUMMARY_TABLE_HEADER: &str = "| Files Scanned | Total Issues | High | Medium | Low |\n";

/// Markdown table separator line for the summary
const SUMMARY_TABLE_SEPARATOR: &str = "|---------------|--------------|------|--------|-----|\n";

/// Markdown table header for findings
const FINDINGS_TABLE_HEADER: &str = "| Severity | Rule | Title | File | Line | Details |\n";

/// Markdown table separator line for findings
const FINDINGS_TABLE_SEPARATOR: &str = "|----------|------|-------|------|------|---------|\n";

/// Markdown table header for the history list
const HISTORY_TABLE_HEADER: &str = "| Scan ID | Source | Status | Issues | Files |\n";

/// Markdown table separator line for the history list
const HISTORY_TABLE_SEPARATOR: &str = "|---------|--------|--------|--------|-------|\n";

/// MarkdownFormatter adapter for rendering reports as Markdown documents
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Renders text as an inline code span, widening the fence when the
    /// text itself contains backticks
    fn code_span(text: &str) -> String {
        let escaped = Self::escape_markdown_table_cell(text.trim());
        if escaped.contains('`') {
            format!("`` {} ``", escaped)
        } else {
            format!("`{}`", escaped)
        }
    }

    fn severity_marker(severity: &Severity) -> &'static str {
        match severity {
            Severity::High => "🔴",
            Severity::Medium => "🟡",
            Severity::Low => "🟢",
            Severity::Unknown(_) => "⚪",
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ReportView) {
        output.push_str("# Scan Report\n\n");
        output.push_str(&format!("- **Scan ID:** {}\n", Self::code_span(&model.scan_id)));
        output.push_str(&format!(
            "- **Source:** {}\n",
            Self::escape_markdown_table_cell(&model.source)
        ));
        output.push_str(&format!("- **Status:** {}\n", model.status));
        output.push_str(&format!("- **Generated:** {}\n\n", model.generated_at));
    }

    fn render_summary(&self, output: &mut String, files_scanned: usize, summary: &ScanSummary) {
        output.push_str("## Summary\n\n");
        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n\n",
            files_scanned, summary.total, summary.high, summary.medium, summary.low
        ));
    }

    fn render_findings(&self, output: &mut String, findings: &FindingsTableView) {
        output.push_str("## Vulnerabilities\n\n");

        let counts: Vec<String> = findings
            .level_counts
            .iter()
            .map(|c| format!("{} ({})", c.level, c.count))
            .collect();
        output.push_str(&format!(
            "**Filter:** {} | {}\n\n",
            findings.filter,
            counts.join(" · ")
        ));

        if findings.is_empty() {
            output.push_str(&format!("*{}*\n", NO_FINDINGS_MESSAGE));
            return;
        }

        output.push_str(FINDINGS_TABLE_HEADER);
        output.push_str(FINDINGS_TABLE_SEPARATOR);
        for row in &findings.rows {
            self.render_finding_row(output, row);
        }
    }

    fn render_finding_row(&self, output: &mut String, row: &FindingRow) {
        let mut details = vec![Self::escape_markdown_table_cell(&row.description)];
        if let Some(snippet) = &row.snippet {
            details.push(Self::code_span(snippet));
        }
        if let Some(fix) = &row.recommendation {
            details.push(format!("**Fix:** {}", Self::escape_markdown_table_cell(fix)));
        }

        output.push_str(&format!(
            "| {} {} | {} | {} | {} | {} | {} |\n",
            Self::severity_marker(&row.severity),
            Self::escape_markdown_table_cell(row.severity.as_str()),
            Self::escape_markdown_table_cell(&row.rule_id),
            Self::escape_markdown_table_cell(&row.title),
            Self::code_span(&row.file),
            row.line,
            details.join("<br>"),
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_report(&self, model: &ReportView) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, model);
        self.render_summary(&mut output, model.files_scanned, &model.summary);
        self.render_findings(&mut output, &model.findings);
        Ok(output)
    }

    fn format_history(&self, model: &HistoryView) -> Result<String> {
        let mut output = String::from("# Scan History\n\n");

        if model.is_empty() {
            output.push_str(&format!("*{}*\n", NO_HISTORY_MESSAGE));
            return Ok(output);
        }

        output.push_str(HISTORY_TABLE_HEADER);
        output.push_str(HISTORY_TABLE_SEPARATOR);
        for entry in &model.entries {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::code_span(&entry.scan_id),
                Self::escape_markdown_table_cell(&entry.source),
                Self::escape_markdown_table_cell(&entry.status),
                entry.total_issues,
                entry.files_scanned
            ));
        }
        Ok(output)
    }
}
