use crate::application::read_models::{
    FindingsTableView, HistoryView, ReportView, NO_FINDINGS_MESSAGE, NO_HISTORY_MESSAGE,
};
use crate::ports::outbound::ReportFormatter;
use crate::scan_reporting::domain::{ScanSummary, Severity, SeverityFilter};
use crate::shared::Result;
use owo_colors::OwoColorize;

const INDENT: &str = "  ";
const DETAIL_INDENT: &str = "      ";
const COLUMN_GAP: &str = "  ";
const FINDING_COLUMNS: [&str; 5] = ["SEVERITY", "RULE", "TITLE", "FILE", "LINE"];

/// TextFormatter adapter for terminal output
///
/// Lays the findings table out in aligned columns. Severity labels are
/// colored when `colored` is set; the caller decides based on the output
/// target.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colors an already padded severity cell so alignment is unaffected
    fn paint_severity(&self, severity: &Severity, cell: &str) -> String {
        if !self.colored {
            return cell.to_string();
        }
        match severity {
            Severity::High => cell.red().bold().to_string(),
            Severity::Medium => cell.yellow().bold().to_string(),
            Severity::Low => cell.cyan().to_string(),
            Severity::Unknown(_) => cell.dimmed().to_string(),
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.colored {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn pad(text: &str, width: usize) -> String {
        format!("{:<width$}", text, width = width)
    }

    /// Flattens line breaks so a cell stays on one line
    fn single_line(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn render_summary(&self, output: &mut String, files_scanned: usize, summary: &ScanSummary) {
        let entries = [
            ("Files Scanned", files_scanned),
            ("Total Issues", summary.total),
            ("High", summary.high),
            ("Medium", summary.medium),
            ("Low", summary.low),
        ];
        for (label, value) in entries {
            output.push_str(&format!("{}{:<15} {}\n", INDENT, label, value));
        }
    }

    fn render_filter_line(&self, output: &mut String, findings: &FindingsTableView) {
        let mut options = vec![if findings.filter == SeverityFilter::All {
            "[All]".to_string()
        } else {
            "All".to_string()
        }];
        for count in &findings.level_counts {
            let label = format!("{} ({})", count.level, count.count);
            let active = findings.filter.to_string() == count.level.as_str();
            options.push(if active { format!("[{}]", label) } else { label });
        }
        output.push_str(&format!("{}Filter: {}\n\n", INDENT, options.join("  ")));
    }

    fn render_findings(&self, output: &mut String, findings: &FindingsTableView) {
        output.push_str(&self.heading("Vulnerabilities"));
        output.push('\n');
        self.render_filter_line(output, findings);

        if findings.is_empty() {
            output.push_str(&format!("{}{}\n", INDENT, NO_FINDINGS_MESSAGE));
            return;
        }

        let cells: Vec<[String; 5]> = findings
            .rows
            .iter()
            .map(|row| {
                [
                    row.severity.to_string(),
                    Self::single_line(&row.rule_id),
                    Self::single_line(&row.title),
                    Self::single_line(&row.file),
                    row.line.to_string(),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = FINDING_COLUMNS.iter().map(|h| h.chars().count()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: Vec<String> = FINDING_COLUMNS
            .iter()
            .zip(widths.iter())
            .map(|(title, width)| Self::pad(title, *width))
            .collect();
        output.push_str(INDENT);
        output.push_str(&self.heading(header.join(COLUMN_GAP).trim_end()));
        output.push('\n');

        for (row, cell) in findings.rows.iter().zip(cells.iter()) {
            let severity = self.paint_severity(&row.severity, &Self::pad(&cell[0], widths[0]));
            let rest: Vec<String> = cell[1..4]
                .iter()
                .zip(widths[1..4].iter())
                .map(|(text, width)| Self::pad(text, *width))
                .collect();
            output.push_str(&format!(
                "{}{}{}{}{}{}\n",
                INDENT,
                severity,
                COLUMN_GAP,
                rest.join(COLUMN_GAP),
                COLUMN_GAP,
                cell[4]
            ));

            if !row.description.trim().is_empty() {
                output.push_str(&format!(
                    "{}{}\n",
                    DETAIL_INDENT,
                    self.dim(&Self::single_line(&row.description))
                ));
            }
            if let Some(snippet) = &row.snippet {
                output.push_str(&format!("{}> {}\n", DETAIL_INDENT, snippet.trim()));
            }
            if let Some(fix) = &row.recommendation {
                output.push_str(&format!(
                    "{}Fix: {}\n",
                    DETAIL_INDENT,
                    Self::single_line(fix)
                ));
            }
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format_report(&self, model: &ReportView) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "{}  (ID: {})\n",
            self.heading("Scan Results"),
            model.scan_id
        ));
        output.push_str(&format!("{}Source: {}\n", INDENT, model.source));
        output.push_str(&format!("{}Status: {}\n\n", INDENT, model.status));

        output.push_str(&self.heading("Summary"));
        output.push('\n');
        self.render_summary(&mut output, model.files_scanned, &model.summary);
        output.push('\n');

        self.render_findings(&mut output, &model.findings);
        Ok(output)
    }

    fn format_history(&self, model: &HistoryView) -> Result<String> {
        let mut output = String::new();
        output.push_str(&self.heading("Scan History"));
        output.push_str("\n\n");

        if model.is_empty() {
            output.push_str(&format!("{}{}\n", INDENT, NO_HISTORY_MESSAGE));
            return Ok(output);
        }

        let id_width = model
            .entries
            .iter()
            .map(|e| e.scan_id.chars().count())
            .max()
            .unwrap_or(0);

        for entry in &model.entries {
            output.push_str(&format!(
                "{}{}{}{}\n",
                INDENT,
                Self::pad(&entry.scan_id, id_width),
                COLUMN_GAP,
                self.dim(&format!(
                    "{} - {} issues ({} files)",
                    entry.source, entry.total_issues, entry.files_scanned
                ))
            ));
        }
        Ok(output)
    }
}
