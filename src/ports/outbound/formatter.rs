use crate::application::read_models::{HistoryView, ReportView};
use crate::shared::Result;

/// ReportFormatter port for rendering read models
///
/// Implemented once per output format (text, Markdown, JSON).
pub trait ReportFormatter {
    /// Renders a single report: summary plus findings table
    fn format_report(&self, model: &ReportView) -> Result<String>;

    /// Renders the list of previous scans
    fn format_history(&self, model: &HistoryView) -> Result<String>;
}
