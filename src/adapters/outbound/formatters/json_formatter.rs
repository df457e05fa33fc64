use crate::application::read_models::{HistoryView, ReportView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// JsonFormatter adapter for machine-readable output
///
/// Serializes the read models as pretty-printed JSON. Rows are already
/// filtered and ordered, so consumers see exactly what the other formats show.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String> {
        let mut output =
            serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")?;
        output.push('\n');
        Ok(output)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, model: &ReportView) -> Result<String> {
        Self::to_json(model)
    }

    fn format_history(&self, model: &HistoryView) -> Result<String> {
        Self::to_json(model)
    }
}
