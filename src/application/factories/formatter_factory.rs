use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter for an output format. It belongs in the
/// application layer as it orchestrates the selection of infrastructure
/// adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `colored` - Whether the text formatter may emit ANSI colors
    ///
    /// # Examples
    /// ```
    /// use sentinel_scan::application::dto::OutputFormat;
    /// use sentinel_scan::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(colored)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Whether a format can carry ANSI colors at all
    pub fn supports_color(format: OutputFormat) -> bool {
        matches!(format, OutputFormat::Text)
    }
}
