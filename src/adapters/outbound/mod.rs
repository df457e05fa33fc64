/// Outbound adapters
///
/// - `network`: scanning service REST client
/// - `filesystem`: upload collection and output writers
/// - `console`: progress on stderr
/// - `formatters`: text, Markdown and JSON rendering
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
