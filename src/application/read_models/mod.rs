//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that formatters render directly. Filtering and
//! ordering are already applied by the time a view is built.

pub mod finding_view;
pub mod history_view;
pub mod report_read_model_builder;
pub mod report_view;

pub use finding_view::{FindingRow, FindingsTableView, LevelCount, NO_FINDINGS_MESSAGE};
pub use history_view::{HistoryEntry, HistoryView, NO_HISTORY_MESSAGE};
pub use report_read_model_builder::ReportReadModelBuilder;
pub use report_view::ReportView;
