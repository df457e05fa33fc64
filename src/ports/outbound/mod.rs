/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (scanning service, file system, console).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scan_service;
pub mod source_file_reader;

pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scan_service::{ScanService, UploadFile};
pub use source_file_reader::SourceFileReader;
