/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_scan_service;
mod mock_source_file_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_scan_service::MockScanService;
pub use mock_source_file_reader::MockSourceFileReader;
