/// Use cases module containing application business logic orchestration
mod browse_reports;
mod scan_files;
mod scan_repository;

pub use browse_reports::BrowseReportsUseCase;
pub use scan_files::ScanFilesUseCase;
pub use scan_repository::{validate_repository_url, ScanRepositoryUseCase};
