/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI adapter into the use cases.
mod output_format;
mod scan_request;

pub use output_format::OutputFormat;
pub use scan_request::{RepositoryScanRequest, UploadRequest};
