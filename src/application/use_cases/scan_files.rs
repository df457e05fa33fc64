use crate::application::dto::UploadRequest;
use crate::ports::outbound::{ProgressReporter, ScanService, SourceFileReader, UploadFile};
use crate::scan_reporting::domain::ScanReport;
use crate::shared::error::ScanError;
use crate::shared::Result;

/// ScanFilesUseCase - uploads local source files for scanning
///
/// # Type Parameters
/// * `R` - SourceFileReader implementation
/// * `S` - ScanService implementation
/// * `P` - ProgressReporter implementation
pub struct ScanFilesUseCase<R, S, P> {
    source_reader: R,
    scan_service: S,
    progress_reporter: P,
}

impl<R, S, P> ScanFilesUseCase<R, S, P>
where
    R: SourceFileReader,
    S: ScanService,
    P: ProgressReporter,
{
    pub fn new(source_reader: R, scan_service: S, progress_reporter: P) -> Self {
        Self {
            source_reader,
            scan_service,
            progress_reporter,
        }
    }

    /// Collects the requested files, uploads them, and returns the report
    ///
    /// # Errors
    /// Returns an error if no file is selected, a file cannot be read, or the
    /// service rejects the upload.
    pub async fn execute(&self, request: UploadRequest) -> Result<ScanReport> {
        self.progress_reporter.report("📂 Collecting files to upload...");

        let selected = self.source_reader.collect(&request.paths)?;
        if selected.is_empty() {
            return Err(ScanError::NoFilesToUpload {
                hint: "Pass at least one source file, or a directory containing files with a scannable extension".to_string(),
            }
            .into());
        }

        self.progress_reporter
            .report(&format!("✅ Selected {} file(s)", selected.len()));
        for file in &selected {
            log::debug!("selected {} ({})", file.upload_name, file.path.display());
        }

        let mut uploads = Vec::with_capacity(selected.len());
        for file in &selected {
            let content = self.source_reader.read(file)?;
            uploads.push(UploadFile::new(file.upload_name.clone(), content));
        }

        self.progress_reporter
            .start_waiting(&format!("Scanning {} file(s)...", uploads.len()));

        match self.scan_service.submit_files(uploads).await {
            Ok(report) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Scan {} completed: {} issue(s) in {} file(s)",
                    report.scan_id,
                    report.summary().total,
                    report.files_scanned
                ));
                Ok(report)
            }
            Err(e) => {
                self.progress_reporter.report_error("❌ Upload scan failed");
                Err(e)
            }
        }
    }
}
