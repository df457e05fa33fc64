use crate::application::dto::RepositoryScanRequest;
use crate::ports::outbound::{ProgressReporter, ScanService};
use crate::scan_reporting::domain::ScanReport;
use crate::shared::error::ScanError;
use crate::shared::Result;
use url::Url;

/// Trims and checks a repository URL typed by the user.
///
/// The URL must be absolute with an `http` or `https` scheme and a host.
/// Whether the repository can actually be fetched is up to the service.
pub fn validate_repository_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| ScanError::InvalidRepositoryUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("URL is empty").into());
    }

    let parsed = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(&format!("unsupported scheme '{}'", parsed.scheme())).into());
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(invalid("URL has no host").into()),
    }

    Ok(trimmed.to_string())
}

/// ScanRepositoryUseCase - asks the service to scan a public repository
pub struct ScanRepositoryUseCase<S, P> {
    scan_service: S,
    progress_reporter: P,
}

impl<S, P> ScanRepositoryUseCase<S, P>
where
    S: ScanService,
    P: ProgressReporter,
{
    pub fn new(scan_service: S, progress_reporter: P) -> Self {
        Self {
            scan_service,
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: RepositoryScanRequest) -> Result<ScanReport> {
        let repo_url = validate_repository_url(&request.repo_url)?;

        self.progress_reporter
            .start_waiting(&format!("Scanning repository {}...", repo_url));

        match self.scan_service.submit_repository(&repo_url).await {
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
                self.progress_reporter.report_error("❌ Repository scan failed");
                Err(e)
            }
        }
    }
}
