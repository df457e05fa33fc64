use crate::ports::outbound::{ProgressReporter, ScanService};
use crate::scan_reporting::domain::{ScanReport, ServiceHealth};
use crate::shared::Result;

/// BrowseReportsUseCase - reads reports already held by the service
pub struct BrowseReportsUseCase<S, P> {
    scan_service: S,
    progress_reporter: P,
}

impl<S, P> BrowseReportsUseCase<S, P>
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

    /// Lists previous scans in the order the service returns them
    pub async fn history(&self) -> Result<Vec<ScanReport>> {
        self.progress_reporter.report("📜 Fetching scan history...");
        let reports = self.scan_service.list_reports().await?;
        log::debug!("service returned {} report(s)", reports.len());
        Ok(reports)
    }

    /// Fetches one report by id
    pub async fn show(&self, scan_id: &str) -> Result<ScanReport> {
        let scan_id = scan_id.trim();
        if scan_id.is_empty() {
            anyhow::bail!("Scan id must not be empty");
        }

        self.progress_reporter
            .report(&format!("📄 Fetching report {}...", scan_id));
        self.scan_service.fetch_report(scan_id).await
    }

    /// Checks that the service answers its health endpoint
    pub async fn health(&self) -> Result<ServiceHealth> {
        self.scan_service.check_health().await
    }
}
