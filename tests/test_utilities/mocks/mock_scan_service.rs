use async_trait::async_trait;
use sentinel_scan::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ScanService for testing that records what was submitted
#[derive(Clone, Default)]
pub struct MockScanService {
    pub report: Option<ScanReport>,
    pub history: Vec<ScanReport>,
    pub should_fail: bool,
    pub uploaded: Arc<Mutex<Vec<UploadFile>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockScanService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, report: ScanReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_history(mut self, history: Vec<ScanReport>) -> Self {
        self.history = history;
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn get_uploaded(&self) -> Vec<UploadFile> {
        self.uploaded.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.should_fail {
            anyhow::bail!("Mock scan service failure");
        }
        Ok(())
    }

    fn stored_report(&self) -> Result<ScanReport> {
        self.report
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Report not found"))
    }
}

#[async_trait]
impl ScanService for MockScanService {
    async fn submit_files(&self, files: Vec<UploadFile>) -> Result<ScanReport> {
        self.record(format!("submit_files({})", files.len()))?;
        self.uploaded.lock().unwrap().extend(files);
        self.stored_report()
    }

    async fn submit_repository(&self, repo_url: &str) -> Result<ScanReport> {
        self.record(format!("submit_repository({})", repo_url))?;
        self.stored_report()
    }

    async fn list_reports(&self) -> Result<Vec<ScanReport>> {
        self.record("list_reports".to_string())?;
        Ok(self.history.clone())
    }

    async fn fetch_report(&self, scan_id: &str) -> Result<ScanReport> {
        self.record(format!("fetch_report({})", scan_id))?;
        self.stored_report()
    }

    async fn check_health(&self) -> Result<ServiceHealth> {
        self.record("check_health".to_string())?;
        Ok(ServiceHealth {
            status: "ok".to_string(),
        })
    }
}
