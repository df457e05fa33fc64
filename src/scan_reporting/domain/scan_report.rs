use super::severity::Severity;
use super::vulnerability::Vulnerability;
use serde::{Deserialize, Serialize};

/// Source label shown when a report carries no source (file uploads).
pub const DEFAULT_SOURCE_LABEL: &str = "upload";

/// Per-severity counts as reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub high: usize,
    #[serde(default)]
    pub medium: usize,
    #[serde(default)]
    pub low: usize,
}

impl ScanSummary {
    /// Counts findings by severity. Unknown severities add to `total` only.
    pub fn from_vulnerabilities(vulnerabilities: &[Vulnerability]) -> Self {
        let count = |level: Severity| {
            vulnerabilities
                .iter()
                .filter(|v| v.severity == level)
                .count()
        };
        Self {
            total: vulnerabilities.len(),
            high: count(Severity::High),
            medium: count(Severity::Medium),
            low: count(Severity::Low),
        }
    }
}

/// One completed scan result bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub scan_id: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub files_scanned: usize,
    #[serde(default)]
    pub summary: Option<ScanSummary>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

fn default_status() -> String {
    "completed".to_string()
}

impl ScanReport {
    /// Summary sent by the service, or one counted from the findings
    /// when the service left it out.
    pub fn summary(&self) -> ScanSummary {
        self.summary
            .unwrap_or_else(|| ScanSummary::from_vulnerabilities(&self.vulnerabilities))
    }

    /// Where the scanned code came from, falling back to `upload`.
    pub fn source_label(&self) -> &str {
        if self.source.is_empty() {
            DEFAULT_SOURCE_LABEL
        } else {
            &self.source
        }
    }
}

/// Answer of the service health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
}

impl ServiceHealth {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
