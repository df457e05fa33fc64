use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rank assigned to any severity label the client does not recognise.
const UNKNOWN_RANK: u8 = 3;

/// Severity of a finding as labelled by the scanning service.
///
/// Labels are matched exactly (`"High"`, `"Medium"`, `"Low"`). Anything else is
/// kept verbatim in [`Severity::Unknown`] so it can still be displayed, and it
/// sorts after every known level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    High,
    Medium,
    Low,
    Unknown(String),
}

impl Severity {
    /// Known levels, most severe first.
    pub const LEVELS: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    /// Sort rank: High=0, Medium=1, Low=2, unknown=3.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
            Severity::Unknown(_) => UNKNOWN_RANK,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Unknown(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Severity::Unknown(_))
    }

    /// True when this severity is at least as severe as `threshold`.
    /// Unknown severities never meet a threshold.
    pub fn meets(&self, threshold: &Severity) -> bool {
        self.is_known() && self.rank() <= threshold.rank()
    }
}

impl From<String> for Severity {
    fn from(label: String) -> Self {
        match label.as_str() {
            "High" => Severity::High,
            "Medium" => Severity::Medium,
            "Low" => Severity::Low,
            _ => Severity::Unknown(label),
        }
    }
}

impl From<&str> for Severity {
    fn from(label: &str) -> Self {
        Severity::from(label.to_string())
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Unknown(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a user-supplied threshold level (case-insensitive).
impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(format!(
                "Invalid severity: {}. Please specify 'high', 'medium' or 'low'",
                s
            )),
        }
    }
}

/// Severity filter applied to the findings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SeverityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl SeverityFilter {
    /// True when the filter keeps a finding of the given severity.
    /// Concrete levels match exactly, so unknown severities only pass `All`.
    pub fn matches(&self, severity: &Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::High => *severity == Severity::High,
            SeverityFilter::Medium => *severity == Severity::Medium,
            SeverityFilter::Low => *severity == Severity::Low,
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(SeverityFilter::All),
            "high" => Ok(SeverityFilter::High),
            "medium" => Ok(SeverityFilter::Medium),
            "low" => Ok(SeverityFilter::Low),
            _ => Err(format!(
                "Invalid severity filter: {}. Please specify 'all', 'high', 'medium' or 'low'",
                s
            )),
        }
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityFilter::All => write!(f, "All"),
            SeverityFilter::High => write!(f, "High"),
            SeverityFilter::Medium => write!(f, "Medium"),
            SeverityFilter::Low => write!(f, "Low"),
        }
    }
}
