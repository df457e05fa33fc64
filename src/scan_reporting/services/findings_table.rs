use crate::scan_reporting::domain::{Severity, SeverityFilter, Vulnerability};

/// Client-side filtering and ordering of a report's findings.
pub struct FindingsTable;

impl FindingsTable {
    /// Applies `filter` and orders the result by severity rank.
    ///
    /// The sort is stable: findings of equal rank keep the order in which the
    /// service reported them.
    pub fn arrange<'a>(
        vulnerabilities: &'a [Vulnerability],
        filter: SeverityFilter,
    ) -> Vec<&'a Vulnerability> {
        let mut rows: Vec<&Vulnerability> = vulnerabilities
            .iter()
            .filter(|v| filter.matches(&v.severity))
            .collect();
        rows.sort_by_key(|v| v.severity.rank());
        rows
    }

    /// Number of findings at each known level, over the unfiltered list.
    pub fn level_counts(vulnerabilities: &[Vulnerability]) -> Vec<(Severity, usize)> {
        Severity::LEVELS
            .iter()
            .map(|level| {
                let count = vulnerabilities
                    .iter()
                    .filter(|v| v.severity == *level)
                    .count();
                (level.clone(), count)
            })
            .collect()
    }
}
