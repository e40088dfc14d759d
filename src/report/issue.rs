use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::model::{parse_package_db, IndexReport};

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "WARNING" => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single validation issue found in an index report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Stable issue code, e.g. "LAM-REF-001"
    pub code: String,

    /// Severity level
    pub severity: Severity,

    /// Which check found this
    pub check: String,

    /// The report entity the issue concerns (package ID, environment key)
    pub subject: String,

    /// Human-readable description
    pub message: String,
}

/// The complete inspection report for one index report file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionReport {
    /// Lamina version
    pub version: String,

    /// When the inspection was performed
    pub timestamp: String,

    /// Report file that was inspected
    pub source: PathBuf,

    /// Whether the report was normalized before checking
    pub normalized: bool,

    /// Duration in milliseconds
    pub duration_ms: u64,

    /// Summary counts
    pub summary: InspectionSummary,

    /// All issues, sorted by severity (errors first)
    pub issues: Vec<Issue>,
}

impl InspectionReport {
    /// Check if there are issues at or above a severity threshold
    pub fn has_issues_at_or_above(&self, threshold: Severity) -> bool {
        self.issues.iter().any(|i| i.severity >= threshold)
    }
}

/// Summary statistics over the inspected report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionSummary {
    pub packages: usize,
    pub distributions: usize,
    pub repositories: usize,
    pub layers: usize,

    /// Package counts per source type ("OS", "Python", ...)
    pub source_types: BTreeMap<String, usize>,

    pub errors: usize,
    pub warnings: usize,
}

impl InspectionSummary {
    pub fn new(report: &IndexReport, issues: &[Issue]) -> Self {
        let mut source_types = BTreeMap::new();
        for package in &report.contents.packages {
            let (source_type, _) = parse_package_db(&package.package_db);
            *source_types.entry(source_type.as_str().to_string()).or_insert(0) += 1;
        }
        let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
        InspectionSummary {
            packages: report.contents.packages.len(),
            distributions: report.contents.distributions.len(),
            repositories: report.contents.repositories.len(),
            layers: report.layers().len(),
            source_types,
            errors,
            warnings: issues.len() - errors,
        }
    }
}

/// Sort issues by severity (errors first), then by code, then subject.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| a.code.cmp(&b.code))
            .then_with(|| a.subject.cmp(&b.subject))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn issue(code: &str, severity: Severity, subject: &str) -> Issue {
        Issue {
            code: code.to_string(),
            severity,
            check: "test".to_string(),
            subject: subject.to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn errors_sort_before_warnings() {
        let mut issues = vec![
            issue("LAM-ENV-001", Severity::Warning, "3"),
            issue("LAM-REF-001", Severity::Error, "9"),
            issue("LAM-REF-001", Severity::Error, "2"),
        ];
        sort_issues(&mut issues);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].subject, "2");
        assert_eq!(issues[2].severity, Severity::Warning);
    }

    #[test]
    fn summary_counts_sample_report() {
        let report = fixtures::index_report();
        let summary = InspectionSummary::new(&report, &[]);
        assert_eq!(summary.packages, 8);
        assert_eq!(summary.layers, 2);
        assert_eq!(summary.source_types.get("OS"), Some(&7));
        assert_eq!(summary.source_types.get("Python"), Some(&1));
        assert_eq!(summary.errors, 0);
    }

    #[test]
    fn severity_threshold() {
        assert!(Severity::Error >= Severity::from_str("warning"));
        assert!(Severity::Warning < Severity::Error);
    }
}
