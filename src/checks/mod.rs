pub mod environments;
pub mod packages;
pub mod references;

use crate::model::IndexReport;
use crate::report::issue::{Issue, Severity};

/// A single validation pass over an index report.
/// Each check is independent and inspects one family of invariants.
pub trait ReportCheck: Send + Sync {
    /// Check name (e.g. "references")
    fn name(&self) -> &str;

    /// Short description of what this check verifies
    fn description(&self) -> &str;

    /// Run the check against a report and return issues
    fn check(&self, report: &IndexReport) -> Vec<Issue>;
}

/// Registry of all available checks
pub fn all_checks() -> Vec<Box<dyn ReportCheck>> {
    vec![
        Box::new(references::ReferencesCheck),
        Box::new(packages::PackagesCheck),
        Box::new(environments::EnvironmentsCheck),
    ]
}

/// Get checks filtered by name (comma-separated)
pub fn checks_by_names(names: &str) -> Vec<Box<dyn ReportCheck>> {
    let requested: Vec<&str> = names.split(',').map(|s| s.trim()).collect();
    all_checks()
        .into_iter()
        .filter(|c| requested.iter().any(|name| c.name().eq_ignore_ascii_case(name)))
        .collect()
}

pub(crate) fn issue(
    code: &str,
    severity: Severity,
    check: &str,
    subject: &str,
    message: String,
) -> Issue {
    Issue {
        code: code.to_string(),
        severity,
        check: check.to_string(),
        subject: subject.to_string(),
        message,
    }
}
