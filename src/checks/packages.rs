use std::collections::HashSet;

use crate::checks::{issue, ReportCheck};
use crate::model::report::NORMALIZED_VERSION_SLOTS;
use crate::model::IndexReport;
use crate::report::issue::{Issue, Severity};

/// Verifies package-level invariants: unique IDs, no nested source
/// packages, well-formed normalized versions, non-empty names.
pub struct PackagesCheck;

const NAME: &str = "packages";

impl ReportCheck for PackagesCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Packages have unique IDs, flat source references, and well-formed versions"
    }

    fn check(&self, report: &IndexReport) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for package in &report.contents.packages {
            if !seen.insert(package.id.as_str()) {
                issues.push(issue(
                    "LAM-PKG-001",
                    Severity::Error,
                    NAME,
                    &package.id,
                    format!("duplicate package ID {:?}", package.id),
                ));
            }

            // A source package is a root: it must not reference a source
            // of its own.
            if let Some(source) = &package.source {
                if source.source.is_some() {
                    issues.push(issue(
                        "LAM-PKG-002",
                        Severity::Error,
                        NAME,
                        &package.id,
                        format!(
                            "package {:?}: source package {:?} specifies its own source",
                            package.id, source.id
                        ),
                    ));
                }
            }

            if let Some(normalized) = &package.normalized_version {
                if normalized.v.len() != NORMALIZED_VERSION_SLOTS {
                    issues.push(issue(
                        "LAM-PKG-003",
                        Severity::Error,
                        NAME,
                        &package.id,
                        format!(
                            "package {:?}: normalized version has {} slots, expected {}",
                            package.id,
                            normalized.v.len(),
                            NORMALIZED_VERSION_SLOTS
                        ),
                    ));
                }
            }

            if package.name.is_empty() {
                issues.push(issue(
                    "LAM-PKG-004",
                    Severity::Warning,
                    NAME,
                    &package.id,
                    format!("package {:?} has an empty name", package.id),
                ));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::{NormalizedVersion, Package};

    #[test]
    fn sample_report_is_clean() {
        let report = fixtures::index_report();
        assert!(PackagesCheck.check(&report).is_empty());
    }

    #[test]
    fn duplicate_package_id() {
        let mut report = fixtures::index_report();
        let copy = report.contents.packages[0].clone();
        report.contents.packages.push(copy);

        let issues = PackagesCheck.check(&report);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "LAM-PKG-001");
    }

    #[test]
    fn nested_source_package() {
        let mut report = fixtures::index_report();
        let nested = Package {
            id: "20".to_string(),
            name: "inner".to_string(),
            ..Package::default()
        };
        let source = report.contents.packages[0].source.as_mut().unwrap();
        source.source = Some(Box::new(nested));

        let issues = PackagesCheck.check(&report);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "LAM-PKG-002");
        assert_eq!(issues[0].subject, "1");
    }

    #[test]
    fn short_normalized_version() {
        let mut report = fixtures::index_report();
        report.contents.packages[0].normalized_version = Some(NormalizedVersion {
            kind: "pep440".to_string(),
            v: vec![1, 2, 3],
        });

        let issues = PackagesCheck.check(&report);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "LAM-PKG-003");
    }

    #[test]
    fn empty_name_is_a_warning() {
        let mut report = fixtures::index_report();
        report.contents.packages[0].name.clear();

        let issues = PackagesCheck.check(&report);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "LAM-PKG-004");
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
