use std::collections::HashSet;

use crate::checks::{issue, ReportCheck};
use crate::model::IndexReport;
use crate::report::issue::{Issue, Severity};

/// Verifies that environments are present and not duplicated: every
/// package should record where it was discovered, exactly once per
/// distinct location.
pub struct EnvironmentsCheck;

const NAME: &str = "environments";

impl ReportCheck for EnvironmentsCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Every package has environment entries, with no duplicates"
    }

    fn check(&self, report: &IndexReport) -> Vec<Issue> {
        let mut issues = Vec::new();

        for package in &report.contents.packages {
            let envs = report.environments(&package.id);
            if envs.is_empty() {
                issues.push(issue(
                    "LAM-ENV-001",
                    Severity::Warning,
                    NAME,
                    &package.id,
                    format!(
                        "package {:?} ({}) has no environment entry",
                        package.id, package.name
                    ),
                ));
                continue;
            }

            let mut seen = HashSet::new();
            for env in envs {
                let key = (
                    env.package_db.as_str(),
                    env.introduced_in.to_string(),
                    env.distribution_id.as_str(),
                    env.repository_ids.clone(),
                );
                if !seen.insert(key) {
                    issues.push(issue(
                        "LAM-ENV-002",
                        Severity::Warning,
                        NAME,
                        &package.id,
                        format!("package {:?} records duplicate environments", package.id),
                    ));
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn sample_report_is_clean() {
        let report = fixtures::index_report();
        assert!(EnvironmentsCheck.check(&report).is_empty());
    }

    #[test]
    fn missing_environment_entry() {
        let mut report = fixtures::index_report();
        report.contents.environments.remove("3");

        let issues = EnvironmentsCheck.check(&report);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "LAM-ENV-001");
        assert_eq!(issues[0].subject, "3");
    }

    #[test]
    fn duplicated_environment() {
        let mut report = fixtures::index_report();
        let list = report.contents.environments.get_mut("1").unwrap();
        let copy = list.environments[0].clone();
        list.environments.push(copy);

        let issues = EnvironmentsCheck.check(&report);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "LAM-ENV-002");
    }
}
