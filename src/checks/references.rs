use std::collections::HashSet;

use crate::checks::{issue, ReportCheck};
use crate::model::IndexReport;
use crate::report::issue::{Issue, Severity};

/// Verifies that every ID reference inside the report resolves:
/// environment keys to packages, environment distribution IDs to
/// distributions, and environment repository IDs to repositories.
pub struct ReferencesCheck;

const NAME: &str = "references";

impl ReportCheck for ReferencesCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Cross-references between packages, environments, distributions, and repositories resolve"
    }

    fn check(&self, report: &IndexReport) -> Vec<Issue> {
        let packages: HashSet<&str> =
            report.contents.packages.iter().map(|p| p.id.as_str()).collect();
        let distributions: HashSet<&str> =
            report.contents.distributions.iter().map(|d| d.id.as_str()).collect();
        let repositories: HashSet<&str> =
            report.contents.repositories.iter().map(|r| r.id.as_str()).collect();

        let mut issues = Vec::new();
        for (package_id, list) in &report.contents.environments {
            if !packages.contains(package_id.as_str()) {
                issues.push(issue(
                    "LAM-REF-001",
                    Severity::Error,
                    NAME,
                    package_id,
                    format!("environment entry keyed by unknown package ID {package_id:?}"),
                ));
            }
            for env in &list.environments {
                if !env.distribution_id.is_empty()
                    && !distributions.contains(env.distribution_id.as_str())
                {
                    issues.push(issue(
                        "LAM-REF-002",
                        Severity::Error,
                        NAME,
                        package_id,
                        format!(
                            "environment for package {package_id} references unknown distribution ID {:?}",
                            env.distribution_id
                        ),
                    ));
                }
                for repo_id in &env.repository_ids {
                    if !repositories.contains(repo_id.as_str()) {
                        issues.push(issue(
                            "LAM-REF-003",
                            Severity::Error,
                            NAME,
                            package_id,
                            format!(
                                "environment for package {package_id} references unknown repository ID {repo_id:?}"
                            ),
                        ));
                    }
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
    use crate::model::{Environment, EnvironmentList};

    #[test]
    fn sample_report_is_clean() {
        let report = fixtures::index_report();
        assert!(ReferencesCheck.check(&report).is_empty());
    }

    #[test]
    fn dangling_environment_key() {
        let mut report = fixtures::index_report();
        let list = report.contents.environments.remove("1").unwrap();
        report.contents.environments.insert("99".to_string(), list);

        let issues = ReferencesCheck.check(&report);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "LAM-REF-001");
        assert_eq!(issues[0].subject, "99");
    }

    #[test]
    fn unknown_distribution_and_repository() {
        let mut report = fixtures::index_report();
        let env = Environment {
            package_db: "var/lib/dpkg/status".to_string(),
            introduced_in: "sha256:9124cd5256c6d674f6b11a4d01fea8148259be1f66ca2cf9dfbaafc83c31874e"
                .parse()
                .unwrap(),
            distribution_id: "42".to_string(),
            repository_ids: vec!["43".to_string()],
        };
        report
            .contents
            .environments
            .insert("1".to_string(), EnvironmentList { environments: vec![env] });

        let codes: Vec<_> = ReferencesCheck
            .check(&report)
            .into_iter()
            .map(|i| i.code)
            .collect();
        assert!(codes.contains(&"LAM-REF-002".to_string()));
        assert!(codes.contains(&"LAM-REF-003".to_string()));
    }
}
