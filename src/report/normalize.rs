use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::warn;

use crate::model::IndexReport;

/// Normalize a report in place: deterministic ordering, deduplicated
/// per-package environments, and no environment entries keyed by
/// unknown package IDs. Running it twice is a no-op the second time.
pub fn normalize(report: &mut IndexReport) {
    let contents = &mut report.contents;

    contents.packages.sort_by(|a, b| compare_ids(&a.id, &b.id));
    contents.distributions.sort_by(|a, b| compare_ids(&a.id, &b.id));
    contents.repositories.sort_by(|a, b| compare_ids(&a.id, &b.id));

    // Drop environment entries that reference packages the report does
    // not contain. Indexer bugs aside, these can appear when packages
    // were filtered out upstream without their environments.
    let known: HashSet<&str> = contents.packages.iter().map(|p| p.id.as_str()).collect();
    let dangling: Vec<String> = contents
        .environments
        .keys()
        .filter(|key| !known.contains(key.as_str()))
        .cloned()
        .collect();
    for key in dangling {
        warn!("Dropping environments for unknown package ID {key:?}");
        contents.environments.remove(&key);
    }

    for list in contents.environments.values_mut() {
        let mut seen = HashSet::new();
        list.environments.retain(|env| {
            seen.insert((
                env.package_db.clone(),
                env.introduced_in.to_string(),
                env.distribution_id.clone(),
                env.repository_ids.clone(),
            ))
        });
        for env in &mut list.environments {
            env.repository_ids.sort_by(|a, b| compare_ids(a, b));
            env.repository_ids.dedup();
        }
    }
}

/// Compare IDs numerically when both sides are numeric, so "10" sorts
/// after "9"; otherwise fall back to a plain string comparison.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::Package;

    #[test]
    fn sample_report_is_already_normal() {
        let mut report = fixtures::index_report();
        let before = report.clone();
        normalize(&mut report);
        assert_eq!(report, before);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut report = fixtures::index_report();
        report.contents.packages.reverse();
        normalize(&mut report);
        let once = report.clone();
        normalize(&mut report);
        assert_eq!(report, once);
    }

    #[test]
    fn numeric_ids_sort_numerically() {
        let mut report = fixtures::index_report();
        report.contents.packages.push(Package {
            id: "10".to_string(),
            name: "extra".to_string(),
            ..Package::default()
        });
        report.contents.packages.reverse();
        normalize(&mut report);
        let ids: Vec<&str> = report.contents.packages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "10"]);
    }

    #[test]
    fn dangling_environments_are_pruned() {
        let mut report = fixtures::index_report();
        let list = report.contents.environments.remove("1").unwrap();
        report.contents.environments.insert("99".to_string(), list);

        normalize(&mut report);
        assert!(!report.contents.environments.contains_key("99"));
        assert_eq!(report.contents.environments.len(), 7);
    }

    #[test]
    fn duplicate_environments_are_removed() {
        let mut report = fixtures::index_report();
        let list = report.contents.environments.get_mut("1").unwrap();
        let copy = list.environments[0].clone();
        list.environments.push(copy);

        normalize(&mut report);
        assert_eq!(report.environments("1").len(), 1);
    }
}
