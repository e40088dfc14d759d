//! Sample index report data for tests and examples.
//!
//! The loader here panics on malformed data. That is acceptable only
//! because the input is a compile-time constant: a parse failure means
//! the constant itself is broken, which is a programming error. Do not
//! imitate this error handling for runtime input; use [`crate::loader`].

use crate::loader;
use crate::model::IndexReport;

/// A complete index report for a small RHEL 8 based image: eight
/// packages across two layers, one distribution, two repositories.
/// Arbitrary sample data, not a real image.
pub const SAMPLE_INDEX_REPORT_JSON: &str = r#"{
  "hash_id": "/v4/containerimage/2d47009b1bbdeee27077068d15144181e1708ecdbdf44d4816a44ac34a40b9c0",
  "state": "IndexFinished",
  "success": true,
  "contents": {
    "packages": [
      {
        "id": "1",
        "name": "bash",
        "version": "4.4.20-4.el8_6",
        "kind": "binary",
        "source": {
          "id": "11",
          "name": "bash",
          "version": "4.4.20-4.el8_6",
          "kind": "source"
        },
        "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
        "repository_hint": "hash:sha256|key:199e2f91fd431d51",
        "arch": "x86_64"
      },
      {
        "id": "2",
        "name": "glibc",
        "version": "2.28-225.el8",
        "kind": "binary",
        "source": {
          "id": "12",
          "name": "glibc",
          "version": "2.28-225.el8",
          "kind": "source"
        },
        "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
        "repository_hint": "hash:sha256|key:199e2f91fd431d51",
        "arch": "x86_64"
      },
      {
        "id": "3",
        "name": "openssl-libs",
        "version": "1:1.1.1k-9.el8",
        "kind": "binary",
        "source": {
          "id": "13",
          "name": "openssl",
          "version": "1:1.1.1k-9.el8",
          "kind": "source"
        },
        "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
        "repository_hint": "hash:sha256|key:199e2f91fd431d51",
        "arch": "x86_64"
      },
      {
        "id": "4",
        "name": "zlib",
        "version": "1.2.11-21.el8_7",
        "kind": "binary",
        "source": {
          "id": "14",
          "name": "zlib",
          "version": "1.2.11-21.el8_7",
          "kind": "source"
        },
        "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
        "repository_hint": "hash:sha256|key:199e2f91fd431d51",
        "arch": "x86_64"
      },
      {
        "id": "5",
        "name": "libgcc",
        "version": "8.5.0-18.el8",
        "kind": "binary",
        "source": {
          "id": "15",
          "name": "gcc",
          "version": "8.5.0-18.el8",
          "kind": "source"
        },
        "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
        "repository_hint": "hash:sha256|key:199e2f91fd431d51",
        "arch": "x86_64"
      },
      {
        "id": "6",
        "name": "systemd-libs",
        "version": "239-74.el8_8",
        "kind": "binary",
        "source": {
          "id": "16",
          "name": "systemd",
          "version": "239-74.el8_8",
          "kind": "source"
        },
        "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
        "repository_hint": "hash:sha256|key:199e2f91fd431d51",
        "arch": "x86_64"
      },
      {
        "id": "7",
        "name": "tzdata",
        "version": "2023c-1.el8",
        "kind": "binary",
        "source": {
          "id": "17",
          "name": "tzdata",
          "version": "2023c-1.el8",
          "kind": "source"
        },
        "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
        "repository_hint": "hash:sha256|key:199e2f91fd431d51",
        "arch": "noarch"
      },
      {
        "id": "8",
        "name": "pip",
        "version": "21.2.3",
        "normalized_version": {
          "kind": "pep440",
          "v": [21, 2, 3, 0, 0, 0, 0, 0, 0, 0]
        },
        "kind": "binary",
        "package_db": "python:usr/lib/python3.9/site-packages",
        "repository_hint": "https://pypi.org/simple"
      }
    ],
    "distributions": [
      {
        "id": "1",
        "did": "rhel",
        "name": "Red Hat Enterprise Linux Server",
        "version": "8",
        "version_id": "8",
        "cpe": "cpe:2.3:o:redhat:enterprise_linux:8:*:*:*:*:*:*:*",
        "pretty_name": "Red Hat Enterprise Linux 8"
      }
    ],
    "repositories": [
      {
        "id": "1",
        "name": "cpe:/o:redhat:enterprise_linux:8::baseos",
        "key": "rhel-cpe-repository",
        "cpe": "cpe:2.3:o:redhat:enterprise_linux:8:*:baseos:*:*:*:*:*"
      },
      {
        "id": "2",
        "name": "cpe:/a:redhat:enterprise_linux:8::appstream",
        "key": "rhel-cpe-repository",
        "cpe": "cpe:2.3:a:redhat:enterprise_linux:8:*:appstream:*:*:*:*:*"
      }
    ],
    "environments": {
      "1": {
        "environments": [
          {
            "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
            "introduced_in": "sha256:35c102085707f703de2d9eaad8752d6fe1b8f02b5d2149f1d8357c9cc7fb7d0a",
            "distribution_id": "1",
            "repository_ids": ["1", "2"]
          }
        ]
      },
      "2": {
        "environments": [
          {
            "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
            "introduced_in": "sha256:35c102085707f703de2d9eaad8752d6fe1b8f02b5d2149f1d8357c9cc7fb7d0a",
            "distribution_id": "1",
            "repository_ids": ["1", "2"]
          }
        ]
      },
      "3": {
        "environments": [
          {
            "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
            "introduced_in": "sha256:35c102085707f703de2d9eaad8752d6fe1b8f02b5d2149f1d8357c9cc7fb7d0a",
            "distribution_id": "1",
            "repository_ids": ["1", "2"]
          }
        ]
      },
      "4": {
        "environments": [
          {
            "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
            "introduced_in": "sha256:35c102085707f703de2d9eaad8752d6fe1b8f02b5d2149f1d8357c9cc7fb7d0a",
            "distribution_id": "1",
            "repository_ids": ["1", "2"]
          }
        ]
      },
      "5": {
        "environments": [
          {
            "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
            "introduced_in": "sha256:35c102085707f703de2d9eaad8752d6fe1b8f02b5d2149f1d8357c9cc7fb7d0a",
            "distribution_id": "1",
            "repository_ids": ["1", "2"]
          }
        ]
      },
      "6": {
        "environments": [
          {
            "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
            "introduced_in": "sha256:35c102085707f703de2d9eaad8752d6fe1b8f02b5d2149f1d8357c9cc7fb7d0a",
            "distribution_id": "1",
            "repository_ids": ["1", "2"]
          }
        ]
      },
      "7": {
        "environments": [
          {
            "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
            "introduced_in": "sha256:35c102085707f703de2d9eaad8752d6fe1b8f02b5d2149f1d8357c9cc7fb7d0a",
            "distribution_id": "1",
            "repository_ids": ["1", "2"]
          }
        ]
      },
      "8": {
        "environments": [
          {
            "package_db": "python:usr/lib/python3.9/site-packages",
            "introduced_in": "sha256:9124cd5256c6d674f6b11a4d01fea8148259be1f66ca2cf9dfbaafc83c31874e",
            "distribution_id": "1"
          }
        ]
      }
    }
  }
}"#;

/// Parse the embedded sample report.
///
/// For tests and examples only: panics if the constant fails to parse.
pub fn index_report() -> IndexReport {
    parse(SAMPLE_INDEX_REPORT_JSON)
}

fn parse(json: &str) -> IndexReport {
    match loader::from_str(json) {
        Ok(report) => report,
        Err(err) => panic!("malformed sample index report: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_report_parses() {
        let report = index_report();
        assert!(report.success);
        assert_eq!(report.state, "IndexFinished");
        assert_eq!(report.contents.packages.len(), 8);
        assert_eq!(report.contents.distributions.len(), 1);
        assert_eq!(report.contents.repositories.len(), 2);
        assert_eq!(report.contents.environments.len(), 8);
        assert_eq!(report.layers().len(), 2);
    }

    #[test]
    fn every_package_has_an_environment() {
        let report = index_report();
        for package in &report.contents.packages {
            assert!(
                !report.environments(&package.id).is_empty(),
                "package {} has no environment",
                package.id
            );
        }
    }

    #[test]
    fn round_trip_is_idempotent() {
        let report = index_report();
        let json = serde_json::to_string(&report).unwrap();
        let reparsed: IndexReport = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, report);
    }

    #[test]
    #[should_panic(expected = "malformed sample index report")]
    fn truncated_sample_panics() {
        let truncated = &SAMPLE_INDEX_REPORT_JSON[..SAMPLE_INDEX_REPORT_JSON.len() / 2];
        parse(truncated);
    }

    #[test]
    #[should_panic(expected = "malformed sample index report")]
    fn corrupted_digest_panics() {
        let corrupted = SAMPLE_INDEX_REPORT_JSON.replace("sha256:", "sha256:zz");
        parse(&corrupted);
    }
}
