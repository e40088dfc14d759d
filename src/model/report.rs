use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::digest::Digest;

/// Slots in a normalized version vector. Fixed by the wire format.
pub const NORMALIZED_VERSION_SLOTS: usize = 10;

/// An index report: the record an indexer produces for one container
/// image manifest, describing every package discovered in its layers.
///
/// The JSON shape is an external contract. Serialization emits
/// snake_case field names; deserialization also accepts the camelCase
/// spellings produced by protobuf-JSON encoders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexReport {
    /// Opaque manifest hash ID the report was indexed under
    #[serde(alias = "hashId", skip_serializing_if = "String::is_empty")]
    pub hash_id: String,

    /// Indexer state, e.g. "IndexFinished". Free-form by contract.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,

    /// Whether indexing completed successfully
    pub success: bool,

    /// Indexer error message, when indexing failed
    #[serde(skip_serializing_if = "String::is_empty")]
    pub err: String,

    pub contents: Contents,
}

impl IndexReport {
    /// Look up a package by ID.
    pub fn package(&self, id: &str) -> Option<&Package> {
        self.contents.packages.iter().find(|p| p.id == id)
    }

    /// Environments recorded for a package, if any.
    pub fn environments(&self, package_id: &str) -> &[Environment] {
        self.contents
            .environments
            .get(package_id)
            .map(|list| list.environments.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct layer digests packages were introduced in.
    pub fn layers(&self) -> Vec<&Digest> {
        let mut layers: Vec<&Digest> = self
            .contents
            .environments
            .values()
            .flat_map(|list| &list.environments)
            .map(|env| &env.introduced_in)
            .collect();
        layers.sort_by_key(|d| d.to_string());
        layers.dedup();
        layers
    }
}

/// Everything discovered inside the image: packages, the distributions
/// and repositories they map to, and per-package environments keyed by
/// package ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contents {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Package>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub distributions: Vec<Distribution>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<Repository>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub environments: BTreeMap<String, EnvironmentList>,
}

/// A package found in the image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub id: String,

    pub name: String,

    pub version: String,

    #[serde(alias = "normalizedVersion", skip_serializing_if = "Option::is_none")]
    pub normalized_version: Option<NormalizedVersion>,

    /// Package kind, e.g. "binary" or "source"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// The source package this binary package was built from.
    /// A source package must not itself reference a source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Box<Package>>,

    /// Package database the package was found in,
    /// e.g. "sqlite:var/lib/rpm/rpmdb.sqlite"
    #[serde(alias = "packageDb", skip_serializing_if = "String::is_empty")]
    pub package_db: String,

    /// Hint tying the package to the repository it was installed from
    #[serde(alias = "repositoryHint", skip_serializing_if = "String::is_empty")]
    pub repository_hint: String,

    /// Module stream, for modular RPM content
    #[serde(skip_serializing_if = "String::is_empty")]
    pub module: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub arch: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub cpe: String,
}

/// Version normalized into a fixed-width vector for comparison,
/// tagged with the versioning scheme it was normalized under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedVersion {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind: String,

    pub v: Vec<i32>,
}

/// An OS distribution identified in the image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distribution {
    pub id: String,

    /// os-release ID, e.g. "rhel" or "alpine"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub did: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,

    #[serde(alias = "versionCodeName", skip_serializing_if = "String::is_empty")]
    pub version_code_name: String,

    #[serde(alias = "versionId", skip_serializing_if = "String::is_empty")]
    pub version_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub arch: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub cpe: String,

    #[serde(alias = "prettyName", skip_serializing_if = "String::is_empty")]
    pub pretty_name: String,
}

impl Distribution {
    /// The distribution version ID. Alpine scanners leave `version_id`
    /// unset, so it falls back to the plain version there.
    pub fn effective_version_id(&self) -> &str {
        if self.version_id.is_empty() && self.did == "alpine" {
            return &self.version;
        }
        &self.version_id
    }
}

/// A package repository (feed) referenced by ID from environments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub cpe: String,
}

/// Wrapper for the list of environments recorded per package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentList {
    pub environments: Vec<Environment>,
}

/// Where a package was discovered: which layer introduced it, which
/// package database it sat in, and which repositories served it.
///
/// `introduced_in` is required and strictly parsed; a malformed layer
/// digest fails deserialization of the whole report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(alias = "packageDb", default, skip_serializing_if = "String::is_empty")]
    pub package_db: String,

    #[serde(alias = "introducedIn")]
    pub introduced_in: Digest,

    #[serde(alias = "distributionId", default, skip_serializing_if = "String::is_empty")]
    pub distribution_id: String,

    #[serde(alias = "repositoryIds", default, skip_serializing_if = "Vec::is_empty")]
    pub repository_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYER: &str = "sha256:35c102085707f703de2d9eaad8752d6fe1b8f02b5d2149f1d8357c9cc7fb7d0a";

    fn environment() -> Environment {
        Environment {
            package_db: "sqlite:var/lib/rpm/rpmdb.sqlite".to_string(),
            introduced_in: LAYER.parse().unwrap(),
            distribution_id: "1".to_string(),
            repository_ids: vec!["1".to_string()],
        }
    }

    #[test]
    fn empty_object_parses_to_default() {
        let report: IndexReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report, IndexReport::default());
        assert!(report.contents.packages.is_empty());
    }

    #[test]
    fn camel_case_aliases_match_snake_case() {
        let snake = r#"{
            "hash_id": "/v4/containerimage/f1a3",
            "state": "IndexFinished",
            "success": true,
            "contents": {
                "packages": [{"id": "1", "name": "bash", "version": "5.1.8", "package_db": "sqlite:var/lib/rpm/rpmdb.sqlite"}],
                "environments": {"1": {"environments": [
                    {"package_db": "sqlite:var/lib/rpm/rpmdb.sqlite",
                     "introduced_in": "sha256:35c102085707f703de2d9eaad8752d6fe1b8f02b5d2149f1d8357c9cc7fb7d0a",
                     "repository_ids": ["1"]}
                ]}}
            }
        }"#;
        let camel = snake
            .replace("hash_id", "hashId")
            .replace("package_db", "packageDb")
            .replace("introduced_in", "introducedIn")
            .replace("repository_ids", "repositoryIds");

        let from_snake: IndexReport = serde_json::from_str(snake).unwrap();
        let from_camel: IndexReport = serde_json::from_str(&camel).unwrap();
        assert_eq!(from_snake, from_camel);
        assert_eq!(from_snake.contents.packages[0].name, "bash");
    }

    #[test]
    fn environment_requires_layer_digest() {
        let err = serde_json::from_str::<Environment>(r#"{"package_db": "var/lib/dpkg/status"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn layers_are_distinct_and_sorted() {
        let mut report = IndexReport::default();
        report
            .contents
            .environments
            .insert("1".to_string(), EnvironmentList { environments: vec![environment()] });
        report
            .contents
            .environments
            .insert("2".to_string(), EnvironmentList { environments: vec![environment()] });
        assert_eq!(report.layers().len(), 1);
    }

    #[test]
    fn alpine_version_id_fallback() {
        let dist = Distribution {
            id: "1".to_string(),
            did: "alpine".to_string(),
            version: "3.19".to_string(),
            ..Distribution::default()
        };
        assert_eq!(dist.effective_version_id(), "3.19");

        let rhel = Distribution {
            id: "2".to_string(),
            did: "rhel".to_string(),
            version: "8.9".to_string(),
            version_id: "8".to_string(),
            ..Distribution::default()
        };
        assert_eq!(rhel.effective_version_id(), "8");
    }
}
