use serde::{Deserialize, Serialize};

/// The package-manager family a package database belongs to.
///
/// Indexers prefix package DB paths with a scheme naming the database
/// format (`sqlite:var/lib/rpm/rpmdb.sqlite`, `nodejs:package.json`);
/// OS databases may also appear bare (`var/lib/dpkg/status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceType {
    Os,
    Go,
    Java,
    NodeJs,
    Python,
    Ruby,
    Dotnet,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Os => "OS",
            SourceType::Go => "Go",
            SourceType::Java => "Java",
            SourceType::NodeJs => "Node.js",
            SourceType::Python => "Python",
            SourceType::Ruby => "Ruby",
            SourceType::Dotnet => ".NET",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Split a package DB string into its source type and on-disk location.
///
/// Unknown schemes are not split: the whole string is returned as an OS
/// database location, since OS package DB paths may legally contain `:`.
pub fn parse_package_db(package_db: &str) -> (SourceType, &str) {
    let Some((scheme, location)) = package_db.split_once(':') else {
        return (SourceType::Os, package_db);
    };
    match scheme {
        "sqlite" | "bdb" | "ndb" => (SourceType::Os, location),
        "go" => (SourceType::Go, location),
        "file" | "jar" | "maven" => (SourceType::Java, location),
        "nodejs" => (SourceType::NodeJs, location),
        "python" => (SourceType::Python, location),
        "ruby" => (SourceType::Ruby, location),
        "dotnet" => (SourceType::Dotnet, location),
        _ => (SourceType::Os, package_db),
    }
}
