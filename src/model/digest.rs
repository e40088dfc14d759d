use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha512};
use thiserror::Error;

/// Digest algorithms accepted in layer references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha256,
    Sha512,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Expected checksum length in hex characters
    fn checksum_len(&self) -> usize {
        match self {
            Algorithm::Sha256 => 64,
            Algorithm::Sha512 => 128,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("digest {0:?} does not match the `algorithm:hex` form")]
    Malformed(String),

    #[error("unsupported digest algorithm {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("{algorithm} checksum must be {expected} hex characters, got {actual}")]
    ChecksumLength {
        algorithm: Algorithm,
        expected: usize,
        actual: usize,
    },
}

/// A content-addressable digest, e.g. a layer diff ID like
/// `sha256:9124cd52…`. Parsing is strict: unknown algorithms and
/// wrong-length checksums are rejected, so a `Digest` held in a report
/// is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: Algorithm,
    checksum: String,
}

fn digest_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([a-z0-9]+):([0-9a-fA-F]+)$").unwrap())
}

impl Digest {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Lowercase hex checksum, without the algorithm prefix
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Derive a manifest digest from an arbitrary hash ID by hashing it
    /// with SHA-512. Hash IDs are opaque strings, so this is how an
    /// indexer turns one into a digest it can address manifests by.
    pub fn of_hash_id(hash_id: &str) -> Self {
        let mut hasher = Sha512::new();
        hasher.update(hash_id.as_bytes());
        Digest {
            algorithm: Algorithm::Sha512,
            checksum: format!("{:x}", hasher.finalize()),
        }
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = digest_pattern()
            .captures(s)
            .ok_or_else(|| DigestError::Malformed(s.to_string()))?;
        let algorithm = match &caps[1] {
            "sha256" => Algorithm::Sha256,
            "sha512" => Algorithm::Sha512,
            other => return Err(DigestError::UnsupportedAlgorithm(other.to_string())),
        };
        let checksum = &caps[2];
        if checksum.len() != algorithm.checksum_len() {
            return Err(DigestError::ChecksumLength {
                algorithm,
                expected: algorithm.checksum_len(),
                actual: checksum.len(),
            });
        }
        Ok(Digest {
            algorithm,
            checksum: checksum.to_ascii_lowercase(),
        })
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.checksum)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
