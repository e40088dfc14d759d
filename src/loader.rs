use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::IndexReport;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing index report: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse an index report from a JSON string.
pub fn from_str(json: &str) -> Result<IndexReport, ReportError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse an index report from a reader.
pub fn from_reader(reader: impl Read) -> Result<IndexReport, ReportError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load an index report from a JSON file on disk.
pub fn from_file(path: &Path) -> Result<IndexReport, ReportError> {
    let file = File::open(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(BufReader::new(file))
}
