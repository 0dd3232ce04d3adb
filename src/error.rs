use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request to upstream failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("upstream body is not a JSON event array: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Why a single record was rejected. Recovered by dropping the record and
/// continuing with the rest of the batch.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("record has no name")]
    MissingName,

    #[error("record has no start time")]
    MissingStart,

    #[error("unparseable timestamp `{0}`")]
    BadTimestamp(String),

    #[error("start {start} lies after end {end}")]
    StartAfterEnd {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}
