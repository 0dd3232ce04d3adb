use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FeedError;

pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// Group keys become filenames; anything outside `[a-z0-9]` turns into an
/// underscore.
pub fn sanitize_type(event_type: &str) -> String {
    event_type
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

pub fn feed_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("pogo-{name}.xml"))
}

/// Overwrites any previous run's file at the same path, creating the output
/// directory first if it does not exist yet.
pub fn publish(artifact: &Artifact) -> Result<(), FeedError> {
    if let Some(parent) = artifact.path.parent() {
        fs::create_dir_all(parent).map_err(|source| FeedError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&artifact.path, &artifact.content).map_err(|source| FeedError::Io {
        path: artifact.path.clone(),
        source,
    })
}
