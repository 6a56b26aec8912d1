//! JSON file snapshot provider

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use crate::providers::SnapshotProvider;
use crate::snapshot::PullRequestSnapshot;
use crate::{PolicyError, Result};

/// Reads a snapshot serialized as JSON:
///
/// ```json
/// { "body": "## Summary ...", "modified_files": ["package.json"], "base_ref": "master" }
/// ```
pub struct FileSnapshotProvider {
    path: PathBuf,
}

impl FileSnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotProvider for FileSnapshotProvider {
    async fn snapshot(&self) -> Result<PullRequestSnapshot> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PolicyError::provider(
                self.provider_name(),
                format!("failed to read {}: {e}", self.path.display()),
            )
        })?;
        let snapshot: PullRequestSnapshot = serde_json::from_str(&raw)?;
        debug!(
            path = %self.path.display(),
            files = snapshot.modified_files.len(),
            "Snapshot loaded from file"
        );
        Ok(snapshot)
    }

    fn provider_name(&self) -> &str {
        "file"
    }
}
