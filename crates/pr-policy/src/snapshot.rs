//! Pull request metadata snapshot
//!
//! The snapshot is built once per invocation by a provider and stays
//! immutable while the rules run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::{PolicyError, Result};

/// Read-only view of the pull request metadata the rules inspect
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PullRequestSnapshot {
    /// PR description; `None` when the host reports no body at all
    #[serde(default)]
    pub body: Option<String>,
    /// Paths of files modified by the PR
    #[serde(default, alias = "modifiedFiles")]
    pub modified_files: BTreeSet<String>,
    /// Branch the PR targets
    #[serde(alias = "baseRef")]
    pub base_ref: String,
}

impl PullRequestSnapshot {
    pub fn new<I, S>(body: Option<String>, modified_files: I, base_ref: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            body,
            modified_files: modified_files.into_iter().map(Into::into).collect(),
            base_ref: base_ref.into(),
        }
    }

    /// Lowercased body, or `None` when the body is absent
    pub fn body_lowercase(&self) -> Option<String> {
        self.body.as_deref().map(str::to_lowercase)
    }

    /// Body length in UTF-16 code units, the unit the host reports;
    /// an absent body counts as zero
    pub fn body_len(&self) -> usize {
        self.body.as_deref().map_or(0, |b| b.encode_utf16().count())
    }

    pub fn has_modified_file(&self, path: &str) -> bool {
        self.modified_files.contains(path)
    }

    /// Reject snapshots the rules cannot evaluate meaningfully
    pub fn validate(&self) -> Result<()> {
        if self.base_ref.trim().is_empty() {
            return Err(PolicyError::MalformedSnapshot(
                "base ref is missing or empty".to_string(),
            ));
        }
        Ok(())
    }
}
