//! Snapshot Providers
//!
//! Providers build a `PullRequestSnapshot` from some external source before
//! any rule runs:
//! - `FileSnapshotProvider` reads a JSON snapshot from disk
//! - `GithubSnapshotProvider` queries the GitHub REST API

pub mod file;
pub mod github;

pub use file::FileSnapshotProvider;
pub use github::{GithubSnapshotProvider, PullRequestFile, PullRequestResponse};

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

use crate::snapshot::PullRequestSnapshot;
use crate::{PolicyError, Result};

/// Source of pull request metadata
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch the snapshot the rules will evaluate
    async fn snapshot(&self) -> Result<PullRequestSnapshot>;

    /// Get the name of this provider
    fn provider_name(&self) -> &str;
}

/// Repository identifier in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim().trim_end_matches(".git");
        let mut parts = raw.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if is_segment(owner) && is_segment(name) => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(PolicyError::InvalidConfig(format!(
                "repository must be in owner/name form, got '{raw}'"
            ))),
        }
    }
}

fn is_segment(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl FromStr for RepoSlug {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
