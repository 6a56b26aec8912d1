//! GitHub Snapshot Provider
//!
//! Builds a snapshot from the GitHub REST API: the pull request itself for
//! the body and base branch, and its paginated file list for modified files.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::GithubConfig;
use crate::providers::{RepoSlug, SnapshotProvider};
use crate::snapshot::PullRequestSnapshot;
use crate::{PolicyError, Result};

/// Files requested per page (GitHub maximum)
pub const FILES_PER_PAGE: usize = 100;

/// GitHub stops listing pull request files after 3000 entries
pub const MAX_FILE_PAGES: usize = 30;

/// File status counted as "modified"; added, removed and renamed files are not
pub const MODIFIED_STATUS: &str = "modified";

/// Subset of `GET /repos/{owner}/{repo}/pulls/{number}`
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestResponse {
    pub body: Option<String>,
    pub base: BaseRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseRef {
    #[serde(rename = "ref")]
    pub ref_name: String,
}

/// Entry of `GET /repos/{owner}/{repo}/pulls/{number}/files`
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestFile {
    pub filename: String,
    pub status: String,
}

/// GitHub pull request snapshot provider
///
/// Receives its HTTP client via constructor injection.
pub struct GithubSnapshotProvider {
    api_url: String,
    token: Option<String>,
    repo: RepoSlug,
    number: u64,
    timeout: Duration,
    http_client: Client,
}

impl GithubSnapshotProvider {
    pub fn new(
        config: &GithubConfig,
        repo: RepoSlug,
        number: u64,
        http_client: Client,
    ) -> Self {
        Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            repo,
            number,
            timeout: Duration::from_secs(config.timeout_secs),
            http_client,
        }
    }

    /// Create a provider with a client built from `config`
    pub fn from_config(config: &GithubConfig, repo: RepoSlug, number: u64) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(format!("pr-policy/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::new(config, repo, number, http_client))
    }

    pub fn pull_request_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_url, self.repo.owner, self.repo.name, self.number
        )
    }

    pub fn files_url(&self, page: usize) -> String {
        format!(
            "{}/files?per_page={FILES_PER_PAGE}&page={page}",
            self.pull_request_url()
        )
    }

    /// Assemble a snapshot from already fetched API payloads
    pub fn snapshot_from_parts(
        pull: PullRequestResponse,
        files: &[PullRequestFile],
    ) -> PullRequestSnapshot {
        PullRequestSnapshot::new(
            pull.body,
            files
                .iter()
                .filter(|f| f.status == MODIFIED_STATUS)
                .map(|f| f.filename.clone()),
            pull.base.ref_name,
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GitHub request");
        let mut request = self
            .http_client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .timeout(self.timeout);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                PolicyError::provider(
                    self.provider_name(),
                    format!("request timed out after {:?}", self.timeout),
                )
            } else {
                PolicyError::provider(self.provider_name(), format!("HTTP request failed: {e}"))
            }
        })?;

        self.check_and_parse(response).await
    }

    async fn check_and_parse<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PolicyError::provider(
                self.provider_name(),
                format!("{status}: {body}"),
            ));
        }
        Ok(response.json::<T>().await?)
    }

    async fn fetch_files(&self) -> Result<Vec<PullRequestFile>> {
        let mut files = Vec::new();
        for page in 1..=MAX_FILE_PAGES {
            let batch: Vec<PullRequestFile> = self.get_json(&self.files_url(page)).await?;
            let last_page = batch.len() < FILES_PER_PAGE;
            files.extend(batch);
            if last_page {
                break;
            }
        }
        debug!(count = files.len(), "Pull request files fetched");
        Ok(files)
    }
}

#[async_trait]
impl SnapshotProvider for GithubSnapshotProvider {
    async fn snapshot(&self) -> Result<PullRequestSnapshot> {
        let pull: PullRequestResponse = self.get_json(&self.pull_request_url()).await?;
        let files = self.fetch_files().await?;
        Ok(Self::snapshot_from_parts(pull, &files))
    }

    fn provider_name(&self) -> &str {
        "github"
    }
}
