//! Pull Request Policy Checks
//!
//! This crate inspects a pull request's metadata and reports advisory
//! (`warn`) or blocking (`fail`) outcomes:
//! - Description presence and length, plus a `## Summary` section
//! - `package.json` changes that need a manual import
//! - A `## Test Plan` section
//! - A changelog section with a well-formed `[CATEGORY] [TYPE] - Message` entry
//! - The base branch the pull request targets
//!
//! # Example
//!
//! ```ignore
//! use pr_policy::{PolicyChecker, PolicyConfig, PullRequestSnapshot, RecordingSink};
//!
//! let checker = PolicyChecker::from_config(&PolicyConfig::default())?;
//! let snapshot = PullRequestSnapshot::new(Some(body), ["src/lib.rs"], "master");
//!
//! let mut sink = RecordingSink::default();
//! checker.evaluate(&snapshot, &mut sink)?;
//! assert!(!sink.has_failures());
//! ```

#[macro_use]
pub mod finding_macro;
pub mod finding;

pub mod checker;
pub mod config;
pub mod logging;
pub mod providers;
pub mod reporter;
pub mod rules;
pub mod sink;
pub mod snapshot;

use thiserror::Error;

pub use checker::PolicyChecker;
pub use config::{
    BaseBranchRuleConfig, ChangelogRuleConfig, ConfigLoader, DescriptionRuleConfig,
    GithubConfig, LoggingConfig, ManifestRuleConfig, PolicyConfig, TestPlanRuleConfig,
};
pub use finding::{Finding, FindingCategory};
pub use providers::{FileSnapshotProvider, GithubSnapshotProvider, RepoSlug, SnapshotProvider};
pub use reporter::{PolicyReport, PolicySummary, Reporter};
pub use rules::{PolicyRule, RuleSet};
pub use sink::{
    ConsoleSink, CountingSink, GithubAnnotationSink, Outcome, RecordingSink, ReportSink,
};
pub use snapshot::PullRequestSnapshot;

/// Result type for policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Policy checker error types
///
/// Policy deviations are never errors; they are reported as findings.
/// These variants cover everything that stops an evaluation from running.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    #[error("Malformed pull request snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("{provider} provider error: {message}")]
    Provider { provider: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Report sink error: {0}")]
    Sink(String),
}

impl PolicyError {
    /// Create a provider error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

impl From<figment::Error> for PolicyError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Severity level for findings
///
/// `Error` findings are reported through `fail` and block the check;
/// `Warning` findings are reported through `warn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}
