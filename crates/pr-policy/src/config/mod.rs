//! Configuration Module
//!
//! Provides file-based configuration for pr-policy, allowing projects to
//! tune rule thresholds via `.pr-policy.toml` and `PR_POLICY__*` variables.

pub mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BaseBranchRuleConfig, ChangelogRuleConfig, DescriptionRuleConfig, GithubConfig,
    LoggingConfig, ManifestRuleConfig, PolicyConfig, TestPlanRuleConfig,
};

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = ".pr-policy.toml";

/// Environment variable prefix; nested keys are separated by `__`
pub const CONFIG_ENV_PREFIX: &str = "PR_POLICY__";
