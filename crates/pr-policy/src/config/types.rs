//! Configuration types
//!
//! Defaults reproduce the policy exactly as the rules were first written;
//! every field can be overridden from TOML or the environment.

use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub description: DescriptionRuleConfig,
    pub manifest: ManifestRuleConfig,
    pub test_plan: TestPlanRuleConfig,
    pub changelog: ChangelogRuleConfig,
    pub base_branch: BaseBranchRuleConfig,
    pub logging: LoggingConfig,
    pub github: GithubConfig,
}

/// Description presence/length rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionRuleConfig {
    pub enabled: bool,
    /// Bodies shorter than this (in UTF-16 code units) fail
    pub min_length: usize,
    /// Lowercase substring that marks the summary section
    pub summary_heading: String,
}

impl Default for DescriptionRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_length: 50,
            summary_heading: "## summary".to_string(),
        }
    }
}

/// Package manifest change rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestRuleConfig {
    pub enabled: bool,
    /// Exact paths whose modification needs a manual import
    pub watched_files: Vec<String>,
}

impl Default for ManifestRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            watched_files: vec!["package.json".to_string()],
        }
    }
}

/// Test plan presence rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestPlanRuleConfig {
    pub enabled: bool,
    pub heading: String,
}

impl Default for TestPlanRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            heading: "## test plan".to_string(),
        }
    }
}

/// Changelog presence and format rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogRuleConfig {
    pub enabled: bool,
    /// Lowercase substrings, any of which marks a changelog section
    pub section_markers: Vec<String>,
    /// Accepted `[CATEGORY]` tokens (matched case-insensitively)
    pub categories: Vec<String>,
    /// Accepted `[TYPE]` tokens (matched case-insensitively)
    pub types: Vec<String>,
}

impl Default for ChangelogRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            section_markers: vec!["## changelog".to_string(), "release notes".to_string()],
            categories: ["ANDROID", "GENERAL", "IOS"]
                .into_iter()
                .map(String::from)
                .collect(),
            types: [
                "ADDED",
                "CHANGED",
                "DEPRECATED",
                "REMOVED",
                "FIXED",
                "SECURITY",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Base branch policy rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseBranchRuleConfig {
    pub enabled: bool,
    /// The only branch PRs are expected to target
    pub default_branch: String,
    /// Substring identifying release branches (warned, not failed)
    pub stable_marker: String,
}

impl Default for BaseBranchRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_branch: "master".to_string(),
            stable_marker: "-stable".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
        }
    }
}

/// GitHub REST API access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}
