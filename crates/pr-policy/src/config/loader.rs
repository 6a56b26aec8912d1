//! Configuration loader
//!
//! Handles loading configuration from default values, a TOML file and
//! environment variables, using Figment.

use crate::config::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME, PolicyConfig};
use crate::logging::{log_config_loaded, parse_log_level};
use crate::{PolicyError, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `PolicyConfig::default()`
    /// 2. TOML configuration file (explicit path, or `.pr-policy.toml` in the working directory)
    /// 3. Environment variables with prefix (e.g., `PR_POLICY__DESCRIPTION__MIN_LENGTH`)
    ///
    /// An explicitly requested file that does not exist is an error.
    pub fn load(&self) -> Result<PolicyConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(PolicyConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                log_config_loaded(config_path, false);
                return Err(PolicyError::InvalidConfig(format!(
                    "configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(Env::prefixed(&self.env_prefix).split("__"));

        let config: PolicyConfig = figment.extract()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Serialize a configuration as TOML
    pub fn to_toml(config: &PolicyConfig) -> Result<String> {
        toml::to_string_pretty(config)
            .map_err(|e| PolicyError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let candidate = env::current_dir().ok()?.join(DEFAULT_CONFIG_FILENAME);
        candidate.exists().then_some(candidate)
    }
}

/// Validate configuration values
pub fn validate_config(config: &PolicyConfig) -> Result<()> {
    if config.description.min_length == 0 {
        return Err(invalid("description.min_length must be greater than 0"));
    }
    if config.description.summary_heading.trim().is_empty() {
        return Err(invalid("description.summary_heading cannot be empty"));
    }
    if config.test_plan.heading.trim().is_empty() {
        return Err(invalid("test_plan.heading cannot be empty"));
    }
    if config.changelog.section_markers.iter().all(|m| m.trim().is_empty()) {
        return Err(invalid("changelog.section_markers needs at least one marker"));
    }
    if config.base_branch.default_branch.trim().is_empty() {
        return Err(invalid("base_branch.default_branch cannot be empty"));
    }
    if config.base_branch.stable_marker.is_empty() {
        return Err(invalid("base_branch.stable_marker cannot be empty"));
    }
    if config.github.timeout_secs == 0 {
        return Err(invalid("github.timeout_secs cannot be 0"));
    }
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn invalid(message: &str) -> PolicyError {
    PolicyError::InvalidConfig(message.to_string())
}
