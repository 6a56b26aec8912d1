//! Changelog presence and format validation
//!
//! A changelog entry looks like `[CATEGORY] [TYPE] - Message`. The pattern
//! captures the category, the type and the message.

use regex::Regex;

use crate::config::ChangelogRuleConfig;
use crate::finding::{Finding, FindingCategory};
use crate::rules::PolicyRule;
use crate::snapshot::PullRequestSnapshot;
use crate::{PolicyError, Result};

pub struct ChangelogRule {
    section_markers: Vec<String>,
    entry_pattern: Regex,
}

impl ChangelogRule {
    pub fn new(config: &ChangelogRuleConfig) -> Result<Self> {
        let section_markers = config
            .section_markers
            .iter()
            .map(|m| m.trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();

        Ok(Self {
            section_markers,
            entry_pattern: build_entry_pattern(&config.categories, &config.types)?,
        })
    }

    /// Whether the lowercased body mentions any changelog section marker
    fn has_section(&self, snapshot: &PullRequestSnapshot) -> bool {
        snapshot.body_lowercase().is_some_and(|body| {
            self.section_markers
                .iter()
                .any(|marker| body.contains(marker.as_str()))
        })
    }

    /// Whether the raw body contains a well-formed entry.
    /// `is_match` keeps no position between calls.
    pub fn is_formatted(&self, body: &str) -> bool {
        self.entry_pattern.is_match(body)
    }
}

impl PolicyRule for ChangelogRule {
    fn name(&self) -> &'static str {
        "changelog"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::Changelog
    }

    fn check(&self, snapshot: &PullRequestSnapshot) -> Vec<Finding> {
        if !self.has_section(snapshot) {
            return vec![Finding::MissingChangelog {}];
        }

        let body = snapshot.body.as_deref().unwrap_or_default();
        if self.is_formatted(body) {
            Vec::new()
        } else {
            vec![Finding::ChangelogFormat {}]
        }
    }
}

fn build_entry_pattern(categories: &[String], types: &[String]) -> Result<Regex> {
    let categories = alternation("changelog.categories", categories)?;
    let types = alternation("changelog.types", types)?;
    let pattern = format!(
        r"(?i)\[\s?({categories})\s?\]\s*?\[\s?({types})\s?\]\s*?-?\s*?(.*)"
    );
    Regex::new(&pattern).map_err(|e| PolicyError::InvalidRegex(e.to_string()))
}

fn alternation(field: &str, tokens: &[String]) -> Result<String> {
    let escaped: Vec<String> = tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(regex::escape)
        .collect();
    if escaped.is_empty() {
        return Err(PolicyError::InvalidConfig(format!(
            "{field} needs at least one token"
        )));
    }
    Ok(escaped.join("|"))
}
