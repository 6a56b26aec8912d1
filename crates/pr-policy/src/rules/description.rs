//! Description presence/length validation
//!
//! A missing or short body fails. Otherwise a body without a summary
//! section only warns. The two outcomes are mutually exclusive.

use crate::config::DescriptionRuleConfig;
use crate::finding::{Finding, FindingCategory};
use crate::rules::PolicyRule;
use crate::snapshot::PullRequestSnapshot;

pub struct DescriptionRule {
    min_length: usize,
    summary_heading: String,
}

impl DescriptionRule {
    pub fn new(config: &DescriptionRuleConfig) -> Self {
        Self {
            min_length: config.min_length,
            summary_heading: config.summary_heading.to_lowercase(),
        }
    }
}

impl PolicyRule for DescriptionRule {
    fn name(&self) -> &'static str {
        "description"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::Description
    }

    fn check(&self, snapshot: &PullRequestSnapshot) -> Vec<Finding> {
        let length = snapshot.body_len();
        let Some(body) = snapshot.body_lowercase().filter(|_| length >= self.min_length) else {
            return vec![Finding::MissingDescription {
                length,
                min_length: self.min_length,
            }];
        };

        if body.contains(&self.summary_heading) {
            Vec::new()
        } else {
            vec![Finding::MissingSummary {
                heading: self.summary_heading.clone(),
            }]
        }
    }
}
