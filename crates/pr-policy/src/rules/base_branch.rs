//! Base branch policy
//!
//! PRs against the default branch pass silently. PRs against a stable
//! release branch need cherry-picking by a release maintainer, so they warn.
//! Anything else fails.

use crate::config::BaseBranchRuleConfig;
use crate::finding::{Finding, FindingCategory};
use crate::rules::PolicyRule;
use crate::snapshot::PullRequestSnapshot;

pub struct BaseBranchRule {
    default_branch: String,
    stable_marker: String,
}

impl BaseBranchRule {
    pub fn new(config: &BaseBranchRuleConfig) -> Self {
        Self {
            default_branch: config.default_branch.clone(),
            stable_marker: config.stable_marker.clone(),
        }
    }
}

impl PolicyRule for BaseBranchRule {
    fn name(&self) -> &'static str {
        "base_branch"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::BaseBranch
    }

    fn check(&self, snapshot: &PullRequestSnapshot) -> Vec<Finding> {
        let base_ref = &snapshot.base_ref;
        if *base_ref == self.default_branch {
            Vec::new()
        } else if base_ref.contains(&self.stable_marker) {
            vec![Finding::StableBaseBranch {
                base_ref: base_ref.clone(),
            }]
        } else {
            vec![Finding::UnexpectedBaseBranch {
                base_ref: base_ref.clone(),
            }]
        }
    }
}
