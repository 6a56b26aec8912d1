//! Policy Rules
//!
//! Each rule inspects the same immutable snapshot and returns zero or more
//! findings. Rules never see each other's outcomes.

pub mod base_branch;
pub mod changelog;
pub mod description;
pub mod manifest;
pub mod test_plan;

pub use base_branch::BaseBranchRule;
pub use changelog::ChangelogRule;
pub use description::DescriptionRule;
pub use manifest::ManifestRule;
pub use test_plan::TestPlanRule;

use crate::config::PolicyConfig;
use crate::finding::{Finding, FindingCategory};
use crate::snapshot::PullRequestSnapshot;
use crate::Result;

/// A single policy check over a pull request snapshot
pub trait PolicyRule: Send + Sync {
    /// Stable rule name used in logs and `rules` listings
    fn name(&self) -> &'static str;

    /// Category of every finding this rule emits
    fn category(&self) -> FindingCategory;

    /// Evaluate the rule; must not depend on previous evaluations
    fn check(&self, snapshot: &PullRequestSnapshot) -> Vec<Finding>;
}

/// Ordered collection of enabled rules
pub struct RuleSet {
    rules: Vec<Box<dyn PolicyRule>>,
}

impl RuleSet {
    /// Build the enabled rules in their fixed evaluation order:
    /// description, manifest, test plan, changelog, base branch
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        let mut rules: Vec<Box<dyn PolicyRule>> = Vec::with_capacity(5);

        if config.description.enabled {
            rules.push(Box::new(DescriptionRule::new(&config.description)));
        }
        if config.manifest.enabled {
            rules.push(Box::new(ManifestRule::new(&config.manifest)));
        }
        if config.test_plan.enabled {
            rules.push(Box::new(TestPlanRule::new(&config.test_plan)));
        }
        if config.changelog.enabled {
            rules.push(Box::new(ChangelogRule::new(&config.changelog)?));
        }
        if config.base_branch.enabled {
            rules.push(Box::new(BaseBranchRule::new(&config.base_branch)));
        }

        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PolicyRule> {
        self.rules.iter().map(AsRef::as_ref)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
