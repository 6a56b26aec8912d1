//! Test plan presence

use crate::config::TestPlanRuleConfig;
use crate::finding::{Finding, FindingCategory};
use crate::rules::PolicyRule;
use crate::snapshot::PullRequestSnapshot;

/// Warns when the body lacks a test plan heading.
/// An absent body lacks it too; there is no separate fail path here.
pub struct TestPlanRule {
    heading: String,
}

impl TestPlanRule {
    pub fn new(config: &TestPlanRuleConfig) -> Self {
        Self {
            heading: config.heading.to_lowercase(),
        }
    }
}

impl PolicyRule for TestPlanRule {
    fn name(&self) -> &'static str {
        "test_plan"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::TestPlan
    }

    fn check(&self, snapshot: &PullRequestSnapshot) -> Vec<Finding> {
        let has_test_plan = snapshot
            .body_lowercase()
            .is_some_and(|body| body.contains(&self.heading));

        if has_test_plan {
            Vec::new()
        } else {
            vec![Finding::MissingTestPlan {
                heading: self.heading.clone(),
            }]
        }
    }
}
