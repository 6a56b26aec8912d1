//! Policy checker
//!
//! Runs the rule set against one snapshot and reports each finding to the
//! sink as soon as its rule has been evaluated.

use tracing::{debug, info, instrument};

use crate::config::PolicyConfig;
use crate::finding::Finding;
use crate::rules::RuleSet;
use crate::sink::ReportSink;
use crate::snapshot::PullRequestSnapshot;
use crate::{Result, Severity};

/// Evaluates pull request snapshots against the configured rules
pub struct PolicyChecker {
    rules: RuleSet,
}

impl PolicyChecker {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        Ok(Self::new(RuleSet::from_config(config)?))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate `snapshot`, reporting through `sink`.
    ///
    /// Fails fast on a malformed snapshot before any rule runs. A sink error
    /// stops the remaining rules and is returned as is.
    #[instrument(skip_all, fields(base_ref = %snapshot.base_ref))]
    pub fn evaluate(
        &self,
        snapshot: &PullRequestSnapshot,
        sink: &mut dyn ReportSink,
    ) -> Result<()> {
        snapshot.validate()?;

        let mut reported = 0usize;
        for rule in self.rules.iter() {
            let findings = rule.check(snapshot);
            debug!(rule = rule.name(), findings = findings.len(), "Rule evaluated");
            for finding in &findings {
                report(finding, sink)?;
            }
            reported += findings.len();
        }

        info!(rules = self.rules.len(), findings = reported, "Policy evaluation finished");
        Ok(())
    }

    /// Collect the findings `evaluate` would report, in the same order
    pub fn findings(&self, snapshot: &PullRequestSnapshot) -> Result<Vec<Finding>> {
        snapshot.validate()?;
        Ok(self
            .rules
            .iter()
            .flat_map(|rule| rule.check(snapshot))
            .collect())
    }
}

fn report(finding: &Finding, sink: &mut dyn ReportSink) -> Result<()> {
    let message = finding.render();
    match finding.severity() {
        Severity::Error => sink.fail(&message),
        Severity::Warning => sink.warn(&message),
    }
}
