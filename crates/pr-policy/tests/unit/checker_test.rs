//! Tests for the policy checker: ordering, sink dispatch and error handling

use crate::test_utils::{COMPLETE_BODY, clean_snapshot, default_checker, ids, snapshot};
use pr_policy::{
    Outcome, PolicyChecker, PolicyConfig, PolicyError, PullRequestSnapshot, RecordingSink,
    ReportSink, Result,
};

#[test]
fn clean_snapshot_reports_nothing() {
    let mut sink = RecordingSink::default();
    default_checker().evaluate(&clean_snapshot(), &mut sink).unwrap();
    assert!(sink.messages().is_empty());
}

#[test]
fn empty_snapshot_reports_every_rule_in_order() {
    let findings = default_checker()
        .findings(&snapshot(None, &["package.json"], "feature/x"))
        .unwrap();
    assert_eq!(
        ids(&findings),
        ["PRP001", "PRP003", "PRP004", "PRP005", "PRP008"]
    );
}

#[test]
fn severity_selects_warn_or_fail() {
    let mut sink = RecordingSink::default();
    default_checker()
        .evaluate(&snapshot(None, &[], "0.62-stable"), &mut sink)
        .unwrap();

    let outcomes: Vec<Outcome> = sink.messages().iter().map(|(o, _)| *o).collect();
    assert_eq!(
        outcomes,
        [Outcome::Fail, Outcome::Warn, Outcome::Warn, Outcome::Warn]
    );
    assert!(sink.has_failures());
    assert_eq!(
        sink.failures().next(),
        Some(":grey_question: This pull request needs a description.")
    );
}

#[test]
fn evaluate_and_findings_agree() {
    let checker = default_checker();
    let s = snapshot(Some("short"), &["package.json"], "0.62-stable");

    let mut sink = RecordingSink::default();
    checker.evaluate(&s, &mut sink).unwrap();
    let rendered: Vec<String> = checker
        .findings(&s)
        .unwrap()
        .iter()
        .map(|f| f.render())
        .collect();
    let reported: Vec<String> = sink.messages().iter().map(|(_, m)| m.clone()).collect();

    assert_eq!(reported, rendered);
}

#[test]
fn evaluating_twice_yields_identical_messages() {
    let checker = default_checker();
    let body = format!("{COMPLETE_BODY}\n\n## Changelog\n[WEB] [FIXED] - x");
    for s in [
        clean_snapshot(),
        snapshot(Some(&body), &["package.json"], "0.62-stable"),
        snapshot(Some("## changelog [GENERAL] [FIXED] - Fixed a crash"), &[], "master"),
    ] {
        let mut first = RecordingSink::default();
        let mut second = RecordingSink::default();
        checker.evaluate(&s, &mut first).unwrap();
        checker.evaluate(&s, &mut second).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn empty_base_ref_fails_fast() {
    let mut sink = RecordingSink::default();
    let err = default_checker()
        .evaluate(&snapshot(None, &[], "  "), &mut sink)
        .unwrap_err();
    assert!(matches!(err, PolicyError::MalformedSnapshot(_)));
    assert!(sink.messages().is_empty());

    let snapshot: PullRequestSnapshot = PullRequestSnapshot::default();
    assert!(default_checker().findings(&snapshot).is_err());
}

/// Sink that accepts `limit` messages and then fails
struct FlakySink {
    accepted: usize,
    limit: usize,
}

impl ReportSink for FlakySink {
    fn warn(&mut self, _message: &str) -> Result<()> {
        self.accept()
    }

    fn fail(&mut self, _message: &str) -> Result<()> {
        self.accept()
    }
}

impl FlakySink {
    fn accept(&mut self) -> Result<()> {
        if self.accepted == self.limit {
            return Err(PolicyError::Sink("host unavailable".to_string()));
        }
        self.accepted += 1;
        Ok(())
    }
}

#[test]
fn sink_error_stops_evaluation_and_propagates() {
    let mut sink = FlakySink {
        accepted: 0,
        limit: 2,
    };
    let err = default_checker()
        .evaluate(&snapshot(None, &["package.json"], "feature/x"), &mut sink)
        .unwrap_err();
    assert!(matches!(err, PolicyError::Sink(_)));
    assert_eq!(sink.accepted, 2);
}

#[test]
fn disabled_rules_are_skipped() {
    let mut config = PolicyConfig::default();
    config.changelog.enabled = false;
    config.base_branch.enabled = false;
    let checker = PolicyChecker::from_config(&config).unwrap();

    assert_eq!(checker.rules().len(), 3);
    let findings = checker.findings(&snapshot(None, &[], "feature/x")).unwrap();
    assert_eq!(ids(&findings), ["PRP001", "PRP004"]);
}
