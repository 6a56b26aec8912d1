//! Shared test utilities for pr-policy tests

#![allow(dead_code)] // Test utilities may not all be used in every test file

use pr_policy::{Finding, PolicyChecker, PolicyConfig, PolicyRule, PullRequestSnapshot};

/// A body that satisfies every section rule
pub const COMPLETE_BODY: &str = "## Summary

Fixes a crash when the settings screen is opened twice.

## Changelog

[IOS] [FIXED] - Crash when reopening settings

## Test Plan

Opened settings twice on an iPhone simulator.";

pub fn snapshot(body: Option<&str>, files: &[&str], base_ref: &str) -> PullRequestSnapshot {
    PullRequestSnapshot::new(body.map(String::from), files.iter().copied(), base_ref)
}

/// Snapshot that produces no findings with the default policy
pub fn clean_snapshot() -> PullRequestSnapshot {
    snapshot(Some(COMPLETE_BODY), &["src/lib.rs"], "master")
}

pub fn default_checker() -> PolicyChecker {
    PolicyChecker::from_config(&PolicyConfig::default()).unwrap()
}

/// Pad `text` with ASCII filler until it is at least `len` characters long
pub fn padded(text: &str, len: usize) -> String {
    let mut body = text.to_string();
    while body.chars().count() < len {
        body.push_str(" filler");
    }
    body
}

pub fn ids(findings: &[Finding]) -> Vec<&'static str> {
    findings.iter().map(Finding::id).collect()
}

pub fn check_ids(rule: &dyn PolicyRule, snapshot: &PullRequestSnapshot) -> Vec<&'static str> {
    ids(&rule.check(snapshot))
}
