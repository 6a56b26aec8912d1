//! Tests for the changelog presence and format rule

use crate::test_utils::{check_ids, snapshot};
use pr_policy::rules::ChangelogRule;
use pr_policy::{ChangelogRuleConfig, PolicyError};

fn rule() -> ChangelogRule {
    ChangelogRule::new(&ChangelogRuleConfig::default()).unwrap()
}

#[test]
fn absent_body_is_missing_changelog() {
    assert_eq!(check_ids(&rule(), &snapshot(None, &[], "master")), ["PRP005"]);
}

#[test]
fn body_without_section_is_missing_changelog_even_if_formatted() {
    let s = snapshot(Some("[GENERAL] [FIXED] - Fixed a crash"), &[], "master");
    assert_eq!(check_ids(&rule(), &s), ["PRP005"]);
}

#[test]
fn well_formed_entry_passes() {
    let body = "## Changelog\n\n[GENERAL] [FIXED] - Fixed a crash";
    assert!(check_ids(&rule(), &snapshot(Some(body), &[], "master")).is_empty());
}

#[test]
fn release_notes_marker_counts_as_section() {
    let body = "Release Notes:\n[ANDROID] [ADDED] - New toggle";
    assert!(check_ids(&rule(), &snapshot(Some(body), &[], "master")).is_empty());
}

#[test]
fn unknown_category_is_a_format_warning() {
    let body = "## Changelog\n[WEB] [FIXED] - x";
    assert_eq!(check_ids(&rule(), &snapshot(Some(body), &[], "master")), ["PRP006"]);
}

#[test]
fn unknown_type_is_a_format_warning() {
    let body = "## Changelog\n[IOS] [IMPROVED] - x";
    assert_eq!(check_ids(&rule(), &snapshot(Some(body), &[], "master")), ["PRP006"]);
}

#[test]
fn entry_matching_is_case_insensitive_and_tolerates_spacing() {
    let rule = rule();
    assert!(rule.is_formatted("[ios] [fixed] - lowercase tokens"));
    assert!(rule.is_formatted("[ GENERAL ][ CHANGED ]message without dash"));
    assert!(rule.is_formatted("[Android]   [Security] -   spaced out"));
    assert!(!rule.is_formatted("[GENERAL] FIXED - missing brackets"));
    assert!(!rule.is_formatted("GENERAL FIXED"));
}

#[test]
fn repeated_matching_is_stable() {
    let rule = rule();
    let body = "## Changelog\n[GENERAL] [FIXED] - Fixed a crash";
    let results: Vec<bool> = (0..4).map(|_| rule.is_formatted(body)).collect();
    assert_eq!(results, [true, true, true, true]);
}

#[test]
fn configured_tokens_replace_defaults() {
    let rule = ChangelogRule::new(&ChangelogRuleConfig {
        categories: vec!["WEB".to_string()],
        ..ChangelogRuleConfig::default()
    })
    .unwrap();
    assert!(rule.is_formatted("[WEB] [FIXED] - x"));
    assert!(!rule.is_formatted("[IOS] [FIXED] - x"));
}

#[test]
fn empty_type_list_is_invalid_config() {
    let result = ChangelogRule::new(&ChangelogRuleConfig {
        types: Vec::new(),
        ..ChangelogRuleConfig::default()
    });
    assert!(matches!(result, Err(PolicyError::InvalidConfig(_))));
}
