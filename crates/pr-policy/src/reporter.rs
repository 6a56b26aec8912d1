//! Policy Report Generation
//!
//! Generates reports in multiple formats:
//! - JSON for CI integration
//! - Human-readable for terminal output
//! - Markdown summary for a GitHub Actions job summary

use chrono::Utc;
use serde::Serialize;

use crate::finding::{Finding, FindingCategory};
use crate::snapshot::PullRequestSnapshot;
use crate::Severity;

/// One finding with its rendered text, flattened for serialization
#[derive(Debug, Clone, Serialize)]
pub struct FindingEntry {
    pub id: String,
    pub category: FindingCategory,
    pub severity: Severity,
    pub message: String,
    pub details: Finding,
}

impl From<&Finding> for FindingEntry {
    fn from(finding: &Finding) -> Self {
        Self {
            id: finding.id().to_string(),
            category: finding.category(),
            severity: finding.severity(),
            message: finding.render(),
            details: finding.clone(),
        }
    }
}

/// Summary of a policy evaluation
#[derive(Debug, Clone, Serialize)]
pub struct PolicySummary {
    pub total_findings: usize,
    pub failure_count: usize,
    pub warning_count: usize,
    /// Whether the check passed (no blocking findings)
    pub passed: bool,
}

/// Policy report for one pull request snapshot
#[derive(Debug, Clone, Serialize)]
pub struct PolicyReport {
    /// Timestamp of the evaluation (RFC 3339)
    pub timestamp: String,
    pub base_ref: String,
    pub modified_file_count: usize,
    pub summary: PolicySummary,
    pub findings: Vec<FindingEntry>,
}

impl PolicyReport {
    pub fn new(snapshot: &PullRequestSnapshot, findings: &[Finding]) -> Self {
        let failure_count = findings
            .iter()
            .filter(|f| f.severity() == Severity::Error)
            .count();
        let warning_count = findings.len() - failure_count;

        Self {
            timestamp: Utc::now().to_rfc3339(),
            base_ref: snapshot.base_ref.clone(),
            modified_file_count: snapshot.modified_files.len(),
            summary: PolicySummary {
                total_findings: findings.len(),
                failure_count,
                warning_count,
                passed: failure_count == 0,
            },
            findings: findings.iter().map(FindingEntry::from).collect(),
        }
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &PolicyReport) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &PolicyReport) -> String {
        let mut output = String::new();

        output.push_str("=== Pull Request Policy Report ===\n\n");
        output.push_str(&format!("Timestamp: {}\n", report.timestamp));
        output.push_str(&format!("Base branch: {}\n", report.base_ref));
        output.push_str(&format!(
            "Modified files: {}\n\n",
            report.modified_file_count
        ));

        output.push_str("--- Summary ---\n");
        output.push_str(&format!(
            "Total Findings: {}\n",
            report.summary.total_findings
        ));
        output.push_str(&format!("  Failures: {}\n", report.summary.failure_count));
        output.push_str(&format!("  Warnings: {}\n\n", report.summary.warning_count));

        let status = if report.summary.passed {
            "PASSED"
        } else {
            "FAILED"
        };
        output.push_str(&format!("Status: {status}\n"));

        if !report.findings.is_empty() {
            output.push_str("\n--- Findings ---\n");
            for entry in &report.findings {
                output.push_str(&format!(
                    "  [{}] {} ({}): {}\n",
                    entry.severity, entry.id, entry.category, entry.message
                ));
            }
        }

        output
    }

    /// Generate CI summary (GitHub Actions job summary markdown)
    pub fn to_ci_summary(report: &PolicyReport) -> String {
        let mut output = String::new();

        output.push_str("## Pull Request Policy\n\n");

        if report.summary.passed {
            output.push_str("**Status:** :white_check_mark: PASSED\n\n");
        } else {
            output.push_str("**Status:** :x: FAILED\n\n");
        }

        if report.findings.is_empty() {
            output.push_str("No findings.\n");
            return output;
        }

        output.push_str("| | Finding |\n");
        output.push_str("|---|---|\n");
        for entry in &report.findings {
            let marker = match entry.severity {
                Severity::Error => ":no_entry_sign:",
                Severity::Warning => ":warning:",
            };
            output.push_str(&format!("| {marker} | {} |\n", entry.message));
        }

        output
    }
}
