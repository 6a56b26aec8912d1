//! Package manifest change detection

use crate::config::ManifestRuleConfig;
use crate::finding::{Finding, FindingCategory};
use crate::rules::PolicyRule;
use crate::snapshot::PullRequestSnapshot;

/// Warns when a watched manifest path is among the modified files
///
/// Paths match exactly; `packages/app/package.json` is not `package.json`.
pub struct ManifestRule {
    watched_files: Vec<String>,
}

impl ManifestRule {
    pub fn new(config: &ManifestRuleConfig) -> Self {
        Self {
            watched_files: config.watched_files.clone(),
        }
    }
}

impl PolicyRule for ManifestRule {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::Manifest
    }

    fn check(&self, snapshot: &PullRequestSnapshot) -> Vec<Finding> {
        self.watched_files
            .iter()
            .filter(|path| snapshot.has_modified_file(path))
            .map(|path| Finding::PackageManifestChanged { path: path.clone() })
            .collect()
    }
}
