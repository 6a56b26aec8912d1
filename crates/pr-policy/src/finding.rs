//! Policy Findings
//!
//! Every rule outcome is a `Finding`. Severity decides whether the sink
//! receives it through `warn` or `fail`.

use serde::Serialize;
use std::fmt::Display;

/// Category of finding for grouping in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FindingCategory {
    /// Description presence, length and summary section
    Description,
    /// Package manifest changes
    Manifest,
    /// Test plan section
    TestPlan,
    /// Changelog section and entry format
    Changelog,
    /// Base branch targeting
    BaseBranch,
}

impl Display for FindingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Description => write!(f, "Description"),
            Self::Manifest => write!(f, "Manifest"),
            Self::TestPlan => write!(f, "Test Plan"),
            Self::Changelog => write!(f, "Changelog"),
            Self::BaseBranch => write!(f, "Base Branch"),
        }
    }
}

macro_rules! changelog_instructions {
    () => {
        "A changelog entry has the following format: [`[CATEGORY] [TYPE] - Message`](http://facebook.github.io/react-native/docs/contributing#changelog)."
    };
}

define_findings! {
    pub enum Finding {
        #[finding(
            id = "PRP001",
            category = Description,
            severity = Error,
            title = ":grey_question: This pull request needs a description."
        )]
        MissingDescription {
            length: usize,
            min_length: usize,
        },

        #[finding(
            id = "PRP002",
            category = Description,
            severity = Warning,
            title = ":clipboard: Missing Summary",
            idea = "Can you add a Summary? To do so, add a \"## Summary\" section to your PR description. This is a good place to explain the motivation for making this change."
        )]
        MissingSummary {
            heading: String,
        },

        #[finding(
            id = "PRP003",
            category = Manifest,
            severity = Warning,
            title = ":lock: package.json",
            idea = "Changes were made to package.json. This will require a manual import by a Facebook employee."
        )]
        PackageManifestChanged {
            path: String,
        },

        #[finding(
            id = "PRP004",
            category = TestPlan,
            severity = Warning,
            title = ":clipboard: Missing Test Plan",
            idea = "Can you add a Test Plan? To do so, add a \"## Test Plan\" section to your PR description. A Test Plan lets us know how these changes were tested."
        )]
        MissingTestPlan {
            heading: String,
        },

        #[finding(
            id = "PRP005",
            category = Changelog,
            severity = Warning,
            title = ":clipboard: Missing Changelog",
            idea = concat!(
                "Can you add a Changelog? To do so, add a \"## Changelog\" section to your PR description. ",
                changelog_instructions!()
            )
        )]
        MissingChangelog {},

        #[finding(
            id = "PRP006",
            category = Changelog,
            severity = Warning,
            title = ":clipboard: Changelog Format",
            idea = concat!("Did you include a Changelog? ", changelog_instructions!())
        )]
        ChangelogFormat {},

        #[finding(
            id = "PRP007",
            category = BaseBranch,
            severity = Warning,
            title = ":grey_question: Base Branch",
            idea = "The base branch for this PR is something other than `master`. Are you sure you want to merge these changes into a stable release? If you are interested in backporting updates to an older release, the suggested approach is to land those changes on `master` first and then cherry-pick the commits into the branch for that release. The [Releases Guide](https://github.com/facebook/react-native/blob/master/Releases.md) has more information."
        )]
        StableBaseBranch {
            base_ref: String,
        },

        #[finding(
            id = "PRP008",
            category = BaseBranch,
            severity = Error,
            title = ":exclamation: Base Branch",
            idea = "The base branch for this PR is something other than `master`. [Are you sure you want to target something other than the `master` branch?](http://facebook.github.io/react-native/docs/contributing.html#pull-requests)"
        )]
        UnexpectedBaseBranch {
            base_ref: String,
        },
    }
}
