//! Finding Definition Macro
//!
//! Provides a declarative macro for defining the finding enum with
//! automatic accessor implementations.
//!
//! # Example
//!
//! ```ignore
//! define_findings! {
//!     pub enum Finding {
//!         #[finding(
//!             id = "PRP003",
//!             category = Manifest,
//!             severity = Warning,
//!             title = ":lock: package.json",
//!             idea = "Changes were made to package.json."
//!         )]
//!         PackageManifestChanged {
//!             path: String,
//!         },
//!     }
//! }
//! ```

/// Macro to define finding enums with automatic accessor implementations
///
/// This macro generates:
/// - The enum with all variants (`Debug`, `Clone`, `PartialEq`, `Serialize`)
/// - `id`, `category`, `severity`, `title`, `idea` and `render` methods
/// - `Display` implementation (`[ID] title`)
///
/// # Parameters
///
/// - `$vis`: Visibility modifier (pub, pub(crate), etc.)
/// - `$name`: Name of the enum
/// - For each variant:
///   - `id`: Unique finding identifier (e.g., "PRP001")
///   - `category`: A `FindingCategory` variant name
///   - `severity`: Error or Warning
///   - `title`: Short headline shown to the author
///   - `idea` (optional): Explanation appended to the title when rendered
///   - Fields carry the data that triggered the finding; they are serialized
///     into reports but never interpolated into the rendered text
#[macro_export]
macro_rules! define_findings {
    (
        $vis:vis enum $name:ident {
            $(
                #[finding(
                    id = $id:literal,
                    category = $category:ident,
                    severity = $severity:ident,
                    title = $title:literal
                    $(, idea = $idea:expr)?
                )]
                $variant:ident {
                    $( $field:ident : $field_ty:ty ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
        $vis enum $name {
            $( $variant { $( $field: $field_ty ),* } ),*
        }

        impl $name {
            /// Unique finding ID (e.g., "PRP001")
            pub fn id(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $id ),*
                }
            }

            /// Category for grouping in reports
            pub fn category(&self) -> $crate::finding::FindingCategory {
                match self {
                    $( Self::$variant { .. } => $crate::finding::FindingCategory::$category ),*
                }
            }

            /// Severity level; `Error` is reported through `fail`
            pub fn severity(&self) -> $crate::Severity {
                match self {
                    $( Self::$variant { .. } => $crate::Severity::$severity ),*
                }
            }

            /// Short headline
            pub fn title(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $title ),*
                }
            }

            /// Explanation shown after the title, if any
            pub fn idea(&self) -> Option<&'static str> {
                match self {
                    $( Self::$variant { .. } => define_findings!(@idea $($idea)?) ),*
                }
            }

            /// Text handed to a report sink: `"{title} - <i>{idea}</i>"`
            pub fn render(&self) -> String {
                match self.idea() {
                    Some(idea) => format!("{} - <i>{}</i>", self.title(), idea),
                    None => self.title().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "[{}] {}", self.id(), self.title())
            }
        }
    };

    (@idea $idea:expr) => { Some($idea) };
    (@idea) => { None };
}
