//! Commit message classification.

use std::sync::LazyLock;

use regex::Regex;
use taglog_commit::Category;

static VERSION_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<message>.*\S)\s+\(v(?P<version>[^()\s]+)\)$").expect("invalid regex")
});

/// The result of classifying a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The detected category.
    pub category: Category,

    /// The subject line with any trailing `(vX.Y.Z)` marker removed.
    pub message: String,

    /// The version found in a trailing `(vX.Y.Z)` marker, without the `v`.
    pub version: Option<String>,
}

/// Classifies a commit subject line, as returned by
/// [`Commit::subject`](taglog_commit::Commit::subject).
///
/// Surrounding whitespace is ignored. The category is chosen by the first
/// matching prefix in [`Category::PRIORITY`] order, compared
/// case-insensitively; messages matching no prefix are
/// [`Category::Uncategorized`].
pub fn classify(subject: &str) -> Classification {
    let subject = subject.trim();

    let (message, version) = match VERSION_MARKER_RE.captures(subject) {
        Some(caps) => (
            caps["message"].to_string(),
            Some(caps["version"].to_string()),
        ),
        None => (subject.to_string(), None),
    };

    Classification {
        category: detect_category(&message),
        message,
        version,
    }
}

fn detect_category(message: &str) -> Category {
    let lower = message.to_lowercase();
    Category::PRIORITY
        .into_iter()
        .find(|category| {
            category
                .prefixes()
                .iter()
                .any(|prefix| lower.starts_with(prefix))
        })
        .unwrap_or(Category::Uncategorized)
}
