//! Changelog categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of change a commit describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// New functionality.
    Added,
    /// Removed functionality.
    Removed,
    /// Bug fixes.
    Fixed,
    /// Changes to existing behavior.
    Changed,
    /// Soon-to-be removed functionality.
    Deprecated,
    /// Improvements to existing functionality.
    Improved,
    /// Anything no prefix matched.
    Uncategorized,
}

impl Category {
    /// Categories that are detected by prefix, in matching priority order.
    pub const PRIORITY: [Self; 6] = [
        Self::Added,
        Self::Removed,
        Self::Fixed,
        Self::Changed,
        Self::Deprecated,
        Self::Improved,
    ];

    /// Returns the lower-case message prefixes that select this category.
    #[must_use]
    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Added => &["add"],
            Self::Removed => &["remove", "delete"],
            Self::Fixed => &["fix", "bugfix"],
            Self::Changed => &["change", "update"],
            Self::Deprecated => &["deprecate"],
            Self::Improved => &["improve"],
            Self::Uncategorized => &[],
        }
    }

    /// Returns the header name used in the changelog.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "ADDED",
            Self::Removed => "REMOVED",
            Self::Fixed => "FIXED",
            Self::Changed => "CHANGED",
            Self::Deprecated => "DEPRECATED",
            Self::Improved => "IMPROVED",
            Self::Uncategorized => "UNCATEGORIZED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
