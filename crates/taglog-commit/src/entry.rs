//! Classified changelog entry.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Category;
use crate::commit::DATE_FORMAT;

/// A commit after classification and version resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    /// The detected category.
    pub category: Category,

    /// The single-line message, without any inline version marker.
    pub message: String,

    /// The short commit hash.
    pub short_hash: String,

    /// The commit date.
    pub date: DateTime<Utc>,

    version: String,
}

impl ClassifiedEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(
        category: Category,
        message: impl Into<String>,
        version: impl Into<String>,
        short_hash: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            short_hash: short_hash.into(),
            date,
            version: version.into(),
        }
    }

    /// Returns the resolved version label.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Replaces the version label, e.g. with the one resolved from tags.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    /// Formats the commit date the way changelog headers show it.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Verbose one-line form: `#<hash> <version> <message> (<date>) [<CATEGORY>]`.
impl fmt::Display for ClassifiedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} ({}) [{}]",
            self.short_hash,
            self.version,
            self.message,
            self.display_date(),
            self.category
        )
    }
}
