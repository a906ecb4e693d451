//! Commit type as read from Git.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of hex characters kept in a short hash.
pub const SHORT_HASH_LEN: usize = 8;

/// Date format used in changelog headers (`2024/3/7`).
pub(crate) const DATE_FORMAT: &str = "%Y/%-m/%-d";

/// A commit as read from the repository, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The full commit hash (SHA).
    pub hash: String,

    /// The full commit message (subject + body).
    pub message: String,

    /// The commit date.
    pub date: DateTime<Utc>,

    /// The tag pointing exactly at this commit, if any.
    pub tag: Option<String>,
}

impl Commit {
    /// Creates a new untagged commit.
    #[must_use]
    pub fn new(hash: impl Into<String>, message: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            date,
            tag: None,
        }
    }

    /// Attaches a tag name.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Returns the first non-blank line of the message, trimmed.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }

    /// Returns the short hash (first 8 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        &self.hash[..SHORT_HASH_LEN.min(self.hash.len())]
    }

    /// Formats the commit date the way changelog headers show it (`2024/3/7`).
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
