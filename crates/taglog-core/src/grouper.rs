//! Grouping of classified entries by version.

use taglog_commit::{Category, ClassifiedEntry};

/// A run of consecutive entries sharing one version label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGroup {
    /// The version label.
    pub version: String,

    /// The display date of the newest entry in the group.
    pub date: String,

    buckets: Vec<(Category, Vec<ClassifiedEntry>)>,
}

impl VersionGroup {
    fn new(entry: ClassifiedEntry) -> Self {
        let mut group = Self {
            version: entry.version().to_string(),
            date: entry.display_date(),
            buckets: Vec::new(),
        };
        group.push(entry);
        group
    }

    fn push(&mut self, entry: ClassifiedEntry) {
        match self.buckets.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, entries)) => entries.push(entry),
            None => self.buckets.push((entry.category, vec![entry])),
        }
    }

    /// Returns the category buckets in order of first appearance.
    pub fn buckets(&self) -> impl Iterator<Item = (Category, &[ClassifiedEntry])> {
        self.buckets
            .iter()
            .map(|(category, entries)| (*category, entries.as_slice()))
    }

    /// Returns the entries of one category.
    #[must_use]
    pub fn entries(&self, category: Category) -> &[ClassifiedEntry] {
        self.buckets
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default()
    }

    /// Returns the number of entries across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Returns true if the group has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates entries into version groups, in walk order.
///
/// An entry joins the last group when its version matches that group's label
/// and opens a new group otherwise. Groups are never reordered, so a version
/// that reappears after another one gets a second group.
#[derive(Debug, Default)]
pub struct Grouper {
    groups: Vec<VersionGroup>,
}

impl Grouper {
    /// Creates an empty grouper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next entry of the walk.
    pub fn push(&mut self, entry: ClassifiedEntry) {
        match self.groups.last_mut() {
            Some(last) if last.version == entry.version() => last.push(entry),
            _ => self.groups.push(VersionGroup::new(entry)),
        }
    }

    /// Consumes the grouper, returning its groups.
    #[must_use]
    pub fn into_groups(self) -> Vec<VersionGroup> {
        self.groups
    }
}
