//! Version resolution.

use taglog_commit::Commit;
use tracing::debug;

/// Label used for commits whose version cannot be resolved.
pub const UNTAGGED: &str = "untagged";

/// How a commit's version label was resolved, most authoritative first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A tag points at the commit.
    Tag(String),
    /// Inherited from the nearest newer tagged commit.
    Carried(String),
    /// Taken from a trailing `(vX.Y.Z)` marker in the message.
    Inline(String),
    /// The commit's short hash, in no-group mode.
    Hash(String),
    /// Nothing resolved.
    Untagged,
}

impl Resolution {
    /// Returns the version label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Tag(label) | Self::Carried(label) | Self::Inline(label) | Self::Hash(label) => {
                label
            }
            Self::Untagged => UNTAGGED,
        }
    }

    /// Returns true if the label belongs to the commit itself rather than
    /// being inherited or a fallback.
    #[must_use]
    pub fn is_own(&self) -> bool {
        matches!(self, Self::Tag(_) | Self::Inline(_) | Self::Hash(_))
    }
}

/// State carried across a newest-first walk while resolving versions.
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    carried_tag: Option<String>,
    no_group: bool,
}

impl ResolveContext {
    /// Creates a context for a fresh walk.
    #[must_use]
    pub fn new(no_group: bool) -> Self {
        Self {
            carried_tag: None,
            no_group,
        }
    }

    /// Resolves the version of the next commit in the walk.
    ///
    /// `inline` is the version parsed from the commit message, if any. A tag
    /// on the commit becomes the carried tag for the older commits that
    /// follow.
    pub fn resolve(&mut self, commit: &Commit, inline: Option<&str>) -> Resolution {
        let resolution = if let Some(tag) = &commit.tag {
            self.carried_tag = Some(tag.clone());
            Resolution::Tag(tag.clone())
        } else if let Some(tag) = &self.carried_tag {
            Resolution::Carried(tag.clone())
        } else if let Some(version) = inline {
            Resolution::Inline(version.to_string())
        } else if self.no_group {
            Resolution::Hash(commit.short_hash().to_string())
        } else {
            Resolution::Untagged
        };

        debug!(hash = %commit.short_hash(), ?resolution, "resolved version");
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn commit(hash: &str) -> Commit {
        Commit::new(hash, "message", Utc::now())
    }

    fn tagged(hash: &str, tag: &str) -> Commit {
        commit(hash).with_tag(tag)
    }

    #[test]
    fn test_tag_on_commit() {
        let mut ctx = ResolveContext::new(false);
        let resolution = ctx.resolve(&tagged("aaaa1111", "v2.0"), Some("9.9.9"));
        assert_eq!(resolution, Resolution::Tag("v2.0".to_string()));
        assert_eq!(ctx.carried_tag.as_deref(), Some("v2.0"));
    }

    #[test]
    fn test_untagged_commit_inherits_newer_tag() {
        let mut ctx = ResolveContext::new(false);
        ctx.resolve(&tagged("aaaa1111", "v2.0"), None);

        let resolution = ctx.resolve(&commit("bbbb2222"), Some("1.5.0"));
        assert_eq!(resolution, Resolution::Carried("v2.0".to_string()));
        assert_eq!(resolution.label(), "v2.0");
        assert!(!resolution.is_own());
    }

    #[test]
    fn test_newer_tag_replaced_by_older_tag() {
        let mut ctx = ResolveContext::new(false);
        ctx.resolve(&tagged("aaaa1111", "v2.0"), None);
        ctx.resolve(&tagged("bbbb2222", "v1.0"), None);

        let resolution = ctx.resolve(&commit("cccc3333"), None);
        assert_eq!(resolution.label(), "v1.0");
    }

    #[test]
    fn test_inline_version_without_tags() {
        let mut ctx = ResolveContext::new(true);
        let resolution = ctx.resolve(&commit("aaaa1111"), Some("1.2.3"));
        assert_eq!(resolution, Resolution::Inline("1.2.3".to_string()));
        assert!(resolution.is_own());
        assert_eq!(ctx.carried_tag.as_deref(), None);
    }

    #[test]
    fn test_no_group_uses_short_hash() {
        let mut ctx = ResolveContext::new(true);
        let resolution = ctx.resolve(&commit("aaaa1111bbbb2222"), None);
        assert_eq!(resolution, Resolution::Hash("aaaa1111".to_string()));
        assert!(resolution.is_own());
    }

    #[test]
    fn test_untagged_fallback() {
        let mut ctx = ResolveContext::new(false);
        let resolution = ctx.resolve(&commit("aaaa1111"), None);
        assert_eq!(resolution, Resolution::Untagged);
        assert_eq!(resolution.label(), "untagged");
        assert!(!resolution.is_own());
    }
}
