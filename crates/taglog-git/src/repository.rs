//! Git repository wrapper.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use chrono::{TimeZone, Utc};
use git2::{ErrorCode, Repository as Git2Repo, Sort};
use taglog_commit::Commit;
use tracing::debug;

use crate::{GitError, GitResult};

/// Maps a full commit hash to the tag name pointing at it.
pub type TagMap = HashMap<String, String>;

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Discovers the repository containing the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the short name of the checked-out branch.
    ///
    /// Returns `None` for a detached or unborn `HEAD`.
    ///
    /// # Errors
    ///
    /// Returns an error if `HEAD` cannot be read.
    pub fn current_branch(&self) -> GitResult<Option<String>> {
        let head = match self.inner.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Ok(None);
        }
        Ok(head.shorthand().map(String::from))
    }

    /// Returns all tag names in the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if tags cannot be read.
    pub fn tags(&self) -> GitResult<Vec<String>> {
        let tags = self.inner.tag_names(None)?;
        Ok(tags.iter().flatten().map(String::from).collect())
    }

    /// Returns the tag of every tagged commit, keyed by full commit hash.
    ///
    /// Lightweight and annotated tags are both peeled to their commit. When
    /// several tags point at one commit the highest version wins.
    ///
    /// # Errors
    ///
    /// Returns an error if tags cannot be read.
    pub fn tag_map(&self) -> GitResult<TagMap> {
        let mut map = TagMap::new();

        for name in self.tags()? {
            let object = self.inner.revparse_single(&format!("refs/tags/{name}"))?;
            let Ok(commit) = object.peel_to_commit() else {
                debug!(tag = %name, "tag does not point at a commit, skipping");
                continue;
            };

            let hash = commit.id().to_string();
            let replace = map
                .get(&hash)
                .is_none_or(|existing| compare_tags(&name, existing) == Ordering::Greater);
            if replace {
                map.insert(hash, name);
            }
        }

        debug!(count = map.len(), "loaded tags");
        Ok(map)
    }

    /// Returns commits reachable from `HEAD`, newest first.
    ///
    /// Commits are ordered by commit time, and a commit never comes before
    /// one of its descendants.
    ///
    /// At most `max` commits are returned when a limit is given. Each commit
    /// carries the tag pointing at it, if any. An unborn `HEAD` yields no
    /// commits.
    ///
    /// # Errors
    ///
    /// Returns an error if commits cannot be read.
    pub fn commits(&self, max: Option<usize>) -> GitResult<Vec<Commit>> {
        match self.inner.head() {
            Ok(_) => {}
            Err(e) if e.code() == ErrorCode::UnbornBranch => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        }

        let tags = self.tag_map()?;
        let mut revwalk = self.inner.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut commits = Vec::new();
        for oid in revwalk.take(max.unwrap_or(usize::MAX)) {
            let oid = oid?;
            let commit = self.inner.find_commit(oid)?;

            let hash = oid.to_string();
            let message = commit.message().unwrap_or("").to_string();
            let date = Utc
                .timestamp_opt(commit.time().seconds(), 0)
                .single()
                .unwrap_or_else(Utc::now);

            let mut raw = Commit::new(hash, message, date);
            if let Some(tag) = tags.get(&raw.hash) {
                raw = raw.with_tag(tag.clone());
            }
            commits.push(raw);
        }

        debug!(count = commits.len(), "read commits");
        Ok(commits)
    }
}

/// Orders tag names by semantic version, ignoring a leading `v`.
///
/// Tags that parse as versions sort above tags that do not; remaining ties
/// fall back to plain string order.
fn compare_tags(a: &str, b: &str) -> Ordering {
    match (tag_version(a), tag_version(b)) {
        (Some(va), Some(vb)) => va.cmp(&vb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

fn tag_version(name: &str) -> Option<semver::Version> {
    semver::Version::parse(name.strip_prefix('v').unwrap_or(name)).ok()
}
