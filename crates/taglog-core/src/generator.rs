//! Changelog generation pipeline.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use taglog_commit::{ClassifiedEntry, Commit};
use taglog_git::Repository;
use tracing::{debug, info, warn};

use crate::{
    Cache, ChangelogWriter, CoreError, CoreResult, Grouper, ResolveContext, UNTAGGED, VersionGroup,
    classify,
};

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Output file path.
    pub output: PathBuf,

    /// Maximum number of commits to scan.
    pub max_commits: Option<usize>,

    /// Append the short hash to each entry.
    pub detailed: bool,

    /// Label unresolved commits by their hash instead of `untagged`.
    pub no_group: bool,

    /// Stop at the cached commit and prepend to the existing output.
    pub incremental: bool,

    /// Branch the changelog is expected to be generated from.
    pub expected_branch: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("changelog.txt"),
            max_commits: None,
            detailed: false,
            no_group: false,
            incremental: true,
            expected_branch: "master".to_string(),
        }
    }
}

/// The result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The changelog was written.
    Written {
        /// Path of the written file.
        path: PathBuf,
        /// Number of version groups rendered in this run.
        groups: usize,
        /// Number of commits rendered in this run.
        entries: usize,
    },

    /// The newest commit was already processed; nothing was written.
    UpToDate,
}

/// Groups collected from a commit walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    /// Version groups, newest first.
    pub groups: Vec<VersionGroup>,

    /// Whether the walk stopped at the `stop_at` commit.
    pub reached_stop: bool,
}

/// Classifies and groups a newest-first commit list.
///
/// The walk ends before the commit whose hash equals `stop_at`. `inspect` is
/// called with each entry as it is produced.
///
/// # Errors
///
/// Returns [`CoreError::NoCommits`] for an empty list and
/// [`CoreError::UnresolvedVersion`] when the newest commit has no tag, no
/// inline version and `no_group` is off.
pub fn collect_groups<F>(
    commits: &[Commit],
    stop_at: Option<&str>,
    no_group: bool,
    mut inspect: F,
) -> CoreResult<Collected>
where
    F: FnMut(&ClassifiedEntry),
{
    if commits.is_empty() {
        return Err(CoreError::NoCommits);
    }

    let mut ctx = ResolveContext::new(no_group);
    let mut grouper = Grouper::new();
    let mut reached_stop = false;

    for (index, commit) in commits.iter().enumerate() {
        if stop_at == Some(commit.hash.as_str()) {
            debug!(hash = %commit.short_hash(), "reached cached commit");
            reached_stop = true;
            break;
        }

        let classification = classify(commit.subject());
        let resolution = ctx.resolve(commit, classification.version.as_deref());

        if index == 0 && !resolution.is_own() {
            return Err(CoreError::UnresolvedVersion {
                hash: commit.short_hash().to_string(),
            });
        }

        let mut entry = ClassifiedEntry::new(
            classification.category,
            classification.message,
            classification.version.as_deref().unwrap_or(UNTAGGED),
            commit.short_hash(),
            commit.date,
        );
        entry.set_version(resolution.label());
        inspect(&entry);
        grouper.push(entry);
    }

    Ok(Collected {
        groups: grouper.into_groups(),
        reached_stop,
    })
}

/// Runs the full pipeline against a repository.
pub struct Generator {
    repo: Repository,
    cache: Cache,
    options: GenerateOptions,
}

impl Generator {
    /// Creates a generator.
    #[must_use]
    pub fn new(repo: Repository, cache: Cache, options: GenerateOptions) -> Self {
        Self {
            repo,
            cache,
            options,
        }
    }

    /// Reads history, writes the changelog and updates the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if history cannot be read, the newest commit has no
    /// resolvable version, or the output or cache file cannot be written.
    pub fn run<F>(&self, inspect: F) -> CoreResult<Outcome>
    where
        F: FnMut(&ClassifiedEntry),
    {
        self.check_branch()?;

        let commits = self.repo.commits(self.options.max_commits)?;
        let Some(newest) = commits.first() else {
            return Err(CoreError::NoCommits);
        };
        info!(count = commits.len(), "read commits");

        let existing = self.existing_output()?;
        let cached = if self.options.incremental {
            self.cache.read()?
        } else {
            None
        };
        // The cache only describes what is already in the output file.
        let cached = match cached {
            Some(_) if existing.trim().is_empty() => {
                info!(path = ?self.options.output, "output file missing or empty, ignoring cache");
                None
            }
            other => other,
        };
        if cached.as_deref() == Some(newest.hash.as_str()) {
            info!(hash = %newest.short_hash(), "changelog already up to date");
            return Ok(Outcome::UpToDate);
        }

        let collected = collect_groups(
            &commits,
            cached.as_deref(),
            self.options.no_group,
            inspect,
        )?;
        if cached.is_some() && !collected.reached_stop {
            warn!("cached commit not found in scanned history, regenerating changelog");
        }

        let writer = ChangelogWriter::new(self.options.detailed);
        let content = if collected.reached_stop {
            writer.render_before(&collected.groups, &existing)
        } else {
            writer.render(&collected.groups)
        };
        fs::write(&self.options.output, content)?;
        self.cache.write(&newest.hash)?;

        let entries: usize = collected.groups.iter().map(VersionGroup::len).sum();
        info!(
            path = ?self.options.output,
            groups = collected.groups.len(),
            entries,
            "wrote changelog"
        );

        Ok(Outcome::Written {
            path: self.options.output.clone(),
            groups: collected.groups.len(),
            entries,
        })
    }

    fn check_branch(&self) -> CoreResult<()> {
        match self.repo.current_branch()? {
            Some(branch) if branch == self.options.expected_branch => {}
            Some(branch) => warn!(
                %branch,
                expected = %self.options.expected_branch,
                "current branch is not the release branch"
            ),
            None => warn!("HEAD is not on a branch"),
        }
        Ok(())
    }

    fn existing_output(&self) -> CoreResult<String> {
        match fs::read_to_string(&self.options.output) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}
