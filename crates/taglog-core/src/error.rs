//! Core error types.

use thiserror::Error;

/// Core-related errors.
///
/// Configuration errors are not wrapped here; the binary reports them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] taglog_git::GitError),

    /// The newest commit has neither a tag nor an inline version marker.
    #[error("latest commit {hash} needs to be tagged")]
    UnresolvedVersion {
        /// Short hash of the offending commit.
        hash: String,
    },

    /// The repository has no commits.
    #[error("no commits found")]
    NoCommits,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
