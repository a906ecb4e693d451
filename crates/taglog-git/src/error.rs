//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_a_repo_display() {
        let err = GitError::NotARepo(PathBuf::from("/tmp/not-git"));
        assert_eq!(err.to_string(), "not a git repository: /tmp/not-git");
    }

    #[test]
    fn test_git2_display() {
        let err = GitError::from(git2::Error::from_str("boom"));
        assert_eq!(err.to_string(), "git error: boom");
    }
}
