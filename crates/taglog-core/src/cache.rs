//! Last-processed-commit cache.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::CoreResult;

/// Cache file name, relative to the working directory.
pub const CACHE_FILE_NAME: &str = "taglog.cache";

/// Stores the hash of the newest commit written to the changelog.
///
/// The file holds a single line. It is not locked, so concurrent runs in the
/// same directory are unsupported.
#[derive(Debug, Clone)]
pub struct Cache {
    path: PathBuf,
}

impl Cache {
    /// Creates a cache backed by [`CACHE_FILE_NAME`] in the given directory.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(CACHE_FILE_NAME),
        }
    }

    /// Returns the cache file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cached hash.
    ///
    /// A missing or blank file yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn read(&self) -> CoreResult<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let hash = content.trim();
        debug!(path = ?self.path, hash, "read cache");
        Ok((!hash.is_empty()).then(|| hash.to_string()))
    }

    /// Overwrites the cache with the given hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, hash: &str) -> CoreResult<()> {
        fs::write(&self.path, format!("{hash}\n"))?;
        debug!(path = ?self.path, hash, "wrote cache");
        Ok(())
    }
}
