//! Git commit source for taglog.
//!
//! This crate reads the history a changelog is built from:
//! - Repository discovery
//! - Commit walking from `HEAD`, newest first
//! - Tag lookup by commit

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::{Repository, TagMap};
