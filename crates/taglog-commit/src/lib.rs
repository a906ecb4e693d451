//! Commit types for taglog.
//!
//! This crate provides the types shared by every stage of the pipeline:
//! - [`Commit`]: A commit as read from the repository
//! - [`Category`]: The closed set of changelog categories
//! - [`ClassifiedEntry`]: A commit after classification and version resolution

mod category;
mod commit;
mod entry;

pub use category::Category;
pub use commit::{Commit, SHORT_HASH_LEN};
pub use entry::ClassifiedEntry;
