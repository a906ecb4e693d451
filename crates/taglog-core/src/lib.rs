//! Core library for taglog.
//!
//! This crate turns a newest-first commit list into a grouped changelog:
//! classification, version resolution, grouping, rendering and the
//! incremental cache.

mod cache;
mod classifier;
mod error;
mod generator;
mod grouper;
mod resolver;
mod writer;

pub use cache::{CACHE_FILE_NAME, Cache};
pub use classifier::{Classification, classify};
pub use error::{CoreError, CoreResult};
pub use generator::{Collected, GenerateOptions, Generator, Outcome, collect_groups};
pub use grouper::{Grouper, VersionGroup};
pub use resolver::{ResolveContext, Resolution, UNTAGGED};
pub use writer::ChangelogWriter;
