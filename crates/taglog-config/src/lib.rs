//! Configuration management for taglog.
//!
//! This crate handles loading the optional `taglog.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_config_from, load_config, load_or_default};
pub use schema::{CacheConfig, ChangelogConfig, Config, GitConfig};
