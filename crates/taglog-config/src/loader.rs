//! Configuration loader.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "taglog.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

/// Finds a configuration file starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
pub fn find_config_from(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    let mut dir = Some(start_dir.as_ref());

    while let Some(current) = dir {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        dir = current.parent();
    }

    None
}

/// Loads the nearest configuration file, or defaults if there is none.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be parsed.
pub fn load_or_default(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    match find_config_from(start_dir) {
        Some(path) => load_config(path),
        None => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}
