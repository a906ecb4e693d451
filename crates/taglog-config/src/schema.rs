//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Changelog output configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Commit source configuration.
    #[serde(default)]
    pub git: GitConfig,

    /// Incremental cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Changelog output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangelogConfig {
    /// Output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Append the short hash to each entry.
    #[serde(default)]
    pub detailed: bool,

    /// Label commits without a version by their hash instead of `untagged`.
    #[serde(default)]
    pub no_group: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            detailed: false,
            no_group: false,
        }
    }
}

fn default_output() -> String {
    "changelog.txt".to_string()
}

/// Commit source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    /// Branch the changelog is expected to be generated from.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Maximum number of commits to scan.
    #[serde(default)]
    pub max_commits: Option<usize>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            branch: default_branch(),
            max_commits: None,
        }
    }
}

fn default_branch() -> String {
    "master".to_string()
}

/// Incremental cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Stop at the last processed commit and prepend to the existing file.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.changelog.output, "changelog.txt");
        assert!(!config.changelog.detailed);
        assert!(!config.changelog.no_group);
        assert_eq!(config.git.branch, "master");
        assert_eq!(config.git.max_commits, None);
        assert!(config.cache.enabled);
    }

    #[test]
    fn test_empty_toml_matches_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [changelog]
            detailed = true

            [git]
            max_commits = 50
        "#,
        )
        .unwrap();

        assert!(config.changelog.detailed);
        assert_eq!(config.changelog.output, "changelog.txt");
        assert_eq!(config.git.max_commits, Some(50));
        assert_eq!(config.git.branch, "master");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r"
            [changelog]
            detialed = true
        ",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let mut config = Config::default();
        config.cache.enabled = false;
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
