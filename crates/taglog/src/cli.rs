//! CLI definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use taglog_config::{Config, load_config, load_or_default};
use taglog_core::{Cache, GenerateOptions, Generator, Outcome};
use taglog_git::Repository;
use tracing::debug;

/// Generate a grouped plain-text changelog from Git history.
#[derive(Debug, Parser)]
#[command(name = "taglog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Maximum number of commits to scan (default: all commits)
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max: Option<usize>,

    /// Append the short commit hash to each entry
    #[arg(long)]
    pub detailed: bool,

    /// Label commits without a version by their hash instead of "untagged"
    #[arg(long)]
    pub no_group: bool,

    /// Print each classified commit as it is processed
    #[arg(short, long)]
    pub verbose: bool,

    /// Output file (default: changelog.txt)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Ignore the cache and regenerate the whole changelog
    #[arg(long)]
    pub no_cache: bool,

    /// Configuration file (default: nearest taglog.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Runs the changelog generation.
    pub fn run(self) -> Result<()> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;

        let config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => load_or_default(&cwd).context("failed to load taglog.toml")?,
        };
        let options = self.options(&config);
        debug!(?options, "resolved options");

        let repo = Repository::discover(&cwd).context("failed to open git repository")?;
        let generator = Generator::new(repo, Cache::in_dir(&cwd), options);

        let verbose = self.verbose;
        let outcome = generator.run(|entry| {
            if verbose {
                println!("{entry}");
            }
        })?;

        match outcome {
            Outcome::UpToDate => println!("already up to date"),
            Outcome::Written {
                path,
                groups,
                entries,
            } => println!(
                "Wrote {entries} entries in {groups} versions to {}",
                path.display()
            ),
        }

        Ok(())
    }

    /// Merges command-line flags over the configuration file.
    fn options(&self, config: &Config) -> GenerateOptions {
        GenerateOptions {
            output: self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.changelog.output)),
            max_commits: self.max.or(config.git.max_commits),
            detailed: self.detailed || config.changelog.detailed,
            no_group: self.no_group || config.changelog.no_group,
            incremental: !self.no_cache && config.cache.enabled,
            expected_branch: config.git.branch.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("taglog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_follow_config() {
        let options = parse(&[]).options(&Config::default());
        assert_eq!(options.output, PathBuf::from("changelog.txt"));
        assert_eq!(options.max_commits, None);
        assert!(!options.detailed);
        assert!(!options.no_group);
        assert!(options.incremental);
        assert_eq!(options.expected_branch, "master");
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.git.max_commits = Some(10);
        config.changelog.output = "HISTORY.txt".to_string();

        let cli = parse(&[
            "--max",
            "3",
            "--detailed",
            "--no-group",
            "-o",
            "out.txt",
            "--no-cache",
        ]);
        let options = cli.options(&config);
        assert_eq!(options.output, PathBuf::from("out.txt"));
        assert_eq!(options.max_commits, Some(3));
        assert!(options.detailed);
        assert!(options.no_group);
        assert!(!options.incremental);
    }

    #[test]
    fn test_config_enables_options() {
        let mut config = Config::default();
        config.changelog.detailed = true;
        config.cache.enabled = false;

        let options = parse(&[]).options(&config);
        assert!(options.detailed);
        assert!(!options.incremental);
    }

    #[test]
    fn test_rejects_non_numeric_max() {
        let result = Cli::try_parse_from(["taglog", "--max", "many"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_max() {
        let result = Cli::try_parse_from(["taglog", "--max", "0"]);
        assert!(result.is_err());
        assert_eq!(parse(&["--max", "1"]).max, Some(1));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
