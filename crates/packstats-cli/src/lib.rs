//! packstats - Debian package statistics
//!
//! Ranks the packages of a Debian mirror by the number of files they ship,
//! using the mirror's `Contents-<arch>.gz` indices. See
//! <https://wiki.debian.org/RepositoryFormat#A.22Contents.22_indices>.

pub mod ui;

use std::path::PathBuf;

use clap::Parser;
use packstats_core::config::{DEFAULT_MIRROR_URL, MIRROR_URL_ENV};
use packstats_core::{Config, Limit, SortOrder};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "packstats")]
#[command(
    author,
    version,
    about = "Rank Debian packages by file count using a mirror's Contents index"
)]
pub struct Cli {
    /// Architecture of the Contents index to parse (e.g. amd64, arm64)
    pub arch: String,

    /// Mirror directory listing the Contents-*.gz files
    #[arg(short, long, env = MIRROR_URL_ENV, default_value = DEFAULT_MIRROR_URL)]
    pub mirror_url: String,

    /// Also parse the udeb (installer) index for the architecture
    #[arg(short = 'u', long)]
    pub include_udeb: bool,

    /// Number of packages to list; -1 lists all of them
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    pub count: i64,

    /// Sort by increasing number of files
    #[arg(short = 'i', long)]
    pub sort_increasing: bool,

    /// Directory for the downloaded and extracted indices
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip the download when the extracted index already exists
    #[arg(short, long)]
    pub reuse_if_exists: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not print downloaded file paths
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Run configuration described by these arguments.
    pub fn config(&self) -> Config {
        Config::new(&self.arch)
            .with_mirror_url(self.mirror_url.clone())
            .with_output_dir(self.output_dir.clone())
            .with_limit(Limit::from(self.count))
            .with_order(SortOrder::from_increasing(self.sort_increasing))
            .include_udeb(self.include_udeb)
            .reuse_if_exists(self.reuse_if_exists)
    }

    /// Default `tracing` filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info,packstats_core=debug",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["packstats", "AMD64"]).unwrap();
        let config = cli.config();
        assert_eq!(config.arch, "amd64");
        assert_eq!(config.limit, Limit::Top(10));
        assert_eq!(config.order, SortOrder::Descending);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.include_udeb);
        assert!(!config.reuse_if_exists);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "packstats",
            "arm64",
            "-m",
            "http://localhost/main/",
            "-u",
            "-c",
            "-1",
            "-i",
            "-o",
            "/tmp/contents",
            "-r",
            "-vv",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.mirror_url, "http://localhost/main/");
        assert!(config.include_udeb);
        assert_eq!(config.limit, Limit::All);
        assert_eq!(config.order, SortOrder::Ascending);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/contents"));
        assert!(config.reuse_if_exists);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "packstats",
            "armel",
            "--mirror-url",
            "http://m/",
            "--include-udeb",
            "--count",
            "3",
            "--sort-increasing",
            "--output-dir",
            "out",
            "--reuse-if-exists",
        ])
        .unwrap();
        assert_eq!(cli.config().limit, Limit::Top(3));
        assert!(cli.sort_increasing);
    }

    #[test]
    fn test_arch_is_required() {
        assert!(Cli::try_parse_from(["packstats"]).is_err());
    }
}
