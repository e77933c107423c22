//! Run configuration
//!
//! Every default the pipeline relies on lives here so stages never reach for
//! globals.

use std::path::PathBuf;

use crate::types::{Limit, SortOrder};

/// Public Debian mirror used when none is given.
pub const DEFAULT_MIRROR_URL: &str = "http://ftp.uk.debian.org/debian/dists/stable/main/";

/// Environment variable overriding the mirror URL.
pub const MIRROR_URL_ENV: &str = "PACKSTATS_MIRROR_URL";

/// Configuration for a single packstats run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Architecture token, lowercase (e.g. `amd64`)
    pub arch: String,
    /// Mirror directory holding the `Contents-*.gz` files
    pub mirror_url: String,
    /// Also rank the installer (udeb) index
    pub include_udeb: bool,
    /// Number of rows to report
    pub limit: Limit,
    /// Ordering by file count
    pub order: SortOrder,
    /// Where compressed and decompressed indices are written
    pub output_dir: PathBuf,
    /// Skip the download when the decompressed file is already present
    pub reuse_if_exists: bool,
}

impl Config {
    /// Defaults for `arch`. The architecture is lowercased.
    pub fn new(arch: &str) -> Self {
        Self {
            arch: arch.to_lowercase(),
            mirror_url: DEFAULT_MIRROR_URL.to_string(),
            include_udeb: false,
            limit: Limit::default(),
            order: SortOrder::default(),
            output_dir: PathBuf::from("."),
            reuse_if_exists: false,
        }
    }

    /// Override the mirror directory.
    pub fn with_mirror_url(mut self, url: impl Into<String>) -> Self {
        self.mirror_url = url.into();
        self
    }

    /// Override the download directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the number of rows to report.
    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    /// Set the ranking order.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Also fetch the udeb index.
    pub fn include_udeb(mut self, include: bool) -> Self {
        self.include_udeb = include;
        self
    }

    /// Reuse decompressed files already on disk.
    pub fn reuse_if_exists(mut self, reuse: bool) -> Self {
        self.reuse_if_exists = reuse;
        self
    }
}
