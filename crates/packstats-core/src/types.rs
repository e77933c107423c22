//! Core domain types

use std::fmt;

const CONTENTS_PREFIX: &str = "Contents-";
const GZ_SUFFIX: &str = ".gz";
const UDEB_MARKER: &str = "udeb-";

/// A `Contents-*.gz` file published on a mirror.
///
/// # Example
///
/// ```
/// use packstats_core::ContentFileEntry;
///
/// let entry = ContentFileEntry::new("http://mirror/debian/dists/stable/main", "Contents-udeb-armel.gz").unwrap();
/// assert_eq!(entry.url, "http://mirror/debian/dists/stable/main/Contents-udeb-armel.gz");
/// assert_eq!(entry.architecture, "armel");
/// assert!(entry.is_udeb());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFileEntry {
    /// Remote file name, e.g. `Contents-amd64.gz`
    pub filename: String,
    /// Absolute download URL
    pub url: String,
    /// Architecture token between the last `-` and `.gz`
    pub architecture: String,
}

impl ContentFileEntry {
    /// Build an entry from the mirror base URL and a listed file name.
    ///
    /// Returns `None` unless the name looks like `Contents-<...>-<arch>.gz`
    /// with a non-empty architecture token.
    pub fn new(base_url: &str, filename: &str) -> Option<Self> {
        let stem = filename
            .strip_prefix(CONTENTS_PREFIX)?
            .strip_suffix(GZ_SUFFIX)?;
        let architecture = stem.rsplit('-').next().unwrap_or(stem);
        if architecture.is_empty() {
            return None;
        }

        let url = if base_url.ends_with('/') {
            format!("{base_url}{filename}")
        } else {
            format!("{base_url}/{filename}")
        };

        Some(Self {
            filename: filename.to_string(),
            url,
            architecture: architecture.to_string(),
        })
    }

    /// Installer variant, i.e. `Contents-udeb-<arch>.gz`.
    pub fn is_udeb(&self) -> bool {
        self.filename
            .strip_prefix(CONTENTS_PREFIX)
            .and_then(|s| s.strip_prefix(UDEB_MARKER))
            .and_then(|s| s.strip_suffix(GZ_SUFFIX))
            .is_some_and(|arch| arch == self.architecture)
    }
}

/// A package and the number of files it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPackage {
    /// Package name as written in the Contents index (may carry a `section/` prefix)
    pub name: String,
    /// Number of file entries across all parsed indices
    pub file_count: usize,
}

impl RankedPackage {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, file_count: usize) -> Self {
        Self {
            name: name.into(),
            file_count,
        }
    }
}

/// Ordering of the ranked output by file count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most files first
    #[default]
    Descending,
    /// Fewest files first
    Ascending,
}

impl SortOrder {
    /// Map the `--sort-increasing` flag.
    pub fn from_increasing(increasing: bool) -> Self {
        if increasing {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// How many ranked rows to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Keep every package
    All,
    /// Keep at most `n` packages
    Top(usize),
}

impl Default for Limit {
    fn default() -> Self {
        Self::Top(10)
    }
}

impl From<i64> for Limit {
    /// Negative counts mean "no limit".
    fn from(count: i64) -> Self {
        usize::try_from(count).map_or(Self::All, Self::Top)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Top(n) => write!(f, "{n}"),
        }
    }
}
