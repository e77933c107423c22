//! Error types shared by every pipeline stage

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can abort a run. Nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Network, DNS or HTTP status failure while talking to the mirror.
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        /// URL being requested
        url: String,
        /// Underlying client or decoding error
        #[source]
        source: FetchSource,
    },

    /// The downloaded payload is not a valid gzip stream.
    #[error("Failed to decompress {}: {source}", .path.display())]
    Decompress {
        /// Compressed file being read
        path: PathBuf,
        /// Decoder error
        #[source]
        source: std::io::Error,
    },

    /// Local filesystem failure.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The mirror publishes no Contents index for the requested architecture.
    #[error(
        "No Contents index for architecture '{arch}'. Available: {}",
        .available.join(", ")
    )]
    ArchitectureNotFound {
        /// Requested architecture
        arch: String,
        /// Sorted, deduplicated architectures seen on the mirror
        available: Vec<String>,
    },

    /// A Contents line has no whitespace separating file path and packages.
    #[error("Malformed Contents line {line} in {}", .path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// 1-based line number
        line: usize,
    },
}

/// Why a request to the mirror produced no usable response.
#[derive(Error, Debug)]
pub enum FetchSource {
    /// Connection, DNS, status or body transfer failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The response body is not valid UTF-8
    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

impl Error {
    pub(crate) fn fetch(url: &str, source: impl Into<FetchSource>) -> Self {
        Self::Fetch {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
