//! packstats core
//!
//! Discovers the Debian `Contents-*.gz` indices published on a mirror, downloads
//! the ones for a given architecture and ranks packages by how many files they own.
//!
//! # Pipeline
//!
//! ```text
//! listing  ->  select  ->  fetch  ->  index  ->  rank
//! (mirror)    (arch)     (.gz -> file) (pkg -> files)
//! ```
//!
//! Every stage is a plain function over the previous stage's output; the
//! [`pipeline::run`] entry point wires them together from a [`Config`].

pub mod config;
pub mod error;
pub mod fetch;
pub mod index;
pub mod listing;
pub mod pipeline;
pub mod report;
pub mod reporter;
pub mod select;
pub mod types;

pub use config::Config;
pub use error::{Error, FetchSource, Result};
pub use index::PackageIndex;
pub use listing::{HttpListing, ListingSource};
pub use reporter::{NullReporter, Reporter};
pub use types::{ContentFileEntry, Limit, RankedPackage, SortOrder};

/// User Agent string sent with every mirror request
pub const USER_AGENT: &str = concat!("packstats/", env!("CARGO_PKG_VERSION"));
