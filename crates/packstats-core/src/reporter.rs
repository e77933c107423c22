//! Reporter trait for dependency injection
//!
//! Lets the fetch stage announce progress without being coupled to stdout.

use std::path::Path;

/// Progress sink for pipeline stages.
pub trait Reporter: Send + Sync {
    /// Indicates a new phase has started (e.g. "Listing", "Fetching").
    fn section(&self, title: &str);

    /// Updates the progress of a download.
    fn downloading(&self, url: &str, current: u64, total: Option<u64>);

    /// A file was written to disk (compressed download or decompressed index).
    fn written(&self, path: &Path);

    /// An existing decompressed index was reused instead of downloaded.
    fn reused(&self, path: &Path);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn section(&self, title: &str) {
        (**self).section(title);
    }
    fn downloading(&self, url: &str, current: u64, total: Option<u64>) {
        (**self).downloading(url, current, total);
    }
    fn written(&self, path: &Path) {
        (**self).written(path);
    }
    fn reused(&self, path: &Path) {
        (**self).reused(path);
    }
}

/// A no-op reporter for silent operations (e.g., testing).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn section(&self, _: &str) {}
    fn downloading(&self, _: &str, _: u64, _: Option<u64>) {}
    fn written(&self, _: &Path) {}
    fn reused(&self, _: &Path) {}
}
