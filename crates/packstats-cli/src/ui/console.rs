use std::path::Path;

use packstats_core::Reporter;

/// Prints each file written during the fetch stage, one path per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    /// Reporter that prints paths unless `quiet`.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, title: &str) {
        tracing::debug!("{title}");
    }

    fn downloading(&self, url: &str, current: u64, total: Option<u64>) {
        match total {
            Some(total) => tracing::trace!("{url}: {current}/{total} bytes"),
            None => tracing::trace!("{url}: {current} bytes"),
        }
    }

    fn written(&self, path: &Path) {
        if !self.quiet {
            println!("{}", path.display());
        }
    }

    fn reused(&self, path: &Path) {
        if !self.quiet {
            println!("{} (reused)", path.display());
        }
    }
}
