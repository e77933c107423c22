//! Terminal output

mod console;

pub use console::ConsoleReporter;

use std::io::{self, Write};

use packstats_core::report::write_table;
use packstats_core::{Error, RankedPackage};

/// Print the ranking table to stdout.
pub fn print_table(ranked: &[RankedPackage]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, ranked)?;
    out.flush()
}

/// Print a failed run to stderr.
pub fn print_error(err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(Error::ArchitectureNotFound { arch, available }) => {
            eprintln!("error: no Contents index for architecture '{arch}' on this mirror");
            if available.is_empty() {
                eprintln!("  The mirror listing contains no Contents indices.");
            } else {
                eprintln!("  Available architectures:");
                for name in available {
                    eprintln!("    {name}");
                }
            }
        }
        // Core errors already carry their cause in the message
        Some(core) => eprintln!("error: {core}"),
        None => eprintln!("error: {err:#}"),
    }
}
