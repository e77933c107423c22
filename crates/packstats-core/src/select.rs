//! Architecture selection over a mirror listing

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::types::ContentFileEntry;

/// Download URLs of the Contents indices for `arch`, in listing order.
///
/// The plain index is always included; the udeb index only when
/// `include_udeb` is set. An empty selection is reported as
/// [`Error::ArchitectureNotFound`] carrying every architecture the mirror has.
pub fn select_urls(
    arch: &str,
    entries: &[ContentFileEntry],
    include_udeb: bool,
) -> Result<Vec<String>> {
    let urls: Vec<String> = entries
        .iter()
        .filter(|e| e.architecture.eq_ignore_ascii_case(arch))
        .filter(|e| include_udeb || !e.is_udeb())
        .map(|e| e.url.clone())
        .collect();

    if urls.is_empty() {
        return Err(Error::ArchitectureNotFound {
            arch: arch.to_string(),
            available: available_architectures(entries),
        });
    }

    tracing::debug!("Selected {} index(es) for {arch}", urls.len());
    Ok(urls)
}

/// Sorted, deduplicated architectures present in a listing.
pub fn available_architectures(entries: &[ContentFileEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.architecture.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
