//! End-to-end run: listing, selection, fetch, parse, rank
//!
//! Stages run strictly one after another. The first error aborts the run and
//! whatever was parsed so far is dropped.

use std::path::PathBuf;

use reqwest::Client;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::index::PackageIndex;
use crate::listing::{HttpListing, ListingSource};
use crate::reporter::Reporter;
use crate::select::select_urls;
use crate::types::RankedPackage;

/// Run the pipeline against `source`, downloading with `fetcher`.
pub async fn run<S, R>(
    config: &Config,
    source: &S,
    fetcher: &Fetcher,
    reporter: &R,
) -> Result<Vec<RankedPackage>>
where
    S: ListingSource + ?Sized,
    R: Reporter + ?Sized,
{
    reporter.section("Listing");
    tracing::debug!("Listing {}", source.base_url());
    let entries = source.list().await?;
    let urls = select_urls(&config.arch, &entries, config.include_udeb)?;

    reporter.section("Fetching");
    let mut paths: Vec<PathBuf> = Vec::with_capacity(urls.len());
    for url in &urls {
        let path = fetcher
            .fetch(url, &config.output_dir, config.reuse_if_exists, reporter)
            .await?;
        paths.push(path);
    }

    reporter.section("Parsing");
    let index = build_index(&paths)?;

    tracing::debug!(
        "Ranking {} packages ({:?}, limit {})",
        index.len(),
        config.order,
        config.limit
    );
    Ok(index.rank(config.order, config.limit))
}

/// Run the pipeline over HTTP against `config.mirror_url`.
pub async fn run_http<R: Reporter + ?Sized>(
    config: &Config,
    reporter: &R,
) -> Result<Vec<RankedPackage>> {
    let client = Client::new();
    let source = HttpListing::new(client.clone(), config.mirror_url.clone());
    let fetcher = Fetcher::new(client);
    run(config, &source, &fetcher, reporter).await
}

/// Parse every decompressed index into one shared [`PackageIndex`].
pub fn build_index(paths: &[PathBuf]) -> Result<PackageIndex> {
    let mut index = PackageIndex::new();
    for path in paths {
        index.parse_file(path)?;
    }
    Ok(index)
}
