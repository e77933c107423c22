//! Mirror directory listing discovery
//!
//! Debian mirrors expose `dists/<suite>/<component>/` as a plain HTML index.
//! The scraping is kept behind [`ListingSource`] so a structured source (e.g.
//! parsing the suite's `Release` file) can replace it without touching the
//! later stages.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::types::ContentFileEntry;

static CONTENTS_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s+href="(Contents-[^"/]+\.gz)""#).expect("static regex")
});

/// Something that can enumerate the Contents indices of a mirror.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Base URL the entries resolve against
    fn base_url(&self) -> &str;

    /// Fetch all `Contents-*.gz` entries, in document order
    async fn list(&self) -> Result<Vec<ContentFileEntry>>;
}

/// Scrapes the mirror's HTML directory page.
#[derive(Debug, Clone)]
pub struct HttpListing {
    client: Client,
    base_url: String,
}

impl HttpListing {
    /// Listing for `base_url`, reusing `client` for the request.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ListingSource for HttpListing {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list(&self) -> Result<Vec<ContentFileEntry>> {
        let url = self.base_url.as_str();
        tracing::debug!("Fetching mirror listing {url}");

        let body = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::fetch(url, e))?
            .bytes()
            .await
            .map_err(|e| Error::fetch(url, e))?;
        let html = String::from_utf8(body.to_vec()).map_err(|e| Error::fetch(url, e))?;

        let entries = parse_listing(url, &html);
        tracing::debug!("Found {} Contents indices", entries.len());
        Ok(entries)
    }
}

/// Extract every `Contents-*.gz` link from a directory listing page.
///
/// Unrecognised or malformed markup yields no entries rather than an error.
pub fn parse_listing(base_url: &str, html: &str) -> Vec<ContentFileEntry> {
    html.lines()
        .flat_map(|line| CONTENTS_HREF.captures_iter(line))
        .filter_map(|caps| ContentFileEntry::new(base_url, &caps[1]))
        .collect()
}
