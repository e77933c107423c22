//! Download and decompression of Contents indices
//!
//! The compressed payload is streamed to `<dest>/<basename>` and then inflated
//! next to it as `<dest>/<basename without .gz>`. Both files stay on disk so a
//! later run with `reuse_if_exists` can skip the network entirely.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use futures::StreamExt;
use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use crate::Reporter;
use crate::error::{Error, Result};

/// Extract the filename from a URL.
///
/// # Example
///
/// ```
/// use packstats_core::fetch::filename_from_url;
///
/// assert_eq!(filename_from_url("http://m/debian/Contents-amd64.gz"), "Contents-amd64.gz");
/// assert_eq!(filename_from_url(""), "");
/// ```
pub fn filename_from_url(url: &str) -> &str {
    url.split('/').next_back().unwrap_or("")
}

/// Local paths for a remote index: `(compressed, decompressed)`.
pub fn local_paths(url: &str, dest_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let basename = filename_from_url(url);
    if basename.is_empty() {
        return Err(Error::io(
            dest_dir,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("URL has no file name: {url}"),
            ),
        ));
    }

    let stem = Path::new(basename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(basename);
    let decompressed = if stem == basename {
        format!("{basename}.out")
    } else {
        stem.to_string()
    };

    Ok((dest_dir.join(basename), dest_dir.join(decompressed)))
}

/// Downloads Contents indices over HTTP.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Fetcher sharing `client`'s connection pool.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Make `url`'s decompressed index available under `dest_dir`.
    ///
    /// Returns the decompressed path. With `reuse_if_exists`, an existing
    /// decompressed file short-circuits without any request.
    pub async fn fetch<R: Reporter + ?Sized>(
        &self,
        url: &str,
        dest_dir: &Path,
        reuse_if_exists: bool,
        reporter: &R,
    ) -> Result<PathBuf> {
        let (gz_path, out_path) = local_paths(url, dest_dir)?;

        if reuse_if_exists && out_path.exists() {
            tracing::info!("Reusing {}", out_path.display());
            reporter.reused(&out_path);
            return Ok(out_path);
        }

        tokio::fs::create_dir_all(dest_dir)
            .await
            .map_err(|e| Error::io(dest_dir, e))?;

        self.download(url, &gz_path, reporter).await?;
        reporter.written(&gz_path);

        decompress_gz(&gz_path, &out_path)?;
        tracing::info!("Extracted {}", out_path.display());
        reporter.written(&out_path);

        Ok(out_path)
    }

    async fn download<R: Reporter + ?Sized>(
        &self,
        url: &str,
        dest: &Path,
        reporter: &R,
    ) -> Result<()> {
        tracing::debug!("Downloading {url} -> {}", dest.display());

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::fetch(url, e))?;

        let total_size = response.content_length();
        reporter.downloading(url, 0, total_size);

        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| Error::io(dest, e))?;
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::fetch(url, e))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| Error::io(dest, e))?;
            downloaded += chunk.len() as u64;
            reporter.downloading(url, downloaded, total_size);
        }

        file.flush().await.map_err(|e| Error::io(dest, e))?;
        Ok(())
    }
}

/// Inflate the gzip file `src` into `dest`, replacing any existing file.
///
/// Every gzip member is decoded. The output is staged in a temporary file next
/// to `dest` and only moved into place once the whole stream decoded, so a
/// corrupt payload never leaves a truncated `dest` behind.
///
/// Read failures are reported as [`Error::Decompress`], write failures as
/// [`Error::Io`].
pub fn decompress_gz(src: &Path, dest: &Path) -> Result<()> {
    let input = File::open(src).map_err(|e| Error::io(src, e))?;
    let mut decoder = MultiGzDecoder::new(BufReader::new(input));

    let staging_dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staged = NamedTempFile::new_in(staging_dir).map_err(|e| Error::io(staging_dir, e))?;
    let mut writer = BufWriter::new(staged);
    let mut buf = vec![0u8; 64 * 1024];

    loop {
        let n = match decoder.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(Error::Decompress {
                    path: src.to_path_buf(),
                    source,
                });
            }
        };
        writer
            .write_all(&buf[..n])
            .map_err(|e| Error::io(dest, e))?;
    }

    let staged = writer
        .into_inner()
        .map_err(|e| Error::io(dest, e.into_error()))?;
    staged
        .persist(dest)
        .map_err(|e| Error::io(dest, e.error))?;
    Ok(())
}
