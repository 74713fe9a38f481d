//! Blocking HTTP GET fetcher.
//!
//! Streams the response body into a temp file and renames it onto the
//! destination once the transfer finished with a success status. A failed
//! fetch leaves nothing at the destination path.

use crate::storage::StorageWriter;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const TOTAL_TIMEOUT: Duration = Duration::from_secs(300);

/// Error from a single fetch, kept apart from `anyhow` so HTTP status and
/// transport failures stay distinguishable to callers and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported an error (DNS, connect, timeout, write abort, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
}

/// Fetches `url` and writes the full response body to `dest`, creating or
/// replacing the file. Blocking; no retry. `dest`'s parent directory must
/// exist. Returns the number of bytes written on success.
pub fn fetch(url: &str, dest: &Path) -> Result<u64> {
    let writer = StorageWriter::create(dest)?;
    match perform_get(url, &writer) {
        Ok(written) => {
            writer.sync()?;
            writer.finalize(dest)?;
            Ok(written)
        }
        Err(err) => {
            writer.discard();
            Err(err).with_context(|| format!("failed to fetch {url}"))
        }
    }
}

/// Runs the GET transfer, writing body bytes into `storage` as they arrive.
fn perform_get(url: &str, storage: &StorageWriter) -> Result<u64, FetchError> {
    let offset = Arc::new(AtomicU64::new(0));
    let offset_cb = Arc::clone(&offset);
    let storage = storage.clone();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;
    easy.timeout(TOTAL_TIMEOUT)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(move |data| {
            let off = offset_cb.fetch_add(data.len() as u64, Ordering::Relaxed);
            match storage.write_at(off, data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    tracing::warn!("write to temp file failed: {}", e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code < 200 || code >= 300 {
        return Err(FetchError::Http {
            url: url.to_string(),
            status: code,
        });
    }

    Ok(offset.load(Ordering::Relaxed))
}
