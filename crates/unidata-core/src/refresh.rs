//! Refresh driver: reset the cache directories, then fetch each manifest file.

use anyhow::Result;
use std::path::PathBuf;

use crate::cache;
use crate::config::RefreshConfig;
use crate::fetch;
use crate::manifest::{self, Manifest};

/// One downloaded file: final path and body size.
#[derive(Debug, Clone)]
pub struct FetchedFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Outcome of a full refresh, in fetch order.
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub files: Vec<FetchedFile>,
}

/// Wipes both cache directories, then downloads every manifest file into
/// place, sequentially and in manifest order. The first failure aborts the
/// run; re-running starts over from the reset.
pub fn run_refresh(cfg: &RefreshConfig) -> Result<RefreshReport> {
    // The test dir may nest under the data dir, so the data dir is reset
    // first.
    cache::reset_dir(&cfg.data_dir)?;
    cache::reset_dir(&cfg.test_data_dir)?;

    let manifests = [
        Manifest {
            label: "data",
            files: &cfg.data_files,
            target_dir: &cfg.data_dir,
        },
        Manifest {
            label: "test data",
            files: &cfg.test_data_files,
            target_dir: &cfg.test_data_dir,
        },
    ];

    let mut report = RefreshReport::default();
    for m in &manifests {
        for name in m.files {
            let url = manifest::source_url(&cfg.url_prefix, name)?;
            let dest = m.target_dir.join(manifest::local_name(name));
            let bytes = fetch::fetch(&url, &dest)?;
            tracing::info!(%url, path = %dest.display(), bytes, "fetched {} file", m.label);
            report.files.push(FetchedFile { path: dest, bytes });
        }
    }
    Ok(report)
}
