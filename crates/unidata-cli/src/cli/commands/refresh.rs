//! `unidata refresh` – wipe the cache directories and download fresh tables.

use anyhow::Result;
use unidata_core::config::RefreshConfig;
use unidata_core::refresh;

pub fn run_refresh(cfg: &RefreshConfig) -> Result<()> {
    let report = refresh::run_refresh(cfg)?;
    for file in &report.files {
        println!("{:>10}  {}", file.bytes, file.path.display());
    }
    println!(
        "Refreshed {} file(s) from {}",
        report.files.len(),
        cfg.url_prefix
    );
    Ok(())
}
