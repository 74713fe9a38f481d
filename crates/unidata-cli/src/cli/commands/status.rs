//! `unidata status` – list the cached table files without touching the network.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use unidata_core::config::RefreshConfig;

pub fn run_status(cfg: &RefreshConfig) -> Result<()> {
    print_dir("data", &cfg.data_dir)?;
    print_dir("test data", &cfg.test_data_dir)?;
    Ok(())
}

fn print_dir(label: &str, dir: &Path) -> Result<()> {
    println!("{} ({})", label, dir.display());
    if !dir.exists() {
        println!("  (not downloaded)");
        return Ok(());
    }

    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .collect::<Result<_, _>>()
        .with_context(|| format!("failed to read entry in {}", dir.display()))?;
    entries.sort_by_key(|e| e.file_name());

    let mut printed = 0usize;
    for entry in entries {
        let meta = entry.metadata()?;
        if !meta.is_file() {
            continue;
        }
        println!(
            "  {:<24} {:>10}",
            entry.file_name().to_string_lossy(),
            meta.len()
        );
        printed += 1;
    }
    if printed == 0 {
        println!("  (empty)");
    }
    Ok(())
}
