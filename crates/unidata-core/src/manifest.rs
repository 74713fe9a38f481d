//! File manifests: which remote data files land in which cache directory.

use anyhow::{Context, Result};
use std::path::Path;
use url::Url;

/// Ordered list of remote filenames destined for one target directory.
/// Static per run; fetch order follows list order.
#[derive(Debug, Clone, Copy)]
pub struct Manifest<'a> {
    /// Short label used in log lines ("data", "test data").
    pub label: &'a str,
    pub files: &'a [String],
    pub target_dir: &'a Path,
}

/// Forms the source URL for a manifest entry by joining `prefix` and `name`.
pub fn source_url(prefix: &str, name: &str) -> Result<String> {
    // A prefix without a trailing slash would drop its last path segment on
    // join, so normalize first.
    let base = if prefix.ends_with('/') {
        Url::parse(prefix)
    } else {
        Url::parse(&format!("{prefix}/"))
    }
    .with_context(|| format!("invalid URL prefix: {prefix}"))?;
    let joined = base
        .join(name)
        .with_context(|| format!("invalid manifest entry: {name}"))?;
    Ok(joined.into())
}

/// Local filename for a manifest entry: its final path segment.
pub fn local_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
