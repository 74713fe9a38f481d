use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Where the published IDNA tables live. "latest" tracks the current Unicode
/// release, so re-running the tool picks up new versions automatically.
pub const DEFAULT_URL_PREFIX: &str = "http://www.unicode.org/Public/idna/latest/";

fn default_url_prefix() -> String {
    DEFAULT_URL_PREFIX.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/idna")
}

fn default_test_data_dir() -> PathBuf {
    PathBuf::from("data/idna/tests")
}

fn default_data_files() -> Vec<String> {
    vec!["ReadMe.txt".to_string(), "IdnaMappingTable.txt".to_string()]
}

fn default_test_data_files() -> Vec<String> {
    vec!["IdnaTest.txt".to_string()]
}

/// Configuration loaded from `~/.config/unidata/config.toml`. Every field has
/// a default matching the published Unicode layout, so a partial file (or no
/// file at all) works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Base URL the table files are fetched from.
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
    /// Directory for the mapping-table files. Wiped on every refresh.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory for the conformance test files. Wiped on every refresh.
    #[serde(default = "default_test_data_dir")]
    pub test_data_dir: PathBuf,
    /// Filenames fetched into `data_dir`, in order.
    #[serde(default = "default_data_files")]
    pub data_files: Vec<String>,
    /// Filenames fetched into `test_data_dir`, in order.
    #[serde(default = "default_test_data_files")]
    pub test_data_files: Vec<String>,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            url_prefix: default_url_prefix(),
            data_dir: default_data_dir(),
            test_data_dir: default_test_data_dir(),
            data_files: default_data_files(),
            test_data_files: default_test_data_files(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("unidata")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RefreshConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RefreshConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RefreshConfig = toml::from_str(&data)?;
    Ok(cfg)
}
