use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;
use crate::link::DEFAULT_DOWNLOAD_BASE;

/// Optional configuration loaded from `~/.config/gdfetch/config.toml`.
///
/// Every key may be omitted; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GdfetchConfig {
    /// Endpoint the direct link is built on.
    pub download_base: String,
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Optional limit for the whole transfer in seconds (None = no limit).
    pub timeout_secs: Option<u64>,
    /// Maximum number of redirects followed.
    pub max_redirections: u32,
    /// Optional libcurl receive buffer size in bytes.
    pub buffer_size: Option<usize>,
}

impl Default for GdfetchConfig {
    fn default() -> Self {
        Self {
            download_base: DEFAULT_DOWNLOAD_BASE.to_string(),
            connect_timeout_secs: 30,
            timeout_secs: None,
            max_redirections: 10,
            buffer_size: None,
        }
    }
}

impl GdfetchConfig {
    /// Checks that `download_base` is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.download_base)
            .with_context(|| format!("invalid download_base: {}", self.download_base))?;
        match base.scheme() {
            "http" | "https" => Ok(()),
            other => anyhow::bail!("download_base must be http or https, got {}", other),
        }
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
            max_redirections: self.max_redirections,
            buffer_size: self.buffer_size,
        }
    }
}

/// Location of the user config file, if one exists.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gdfetch")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Reads and validates a config file.
pub fn load_from(path: &Path) -> Result<GdfetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: GdfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Loads `explicit` if given, else the XDG config file if present, else defaults.
/// Never writes anything to disk.
pub fn load(explicit: Option<&Path>) -> Result<GdfetchConfig> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match config_path()? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_from(&path)
        }
        None => Ok(GdfetchConfig::default()),
    }
}
