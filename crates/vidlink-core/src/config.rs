use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How resolved links are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated `provider id embed_url player` lines.
    #[default]
    Text,
    /// One JSON object (or `null`) per link.
    Json,
}

/// Global configuration loaded from `~/.config/vidlink/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VidlinkConfig {
    /// Output format when `--format` is not given.
    pub output_format: OutputFormat,
    /// Exit with status 1 when any link cannot be resolved.
    pub fail_on_unresolved: bool,
}

impl Default for VidlinkConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            fail_on_unresolved: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vidlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VidlinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VidlinkConfig::default();
        write_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<VidlinkConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: VidlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Write `cfg` as pretty TOML, creating parent directories as needed.
pub fn write_to(path: &Path, cfg: &VidlinkConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg).context("serialize config")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}
