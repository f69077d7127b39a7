use crate::demo::DEFAULT_SEPARATOR;
use crate::protocol::Protocol;
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/tdm/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdmConfig {
    /// Protocol used when a URI scheme is not recognised (None = reject such URIs).
    #[serde(default)]
    pub default_protocol: Option<Protocol>,
    /// Line printed between the two runs of `tdm demo`.
    #[serde(default = "default_separator")]
    pub demo_separator: String,
    /// tracing filter directives (e.g. "warn,tdm_core=debug"); `RUST_LOG` still wins.
    #[serde(default)]
    pub log_filter: Option<String>,
    /// Directory for `tdm.log` (None = XDG state dir).
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for TdmConfig {
    fn default() -> Self {
        Self {
            default_protocol: None,
            demo_separator: default_separator(),
            log_filter: None,
            log_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tdm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TdmConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TdmConfig::default();
        write_default(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<TdmConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: TdmConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Process-wide configuration, loaded from disk on first use.
///
/// Concurrent first callers block until one load finishes; a failed load
/// leaves the cell empty so the next call tries again.
pub fn shared() -> Result<&'static TdmConfig> {
    static SHARED: OnceCell<TdmConfig> = OnceCell::new();
    load_once(&SHARED, load_or_init)
}

fn load_once<F>(cell: &OnceCell<TdmConfig>, load: F) -> Result<&TdmConfig>
where
    F: FnOnce() -> Result<TdmConfig>,
{
    cell.get_or_try_init(load)
}

fn write_default(path: &Path, cfg: &TdmConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}
