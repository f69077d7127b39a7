//! Logging setup. Phase markers own stdout, so tracing output goes to
//! `tdm.log` under the state dir (or stderr when that cannot be opened).
//!
//! Filter precedence: `RUST_LOG`, then `log_filter` from the config, then
//! [`DEFAULT_FILTER`].

use crate::config::TdmConfig;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,tdm=debug,tdm_core=debug";
pub const LOG_FILE_NAME: &str = "tdm.log";

/// Resolve the filter: `RUST_LOG` wins, else `configured`, else the default.
/// A malformed configured filter is an error rather than silently ignored.
pub fn env_filter(configured: Option<&str>) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    match configured {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log_filter {directives:?}")),
        None => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Directory holding `tdm.log`: `log_dir` from the config, else the XDG state dir.
pub fn log_dir(cfg: &TdmConfig) -> Result<PathBuf> {
    match &cfg.log_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(xdg::BaseDirectories::with_prefix("tdm")?.get_state_home()),
    }
}

/// Open (append) the log file inside `dir`, creating the directory if needed.
pub fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((file, path))
}

fn subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish()
}

/// Install the global subscriber writing to the configured log file.
/// On failure the caller falls back to [`init_logging_stderr`].
pub fn init_logging(cfg: &TdmConfig) -> Result<()> {
    let filter = env_filter(cfg.log_filter.as_deref())?;
    let (file, path) = open_log_file(&log_dir(cfg)?)?;
    tracing::subscriber::set_global_default(subscriber(filter, Mutex::new(file)))?;
    tracing::info!("tdm logging initialized at {}", path.display());
    Ok(())
}

/// Install a stderr-only subscriber; never fails.
pub fn init_logging_stderr(cfg: &TdmConfig) {
    let filter = env_filter(cfg.log_filter.as_deref())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing::subscriber::set_global_default(subscriber(filter, std::io::stderr));
}
