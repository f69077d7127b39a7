//! `tdm demo` – run the canonical HTTP and FTP scenarios.

use anyhow::Result;
use std::io::Write;
use tdm_core::config::TdmConfig;
use tdm_core::demo;

pub fn run_demo(out: &mut dyn Write, cfg: &TdmConfig) -> Result<()> {
    let reports = demo::run_demo(out, &cfg.demo_separator)?;
    tracing::debug!(runs = reports.len(), "demo finished");
    Ok(())
}
