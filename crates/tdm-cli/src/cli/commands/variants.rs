//! `tdm variants` – list built-in variants.

use anyhow::Result;
use std::io::Write;
use tdm_core::{variants, Protocol};

pub fn run_variants(out: &mut dyn Write) -> Result<()> {
    for p in Protocol::ALL {
        let downloader = variants::for_protocol(p);
        let save = if downloader.overrides_save() {
            "overrides save"
        } else {
            "default save"
        };
        writeln!(out, "{}\t{}", downloader.name(), save)?;
    }
    Ok(())
}
