//! CLI for the TDM phased downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use tdm_core::{config, logging};
use tdm_core::Protocol;

use commands::{run_demo, run_fetch, run_variants};

/// Top-level CLI for the TDM phased downloader.
#[derive(Debug, Parser)]
#[command(name = "tdm")]
#[command(about = "TDM: fixed-order downloader with pluggable protocol variants", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the download procedure for one or more URIs.
    Fetch {
        /// URIs to process, in order.
        #[arg(required = true)]
        uris: Vec<String>,
        /// Force a protocol instead of detecting it from the URI scheme.
        #[arg(long, value_name = "PROTOCOL")]
        via: Option<Protocol>,
    },

    /// Run the built-in HTTP and FTP scenarios back to back.
    Demo,

    /// List built-in variants and whether they override save.
    Variants,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::shared()?;

        // Log file settings come from the config, so logging starts after it loads.
        if let Err(err) = logging::init_logging(cfg) {
            logging::init_logging_stderr(cfg);
            tracing::warn!("file logging unavailable: {:#}", err);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::Fetch { uris, via } => run_fetch(&mut out, cfg, &uris, via)?,
            CliCommand::Demo => run_demo(&mut out, cfg)?,
            CliCommand::Variants => run_variants(&mut out)?,
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
