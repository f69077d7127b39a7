//! Fixed-skeleton runner: owns phase ordering and delegates to a [`Variant`].
//!
//! Every run is a single linear pass through [`Phase::ORDER`]. The runner
//! stores the input for the duration of the run and overwrites it on the
//! next call; nothing else carries over between runs.

use crate::phase::{Phase, PhaseSource, RunReport};
use crate::variant::Variant;
use std::io::{self, Write};

pub const PREPARE_MARKER: &str = "prepare downloading";
pub const DEFAULT_SAVE_MARKER: &str = "default save";
pub const FINISH_MARKER: &str = "finish downloading";

/// Error returned by [`Runner::run`]. Phases cannot fail on their own; only
/// writing a marker to the output sink can.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("{phase} phase: failed to write output")]
    Emit {
        phase: Phase,
        #[source]
        source: io::Error,
    },
}

/// Outward-facing entry point exposed by a runner bound to a variant.
pub trait Downloader {
    /// Name of the bound variant.
    fn name(&self) -> &'static str;

    /// Whether the bound variant replaces the runner's default save.
    fn overrides_save(&self) -> bool;

    /// Run the full procedure for `uri`, writing phase markers to `out`.
    fn download(&mut self, uri: &str, out: &mut dyn Write) -> Result<RunReport, RunError>;
}

/// Runs the download procedure for one bound variant.
///
/// `run` takes `&mut self`: one runner must not be driven from several
/// threads at once without external synchronization.
#[derive(Debug)]
pub struct Runner<V> {
    variant: V,
    uri: Option<String>,
}

impl<V: Variant> Runner<V> {
    pub fn new(variant: V) -> Self {
        Self { variant, uri: None }
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }

    /// Input of the most recent run, if any.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn run(&mut self, uri: &str, out: &mut dyn Write) -> Result<RunReport, RunError> {
        self.uri = Some(uri.to_string());
        let variant = self.variant.name();
        let mut report = RunReport::new(uri);
        tracing::debug!(variant, uri, "run started");

        emit_line(out, Phase::Prepare, PREPARE_MARKER)?;
        report.record(Phase::Prepare, PhaseSource::Runner);

        self.variant
            .download(uri, out)
            .map_err(|source| emit_error(Phase::Download, source))?;
        report.record(Phase::Download, PhaseSource::Variant);

        let save_source = match self.variant.save() {
            Some(line) => {
                emit_line(out, Phase::Save, &line)?;
                PhaseSource::Variant
            }
            None => {
                default_save(out)?;
                PhaseSource::Default
            }
        };
        tracing::debug!(variant, source = ?save_source, "save phase done");
        report.record(Phase::Save, save_source);

        emit_line(out, Phase::Finish, FINISH_MARKER)?;
        report.record(Phase::Finish, PhaseSource::Runner);

        tracing::debug!(variant, uri, "run finished");
        Ok(report)
    }
}

impl<V: Variant> Downloader for Runner<V> {
    fn name(&self) -> &'static str {
        self.variant().name()
    }

    fn overrides_save(&self) -> bool {
        self.variant().save().is_some()
    }

    fn download(&mut self, uri: &str, out: &mut dyn Write) -> Result<RunReport, RunError> {
        self.run(uri, out)
    }
}

/// Runner default for the optional save phase.
fn default_save(out: &mut dyn Write) -> Result<(), RunError> {
    emit_line(out, Phase::Save, DEFAULT_SAVE_MARKER)
}

fn emit_line(out: &mut dyn Write, phase: Phase, line: &str) -> Result<(), RunError> {
    writeln!(out, "{line}").map_err(|source| emit_error(phase, source))
}

fn emit_error(phase: Phase, source: io::Error) -> RunError {
    tracing::warn!(%phase, error = %source, "phase output failed");
    RunError::Emit { phase, source }
}
