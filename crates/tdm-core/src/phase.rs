//! Phases of a download run and who executed them.

use std::fmt;

/// One step of the fixed download procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Fixed pre-phase, always run by the runner.
    Prepare,
    /// Required phase, always delegated to the variant.
    Download,
    /// Optional phase: variant override if present, else the runner default.
    Save,
    /// Fixed post-phase, always run by the runner.
    Finish,
}

impl Phase {
    /// Canonical execution order.
    pub const ORDER: [Phase; 4] = [Phase::Prepare, Phase::Download, Phase::Save, Phase::Finish];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Prepare => "prepare",
            Phase::Download => "download",
            Phase::Save => "save",
            Phase::Finish => "finish",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who ran a given phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseSource {
    /// Fixed runner step.
    Runner,
    /// Variant implementation (required phase or an override).
    Variant,
    /// Runner default for an optional phase the variant did not override.
    Default,
}

/// Record of a single `Runner::run` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub uri: String,
    pub phases: Vec<(Phase, PhaseSource)>,
}

impl RunReport {
    pub(crate) fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            phases: Vec::with_capacity(Phase::ORDER.len()),
        }
    }

    pub(crate) fn record(&mut self, phase: Phase, source: PhaseSource) {
        self.phases.push((phase, source));
    }

    /// Source of the given phase, if it ran.
    pub fn source_of(&self, phase: Phase) -> Option<PhaseSource> {
        self.phases
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, s)| *s)
    }
}
