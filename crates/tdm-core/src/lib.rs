//! Core of the `tdm` phased downloader: a fixed-order runner that delegates
//! the download and save steps to pluggable protocol variants.

pub mod config;
pub mod logging;

pub mod demo;
pub mod phase;
pub mod protocol;
pub mod runner;
pub mod variant;
pub mod variants;

pub use phase::{Phase, PhaseSource, RunReport};
pub use protocol::{Protocol, ProtocolError};
pub use runner::{Downloader, RunError, Runner};
pub use variant::Variant;
