//! Capability set a variant supplies to the runner.
//!
//! A variant implements the delegatable phases only. Ordering, the fixed
//! prepare/finish phases and all writing of the save phase belong to
//! [`crate::runner::Runner`].

use std::io::{self, Write};

/// Delegatable phases of the download procedure.
pub trait Variant {
    /// Short name used in listings and logs (e.g. `"http"`).
    fn name(&self) -> &'static str;

    /// Required phase. Receives the input stored by the runner for this run.
    fn download(&self, uri: &str, out: &mut dyn Write) -> io::Result<()>;

    /// Optional phase. `Some(line)` replaces the runner's default save line;
    /// `None` keeps the default. The runner writes whichever applies, once.
    fn save(&self) -> Option<String> {
        None
    }
}
