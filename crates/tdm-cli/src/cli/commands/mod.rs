//! CLI command handlers. Each writes to the given sink so tests can capture output.

mod demo;
mod fetch;
mod variants;

pub use demo::run_demo;
pub use fetch::run_fetch;
pub use variants::run_variants;
