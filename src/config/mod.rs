//! Configuration for installation discovery.
//!
//! - [`file`] - persistent overrides loaded from `config.toml`
//! - [`logging`] - `tracing` subscriber setup for the binary

pub mod file;
pub mod logging;

pub use file::{FileConfig, PolicyOverride};
pub use logging::{LogConfig, init_logging};
