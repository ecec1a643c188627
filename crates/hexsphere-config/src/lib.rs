//! Configuration for the hexsphere tiler.
//!
//! Settings persist to disk as RON files and can be overridden from the
//! command line via clap. Missing sections and fields fall back to defaults.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, ExportConfig, ExportFormat, SphereConfig};
pub use error::ConfigError;
