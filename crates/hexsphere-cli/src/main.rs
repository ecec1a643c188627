//! `hexsphere`: tile a geodesic sphere into pentagons and hexagons.
//!
//! Builds an icosphere at the configured frequency, projects it to the
//! configured radius, groups its faces into tiles and writes the tile
//! records as JSON or RON.
//!
//! Run with: `cargo run -p hexsphere-cli -- --frequency 6 --output tiles.json`

mod pipeline;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hexsphere_config::{CliArgs, Config};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|d| d.join("hexsphere"))
            .unwrap_or_else(|| PathBuf::from(".hexsphere"))
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    hexsphere_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        "Sphere: frequency={}, radius={} | Export: {:?}",
        config.sphere.frequency, config.sphere.radius, config.export.format
    );

    match pipeline::run(&config, args.output.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
