//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, ExportFormat};

/// Hexsphere command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "hexsphere",
    about = "Group a geodesic sphere's triangles into pentagon and hexagon tiles"
)]
pub struct CliArgs {
    /// Subdivision frequency of the icosphere.
    #[arg(long)]
    pub frequency: Option<u32>,

    /// Sphere radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write tiles to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(frequency) = args.frequency {
            self.sphere.frequency = frequency;
        }
        if let Some(radius) = args.radius {
            self.sphere.radius = radius;
        }
        if let Some(format) = args.format {
            self.export.format = format;
        }
        if let Some(pretty) = args.pretty {
            self.export.pretty = pretty;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            frequency: Some(6),
            format: Some(ExportFormat::Ron),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.sphere.frequency, 6);
        assert_eq!(config.export.format, ExportFormat::Ron);
        // Non-overridden fields retain defaults
        assert_eq!(config.sphere.radius, 1.0);
        assert!(!config.export.pretty);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "hexsphere",
            "--frequency",
            "9",
            "--radius",
            "2.5",
            "--format",
            "ron",
            "-o",
            "tiles.ron",
        ]);
        assert_eq!(args.frequency, Some(9));
        assert_eq!(args.radius, Some(2.5));
        assert_eq!(args.format, Some(ExportFormat::Ron));
        assert_eq!(args.output, Some(PathBuf::from("tiles.ron")));
    }
}
