//! Mesh → tiles → text, as configured.

use std::io::Write;
use std::path::Path;

use hexsphere_config::{Config, ExportConfig, ExportFormat};
use hexsphere_mesh::{MeshError, icosphere, project_to_sphere};
use hexsphere_tiling::{ExportError, Grouping, Tile, group_faces, to_json, to_ron};
use tracing::{info, warn};

/// Anything that stops a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The configured sphere could not be built.
    #[error("failed to build sphere: {0}")]
    Mesh(#[from] MeshError),

    /// Tiles could not be encoded.
    #[error("failed to encode tiles: {0}")]
    Export(#[from] ExportError),

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Generate, group and write tiles for `config`.
///
/// Writes to `output` if given, otherwise to stdout.
pub fn run(config: &Config, output: Option<&Path>) -> Result<(), RunError> {
    let grouping = generate(config)?;
    if config.debug.report_diagnostics {
        summarize(&grouping);
    }
    let text = encode(&grouping.tiles, &config.export)?;
    write_output(&text, output)
}

/// Build the configured icosphere and group its faces.
pub fn generate(config: &Config) -> Result<Grouping, RunError> {
    if config.sphere.frequency % 3 != 0 {
        warn!(
            "Frequency {} is not a multiple of 3; tiles will not all be pentagons and hexagons",
            config.sphere.frequency
        );
    }
    let mut mesh = icosphere(config.sphere.frequency)?;
    project_to_sphere(&mut mesh, config.sphere.radius);
    Ok(group_faces(&mesh))
}

/// Encode tiles in the configured format.
pub fn encode(tiles: &[Tile], export: &ExportConfig) -> Result<String, RunError> {
    let text = match export.format {
        ExportFormat::Json => to_json(tiles, export.pretty)?,
        ExportFormat::Ron => to_ron(tiles, export.pretty)?,
    };
    Ok(text)
}

fn write_output(text: &str, output: Option<&Path>) -> Result<(), RunError> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            info!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn summarize(grouping: &Grouping) {
    let report = &grouping.report;
    info!(
        "{} pentagons, {} hexagons, {} other tiles; {} unclaimed, {} duplicate faces",
        grouping.pentagons().count(),
        grouping.hexagons().count(),
        grouping.tiles.len() - grouping.pentagons().count() - grouping.hexagons().count(),
        report.unclaimed_faces.len(),
        report.duplicate_claims.len()
    );
}
