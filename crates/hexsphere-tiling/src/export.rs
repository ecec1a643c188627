//! Portable tile records for renderers and file writers.
//!
//! Each record keeps only what a consumer needs to draw a tile: its facet
//! and center ids, the center position, and the ring positions in order.
//! Records encode to JSON or RON.

use serde::{Deserialize, Serialize};

use crate::Tile;

/// Minimal, serializable view of a [`Tile`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    /// Seed cluster id.
    pub facet: u32,
    /// Center vertex index.
    pub center: u32,
    /// Position of the center vertex (see [`Tile::centroid`]).
    pub centroid: [f64; 3],
    /// Ring positions in the tile's vertex order.
    pub vertices: Vec<[f64; 3]>,
}

impl From<&Tile> for TileRecord {
    fn from(tile: &Tile) -> Self {
        Self {
            facet: tile.facet(),
            center: tile.center().0,
            centroid: tile.centroid().to_array(),
            vertices: tile.vertices().iter().map(|p| p.to_array()).collect(),
        }
    }
}

/// Errors from encoding or decoding tile records.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// JSON serialization or parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// RON serialization failed.
    #[error("failed to encode RON: {0}")]
    RonEncode(#[from] ron::Error),

    /// RON parsing failed.
    #[error("failed to decode RON: {0}")]
    RonDecode(#[from] ron::error::SpannedError),
}

/// Convert tiles to records, preserving order.
pub fn to_portable(tiles: &[Tile]) -> Vec<TileRecord> {
    tiles.iter().map(TileRecord::from).collect()
}

/// Encode tiles as a JSON array of records.
pub fn to_json(tiles: &[Tile], pretty: bool) -> Result<String, ExportError> {
    let records = to_portable(tiles);
    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    Ok(json)
}

/// Parse records written by [`to_json`].
pub fn from_json(json: &str) -> Result<Vec<TileRecord>, ExportError> {
    Ok(serde_json::from_str(json)?)
}

/// Encode tiles as a RON list of records.
pub fn to_ron(tiles: &[Tile], pretty: bool) -> Result<String, ExportError> {
    let records = to_portable(tiles);
    let ron = if pretty {
        ron::ser::to_string_pretty(&records, ron::ser::PrettyConfig::new().depth_limit(2))?
    } else {
        ron::to_string(&records)?
    };
    Ok(ron)
}

/// Parse records written by [`to_ron`].
pub fn from_ron(ron: &str) -> Result<Vec<TileRecord>, ExportError> {
    Ok(ron::from_str(ron)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group_faces;
    use hexsphere_mesh::icosphere;

    fn tiles() -> Vec<Tile> {
        group_faces(&icosphere(3).unwrap()).tiles
    }

    fn assert_matches_tiles(records: &[TileRecord], tiles: &[Tile]) {
        assert_eq!(records.len(), tiles.len());
        for (record, tile) in records.iter().zip(tiles) {
            assert_eq!(record.facet, tile.facet());
            assert_eq!(record.center, tile.center().0);
            assert_eq!(record.centroid, tile.centroid().to_array());
            let expected: Vec<[f64; 3]> = tile.vertices().iter().map(|p| p.to_array()).collect();
            assert_eq!(record.vertices, expected);
        }
    }

    #[test]
    fn test_to_portable_keeps_order_and_fields() {
        let tiles = tiles();
        assert_matches_tiles(&to_portable(&tiles), &tiles);
    }

    #[test]
    fn test_json_round_trip() {
        let tiles = tiles();
        for pretty in [false, true] {
            let json = to_json(&tiles, pretty).unwrap();
            let parsed = from_json(&json).unwrap();
            assert_matches_tiles(&parsed, &tiles);
        }
    }

    #[test]
    fn test_ron_round_trip() {
        let tiles = tiles();
        for pretty in [false, true] {
            let ron = to_ron(&tiles, pretty).unwrap();
            let parsed = from_ron(&ron).unwrap();
            assert_matches_tiles(&parsed, &tiles);
        }
    }

    #[test]
    fn test_json_field_names() {
        let json = to_json(&tiles()[..1], false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let record = &value[0];
        assert_eq!(record["facet"], 0);
        assert_eq!(record["center"], 0);
        assert_eq!(record["centroid"].as_array().map(Vec::len), Some(3));
        assert_eq!(record["vertices"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_empty_tile_list() {
        assert_eq!(to_json(&[], false).unwrap(), "[]");
        assert!(from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_input_is_error() {
        assert!(matches!(from_json("{\"facet\":"), Err(ExportError::Json(_))));
        assert!(matches!(from_ron("[(facet: 1"), Err(ExportError::RonDecode(_))));
    }
}
