//! Goldberg-style tiling of geodesic sphere meshes.
//!
//! Groups the triangles of a closed sphere mesh into tiles centered on mesh
//! vertices: pentagons on the degree-5 vertices and hexagons everywhere
//! else. Every face is claimed by exactly one tile.
//!
//! The pipeline is [`find_seed_centers`] → [`build_tile`] per seed →
//! [`HexExpander::expand`] per pentagon, wrapped up by [`group_faces`].
//! [`to_portable`] turns the result into plain records for export.

mod builder;
mod expander;
mod export;
mod grouping;
mod seeder;
mod tile;
mod visited;


pub use builder::build_tile;
pub use expander::HexExpander;
pub use export::{ExportError, TileRecord, from_json, from_ron, to_json, to_portable, to_ron};
pub use grouping::{Grouping, GroupingReport, group_faces};
pub use seeder::{EXPECTED_PENTAGONS, PENTAGON_DEGREE, find_seed_centers};
pub use tile::{Tile, TileKind, TileOrigin};
pub use visited::FaceVisitedSet;
