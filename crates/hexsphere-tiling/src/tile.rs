//! The tile record produced by grouping.

use glam::DVec3;
use hexsphere_mesh::{FaceId, VertexId};

/// How a tile entered the tiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileOrigin {
    /// Built directly on a degree-5 seed vertex.
    Seed,
    /// Discovered by walking across an edge from a neighboring tile.
    Neighbor,
}

/// Shape of a tile, by the size of its vertex ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Five ring vertices.
    Pentagon,
    /// Six ring vertices.
    Hexagon,
    /// Any other ring size (partial tiles on meshes that do not tile cleanly).
    Other(usize),
}

/// A group of triangles sharing one center vertex.
///
/// Tiles are immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    center: VertexId,
    facet: u32,
    origin: TileOrigin,
    faces: Vec<FaceId>,
    verts: Vec<VertexId>,
    vertices: Vec<DVec3>,
    centroid: DVec3,
}

impl Tile {
    pub(crate) fn new(
        center: VertexId,
        facet: u32,
        origin: TileOrigin,
        faces: Vec<FaceId>,
        verts: Vec<VertexId>,
        vertices: Vec<DVec3>,
        centroid: DVec3,
    ) -> Self {
        debug_assert_eq!(verts.len(), vertices.len());
        Self {
            center,
            facet,
            origin,
            faces,
            verts,
            vertices,
            centroid,
        }
    }

    /// The vertex every face of this tile shares.
    pub fn center(&self) -> VertexId {
        self.center
    }

    /// Id of the seed cluster this tile belongs to.
    pub fn facet(&self) -> u32 {
        self.facet
    }

    /// Whether this tile is a seed or was discovered from a neighbor.
    pub fn origin(&self) -> TileOrigin {
        self.origin
    }

    /// Claimed faces, in the order they were collected.
    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    /// Ring vertices in first-seen order, without duplicates, excluding the center.
    ///
    /// First-seen order follows face collection, so it is not guaranteed to
    /// walk the ring cyclically.
    pub fn verts(&self) -> &[VertexId] {
        &self.verts
    }

    /// Positions of [`verts`](Self::verts), index for index.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Position of the center vertex.
    ///
    /// Note: this is the center vertex itself, not the average of the ring.
    /// Use [`ring_centroid`](Self::ring_centroid) for the latter.
    pub fn centroid(&self) -> DVec3 {
        self.centroid
    }

    /// Arithmetic mean of the ring vertex positions, or `None` for an empty ring.
    pub fn ring_centroid(&self) -> Option<DVec3> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum: DVec3 = self.vertices.iter().copied().sum();
        Some(sum / self.vertices.len() as f64)
    }

    /// Shape by ring size.
    pub fn kind(&self) -> TileKind {
        match self.verts.len() {
            5 => TileKind::Pentagon,
            6 => TileKind::Hexagon,
            n => TileKind::Other(n),
        }
    }

    /// Whether the tile claimed no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
