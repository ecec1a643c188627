//! Tile construction around a single center vertex.

use hexsphere_mesh::{FaceId, MeshAdapter, VertexId};

use crate::{FaceVisitedSet, Tile, TileOrigin};

/// Claim every unvisited face around `center` and return them as a seed tile.
///
/// Faces are marked visited as they are collected, so calling this twice for
/// the same center in one run gives an empty (or partial) second tile.
pub fn build_tile<M: MeshAdapter + ?Sized>(
    mesh: &M,
    visited: &mut FaceVisitedSet,
    center: VertexId,
    facet: u32,
) -> Tile {
    claim_tile(mesh, visited, center, facet, TileOrigin::Seed)
}

pub(crate) fn claim_tile<M: MeshAdapter + ?Sized>(
    mesh: &M,
    visited: &mut FaceVisitedSet,
    center: VertexId,
    facet: u32,
    origin: TileOrigin,
) -> Tile {
    let faces: Vec<FaceId> = mesh
        .faces_around(center)
        .iter()
        .copied()
        .filter(|&f| visited.mark_visited(f))
        .collect();

    let verts = ring_vertices(mesh, &faces, center);
    let vertices = verts.iter().map(|&v| mesh.position(v)).collect();

    Tile::new(
        center,
        facet,
        origin,
        faces,
        verts,
        vertices,
        mesh.position(center),
    )
}

/// Distinct corners of `faces` other than `center`, in first-seen order.
fn ring_vertices<M: MeshAdapter + ?Sized>(
    mesh: &M,
    faces: &[FaceId],
    center: VertexId,
) -> Vec<VertexId> {
    // Rings are tiny; a linear scan beats hashing.
    let mut ring: Vec<VertexId> = Vec::with_capacity(6);
    for &f in faces {
        for v in mesh.triangle(f).vertices() {
            if v != center && !ring.contains(&v) {
                ring.push(v);
            }
        }
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexsphere_mesh::{icosahedron, icosphere};

    #[test]
    fn test_pentagon_around_corner() {
        let mesh = icosphere(3).unwrap();
        let mut visited = FaceVisitedSet::new();
        let tile = build_tile(&mesh, &mut visited, VertexId(0), 0);

        assert_eq!(tile.faces().len(), 5);
        assert_eq!(tile.verts().len(), 5);
        assert!(!tile.verts().contains(&VertexId(0)));
        assert_eq!(visited.len(), 5);
        assert!(tile.faces().iter().all(|&f| visited.contains(f)));
    }

    #[test]
    fn test_positions_follow_ring() {
        let mesh = icosphere(3).unwrap();
        let mut visited = FaceVisitedSet::new();
        let tile = build_tile(&mesh, &mut visited, VertexId(4), 7);

        assert_eq!(tile.facet(), 7);
        assert_eq!(tile.origin(), TileOrigin::Seed);
        assert_eq!(tile.centroid(), mesh.position(VertexId(4)));
        for (v, p) in tile.verts().iter().zip(tile.vertices()) {
            assert_eq!(mesh.position(*v), *p);
        }
    }

    #[test]
    fn test_ring_is_first_seen_order() {
        let mesh = icosahedron();
        let mut visited = FaceVisitedSet::new();
        let tile = build_tile(&mesh, &mut visited, VertexId(0), 0);
        // Faces around vertex 0: [0,11,5] [0,5,1] [0,1,7] [0,7,10] [0,10,11].
        let expected: Vec<VertexId> = [11, 5, 1, 7, 10].into_iter().map(VertexId).collect();
        assert_eq!(tile.verts(), expected.as_slice());
    }

    #[test]
    fn test_building_twice_yields_empty_tile() {
        let mesh = icosphere(3).unwrap();
        let mut visited = FaceVisitedSet::new();
        let first = build_tile(&mesh, &mut visited, VertexId(2), 0);
        let second = build_tile(&mesh, &mut visited, VertexId(2), 0);

        assert_eq!(first.faces().len(), 5);
        assert!(second.is_empty());
        assert!(second.verts().is_empty());
    }

    #[test]
    fn test_skips_faces_claimed_by_neighbor() {
        let mesh = icosahedron();
        let mut visited = FaceVisitedSet::new();
        build_tile(&mesh, &mut visited, VertexId(0), 0);
        // Vertex 1 shares faces [0,5,1] and [0,1,7] with vertex 0.
        let tile = build_tile(&mesh, &mut visited, VertexId(1), 1);
        assert_eq!(tile.faces().len(), 3);
        assert_eq!(visited.len(), 8);
    }
}
