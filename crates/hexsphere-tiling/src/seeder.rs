//! Pentagon seed discovery.

use hexsphere_mesh::{MeshAdapter, VertexId};

/// Incident-face count that marks a pentagon seed.
pub const PENTAGON_DEGREE: usize = 5;

/// Seeds a subdivided icosahedron always has: its original 12 corners.
pub const EXPECTED_PENTAGONS: usize = 12;

/// Every vertex with exactly [`PENTAGON_DEGREE`] incident faces, in
/// ascending index order.
///
/// The count is not checked here; see
/// [`GroupingReport::seed_count_mismatch`](crate::GroupingReport::seed_count_mismatch).
pub fn find_seed_centers<M: MeshAdapter + ?Sized>(mesh: &M) -> Vec<VertexId> {
    (0..mesh.vertex_count() as u32)
        .map(VertexId)
        .filter(|&v| mesh.vertex_degree(v) == PENTAGON_DEGREE)
        .collect()
}
