//! The [`MeshAdapter`] boundary and its indexed-triangle implementation.

use glam::DVec3;

use crate::{FaceId, MeshError, Triangle, VertexId};

/// Read-only view of a closed triangle mesh.
///
/// This is the only surface the tiler depends on. Implementors must keep
/// positions and faces fixed for as long as a borrow is held.
pub trait MeshAdapter {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Position of vertex `v`.
    ///
    /// # Panics
    ///
    /// May panic if `v` is out of range.
    fn position(&self, v: VertexId) -> DVec3;

    /// All triangles, indexed by [`FaceId`].
    fn triangles(&self) -> &[Triangle];

    /// Faces that use vertex `v`, in ascending face order.
    fn faces_around(&self, v: VertexId) -> &[FaceId];

    /// Number of triangles.
    fn face_count(&self) -> usize {
        self.triangles().len()
    }

    /// Triangle `f`.
    fn triangle(&self, f: FaceId) -> Triangle {
        self.triangles()[f.index()]
    }

    /// Number of faces incident to `v`.
    fn vertex_degree(&self, v: VertexId) -> usize {
        self.faces_around(v).len()
    }
}

/// Indexed triangle mesh with a precomputed vertex-to-face table.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    positions: Vec<DVec3>,
    triangles: Vec<Triangle>,
    incident: Vec<Vec<FaceId>>,
}

impl TriangleMesh {
    /// Build a mesh, validating face indices and building the incidence table.
    pub fn new(positions: Vec<DVec3>, triangles: Vec<Triangle>) -> Result<Self, MeshError> {
        let vertex_count = positions.len();
        let mut incident = vec![Vec::new(); vertex_count];

        for (i, tri) in triangles.iter().enumerate() {
            let face = FaceId(i as u32);
            let [a, b, c] = tri.vertices();
            if a == b || b == c || a == c {
                return Err(MeshError::DegenerateFace(face));
            }
            for v in [a, b, c] {
                let slot = incident
                    .get_mut(v.index())
                    .ok_or(MeshError::VertexOutOfRange {
                        face,
                        vertex: v,
                        vertex_count,
                    })?;
                slot.push(face);
            }
        }

        Ok(Self {
            positions,
            triangles,
            incident,
        })
    }

    /// Convenience constructor from raw index triples.
    pub fn from_indices(positions: Vec<DVec3>, faces: &[[u32; 3]]) -> Result<Self, MeshError> {
        let triangles = faces
            .iter()
            .map(|&[a, b, c]| Triangle::from_indices(a, b, c))
            .collect();
        Self::new(positions, triangles)
    }

    /// All vertex positions.
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Mutable access to positions. Topology cannot change through this.
    pub fn positions_mut(&mut self) -> &mut [DVec3] {
        &mut self.positions
    }
}

impl MeshAdapter for TriangleMesh {
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn position(&self, v: VertexId) -> DVec3 {
        self.positions[v.index()]
    }

    fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    fn faces_around(&self, v: VertexId) -> &[FaceId] {
        self.incident.get(v.index()).map(Vec::as_slice).unwrap_or(&[])
    }
}
