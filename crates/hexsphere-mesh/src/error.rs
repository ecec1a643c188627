//! Mesh construction errors.

use crate::{FaceId, VertexId};

/// Errors raised while building a [`TriangleMesh`](crate::TriangleMesh).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MeshError {
    /// Subdivision frequency must be at least 1.
    #[error("invalid subdivision frequency: {0}")]
    InvalidFrequency(u32),

    /// A face references a vertex past the end of the position list.
    #[error("face {face:?} references vertex {vertex:?} but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        /// Offending face.
        face: FaceId,
        /// Offending vertex index.
        vertex: VertexId,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A face uses the same vertex more than once.
    #[error("face {0:?} is degenerate")]
    DegenerateFace(FaceId),
}
