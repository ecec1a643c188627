//! Triangle-mesh input for the tiler: typed vertex/face ids, the
//! [`MeshAdapter`] boundary, geodesic icosphere generation and radial
//! projection onto a sphere.

mod error;
mod icosphere;
mod mesh;
mod projection;
mod topology;

pub use error::MeshError;
pub use icosphere::{ICOSAHEDRON_VERTEX_COUNT, icosahedron, icosphere, octahedron};
pub use mesh::{MeshAdapter, TriangleMesh};
pub use projection::project_to_sphere;
pub use topology::{Edge, FaceId, Triangle, VertexId};
