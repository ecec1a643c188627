//! Radial projection of mesh vertices onto a sphere.

use crate::TriangleMesh;

/// Push every vertex out (or in) along its direction from the origin so it
/// lies on a sphere of `radius`.
///
/// Vertices at the origin have no direction and stay where they are.
pub fn project_to_sphere(mesh: &mut TriangleMesh, radius: f64) {
    for p in mesh.positions_mut() {
        *p = p.normalize_or_zero() * radius;
    }
}
