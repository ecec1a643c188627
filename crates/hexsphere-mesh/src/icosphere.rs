//! Geodesic icosphere construction.
//!
//! Each of the 20 icosahedron faces is cut into a triangular lattice with
//! `frequency` segments per side. Lattice points on a shared icosahedron edge
//! are created once and reused by both neighboring faces, so the result is a
//! closed mesh: the 12 original corners keep five incident faces and every
//! other vertex gets six.
//!
//! ```text
//!            c (j = n)
//!           / \
//!          /   \
//!         /_____\
//!        / \   / \
//!       /   \ /   \
//!      a-----+-----b (i = n)
//! ```

use glam::DVec3;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{MeshError, Triangle, TriangleMesh};

/// Number of vertices on the bare icosahedron.
pub const ICOSAHEDRON_VERTEX_COUNT: usize = 12;

/// Golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_positions() -> Vec<DVec3> {
    [
        (-1.0, PHI, 0.0),
        (1.0, PHI, 0.0),
        (-1.0, -PHI, 0.0),
        (1.0, -PHI, 0.0),
        (0.0, -1.0, PHI),
        (0.0, 1.0, PHI),
        (0.0, -1.0, -PHI),
        (0.0, 1.0, -PHI),
        (PHI, 0.0, -1.0),
        (PHI, 0.0, 1.0),
        (-PHI, 0.0, -1.0),
        (-PHI, 0.0, 1.0),
    ]
    .into_iter()
    .map(|(x, y, z)| DVec3::new(x, y, z).normalize())
    .collect()
}

/// The regular icosahedron inscribed in the unit sphere.
pub fn icosahedron() -> TriangleMesh {
    // Static topology; indices are always in range.
    let triangles = ICOSAHEDRON_FACES
        .iter()
        .map(|&[a, b, c]| Triangle::from_indices(a, b, c))
        .collect::<Vec<_>>();
    build_unchecked(icosahedron_positions(), triangles)
}

/// The regular octahedron inscribed in the unit sphere. Every vertex has
/// four incident faces.
pub fn octahedron() -> TriangleMesh {
    let positions = vec![
        DVec3::X,
        DVec3::NEG_X,
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::Z,
        DVec3::NEG_Z,
    ];
    let triangles = [
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ]
    .iter()
    .map(|&[a, b, c]| Triangle::from_indices(a, b, c))
    .collect::<Vec<_>>();
    build_unchecked(positions, triangles)
}

/// Geodesic sphere with each icosahedron edge split into `frequency` segments.
///
/// The mesh has `10·f² + 2` vertices and `20·f²` faces, all on the unit
/// sphere. `frequency == 1` is the icosahedron itself.
pub fn icosphere(frequency: u32) -> Result<TriangleMesh, MeshError> {
    if frequency == 0 {
        return Err(MeshError::InvalidFrequency(frequency));
    }

    let n = frequency;
    let mut lattice = Lattice {
        n,
        positions: icosahedron_positions(),
        edge_points: FxHashMap::default(),
    };
    let mut triangles = Vec::with_capacity(20 * (n as usize).pow(2));

    for &[a, b, c] in &ICOSAHEDRON_FACES {
        // rows[i][j] is the vertex at a + i·(b - a)/n + j·(c - a)/n.
        let rows: Vec<Vec<u32>> = (0..=n)
            .map(|i| (0..=n - i).map(|j| lattice.vertex(a, b, c, i, j)).collect())
            .collect();

        for i in 0..n as usize {
            let width = n as usize - i;
            for j in 0..width {
                triangles.push(Triangle::from_indices(
                    rows[i][j],
                    rows[i + 1][j],
                    rows[i][j + 1],
                ));
                if j + 1 < width {
                    triangles.push(Triangle::from_indices(
                        rows[i + 1][j],
                        rows[i + 1][j + 1],
                        rows[i][j + 1],
                    ));
                }
            }
        }
    }

    let positions: Vec<DVec3> = lattice
        .positions
        .into_iter()
        .map(DVec3::normalize)
        .collect();

    debug!(
        "Built icosphere: frequency={}, {} vertices, {} faces",
        frequency,
        positions.len(),
        triangles.len()
    );

    TriangleMesh::new(positions, triangles)
}

fn build_unchecked(positions: Vec<DVec3>, triangles: Vec<Triangle>) -> TriangleMesh {
    match TriangleMesh::new(positions, triangles) {
        Ok(mesh) => mesh,
        Err(e) => unreachable!("static polyhedron topology is invalid: {e}"),
    }
}

/// Vertex allocator for the per-face lattices.
struct Lattice {
    n: u32,
    positions: Vec<DVec3>,
    /// `(lo, hi, steps from lo)` → vertex on the icosahedron edge `lo-hi`.
    edge_points: FxHashMap<(u32, u32, u32), u32>,
}

impl Lattice {
    /// Vertex for lattice point `(i, j)` of face `(a, b, c)`.
    fn vertex(&mut self, a: u32, b: u32, c: u32, i: u32, j: u32) -> u32 {
        let n = self.n;
        let k = n - i - j;
        match (i, j, k) {
            (0, 0, _) => a,
            (_, 0, 0) => b,
            (0, _, 0) => c,
            (_, 0, _) => self.edge_vertex(a, b, i),
            (0, _, _) => self.edge_vertex(a, c, j),
            (_, _, 0) => self.edge_vertex(b, c, j),
            _ => {
                let n = f64::from(n);
                let p = self.positions[a as usize] * (f64::from(k) / n)
                    + self.positions[b as usize] * (f64::from(i) / n)
                    + self.positions[c as usize] * (f64::from(j) / n);
                self.push(p)
            }
        }
    }

    /// Vertex `t` steps from `u` toward `v`, shared with the face on the other side.
    fn edge_vertex(&mut self, u: u32, v: u32, t: u32) -> u32 {
        let key = if u < v { (u, v, t) } else { (v, u, self.n - t) };
        if let Some(&id) = self.edge_points.get(&key) {
            return id;
        }
        let (lo, hi, steps) = key;
        let from = self.positions[lo as usize];
        let to = self.positions[hi as usize];
        let id = self.push(from.lerp(to, f64::from(steps) / f64::from(self.n)));
        self.edge_points.insert(key, id);
        id
    }

    fn push(&mut self, p: DVec3) -> u32 {
        self.positions.push(p);
        (self.positions.len() - 1) as u32
    }
}
