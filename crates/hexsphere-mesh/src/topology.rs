//! Index-level topology: vertex and face ids, triangles, and edges.

/// Index of a vertex in a mesh's position list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl VertexId {
    /// The id as a `usize` index.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a triangle in a mesh's face list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u32);

impl FaceId {
    /// The id as a `usize` index.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unordered pair of vertices. Constructed on demand, never stored in the mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    lo: VertexId,
    hi: VertexId,
}

impl Edge {
    /// Create an edge; endpoint order does not matter.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Both endpoints, smaller id first.
    #[must_use]
    pub fn endpoints(self) -> (VertexId, VertexId) {
        (self.lo, self.hi)
    }

    /// Whether `v` is one of the endpoints.
    #[must_use]
    pub fn contains(self, v: VertexId) -> bool {
        self.lo == v || self.hi == v
    }
}

/// A triangle as an ordered triple of vertex ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle(pub [VertexId; 3]);

impl Triangle {
    /// Build a triangle from raw indices.
    #[must_use]
    pub fn from_indices(a: u32, b: u32, c: u32) -> Self {
        Self([VertexId(a), VertexId(b), VertexId(c)])
    }

    /// The three vertex ids in stored order.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> [VertexId; 3] {
        self.0
    }

    /// Whether the triangle uses vertex `v`.
    #[inline]
    #[must_use]
    pub fn contains(&self, v: VertexId) -> bool {
        self.0.contains(&v)
    }

    /// Whether both endpoints of `edge` are corners of this triangle.
    #[must_use]
    pub fn has_edge(&self, edge: Edge) -> bool {
        let (a, b) = edge.endpoints();
        self.contains(a) && self.contains(b)
    }

    /// The edge opposite `center`, or `None` if `center` is not a corner.
    ///
    /// The edge is unordered: endpoints come back sorted (see [`Edge::new`]),
    /// so both windings of the same triangle give the same base.
    #[must_use]
    pub fn base(&self, center: VertexId) -> Option<Edge> {
        let pos = self.0.iter().position(|&v| v == center)?;
        Some(Edge::new(self.0[(pos + 1) % 3], self.0[(pos + 2) % 3]))
    }

    /// The corner not on `edge`, or `None` if `edge` is not a side of this triangle.
    #[must_use]
    pub fn apex(&self, edge: Edge) -> Option<VertexId> {
        if !self.has_edge(edge) {
            return None;
        }
        self.0.iter().copied().find(|&v| !edge.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_is_unordered() {
        let e1 = Edge::new(VertexId(4), VertexId(1));
        let e2 = Edge::new(VertexId(1), VertexId(4));
        assert_eq!(e1, e2);
        assert_eq!(e1.endpoints(), (VertexId(1), VertexId(4)));
        assert!(e1.contains(VertexId(4)));
        assert!(!e1.contains(VertexId(2)));
    }

    #[test]
    fn test_base_is_opposite_center() {
        let tri = Triangle::from_indices(7, 2, 9);
        assert_eq!(tri.base(VertexId(7)), Some(Edge::new(VertexId(2), VertexId(9))));
        assert_eq!(tri.base(VertexId(9)), Some(Edge::new(VertexId(7), VertexId(2))));
        assert_eq!(tri.base(VertexId(3)), None);
    }

    #[test]
    fn test_base_ignores_winding() {
        let ccw = Triangle::from_indices(7, 2, 9);
        let cw = Triangle::from_indices(7, 9, 2);
        let base = ccw.base(VertexId(7)).unwrap();
        assert_eq!(cw.base(VertexId(7)), Some(base));
        assert_eq!(base.endpoints(), (VertexId(2), VertexId(9)));
    }

    #[test]
    fn test_apex_of_shared_edge() {
        let tri = Triangle::from_indices(0, 5, 3);
        let edge = Edge::new(VertexId(3), VertexId(0));
        assert!(tri.has_edge(edge));
        assert_eq!(tri.apex(edge), Some(VertexId(5)));
    }

    #[test]
    fn test_apex_of_foreign_edge_is_none() {
        let tri = Triangle::from_indices(0, 5, 3);
        assert_eq!(tri.apex(Edge::new(VertexId(0), VertexId(8))), None);
    }
}
