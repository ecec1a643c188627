//! Run-scoped record of which faces already belong to a tile.

use hexsphere_mesh::FaceId;
use rustc_hash::FxHashSet;

/// Faces claimed so far in one grouping run. Only ever grows.
#[derive(Debug, Default, Clone)]
pub struct FaceVisitedSet {
    faces: FxHashSet<FaceId>,
}

impl FaceVisitedSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty set with room for `capacity` faces.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            faces: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Whether `face` has been claimed.
    #[inline]
    pub fn contains(&self, face: FaceId) -> bool {
        self.faces.contains(&face)
    }

    /// Claim `face`. Returns `false` if it was already claimed.
    #[inline]
    pub fn mark_visited(&mut self, face: FaceId) -> bool {
        self.faces.insert(face)
    }

    /// Number of claimed faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether nothing has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
