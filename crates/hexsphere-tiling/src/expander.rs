//! Edge-walking discovery of the hexagonal tiles around a seed.
//!
//! From a tile, every face's base edge (the side opposite the tile center)
//! borders a face of some neighboring tile. If that face is still unclaimed,
//! its apex becomes the center of a new tile. Discovery continues depth-first
//! from each new tile.
//!
//! ```text
//!        apex            new tile center
//!        /  \
//!       / g  \           g: far face, first face of the new tile
//!      a------b          base edge of f
//!       \ f  /
//!        \  /            f: face of the current tile
//!       center
//! ```
//!
//! A face that has produced a neighbor, and the far face it led to, are both
//! marked spent. A spent face is never searched again: its base edge already
//! has a claimed tile on each side.

use hexsphere_mesh::{FaceId, MeshAdapter, VertexId};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::builder::claim_tile;
use crate::{FaceVisitedSet, Tile, TileOrigin};

/// Walks outward from seed tiles, claiming neighbors.
///
/// Holds the spent-face marks for one grouping run; create a fresh expander
/// alongside each fresh [`FaceVisitedSet`].
pub struct HexExpander<'m, M: MeshAdapter + ?Sized> {
    mesh: &'m M,
    spent: FxHashSet<FaceId>,
}

impl<'m, M: MeshAdapter + ?Sized> HexExpander<'m, M> {
    /// Expander over `mesh` with no spent faces.
    pub fn new(mesh: &'m M) -> Self {
        Self {
            mesh,
            spent: FxHashSet::default(),
        }
    }

    /// Expand from `tile`, returning it followed by every tile discovered
    /// from it in depth-first pre-order.
    ///
    /// Uses an explicit stack, so depth is bounded by memory rather than the
    /// call stack. Once every mesh face is claimed no more searching happens;
    /// tiles already discovered are still returned.
    pub fn expand(&mut self, visited: &mut FaceVisitedSet, tile: Tile) -> Vec<Tile> {
        let face_count = self.mesh.face_count();
        let mut out = Vec::new();
        let mut stack = vec![tile];

        while let Some(tile) = stack.pop() {
            let neighbors = if visited.len() < face_count {
                self.neighbors_of(visited, &tile)
            } else {
                Vec::new()
            };
            out.push(tile);
            // Reversed so the first neighbor is expanded first.
            stack.extend(neighbors.into_iter().rev());
        }

        out
    }

    /// Claim the unclaimed tiles across the base edges of `tile`'s unspent faces.
    fn neighbors_of(&mut self, visited: &mut FaceVisitedSet, tile: &Tile) -> Vec<Tile> {
        let mut found = Vec::new();
        for &face in tile.faces() {
            if self.spent.contains(&face) {
                continue;
            }
            let Some((far, apex)) = self.far_side(visited, tile.center(), face) else {
                continue;
            };
            self.spent.insert(face);
            self.spent.insert(far);

            let neighbor =
                claim_tile(self.mesh, visited, apex, tile.facet(), TileOrigin::Neighbor);
            trace!(
                "Tile {:?} -> {:?} via face {:?}: {} faces",
                tile.center(),
                apex,
                face,
                neighbor.faces().len()
            );
            found.push(neighbor);
        }
        found
    }

    /// The unvisited face across `face`'s base edge and its apex, if any.
    fn far_side(
        &self,
        visited: &FaceVisitedSet,
        center: VertexId,
        face: FaceId,
    ) -> Option<(FaceId, VertexId)> {
        let base = self.mesh.triangle(face).base(center)?;
        let (a, _) = base.endpoints();
        self.mesh.faces_around(a).iter().find_map(|&candidate| {
            if visited.contains(candidate) {
                return None;
            }
            let tri = self.mesh.triangle(candidate);
            if tri.contains(center) {
                return None;
            }
            tri.apex(base).map(|apex| (candidate, apex))
        })
    }
}
