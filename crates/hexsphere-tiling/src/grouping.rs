//! One full grouping run and its coverage audit.

use hexsphere_mesh::{FaceId, MeshAdapter};
use tracing::{debug, info, warn};

use crate::{
    EXPECTED_PENTAGONS, FaceVisitedSet, HexExpander, Tile, TileKind, build_tile,
    find_seed_centers,
};

/// Result of [`group_faces`]: the tiles plus what went wrong, if anything.
#[derive(Clone, Debug)]
pub struct Grouping {
    /// Seed tiles each followed by the tiles discovered from them.
    pub tiles: Vec<Tile>,
    /// Coverage diagnostics for this run.
    pub report: GroupingReport,
}

impl Grouping {
    /// Tiles with a five-vertex ring.
    pub fn pentagons(&self) -> impl Iterator<Item = &Tile> {
        self.tiles
            .iter()
            .filter(|t| t.kind() == TileKind::Pentagon)
    }

    /// Tiles with a six-vertex ring.
    pub fn hexagons(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.kind() == TileKind::Hexagon)
    }
}

/// Coverage diagnostics for one grouping run.
///
/// None of these stop the run; they make silent gaps visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupingReport {
    /// Total faces in the mesh.
    pub face_count: usize,
    /// Number of degree-5 seed vertices found.
    pub seed_count: usize,
    /// Faces no tile claimed.
    pub unclaimed_faces: Vec<FaceId>,
    /// Faces claimed by more than one tile.
    pub duplicate_claims: Vec<FaceId>,
    /// Claimed face ids the mesh does not have, in claim order.
    pub foreign_faces: Vec<FaceId>,
}

impl GroupingReport {
    /// Tally face ownership across `tiles`.
    ///
    /// Tiles built from a different mesh may name faces past the end of
    /// `mesh`; those land in `foreign_faces` instead of the tally.
    pub fn audit<M: MeshAdapter + ?Sized>(mesh: &M, tiles: &[Tile], seed_count: usize) -> Self {
        let face_count = mesh.face_count();
        let mut claims = vec![0u32; face_count];
        let mut foreign_faces = Vec::new();
        for &face in tiles.iter().flat_map(|t| t.faces()) {
            match claims.get_mut(face.index()) {
                Some(n) => *n += 1,
                None => foreign_faces.push(face),
            }
        }

        let faces_with = |pred: fn(u32) -> bool| -> Vec<FaceId> {
            claims
                .iter()
                .enumerate()
                .filter(|&(_, &n)| pred(n))
                .map(|(i, _)| FaceId(i as u32))
                .collect()
        };

        Self {
            face_count,
            seed_count,
            unclaimed_faces: faces_with(|n| n == 0),
            duplicate_claims: faces_with(|n| n > 1),
            foreign_faces,
        }
    }

    /// Whether the seed count differs from the 12 of a subdivided icosahedron.
    pub fn seed_count_mismatch(&self) -> bool {
        self.seed_count != EXPECTED_PENTAGONS
    }

    /// Every face claimed exactly once, from exactly 12 seeds, and nothing else claimed.
    pub fn is_complete(&self) -> bool {
        self.unclaimed_faces.is_empty()
            && self.duplicate_claims.is_empty()
            && self.foreign_faces.is_empty()
            && !self.seed_count_mismatch()
    }

    /// Emit a warning for every anomaly found.
    pub fn log_warnings(&self) {
        if self.seed_count_mismatch() {
            warn!(
                "Found {} degree-5 seed vertices, expected {}",
                self.seed_count, EXPECTED_PENTAGONS
            );
        }
        if !self.unclaimed_faces.is_empty() {
            warn!(
                "{} of {} faces were never claimed by a tile",
                self.unclaimed_faces.len(),
                self.face_count
            );
        }
        if !self.duplicate_claims.is_empty() {
            warn!(
                "{} faces were claimed by more than one tile",
                self.duplicate_claims.len()
            );
        }
        if !self.foreign_faces.is_empty() {
            warn!(
                "{} claimed faces are not in the {}-face mesh",
                self.foreign_faces.len(),
                self.face_count
            );
        }
    }
}

/// Group every face of `mesh` into pentagon and hexagon tiles.
///
/// Seeds are the degree-5 vertices; seed `i` (in index order) gets facet id
/// `i`, which every tile discovered from it inherits. All seed tiles are
/// built before any expansion starts.
///
/// A mesh with no degree-5 vertices yields no tiles. Anomalies are reported
/// on [`Grouping::report`] and logged, never returned as errors.
pub fn group_faces<M: MeshAdapter + ?Sized>(mesh: &M) -> Grouping {
    let mut visited = FaceVisitedSet::with_capacity(mesh.face_count());
    let seeds = find_seed_centers(mesh);
    debug!("Found {} seed vertices", seeds.len());

    let pentagons: Vec<Tile> = seeds
        .iter()
        .enumerate()
        .map(|(facet, &center)| build_tile(mesh, &mut visited, center, facet as u32))
        .collect();

    let mut expander = HexExpander::new(mesh);
    let mut tiles = Vec::new();
    for pentagon in pentagons {
        tiles.extend(expander.expand(&mut visited, pentagon));
    }

    let report = GroupingReport::audit(mesh, &tiles, seeds.len());
    report.log_warnings();
    info!(
        "Grouped {} faces into {} tiles from {} seeds",
        mesh.face_count(),
        tiles.len(),
        seeds.len()
    );

    Grouping { tiles, report }
}
