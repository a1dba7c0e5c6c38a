use crate::blokus::prelude::*;

/// Derived facts about one player's pieces, kept in step with the board incrementally.
///
/// All three sets are functions of `occupied` alone. Nothing here knows about other
/// players, so an opponent's move can never make this index stale; callers re-check
/// live emptiness on the board when it matters.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyIndex {
    /// Cells this player owns.
    occupied: CoordSet,

    /// Cells touching an owned cell at a corner, minus owned cells and forbidden edges.
    /// Anything outside this set can never be the contact cell of a legal placement.
    corner_candidates: CoordSet,

    /// Cells sharing an edge with an owned cell (and not owned themselves).
    forbidden_edges: CoordSet,

    /// Cells placed since the last refresh; non-empty means dirty.
    pending: Vec<Coord>,
}

impl AdjacencyIndex {
    /// Queues newly placed cells; they are folded in on the next `ensure_fresh`.
    pub fn invalidate(&mut self, cells: impl IntoIterator<Item = Coord>) {
        self.pending.extend(cells);
    }

    /// Whether there are placed cells not yet reflected in the derived sets.
    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Folds pending cells into the derived sets. Idempotent; the work done is
    /// proportional to the number of pending cells, never to the board.
    pub fn ensure_fresh(&mut self, size: usize) {
        if self.pending.is_empty() {
            return;
        }

        for cell in self.pending.drain(..) {
            self.occupied.insert(cell);
            for offset in DIAGONAL_OFFSETS.iter() {
                if let Some(c) = (cell + offset).on_board(size) {
                    self.corner_candidates.insert(c);
                }
            }
            for offset in ORTHOGONAL_OFFSETS.iter() {
                if let Some(c) = (cell + offset).on_board(size) {
                    self.forbidden_edges.insert(c);
                }
            }
        }

        // both exclusions only ever grow, so pruning after the fold is exact
        self.forbidden_edges.difference_inplace(&self.occupied);
        self.corner_candidates
            .difference_inplace(&self.occupied)
            .difference_inplace(&self.forbidden_edges);
    }

    /// Discards everything and derives the sets from scratch; used when restoring a game.
    pub fn rebuild(&mut self, occupied: &CoordSet, size: usize) {
        *self = AdjacencyIndex::default();
        self.invalidate(occupied.iter());
        self.ensure_fresh(size);
    }

    pub fn occupied(&self) -> &CoordSet {
        &self.occupied
    }

    pub fn corner_candidates(&self) -> &CoordSet {
        &self.corner_candidates
    }

    pub fn forbidden_edges(&self) -> &CoordSet {
        &self.forbidden_edges
    }

    /// Whether the cell is a cached corner candidate. Emptiness is not checked here.
    pub fn is_corner_candidate(&self, cell: &OffsetCoord) -> bool {
        cell.on_board(MAX_BOARD_SIZE).is_some_and(|c| self.corner_candidates.contains(c))
    }

    /// Whether any of the cells shares an edge with this player's pieces.
    pub fn touches_forbidden_edge(&self, cells: &[OffsetCoord]) -> bool {
        cells.iter().any(|cell| {
            cell.on_board(MAX_BOARD_SIZE).is_some_and(|c| self.forbidden_edges.contains(c))
        })
    }
}
