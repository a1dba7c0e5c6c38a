use super::{Board, BoardCell};
use crate::blokus::prelude::*;

impl Board {
    /// Gets the board cell at a coordinate, or `None` if it is off this board.
    pub(super) fn get(&self, coord: &OffsetCoord) -> Option<BoardCell> {
        coord.on_board(self.size).map(|c| *self.get_unchecked(&c))
    }
}

impl Board {
    /// Unchecked accessor into the grid; engine use only.
    pub(super) fn get_unchecked(&self, coord: &Coord) -> &BoardCell {
        debug_assert!(coord.in_bounds(MAX_BOARD_SIZE));
        unsafe {
            self.cells.0.get_unchecked(coord.row).get_unchecked(coord.col)
        }
    }

    /// Unchecked mutable reference into the grid; engine use only.
    pub(super) fn get_mut_unchecked(&mut self, coord: &Coord) -> &mut BoardCell {
        debug_assert!(coord.in_bounds(MAX_BOARD_SIZE));
        unsafe {
            self.cells.0.get_unchecked_mut(coord.row).get_unchecked_mut(coord.col)
        }
    }

    /// Unchecked setting of a cell's owner; bounds and emptiness are the caller's problem.
    pub(super) fn set_owner_unchecked(&mut self, coord: &Coord, player: PlayerId) -> &mut Self {
        let r = self.get_mut_unchecked(coord);
        *r = r.with_owner(player);
        self
    }
}
