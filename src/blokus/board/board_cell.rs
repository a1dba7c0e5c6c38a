use crate::blokus::prelude::*;

/// A cell on a Blokus board.
///
/// The byte holds the snapshot encoding directly: 0 is empty, 1-4 is the owning player's id plus one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoardCell(u8);

impl BoardCell {
    pub const EMPTY: BoardCell = BoardCell(0);

    /// Decodes a snapshot value into a cell.
    pub fn from_grid_value(value: u8) -> Result<BoardCell> {
        if value as usize <= NUM_PLAYERS {
            Ok(BoardCell(value))
        } else {
            Err(anyhow!("expected a cell value of 0-{NUM_PLAYERS}, received {value}"))
        }
    }

    /// The snapshot encoding of this cell.
    pub fn grid_value(&self) -> u8 {
        self.0
    }

    /// Determines whether nobody owns this cell.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Determines the owner of this cell, if any.
    pub fn owner(&self) -> Option<PlayerId> {
        match self.0 {
            0 => None,
            v => PlayerId::new(v - 1),
        }
    }

    /// Produces a new board cell owned by the given player.
    pub fn with_owner(&self, player: PlayerId) -> BoardCell {
        BoardCell(player.grid_value())
    }
}

impl std::fmt::Display for BoardCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.owner() {
            Some(player) => write!(f, "{}", player.grid_value()),
            None         => write!(f, "."),
        }
    }
}
