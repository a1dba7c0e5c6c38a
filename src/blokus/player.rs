use serde::{Deserialize, Serialize};

use crate::blokus::prelude::*;

/// Where a player stands in the turn cycle. `Passed` and `Finished` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Waiting,
    Playing,
    Passed,
    Finished,
}

impl PlayerStatus {
    /// Whether this player will never act again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlayerStatus::Passed | PlayerStatus::Finished)
    }
}

/// A seat in a game: identity, remaining pieces, and where in the turn cycle it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub color: Color,
    pub starting_corner: Coord,
    pub(crate) inventory: ShapeSet,
    pub(crate) last_placed_was_monomino: bool,
    pub(crate) status: PlayerStatus,
}

impl Player {
    /// Creates a player holding the full set of 21 shapes.
    pub fn new(id: PlayerId, color: Color, starting_corner: Coord) -> Player {
        Player {
            id,
            color,
            starting_corner,
            inventory: ShapeSet::full(),
            last_placed_was_monomino: false,
            status: PlayerStatus::Waiting,
        }
    }

    pub fn inventory(&self) -> ShapeSet {
        self.inventory
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn has_passed(&self) -> bool {
        self.status == PlayerStatus::Passed
    }

    pub fn last_placed_was_monomino(&self) -> bool {
        self.last_placed_was_monomino
    }

    /// A player who has placed nothing yet must cover their starting corner.
    pub fn is_first_move(&self) -> bool {
        self.inventory == ShapeSet::full()
    }

    /// Takes a shape out of the inventory, remembering whether it was the monomino.
    pub fn remove_piece(&mut self, shape: Shape) -> Result<(), GameError> {
        if !self.inventory.contains(shape) {
            return Err(GameError::PieceNotAvailable);
        }
        self.inventory.remove(shape);
        self.last_placed_was_monomino = shape.is_monomino();
        Ok(())
    }

    /// Marks the player as passed. Passing is permanent; a finished player stays finished.
    pub fn mark_passed(&mut self) {
        if self.status != PlayerStatus::Finished {
            self.status = PlayerStatus::Passed;
        }
    }

    /// Marks the player as having run out of pieces.
    pub fn mark_finished(&mut self) {
        self.status = PlayerStatus::Finished;
    }

    /// Minus one per unplaced square; 15 for placing everything, 20 if the monomino went last.
    pub fn compute_score(&self) -> i32 {
        if self.inventory.is_empty() {
            ALL_PLACED_BONUS + if self.last_placed_was_monomino { MONOMINO_LAST_BONUS } else { 0 }
        } else {
            -(self.squares_remaining() as i32)
        }
    }

    pub fn squares_remaining(&self) -> usize {
        self.inventory.squares()
    }

    pub fn pieces_count(&self) -> usize {
        self.inventory.len()
    }

    /// The notation of every shape still in hand, in canonical order.
    pub fn remaining_piece_ids(&self) -> Vec<String> {
        self.inventory.iter().map(|shape| shape.notate()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        let id = PlayerId::new(0).unwrap();
        Player::new(id, Color::default_for(id), Coord::new(0, 0))
    }

    #[test]
    fn fresh_player_scores_minus_89() {
        let p = player();
        assert!(p.is_first_move());
        assert_eq!(p.compute_score(), -89);
        assert_eq!(p.pieces_count(), 21);
        assert_eq!(p.remaining_piece_ids()[0], "I1");
    }

    #[test]
    fn removing_twice_is_rejected() {
        let mut p = player();
        p.remove_piece(Shape::L5).unwrap();
        assert_eq!(p.remove_piece(Shape::L5), Err(GameError::PieceNotAvailable));
        assert!(!p.is_first_move());
        assert_eq!(p.compute_score(), -84);
    }

    #[test]
    fn bonuses_for_placing_everything() {
        let mut p = player();
        Shape::all().into_iter().for_each(|s| p.remove_piece(s).unwrap());
        assert_eq!(p.compute_score(), ALL_PLACED_BONUS);

        let mut q = player();
        Shape::all().into_iter().rev().for_each(|s| q.remove_piece(s).unwrap());
        assert!(q.last_placed_was_monomino());
        assert_eq!(q.compute_score(), ALL_PLACED_BONUS + MONOMINO_LAST_BONUS);
    }

    #[test]
    fn passing_is_idempotent() {
        let mut p = player();
        p.mark_passed();
        p.mark_passed();
        assert!(p.has_passed());
        assert!(p.status().is_terminal());

        let mut q = player();
        q.mark_finished();
        q.mark_passed();
        assert_eq!(q.status(), PlayerStatus::Finished);
    }
}
