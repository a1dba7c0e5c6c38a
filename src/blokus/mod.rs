/*
 *  The rules and state of a game of Blokus.
 */

pub mod board;
pub(crate) mod consts;
pub mod coords;
pub(crate) mod errors;
pub mod game;
pub mod notation;
pub(crate) mod player;
pub mod polyomino;
pub mod rules;
pub mod sets;
pub mod snapshot;
pub(crate) mod turns;

pub mod prelude {
    pub use crate::utils::prelude::*;

    pub use super::{
        board::{AdjacencyIndex, Board, BoardCell, CellOwner},
        consts::*,
        coords::{self, *},
        errors::GameError,
        game::{Game, GameConfig, PlayerConfig},
        notation::*,
        player::{Player, PlayerStatus},
        polyomino::{Orientation, PieceCatalog, Placement, Shape, Transform},
        sets::*,
        snapshot::{PlayerSnapshot, Snapshot},
        turns::TurnManager,
    };

    pub use super::sets::SetOps;
}
