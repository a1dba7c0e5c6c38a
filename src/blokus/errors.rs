use derive_more::{Display, Error};
use serde::Serialize;

/// Why the engine refused a move or a pass.
///
/// These are returned by value from the mutating entry points; validation and move
/// generation never produce them, they only answer yes or no.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameError {
    #[display("a cell of the piece lies outside the board")]
    OutOfBounds,
    #[display("a cell of the piece is already occupied")]
    CellOccupied,
    #[display("the first piece must cover the player's starting corner")]
    FirstMoveMustCoverStartingCorner,
    #[display("the piece does not touch one of the player's own pieces at a corner")]
    NoOwnCornerContact,
    #[display("the piece shares an edge with one of the player's own pieces")]
    OwnEdgeContactViolation,
    #[display("the piece is not in the player's inventory")]
    PieceNotAvailable,
    #[display("cannot pass while a valid move exists")]
    PassRejectedValidMoveExists,
    #[display("unknown shape or orientation")]
    UnknownShapeOrOrientation,
    #[display("the game is already over")]
    GameAlreadyOver,
    #[display("it is not this player's turn")]
    NotPlayersTurn,
    #[display("no such player in this game")]
    UnknownPlayer,
}
