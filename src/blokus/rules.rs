use itertools::Itertools;

use crate::blokus::prelude::*;

/// The largest piece spans five cells, so no useful anchor lies further than four off the board.
const MAX_ANCHOR_OVERHANG: isize = 4;

/// Checks a placement for a player, returning the first rule it breaks.
///
/// Out-of-bounds is checked before occupancy. A first move only has to cover the starting
/// corner; afterwards the piece must not share an edge with its owner's pieces and must touch
/// one at a corner. Contact with opponents is never restricted.
pub fn check_placement(board: &Board, player: &Player, placement: &Placement, is_first_move: bool) -> Result<(), GameError> {
    let orientation = placement.try_orientation().ok_or(GameError::UnknownShapeOrOrientation)?;
    if !anchor_in_reach(placement.anchor, board.size()) {
        return Err(GameError::OutOfBounds);
    }
    let cells = orientation.points().iter().map(|p| placement.anchor + p).collect::<Vec<_>>();

    if cells.iter().any(|c| !c.in_bounds_signed(board.size())) {
        return Err(GameError::OutOfBounds);
    }
    if cells.iter().any(|c| !board.is_empty_at(c)) {
        return Err(GameError::CellOccupied);
    }

    if is_first_move {
        let corner = OffsetCoord::from(player.starting_corner);
        return match cells.contains(&corner) {
            true  => Ok(()),
            false => Err(GameError::FirstMoveMustCoverStartingCorner),
        };
    }

    if board.touches_forbidden_edge(player.id, &cells) {
        return Err(GameError::OwnEdgeContactViolation);
    }
    if !cells.iter().any(|c| board.is_valid_corner(player.id, c)) {
        return Err(GameError::NoOwnCornerContact);
    }
    Ok(())
}

/// Whether a piece anchored here could overlap the board at all. Anchors outside this window
/// are refused before any offset is added to them.
fn anchor_in_reach(anchor: OffsetCoord, size: usize) -> bool {
    let reach = -MAX_ANCHOR_OVERHANG..size as isize;
    reach.contains(&anchor.rows) && reach.contains(&anchor.cols)
}

/// Whether a placement is legal for a player.
pub fn is_valid_placement(board: &Board, player: &Player, placement: &Placement, is_first_move: bool) -> bool {
    check_placement(board, player, placement, is_first_move).is_ok()
}

/// Lazily enumerates every legal placement for a player, each exactly once.
///
/// Every legal placement has a cell on one of the player's live corner candidates (or on the
/// starting corner, for a first move), so candidates are generated by lining each cell of each
/// orientation up against each contact point. A placement that covers several contacts is
/// only kept when generated from the first of them in row-major order.
pub fn valid_moves<'a>(board: &'a Board, player: &'a Player, is_first_move: bool) -> impl Iterator<Item = Placement> + 'a {
    let size = board.size();
    let contacts: CoordSet = match is_first_move {
        true  => [player.starting_corner].into_iter().collect(),
        false => board
            .adjacency(player.id)
            .corner_candidates()
            .iter()
            .filter(|c| board.is_empty_at(&OffsetCoord::from(c)))
            .collect(),
    };
    let catalog = PieceCatalog::get();

    player.inventory()
        .iter()
        .collect::<Vec<_>>()
        .into_iter()
        .flat_map(move |shape| catalog.orientations(shape).iter())
        .flat_map(move |orientation| contacts.into_iter().map(move |contact| (orientation, contact)))
        .flat_map(|(orientation, contact)| {
            orientation.points().iter().map(move |point| {
                let placement = Placement {
                    shape: orientation.shape,
                    orientation: orientation.index,
                    anchor: OffsetCoord::from(contact) - point,
                };
                (placement, contact)
            })
        })
        .filter(move |(placement, contact)| {
            let first = placement.cells().filter_map(|c| c.on_board(size)).filter(|c| contacts.contains(*c)).min();
            first == Some(*contact)
        })
        .filter(move |(placement, _)| is_valid_placement(board, player, placement, is_first_move))
        .map(|(placement, _)| placement)
}

/// Whether the player has at least one legal placement; stops at the first one found.
pub fn has_valid_move(board: &Board, player: &Player, is_first_move: bool) -> bool {
    valid_moves(board, player, is_first_move).next().is_some()
}

/// Tries every shape, orientation and anchor on the board. Slow; only good for checking
/// `valid_moves` against.
pub fn brute_force_moves(board: &Board, player: &Player, is_first_move: bool) -> Vec<Placement> {
    let size = board.size() as isize;
    let catalog = PieceCatalog::get();
    player.inventory()
        .iter()
        .flat_map(|shape| catalog.orientations(shape).iter())
        .flat_map(|orientation| {
            (-MAX_ANCHOR_OVERHANG..size)
                .cartesian_product(-MAX_ANCHOR_OVERHANG..size)
                .map(move |(row, col)| Placement::new(orientation.shape, orientation.index, row, col))
        })
        .filter(|placement| is_valid_placement(board, player, placement, is_first_move))
        .collect()
}
