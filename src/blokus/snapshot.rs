use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::blokus::prelude::*;

/// A player's state as it appears in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub color: Color,
    pub starting_corner: Coord,
    pub remaining_piece_ids: Vec<Shape>,
    pub last_placed_was_monomino: bool,
    pub score: i32,
    pub status: PlayerStatus,
}

/// Plain, serializable game state. Derived indices are left out and rebuilt on restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: GameMode,
    pub size: usize,
    pub grid: Vec<Vec<u8>>,
    pub players: Vec<PlayerSnapshot>,
    pub current_player_id: PlayerId,
    pub turn_history: Vec<usize>,
    pub game_over: bool,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Snapshot> {
        serde_json::from_str(s).context("could not decode snapshot")
    }
}

impl Game {
    /// Captures the game as plain data.
    pub fn snapshot(&self) -> Snapshot {
        let players = self.players().iter().map(|p| PlayerSnapshot {
            id: p.id,
            color: p.color,
            starting_corner: p.starting_corner,
            remaining_piece_ids: p.inventory().iter().collect(),
            last_placed_was_monomino: p.last_placed_was_monomino(),
            score: p.compute_score(),
            status: p.status(),
        }).collect();

        Snapshot {
            mode: self.mode,
            size: self.board.size(),
            grid: self.board.grid_values(),
            players,
            current_player_id: self.current_player().id,
            turn_history: self.turns.turn_history().to_vec(),
            game_over: self.is_game_over(),
        }
    }

    /// Rebuilds a game from a snapshot, checking that its parts agree with one another.
    /// Every adjacency index is derived from the grid from scratch.
    pub fn restore(snapshot: &Snapshot) -> Result<Game> {
        let Snapshot { mode, size, grid, players, current_player_id, turn_history, game_over } = snapshot;

        if *size != mode.board_size() {
            return Err(anyhow!("a {mode:?} board has size {}, received {size}", mode.board_size()));
        }
        if grid.len() != *size {
            return Err(anyhow!("grid has {} rows, expected {size}", grid.len()));
        }
        if players.is_empty() || players.len() > NUM_PLAYERS {
            return Err(anyhow!("a game seats 1-{NUM_PLAYERS} players, received {}", players.len()));
        }
        if players.iter().map(|p| p.id).unique().count() != players.len() {
            return Err(anyhow!("player ids must be distinct"));
        }

        let board = Board::from_grid_values(grid)?;

        let seated = players.iter().map(|p| p.id).collect::<Vec<_>>();
        if let Some(stray) = PlayerId::all().into_iter().find(|id| !seated.contains(id) && !board.cells_of(*id).is_empty()) {
            return Err(anyhow!("grid has cells owned by player {stray}, who is not seated"));
        }

        let restored = players.iter().map(|p| restore_player(p, &board)).collect::<Result<Vec<_>>>()?;

        let current = seated
            .iter()
            .position(|id| id == current_player_id)
            .ok_or_else(|| anyhow!("current player {current_player_id} is not seated"))?;
        if let Some(seat) = turn_history.iter().find(|seat| **seat >= players.len()) {
            return Err(anyhow!("turn history names seat {seat}, but only {} are taken", players.len()));
        }

        let over = restored.iter().all(|p| p.status().is_terminal());
        if over != *game_over {
            return Err(anyhow!("game_over is {game_over}, but the player statuses say {over}"));
        }
        let playing = restored.iter().filter(|p| p.status() == PlayerStatus::Playing).count();
        if !over && (restored[current].status() != PlayerStatus::Playing || playing != 1) {
            return Err(anyhow!("player {current_player_id} must be the only one playing while the game is on"));
        }

        let turns = TurnManager::from_parts(restored, current, turn_history.clone(), over);

        log::debug!("restored {mode:?} game at turn {}", turn_history.len());
        Ok(Game { mode: *mode, board, turns })
    }
}

/// Rebuilds one player, checking their inventory and score against the board.
fn restore_player(snapshot: &PlayerSnapshot, board: &Board) -> Result<Player> {
    let id = snapshot.id;
    if !snapshot.starting_corner.in_bounds(board.size()) {
        return Err(anyhow!("starting corner {} for player {id} is off the board", snapshot.starting_corner));
    }

    let inventory = snapshot.remaining_piece_ids.iter().copied().collect::<ShapeSet>();
    if inventory.len() != snapshot.remaining_piece_ids.len() {
        return Err(anyhow!("player {id} lists a remaining piece twice"));
    }

    let placed = board.cells_of(id).len();
    if placed + inventory.squares() != TOTAL_SQUARES {
        return Err(anyhow!("player {id} owns {placed} cells but has {} squares in hand", inventory.squares()));
    }

    let player = Player {
        id,
        color: snapshot.color,
        starting_corner: snapshot.starting_corner,
        inventory,
        last_placed_was_monomino: snapshot.last_placed_was_monomino,
        status: snapshot.status,
    };
    if player.compute_score() != snapshot.score {
        return Err(anyhow!("player {id} has score {}, but the snapshot says {}", player.compute_score(), snapshot.score));
    }
    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id).unwrap()
    }

    fn played() -> Game {
        let mut game = Game::new(GameConfig::duo()).unwrap();
        game.try_place_move(p(0), Shape::X, 0, 3, 3).unwrap();
        game.advance_turn();
        game.try_place_move(p(1), Shape::I1, 0, 9, 9).unwrap();
        game.advance_turn();
        game
    }

    #[test]
    fn round_trips_through_json() {
        let game = played();
        let json = game.snapshot().to_json().unwrap();
        let restored = Game::restore(&Snapshot::from_json(&json).unwrap()).unwrap();

        assert_eq!(restored.snapshot(), game.snapshot());
        assert_eq!(restored.corner_candidates(p(0)), game.corner_candidates(p(0)));
        assert_eq!(restored.valid_moves(p(0)).count(), game.valid_moves(p(0)).count());
    }

    #[test]
    fn uses_readable_field_values() {
        let json = played().snapshot().to_json().unwrap();
        assert!(json.contains("\"remaining_piece_ids\":[\"I1\""));
        assert!(json.contains("\"status\":\"playing\""));
        assert!(json.contains("\"mode\":\"duo\""));
    }

    #[test]
    fn rejects_inconsistent_snapshots() {
        let good = played().snapshot();

        let mut bad = good.clone();
        bad.players[0].remaining_piece_ids.push(Shape::X);
        assert!(Game::restore(&bad).is_err());

        let mut bad = good.clone();
        bad.players[1].score += 1;
        assert!(Game::restore(&bad).is_err());

        let mut bad = good.clone();
        bad.grid[0][0] = 3;
        assert!(Game::restore(&bad).is_err());

        let mut bad = good.clone();
        bad.current_player_id = p(3);
        assert!(Game::restore(&bad).is_err());

        let mut bad = good.clone();
        bad.size = 20;
        assert!(Game::restore(&bad).is_err());

        assert!(Snapshot::from_json("{").is_err());
    }

    #[test]
    fn rejects_inconsistent_turn_state() {
        let good = played().snapshot();
        assert_eq!(good.current_player_id, p(0));

        // nobody has passed or finished, so the game cannot be over
        let mut bad = good.clone();
        bad.game_over = true;
        assert!(Game::restore(&bad).is_err());

        // the current player must be the one playing
        let mut bad = good.clone();
        bad.players[0].status = PlayerStatus::Passed;
        bad.players[1].status = PlayerStatus::Playing;
        assert!(Game::restore(&bad).is_err());

        let mut bad = good.clone();
        bad.players[0].status = PlayerStatus::Waiting;
        assert!(Game::restore(&bad).is_err());

        // and the only one
        let mut bad = good.clone();
        bad.players[1].status = PlayerStatus::Playing;
        assert!(Game::restore(&bad).is_err());

        // everyone passed, so the flag has to say the game is over
        let mut bad = good.clone();
        bad.players.iter_mut().for_each(|p| p.status = PlayerStatus::Passed);
        assert!(Game::restore(&bad).is_err());
        bad.game_over = true;
        let over = Game::restore(&bad).unwrap();
        assert!(over.is_game_over());
        assert_eq!(over.snapshot(), bad);
    }
}
