use itertools::Itertools;

use crate::blokus::{prelude::*, rules};

/// Who sits at the table and where they start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    pub id: PlayerId,
    pub starting_corner: Coord,
    pub color: Option<Color>,
}

impl PlayerConfig {
    pub fn new(id: PlayerId, starting_corner: Coord) -> PlayerConfig {
        PlayerConfig { id, starting_corner, color: None }
    }

    pub fn with_color(mut self, color: Color) -> PlayerConfig {
        self.color = Some(color);
        self
    }
}

/// Everything needed to set up a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub players: Vec<PlayerConfig>,
    /// Seat index of the player who opens the game.
    pub starting_seat: usize,
}

impl GameConfig {
    /// A 20x20 game for 2-4 players, seated clockwise from the top-left corner.
    pub fn standard(num_players: usize) -> Result<GameConfig> {
        if !(2..=NUM_PLAYERS).contains(&num_players) {
            return Err(anyhow!("a standard game seats 2-{NUM_PLAYERS} players, received {num_players}"));
        }
        let last = STANDARD_BOARD_SIZE - 1;
        let corners = [Coord::new(0, 0), Coord::new(0, last), Coord::new(last, last), Coord::new(last, 0)];
        let players = PlayerId::all()
            .into_iter()
            .zip(corners)
            .take(num_players)
            .map(|(id, corner)| PlayerConfig::new(id, corner))
            .collect();
        Ok(GameConfig { mode: GameMode::Standard, players, starting_seat: 0 })
    }

    /// A 14x14 game for two players starting on the inner points.
    pub fn duo() -> GameConfig {
        let [first, second, ..] = PlayerId::all();
        GameConfig {
            mode: GameMode::Duo,
            players: vec![
                PlayerConfig::new(first, Coord::new(4, 4)),
                PlayerConfig::new(second, Coord::new(9, 9)),
            ],
            starting_seat: 0,
        }
    }

    /// The default setup for a mode; Duo always seats two.
    pub fn for_mode(mode: GameMode, num_players: usize) -> Result<GameConfig> {
        match mode {
            GameMode::Standard => GameConfig::standard(num_players),
            GameMode::Duo if num_players == 2 => Ok(GameConfig::duo()),
            GameMode::Duo => Err(anyhow!("a duo game seats exactly 2 players, received {num_players}")),
        }
    }

    pub fn with_starting_seat(mut self, seat: usize) -> GameConfig {
        self.starting_seat = seat;
        self
    }
}

/// A game of Blokus: the board, the players, and whose turn it is.
///
/// Mutating entry points answer with a `GameError` and leave the game untouched when they
/// refuse. After a successful `try_place_move` or `try_pass`, the caller hands the turn on
/// with `advance_turn`.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) mode: GameMode,
    pub(crate) board: Board,
    pub(crate) turns: TurnManager,
}

impl Game {
    /// Sets up a fresh game, checking that the seating makes sense for the board.
    pub fn new(config: GameConfig) -> Result<Game> {
        let GameConfig { mode, players, starting_seat } = config;
        let size = mode.board_size();

        if players.is_empty() || players.len() > NUM_PLAYERS {
            return Err(anyhow!("a game seats 1-{NUM_PLAYERS} players, received {}", players.len()));
        }
        if players.iter().map(|p| p.id).unique().count() != players.len() {
            return Err(anyhow!("player ids must be distinct"));
        }
        if players.iter().map(|p| p.starting_corner).unique().count() != players.len() {
            return Err(anyhow!("starting corners must be distinct"));
        }
        if let Some(p) = players.iter().find(|p| !p.starting_corner.in_bounds(size)) {
            return Err(anyhow!("starting corner {} for player {} is off the {size}x{size} board", p.starting_corner, p.id));
        }

        let players = players
            .into_iter()
            .map(|p| Player::new(p.id, p.color.unwrap_or(Color::default_for(p.id)), p.starting_corner))
            .collect::<Vec<_>>();
        log::debug!("new {mode:?} game for {} players", players.len());

        Ok(Game { mode, board: Board::new(size)?, turns: TurnManager::new(players, starting_seat)? })
    }

    /// Lets a different player open the game. Refused once the first turn is over.
    pub fn set_starting_player(&mut self, player: PlayerId) -> Result<()> {
        let seat = self.turns.seat_of(player).ok_or(GameError::UnknownPlayer)?;
        self.turns.set_starting_seat(seat)
    }

    /// Places a piece for a player. On success the shape leaves the player's inventory and
    /// their adjacency index is brought up to date; on failure nothing changes.
    pub fn try_place_move(&mut self, player: PlayerId, shape: Shape, orientation: usize, row: isize, col: isize) -> Result<(), GameError> {
        self.play(player, Placement::new(shape, orientation, row, col))
    }

    /// As `try_place_move`, for an already-built placement.
    pub fn play(&mut self, player: PlayerId, placement: Placement) -> Result<(), GameError> {
        let acting = self.acting_player(player)?;
        if !acting.inventory().contains(placement.shape) {
            return Err(GameError::PieceNotAvailable);
        }
        rules::check_placement(&self.board, acting, &placement, acting.is_first_move())?;

        let cells = placement.cells().collect::<Vec<_>>();
        self.board.place(&cells, player)?;
        self.board.ensure_fresh(player);
        self.turns.player_mut(player).ok_or(GameError::UnknownPlayer)?.remove_piece(placement.shape)?;

        log::debug!("player {player} played {placement}");
        Ok(())
    }

    /// Passes for a player. Only allowed when they have no legal placement; passing is permanent.
    pub fn try_pass(&mut self, player: PlayerId) -> Result<(), GameError> {
        let acting = self.acting_player(player)?;
        if rules::has_valid_move(&self.board, acting, acting.is_first_move()) {
            return Err(GameError::PassRejectedValidMoveExists);
        }
        self.turns.player_mut(player).ok_or(GameError::UnknownPlayer)?.mark_passed();

        log::debug!("player {player} passed");
        Ok(())
    }

    /// Passes for the player whose turn it is, even if they could still place a piece.
    /// Like any pass, they sit out the rest of the game.
    pub fn force_pass(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.acting_player(player)?;
        self.turns.player_mut(player).ok_or(GameError::UnknownPlayer)?.mark_passed();

        log::debug!("player {player} resigned");
        Ok(())
    }

    /// Hands the turn to the next player who can act. See `TurnManager::advance_turn`.
    pub fn advance_turn(&mut self) -> &Player {
        self.turns.advance_turn()
    }

    /// Lazily enumerates the legal placements for a player; empty for players not at the table.
    pub fn valid_moves(&self, player: PlayerId) -> impl Iterator<Item = Placement> + '_ {
        self.turns
            .player(player)
            .into_iter()
            .flat_map(|p| rules::valid_moves(&self.board, p, p.is_first_move()))
    }

    /// Whether a player could place the given piece right now, turn order aside.
    pub fn is_valid_placement(&self, player: PlayerId, placement: &Placement) -> bool {
        self.turns.player(player).is_some_and(|p| {
            p.inventory().contains(placement.shape) && rules::is_valid_placement(&self.board, p, placement, p.is_first_move())
        })
    }

    pub fn has_valid_move(&self, player: PlayerId) -> bool {
        self.valid_moves(player).next().is_some()
    }

    pub fn is_first_move(&self, player: PlayerId) -> bool {
        self.turns.player(player).is_some_and(|p| p.is_first_move())
    }

    // observation

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns(&self) -> &TurnManager {
        &self.turns
    }

    pub fn players(&self) -> &[Player] {
        self.turns.players()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.turns.player(id)
    }

    pub fn current_player(&self) -> &Player {
        self.turns.current()
    }

    pub fn cell_owner(&self, row: isize, col: isize) -> CellOwner {
        self.board.cell_owner(row, col)
    }

    pub fn occupied(&self, player: PlayerId) -> &CoordSet {
        self.board.adjacency(player).occupied()
    }

    pub fn corner_candidates(&self, player: PlayerId) -> &CoordSet {
        self.board.adjacency(player).corner_candidates()
    }

    pub fn remaining_piece_ids(&self, player: PlayerId) -> Option<Vec<String>> {
        self.turns.player(player).map(|p| p.remaining_piece_ids())
    }

    pub fn is_game_over(&self) -> bool {
        self.turns.is_game_over()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.turns.winner()
    }

    pub fn rankings(&self) -> Vec<(PlayerId, usize)> {
        self.turns.rankings()
    }

    /// Finds the player and checks that they may act now.
    fn acting_player(&self, player: PlayerId) -> Result<&Player, GameError> {
        if self.turns.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        let acting = self.turns.player(player).ok_or(GameError::UnknownPlayer)?;
        if self.turns.current().id != player || acting.status() != PlayerStatus::Playing {
            return Err(GameError::NotPlayersTurn);
        }
        Ok(acting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id).unwrap()
    }

    #[test]
    fn standard_corners() {
        let config = GameConfig::standard(4).unwrap();
        let corners = config.players.iter().map(|p| p.starting_corner).collect::<Vec<_>>();
        assert_eq!(corners, vec![Coord::new(0, 0), Coord::new(0, 19), Coord::new(19, 19), Coord::new(19, 0)]);
        assert!(GameConfig::standard(1).is_err());
        assert!(GameConfig::standard(5).is_err());
        assert!(GameConfig::for_mode(GameMode::Duo, 3).is_err());
    }

    #[test]
    fn setup_is_validated() {
        let mut config = GameConfig::standard(2).unwrap();
        config.players[1].id = p(0);
        assert!(Game::new(config).is_err());

        let mut config = GameConfig::duo();
        config.players[1].starting_corner = Coord::new(14, 14);
        assert!(Game::new(config).is_err());

        assert!(Game::new(GameConfig { mode: GameMode::Standard, players: vec![], starting_seat: 0 }).is_err());
        assert!(Game::new(GameConfig::standard(3).unwrap().with_starting_seat(3)).is_err());
    }

    #[test]
    fn another_seat_may_open() {
        let mut game = Game::new(GameConfig::standard(4).unwrap().with_starting_seat(2)).unwrap();
        assert_eq!(game.current_player().id, p(2));
        assert_eq!(game.try_place_move(p(0), Shape::I1, 0, 0, 0), Err(GameError::NotPlayersTurn));

        game.set_starting_player(p(1)).unwrap();
        assert!(game.set_starting_player(p(3)).is_ok());
        assert!(Game::new(GameConfig::duo()).unwrap().set_starting_player(p(2)).is_err());

        game.try_place_move(p(3), Shape::I1, 0, 19, 0).unwrap();
        assert_eq!(game.advance_turn().id, p(0));
        assert!(game.set_starting_player(p(1)).is_err());
    }

    #[test]
    fn force_pass_needs_no_stuck_player() {
        let mut game = Game::new(GameConfig::duo()).unwrap();
        assert!(game.has_valid_move(p(0)));
        assert_eq!(game.force_pass(p(1)), Err(GameError::NotPlayersTurn));

        game.force_pass(p(0)).unwrap();
        assert!(game.player(p(0)).unwrap().has_passed());
        assert_eq!(game.advance_turn().id, p(1));
        assert_eq!(game.force_pass(p(0)), Err(GameError::NotPlayersTurn));

        game.force_pass(p(1)).unwrap();
        game.advance_turn();
        assert!(game.is_game_over());
        assert_eq!(game.force_pass(p(1)), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn colors_default_by_seat() {
        let mut config = GameConfig::standard(2).unwrap();
        config.players[1] = config.players[1].with_color(Color::Red);
        let game = Game::new(config).unwrap();
        assert_eq!(game.players()[0].color, Color::Blue);
        assert_eq!(game.players()[1].color, Color::Red);
    }

    #[test]
    fn turn_order_is_enforced() {
        let mut game = Game::new(GameConfig::standard(2).unwrap()).unwrap();
        assert_eq!(game.try_place_move(p(1), Shape::I1, 0, 0, 19), Err(GameError::NotPlayersTurn));
        assert_eq!(game.try_place_move(p(3), Shape::I1, 0, 19, 0), Err(GameError::UnknownPlayer));

        game.try_place_move(p(0), Shape::I1, 0, 0, 0).unwrap();
        assert_eq!(game.advance_turn().id, p(1));
        game.try_place_move(p(1), Shape::I1, 0, 0, 19).unwrap();
        assert_eq!(game.cell_owner(0, 19), CellOwner::Player(p(1)));
    }

    #[test]
    fn a_refused_move_changes_nothing() {
        let mut game = Game::new(GameConfig::standard(2).unwrap()).unwrap();
        assert_eq!(
            game.try_place_move(p(0), Shape::I2, 0, 5, 5),
            Err(GameError::FirstMoveMustCoverStartingCorner),
        );
        assert_eq!(game.board().count_occupied(), 0);
        assert_eq!(game.player(p(0)).unwrap().pieces_count(), NUM_SHAPES);

        game.try_place_move(p(0), Shape::I1, 0, 0, 0).unwrap();
        game.advance_turn();
        game.try_place_move(p(1), Shape::I1, 0, 0, 19).unwrap();
        game.advance_turn();
        assert_eq!(game.try_place_move(p(0), Shape::I1, 0, 1, 1), Err(GameError::PieceNotAvailable));
        assert_eq!(game.try_place_move(p(0), Shape::I2, 5, 1, 1), Err(GameError::UnknownShapeOrOrientation));
    }

    #[test]
    fn passing_with_moves_left_is_refused() {
        let mut game = Game::new(GameConfig::duo()).unwrap();
        assert_eq!(game.try_pass(p(0)), Err(GameError::PassRejectedValidMoveExists));
        assert!(!game.player(p(0)).unwrap().has_passed());
    }

    #[test]
    fn corners_follow_placements() {
        let mut game = Game::new(GameConfig::duo()).unwrap();
        game.try_place_move(p(0), Shape::X, 0, 3, 3).unwrap();
        assert_eq!(game.occupied(p(0)).len(), 5);
        assert!(game.corner_candidates(p(0)).contains(Coord::new(2, 3)));
        assert!(game.valid_moves(p(0)).all(|m| m.shape != Shape::X));
        assert_eq!(game.valid_moves(p(2)).count(), 0);
    }
}
