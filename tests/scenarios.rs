use lib_blokus::prelude::*;

fn p(id: u8) -> PlayerId {
    PlayerId::new(id).unwrap()
}

/// A standard board with player 0 alone at the table, so turn order never gets in the way.
fn solo() -> Game {
    Game::new(GameConfig {
        mode: GameMode::Standard,
        players: vec![PlayerConfig::new(p(0), Coord::new(0, 0))],
        starting_seat: 0,
    }).unwrap()
}

fn solo_after_monomino() -> Game {
    let mut game = solo();
    assert!(game.is_first_move(p(0)));
    game.try_place_move(p(0), Shape::I1, 0, 0, 0).unwrap();
    assert_eq!(game.advance_turn().id, p(0));
    game
}

#[test]
fn monomino_on_the_starting_corner() {
    let game = solo_after_monomino();
    assert_eq!(game.cell_owner(0, 0), CellOwner::Player(p(0)));
    assert!(!game.is_first_move(p(0)));
    assert_eq!(game.remaining_piece_ids(p(0)).unwrap().len(), NUM_SHAPES - 1);
}

#[test]
fn detached_domino_is_rejected() {
    let mut game = solo_after_monomino();
    assert_eq!(game.try_place_move(p(0), Shape::I2, 0, 5, 5), Err(GameError::NoOwnCornerContact));
    assert_eq!(game.cell_owner(5, 5), CellOwner::Empty);
}

#[test]
fn edge_contact_is_rejected_and_corner_contact_accepted() {
    let mut game = solo_after_monomino();
    // vertical domino over (0,1),(1,1)
    assert_eq!(game.try_place_move(p(0), Shape::I2, 1, 0, 1), Err(GameError::OwnEdgeContactViolation));
    // horizontal domino over (1,0),(1,1)
    assert_eq!(game.try_place_move(p(0), Shape::I2, 0, 1, 0), Err(GameError::OwnEdgeContactViolation));
    // horizontal domino over (1,1),(1,2)
    game.try_place_move(p(0), Shape::I2, 0, 1, 1).unwrap();
    assert_eq!(game.cell_owner(1, 2), CellOwner::Player(p(0)));
}

/// A Duo position where player 0's only monomino is boxed in at every corner by player 1.
fn boxed_in() -> Game {
    let mut snapshot = Game::new(GameConfig::duo()).unwrap().snapshot();
    snapshot.grid[4][4] = p(0).grid_value();
    for (r, c) in [(3, 3), (3, 5), (5, 3), (5, 5)] {
        snapshot.grid[r][c] = p(1).grid_value();
    }

    let zero = &mut snapshot.players[0];
    zero.remaining_piece_ids.retain(|s| *s != Shape::I1);
    zero.last_placed_was_monomino = true;
    zero.score = -88;

    let one = &mut snapshot.players[1];
    one.remaining_piece_ids.retain(|s| *s != Shape::I1 && *s != Shape::L3);
    one.score = -85;

    snapshot.turn_history = vec![0, 1];
    Game::restore(&snapshot).unwrap()
}

#[test]
fn a_stuck_player_may_pass_but_not_place() {
    let mut game = boxed_in();
    assert_eq!(game.current_player().id, p(0));
    assert!(!game.has_valid_move(p(0)));

    assert_eq!(game.try_place_move(p(0), Shape::I2, 0, 0, 0), Err(GameError::NoOwnCornerContact));
    game.try_pass(p(0)).unwrap();
    assert!(game.player(p(0)).unwrap().has_passed());

    assert_eq!(game.advance_turn().id, p(1));
    assert!(!game.is_game_over());
}

#[test]
fn last_player_running_out_ends_the_game() {
    let mut snapshot = Game::new(GameConfig::standard(4).unwrap()).unwrap().snapshot();
    // player 3 has placed everything; which cells it owns does not matter here
    for i in 0..TOTAL_SQUARES {
        snapshot.grid[5 + i / 20][i % 20] = p(3).grid_value();
    }
    for player in snapshot.players.iter_mut().take(3) {
        player.status = PlayerStatus::Passed;
    }
    let last = &mut snapshot.players[3];
    last.remaining_piece_ids.clear();
    last.last_placed_was_monomino = true;
    last.score = ALL_PLACED_BONUS + MONOMINO_LAST_BONUS;
    last.status = PlayerStatus::Playing;
    snapshot.current_player_id = p(3);

    let mut game = Game::restore(&snapshot).unwrap();
    assert!(!game.is_game_over());

    game.advance_turn();
    assert_eq!(game.player(p(3)).unwrap().status(), PlayerStatus::Finished);
    assert!(game.is_game_over());
    assert_eq!(game.winner().map(|w| w.id), Some(p(3)));
    assert_eq!(game.try_pass(p(3)), Err(GameError::GameAlreadyOver));
}

#[test]
fn duo_starts_on_the_inner_points() {
    let mut game = Game::new(GameConfig::duo()).unwrap();
    assert_eq!(game.board().size(), DUO_BOARD_SIZE);
    assert_eq!(game.try_place_move(p(0), Shape::I1, 0, 0, 0), Err(GameError::FirstMoveMustCoverStartingCorner));
    game.try_place_move(p(0), Shape::I1, 0, 4, 4).unwrap();
    game.advance_turn();
    assert!(game.valid_moves(p(1)).all(|m| m.cells().any(|c| c == OffsetCoord::new(9, 9))));
    game.try_place_move(p(1), Shape::V, 0, 9, 9).unwrap();
    game.advance_turn();
    assert_eq!(game.try_place_move(p(1), Shape::I1, 0, 8, 8), Err(GameError::NotPlayersTurn));
}

#[test]
fn opponents_may_touch_freely() {
    let mut game = Game::new(GameConfig::duo()).unwrap();
    game.try_place_move(p(0), Shape::I2, 0, 4, 4).unwrap();
    game.advance_turn();
    game.try_place_move(p(1), Shape::I1, 0, 9, 9).unwrap();
    game.advance_turn();
    game.try_place_move(p(0), Shape::I3, 1, 5, 6).unwrap();
    game.advance_turn();
    // (8,6) shares an edge with player 0's (7,6); (8,8) is player 1's own corner contact
    game.try_place_move(p(1), Shape::I3, 0, 8, 6).unwrap();
    assert_eq!(game.cell_owner(8, 6), CellOwner::Player(p(1)));
    assert_eq!(game.cell_owner(7, 6), CellOwner::Player(p(0)));
}

#[test]
fn score_counts_unplaced_squares() {
    let mut game = solo_after_monomino();
    game.try_place_move(p(0), Shape::X, 0, 1, 1).unwrap_err();
    game.try_place_move(p(0), Shape::V, 0, 1, 1).unwrap();

    let player = game.player(p(0)).unwrap();
    assert_eq!(player.compute_score(), -(TOTAL_SQUARES as i32 - 6));
    assert_eq!(player.squares_remaining(), TOTAL_SQUARES - 6);
    assert_eq!(game.rankings(), vec![(p(0), 1)]);
}

#[test]
fn notated_moves_play_back() {
    let mut game = solo();
    for mv in ["I1/0@0,0", "I2/0@1,1", "V/0@2,3"] {
        let MoveString { placement, .. } = mv.parse::<MoveString>().unwrap();
        game.play(p(0), placement.unwrap()).unwrap();
        game.advance_turn();
    }
    assert_eq!(game.board().count_occupied(), 1 + 2 + 5);
    assert_eq!(game.turns().turn_history(), &[0, 0, 0]);
}
