use crate::blokus::prelude::*;

/// Seating order, whose turn it is, and whether anyone can still play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnManager {
    players: Vec<Player>,
    current: usize,
    turn_history: Vec<usize>,
    finished: bool,
}

impl TurnManager {
    /// Seats the players in the given order; the one at `starting_seat` starts `Playing`.
    pub fn new(mut players: Vec<Player>, starting_seat: usize) -> Result<TurnManager> {
        let Some(first) = players.get_mut(starting_seat) else {
            return Err(anyhow!("starting seat must be below {}, received {starting_seat}", players.len()));
        };
        first.status = PlayerStatus::Playing;
        Ok(TurnManager { players, current: starting_seat, turn_history: vec![], finished: false })
    }

    /// Hands the opening turn to another seat. Only possible before anyone has ended a turn.
    pub fn set_starting_seat(&mut self, seat: usize) -> Result<()> {
        if !self.turn_history.is_empty() {
            return Err(anyhow!("the starting player is fixed once the first turn is over"));
        }
        if seat >= self.players.len() {
            return Err(anyhow!("starting seat must be below {}, received {seat}", self.players.len()));
        }
        if self.players[seat].status.is_terminal() {
            return Err(anyhow!("player {} can no longer act", self.players[seat].id));
        }

        if self.players[self.current].status == PlayerStatus::Playing {
            self.players[self.current].status = PlayerStatus::Waiting;
        }
        self.players[seat].status = PlayerStatus::Playing;
        self.current = seat;
        log::debug!("player {} opens the game", self.players[seat].id);
        Ok(())
    }

    /// Seat index of a player, if they are at the table.
    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Reassembles a turn manager from restored parts; the caller has validated them.
    pub(crate) fn from_parts(players: Vec<Player>, current: usize, turn_history: Vec<usize>, finished: bool) -> TurnManager {
        TurnManager { players, current, turn_history, finished }
    }

    /// Hands the turn to the next player who can still act.
    ///
    /// The outgoing player drops back to `Waiting` unless they passed or finished. The scan
    /// wraps at most once around the table; any candidate whose inventory is empty is marked
    /// `Finished` on the way past. If nobody is left, the game is over and the last player
    /// checked becomes current.
    pub fn advance_turn(&mut self) -> &Player {
        if self.finished {
            return &self.players[self.current];
        }

        if self.players[self.current].status == PlayerStatus::Playing {
            self.players[self.current].status = PlayerStatus::Waiting;
        }
        self.turn_history.push(self.current);

        let len = self.players.len();
        let mut candidate = self.current;
        for _ in 0..len {
            candidate = (candidate + 1) % len;
            let player = &mut self.players[candidate];
            if player.status.is_terminal() {
                continue;
            }
            if player.inventory.is_empty() {
                player.mark_finished();
                log::debug!("player {} has placed every piece", player.id);
                continue;
            }

            player.status = PlayerStatus::Playing;
            self.current = candidate;
            log::debug!("turn passes to player {}", player.id);
            return &self.players[candidate];
        }

        self.current = candidate;
        self.finished = true;
        log::info!("game over; scores {:?}", self.scores());
        &self.players[candidate]
    }

    /// Whether nobody can act any more.
    pub fn is_game_over(&self) -> bool {
        self.finished || self.players.iter().all(|p| p.status.is_terminal())
    }

    /// The player with the strictly highest score, or `None` on a tie.
    pub fn winner(&self) -> Option<&Player> {
        let best = self.players.iter().map(|p| p.compute_score()).max()?;
        let mut leaders = self.players.iter().filter(|p| p.compute_score() == best);
        match (leaders.next(), leaders.next()) {
            (Some(leader), None) => Some(leader),
            _                    => None,
        }
    }

    /// 1-based rank of each player in seating order; equal scores share a rank.
    pub fn rankings(&self) -> Vec<(PlayerId, usize)> {
        let scores = self.scores();
        self.players.iter().zip(scores.iter()).map(|(player, score)| {
            (player.id, 1 + scores.iter().filter(|other| *other > score).count())
        }).collect()
    }

    /// Each player's score in seating order.
    pub fn scores(&self) -> Vec<i32> {
        self.players.iter().map(|p| p.compute_score()).collect()
    }

    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Seat indices of every player who has ended a turn, oldest first.
    pub fn turn_history(&self) -> &[usize] {
        &self.turn_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(n: u8) -> Vec<Player> {
        (0..n).map(|i| {
            let id = PlayerId::new(i).unwrap();
            Player::new(id, Color::default_for(id), Coord::new(0, 0))
        }).collect()
    }

    fn table(n: u8) -> TurnManager {
        TurnManager::new(seats(n), 0).unwrap()
    }

    #[test]
    fn turns_rotate_in_order() {
        let mut turns = table(3);
        assert_eq!(turns.current().status(), PlayerStatus::Playing);
        assert_eq!(turns.advance_turn().id.index(), 1);
        assert_eq!(turns.advance_turn().id.index(), 2);
        assert_eq!(turns.advance_turn().id.index(), 0);
        assert_eq!(turns.turn_history(), &[0, 1, 2]);
        assert_eq!(turns.players()[1].status(), PlayerStatus::Waiting);
    }

    #[test]
    fn any_seat_may_open() {
        let mut turns = TurnManager::new(seats(3), 2).unwrap();
        assert_eq!(turns.current().id.index(), 2);
        assert_eq!(turns.players()[0].status(), PlayerStatus::Waiting);
        assert_eq!(turns.advance_turn().id.index(), 0);
        assert_eq!(turns.turn_history(), &[2]);

        assert!(TurnManager::new(seats(3), 3).is_err());
        assert!(TurnManager::new(vec![], 0).is_err());
    }

    #[test]
    fn starting_seat_is_fixed_after_the_first_turn() {
        let mut turns = table(4);
        turns.set_starting_seat(3).unwrap();
        assert_eq!(turns.current().id.index(), 3);
        assert_eq!(turns.current().status(), PlayerStatus::Playing);
        assert_eq!(turns.players()[0].status(), PlayerStatus::Waiting);
        assert!(turns.set_starting_seat(4).is_err());

        turns.advance_turn();
        assert!(turns.set_starting_seat(1).is_err());
        assert_eq!(turns.current().id.index(), 0);
    }

    #[test]
    fn passed_players_are_skipped() {
        let mut turns = table(4);
        turns.players[1].mark_passed();
        turns.players[2].mark_passed();
        assert_eq!(turns.advance_turn().id.index(), 3);
        assert_eq!(turns.advance_turn().id.index(), 0);
    }

    #[test]
    fn empty_inventory_finishes_and_ends_the_game() {
        let mut turns = table(4);
        for i in 0..3 {
            turns.players[i].mark_passed();
        }
        Shape::all().into_iter().for_each(|s| turns.players[3].remove_piece(s).unwrap());

        turns.advance_turn();
        assert_eq!(turns.players()[3].status(), PlayerStatus::Finished);
        assert!(turns.is_game_over());

        // once over, advancing is a no-op
        let history = turns.turn_history().len();
        turns.advance_turn();
        assert_eq!(turns.turn_history().len(), history);
    }

    #[test]
    fn a_lone_survivor_keeps_playing() {
        let mut turns = table(2);
        turns.players[1].mark_passed();
        assert_eq!(turns.advance_turn().id.index(), 0);
        assert_eq!(turns.current().status(), PlayerStatus::Playing);
        assert!(!turns.is_game_over());
    }

    #[test]
    fn ties_have_no_winner_but_share_a_rank() {
        let mut turns = table(3);
        assert!(turns.winner().is_none());
        assert!(turns.rankings().iter().all(|(_, rank)| *rank == 1));

        turns.players[2].remove_piece(Shape::Z).unwrap();
        assert_eq!(turns.winner().map(|p| p.id.index()), Some(2));
        let ranks = turns.rankings().into_iter().map(|(_, r)| r).collect::<Vec<_>>();
        assert_eq!(ranks, vec![2, 2, 1]);
    }
}
