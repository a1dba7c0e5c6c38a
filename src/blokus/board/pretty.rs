use itertools::Itertools;

use super::Board;
use crate::blokus::prelude::*;

impl Board {
    /// Pretty-prints the board, one row per line: `.` for empty, the owner's grid value otherwise.
    pub fn pretty(&self) -> String {
        self.cells.0.iter().take(self.size).map(|row| {
            row.iter().take(self.size).map(|cell| format!("{cell}")).join("")
        }).join("\n")
    }

    /// Pretty-prints the board with a player's corner candidates marked `+`.
    pub fn pretty_for(&self, player: PlayerId) -> String {
        let corners = self.adjacency(player).corner_candidates();
        (0..self.size).map(|row| {
            (0..self.size).map(|col| {
                let coord = Coord::new(row, col);
                let cell = self.get_unchecked(&coord);
                if cell.is_empty() && corners.contains(coord) { "+".to_owned() } else { format!("{cell}") }
            }).join("")
        }).join("\n")
    }
}
