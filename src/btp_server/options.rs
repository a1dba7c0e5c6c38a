use clap::Parser;

use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Serves the Blokus rules engine over stdin/stdout")]
pub struct BTPServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// The board used by `newgame` when none is named.
    #[arg(short, long, value_enum, default_value_t = GameMode::Standard)]
    pub mode: GameMode,

    /// How many players `newgame` seats in a standard game.
    #[arg(short, long, default_value_t = NUM_PLAYERS)]
    pub players: usize,
}

impl BTPServerOptions {
    /// The setup `newgame` falls back to.
    pub fn game_config(&self) -> Result<GameConfig> {
        GameConfig::for_mode(self.mode, self.players)
    }
}

impl Default for BTPServerOptions {
    fn default() -> Self {
        BTPServerOptions { log_level: None, mode: GameMode::Standard, players: NUM_PLAYERS }
    }
}
