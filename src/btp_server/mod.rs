mod options;

use itertools::Itertools;
pub use options::BTPServerOptions;

use crate::prelude::*;

/// A line-oriented command server over one game of Blokus.
///
/// Every command's output is followed by `ok`; a failed command prints `err` and the
/// reason first.
pub struct BTPServer {
    game: Option<Game>,
    config: BTPServerOptions,
    quit: bool,
}

impl BTPServer {
    /// Produces a new BTP server; no game is started until `newgame`.
    pub fn new(options: BTPServerOptions) -> BTPServer {
        BTPServer { game: None, config: options, quit: false }
    }

    /// Serves commands from stdin until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        while !self.quit {
            let mut cmdstr: String = String::new();
            if std::io::stdin().read_line(&mut cmdstr)? == 0 {
                log::debug!("stdin closed; shutting down");
                break;
            }

            let args: Vec<&str> = cmdstr.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");

            self.apply(cmd, args.get(1..).unwrap_or(&[]))?;
        }
        Ok(())
    }

    /// Runs a command.
    pub fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "board" => self.board(args),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "pass" => self.pass(args),
            | "play" => self.play_move(args),
            | "quit" => { self.quit = true; Ok(()) },
            | "resign" => self.resign(args),
            | "restore" => self.restore(args),
            | "score" => self.score(args),
            | "snapshot" => self.snapshot(args),
            | "validmoves" => self.valid_moves(args),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err)
            },
        }
    }

    /// Starts a new game: `newgame`, `newgame standard [players]` or `newgame duo`.
    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let config = match args {
            []                          => self.config.game_config()?,
            ["duo"]                     => GameConfig::duo(),
            ["standard" | "classic"]    => GameConfig::standard(self.config.players)?,
            ["standard" | "classic", n] => GameConfig::standard(n.parse::<usize>()?)?,
            _                           => return Err(anyhow!("expected newgame [standard [players] | duo]")),
        };

        self.game = Some(Game::new(config)?);
        println!("{}", self.get()?.board().pretty());
        Ok(())
    }

    /// Plays a move for a player and hands the turn on: `play <player> <move>`.
    fn play_move(&mut self, args: &[&str]) -> Result<()> {
        let [player, mv] = args else {
            return Err(anyhow!("expected play <player> <move>"));
        };
        let player = player.parse::<PlayerId>()?;
        let MoveString { repr, placement } = mv.parse::<MoveString>()?;

        let game = self.get_mut()?;
        match placement {
            Some(placement) => game.play(player, placement)?,
            None            => game.try_pass(player)?,
        };
        log::info!("player {player} played {repr}");
        self.advance()
    }

    /// Passes for a player and hands the turn on: `pass <player>`.
    fn pass(&mut self, args: &[&str]) -> Result<()> {
        let [player] = args else {
            return Err(anyhow!("expected pass <player>"));
        };
        let player = player.parse::<PlayerId>()?;
        self.get_mut()?.try_pass(player)?;
        log::info!("player {player} passed");
        self.advance()
    }

    /// Passes for a player even if they could still move: `resign <player>`.
    fn resign(&mut self, args: &[&str]) -> Result<()> {
        let [player] = args else {
            return Err(anyhow!("expected resign <player>"));
        };
        let player = player.parse::<PlayerId>()?;
        self.get_mut()?.force_pass(player)?;
        log::info!("player {player} resigned");
        self.advance()
    }

    /// Lists the legal placements for a player, or the current player if none is named.
    fn valid_moves(&mut self, args: &[&str]) -> Result<()> {
        let game = self.get()?;
        let player = match args.first() {
            Some(s) => s.parse::<PlayerId>()?,
            None    => game.current_player().id,
        };
        if game.player(player).is_none() {
            return Err(GameError::UnknownPlayer.into());
        }

        let moves = game.valid_moves(player).map(|m| m.notate()).collect::<Vec<_>>();
        println!("{}", moves.len());
        println!("{}", moves.join("; "));
        Ok(())
    }

    fn snapshot(&mut self, _args: &[&str]) -> Result<()> {
        println!("{}", self.get()?.snapshot().to_json()?);
        Ok(())
    }

    /// Replaces the current game with one decoded from a JSON snapshot.
    fn restore(&mut self, args: &[&str]) -> Result<()> {
        if args.is_empty() {
            return Err(anyhow!("expected restore <json>"));
        }
        let snapshot = Snapshot::from_json(&args.join(" "))?;
        self.game = Some(Game::restore(&snapshot)?);
        println!("{}", self.get()?.board().pretty());
        Ok(())
    }

    /// Prints each player's score and rank, then the winner once the game is over.
    fn score(&mut self, _args: &[&str]) -> Result<()> {
        let game = self.get()?;
        for (player, rank) in game.rankings() {
            let score = game.player(player).map_or(0, |p| p.compute_score());
            println!("{player} {score} {rank}");
        }
        if game.is_game_over() {
            match game.winner() {
                Some(p) => println!("winner {}", p.id),
                None    => println!("winner none"),
            }
        }
        Ok(())
    }

    /// Prints the board, optionally marking a player's corner candidates.
    fn board(&mut self, args: &[&str]) -> Result<()> {
        let game = self.get()?;
        match args.first() {
            Some(s) => println!("{}", game.board().pretty_for(s.parse::<PlayerId>()?)),
            None    => println!("{}", game.board().pretty()),
        }
        Ok(())
    }

    /// Hands the turn on and reports who is up next.
    fn advance(&mut self) -> Result<()> {
        let game = self.get_mut()?;
        let next = game.advance_turn().id;
        if game.is_game_over() {
            let scores = game.players().iter().map(|p| format!("{}:{}", p.id, p.compute_score())).join(" ");
            log::info!("game over; {scores}");
            println!("gameover");
        } else {
            println!("next {next}");
        }
        Ok(())
    }

    // accessors

    /// Retrieves the game in a shared context.
    pub fn get(&self) -> Result<&Game> {
        self.game.as_ref().ok_or_else(|| anyhow!("no game in progress"))
    }

    /// Retrieves the game in a mutable context.
    fn get_mut(&mut self) -> Result<&mut Game> {
        self.game.as_mut().ok_or_else(|| anyhow!("no game in progress"))
    }

    // basic printers

    /// Prints the server's ID.
    fn info(&self) -> Result<()>
    {
        println!(
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        Ok(())
    }

    /// Prints an error to the BTP stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Prints the ok footer to the BTP stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }
}
