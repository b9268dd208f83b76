use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Game, Move};
use tracing::{info, instrument};

/// Replays moves from the standard initial setup.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Moves in pure coordinate notation, e.g. `e2e4` or `b7b8q`.
    moves: Vec<Move>,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::new();

        for (n, m) in self.moves.into_iter().enumerate() {
            game.play(m)
                .with_context(|| format!("failed to play move #{} `{m}`", n + 1))?;

            let turn = game.turn();
            info!(ply = n + 1, %m, %turn, check = game.is_check(turn));
        }

        match game.outcome() {
            Some(outcome) => info!(%outcome, "game over"),
            None => info!(turn = %game.turn(), moves = game.legal_moves().len(), "in progress"),
        }

        Ok(())
    }
}
