use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Game, Move, Position};
use tracing::{info, instrument};

/// Lists the legal moves of a piece.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// The square the piece stands on, e.g. `e2`.
    square: Position,

    /// Moves to replay from the standard initial setup beforehand.
    #[clap(short, long, num_args = 1..)]
    after: Vec<Move>,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::new();

        for m in self.after {
            game.play(m)
                .with_context(|| format!("failed to play move `{m}`"))?;
        }

        let Some(moves) = game.moves(self.square) else {
            info!(square = %self.square, "the square is empty");
            return Ok(());
        };

        info!(square = %self.square, turn = %game.turn(), moves = moves.len());

        for m in moves {
            println!("{m}");
        }

        Ok(())
    }
}
