use crate::chess::movegen::{self, Moves};
use crate::chess::{Board, Kind, Move, Outcome, Piece, Position, Team};
use crate::util::Integer;
use derive_more::{Display, Error};
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use std::ops::Range;
use tracing::instrument;

/// The reason why a [`Move`] was rejected.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum InvalidMove {
    #[display(fmt = "there is no piece on square `{_0}`")]
    NoPiece(#[error(not(source))] Position),

    #[display(fmt = "it is not the {_0} team's turn")]
    OutOfTurn(#[error(not(source))] Team),

    #[display(fmt = "move `{_0}` is illegal in this position")]
    Illegal(#[error(not(source))] Move),
}

/// The reason why a [`Board`] can't be installed in a [`Game`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum IllegalBoard {
    #[display(fmt = "the {_0} king is missing")]
    MissingKing(#[error(not(source))] Team),

    #[display(fmt = "the {_0} team has more than one king")]
    TooManyKings(#[error(not(source))] Team),

    #[display(fmt = "the team not to move is in check")]
    OppositeCheck,
}

/// A game of chess between two teams.
///
/// Every game holds exactly one king per team and the team not to move is never in check.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Team,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: Board::standard(),
            turn: Team::White,
        }
    }
}

impl Arbitrary for Game {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Game>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..128, any::<Selector>()).prop_map(|(plies, selector)| {
            let mut game = Game::new();

            for _ in 0..plies {
                let Some(m) = selector.try_select(game.legal_moves()) else {
                    break;
                };

                if game.play(m).is_err() {
                    break;
                }
            }

            game
        })
    }
}

impl Game {
    /// A game from the standard initial setup with white to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// A game from an arbitrary [`Board`] with `turn` to move.
    pub fn with_board(board: Board, turn: Team) -> Result<Self, IllegalBoard> {
        validate(&board, turn)?;
        Ok(Game { board, turn })
    }

    /// The current [`Board`].
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The [`Team`] to move.
    #[inline(always)]
    pub fn turn(&self) -> Team {
        self.turn
    }

    /// Replaces the [`Board`], keeping the team to move.
    #[instrument(level = "debug", skip(self), err, fields(turn = %self.turn))]
    pub fn set_board(&mut self, board: Board) -> Result<(), IllegalBoard> {
        validate(&board, self.turn)?;
        self.board = board;
        Ok(())
    }

    /// Hands the turn over to a [`Team`].
    #[instrument(level = "debug", skip(self), err, fields(turn = %self.turn))]
    pub fn set_turn(&mut self, team: Team) -> Result<(), IllegalBoard> {
        validate(&self.board, team)?;
        self.turn = team;
        Ok(())
    }

    /// The legal moves of the piece on `whence`, regardless of whose turn it is.
    ///
    /// Returns `None` if the square is empty.
    pub fn moves(&self, whence: Position) -> Option<Moves> {
        let piece = self.board[whence]?;
        Some(self.legal(piece, whence))
    }

    /// Every legal move available to the team to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .iter()
            .filter(|(piece, _)| piece.team() == self.turn)
            .flat_map(|(piece, p)| self.legal(piece, p))
            .collect()
    }

    /// Plays a [`Move`] and hands the turn over to the opponent.
    ///
    /// The game is left unchanged if the move is rejected.
    #[instrument(level = "debug", skip(self, m), err, fields(turn = %self.turn, %m))]
    pub fn play(&mut self, m: Move) -> Result<(), InvalidMove> {
        let Some(piece) = self.board[m.whence()] else {
            return Err(InvalidMove::NoPiece(m.whence()));
        };

        if piece.team() != self.turn {
            return Err(InvalidMove::OutOfTurn(piece.team()));
        }

        if !self.legal(piece, m.whence()).contains(&m) {
            return Err(InvalidMove::Illegal(m));
        }

        apply(&mut self.board, piece, m);
        self.turn = !self.turn;
        Ok(())
    }

    /// Whether the king of a [`Team`] is attacked.
    pub fn is_check(&self, team: Team) -> bool {
        is_attacked(&self.board, team)
    }

    /// Whether a [`Team`] is in check and has no legal moves.
    pub fn is_checkmate(&self, team: Team) -> bool {
        self.is_check(team) && !self.can_move(team)
    }

    /// Whether a [`Team`] is not in check but has no legal moves.
    pub fn is_stalemate(&self, team: Team) -> bool {
        !self.is_check(team) && !self.can_move(team)
    }

    /// The [`Outcome`] of the game, if the team to move has been checkmated or stalemated.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.can_move(self.turn) {
            None
        } else if self.is_check(self.turn) {
            Some(Outcome::Checkmate(!self.turn))
        } else {
            Some(Outcome::Stalemate)
        }
    }

    fn can_move(&self, team: Team) -> bool {
        self.board
            .iter()
            .filter(|(piece, _)| piece.team() == team)
            .any(|(piece, p)| !self.legal(piece, p).is_empty())
    }

    fn legal(&self, piece: Piece, whence: Position) -> Moves {
        let mut scratch = self.board;
        let mut moves = movegen::pseudo_legal(&self.board, whence);

        moves.retain(|m| {
            let displaced = apply(&mut scratch, piece, *m);
            let safe = !is_attacked(&scratch, piece.team());
            scratch.set(m.whither(), displaced);
            scratch.place(m.whence(), piece);
            safe
        });

        moves
    }
}

/// Moves `piece` according to `m`, returning the piece captured, if any.
fn apply(board: &mut Board, piece: Piece, m: Move) -> Option<Piece> {
    let piece = match Option::<Kind>::from(m.promotion()) {
        Some(kind) => Piece(piece.team(), kind),
        None => piece,
    };

    board.remove(m.whence());
    board.place(m.whither(), piece)
}

fn is_attacked(board: &Board, team: Team) -> bool {
    let king = board.king(team).expect("expected king on the board");
    movegen::attacks(board, !team, king)
}

fn validate(board: &Board, turn: Team) -> Result<(), IllegalBoard> {
    for team in Team::iter() {
        match board.count(Piece(team, Kind::King)) {
            0 => return Err(IllegalBoard::MissingKing(team)),
            1 => continue,
            _ => return Err(IllegalBoard::TooManyKings(team)),
        }
    }

    if is_attacked(board, !turn) {
        return Err(IllegalBoard::OppositeCheck);
    }

    Ok(())
}
