use crate::chess::{Column, Kind, Piece, Position, Row, Team};
use crate::util::Integer;
use std::fmt::{self, Write};
use std::ops::Index;

/// The piece placement on the chess board.
///
/// This type holds a point-in-time snapshot and knows nothing about turns or history,
/// nor does it validate whether the placement it holds is reachable under the rules of chess.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, prelude::*};

        vec(any::<Option<Piece>>(), 64)
            .prop_map(|v| {
                let mut board = Board::empty();

                board
                    .squares
                    .iter_mut()
                    .flatten()
                    .zip(v)
                    .for_each(|(s, p)| *s = p);

                board
            })
            .boxed()
    }
}

impl Default for Board {
    /// The standard initial setup.
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    const BACK: [Kind; 8] = [
        Kind::Rook,
        Kind::Knight,
        Kind::Bishop,
        Kind::Queen,
        Kind::King,
        Kind::Bishop,
        Kind::Knight,
        Kind::Rook,
    ];

    /// A board without any pieces.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial setup, with white on rows 1 and 2 and black on rows 7 and 8.
    pub fn standard() -> Self {
        let mut board = Self::empty();

        for team in Team::iter() {
            for (column, kind) in Column::iter().zip(Self::BACK) {
                board.place(Position::new(Row::back(team), column), Piece(team, kind));
                board.place(Position::new(Row::pawns(team), column), Piece(team, Kind::Pawn));
            }
        }

        board
    }

    /// Sets the content of a square, returning whatever was there before.
    #[inline(always)]
    pub fn set(&mut self, p: Position, piece: Option<Piece>) -> Option<Piece> {
        let square = &mut self.squares[p.row().get() as usize][p.column().get() as usize];
        std::mem::replace(square, piece)
    }

    /// Places a [`Piece`] on a square, returning the piece displaced, if any.
    #[inline(always)]
    pub fn place(&mut self, p: Position, piece: Piece) -> Option<Piece> {
        self.set(p, Some(piece))
    }

    /// Clears a square, returning the piece removed, if any.
    #[inline(always)]
    pub fn remove(&mut self, p: Position) -> Option<Piece> {
        self.set(p, None)
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Position)> + '_ {
        Position::iter().filter_map(|p| Some((self[p]?, p)))
    }

    /// [`Position`]s occupied by pieces of a [`Team`].
    pub fn by_team(&self, team: Team) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |(piece, _)| piece.team() == team)
            .map(|(_, p)| p)
    }

    /// How many copies of a [`Piece`] there are on the board.
    pub fn count(&self, piece: Piece) -> usize {
        self.iter().filter(|&(q, _)| q == piece).count()
    }

    /// [`Position`] occupied by the king of a [`Team`], if any.
    pub fn king(&self, team: Team) -> Option<Position> {
        let king = Piece(team, Kind::King);
        self.iter().find(|&(piece, _)| piece == king).map(|(_, p)| p)
    }
}

/// Retrieves the [`Piece`] at a given [`Position`], if any.
impl Index<Position> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, p: Position) -> &Self::Output {
        &self.squares[p.row().get() as usize][p.column().get() as usize]
    }
}

/// Prints the placement from row 8 down to row 1, with runs of empty squares as digits.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Board(")?;

        for (i, row) in self.squares.iter().rev().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }

            let mut skip = 0;
            for square in row {
                match square {
                    None => skip += 1,
                    Some(piece) => {
                        if skip > 0 {
                            write!(f, "{skip}")?;
                            skip = 0;
                        }

                        write!(f, "{piece}")?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{skip}")?;
            }
        }

        f.write_char(')')
    }
}
