use crate::chess::{Column, ParseColumnError, ParseRowError, Row};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use shakmaty as sm;
use std::{fmt, str::FromStr};

/// A square on the chess board.
///
/// Every value denotes a square on the board, so out of range coordinates can't be represented.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
#[rustfmt::skip]
pub enum Position {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Position {
    /// Constructs [`Position`] from a pair of [`Row`] and [`Column`].
    #[inline(always)]
    pub fn new(row: Row, column: Column) -> Self {
        <Self as Integer>::new(column.get() | row.get() << 3)
    }

    /// Constructs [`Position`] from 1-based row and column numbers, if both are in `(1..=8)`.
    #[inline(always)]
    pub fn from_coords(row: u8, column: u8) -> Option<Self> {
        let row = Row::checked(i8::try_from(row).ok()? - 1)?;
        let column = Column::checked(i8::try_from(column).ok()? - 1)?;
        Some(Position::new(row, column))
    }

    /// This position's [`Row`].
    #[inline(always)]
    pub fn row(&self) -> Row {
        Row::new(self.get() >> 3)
    }

    /// This position's [`Column`].
    #[inline(always)]
    pub fn column(&self) -> Column {
        Column::new(self.get() & 0b111)
    }

    /// The position reached by stepping over rows and columns, unless it falls off the board.
    #[inline(always)]
    pub fn offset(self, rows: i8, columns: i8) -> Option<Self> {
        let row = Row::checked(self.row().get().checked_add(rows)?)?;
        let column = Column::checked(self.column().get().checked_add(columns)?)?;
        Some(Position::new(row, column))
    }
}

unsafe impl Integer for Position {
    type Repr = i8;
    const MIN: Self::Repr = Position::A1 as _;
    const MAX: Self::Repr = Position::H8 as _;
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.column(), f)?;
        fmt::Display::fmt(&self.row(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePositionError {
    #[display(fmt = "failed to parse position")]
    InvalidColumn(ParseColumnError),
    #[display(fmt = "failed to parse position")]
    InvalidRow(ParseRowError),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        let column = s[..i].parse()?;
        let row = s[i..].parse()?;
        Ok(Position::new(row, column))
    }
}

#[doc(hidden)]
impl From<sm::Square> for Position {
    fn from(s: sm::Square) -> Self {
        <Self as Integer>::new(s as i8)
    }
}

#[doc(hidden)]
impl From<Position> for sm::Square {
    fn from(p: Position) -> Self {
        sm::Square::new(p.get() as u32)
    }
}
