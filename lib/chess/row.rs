use crate::chess::Team;
use crate::util::Integer;
use derive_more::{Display, Error};
use std::str::FromStr;

/// A row on the chess board, numbered from white's side.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Row {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Row {
    /// The row where pieces of a [`Team`] start, other than pawns.
    #[inline(always)]
    pub fn back(team: Team) -> Self {
        match team {
            Team::White => Row::First,
            Team::Black => Row::Eighth,
        }
    }

    /// The row where pawns of a [`Team`] start.
    #[inline(always)]
    pub fn pawns(team: Team) -> Self {
        match team {
            Team::White => Row::Second,
            Team::Black => Row::Seventh,
        }
    }

    /// The row where pawns of a [`Team`] are promoted.
    #[inline(always)]
    pub fn last(team: Team) -> Self {
        Row::back(!team)
    }

    /// The 1-based row number.
    #[inline(always)]
    pub fn number(&self) -> u8 {
        self.get() as u8 + 1
    }
}

unsafe impl Integer for Row {
    type Repr = i8;
    const MIN: Self::Repr = Row::First as _;
    const MAX: Self::Repr = Row::Eighth as _;
}

/// The reason why parsing [`Row`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse row, expected digit in the range `(1..=8)`")]
pub struct ParseRowError;

impl FromStr for Row {
    type Err = ParseRowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Row::First),
            "2" => Ok(Row::Second),
            "3" => Ok(Row::Third),
            "4" => Ok(Row::Fourth),
            "5" => Ok(Row::Fifth),
            "6" => Ok(Row::Sixth),
            "7" => Ok(Row::Seventh),
            "8" => Ok(Row::Eighth),
            _ => Err(ParseRowError),
        }
    }
}
