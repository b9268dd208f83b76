use crate::util::Integer;
use derive_more::Display;
use shakmaty as sm;
use std::ops::Not;

/// One of the two sides of a chess game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Team {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

unsafe impl Integer for Team {
    type Repr = u8;
    const MIN: Self::Repr = Team::White as _;
    const MAX: Self::Repr = Team::Black as _;
}

impl Not for Team {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
}

#[doc(hidden)]
impl From<sm::Color> for Team {
    fn from(c: sm::Color) -> Self {
        match c {
            sm::Color::White => Team::White,
            sm::Color::Black => Team::Black,
        }
    }
}

#[doc(hidden)]
impl From<Team> for sm::Color {
    fn from(t: Team) -> Self {
        match t {
            Team::White => sm::Color::White,
            Team::Black => sm::Color::Black,
        }
    }
}
