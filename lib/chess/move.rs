use crate::chess::{ParsePositionError, Position, Promotion};
use derive_more::{DebugCustom, Display, Error};
use shakmaty as sm;
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// Two moves are only equal if they also agree on the [`Promotion`].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0}{_1}{_2}")]
pub struct Move(pub Position, pub Position, pub Promotion);

impl Move {
    /// The source [`Position`].
    #[inline(always)]
    pub fn whence(&self) -> Position {
        self.0
    }

    /// The destination [`Position`].
    #[inline(always)]
    pub fn whither(&self) -> Position {
        self.1
    }

    /// The [`Promotion`] specifier.
    #[inline(always)]
    pub fn promotion(&self) -> Promotion {
        self.2
    }

    /// Whether this is a promotion move.
    #[inline(always)]
    pub fn is_promotion(&self) -> bool {
        self.promotion() != Promotion::None
    }
}

/// The reason why the string is not a valid move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse move, expected pure coordinate notation like `e2e4` or `b7b8q`")]
pub struct ParseMoveError;

impl From<ParsePositionError> for ParseMoveError {
    fn from(_: ParsePositionError) -> Self {
        ParseMoveError
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() {
            return Err(ParseMoveError);
        }

        let promotion = match s.get(4..) {
            Some("") => Promotion::None,
            Some("n") => Promotion::Knight,
            Some("b") => Promotion::Bishop,
            Some("r") => Promotion::Rook,
            Some("q") => Promotion::Queen,
            _ => return Err(ParseMoveError),
        };

        Ok(Move(s[..2].parse()?, s[2..4].parse()?, promotion))
    }
}

#[doc(hidden)]
impl From<sm::uci::Uci> for Move {
    fn from(m: sm::uci::Uci) -> Self {
        match m {
            sm::uci::Uci::Normal {
                from,
                to,
                promotion,
            } => Move(from.into(), to.into(), promotion.into()),

            v => panic!("unexpected {v:?}"),
        }
    }
}

#[doc(hidden)]
impl From<Move> for sm::uci::Uci {
    fn from(m: Move) -> Self {
        sm::uci::Uci::Normal {
            from: m.whence().into(),
            to: m.whither().into(),
            promotion: m.promotion().into(),
        }
    }
}
