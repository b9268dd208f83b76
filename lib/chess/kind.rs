use crate::util::Integer;
use derive_more::{Display, Error};
use shakmaty as sm;
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// The kind of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Kind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

unsafe impl Integer for Kind {
    type Repr = u8;
    const MIN: Self::Repr = Kind::Pawn as _;
    const MAX: Self::Repr = Kind::King as _;
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Pawn => f.write_char('p'),
            Kind::Knight => f.write_char('n'),
            Kind::Bishop => f.write_char('b'),
            Kind::Rook => f.write_char('r'),
            Kind::Queen => f.write_char('q'),
            Kind::King => f.write_char('k'),
        }
    }
}

/// The reason why parsing [`Kind`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece kind, expected one of `p`, `n`, `b`, `r`, `q` or `k`")]
pub struct ParseKindError;

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(Kind::Pawn),
            "n" => Ok(Kind::Knight),
            "b" => Ok(Kind::Bishop),
            "r" => Ok(Kind::Rook),
            "q" => Ok(Kind::Queen),
            "k" => Ok(Kind::King),
            _ => Err(ParseKindError),
        }
    }
}

#[doc(hidden)]
impl From<sm::Role> for Kind {
    fn from(r: sm::Role) -> Self {
        match r {
            sm::Role::Pawn => Kind::Pawn,
            sm::Role::Knight => Kind::Knight,
            sm::Role::Bishop => Kind::Bishop,
            sm::Role::Rook => Kind::Rook,
            sm::Role::Queen => Kind::Queen,
            sm::Role::King => Kind::King,
        }
    }
}

#[doc(hidden)]
impl From<Kind> for sm::Role {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Pawn => sm::Role::Pawn,
            Kind::Knight => sm::Role::Knight,
            Kind::Bishop => sm::Role::Bishop,
            Kind::Rook => sm::Role::Rook,
            Kind::Queen => sm::Role::Queen,
            Kind::King => sm::Role::King,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn kind_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Kind>>(), size_of::<Kind>());
    }

    #[test]
    fn there_are_exactly_six_kinds() {
        assert_eq!(Kind::iter().count(), 6);
    }

    #[proptest]
    fn parsing_printed_kind_is_an_identity(k: Kind) {
        assert_eq!(k.to_string().parse(), Ok(k));
    }

    #[proptest]
    fn parsing_kind_fails_if_not_one_of_lowercase_pnbrqk(
        #[filter(!['p', 'n', 'b', 'r', 'q', 'k'].contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Kind>(), Err(ParseKindError));
    }

    #[proptest]
    fn parsing_kind_fails_if_length_not_one(#[filter(#s.chars().count() != 1)] s: String) {
        assert_eq!(s.parse::<Kind>(), Err(ParseKindError));
    }

    #[proptest]
    fn kind_has_an_equivalent_shakmaty_representation(k: Kind) {
        assert_eq!(Kind::from(sm::Role::from(k)), k);
    }
}
