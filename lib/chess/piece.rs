use crate::chess::{Kind, Team};
use std::fmt::{self, Write};

/// A chess piece of a certain [`Kind`] that belongs to a [`Team`].
///
/// Pieces carry no identity, two pieces of the same team and kind are indistinguishable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Team, pub Kind);

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Team`] and [`Kind`].
    #[inline(always)]
    pub fn new(team: Team, kind: Kind) -> Self {
        Piece(team, kind)
    }

    /// This piece's [`Team`].
    #[inline(always)]
    pub fn team(&self) -> Team {
        self.0
    }

    /// This piece's [`Kind`].
    #[inline(always)]
    pub fn kind(&self) -> Kind {
        self.1
    }
}

/// Prints the conventional letter, in uppercase for white and lowercase for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.kind() {
            Kind::Pawn => 'p',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Rook => 'r',
            Kind::Queen => 'q',
            Kind::King => 'k',
        };

        match self.team() {
            Team::White => f.write_char(c.to_ascii_uppercase()),
            Team::Black => f.write_char(c),
        }
    }
}

#[doc(hidden)]
impl From<shakmaty::Piece> for Piece {
    fn from(p: shakmaty::Piece) -> Self {
        Piece(p.color.into(), p.role.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn piece_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Piece>>(), size_of::<Piece>());
    }

    #[proptest]
    fn piece_has_a_team(t: Team, k: Kind) {
        assert_eq!(Piece::new(t, k).team(), t);
    }

    #[proptest]
    fn piece_has_a_kind(t: Team, k: Kind) {
        assert_eq!(Piece::new(t, k).kind(), k);
    }

    #[proptest]
    fn pieces_are_equal_by_team_and_kind(a: Piece, b: Piece) {
        assert_eq!(a == b, a.team() == b.team() && a.kind() == b.kind());
    }

    #[proptest]
    fn white_pieces_print_in_uppercase(k: Kind) {
        assert_eq!(
            Piece(Team::White, k).to_string(),
            k.to_string().to_uppercase()
        );
    }

    #[proptest]
    fn black_pieces_print_in_lowercase(k: Kind) {
        assert_eq!(Piece(Team::Black, k).to_string(), k.to_string());
    }

    #[proptest]
    fn piece_has_an_equivalent_shakmaty_representation(p: Piece) {
        let sp = shakmaty::Piece {
            color: p.team().into(),
            role: p.kind().into(),
        };

        assert_eq!(Piece::from(sp), p);
    }
}
