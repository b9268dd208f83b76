use crate::util::Integer;
use derive_more::{Display, Error};
use std::str::FromStr;

/// A column on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Column {
    #[display(fmt = "a")]
    A,
    #[display(fmt = "b")]
    B,
    #[display(fmt = "c")]
    C,
    #[display(fmt = "d")]
    D,
    #[display(fmt = "e")]
    E,
    #[display(fmt = "f")]
    F,
    #[display(fmt = "g")]
    G,
    #[display(fmt = "h")]
    H,
}

impl Column {
    /// The 1-based column number.
    #[inline(always)]
    pub fn number(&self) -> u8 {
        self.get() as u8 + 1
    }
}

unsafe impl Integer for Column {
    type Repr = i8;
    const MIN: Self::Repr = Column::A as _;
    const MAX: Self::Repr = Column::H as _;
}

/// The reason why parsing [`Column`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse column, expected letter in the range `(a..=h)`")]
pub struct ParseColumnError;

impl FromStr for Column {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Column::A),
            "b" => Ok(Column::B),
            "c" => Ok(Column::C),
            "d" => Ok(Column::D),
            "e" => Ok(Column::E),
            "f" => Ok(Column::F),
            "g" => Ok(Column::G),
            "h" => Ok(Column::H),
            _ => Err(ParseColumnError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn column_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Column>>(), size_of::<Column>());
    }

    #[proptest]
    fn column_number_is_one_based(c: Column) {
        assert_eq!(c.number() as i8, c.get() + 1);
    }

    #[proptest]
    fn parsing_printed_column_is_an_identity(c: Column) {
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[proptest]
    fn parsing_column_fails_if_not_lower_case_letter_between_a_and_h(
        #[filter(!('a'..='h').contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Column>(), Err(ParseColumnError));
    }

    #[proptest]
    fn parsing_column_fails_if_length_not_one(#[filter(#s.chars().count() != 1)] s: String) {
        assert_eq!(s.parse::<Column>(), Err(ParseColumnError));
    }
}
