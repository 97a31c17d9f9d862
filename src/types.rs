use crate::consts::{
    DAY_CHARACTERS, HOUR_CHARACTERS, MINUTE_CHARACTERS, MONTH_CHARACTERS, SECOND_CHARACTERS,
    YEAR_CHARACTERS,
};
use crate::prelude::*;

/// A time part that one or more pattern characters render.
///
/// Variants are declared from the largest part to the smallest, so the derived
/// `Ord` is the size order: `Year < Month < ... < Second` reads as "coarser
/// than".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum TimePart {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

impl TimePart {
    /// All time parts, largest first.
    pub const ALL: [Self; 6] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// Returns the time part a pattern character renders, or `None` for a
    /// character that is treated as a literal.
    pub fn of(character: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|part| part.aliases().contains(&character))
    }

    /// Returns every pattern character that renders this time part.
    pub const fn aliases(self) -> &'static [char] {
        match self {
            Self::Year => YEAR_CHARACTERS,
            Self::Month => MONTH_CHARACTERS,
            Self::Day => DAY_CHARACTERS,
            Self::Hour => HOUR_CHARACTERS,
            Self::Minute => MINUTE_CHARACTERS,
            Self::Second => SECOND_CHARACTERS,
        }
    }

    /// Whether this is an hour, minute or second.
    pub const fn is_time(self) -> bool {
        matches!(self, Self::Hour | Self::Minute | Self::Second)
    }

    #[inline]
    pub fn is_smaller_than(self, other: Self) -> bool {
        self > other
    }
}
