use crate::error::PapayooError;
use core::fmt;
use serde::Serialize;

/// Card rank in `1..=20`. Ranks above 10 exist only in the payoo suit,
/// which [`Card::new`](crate::model::card::Card::new) enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
#[serde(into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;
    /// Highest rank shared by every suit.
    pub const BASE_MAX: u8 = 10;

    pub const SEVEN: Rank = Rank(7);

    pub const fn from_value(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Rank(value))
        } else {
            None
        }
    }

    pub fn new(value: u8) -> Result<Self, PapayooError> {
        Self::from_value(value).ok_or_else(|| PapayooError::InvalidCardIdentifier(value.to_string()))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_extended(self) -> bool {
        self.0 > Self::BASE_MAX
    }
}

impl TryFrom<u8> for Rank {
    type Error = PapayooError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
