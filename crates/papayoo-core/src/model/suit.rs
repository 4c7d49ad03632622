use crate::error::PapayooError;
use core::fmt;
use core::str::FromStr;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Suit {
    Payoo = 0,
    Clubs = 1,
    Hearts = 2,
    Spades = 3,
    Diamonds = 4,
}

impl Suit {
    pub const ALL: [Suit; 5] = [
        Suit::Payoo,
        Suit::Clubs,
        Suit::Hearts,
        Suit::Spades,
        Suit::Diamonds,
    ];

    /// Suits eligible to become the papayoo (trump) suit once passing ends.
    pub const TRUMP_CANDIDATES: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Payoo),
            1 => Some(Suit::Clubs),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            4 => Some(Suit::Diamonds),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_payoo(self) -> bool {
        matches!(self, Suit::Payoo)
    }

    /// Highest rank this suit carries: the payoo suit runs to 20, the others to 10.
    pub const fn max_rank(self) -> u8 {
        match self {
            Suit::Payoo => 20,
            _ => 10,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Payoo => 'p',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Diamonds => 'd',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        let lowered = symbol.to_ascii_lowercase();
        Suit::ALL.into_iter().find(|suit| suit.symbol() == lowered)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Suit {
    type Err = PapayooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => {
                Suit::from_symbol(symbol).ok_or_else(|| PapayooError::InvalidSuitToken(s.to_string()))
            }
            _ => Err(PapayooError::InvalidSuitToken(s.to_string())),
        }
    }
}

/// Renders an optional trump suit, showing `Unset` before it is drawn.
pub struct TrumpDisplay(pub Option<Suit>);

impl fmt::Display for TrumpDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(suit) => write!(f, "{suit}"),
            None => f.write_str("Unset"),
        }
    }
}
