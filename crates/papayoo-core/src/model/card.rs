use crate::error::PapayooError;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use serde::Serialize;

/// Points carried by the seven of the papayoo suit.
pub const PAPAYOO_SEVEN_POINTS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Builds a card, rejecting ranks above 10 outside the payoo suit.
    pub fn new(rank: Rank, suit: Suit) -> Result<Self, PapayooError> {
        if rank.value() > suit.max_rank() {
            return Err(PapayooError::InvalidCardIdentifier(format!("{rank}{suit}")));
        }
        Ok(Self { rank, suit })
    }

    pub(crate) const fn from_parts(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Suit first, then rank. Used for the reference deck and action indices.
    pub fn deck_order(&self, other: &Card) -> Ordering {
        self.suit.cmp(&other.suit).then(self.rank.cmp(&other.rank))
    }

    /// Rank first, then suit. Used when sorting a hand.
    pub fn play_order(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank).then(self.suit.cmp(&other.suit))
    }

    pub fn is_papayoo(self, trump: Option<Suit>) -> bool {
        self.rank == Rank::SEVEN && Some(self.suit) == trump
    }

    /// Scoring contribution of this card once it lands in a won trick.
    pub fn point_value(self, trump: Option<Suit>) -> u32 {
        if self.is_papayoo(trump) {
            PAPAYOO_SEVEN_POINTS
        } else if self.suit.is_payoo() {
            u32::from(self.rank.value())
        } else {
            0
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = PapayooError;

    /// Parses notation such as `7h` or `15p`: a rank followed by one suit symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let Some(symbol) = text.chars().last() else {
            return Err(PapayooError::InvalidSuitToken(String::new()));
        };
        let suit = Suit::from_symbol(symbol)
            .ok_or_else(|| PapayooError::InvalidSuitToken(symbol.to_string()))?;
        let rank_text = &text[..text.len() - symbol.len_utf8()];
        let value: u8 = rank_text
            .parse()
            .map_err(|_| PapayooError::InvalidCardIdentifier(text.to_string()))?;
        let rank =
            Rank::from_value(value).ok_or_else(|| PapayooError::InvalidCardIdentifier(text.to_string()))?;
        Card::new(rank, suit)
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, PAPAYOO_SEVEN_POINTS};
    use crate::error::PapayooError;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use core::cmp::Ordering;

    fn card(text: &str) -> Card {
        text.parse().unwrap()
    }

    #[test]
    fn extended_ranks_only_in_payoo() {
        let fifteen = Rank::new(15).unwrap();
        assert!(Card::new(fifteen, Suit::Payoo).is_ok());
        assert!(matches!(
            Card::new(fifteen, Suit::Clubs),
            Err(PapayooError::InvalidCardIdentifier(_))
        ));
    }

    #[test]
    fn parses_and_displays_notation() {
        let seven = card("7H");
        assert_eq!(seven.rank.value(), 7);
        assert_eq!(seven.suit, Suit::Hearts);
        assert_eq!(seven.to_string(), "7h");
        assert_eq!(card("20p").to_string(), "20p");
    }

    #[test]
    fn parse_failures_are_explicit() {
        assert!(matches!("".parse::<Card>(), Err(PapayooError::InvalidSuitToken(_))));
        assert!(matches!("7x".parse::<Card>(), Err(PapayooError::InvalidSuitToken(_))));
        assert!(matches!("h".parse::<Card>(), Err(PapayooError::InvalidCardIdentifier(_))));
        assert!(matches!("0c".parse::<Card>(), Err(PapayooError::InvalidCardIdentifier(_))));
        assert!(matches!("11c".parse::<Card>(), Err(PapayooError::InvalidCardIdentifier(_))));
        assert!(matches!("21p".parse::<Card>(), Err(PapayooError::InvalidCardIdentifier(_))));
    }

    #[test]
    fn deck_order_is_suit_major() {
        assert_eq!(card("10p").deck_order(&card("1c")), Ordering::Less);
        assert_eq!(card("2h").deck_order(&card("3h")), Ordering::Less);
    }

    #[test]
    fn play_order_is_rank_major() {
        assert_eq!(card("10p").play_order(&card("1c")), Ordering::Greater);
        assert_eq!(card("3d").play_order(&card("3c")), Ordering::Greater);
    }

    #[test]
    fn seven_of_trump_scores_forty() {
        assert_eq!(card("7h").point_value(Some(Suit::Hearts)), PAPAYOO_SEVEN_POINTS);
        assert_eq!(card("7h").point_value(Some(Suit::Clubs)), 0);
        assert_eq!(card("7h").point_value(None), 0);
    }

    #[test]
    fn payoo_cards_score_their_rank() {
        assert_eq!(card("13p").point_value(Some(Suit::Spades)), 13);
        assert_eq!(card("7p").point_value(Some(Suit::Spades)), 7);
        assert_eq!(card("9d").point_value(Some(Suit::Spades)), 0);
    }
}
