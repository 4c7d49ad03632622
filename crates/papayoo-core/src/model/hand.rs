use crate::model::card::Card;
use crate::model::suit::Suit;
use rand::Rng;

/// Card count at which a freshly dealt hand is complete.
pub const FULL_HAND: usize = 15;

#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    sorted: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(FULL_HAND),
            sorted: false,
        }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self::new();
        for card in cards {
            hand.add(card);
        }
        hand
    }

    /// Appends a card. The hand is sorted exactly when it reaches a full deal.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sorted = false;
        if self.cards.len() == FULL_HAND {
            self.sort();
        }
    }

    pub fn sort(&mut self) {
        self.cards.sort_by(Card::play_order);
        self.sorted = true;
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit == suit)
    }

    pub fn random_card<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        Some(self.cards[rng.gen_range(0..self.cards.len())])
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.sorted = false;
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
