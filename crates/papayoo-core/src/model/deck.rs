use crate::error::PapayooError;
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

pub const DECK_SIZE: usize = 60;

/// The play deck: built fresh every round, shuffled and dealt from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Every suit in ranks 1..=10, followed by the payoo extension 11..=20.
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for value in Rank::MIN..=Rank::BASE_MAX {
                cards.push_back(standard_card(value, suit));
            }
        }
        for value in Rank::BASE_MAX + 1..=Rank::MAX {
            cards.push_back(standard_card(value, Suit::Payoo));
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    pub fn deal_one(&mut self) -> Result<Card, PapayooError> {
        self.cards.pop_front().ok_or(PapayooError::EmptyDeck)
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
}

fn standard_card(value: u8, suit: Suit) -> Card {
    let rank = Rank::from_value(value).expect("standard deck ranks are in range");
    Card::from_parts(rank, suit)
}

/// Canonical, deck-ordered card list. Position `i` is action index `i`.
#[derive(Debug, Clone)]
pub struct ReferenceDeck {
    cards: Vec<Card>,
}

impl ReferenceDeck {
    pub fn new() -> Self {
        let mut cards: Vec<Card> = Deck::standard().iter().copied().collect();
        cards.sort_by(Card::deck_order);
        Self { cards }
    }

    pub fn card(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn index_of(&self, card: Card) -> Option<usize> {
        self.cards
            .binary_search_by(|probe| probe.deck_order(&card))
            .ok()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for ReferenceDeck {
    fn default() -> Self {
        Self::new()
    }
}
