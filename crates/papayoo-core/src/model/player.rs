use crate::error::PapayooError;
use crate::model::card::Card;
use crate::model::hand::Hand;
use core::fmt;
use serde::Serialize;

/// Table seats, numbered clockwise starting from South.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Seat {
    South = 0,
    West = 1,
    North = 2,
    East = 3,
}

impl Seat {
    pub const LOOP: [Seat; 4] = [Seat::South, Seat::West, Seat::North, Seat::East];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::South),
            1 => Some(Seat::West),
            2 => Some(Seat::North),
            3 => Some(Seat::East),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The next seat clockwise.
    pub const fn next(self) -> Seat {
        match self {
            Seat::South => Seat::West,
            Seat::West => Seat::North,
            Seat::North => Seat::East,
            Seat::East => Seat::South,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::South => "South",
            Seat::West => "West",
            Seat::North => "North",
            Seat::East => "East",
        };
        f.pad(label)
    }
}

/// Per-seat round state: the private hand, trick points and won cards.
#[derive(Debug, Clone)]
pub struct Player {
    seat: Seat,
    hand: Hand,
    score: u32,
    collected: Vec<Card>,
}

impl Player {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            hand: Hand::new(),
            score: 0,
            collected: Vec::new(),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn collected(&self) -> &[Card] {
        &self.collected
    }

    pub fn has_collected(&self, card: Card) -> bool {
        self.collected.contains(&card)
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    /// Removes `card` from the hand, failing if it is not held.
    pub fn play(&mut self, card: Card) -> Result<Card, PapayooError> {
        if self.hand.remove(card) {
            Ok(card)
        } else {
            Err(PapayooError::CardNotInHand(card))
        }
    }

    pub fn win_trick(&mut self, cards: &[Card], points: u32) {
        self.score += points;
        self.collected.extend_from_slice(cards);
    }

    /// Clears everything tied to the previous round, hand included.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.score = 0;
        self.collected.clear();
    }
}
