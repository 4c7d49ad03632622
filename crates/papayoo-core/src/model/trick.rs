use crate::model::card::Card;
use crate::model::player::Seat;
use crate::model::scoring;
use crate::model::suit::Suit;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrickError {
    #[error("trick already complete")]
    TrickComplete,
    #[error("{0} has already played this trick")]
    AlreadyPlayed(Seat),
}

/// One round of plays, indexed by seat. The first card locks the led suit and
/// only cards of that suit can take the trick.
#[derive(Debug, Clone, Default)]
pub struct Trick {
    slots: [Option<Card>; 4],
    led: Option<Suit>,
    highest: u8,
    winner: Option<Seat>,
    played: usize,
}

impl Trick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn play(&mut self, seat: Seat, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickComplete);
        }
        if self.slots[seat.index()].is_some() {
            return Err(TrickError::AlreadyPlayed(seat));
        }

        let led = *self.led.get_or_insert(card.suit);
        self.slots[seat.index()] = Some(card);
        self.played += 1;

        if card.suit == led && card.rank.value() > self.highest {
            self.highest = card.rank.value();
            self.winner = Some(seat);
        }
        Ok(())
    }

    pub fn led_suit(&self) -> Option<Suit> {
        self.led
    }

    pub fn is_empty(&self) -> bool {
        self.played == 0
    }

    pub fn is_complete(&self) -> bool {
        self.played == self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.played
    }

    /// Seat holding the best led-suit card so far, even mid-trick.
    pub fn provisional_winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn winner(&self) -> Option<Seat> {
        if self.is_complete() { self.winner } else { None }
    }

    pub fn slots(&self) -> &[Option<Card>; 4] {
        &self.slots
    }

    pub fn card_at(&self, seat: Seat) -> Option<Card> {
        self.slots[seat.index()]
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards().any(|c| c == card)
    }

    /// Point value of the finished trick. Scoring an unfinished trick is a bug.
    pub fn points(&self, trump: Option<Suit>) -> u32 {
        assert!(self.is_complete(), "scored a trick with {} cards", self.played);
        scoring::trick_points(self.cards(), trump)
    }
}
