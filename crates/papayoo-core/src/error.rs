use crate::model::card::Card;
use crate::model::player::Seat;
use crate::model::round::PhaseKind;
use crate::model::suit::Suit;
use crate::model::trick::TrickError;
use thiserror::Error;

/// Recoverable failures surfaced by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PapayooError {
    #[error("invalid card identifier `{0}`")]
    InvalidCardIdentifier(String),

    #[error("invalid suit token `{0}`")]
    InvalidSuitToken(String),

    #[error("cannot deal from an empty deck")]
    EmptyDeck,

    #[error("{0} is not in hand")]
    CardNotInHand(Card),

    #[error("expected {expected} to act but got {actual}")]
    OutOfTurn { expected: Seat, actual: Seat },

    #[error("{card} does not follow the led suit {led}")]
    IllegalMove { card: Card, led: Suit },

    #[error("cannot {attempted} during {phase}")]
    PhaseViolation {
        phase: PhaseKind,
        attempted: &'static str,
    },

    #[error("no round has been dealt yet")]
    RoundNotStarted,

    #[error("action index {0} is outside the deck")]
    InvalidAction(usize),

    #[error(transparent)]
    Trick(#[from] TrickError),
}
