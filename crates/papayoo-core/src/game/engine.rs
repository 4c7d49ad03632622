use crate::error::PapayooError;
use crate::game::snapshot::RoundSnapshot;
use crate::model::card::Card;
use crate::model::deck::{DECK_SIZE, Deck, ReferenceDeck};
use crate::model::player::Seat;
use crate::model::round::{ActionOutcome, PlayOutcome, RoundState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a single [`RoundEngine::step`].
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub state: RoundSnapshot,
    /// Zero on every step except the one that finishes the round.
    pub rewards: [f64; 4],
    pub done: bool,
}

/// Drives rounds one decision at a time. Actions are indices into the
/// deck-ordered [`ReferenceDeck`].
#[derive(Debug, Clone)]
pub struct RoundEngine<R = StdRng> {
    rng: R,
    reference: ReferenceDeck,
    last_dealer: Option<Seat>,
    round: Option<RoundState>,
}

impl RoundEngine<StdRng> {
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            reference: ReferenceDeck::new(),
            last_dealer: None,
            round: None,
        }
    }

    /// Shuffles a fresh deck, deals it and moves the dealer one seat clockwise.
    /// The first round is dealt by seat 0.
    pub fn reset(&mut self) -> RoundSnapshot {
        let dealer = self.last_dealer.map_or(Seat::South, Seat::next);
        self.last_dealer = Some(dealer);
        let deck = Deck::shuffled(&mut self.rng);
        let round = RoundState::deal(deck, dealer);
        let snapshot = RoundSnapshot::capture(&round);
        self.round = Some(round);
        snapshot
    }

    /// Applies `action` for whichever seat is currently acting.
    pub fn step(&mut self, action: usize) -> Result<StepOutcome, PapayooError> {
        let seat = self.round()?.acting_seat();
        self.step_as(seat, action)
    }

    /// Applies `action` on behalf of `seat`, rejecting it if `seat` is not acting.
    pub fn step_as(&mut self, seat: Seat, action: usize) -> Result<StepOutcome, PapayooError> {
        let card = self.action_to_card(action)?;
        let round = self.round.as_mut().ok_or(PapayooError::RoundNotStarted)?;
        let outcome = round.apply(seat, card, &mut self.rng)?;

        let (rewards, done) = match outcome {
            ActionOutcome::Play(PlayOutcome::RoundComplete { result, .. }) => (result.rewards, true),
            _ => ([0.0; 4], false),
        };
        Ok(StepOutcome {
            state: RoundSnapshot::capture(round),
            rewards,
            done,
        })
    }

    /// Indices the acting seat may submit, in ascending order.
    pub fn legal_actions(&self) -> Vec<usize> {
        let Some(round) = self.round.as_ref() else {
            return Vec::new();
        };
        let mut actions: Vec<usize> = round
            .legal_cards(round.acting_seat())
            .into_iter()
            .filter_map(|card| self.reference.index_of(card))
            .collect();
        actions.sort_unstable();
        actions
    }

    pub fn legal_action_mask(&self) -> [bool; DECK_SIZE] {
        let mut mask = [false; DECK_SIZE];
        for action in self.legal_actions() {
            mask[action] = true;
        }
        mask
    }

    pub fn action_to_card(&self, action: usize) -> Result<Card, PapayooError> {
        self.reference
            .card(action)
            .ok_or(PapayooError::InvalidAction(action))
    }

    pub fn card_to_action(&self, card: Card) -> usize {
        self.reference
            .index_of(card)
            .expect("every valid card is in the reference deck")
    }

    pub fn reference_deck(&self) -> &ReferenceDeck {
        &self.reference
    }

    pub fn round(&self) -> Result<&RoundState, PapayooError> {
        self.round.as_ref().ok_or(PapayooError::RoundNotStarted)
    }

    pub fn snapshot(&self) -> Result<RoundSnapshot, PapayooError> {
        self.round().map(RoundSnapshot::capture)
    }
}
