use crate::error::PapayooError;
use crate::model::card::Card;
use crate::model::deck::{DECK_SIZE, Deck};
use crate::model::hand::FULL_HAND;
use crate::model::passing::PassingState;
use crate::model::player::{Player, Seat};
use crate::model::scoring;
use crate::model::suit::{Suit, TrumpDisplay};
use crate::model::trick::Trick;
use core::fmt;
use rand::Rng;
use serde::Serialize;
use std::array;
use tracing::{Level, debug, event};

/// Tricks in a round: every seat plays out its full hand.
pub const TRICKS_PER_ROUND: usize = FULL_HAND;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Passing,
    Playing,
    RoundOver,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PhaseKind::Passing => "passing",
            PhaseKind::Playing => "playing",
            PhaseKind::RoundOver => "round over",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct PlayState {
    trump: Suit,
    trick: Trick,
    tricks_completed: usize,
}

impl PlayState {
    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    pub fn tricks_completed(&self) -> usize {
        self.tricks_completed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub trump: Suit,
    pub scores: [u32; 4],
    pub rewards: [f64; 4],
}

#[derive(Debug, Clone)]
pub enum RoundPhase {
    Passing(PassingState),
    Playing(PlayState),
    RoundOver(RoundResult),
}

impl RoundPhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            RoundPhase::Passing(_) => PhaseKind::Passing,
            RoundPhase::Playing(_) => PhaseKind::Playing,
            RoundPhase::RoundOver(_) => PhaseKind::RoundOver,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    Passed,
    PassingComplete { trump: Suit },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayOutcome {
    Played,
    TrickCompleted { winner: Seat, points: u32 },
    RoundComplete { winner: Seat, points: u32, result: RoundResult },
}

/// Outcome of a single card decision in whichever phase the round is in.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Pass(PassOutcome),
    Play(PlayOutcome),
}

#[derive(Debug, Clone)]
pub struct RoundState {
    players: [Player; 4],
    dealer: Seat,
    acting: Seat,
    played: Vec<Card>,
    phase: RoundPhase,
}

impl RoundState {
    /// Deals the whole deck round-robin from seat 0 and opens the passing phase.
    pub fn deal(mut deck: Deck, dealer: Seat) -> Self {
        assert_eq!(deck.len(), DECK_SIZE, "dealing requires a full deck");
        let mut players: [Player; 4] = array::from_fn(|index| Player::new(Seat::LOOP[index]));

        for index in 0..DECK_SIZE {
            let card = deck.deal_one().expect("full deck cannot run out while dealing");
            let seat = Seat::LOOP[index % Seat::LOOP.len()];
            players[seat.index()].add_card(card);
        }

        debug!(%dealer, "dealt new round");

        Self {
            players,
            dealer,
            acting: dealer,
            played: Vec::with_capacity(DECK_SIZE),
            phase: RoundPhase::Passing(PassingState::new()),
        }
    }

    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn acting_seat(&self) -> Seat {
        self.acting
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 4] {
        &self.players
    }

    pub fn scores(&self) -> [u32; 4] {
        array::from_fn(|index| self.players[index].score())
    }

    /// The papayoo suit, `None` until passing ends.
    pub fn trump(&self) -> Option<Suit> {
        match &self.phase {
            RoundPhase::Passing(_) => None,
            RoundPhase::Playing(play) => Some(play.trump),
            RoundPhase::RoundOver(result) => Some(result.trump),
        }
    }

    pub fn current_trick(&self) -> Option<&Trick> {
        match &self.phase {
            RoundPhase::Playing(play) => Some(&play.trick),
            _ => None,
        }
    }

    pub fn tricks_completed(&self) -> usize {
        match &self.phase {
            RoundPhase::Passing(_) => 0,
            RoundPhase::Playing(play) => play.tricks_completed,
            RoundPhase::RoundOver(_) => TRICKS_PER_ROUND,
        }
    }

    pub fn pending_passes(&self) -> Option<&PassingState> {
        match &self.phase {
            RoundPhase::Passing(state) => Some(state),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&RoundResult> {
        match &self.phase {
            RoundPhase::RoundOver(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, RoundPhase::RoundOver(_))
    }

    /// Cards from finished tricks, in the order the tricks were won.
    pub fn played_cards(&self) -> &[Card] {
        &self.played
    }

    pub fn is_card_played(&self, card: Card) -> bool {
        self.played.contains(&card)
    }

    pub fn is_card_in_trick(&self, card: Card) -> bool {
        self.current_trick().is_some_and(|trick| trick.contains(card))
    }

    /// Cards `seat` may submit right now. Empty when it is not that seat's turn.
    pub fn legal_cards(&self, seat: Seat) -> Vec<Card> {
        if seat != self.acting {
            return Vec::new();
        }
        let hand = self.players[seat.index()].hand();
        match &self.phase {
            RoundPhase::Passing(_) => hand.cards().to_vec(),
            RoundPhase::Playing(play) => match play.trick.led_suit() {
                Some(led) if hand.has_suit(led) => {
                    hand.iter().copied().filter(|card| card.suit == led).collect()
                }
                _ => hand.cards().to_vec(),
            },
            RoundPhase::RoundOver(_) => Vec::new(),
        }
    }

    /// Applies one card decision for the acting seat, whatever the phase.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        seat: Seat,
        card: Card,
        rng: &mut R,
    ) -> Result<ActionOutcome, PapayooError> {
        match self.phase_kind() {
            PhaseKind::Passing => self.submit_pass(seat, card, rng).map(ActionOutcome::Pass),
            PhaseKind::Playing => self.play_card(seat, card).map(ActionOutcome::Play),
            PhaseKind::RoundOver => Err(PapayooError::PhaseViolation {
                phase: PhaseKind::RoundOver,
                attempted: "act",
            }),
        }
    }

    /// Moves one card into the seat's pass buffer. The twelfth pass swaps the
    /// buffers clockwise, draws the papayoo suit and starts play.
    pub fn submit_pass<R: Rng + ?Sized>(
        &mut self,
        seat: Seat,
        card: Card,
        rng: &mut R,
    ) -> Result<PassOutcome, PapayooError> {
        let phase = self.phase.kind();
        let RoundPhase::Passing(state) = &mut self.phase else {
            return Err(PapayooError::PhaseViolation {
                phase,
                attempted: "pass a card",
            });
        };
        if seat != self.acting {
            return Err(PapayooError::OutOfTurn {
                expected: self.acting,
                actual: seat,
            });
        }

        state.submit(&mut self.players[seat.index()], card)?;

        if let Some(next) = state.next_passer(seat.next()) {
            self.acting = next;
            return Ok(PassOutcome::Passed);
        }

        let trump = Suit::TRUMP_CANDIDATES[rng.gen_range(0..Suit::TRUMP_CANDIDATES.len())];
        let finished = std::mem::replace(
            &mut self.phase,
            RoundPhase::Playing(PlayState {
                trump,
                trick: Trick::new(),
                tricks_completed: 0,
            }),
        );
        if let RoundPhase::Passing(state) = finished {
            state.apply(&mut self.players);
        }
        self.acting = self.dealer;
        debug!(trump = %TrumpDisplay(Some(trump)), leader = %self.acting, "passing complete");
        Ok(PassOutcome::PassingComplete { trump })
    }

    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, PapayooError> {
        let phase = self.phase.kind();
        let RoundPhase::Playing(play) = &mut self.phase else {
            return Err(PapayooError::PhaseViolation {
                phase,
                attempted: "play a card",
            });
        };
        if seat != self.acting {
            return Err(PapayooError::OutOfTurn {
                expected: self.acting,
                actual: seat,
            });
        }

        let player = &mut self.players[seat.index()];
        if !player.hand().contains(card) {
            return Err(PapayooError::CardNotInHand(card));
        }
        if let Some(led) = play.trick.led_suit() {
            if card.suit != led && player.hand().has_suit(led) {
                return Err(PapayooError::IllegalMove { card, led });
            }
        }

        player.play(card)?;
        play.trick.play(seat, card)?;

        if !play.trick.is_complete() {
            self.acting = seat.next();
            return Ok(PlayOutcome::Played);
        }

        let points = play.trick.points(Some(play.trump));
        let winner = play
            .trick
            .winner()
            .expect("a complete trick always has a winner");
        let cards: Vec<Card> = play.trick.cards().collect();
        debug!(
            trick = play.tricks_completed + 1,
            %winner,
            points,
            table = %cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" "),
            "trick complete"
        );

        self.players[winner.index()].win_trick(&cards, points);
        self.played.extend_from_slice(&cards);
        play.tricks_completed += 1;
        play.trick.reset();
        let completed = play.tricks_completed;
        let trump = play.trump;
        self.acting = winner;

        if completed < TRICKS_PER_ROUND {
            return Ok(PlayOutcome::TrickCompleted { winner, points });
        }

        let scores = self.scores();
        let result = RoundResult {
            trump,
            scores,
            rewards: scoring::ranking_rewards(scores),
        };
        event!(
            Level::INFO,
            trump = %result.trump,
            scores = ?result.scores,
            rewards = ?result.rewards,
            "round complete"
        );
        self.phase = RoundPhase::RoundOver(result.clone());
        Ok(PlayOutcome::RoundComplete {
            winner,
            points,
            result,
        })
    }
}
