use crate::model::card::Card;
use crate::model::player::Seat;
use crate::model::round::{PhaseKind, RoundState};
use crate::model::suit::Suit;
use serde::Serialize;

/// Point-in-time view of a round from the acting seat's perspective.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoundSnapshot {
    pub phase: PhaseKind,
    pub dealer: Seat,
    pub acting: Seat,
    pub trump: Option<Suit>,
    pub tricks_completed: usize,
    pub hand: Vec<Card>,
    pub trick: [Option<Card>; 4],
    pub played: Vec<Card>,
    pub collected: Vec<Card>,
    pub scores: [u32; 4],
    pub passed: usize,
}

impl RoundSnapshot {
    pub fn capture(round: &RoundState) -> Self {
        let acting = round.player(round.acting_seat());
        Self {
            phase: round.phase_kind(),
            dealer: round.dealer(),
            acting: acting.seat(),
            trump: round.trump(),
            tricks_completed: round.tricks_completed(),
            hand: acting.hand().cards().to_vec(),
            trick: round.current_trick().map(|t| *t.slots()).unwrap_or_default(),
            played: round.played_cards().to_vec(),
            collected: acting.collected().to_vec(),
            scores: round.scores(),
            passed: round.pending_passes().map_or(0, |p| p.total_passed()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::RoundSnapshot;
    use crate::game::engine::RoundEngine;
    use crate::model::round::PhaseKind;

    #[test]
    fn snapshot_after_reset_shows_passing_state() {
        let mut engine = RoundEngine::with_seed(99);
        let snapshot = engine.reset();
        assert_eq!(snapshot.phase, PhaseKind::Passing);
        assert_eq!(snapshot.hand.len(), 15);
        assert!(snapshot.trick.iter().all(Option::is_none));
        assert!(snapshot.played.is_empty());
        assert_eq!(snapshot.scores, [0; 4]);
        assert_eq!(snapshot.trump, None);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut engine = RoundEngine::with_seed(99);
        let snapshot = engine.reset();
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"phase\": \"passing\""));
        assert!(json.contains("\"trump\": null"));
        assert!(json.contains("\"dealer\": \"South\""));
    }

    #[test]
    fn snapshot_matches_engine_view() {
        let mut engine = RoundEngine::with_seed(5);
        engine.reset();
        let action = engine.legal_actions()[0];
        let outcome = engine.step(action).unwrap();
        assert_eq!(outcome.state, RoundSnapshot::capture(engine.round().unwrap()));
        assert_eq!(outcome.state.passed, 1);
    }
}
