use crate::error::PapayooError;
use crate::model::card::Card;
use crate::model::player::{Player, Seat};
use crate::model::round::PhaseKind;
use std::array;

/// Cards each seat hands to its clockwise neighbour.
pub const PASS_SIZE: usize = 3;

/// Pending pass buffers, one per seat, filled one card at a time.
#[derive(Debug, Clone, Default)]
pub struct PassingState {
    buffers: [Vec<Card>; 4],
}

impl PassingState {
    pub fn new() -> Self {
        Self {
            buffers: array::from_fn(|_| Vec::with_capacity(PASS_SIZE)),
        }
    }

    pub const fn target(seat: Seat) -> Seat {
        seat.next()
    }

    /// Moves `card` from the seat's hand into its pass buffer.
    pub fn submit(&mut self, player: &mut Player, card: Card) -> Result<(), PapayooError> {
        let seat = player.seat();
        if self.is_seat_done(seat) {
            return Err(PapayooError::PhaseViolation {
                phase: PhaseKind::Passing,
                attempted: "pass more than three cards",
            });
        }
        player.play(card)?;
        self.buffers[seat.index()].push(card);
        Ok(())
    }

    pub fn passed_by(&self, seat: Seat) -> &[Card] {
        &self.buffers[seat.index()]
    }

    pub fn is_seat_done(&self, seat: Seat) -> bool {
        self.buffers[seat.index()].len() >= PASS_SIZE
    }

    pub fn total_passed(&self) -> usize {
        self.buffers.iter().map(Vec::len).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.total_passed() == PASS_SIZE * self.buffers.len()
    }

    /// First seat at or after `from`, clockwise, that still owes cards.
    pub fn next_passer(&self, from: Seat) -> Option<Seat> {
        let mut seat = from;
        for _ in 0..Seat::LOOP.len() {
            if !self.is_seat_done(seat) {
                return Some(seat);
            }
            seat = seat.next();
        }
        None
    }

    /// Hands every buffer to the clockwise neighbour.
    pub fn apply(self, players: &mut [Player; 4]) {
        debug_assert!(self.is_complete(), "passes applied before every seat submitted");
        for (index, cards) in self.buffers.into_iter().enumerate() {
            let Some(seat) = Seat::from_index(index) else {
                continue;
            };
            let receiver = &mut players[Self::target(seat).index()];
            for card in cards {
                receiver.add_card(card);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PASS_SIZE, PassingState};
    use crate::error::PapayooError;
    use crate::model::deck::Deck;
    use crate::model::player::{Player, Seat};
    use std::array;

    fn dealt_players(seed: u64) -> [Player; 4] {
        let mut deck = Deck::shuffled_with_seed(seed);
        let mut players: [Player; 4] = array::from_fn(|i| Player::new(Seat::LOOP[i]));
        let mut i = 0;
        while let Ok(card) = deck.deal_one() {
            players[i % 4].add_card(card);
            i += 1;
        }
        players
    }

    #[test]
    fn target_is_clockwise_neighbour() {
        assert_eq!(PassingState::target(Seat::South), Seat::West);
        assert_eq!(PassingState::target(Seat::East), Seat::South);
    }

    #[test]
    fn submit_moves_card_out_of_hand() {
        let mut players = dealt_players(5);
        let mut state = PassingState::new();
        let card = players[0].hand().cards()[0];
        state.submit(&mut players[0], card).unwrap();
        assert!(!players[0].hand().contains(card));
        assert_eq!(state.passed_by(Seat::South), &[card]);
        assert_eq!(state.total_passed(), 1);
    }

    #[test]
    fn cannot_pass_missing_card() {
        let mut players = dealt_players(5);
        let mut state = PassingState::new();
        let foreign = players[1].hand().cards()[0];
        assert_eq!(
            state.submit(&mut players[0], foreign),
            Err(PapayooError::CardNotInHand(foreign))
        );
        assert_eq!(state.total_passed(), 0);
    }

    #[test]
    fn fourth_pass_from_a_seat_is_rejected() {
        let mut players = dealt_players(8);
        let mut state = PassingState::new();
        for _ in 0..PASS_SIZE {
            let card = players[2].hand().cards()[0];
            state.submit(&mut players[2], card).unwrap();
        }
        let extra = players[2].hand().cards()[0];
        assert!(matches!(
            state.submit(&mut players[2], extra),
            Err(PapayooError::PhaseViolation { .. })
        ));
        assert!(players[2].hand().contains(extra));
        assert_eq!(state.next_passer(Seat::North), Some(Seat::East));
    }

    #[test]
    fn apply_rotates_cards_and_restores_hand_sizes() {
        let mut players = dealt_players(13);
        let mut state = PassingState::new();
        for player in players.iter_mut() {
            for _ in 0..PASS_SIZE {
                let card = player.hand().cards()[0];
                state.submit(player, card).unwrap();
            }
        }
        assert!(state.is_complete());
        assert_eq!(state.next_passer(Seat::South), None);

        let from_south = state.passed_by(Seat::South).to_vec();
        state.apply(&mut players);
        for player in &players {
            assert_eq!(player.hand().len(), 15);
            assert!(player.hand().is_sorted());
        }
        assert!(from_south.iter().all(|c| players[Seat::West.index()].hand().contains(*c)));
    }
}
