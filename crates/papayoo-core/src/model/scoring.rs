use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::suit::Suit;

/// Reward for each finishing tier, best (lowest score) first.
pub const TIER_REWARDS: [f64; 4] = [1.0, 0.5, -0.5, -1.0];

/// Sum of the cards' point values: 40 for the seven of trump, rank for payoo cards.
pub fn trick_points(cards: impl IntoIterator<Item = Card>, trump: Option<Suit>) -> u32 {
    cards.into_iter().map(|card| card.point_value(trump)).sum()
}

/// Points available in a whole deal for a given trump suit.
pub fn deal_total(trump: Option<Suit>) -> u32 {
    trick_points(Deck::standard().iter().copied(), trump)
}

/// Ranks the final round scores (lower is better) into reward tiers.
///
/// Tiers are positions in the ascending score list. A seat occupies every
/// position its score appears at, and each position's reward is split evenly
/// among its occupants, so tied seats average the tiers they span and the
/// rewards always sum to zero.
pub fn ranking_rewards(scores: [u32; 4]) -> [f64; 4] {
    let mut sorted = scores;
    sorted.sort_unstable();

    let mut tiers: [Vec<usize>; 4] = Default::default();
    for (seat, score) in scores.iter().enumerate() {
        for (tier, ranked) in sorted.iter().enumerate() {
            if ranked == score {
                tiers[tier].push(seat);
            }
        }
    }

    let mut rewards = [0.0; 4];
    for (tier, seats) in tiers.iter().enumerate() {
        for &seat in seats {
            rewards[seat] += TIER_REWARDS[tier] / seats.len() as f64;
        }
    }
    rewards
}

#[cfg(test)]
mod tests {
    use super::{deal_total, ranking_rewards, trick_points};
    use crate::model::card::Card;
    use crate::model::suit::Suit;

    fn cards(texts: &[&str]) -> Vec<Card> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn trick_without_points_scores_zero() {
        assert_eq!(trick_points(cards(&["1c", "9h", "10d", "7s"]), Some(Suit::Hearts)), 0);
    }

    #[test]
    fn payoo_and_trump_seven_add_up() {
        let trick = cards(&["7d", "12p", "3p", "7c"]);
        assert_eq!(trick_points(trick, Some(Suit::Diamonds)), 55);
    }

    #[test]
    fn deal_total_is_payoo_sum_plus_forty() {
        assert_eq!(deal_total(Some(Suit::Clubs)), 210 + 40);
        assert_eq!(deal_total(None), 210);
    }

    #[test]
    fn distinct_scores_give_fixed_rewards() {
        let rewards = ranking_rewards([30, 0, 120, 100]);
        assert_eq!(rewards, [0.5, 1.0, -1.0, -0.5]);
        assert_eq!(rewards.iter().sum::<f64>(), 0.0);
    }

    #[test]
    fn tied_leaders_split_first_tier() {
        let rewards = ranking_rewards([10, 10, 50, 80]);
        assert_eq!(rewards, [0.75, 0.75, -0.5, -1.0]);
    }

    #[test]
    fn tie_for_last_averages_bottom_tiers() {
        let rewards = ranking_rewards([0, 20, 90, 90]);
        assert_eq!(rewards, [1.0, 0.5, -0.75, -0.75]);
    }

    #[test]
    fn four_way_tie_is_shared() {
        assert_eq!(ranking_rewards([60, 60, 60, 60]), [0.0; 4]);
    }
}
