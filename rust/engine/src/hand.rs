use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, Hand, Rank, RANK_COUNT};

/// Occurrences of each rank within a single hand, indexed by rank.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankCount([u8; RANK_COUNT]);

impl RankCount {
    /// Tallies every card of `hand`.
    ///
    /// ```
    /// use revolution_engine::cards::{Hand, Rank};
    /// use revolution_engine::hand::RankCount;
    ///
    /// let mut hand: Hand = [Rank::MIN; 13];
    /// hand[12] = Rank::MAX;
    /// let counts = RankCount::from_hand(&hand);
    /// assert_eq!(counts.get(Rank::MIN), 12);
    /// assert_eq!(counts.get(Rank::MAX), 1);
    /// ```
    pub fn from_hand(hand: &Hand) -> Self {
        // A hand holds 13 cards, so no count can exceed u8.
        let mut counts = [0u8; RANK_COUNT];
        for card in hand {
            counts[card.index()] += 1;
        }
        Self(counts)
    }

    pub fn get(&self, rank: Rank) -> u8 {
        self.0[rank.index()]
    }

    /// First rank (lowest index) held at least `threshold` times.
    pub fn rank_reaching(&self, threshold: u8) -> Option<Rank> {
        all_ranks().into_iter().find(|&r| self.get(r) >= threshold)
    }

    /// `(rank, count)` pairs for ranks actually present in the hand.
    pub fn present(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        all_ranks()
            .into_iter()
            .map(|r| (r, self.get(r)))
            .filter(|&(_, c)| c > 0)
    }
}

pub fn count_hands(hands: &[Hand]) -> Vec<RankCount> {
    hands.iter().map(RankCount::from_hand).collect()
}
