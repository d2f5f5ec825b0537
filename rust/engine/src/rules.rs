use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::hand::RankCount;

/// A hand holding at least `threshold` cards of one rank.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Revolution {
    /// Seat index of the player holding the cards
    pub player: usize,
    /// The repeated rank
    pub rank: Rank,
    /// How many copies of `rank` the player holds
    pub count: u8,
}

/// Finds the first revolution, scanning hands in seat order and ranks from
/// lowest to highest.
///
/// Stops at the first hand with any rank counted `threshold` times or more.
/// The scan order only decides which revolution is reported, never whether
/// one exists.
///
/// # Examples
///
/// ```
/// use revolution_engine::cards::{Hand, Rank};
/// use revolution_engine::hand::RankCount;
/// use revolution_engine::rules::find_revolution;
///
/// let four_of_a_kind: Hand = [0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
///     .map(|v| Rank::new(v).unwrap());
/// let counts = [RankCount::from_hand(&four_of_a_kind)];
///
/// assert!(find_revolution(&counts, 5).is_none());
/// let found = find_revolution(&counts, 4).unwrap();
/// assert_eq!((found.player, found.rank, found.count), (0, Rank::MIN, 4));
/// ```
pub fn find_revolution(counts: &[RankCount], threshold: u8) -> Option<Revolution> {
    counts.iter().enumerate().find_map(|(player, count)| {
        count.rank_reaching(threshold).map(|rank| Revolution {
            player,
            rank,
            count: count.get(rank),
        })
    })
}

pub fn is_revolution(counts: &[RankCount], threshold: u8) -> bool {
    find_revolution(counts, threshold).is_some()
}
