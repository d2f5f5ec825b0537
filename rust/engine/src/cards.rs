use serde::{Deserialize, Serialize};

/// Number of distinct ranks in a pack. Suits are never modeled.
pub const RANK_COUNT: usize = 13;

/// Number of cards dealt to every player.
pub const HAND_SIZE: usize = 13;

/// Represents the face value of a card as an index in `0..=12`.
/// Only the rank matters for revolution detection, so a card is just its rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Lowest rank (index 0).
    pub const MIN: Rank = Rank(0);
    /// Highest rank (index 12).
    pub const MAX: Rank = Rank(RANK_COUNT as u8 - 1);

    /// Builds a rank from its index, rejecting values outside `0..=12`.
    ///
    /// ```
    /// use revolution_engine::cards::Rank;
    ///
    /// assert_eq!(Rank::new(12).map(|r| r.value()), Some(12));
    /// assert!(Rank::new(13).is_none());
    /// ```
    pub fn new(value: u8) -> Option<Rank> {
        if (value as usize) < RANK_COUNT {
            Some(Rank(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {} out of range 0..=12", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The 13 cards one player receives in one game.
pub type Hand = [Rank; HAND_SIZE];

pub fn all_ranks() -> [Rank; RANK_COUNT] {
    std::array::from_fn(|i| Rank(i as u8))
}
