use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{all_ranks, Hand, Rank, RANK_COUNT};

/// The full pack for one run: every rank present once per player.
///
/// Built once and permuted in place before every game, so the multiset never
/// changes, only the order.
#[derive(Debug, Clone)]
pub struct Pack {
    cards: Vec<Rank>,
    players: usize,
}

impl Pack {
    /// Sorted pack of `13 * players` ranks, grouped by rank.
    ///
    /// `players` is expected to be validated by
    /// [`SimConfig::new`](crate::game::SimConfig::new).
    pub fn new(players: usize) -> Self {
        let mut cards = Vec::with_capacity(RANK_COUNT * players);
        for rank in all_ranks() {
            for _ in 0..players {
                cards.push(rank);
            }
        }
        Self { cards, players }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the current order round-robin; see [`deal`].
    pub fn deal(&self) -> Vec<Hand> {
        deal(&self.cards, self.players)
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    pub fn players(&self) -> usize {
        self.players
    }
}

/// Distributes `pack` among `players` the way cards are dealt at a table:
/// the card at position `i` goes to player `i % players`.
///
/// `pack` must hold exactly `13 * players` cards, which [`Pack::new`]
/// guarantees.
///
/// ```
/// use revolution_engine::deck::{deal, Pack};
///
/// let pack = Pack::new(2);
/// let hands = deal(pack.cards(), 2);
/// assert_eq!(hands.len(), 2);
/// assert_eq!(hands[0][0], pack.cards()[0]);
/// assert_eq!(hands[1][0], pack.cards()[1]);
/// ```
pub fn deal(pack: &[Rank], players: usize) -> Vec<Hand> {
    debug_assert_eq!(pack.len(), RANK_COUNT * players);
    (0..players)
        .map(|player| std::array::from_fn(|round| pack[players * round + player]))
        .collect()
}
