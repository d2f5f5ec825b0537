use crate::cards::HAND_SIZE;
use crate::errors::ConfigError;

pub const DEFAULT_PLAYERS: usize = 8;
pub const DEFAULT_THRESHOLD: u8 = 5;
pub const DEFAULT_GAMES: u64 = 10_000_000;
pub const DEFAULT_REPORT_EVERY: u64 = 10_000;

/// Largest table accepted. The pack holds `13 * players` cards, so this keeps
/// it at a few megabytes and far from `usize` overflow.
pub const MAX_PLAYERS: usize = 1_000_000;

/// Validated parameters of one simulation run.
///
/// Construct through [`SimConfig::new`] so an impossible threshold or an
/// empty table is rejected before any game is played.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SimConfig {
    /// Players at the table (one hand of 13 cards each)
    players: usize,
    /// Identical ranks in one hand needed for a revolution
    threshold: u8,
    /// Games to simulate
    games: u64,
    /// Progress interval in games; 0 disables progress observations
    report_every: u64,
}

impl SimConfig {
    /// # Errors
    ///
    /// - [`ConfigError::NoPlayers`] when `players == 0`
    /// - [`ConfigError::TooManyPlayers`] when `players > MAX_PLAYERS`
    /// - [`ConfigError::ThresholdOutOfRange`] unless `1 <= threshold <= 13`
    /// - [`ConfigError::NoGames`] when `games == 0`
    ///
    /// ```
    /// use revolution_engine::errors::ConfigError;
    /// use revolution_engine::game::SimConfig;
    ///
    /// assert!(SimConfig::new(8, 5, 1_000).is_ok());
    /// assert_eq!(
    ///     SimConfig::new(8, 14, 1_000),
    ///     Err(ConfigError::ThresholdOutOfRange { threshold: 14 })
    /// );
    /// ```
    pub fn new(players: usize, threshold: u32, games: u64) -> Result<Self, ConfigError> {
        if players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if players > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                players,
                max: MAX_PLAYERS,
            });
        }
        if threshold == 0 || threshold as usize > HAND_SIZE {
            return Err(ConfigError::ThresholdOutOfRange { threshold });
        }
        if games == 0 {
            return Err(ConfigError::NoGames);
        }
        Ok(Self {
            players,
            threshold: threshold as u8,
            games,
            report_every: DEFAULT_REPORT_EVERY,
        })
    }

    pub fn with_report_every(mut self, report_every: u64) -> Self {
        self.report_every = report_every;
        self
    }

    pub fn players(&self) -> usize {
        self.players
    }
    pub fn threshold(&self) -> u8 {
        self.threshold
    }
    pub fn games(&self) -> u64 {
        self.games
    }
    pub fn report_every(&self) -> u64 {
        self.report_every
    }

    /// Each rank appears once per player, so fewer players than the threshold
    /// can never produce a revolution. Such a run is valid, just always false.
    pub fn revolution_possible(&self) -> bool {
        self.players >= self.threshold as usize
    }

    pub fn is_report_point(&self, game: u64) -> bool {
        self.report_every != 0 && game % self.report_every == 0
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            threshold: DEFAULT_THRESHOLD,
            games: DEFAULT_GAMES,
            report_every: DEFAULT_REPORT_EVERY,
        }
    }
}
