use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::cards::Hand;
use crate::deck::Pack;
use crate::game::SimConfig;
use crate::hand::{count_hands, RankCount};
use crate::rules::{find_revolution, Revolution};

/// Ratio of revolutions to games, `None` while no game has been played.
pub fn running_ratio(revolutions: u64, games: u64) -> Option<f64> {
    if games == 0 {
        None
    } else {
        Some(revolutions as f64 / games as f64)
    }
}

/// Seed derived from the wall clock in nanoseconds, for runs without an
/// explicit seed.
pub fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}

/// Revolutions observed across the games played so far.
///
/// Starts at zero; only [`RunningTally::record`] changes it.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct RunningTally {
    revolutions: u64,
    games: u64,
}

impl RunningTally {
    pub fn record(&mut self, revolution: bool) {
        self.games += 1;
        if revolution {
            self.revolutions += 1;
        }
    }

    pub fn revolutions(&self) -> u64 {
        self.revolutions
    }

    pub fn games(&self) -> u64 {
        self.games
    }

    pub fn chance(&self) -> Option<f64> {
        running_ratio(self.revolutions, self.games)
    }
}

/// Everything produced by one game: the hands, their rank counts and the
/// first revolution found, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub hands: Vec<Hand>,
    pub counts: Vec<RankCount>,
    pub revolution: Option<Revolution>,
}

impl GameOutcome {
    pub fn is_revolution(&self) -> bool {
        self.revolution.is_some()
    }
}

/// Running observation taken after a game completes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Progress {
    /// Zero-based index of the game just played
    pub game: u64,
    /// Revolutions observed up to and including this game
    pub revolutions: u64,
    /// Games played up to and including this game
    pub games_played: u64,
}

impl Progress {
    pub fn chance(&self) -> Option<f64> {
        running_ratio(self.revolutions, self.games_played)
    }
}

/// Final figures of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub players: usize,
    pub threshold: u8,
    pub revolutions: u64,
    /// Games actually played
    pub games: u64,
    /// Games the configuration asked for; larger than `games` after an early stop
    pub requested_games: u64,
    pub probability: Option<f64>,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SimState {
    Idle,
    Running { next_game: u64 },
    Done,
}

/// Drives the per-game pipeline (shuffle, deal, count, detect) and
/// accumulates the results.
///
/// One ChaCha20 stream is seeded at construction and advanced across all
/// games; the pack is built once and reshuffled in place.
///
/// # Examples
///
/// ```
/// use revolution_engine::engine::Simulation;
/// use revolution_engine::game::SimConfig;
///
/// let config = SimConfig::new(4, 3, 500).unwrap().with_report_every(100);
/// let mut sim = Simulation::new(config, Some(7));
///
/// let mut observed = Vec::new();
/// let summary = sim.run(|p| observed.push(p.game));
///
/// assert_eq!(observed, vec![0, 100, 200, 300, 400]);
/// assert_eq!(summary.games, 500);
/// assert!(summary.revolutions <= 500);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    seed: u64,
    rng: ChaCha20Rng,
    pack: Pack,
    tally: RunningTally,
    state: SimState,
}

impl Simulation {
    pub fn new(config: SimConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(clock_seed);
        tracing::debug!(seed, players = config.players(), "seeding simulation");
        Self {
            config,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            pack: Pack::new(config.players()),
            tally: RunningTally::default(),
            state: SimState::Idle,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn state(&self) -> SimState {
        self.state
    }
    pub fn tally(&self) -> &RunningTally {
        &self.tally
    }
    pub fn pack(&self) -> &Pack {
        &self.pack
    }

    pub fn is_done(&self) -> bool {
        self.state == SimState::Done
    }

    /// Shuffles, deals, counts and checks one game.
    ///
    /// Advances the random stream but leaves the tally and state alone.
    pub fn play_game(&mut self) -> GameOutcome {
        self.pack.shuffle(&mut self.rng);
        let hands = self.pack.deal();
        let counts = count_hands(&hands);
        let revolution = find_revolution(&counts, self.config.threshold());
        GameOutcome {
            hands,
            counts,
            revolution,
        }
    }

    /// Plays the next game and records it. Returns `None` once every
    /// configured game has been played.
    pub fn step(&mut self) -> Option<Progress> {
        let game = match self.state {
            SimState::Idle => {
                tracing::info!(
                    players = self.config.players(),
                    threshold = self.config.threshold(),
                    games = self.config.games(),
                    "simulation started"
                );
                0
            }
            SimState::Running { next_game } => next_game,
            SimState::Done => return None,
        };

        let outcome = self.play_game();
        if let Some(rev) = outcome.revolution {
            tracing::trace!(game, player = rev.player, rank = %rev.rank, count = rev.count, "revolution");
        }
        self.tally.record(outcome.is_revolution());

        let next_game = game + 1;
        self.state = if next_game >= self.config.games() {
            tracing::info!(
                revolutions = self.tally.revolutions(),
                games = self.tally.games(),
                "simulation finished"
            );
            SimState::Done
        } else {
            SimState::Running { next_game }
        };

        Some(Progress {
            game,
            revolutions: self.tally.revolutions(),
            games_played: self.tally.games(),
        })
    }

    /// Runs every remaining game, calling `on_progress` at each report point.
    pub fn run<F>(&mut self, on_progress: F) -> Summary
    where
        F: FnMut(&Progress),
    {
        self.run_until(u64::MAX, on_progress)
    }

    /// Like [`Simulation::run`] but plays at most `limit` games in this call.
    pub fn run_until<F>(&mut self, limit: u64, mut on_progress: F) -> Summary
    where
        F: FnMut(&Progress),
    {
        let mut played = 0u64;
        while played < limit {
            let Some(progress) = self.step() else {
                break;
            };
            played += 1;
            if self.config.is_report_point(progress.game) {
                on_progress(&progress);
            }
        }
        self.summary()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            players: self.config.players(),
            threshold: self.config.threshold(),
            revolutions: self.tally.revolutions(),
            games: self.tally.games(),
            requested_games: self.config.games(),
            probability: self.tally.chance(),
            seed: self.seed,
        }
    }
}
