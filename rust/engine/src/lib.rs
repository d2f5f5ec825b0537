//! # revolution-engine: Revolution Probability Simulator Core
//!
//! Monte Carlo estimate of how often a "revolution" happens when a pack is
//! dealt: some player ends up holding at least `threshold` cards of one rank.
//! Only ranks are modeled; each of the 13 ranks appears once per player.
//!
//! ## Core Modules
//!
//! - [`cards`] - Rank and hand representation
//! - [`deck`] - Pack construction, in-place shuffling and round-robin dealing
//! - [`hand`] - Per-hand rank counting
//! - [`rules`] - Revolution detection
//! - [`game`] - Validated run configuration
//! - [`engine`] - The simulation loop and running statistics
//! - [`errors`] - Error types for configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use revolution_engine::engine::Simulation;
//! use revolution_engine::game::SimConfig;
//!
//! let config = SimConfig::new(8, 5, 1_000).unwrap();
//! let mut sim = Simulation::new(config, Some(42));
//! let summary = sim.run(|progress| {
//!     println!("Game: {} chance: {:?}", progress.game, progress.chance());
//! });
//! assert_eq!(summary.games, 1_000);
//! ```
//!
//! ## Deterministic Runs
//!
//! The same seed reproduces every shuffle, hand and result:
//!
//! ```rust
//! use revolution_engine::engine::Simulation;
//! use revolution_engine::game::SimConfig;
//!
//! let config = SimConfig::new(4, 2, 10).unwrap();
//! let mut a = Simulation::new(config, Some(9));
//! let mut b = Simulation::new(config, Some(9));
//! assert_eq!(a.play_game(), b.play_game());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod rules;
