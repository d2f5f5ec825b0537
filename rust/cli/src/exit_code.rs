//! Exit codes returned by [`crate::run`].

/// Run completed.
pub const SUCCESS: i32 = 0;

/// Invalid input, configuration or I/O failure.
pub const ERROR: i32 = 2;

/// Simulation stopped before playing every configured game.
pub const INTERRUPTED: i32 = 130;
