//! Command handler modules for the `revolution` CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`. Output
//! streams are passed in as `&mut dyn Write` so handlers run against
//! in-memory buffers in tests.

mod cfg;
mod deal;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use sim::{BREAK_AFTER_ENV, SimOptions, handle_sim_command};

use crate::cli::TableArgs;
use crate::config::{self, Config};
use crate::error::CliError;

/// Loads layered configuration and applies the table flags on top.
///
/// The result is unvalidated; callers check it with
/// [`Config::to_sim_config`] after applying their own flags.
fn resolve_config(table: &TableArgs) -> Result<Config, CliError> {
    let mut cfg = config::resolve_with_sources()?.config;
    if let Some(players) = table.players {
        cfg.players = players;
    }
    if let Some(threshold) = table.threshold {
        cfg.threshold = threshold;
    }
    if let Some(seed) = table.seed {
        cfg.seed = Some(seed);
    }
    Ok(cfg)
}
