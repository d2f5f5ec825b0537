//! Deal command handler: plays one game and shows every hand.
//!
//! Useful for eyeballing the round-robin deal and the rank counts behind a
//! revolution verdict. With `--seed` the output is reproducible.

use super::resolve_config;
use crate::cli::TableArgs;
use crate::error::CliError;
use crate::formatters::{format_counts, format_hand, format_revolution};
use revolution_engine::engine::Simulation;
use std::io::Write;

pub fn handle_deal_command(
    table: &TableArgs,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = resolve_config(table)?;
    let sim_config = cfg.to_sim_config()?;

    let mut sim = Simulation::new(sim_config, cfg.seed);
    let outcome = sim.play_game();

    writeln!(out, "Seed: {}", sim.seed())?;
    for (seat, (hand, counts)) in outcome.hands.iter().zip(&outcome.counts).enumerate() {
        writeln!(out, "Player {}: {}", seat + 1, format_hand(hand))?;
        writeln!(out, "  counts: {}", format_counts(counts))?;
    }
    writeln!(
        out,
        "{}",
        format_revolution(outcome.revolution.as_ref(), sim_config.threshold())
    )?;
    Ok(())
}
