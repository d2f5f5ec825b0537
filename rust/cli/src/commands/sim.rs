//! Simulation command handler.
//!
//! Runs the configured number of games, printing a progress line at every
//! report point and a summary block (or JSON object) at the end.
//!
//! # Environment Variables
//!
//! - `REVOLUTION_SIM_BREAK_AFTER`: stop after N games (for testing); the
//!   command then reports `Interrupted: N/<games>` and fails with
//!   [`CliError::Interrupted`].

use super::resolve_config;
use crate::cli::TableArgs;
use crate::error::CliError;
use crate::formatters;
use crate::ui;
use revolution_engine::engine::Simulation;
use std::io::Write;

pub const BREAK_AFTER_ENV: &str = "REVOLUTION_SIM_BREAK_AFTER";

/// Flags of the `sim` command.
#[derive(Debug, Clone, Default)]
pub struct SimOptions {
    pub table: TableArgs,
    pub games: Option<u64>,
    pub report_every: Option<u64>,
    pub json: bool,
}

/// Handle the sim command.
///
/// # Errors
///
/// - `CliError::Config` for an invalid table or configuration source
/// - `CliError::Interrupted` when stopped early by `REVOLUTION_SIM_BREAK_AFTER`
/// - `CliError::Io` on write failure
pub fn handle_sim_command(
    opts: &SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = resolve_config(&opts.table)?;
    if let Some(games) = opts.games {
        cfg.games = games;
    }
    if let Some(report_every) = opts.report_every {
        cfg.report_every = report_every;
    }
    let mut sim_config = cfg.to_sim_config()?;
    if opts.json {
        sim_config = sim_config.with_report_every(0);
    }

    if !sim_config.revolution_possible() {
        tracing::warn!(
            players = sim_config.players(),
            threshold = sim_config.threshold(),
            "threshold exceeds copies per rank"
        );
        ui::display_warning(
            err,
            &format!(
                "only {} copies of each rank exist; a revolution of {} is impossible",
                sim_config.players(),
                sim_config.threshold()
            ),
        )?;
    }

    let break_after = std::env::var(BREAK_AFTER_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok());

    let mut sim = Simulation::new(sim_config, cfg.seed);
    let mut progress_write = Ok(());
    let summary = sim.run_until(break_after.unwrap_or(u64::MAX), |p| {
        if progress_write.is_ok() {
            progress_write = writeln!(out, "{}", formatters::format_progress(p));
        }
    });
    progress_write?;

    if !sim.is_done() {
        let msg = format!("{}/{}", summary.games, summary.requested_games);
        writeln!(out, "Interrupted: {}", msg)?;
        return Err(CliError::Interrupted(msg));
    }

    if opts.json {
        writeln!(out, "{}", formatters::summary_json(&summary)?)?;
    } else {
        writeln!(out)?;
        write!(out, "{}", formatters::format_summary(&summary))?;
    }
    Ok(())
}
