//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "revolution",
    version,
    about = "Monte Carlo estimate of the chance of a revolution when dealing cards"
)]
pub struct RevolutionCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Table parameters shared by `sim` and `deal`. Unset flags fall back to the
/// resolved configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Number of players at the table
    #[arg(long)]
    pub players: Option<usize>,
    /// Identical ranks in one hand needed for a revolution (1-13)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=13))]
    pub threshold: Option<u32>,
    /// RNG seed; defaults to the wall clock
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the simulation and report the revolution probability
    Sim {
        #[command(flatten)]
        table: TableArgs,
        /// Number of games to simulate
        #[arg(long)]
        games: Option<u64>,
        /// Print a progress line every N games (0 disables)
        #[arg(long)]
        report_every: Option<u64>,
        /// Print the final summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Deal a single game and show every hand
    Deal {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
