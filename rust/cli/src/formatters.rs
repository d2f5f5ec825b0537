//! Text and JSON rendering of simulation output.
//!
//! Pure functions: they build strings and leave writing to the command
//! handlers.
//!
//! ```rust
//! use revolution_engine::engine::Progress;
//! use revolution_cli::formatters::format_progress;
//!
//! let p = Progress { game: 0, revolutions: 0, games_played: 1 };
//! assert_eq!(format_progress(&p), "Game: 0 temporary chance: 0.000000");
//! ```

use chrono::{SecondsFormat, Utc};
use revolution_engine::cards::Hand;
use revolution_engine::engine::{Progress, Summary};
use revolution_engine::hand::RankCount;
use revolution_engine::rules::Revolution;
use serde::Serialize;

/// Ratio with six decimals, or `undefined` when no game backs it.
pub fn format_chance(chance: Option<f64>) -> String {
    match chance {
        Some(c) => format!("{:.6}", c),
        None => "undefined".to_string(),
    }
}

pub fn format_progress(progress: &Progress) -> String {
    format!(
        "Game: {} temporary chance: {}",
        progress.game,
        format_chance(progress.chance())
    )
}

/// Final text block: table parameters followed by the results.
pub fn format_summary(summary: &Summary) -> String {
    let mut s = String::new();
    s.push_str(&format!("Number of players: {}\n", summary.players));
    s.push_str(&format!(
        "Number of identical cards for a revolution: {}\n",
        summary.threshold
    ));
    s.push_str("\nResults:\n\n");
    s.push_str(&format!(
        "Revolutions: {} ({})\n",
        summary.revolutions,
        format_chance(summary.probability)
    ));
    s.push_str(&format!("Total games: {}\n", summary.games));
    s
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    #[serde(flatten)]
    summary: &'a Summary,
    finished_at: String,
}

/// Summary as a single JSON object, stamped with the current UTC time.
pub fn summary_json(summary: &Summary) -> serde_json::Result<String> {
    let report = SummaryReport {
        summary,
        finished_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    serde_json::to_string(&report)
}

/// Hand in dealt order, e.g. `[0 5 5 12 ...]`.
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.iter().map(|r| r.to_string()).collect();
    format!("[{}]", cards.join(" "))
}

/// Present ranks as `rank x count`, lowest rank first.
pub fn format_counts(counts: &RankCount) -> String {
    counts
        .present()
        .map(|(rank, n)| format!("{}x{}", rank, n))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_revolution(revolution: Option<&Revolution>, threshold: u8) -> String {
    match revolution {
        Some(rev) => format!(
            "Revolution: player {} holds {} cards of rank {}",
            rev.player + 1,
            rev.count,
            rev.rank
        ),
        None => format!("No revolution (threshold {})", threshold),
    }
}
