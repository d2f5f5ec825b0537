use revolution_engine::cards::Rank;
use revolution_engine::engine::{SimState, Simulation};
use revolution_engine::game::SimConfig;

#[test]
fn same_seed_reproduces_hands_and_results() {
    let config = SimConfig::new(8, 5, 200).unwrap();
    let mut a = Simulation::new(config, Some(42));
    let mut b = Simulation::new(config, Some(42));
    for _ in 0..25 {
        assert_eq!(a.play_game(), b.play_game());
    }
    assert_eq!(a.run(|_| {}), b.run(|_| {}));
}

#[test]
fn different_seeds_produce_different_deals() {
    let config = SimConfig::new(8, 5, 10).unwrap();
    let mut a = Simulation::new(config, Some(1));
    let mut b = Simulation::new(config, Some(2));
    assert_ne!(
        a.play_game().hands,
        b.play_game().hands,
        "different seeds should produce different deals (high probability)"
    );
}

#[test]
fn consecutive_games_use_an_advancing_stream() {
    let config = SimConfig::new(8, 5, 10).unwrap();
    let mut sim = Simulation::new(config, Some(77));
    let first = sim.play_game();
    let second = sim.play_game();
    assert_ne!(first.hands, second.hands);
}

#[test]
fn tally_is_monotonic_and_bounded() {
    let config = SimConfig::new(4, 2, 2_000).unwrap().with_report_every(1);
    let mut sim = Simulation::new(config, Some(8));

    let mut last = 0;
    let mut observations = 0u64;
    let summary = sim.run(|p| {
        assert!(p.revolutions >= last, "tally decreased at game {}", p.game);
        assert!(p.revolutions <= p.games_played);
        assert_eq!(p.games_played, p.game + 1);
        last = p.revolutions;
        observations += 1;
    });

    assert_eq!(observations, 2_000);
    assert_eq!(summary.revolutions, last);
    assert_eq!(sim.state(), SimState::Done);
}

#[test]
fn outcome_flag_matches_counts() {
    let config = SimConfig::new(8, 4, 300).unwrap();
    let mut sim = Simulation::new(config, Some(123));
    for _ in 0..300 {
        let outcome = sim.play_game();
        let any = outcome
            .counts
            .iter()
            .any(|c| c.present().any(|(_, n)| n >= 4));
        assert_eq!(outcome.is_revolution(), any);
        if let Some(rev) = outcome.revolution {
            assert_eq!(outcome.counts[rev.player].get(rev.rank), rev.count);
        }
    }
}

#[test]
fn full_hand_threshold_never_triggers_below_thirteen_players() {
    for players in [4usize, 8, 12] {
        let config = SimConfig::new(players, 13, 1_000).unwrap();
        let mut sim = Simulation::new(config, Some(players as u64));
        let summary = sim.run(|_| {});
        assert_eq!(summary.revolutions, 0, "{} players", players);
        assert_eq!(summary.probability, Some(0.0));
    }
}

#[test]
fn fewer_players_than_threshold_runs_always_false() {
    let config = SimConfig::new(3, 5, 500).unwrap();
    assert!(!config.revolution_possible());
    let mut sim = Simulation::new(config, Some(4));
    let summary = sim.run(|_| {});
    assert_eq!(summary.games, 500);
    assert_eq!(summary.revolutions, 0);
}

#[test]
fn threshold_one_always_triggers() {
    let config = SimConfig::new(2, 1, 100).unwrap();
    let mut sim = Simulation::new(config, Some(6));
    let summary = sim.run(|_| {});
    assert_eq!(summary.revolutions, 100);
    assert_eq!(summary.probability, Some(1.0));
}

// Two players, two copies of each rank: both copies share a hand with
// probability 2 * C(13, 2) / C(26, 2) = 156 / 325 = 0.48.
#[test]
fn two_player_pairing_matches_closed_form() {
    let games = 20_000;
    let config = SimConfig::new(2, 2, games).unwrap();
    let mut sim = Simulation::new(config, Some(2026));
    let rank = Rank::MIN;

    let mut paired = 0u64;
    let mut revolutions = 0u64;
    for _ in 0..games {
        let outcome = sim.play_game();
        if outcome.counts.iter().any(|c| c.get(rank) == 2) {
            paired += 1;
        }
        if outcome.is_revolution() {
            revolutions += 1;
        }
    }

    let freq = paired as f64 / games as f64;
    assert!((freq - 0.48).abs() < 0.02, "pairing frequency {}", freq);
    // No pair at all requires each hand to hold one of every rank:
    // 2^13 / C(26, 13) ~ 0.0008.
    let rate = revolutions as f64 / games as f64;
    assert!(rate > 0.99, "revolution rate {}", rate);
}

#[test]
fn summary_reports_configuration_and_seed() {
    let config = SimConfig::new(6, 4, 50).unwrap();
    let mut sim = Simulation::new(config, Some(31337));
    let summary = sim.run(|_| {});
    assert_eq!(summary.players, 6);
    assert_eq!(summary.threshold, 4);
    assert_eq!(summary.games, 50);
    assert_eq!(summary.requested_games, 50);
    assert_eq!(summary.seed, 31337);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["players"], 6);
}
