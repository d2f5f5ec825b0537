mod helpers;

use helpers::{clear_env, run_cli, set_env};
use serde_json::Value;
use serial_test::serial;
use std::fs;

fn cfg_json() -> Value {
    let (code, stdout, _) = run_cli(&["cfg"]);
    assert_eq!(code, 0);
    serde_json::from_str(&stdout).unwrap()
}

#[test]
#[serial]
fn cfg_shows_reference_defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["players"]["value"].as_u64(), Some(8));
    assert_eq!(json["threshold"]["value"].as_u64(), Some(5));
    assert_eq!(json["games"]["value"].as_u64(), Some(10_000_000));
    assert_eq!(json["report_every"]["value"].as_u64(), Some(10_000));
    assert!(json["seed"]["value"].is_null());
    for key in ["players", "threshold", "games", "report_every", "seed"] {
        assert_eq!(json[key]["source"].as_str(), Some("default"), "{}", key);
    }
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("revolution.toml");
    fs::write(&path, "players = 4\nthreshold = 3\nseed = 456\n").unwrap();
    set_env("REVOLUTION_CONFIG", path.to_str().unwrap());

    let json = cfg_json();
    assert_eq!(json["players"]["value"].as_u64(), Some(4));
    assert_eq!(json["players"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json["games"]["source"].as_str(), Some("default"));

    set_env("REVOLUTION_SEED", "789");
    set_env("REVOLUTION_THRESHOLD", "2");
    let json = cfg_json();
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["threshold"]["value"].as_u64(), Some(2));
    assert_eq!(json["threshold"]["source"].as_str(), Some("env"));
    assert_eq!(json["players"]["source"].as_str(), Some("file"));

    clear_env();
}

#[test]
#[serial]
fn flags_override_env() {
    clear_env();
    set_env("REVOLUTION_GAMES", "5");
    set_env("REVOLUTION_REPORT_EVERY", "0");

    let (code, stdout, _) = run_cli(&["sim"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Total games: 5"));

    let (code, stdout, _) = run_cli(&["sim", "--games", "7"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Total games: 7"));

    clear_env();
}

#[test]
#[serial]
fn invalid_env_value_fails_fast() {
    clear_env();
    set_env("REVOLUTION_PLAYERS", "many");
    let (code, stdout, stderr) = run_cli(&["sim", "--games", "10"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(stdout.is_empty(), "no game may run on a bad configuration");
    assert!(stderr.contains("Invalid players"));
}

#[test]
#[serial]
fn invalid_threshold_in_file_fails_fast() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "threshold = 20\n").unwrap();
    set_env("REVOLUTION_CONFIG", path.to_str().unwrap());

    let (code, _, stderr) = run_cli(&["cfg"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("threshold 20 must be between 1 and 13"));
}

#[test]
#[serial]
fn unreadable_config_file_is_reported() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    set_env(
        "REVOLUTION_CONFIG",
        dir.path().join("missing.toml").to_str().unwrap(),
    );
    let (code, _, stderr) = run_cli(&["cfg"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("cannot read config file"));
}

#[test]
#[serial]
fn valid_flag_replaces_invalid_env_value() {
    clear_env();
    set_env("REVOLUTION_THRESHOLD", "14");

    let (code, stdout, stderr) = run_cli(&[
        "sim", "--threshold", "5", "--games", "3", "--report-every", "0",
    ]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Number of identical cards for a revolution: 5"));
    assert!(stdout.contains("Total games: 3"));

    let (code, _, stderr) = run_cli(&["sim", "--games", "3"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(stderr.contains("threshold 14 must be between 1 and 13"));
}
