//! Shared helpers for the CLI integration tests.
//!
//! Every test that calls [`run_cli`] starts with [`clear_env`] so a
//! `REVOLUTION_*` variable left in the developer's shell (or by another test)
//! cannot leak into the resolved configuration.

use revolution_cli::{BREAK_AFTER_ENV, run};

#[allow(dead_code)]
pub const VARS: &[&str] = &[
    "REVOLUTION_CONFIG",
    "REVOLUTION_PLAYERS",
    "REVOLUTION_THRESHOLD",
    "REVOLUTION_GAMES",
    "REVOLUTION_REPORT_EVERY",
    "REVOLUTION_SEED",
    BREAK_AFTER_ENV,
];

#[allow(dead_code)]
pub fn clear_env() {
    for key in VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

#[allow(dead_code)]
pub fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

/// Runs the CLI in-process; returns `(exit code, stdout, stderr)`.
#[allow(dead_code)]
pub fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["revolution"];
    argv.extend_from_slice(args);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}
