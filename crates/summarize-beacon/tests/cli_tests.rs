//! CLI integration tests for summarize-beacon
//!
//! Only paths that fail or finish before the first network request are
//! exercised here:
//! - summarize-beacon --help            usage, exit 0
//! - wrong argument shapes              usage, exit 2
//! - bad relative time                  diagnosis + usage, exit 1
//! - inverted or pre-beacon ranges      diagnosis, exit 1

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_summarize-beacon"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run summarize-beacon")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ============================================================================
// Help and argument shape
// ============================================================================

#[test]
fn test_help_exits_zero() {
    let output = run(&["--help"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(text.contains("Usage:"), "stdout: {}", text);
    assert!(text.contains("--from"));
    assert!(text.contains("relative time"));
    assert!(!text.contains("Wrong input parameters"));
}

#[test]
fn test_unknown_single_arg_exits_two() {
    let output = run(&["--version"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(text.contains("Wrong input parameters, please see help and try again."));
    assert!(text.contains("Usage:"));
}

#[test]
fn test_three_args_exits_two() {
    let output = run(&["--from", "2 days ago", "--to"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_misspelled_from_exits_two() {
    let output = run(&["--fro", "2 days ago", "--to", "1 day ago"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("Wrong input parameters"));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_swapped_options_exit_two() {
    let output = run(&["--to", "1 day ago", "--from", "2 days ago"]);
    assert_eq!(output.status.code(), Some(2));
}

// ============================================================================
// Time phrases and range validation
// ============================================================================

#[test]
fn test_bad_relative_time_exits_one_with_usage() {
    let output = run(&["--from", "next tuesday", "--to", "1 day ago"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("Bad related time received, please see help and try again."));
    assert!(text.contains("Usage:"));
}

#[test]
fn test_now_without_unit_exits_one() {
    let output = run(&["--from", "now", "--to", "now"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("Bad related time received"));
    assert!(!text.contains("Requested records"));
}

#[test]
fn test_missing_ago_exits_one() {
    let output = run(&["--from", "2 days", "--to", "1 day ago"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Bad related time"));
}

#[test]
fn test_inverted_range_exits_one() {
    let output = run(&["--from", "1 day ago", "--to", "2 days ago"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("Relative time in --from should predate relative time in --to"));
    assert!(!text.contains("Requested records"));
}

#[test]
fn test_pre_beacon_range_exits_one() {
    let output = run(&["--from", "40 years ago", "--to", "1 day ago"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("shouldn't predate beacon start at 09/05/2013 3:39 pm"));
    assert!(!text.contains("Result (hexadecimal character"));
}
