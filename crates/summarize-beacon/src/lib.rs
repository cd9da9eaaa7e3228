//! summarize-beacon - hexadecimal character counts over NIST beacon records

pub mod cli;
pub mod commands;

use anyhow::Result;
use beacon_common::error::EXIT_USAGE;
use beacon_common::{BeaconConfig, BeaconError};

use cli::Invocation;

/// Run one invocation and return the process exit code.
///
/// Every diagnosis goes to stdout, matching the rest of the output.
pub fn run(args: &[String], config: &BeaconConfig) -> Result<i32> {
    let outcome = match Invocation::from_args(args) {
        Invocation::Help => {
            println!("{}", cli::usage());
            return Ok(0);
        }
        Invocation::Wrong => {
            println!("\n{}", cli::WRONG_PARAMETERS);
            println!("{}", cli::usage());
            return Ok(EXIT_USAGE);
        }
        Invocation::Latest => commands::latest(config),
        Invocation::Range { from, to } => commands::range(&from, &to, config),
    };

    match outcome {
        Ok(()) => Ok(0),
        Err(err) => match err.downcast_ref::<BeaconError>() {
            Some(beacon_err) => {
                tracing::debug!(error = ?beacon_err, "command failed");
                println!("\n{}", beacon_err);
                if beacon_err.wants_usage() {
                    println!("{}", cli::usage());
                }
                Ok(beacon_err.exit_code())
            }
            None => Err(err),
        },
    }
}
