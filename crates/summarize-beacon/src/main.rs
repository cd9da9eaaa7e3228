//! summarize-beacon - CLI entry point

use beacon_common::error::EXIT_RUNTIME_FAILURE;
use beacon_common::{logging, BeaconConfig};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = BeaconConfig::default();

    let code = match summarize_beacon::run(&args, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_RUNTIME_FAILURE
        }
    };
    std::process::exit(code);
}
