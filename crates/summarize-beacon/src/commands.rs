//! Command handlers

use anyhow::{Context, Result};
use beacon_common::frequency::REPORT_HEADER;
use beacon_common::{
    aggregate, format_frequencies, parse_relative_time, progress, validate_range, BeaconClient,
    BeaconConfig, CancelFlag, HttpTransport,
};
use std::io::{self, Write};

/// Report on the most recent record.
pub fn latest(config: &BeaconConfig) -> Result<()> {
    let client = BeaconClient::new(HttpTransport::new(config)?, config);
    let record = client.fetch_last()?;
    print_report(&record.output_value)
}

/// Report on every hourly record between two relative times.
pub fn range(from_phrase: &str, to_phrase: &str, config: &BeaconConfig) -> Result<()> {
    let from = parse_relative_time(from_phrase)?;
    let to = parse_relative_time(to_phrase)?;
    validate_range(from, to, config)?;

    println!(
        "Requested records:\nFrom  {}\nTo    {}",
        from.to_ctime(),
        to.to_ctime()
    );

    let cancel = install_interrupt_handler()?;
    let bar = progress::records_bar(0, config);
    let client = BeaconClient::new(HttpTransport::new(config)?, config)
        .with_cancel(cancel.clone())
        .with_progress(bar.clone());

    let summary = aggregate(&client, from, to, &bar, &cancel)?;
    print_report(&summary)
}

/// First Ctrl-C asks the aggregation to stop; a second one exits at once.
fn install_interrupt_handler() -> Result<CancelFlag> {
    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();

    ctrlc::set_handler(move || {
        if handler_flag.is_raised() {
            println!("\n{}", beacon_common::BeaconError::Interrupted);
            std::process::exit(beacon_common::error::EXIT_RUNTIME_FAILURE);
        }
        tracing::debug!("interrupt received");
        handler_flag.raise();
    })
    .context("Failed to install Ctrl-C handler")?;

    Ok(cancel)
}

fn print_report(summary: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "\n{}", REPORT_HEADER).context("Failed to write report")?;
    for line in format_frequencies(summary) {
        writeln!(out, "{}", line).context("Failed to write report")?;
    }
    out.flush().context("Failed to write report")?;
    Ok(())
}
