//! Range aggregation
//!
//! Walks the requested range one probe interval at a time, fetching each
//! record and appending its output value to a single summary string.

use indicatif::ProgressBar;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::client::{BeaconClient, Transport};
use crate::error::BeaconError;
use crate::timestamp::Timestamp;

/// Cooperative cancellation shared with a signal handler
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Probe slots `from, from + interval, ...` strictly before `to`.
pub fn probe_timestamps(
    from: Timestamp,
    to: Timestamp,
    interval_secs: i64,
) -> impl Iterator<Item = Timestamp> {
    let step = interval_secs.max(1);
    std::iter::successors(Some(from), move |t| Some(t.plus_secs(step)))
        .take_while(move |t| *t < to)
}

/// Concatenate the output values of every probe slot in `[from, to)`.
///
/// Nothing partial is returned: any failure, including cancellation,
/// discards what was collected so far.
pub fn aggregate<T: Transport>(
    client: &BeaconClient<'_, T>,
    from: Timestamp,
    to: Timestamp,
    progress: &ProgressBar,
    cancel: &CancelFlag,
) -> Result<String, BeaconError> {
    let config = client.config();
    let slots: Vec<Timestamp> = probe_timestamps(from, to, config.probe_interval_secs).collect();
    tracing::info!(count = slots.len(), %from, %to, "aggregating records");

    progress.set_length(slots.len() as u64);
    let mut summary = String::new();

    for timestamp in slots {
        if cancel.is_raised() {
            progress.abandon();
            return Err(BeaconError::Interrupted);
        }

        let record = client.fetch_at(timestamp)?;
        summary
            .try_reserve(record.output_value.len())
            .map_err(|_| BeaconError::OutOfMemory)?;
        summary.push_str(&record.output_value);

        progress.inc(1);
    }

    progress.finish();
    tracing::debug!(len = summary.len(), "summary complete");
    Ok(summary)
}
