//! Beacon Configuration
//!
//! Built once at startup and handed by reference to every component that
//! needs the service location, probe spacing or retry budget.

use std::time::Duration;

use crate::timestamp::Timestamp;

/// NIST Randomness Beacon record endpoint
pub const DEFAULT_BASE_URL: &str = "https://beacon.nist.gov/rest/record/";

/// First record published by the beacon (09/05/2013 3:39 pm)
pub const BEACON_START_TIMESTAMP: i64 = 1378395540;

/// Immutable runtime configuration
#[derive(Debug, Clone)]
pub struct BeaconConfig {
    /// Record endpoint, always ending with '/'
    pub base_url: String,

    /// Spacing between probed records in a range (seconds)
    pub probe_interval_secs: i64,

    /// Oldest timestamp accepted in --from or --to
    pub min_timestamp: i64,

    /// HTTP attempts per record before giving up
    pub max_attempts: u32,

    /// Pause between attempts
    pub retry_delay: Duration,

    /// Per-request timeout; None keeps the HTTP client default
    pub request_timeout: Option<Duration>,

    /// Width of the progress bar in cells
    pub progress_bar_width: u16,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            probe_interval_secs: 3600, // one record per hour
            min_timestamp: BEACON_START_TIMESTAMP,
            max_attempts: 3,
            retry_delay: Duration::from_secs(2),
            request_timeout: None,
            progress_bar_width: 20,
        }
    }
}

impl BeaconConfig {
    /// URL of the most recent record
    pub fn last_url(&self) -> String {
        format!("{}last/", self.base_url)
    }

    /// URL of the record published at `timestamp`
    pub fn record_url(&self, timestamp: Timestamp) -> String {
        format!("{}{}", self.base_url, timestamp)
    }
}
