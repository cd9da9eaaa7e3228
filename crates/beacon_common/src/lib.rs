//! Beacon Common - Shared building blocks for summarize-beacon
//!
//! Fetches records from the NIST Randomness Beacon REST API, pulls the
//! hexadecimal output value out of each response, and tallies how often every
//! character shows up across a time range.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod error;
pub mod frequency;
pub mod logging;
pub mod progress;
pub mod record;
pub mod relative_time;
pub mod timestamp;

pub use aggregate::{aggregate, probe_timestamps, CancelFlag};
pub use client::{BeaconClient, HttpTransport, Transport, TransportError};
pub use config::BeaconConfig;
pub use error::BeaconError;
pub use frequency::{character_frequencies, format_frequencies};
pub use record::{extract_output_value, Record};
pub use relative_time::parse_relative_time;
pub use timestamp::{validate_range, Timestamp};
