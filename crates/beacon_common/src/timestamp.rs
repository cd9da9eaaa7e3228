//! Minute-aligned Unix timestamps and range validation

use chrono::{Local, TimeZone};
use std::fmt;

use crate::config::BeaconConfig;
use crate::error::BeaconError;

/// Seconds since the Unix epoch, as used in beacon record URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Drop the seconds within the minute (floors toward negative infinity)
    pub fn floor_to_minute(self) -> Self {
        Self(self.0 - self.0.rem_euclid(60))
    }

    pub fn plus_secs(self, secs: i64) -> Self {
        Self(self.0 + secs)
    }

    /// Local time in ctime(3) layout, e.g. "Thu Sep  5 15:39:00 2013"
    pub fn to_ctime(&self) -> String {
        match Local.timestamp_opt(self.0, 0).single() {
            Some(dt) => dt.format("%a %b %e %H:%M:%S %Y").to_string(),
            None => self.0.to_string(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check a requested range before any record is fetched.
///
/// Ordering is checked first, so an inverted range that also predates the
/// beacon reports the ordering problem.
pub fn validate_range(
    from: Timestamp,
    to: Timestamp,
    config: &BeaconConfig,
) -> Result<(), BeaconError> {
    if from > to {
        return Err(BeaconError::FromAfterTo);
    }
    if from.as_secs() < config.min_timestamp || to.as_secs() < config.min_timestamp {
        return Err(BeaconError::PredatesBeaconStart);
    }
    tracing::debug!(%from, %to, "range validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1378395540;

    #[test]
    fn test_floor_to_minute() {
        assert_eq!(Timestamp::from_secs(1_700_000_059).floor_to_minute().as_secs() % 60, 0);
        assert_eq!(
            Timestamp::from_secs(1_700_000_059).floor_to_minute(),
            Timestamp::from_secs(1_700_000_040)
        );
        assert_eq!(Timestamp::from_secs(START).floor_to_minute(), Timestamp::from_secs(START));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = BeaconConfig::default();
        let from = Timestamp::from_secs(START + 7200);
        let to = Timestamp::from_secs(START + 3600);
        assert_eq!(validate_range(from, to, &config), Err(BeaconError::FromAfterTo));
    }

    #[test]
    fn test_equal_and_ordered_ranges_accepted() {
        let config = BeaconConfig::default();
        let t = Timestamp::from_secs(START + 60);
        assert!(validate_range(t, t, &config).is_ok());
        assert!(validate_range(t, t.plus_secs(3600), &config).is_ok());
    }

    #[test]
    fn test_pre_beacon_bounds_rejected() {
        let config = BeaconConfig::default();
        let early = Timestamp::from_secs(START - 60);
        let late = Timestamp::from_secs(START + 86_400);
        assert_eq!(
            validate_range(early, late, &config),
            Err(BeaconError::PredatesBeaconStart)
        );
        assert_eq!(
            validate_range(early, early, &config),
            Err(BeaconError::PredatesBeaconStart)
        );
    }

    #[test]
    fn test_ordering_checked_before_bounds() {
        let config = BeaconConfig::default();
        let from = Timestamp::from_secs(START - 60);
        let to = Timestamp::from_secs(START - 120);
        assert_eq!(validate_range(from, to, &config), Err(BeaconError::FromAfterTo));
    }
}
