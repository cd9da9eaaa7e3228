//! Relative time phrases ("2 days 3 hours ago") to minute-aligned timestamps
//!
//! Grammar, case-insensitive, whitespace separated:
//!
//! ```text
//! phrase := (amount unit)+ "ago"
//! amount := unsigned integer
//! unit   := year | month | week | day | hour | minute | second, optional trailing "s"
//! ```
//!
//! Years and months move along the calendar; the other units are fixed spans.

use chrono::{DateTime, Duration, Local, Months, TimeZone};

use crate::error::BeaconError;
use crate::timestamp::Timestamp;

/// Largest span chrono's Duration accepts in seconds
const MAX_OFFSET_SECS: i64 = i64::MAX / 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    fn parse(token: &str) -> Option<Self> {
        let singular = token.strip_suffix('s').unwrap_or(token);
        match singular {
            "year" => Some(Unit::Year),
            "month" => Some(Unit::Month),
            "week" => Some(Unit::Week),
            "day" => Some(Unit::Day),
            "hour" => Some(Unit::Hour),
            "minute" => Some(Unit::Minute),
            "second" => Some(Unit::Second),
            _ => None,
        }
    }
}

/// Total distance back from the reference instant
#[derive(Debug, Default, PartialEq, Eq)]
struct Offset {
    months: u32,
    seconds: i64,
}

impl Offset {
    fn add(&mut self, amount: u32, unit: Unit) -> Option<()> {
        let amount_secs = i64::from(amount);
        match unit {
            Unit::Year => self.months = self.months.checked_add(amount.checked_mul(12)?)?,
            Unit::Month => self.months = self.months.checked_add(amount)?,
            Unit::Week => self.seconds = self.seconds.checked_add(amount_secs * 604_800)?,
            Unit::Day => self.seconds = self.seconds.checked_add(amount_secs * 86_400)?,
            Unit::Hour => self.seconds = self.seconds.checked_add(amount_secs * 3_600)?,
            Unit::Minute => self.seconds = self.seconds.checked_add(amount_secs * 60)?,
            Unit::Second => self.seconds = self.seconds.checked_add(amount_secs)?,
        }
        Some(())
    }
}

fn parse_offset(phrase: &str) -> Option<Offset> {
    let lowered = phrase.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let (last, pairs) = tokens.split_last()?;
    if *last != "ago" || pairs.is_empty() || pairs.len() % 2 != 0 {
        return None;
    }

    let mut offset = Offset::default();
    for pair in pairs.chunks_exact(2) {
        let amount: u32 = pair[0].parse().ok()?;
        let unit = Unit::parse(pair[1])?;
        offset.add(amount, unit)?;
    }
    Some(offset)
}

/// Resolve `phrase` against an explicit reference instant.
pub fn parse_relative_time_at<Tz: TimeZone>(
    phrase: &str,
    now: DateTime<Tz>,
) -> Result<Timestamp, BeaconError> {
    let bad = || BeaconError::BadRelativeTime(phrase.to_string());

    let offset = parse_offset(phrase)
        .filter(|o| o.seconds <= MAX_OFFSET_SECS)
        .ok_or_else(bad)?;
    let shifted = now
        .checked_sub_months(Months::new(offset.months))
        .and_then(|dt| dt.checked_sub_signed(Duration::seconds(offset.seconds)))
        .ok_or_else(bad)?;

    let timestamp = Timestamp::from_secs(shifted.timestamp()).floor_to_minute();
    tracing::debug!(phrase, %timestamp, "relative time resolved");
    Ok(timestamp)
}

/// Resolve `phrase` against the local clock.
pub fn parse_relative_time(phrase: &str) -> Result<Timestamp, BeaconError> {
    parse_relative_time_at(phrase, Local::now())
}
