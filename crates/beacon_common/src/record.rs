//! Beacon record extraction
//!
//! Responses are scanned as plain text; only the first
//! `<outputValue>...</outputValue>` element matters.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BeaconError;

static OUTPUT_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<outputValue>(.*?)</outputValue>").expect("output value pattern is valid")
});

/// One beacon record reduced to the field this tool consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Hexadecimal output value (length not checked)
    pub output_value: String,
}

impl Record {
    /// Build a record from a raw response body.
    pub fn from_response(raw: &str, base_url: &str) -> Result<Self, BeaconError> {
        let output_value = extract_output_value(raw)
            .ok_or_else(|| BeaconError::ValueNotFound {
                base_url: base_url.to_string(),
            })?
            .to_string();

        tracing::trace!(len = output_value.len(), "output value extracted");
        Ok(Self { output_value })
    }
}

/// Inner text of the first `<outputValue>` element, if any.
pub fn extract_output_value(raw: &str) -> Option<&str> {
    OUTPUT_VALUE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
