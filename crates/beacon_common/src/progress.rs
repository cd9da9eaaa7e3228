//! Aggregation progress bar
//!
//! Drawn on stdout as `Getting N records: [####      ] 4/10 40.0%`. indicatif
//! hides the bar by itself when stdout is not a terminal.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::fmt::Write;

use crate::config::BeaconConfig;

/// Bar for `total` record fetches
pub fn records_bar(total: u64, config: &BeaconConfig) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout());

    let template = format!(
        "Getting {{len}} records: [{{bar:{}}}] {{pos}}/{{len}} {{percent_tenths}}%",
        config.progress_bar_width
    );
    if let Ok(style) = ProgressStyle::with_template(&template) {
        pb.set_style(
            style
                .with_key("percent_tenths", |state: &ProgressState, w: &mut dyn Write| {
                    let _ = write!(w, "{}", percent_tenths(state.pos(), state.len()));
                })
                .progress_chars("## "),
        );
    }
    pb
}

/// Completion as a percentage with one decimal, e.g. "33.3"
pub fn percent_tenths(pos: u64, len: Option<u64>) -> String {
    match len {
        Some(len) if len > 0 => format!("{:.1}", pos as f64 * 100.0 / len as f64),
        _ => "0.0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_tracks_length() {
        let pb = records_bar(24, &BeaconConfig::default());
        assert_eq!(pb.length(), Some(24));
        pb.inc(1);
        assert_eq!(pb.position(), 1);
        pb.finish_and_clear();
    }

    #[test]
    fn test_percent_has_one_decimal() {
        assert_eq!(percent_tenths(1, Some(3)), "33.3");
        assert_eq!(percent_tenths(2, Some(3)), "66.7");
        assert_eq!(percent_tenths(3, Some(3)), "100.0");
        assert_eq!(percent_tenths(0, Some(0)), "0.0");
        assert_eq!(percent_tenths(5, None), "0.0");
    }
}
