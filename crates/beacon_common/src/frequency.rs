//! Character frequency report

use std::collections::BTreeMap;

/// Header printed above the frequency lines
pub const REPORT_HEADER: &str =
    "Result (hexadecimal character,number of occurrences in output value):";

/// Occurrences of every character in `summary`, keyed in ascending order.
pub fn character_frequencies(summary: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in summary.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// `"<char>,<count>"` lines, one per distinct character.
pub fn format_frequencies(summary: &str) -> Vec<String> {
    character_frequencies(summary)
        .into_iter()
        .map(|(c, count)| format!("{},{}", c, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_sorted_by_character() {
        assert_eq!(format_frequencies("aabbc"), vec!["a,2", "b,2", "c,1"]);
        assert_eq!(format_frequencies("cbacba"), vec!["a,2", "b,2", "c,2"]);
    }

    #[test]
    fn test_empty_summary() {
        assert!(format_frequencies("").is_empty());
    }

    #[test]
    fn test_hex_ordering_digits_before_letters() {
        assert_eq!(
            format_frequencies("F0A90F"),
            vec!["0,2", "9,1", "A,1", "F,2"]
        );
    }

    #[test]
    fn test_counts_cover_input() {
        let summary = "17070B49DBF3BA12BEA427CB6651ECF7860FDC3792268031B77711D63A8610F4";
        let counts = character_frequencies(summary);
        assert_eq!(counts.values().sum::<usize>(), summary.len());
        assert!(counts.values().all(|&n| n > 0));
        for c in summary.chars() {
            assert!(counts.contains_key(&c));
        }
    }
}
