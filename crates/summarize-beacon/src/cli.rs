//! Command line surface
//!
//! Only three shapes are accepted: no arguments, `--help`, or exactly
//! `--from <phrase> --to <phrase>` in that order. The shape is checked on the
//! raw tokens first; clap then pulls the values out and renders the help.

use clap::{CommandFactory, Parser};

pub const WRONG_PARAMETERS: &str = "Wrong input parameters, please see help and try again.";

const RELATIVE_TIME_HELP: &str = "\
If option --from is used, option --to is required after it.
\"relative time\" string should look like:
\"2 year(s) 3 month(s) 2 day(s) 5 hour(s) 20 minute(s) ago\",
where at least one parameter is required
(amount of years, months, days, hours or minutes)
and \"ago\" in the end of the string.";

/// summarize-beacon command line
#[derive(Parser, Debug)]
#[command(name = "summarize-beacon")]
#[command(about = "Count hexadecimal characters in NIST Randomness Beacon output values")]
#[command(long_about = "\
Program is designed to get output values from
NIST Randomness Beacon REST API 'https://beacon.nist.gov/rest'
from relative time to relative time,
parse it and output every hexadecimal character
and number of it's occurrences from summarized beacon's output value.

Without arguments program will output every hexadecimal character
and number of it's occurrences in last Randomness Beacon output value.")]
#[command(after_long_help = RELATIVE_TIME_HELP)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Start of the range
    #[arg(long, value_name = "relative time", requires = "to", allow_hyphen_values = true)]
    pub from: Option<String>,

    /// End of the range (exclusive)
    #[arg(long, value_name = "relative time", requires = "from", allow_hyphen_values = true)]
    pub to: Option<String>,
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Summarize the most recent record
    Latest,
    /// Print usage
    Help,
    /// Summarize every hourly record in a range
    Range { from: String, to: String },
    /// Anything else
    Wrong,
}

impl Invocation {
    /// Classify the arguments that follow the program name.
    pub fn from_args(args: &[String]) -> Self {
        match args {
            [] => Invocation::Latest,
            [flag] if flag == "--help" => Invocation::Help,
            [from_key, _, to_key, _] if from_key == "--from" && to_key == "--to" => {
                Self::parse_range(args)
            }
            _ => Invocation::Wrong,
        }
    }

    fn parse_range(args: &[String]) -> Self {
        let argv = std::iter::once("summarize-beacon").chain(args.iter().map(String::as_str));
        match Cli::try_parse_from(argv) {
            Ok(Cli {
                from: Some(from),
                to: Some(to),
            }) => Invocation::Range { from, to },
            Ok(_) => Invocation::Wrong,
            Err(e) => {
                tracing::debug!(error = %e, "clap rejected range arguments");
                Invocation::Wrong
            }
        }
    }
}

/// Full usage text
pub fn usage() -> String {
    Cli::command().render_long_help().to_string()
}
