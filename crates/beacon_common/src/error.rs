//! Error taxonomy for beacon operations
//!
//! Every variant is fatal for the CLI. The Display text is the diagnosis shown
//! to the user, so keep it stable.

/// Exit code for runtime failures (network, bad time, range, memory, interrupt)
pub const EXIT_RUNTIME_FAILURE: i32 = 1;

/// Exit code for a malformed command line
pub const EXIT_USAGE: i32 = 2;

/// Fatal beacon errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BeaconError {
    #[error("Host {base_url} probably is down, exiting.")]
    HostDown { base_url: String },

    #[error("Output value wasn't found in xml from {base_url}")]
    ValueNotFound { base_url: String },

    #[error("Bad related time received, please see help and try again.")]
    BadRelativeTime(String),

    #[error("Relative time in --from should predate relative time in --to")]
    FromAfterTo,

    #[error("Related time in --from or --to shouldn't predate beacon start at 09/05/2013 3:39 pm")]
    PredatesBeaconStart,

    #[error("Process is out of memory, please choose smaller time period and try again.")]
    OutOfMemory,

    #[error("Program interrupted by user, exiting.")]
    Interrupted,

    #[error("HTTP client error: {0}")]
    Http(String),
}

impl BeaconError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        EXIT_RUNTIME_FAILURE
    }

    /// Whether the usage text should follow the diagnosis
    pub fn wants_usage(&self) -> bool {
        matches!(self, BeaconError::BadRelativeTime(_))
    }
}
