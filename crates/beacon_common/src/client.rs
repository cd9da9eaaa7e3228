//! Beacon REST client with bounded retry
//!
//! A `Transport` performs one GET; `BeaconClient` layers the retry budget,
//! user-facing retry messages and record extraction on top of it.

use indicatif::ProgressBar;
use std::thread;
use std::time::{Duration, Instant};

use crate::aggregate::CancelFlag;
use crate::config::BeaconConfig;
use crate::error::BeaconError;
use crate::record::Record;
use crate::timestamp::Timestamp;

/// Granularity of the cancellable retry wait
const WAIT_SLICE: Duration = Duration::from_millis(100);

/// A single failed GET
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("HTTP status {0}")]
    Status(u16),
}

/// One HTTP GET returning the response body as text
pub trait Transport {
    fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// Production transport backed by a blocking reqwest client
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &BeaconConfig) -> Result<Self, BeaconError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(format!(
            "summarize-beacon/{}",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BeaconError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        response
            .text()
            .map_err(|e| TransportError::Connection(e.to_string()))
    }
}

/// Beacon client
pub struct BeaconClient<'a, T: Transport> {
    transport: T,
    config: &'a BeaconConfig,
    cancel: Option<CancelFlag>,
    progress: Option<ProgressBar>,
}

impl<'a, T: Transport> BeaconClient<'a, T> {
    pub fn new(transport: T, config: &'a BeaconConfig) -> Self {
        Self {
            transport,
            config,
            cancel: None,
            progress: None,
        }
    }

    /// Abort retry waits once `cancel` is raised.
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Print retry messages above `progress` instead of through it.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &BeaconConfig {
        self.config
    }

    /// GET `url`, retrying up to `max_attempts` times.
    pub fn fetch(&self, url: &str) -> Result<String, BeaconError> {
        let attempts = self.config.max_attempts.max(1);

        for attempt in 1..=attempts {
            match self.transport.get(url) {
                Ok(body) => {
                    tracing::debug!(url, attempt, bytes = body.len(), "fetched");
                    return Ok(body);
                }
                Err(e) => {
                    tracing::debug!(url, attempt, error = %e, "fetch attempt failed");
                    self.say(&format!("Host {} is unreachable.", self.config.base_url));
                    if attempt < attempts {
                        self.say(&format!(
                            "Waiting {} seconds for retry #{}",
                            self.config.retry_delay.as_secs(),
                            attempt
                        ));
                        self.wait()?;
                        self.say("Retrying...");
                    }
                }
            }
        }

        tracing::warn!(url, attempts, "giving up");
        Err(BeaconError::HostDown {
            base_url: self.config.base_url.clone(),
        })
    }

    /// Most recent record
    pub fn fetch_last(&self) -> Result<Record, BeaconError> {
        let raw = self.fetch(&self.config.last_url())?;
        Record::from_response(&raw, &self.config.base_url)
    }

    /// Record published at `timestamp`
    pub fn fetch_at(&self, timestamp: Timestamp) -> Result<Record, BeaconError> {
        let raw = self.fetch(&self.config.record_url(timestamp))?;
        Record::from_response(&raw, &self.config.base_url)
    }

    fn say(&self, message: &str) {
        match &self.progress {
            Some(bar) => bar.suspend(|| println!("{}", message)),
            None => println!("{}", message),
        }
    }

    fn wait(&self) -> Result<(), BeaconError> {
        let deadline = Instant::now() + self.config.retry_delay;
        loop {
            if self.cancel.as_ref().is_some_and(CancelFlag::is_raised) {
                return Err(BeaconError::Interrupted);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            thread::sleep(WAIT_SLICE.min(deadline - now));
        }
    }
}
