use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:80/health";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_RETRIES: usize = 3;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Configures the probe target, request deadline and retry loop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProbeOptions {
    /// URL requested with `GET` on every attempt.
    pub url: String,
    /// Per-request deadline, also used as the client's overall timeout.
    pub timeout: Duration,
    /// Total number of attempts, including the first one.
    pub retries: usize,
    /// Fixed delay before every attempt after the first.
    pub interval: Duration,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            retries: DEFAULT_RETRIES,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl ProbeOptions {
    /// Upper bound on wall-clock time spent by a full run.
    pub fn worst_case(&self) -> Duration {
        let attempts = u32::try_from(self.retries).unwrap_or(u32::MAX);
        let waits = attempts.saturating_sub(1);
        self.timeout
            .saturating_mul(attempts)
            .saturating_add(self.interval.saturating_mul(waits))
    }
}
