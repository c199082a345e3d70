use std::fmt;

use reqwest::header;
use tokio::time::sleep;

use crate::{
    types::is_qualifying, AttemptFailure, ProbeError, ProbeOptions, ProbeOutcome, Result,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
/// Sequential HTTP GET prober with a fixed-interval retry loop.
pub struct Prober {
    http: reqwest::Client,
    options: ProbeOptions,
}

impl fmt::Debug for Prober {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prober")
            .field("options", &self.options)
            .finish()
    }
}

impl Prober {
    /// Creates a prober whose client enforces `options.timeout` on every request.
    pub fn new(options: ProbeOptions) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(ProbeError::Client)?;
        Ok(Self::with_client(http, options))
    }

    /// Creates a prober around an existing client.
    ///
    /// The per-request deadline from `options.timeout` still applies.
    pub fn with_client(http: reqwest::Client, options: ProbeOptions) -> Self {
        Self { http, options }
    }

    /// Runs up to `options.retries` attempts and returns on the first
    /// qualifying status.
    ///
    /// `on_failure` is called once per failed attempt, in attempt order,
    /// before the next retry wait starts.
    pub async fn run<F>(&self, mut on_failure: F) -> ProbeOutcome
    where
        F: FnMut(AttemptFailure),
    {
        for index in 0..self.options.retries {
            if index > 0 {
                self.wait_before_retry(index).await;
            }

            let attempt = index + 1;
            match self.attempt(attempt).await {
                Ok(status) => {
                    tracing::info!(attempt, status = status.as_u16(), "probe succeeded");
                    return ProbeOutcome::Healthy { attempt, status };
                }
                Err(error) => on_failure(AttemptFailure { attempt, error }),
            }
        }

        ProbeOutcome::Exhausted {
            attempts: self.options.retries,
        }
    }

    async fn attempt(&self, attempt: usize) -> Result<reqwest::StatusCode> {
        let request = self
            .http
            .get(&self.options.url)
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(self.options.timeout)
            .build()
            .map_err(|err| {
                tracing::debug!(attempt, error = %err, "skipping attempt, request could not be built");
                ProbeError::InvalidRequest(err)
            })?;

        tracing::debug!(attempt, url = %request.url(), "sending probe request");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(ProbeError::Transport)?;

        let status = response.status();
        drop(response);

        if is_qualifying(status) {
            Ok(status)
        } else {
            Err(ProbeError::Status(status))
        }
    }

    /// Waits the fixed interval before attempt `index` (0-based, never 0).
    async fn wait_before_retry(&self, index: usize) {
        let interval = self.options.interval;
        tracing::debug!(
            next_attempt = index + 1,
            interval_ms = interval.as_millis() as u64,
            "waiting before next probe attempt"
        );
        if !interval.is_zero() {
            sleep(interval).await;
        }
    }
}
