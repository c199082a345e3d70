use reqwest::StatusCode;

use crate::ProbeError;

/// Result of a full probe run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// An attempt returned a qualifying status. `attempt` is 1-indexed.
    Healthy { attempt: usize, status: StatusCode },
    /// Every configured attempt failed.
    Exhausted { attempts: usize },
}

impl ProbeOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy { .. })
    }
}

/// One failed attempt, handed to the observer passed to [`crate::Prober::run`].
#[derive(Debug)]
pub struct AttemptFailure {
    /// 1-indexed attempt number.
    pub attempt: usize,
    pub error: ProbeError,
}

impl AttemptFailure {
    /// Request-construction failures are not reported on stderr.
    pub fn is_silent(&self) -> bool {
        matches!(self.error, ProbeError::InvalidRequest(_))
    }
}

/// Qualifying statuses are the half-open range `[200, 400)`, redirects included.
pub fn is_qualifying(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

/// Renders `503 Service Unavailable`, or the bare code when it has no reason.
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}
