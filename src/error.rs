use std::error::Error as _;

use reqwest::StatusCode;

use crate::types::status_line;

/// Reason a single probe attempt, or the probe setup, failed.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The GET request could not be built, usually a malformed URL.
    #[error("invalid request: {}", error_chain(.0))]
    InvalidRequest(reqwest::Error),
    /// Network, DNS, TLS or deadline failure from `reqwest`.
    #[error("{}", error_chain(.0))]
    Transport(reqwest::Error),
    /// The endpoint answered outside `[200, 400)`.
    #[error("status {}", status_text(.0))]
    Status(StatusCode),
    /// The HTTP client itself could not be constructed.
    #[error("http client setup: {}", error_chain(.0))]
    Client(reqwest::Error),
}

impl ProbeError {
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_timeout(),
            _ => false,
        }
    }
}

fn status_text(status: &StatusCode) -> String {
    status_line(*status)
}

// reqwest keeps the useful detail (connection refused, dns) in the source chain.
fn error_chain(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
