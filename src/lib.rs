//! `health-probe` is an HTTP liveness probe for container supervisors.
//!
//! The library exposes the retry loop as [`Prober::run`], which returns a
//! [`ProbeOutcome`] instead of terminating the process:
//! - [`ProbeOutcome::Healthy`] on the first status in `[200, 400)`
//! - [`ProbeOutcome::Exhausted`] once every attempt has failed
//!
//! The `health-probe` binary maps that outcome to output lines and an exit
//! code through [`cli::finish`].

pub mod cli;
mod error;
mod options;
mod prober;
mod types;

pub use error::ProbeError;
pub use options::ProbeOptions;
pub use prober::Prober;
pub use types::{is_qualifying, status_line, AttemptFailure, ProbeOutcome};

pub type Result<T> = std::result::Result<T, ProbeError>;
