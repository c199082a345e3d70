//! Command-line surface of the `health-probe` binary.
//!
//! Flags follow the single-dash spelling container images already use
//! (`-url=http://...`, `-retries 5`); the double-dash form works as well.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use crate::{options::DEFAULT_URL, status_line, AttemptFailure, ProbeOptions, ProbeOutcome};

const LONG_FLAGS: [&str; 4] = ["url", "timeout", "retries", "interval"];

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "health-probe")]
#[command(about = "Probe an HTTP endpoint and exit 0 when it answers with a status in [200, 400)")]
#[command(version)]
pub struct Args {
    /// Health check URL
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Request timeout (e.g. 5s, 500ms)
    #[arg(long, default_value = "5s", value_parser = parse_timeout)]
    pub timeout: Duration,

    /// Total number of attempts
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub retries: u32,

    /// Delay before each attempt after the first (e.g. 1s, 10ms)
    #[arg(long, default_value = "1s", value_parser = parse_interval)]
    pub interval: Duration,
}

impl Args {
    /// Parses the process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

impl From<Args> for ProbeOptions {
    fn from(args: Args) -> Self {
        Self {
            url: args.url,
            timeout: args.timeout,
            retries: args.retries as usize,
            interval: args.interval,
        }
    }
}

/// Rewrites `-url=x` style arguments into `--url=x`.
///
/// Only the probe's own long flags are touched; everything after a bare `--`
/// is passed through unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(position, arg)| {
            if position == 0 || passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if LONG_FLAGS.contains(&name) {
                        OsString::from(format!("-{text}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

fn parse_timeout(value: &str) -> Result<Duration, String> {
    let timeout = parse_duration(value)?;
    if timeout.is_zero() {
        return Err("timeout must be greater than zero".to_owned());
    }
    Ok(timeout)
}

fn parse_interval(value: &str) -> Result<Duration, String> {
    parse_duration(value)
}

fn parse_duration(value: &str) -> Result<Duration, String> {
    humantime::parse_duration(value.trim())
        .map_err(|err| format!("invalid duration '{value}': {err}"))
}

/// Writes `Attempt <n> failed: <reason>`; request-construction failures stay silent.
pub fn report_failure<W: Write>(err: &mut W, failure: &AttemptFailure) -> io::Result<()> {
    if failure.is_silent() {
        return Ok(());
    }
    writeln!(err, "Attempt {} failed: {}", failure.attempt, failure.error)
}

/// Prints the final line for `outcome` and maps it to the process exit code.
pub fn finish<O: Write, E: Write>(outcome: ProbeOutcome, out: &mut O, err: &mut E) -> ExitCode {
    match outcome {
        ProbeOutcome::Healthy { status, .. } => {
            // The exit code is the contract; a closed stdout must not flip it.
            let _ = writeln!(out, "Health check passed: {}", status_line(status));
            ExitCode::SUCCESS
        }
        ProbeOutcome::Exhausted { attempts } => {
            let _ = writeln!(err, "Health check failed after {attempts} attempts");
            ExitCode::FAILURE
        }
    }
}
