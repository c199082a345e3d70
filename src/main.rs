//! `health-probe` binary: probe once per attempt, print the verdict, exit 0 or 1.

use std::io;
use std::process::ExitCode;

use health_probe::cli::{self, Args};
use health_probe::{ProbeOptions, Prober};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    let options = ProbeOptions::from(Args::parse_normalized());
    tracing::debug!(?options, worst_case = ?options.worst_case(), "starting health probe");

    let prober = match Prober::new(options) {
        Ok(prober) => prober,
        Err(err) => {
            eprintln!("Health check failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stderr = io::stderr();
    let outcome = prober
        .run(|failure| {
            let _ = cli::report_failure(&mut stderr, &failure);
        })
        .await;

    cli::finish(outcome, &mut io::stdout(), &mut io::stderr())
}

// Silent unless RUST_LOG is set, so stdout and stderr carry only the probe lines.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
