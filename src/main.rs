//! tsbase: tsconfig base fetcher
//!
//! Asks a few questions, fetches the chosen base from github.com/tsconfig/bases
//! and writes it to ./tsconfig.json or stdout.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tsbase::cli::{report_failure, run_session, Cli, SessionOutcome, TerminalPrompter};
use tsbase::config::Settings;
use tsbase::pipeline::GithubBases;
use tsbase::utils::{ConsoleLogger, Logger};

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();
    let logger = ConsoleLogger::new();

    let (settings, source) = match setup() {
        Ok(parts) => parts,
        Err(err) => {
            logger.error(&format!("{:#}", err));
            return ExitCode::FAILURE;
        }
    };

    let mut prompter = TerminalPrompter;
    let mut stdout = std::io::stdout();

    match run_session(source, &mut prompter, &logger, &settings, &mut stdout).await {
        Ok(SessionOutcome::Written(outcome)) => {
            tracing::debug!(?outcome, "finished");
            ExitCode::SUCCESS
        }
        Ok(SessionOutcome::Declined) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&logger, &err);
            ExitCode::FAILURE
        }
    }
}

fn setup() -> Result<(Settings, Arc<GithubBases>)> {
    init_tracing()?;

    let settings = Settings::default();
    let source = GithubBases::new(settings.clone()).context("Failed to build HTTP client")?;

    Ok((settings, Arc::new(source)))
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")
}
