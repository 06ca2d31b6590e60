//! One interactive run, from the first question to the written document

use std::io::Write;
use std::sync::Arc;

use crate::cli::prompts::{ask_session_config, select_base, Prompter};
use crate::config::Settings;
use crate::error::{Result, TsbaseError};
use crate::pipeline::transform::transform;
use crate::pipeline::{write_output, BaseSource, WriteOutcome};
use crate::utils::{create_spinner, Logger};

/// How a run that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The document was written to the file or printed
    Written(WriteOutcome),
    /// The user refused both overwriting and printing
    Declined,
}

/// Log the error that ended a run.
///
/// Running out of destinations is reported as a plain info line; everything else is
/// an error.
pub fn report_failure(logger: &dyn Logger, err: &TsbaseError) {
    match err {
        TsbaseError::NoDestination => logger.info(&err.to_string()),
        _ => logger.error(&err.to_string()),
    }
}

/// Run the whole flow against `source`.
///
/// The listing request starts before the first question and is only awaited
/// when the file choice needs it.
pub async fn run_session(
    source: Arc<dyn BaseSource>,
    prompter: &mut dyn Prompter,
    logger: &dyn Logger,
    settings: &Settings,
    stdout: &mut dyn Write,
) -> Result<SessionOutcome> {
    let listing = {
        let source = Arc::clone(&source);
        tokio::spawn(async move { source.list_files().await })
    };

    logger.info("Hello, let's configure tsbase you're getting.");
    let cfg = ask_session_config(prompter, &settings.destination)?;
    tracing::debug!(?cfg, "session configured");

    let spinner = create_spinner("Loading available bases...");
    let files = listing.await;
    spinner.finish_and_clear();
    let files = files?.map_err(TsbaseError::ListFiles)?;

    let name = select_base(prompter, &files)?;
    logger.info(&format!("Ok. Getting {}", name));

    let spinner = create_spinner(&format!("Fetching {}...", name));
    let file = source.get_file(&name).await;
    spinner.finish_and_clear();
    let file = file.map_err(|source| TsbaseError::GetFile {
        name: name.clone(),
        source,
    })?;

    logger.info("Got file, writing...");
    let text = transform(&file, &cfg)?;

    match write_output(&text, &cfg, &settings.destination, prompter, stdout)? {
        WriteOutcome::Declined => {
            logger.info("Okay. Exiting.");
            Ok(SessionOutcome::Declined)
        }
        outcome => {
            logger.info("Done!");
            Ok(SessionOutcome::Written(outcome))
        }
    }
}
