//! Interactive prompts using dialoguer

use std::path::Path;

use dialoguer::{Confirm, Select};

use crate::config::{OutputTarget, SessionConfig, FIELDS_TO_REMOVE};
use crate::error::{Result, TsbaseError};
use crate::pipeline::fetch::RemoteFileEntry;

/// Asks the user questions. Input validation is the implementation's job.
pub trait Prompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Returns the index of the chosen item
    fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize>;
}

/// Prompter that talks to the terminal on stderr
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }

    fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize> {
        let selected = Select::new()
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()?;
        Ok(selected)
    }
}

/// Ask every question that does not depend on the listing.
///
/// The overwrite question only comes up when writing to `tsconfig` and the
/// destination already exists; otherwise overwriting is allowed.
pub fn ask_session_config(prompter: &mut dyn Prompter, destination: &Path) -> Result<SessionConfig> {
    let remove_desc_name = prompter.confirm(
        &format!(
            "Want to remove unnecessary fields? ({})",
            FIELDS_TO_REMOVE.join(", ")
        ),
        true,
    )?;
    let keep_schema = prompter.confirm("Want to keep $schema url?", true)?;
    let want_remove_comments = prompter.confirm("Want to remove all comments?", true)?;
    let write_to = select_destination(prompter)?;

    let would_overwrite_file = if write_to == OutputTarget::Tsconfig && destination.exists() {
        prompter.confirm("Would you want to overwrite tsconfig? DANGEROUS!", false)?
    } else {
        true
    };

    Ok(SessionConfig {
        remove_desc_name,
        keep_schema,
        write_to,
        would_overwrite_file,
        want_remove_comments,
    })
}

fn select_destination(prompter: &mut dyn Prompter) -> Result<OutputTarget> {
    let items: Vec<String> = OutputTarget::ALL
        .iter()
        .map(|target| format!("{:<10} {}", target.label(), target.description()))
        .collect();
    let index = prompter.select("Where should we write output?", &items, 0)?;
    OutputTarget::from_index(index).ok_or(TsbaseError::NoDestination)
}

/// Let the user pick one of the listed bases. Fails on an empty listing.
pub fn select_base(prompter: &mut dyn Prompter, files: &[RemoteFileEntry]) -> Result<String> {
    if files.is_empty() {
        return Err(TsbaseError::NoBasesAvailable);
    }

    let names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
    let index = prompter.select("What file do you want?", &names, 0)?;
    names
        .get(index)
        .cloned()
        .ok_or(TsbaseError::InvalidSelection {
            index,
            available: names.len(),
        })
}

/// Asked after the user refused to overwrite the destination
pub fn confirm_print_instead(prompter: &mut dyn Prompter) -> Result<bool> {
    prompter.confirm(
        "You decided to not overwrite tsconfig. Still want to print to stdout?",
        true,
    )
}
