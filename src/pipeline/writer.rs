//! Output writer: destination file or stdout, behind the overwrite guard

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::prompts::{confirm_print_instead, Prompter};
use crate::config::{OutputTarget, SessionConfig};
use crate::error::{Result, TsbaseError};

/// What the writer ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The destination file was written
    WroteFile(PathBuf),
    /// The document went to stdout
    Printed,
    /// Overwrite and printing were both declined; nothing was written
    Declined,
}

/// Write the serialized document where the session asked for it.
///
/// When overwriting was declined, the user is asked whether to print instead. The
/// file is written in a single call; stdout gets the text plus a trailing newline.
pub fn write_output(
    text: &str,
    cfg: &SessionConfig,
    destination: &Path,
    prompter: &mut dyn Prompter,
    stdout: &mut dyn Write,
) -> Result<WriteOutcome> {
    match cfg.write_to {
        OutputTarget::Tsconfig if cfg.would_overwrite_file => {
            std::fs::write(destination, text).map_err(|source| TsbaseError::WriteFile {
                path: destination.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %destination.display(), bytes = text.len(), "wrote file");
            Ok(WriteOutcome::WroteFile(destination.to_path_buf()))
        }
        OutputTarget::Tsconfig => {
            if !confirm_print_instead(prompter)? {
                return Ok(WriteOutcome::Declined);
            }
            print_document(text, stdout)?;
            Ok(WriteOutcome::Printed)
        }
        OutputTarget::Stdout => {
            print_document(text, stdout)?;
            Ok(WriteOutcome::Printed)
        }
    }
}

fn print_document(text: &str, stdout: &mut dyn Write) -> Result<()> {
    writeln!(stdout, "{}", text)
        .and_then(|_| stdout.flush())
        .map_err(TsbaseError::Stdout)
}
