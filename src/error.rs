//! Error types for fetching, transforming and writing a base.
//!
//! `TsbaseError` covers every way a run can fail. A user declining to print is not
//! an error; see [`crate::cli::SessionOutcome`].

use std::path::PathBuf;

use thiserror::Error;

/// Failures talking to the remote source of bases.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or body decoding failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The source has no file under this name
    #[error("no base named '{0}'")]
    NotFound(String),
}

/// Errors that end a run with a non-zero exit status.
#[derive(Debug, Error)]
pub enum TsbaseError {
    #[error("Error from getFiles API: {0}")]
    ListFiles(#[source] FetchError),

    #[error("Error from getFile API ({name}): {source}")]
    GetFile {
        name: String,
        #[source]
        source: FetchError,
    },

    /// The listing succeeded but there is nothing to choose from
    #[error("no base configs available to choose from")]
    NoBasesAvailable,

    /// The file choice pointed past the end of the listing
    #[error("no base at position {index}, only {available} listed")]
    InvalidSelection { index: usize, available: usize },

    #[error("listing task failed: {0}")]
    ListingTask(#[from] tokio::task::JoinError),

    #[error("unsupported content encoding '{0}'")]
    UnsupportedEncoding(String),

    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to parse JSON: {0}")]
    StrictParse(#[from] serde_json::Error),

    /// Message from the JSONC parser, which includes the location
    #[error("failed to parse JSON with comments: {0}")]
    CommentParse(String),

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("no destination found, exiting...")]
    NoDestination,
}

pub type Result<T> = std::result::Result<T, TsbaseError>;
