//! Fixed settings and the per-run session configuration

use std::fmt;
use std::path::PathBuf;

/// Fields stripped from the document when the user asks to remove unnecessary fields
pub const FIELDS_TO_REMOVE: [&str; 4] = ["display", "name", "_version", "docs"];

/// Key holding the JSON schema reference at the top of each base
pub const SCHEMA_KEY: &str = "$schema";

/// Where the API lives and where output goes.
///
/// `Settings::default()` is what the binary runs with. Nothing here is read from
/// flags, files or the environment; tests build their own instances instead.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the GitHub REST API (no trailing slash)
    pub api_base: String,
    /// Owner of the repository holding the bases
    pub owner: String,
    /// Repository holding the bases
    pub repo: String,
    /// Directory inside the repository that lists the bases
    pub directory: String,
    /// Output file used for the `tsconfig` destination
    pub destination: PathBuf,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            owner: "tsconfig".to_string(),
            repo: "bases".to_string(),
            directory: "bases".to_string(),
            destination: PathBuf::from("./tsconfig.json"),
            user_agent: format!("tsbase/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Settings {
    /// URL of the directory listing endpoint
    pub fn listing_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.directory
        )
    }

    /// URL of a single file inside the listed directory
    pub fn file_url(&self, name: &str) -> String {
        format!("{}/{}", self.listing_url(), name)
    }
}

/// Output destination chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write `tsconfig.json` in the current directory
    Tsconfig,
    /// Print to standard output
    Stdout,
}

impl OutputTarget {
    /// Choices in the order they are offered
    pub const ALL: [OutputTarget; 2] = [OutputTarget::Tsconfig, OutputTarget::Stdout];

    /// Map a prompt selection back to a target
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputTarget::Tsconfig => "tsconfig",
            OutputTarget::Stdout => "stdout",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputTarget::Tsconfig => "To tsconfig.json in current dir",
            OutputTarget::Stdout => "To stdout",
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the fetched document is parsed and serialized for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentMode {
    /// Drop whole-line `//` comments and use strict JSON
    Strip,
    /// Parse as JSONC and keep comments through serialization
    Preserve,
}

/// Every answer collected from the user for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub remove_desc_name: bool,
    pub keep_schema: bool,
    pub write_to: OutputTarget,
    pub would_overwrite_file: bool,
    pub want_remove_comments: bool,
}

impl SessionConfig {
    pub fn comment_mode(&self) -> CommentMode {
        if self.want_remove_comments {
            CommentMode::Strip
        } else {
            CommentMode::Preserve
        }
    }

    /// Top-level keys the transform removes under this configuration
    pub fn keys_to_remove(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if !self.keep_schema {
            keys.push(SCHEMA_KEY);
        }
        if self.remove_desc_name {
            keys.extend(FIELDS_TO_REMOVE);
        }
        keys
    }
}
