//! Shared test utilities: scripted prompter, in-memory source and fixture bases

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tsbase::cli::Prompter;
use tsbase::config::{OutputTarget, SessionConfig};
use tsbase::error::{FetchError, Result};
use tsbase::pipeline::{BaseSource, RemoteFileContent, RemoteFileEntry};

/// A realistic base with the metadata fields and whole-line comments
pub const NODE20_BASE: &str = r#"{
  "$schema": "https://json.schemastore.org/tsconfig",
  "display": "Node 20",
  "_version": "20.1.0",
  "docs": "https://github.com/tsconfig/bases",

  "compilerOptions": {
    // Node 20 ships ES2023
    "lib": ["es2023"],
    "module": "node16",
    "target": "es2022",

    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "moduleResolution": "node16"
  }
}
"#;

/// One answer per expected question, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Pick(usize),
}

/// Prompter that replays answers and records every question it was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub offered: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Answer {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for: {}", message))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message) {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            other => panic!("expected yes/no for '{}', got {:?}", message, other),
        }
    }

    fn select(&mut self, message: &str, items: &[String], _default: usize) -> Result<usize> {
        self.offered.push(items.to_vec());
        match self.next(message) {
            Answer::Pick(index) => Ok(index),
            other => panic!("expected a choice for '{}', got {:?}", message, other),
        }
    }
}

/// In-memory source of bases
#[derive(Debug, Default)]
pub struct FakeSource {
    files: Vec<(String, RemoteFileContent)>,
    fail_listing: Option<u16>,
    pub get_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a base served base64-encoded and wrapped like the GitHub API does
    pub fn with_base(mut self, name: &str, text: &str) -> Self {
        self.files.push((name.to_string(), encode_like_github(text)));
        self
    }

    pub fn failing_listing(mut self, status: u16) -> Self {
        self.fail_listing = Some(status);
        self
    }
}

#[async_trait]
impl BaseSource for FakeSource {
    async fn list_files(&self) -> std::result::Result<Vec<RemoteFileEntry>, FetchError> {
        if let Some(status) = self.fail_listing {
            return Err(FetchError::Status {
                status,
                body: "API rate limit exceeded".to_string(),
            });
        }
        Ok(self
            .files
            .iter()
            .enumerate()
            .map(|(i, (name, _))| RemoteFileEntry {
                name: name.clone(),
                sha: format!("sha{}", i),
            })
            .collect())
    }

    async fn get_file(&self, name: &str) -> std::result::Result<RemoteFileContent, FetchError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let by_name: HashMap<&str, &RemoteFileContent> =
            self.files.iter().map(|(n, c)| (n.as_str(), c)).collect();
        by_name
            .get(name)
            .map(|c| (*c).clone())
            .ok_or_else(|| FetchError::NotFound(name.to_string()))
    }
}

/// Base64 with a line break every 60 characters
pub fn encode_like_github(text: &str) -> RemoteFileContent {
    let encoded = STANDARD.encode(text);
    let wrapped: Vec<String> = encoded
        .as_bytes()
        .chunks(60)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();
    RemoteFileContent {
        content: format!("{}\n", wrapped.join("\n")),
        encoding: "base64".to_string(),
    }
}

pub fn session_config(
    keep_schema: bool,
    remove_desc_name: bool,
    want_remove_comments: bool,
    write_to: OutputTarget,
) -> SessionConfig {
    SessionConfig {
        remove_desc_name,
        keep_schema,
        write_to,
        would_overwrite_file: true,
        want_remove_comments,
    }
}
