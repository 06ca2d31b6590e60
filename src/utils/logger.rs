//! Log stream for user-facing progress lines
//!
//! Everything goes to stderr so stdout stays clean for the document itself.

use std::sync::Mutex;

use console::{style, Emoji, Term};

pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ERROR: Emoji<'_, '_> = Emoji("✗ ", "[x] ");

/// Where progress and error lines are sent
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Styled lines on stderr
pub struct ConsoleLogger {
    term: Term,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn emit(&self, line: String) {
        // Nowhere left to report a failing stderr
        let _ = self.term.write_line(&line);
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        self.emit(format!("{}{}", INFO, message));
    }

    fn warn(&self, message: &str) {
        self.emit(format!("{}{}", WARN, style(message).yellow()));
    }

    fn error(&self, message: &str) {
        self.emit(format!("{}{}", ERROR, style(message).red().bold()));
    }
}

/// Severity of a captured line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Logger that keeps every line in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Messages logged at `level`, in order
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}
