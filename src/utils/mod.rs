//! Utilities module - logging and terminal progress

pub mod logger;
pub mod progress;

pub use logger::*;
pub use progress::*;
