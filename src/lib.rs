//! tsbase: tsconfig base fetcher library
//!
//! Fetches a base from the tsconfig/bases repository, applies the user's
//! choices to it and writes it to `tsconfig.json` or stdout.

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod utils;
