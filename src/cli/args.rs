//! Command-line argument definitions using clap

use clap::Parser;

/// tsbase - Fetch a tsconfig base from github.com/tsconfig/bases and write it locally.
///
/// Every choice is asked interactively; there are no options besides --help and --version.
#[derive(Parser, Debug)]
#[command(name = "tsbase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
