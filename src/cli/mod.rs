//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap
//! - Interactive REPL via rustyline
//! - Output formatting (text, JSON)
//! - Splitting scripts into statements

mod args;
mod output;
mod repl;
mod script;

pub use args::Args;
pub use output::{OutputFormat, OutputFormatter};
pub use repl::{Repl, ReplCommand, ReplInput};
pub use script::split_statements;
