//! Command-line interface for the Lazel toolchain
//!
//! Provides commands: run, check, repl

pub mod check_cmd;
pub mod repl_cmd;
pub mod run_cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lazel - a small lazily-evaluated expression language
#[derive(Parser, Debug)]
#[command(name = "lazel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a Lazel program
    Run {
        /// File to run
        file: PathBuf,
    },

    /// Check a source file for syntax errors without running it
    Check {
        /// File to check
        file: PathBuf,

        /// Output diagnostics as JSON
        #[arg(long)]
        json: bool,

        /// Print the parsed AST as JSON
        #[arg(long)]
        ast: bool,
    },

    /// Start an interactive session
    Repl,
}
