//! Lazel CLI - interpreter for the Lazel expression language

use clap::Parser;
use std::process::ExitCode;

use lazel::cli::{check_cmd, repl_cmd, run_cmd, Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run { file } => run_cmd::run(&file),
        Command::Check { file, json, ast } => check_cmd::run(&file, json, ast),
        Command::Repl => repl_cmd::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
