//! Handler for the `lazel run` subcommand.

use std::path::Path;

use crate::runner;

pub fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = runner::run_file(file)?;
    println!("{}", rendered);
    Ok(())
}
