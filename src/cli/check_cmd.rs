//! Handler for the `lazel check` subcommand.

use std::path::Path;

use crate::parser::{Lexer, Parser, SourceFile};

pub fn run(file: &Path, json: bool, ast: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(file)
        .map_err(|e| format!("failed to read {}: {}", file.display(), e))?;

    let source_file = SourceFile::new(file.to_path_buf(), source.clone());
    let lexer = Lexer::new(&source_file);
    let mut parser = Parser::new(lexer);

    match parser.parse_program() {
        Ok(program) => {
            if ast {
                println!("{}", serde_json::to_string_pretty(&program)?);
            }
            Ok(())
        }
        Err(diag) => {
            if json {
                eprintln!("{}", diag.to_json());
            } else {
                eprintln!("{}", diag.to_human_readable(&source));
            }
            Err("syntax check failed".into())
        }
    }
}
