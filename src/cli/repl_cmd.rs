//! Handler for the `lazel repl` subcommand.

use std::io::{self, Write};
use std::path::Path;

use crate::interpreter::format_value;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Lazel REPL");
    println!("Each line is evaluated as a complete program. Use :quit to exit.");
    println!();

    loop {
        print!("lazel> ");
        io::stdout().flush()?;

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading input: {}", e);
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, ":quit" | ":q" | ":exit") {
            break;
        }

        match runner::eval_source(Path::new("<repl>"), input) {
            Ok(value) => println!("{}", format_value(&value)),
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
