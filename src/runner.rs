//! Script runner: evaluate a Lazel program and render its value.
//!
//! The runner is the seam between the language core and its callers: the
//! CLI subcommands and the end-to-end tests both drive this module.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::interpreter::{format_value, Interpreter, RuntimeError, Value};
use crate::parser::{Lexer, Parser, SourceFile};

/// Failure of a whole run: reading, parsing, or evaluating
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rendered syntax diagnostic
    #[error("{0}")]
    Syntax(String),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Evaluate program text; `path` is used in diagnostics only
pub fn eval_source(path: &Path, source: &str) -> Result<Value, RunnerError> {
    let file = SourceFile::new(path.to_path_buf(), source.to_string());
    let lexer = Lexer::new(&file);
    let mut parser = Parser::new(lexer);
    let program = parser
        .parse_program()
        .map_err(|diag| RunnerError::Syntax(diag.to_human_readable(source)))?;

    let mut interpreter = Interpreter::new();
    Ok(interpreter.eval_program(&program)?)
}

/// Evaluate a program file and render the result value
pub fn run_file(path: &Path) -> Result<String, RunnerError> {
    let source = std::fs::read_to_string(path).map_err(|e| RunnerError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let value = eval_source(path, &source)?;
    Ok(format_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_source_renders_value() {
        let value = eval_source(Path::new("test.lzl"), "add 1 2").unwrap();
        assert_eq!(format_value(&value), "3");
    }

    #[test]
    fn test_syntax_error_is_rendered() {
        let err = eval_source(Path::new("test.lzl"), "(add 1").unwrap_err();
        match err {
            RunnerError::Syntax(text) => {
                assert!(text.contains("E0003"));
                assert!(text.contains("test.lzl"));
            }
            other => panic!("expected syntax error, got {}", other),
        }
    }

    #[test]
    fn test_runtime_error_propagates() {
        let err = eval_source(Path::new("test.lzl"), "missing").unwrap_err();
        assert!(err.to_string().contains("E4001"));
    }

    #[test]
    fn test_missing_file() {
        let err = run_file(Path::new("/no/such/file.lzl")).unwrap_err();
        assert!(matches!(err, RunnerError::Read { .. }));
    }
}
