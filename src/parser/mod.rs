//! Lexing and parsing for Lazel source code

pub mod ast;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;
mod span;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use span::SourceFile;
