//! Lexer for the Lazel language

use crate::diagnostics::{Diagnostic, Span};
use crate::parser::span::SourceFile;
use logos::Logos;

/// Token types for Lazel
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"#[^\n]*")]
pub enum TokenKind {
    // Keywords
    #[token("cond")]
    Cond,
    #[token("λ")]
    Lambda,

    // Literals
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    FloatLit(f64),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    IntLit(i64),

    // Identifiers
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token(".")]
    Dot,

    // End of file
    Eof,
}

impl TokenKind {
    /// Short description used in parse error messages
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Cond => "`cond`".to_string(),
            TokenKind::Lambda => "`λ`".to_string(),
            TokenKind::FloatLit(v) => format!("number `{}`", v),
            TokenKind::IntLit(v) => format!("number `{}`", v),
            TokenKind::Ident(name) => format!("identifier `{}`", name),
            TokenKind::LParen => "`(`".to_string(),
            TokenKind::RParen => "`)`".to_string(),
            TokenKind::LBracket => "`[`".to_string(),
            TokenKind::RBracket => "`]`".to_string(),
            TokenKind::Comma => "`,`".to_string(),
            TokenKind::Colon => "`:`".to_string(),
            TokenKind::Eq => "`=`".to_string(),
            TokenKind::Dot => "`.`".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// A token with its span
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Lexer for Lazel source code
pub struct Lexer<'a> {
    source: &'a SourceFile,
    logos_lexer: logos::Lexer<'a, TokenKind>,
    peeked: Option<Token>,
    at_eof: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source file
    pub fn new(source: &'a SourceFile) -> Self {
        Self {
            source,
            logos_lexer: TokenKind::lexer(source.content()),
            peeked: None,
            at_eof: false,
        }
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Result<Token, Diagnostic> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }

        if self.at_eof {
            return Ok(Token::new(TokenKind::Eof, self.eof_span()));
        }

        match self.logos_lexer.next() {
            Some(Ok(kind)) => {
                let range = self.logos_lexer.span();
                Ok(Token::new(kind, self.source.span(range.start, range.end)))
            }
            Some(Err(())) => {
                let range = self.logos_lexer.span();
                let span = self.source.span(range.start, range.end);
                Err(
                    Diagnostic::error(crate::diagnostics::syntax::UNEXPECTED_CHARACTER)
                        .message(format!(
                            "unexpected character: {:?}",
                            self.logos_lexer.slice()
                        ))
                        .span(span)
                        .build(),
                )
            }
            None => {
                self.at_eof = true;
                Ok(Token::new(TokenKind::Eof, self.eof_span()))
            }
        }
    }

    /// Peek at the next token without consuming it
    pub fn peek(&mut self) -> Result<&Token, Diagnostic> {
        if self.peeked.is_none() {
            self.peeked = Some(self.next_token()?);
        }
        Ok(self.peeked.as_ref().unwrap())
    }

    fn eof_span(&self) -> Span {
        let len = self.source.content().len();
        self.source.span(len, len)
    }
}
