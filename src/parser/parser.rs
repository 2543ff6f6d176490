//! Recursive descent parser for Lazel
//!
//! A program is a single expression followed by end of input. Application
//! is juxtaposition: a run of atoms parses into one `Apply` node whose
//! arguments the evaluator consumes left to right.
#![allow(clippy::result_large_err)]

use crate::diagnostics::{syntax, Diagnostic, Note, Span};
use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};

/// Parser for Lazel source code
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer }
    }

    /// Parse a complete program
    pub fn parse_program(&mut self) -> Result<Program, Diagnostic> {
        let expr = self.parse_expr()?;

        let token = self.peek()?.clone();
        if token.kind != TokenKind::Eof {
            return Err(Diagnostic::error(syntax::TRAILING_INPUT)
                .message(format!(
                    "unexpected {} after the program expression",
                    token.kind.describe()
                ))
                .span(token.span)
                .note(Note::new("a program is a single top-level expression"))
                .build());
        }

        Ok(Program {
            id: NodeId::new(),
            span: expr.span().clone(),
            expr,
        })
    }

    fn parse_expr(&mut self) -> Result<Expr, Diagnostic> {
        let kind = self.peek()?.kind.clone();
        match kind {
            TokenKind::Lambda => self.parse_lambda(),
            TokenKind::Cond => self.parse_cond(),
            _ => self.parse_application(),
        }
    }

    /// application := atom atom*
    fn parse_application(&mut self) -> Result<Expr, Diagnostic> {
        let callee = self.parse_atom()?;

        let mut args = Vec::new();
        loop {
            let starts = Self::starts_atom(&self.peek()?.kind);
            if !starts {
                break;
            }
            args.push(self.parse_atom()?);
        }

        if args.is_empty() {
            return Ok(callee);
        }

        let span = args
            .last()
            .map(|last| callee.span().merge(last.span()))
            .unwrap_or_else(|| callee.span().clone());
        Ok(Expr::Apply {
            id: NodeId::new(),
            span,
            callee: Box::new(callee),
            args,
        })
    }

    /// atom := NUMBER | IDENT | record | '(' expr ')'
    fn parse_atom(&mut self) -> Result<Expr, Diagnostic> {
        let token = self.peek()?.clone();
        match token.kind {
            TokenKind::IntLit(value) => {
                self.advance()?;
                Ok(Expr::IntLit {
                    id: NodeId::new(),
                    span: token.span,
                    value,
                })
            }
            TokenKind::FloatLit(value) => {
                self.advance()?;
                Ok(Expr::FloatLit {
                    id: NodeId::new(),
                    span: token.span,
                    value,
                })
            }
            TokenKind::Ident(name) => {
                self.advance()?;
                Ok(Expr::Ident {
                    id: NodeId::new(),
                    span: token.span,
                    name,
                })
            }
            TokenKind::LBracket => self.parse_record(),
            TokenKind::LParen => {
                self.advance()?;
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            _ => Err(self.error_unexpected("an expression")),
        }
    }

    /// lambdaExpr := 'λ' '(' identList ')' ':' expr
    fn parse_lambda(&mut self) -> Result<Expr, Diagnostic> {
        let start_span = self.expect(TokenKind::Lambda)?.span;
        self.expect(TokenKind::LParen)?;

        let mut params = Vec::new();
        let (first, _) = self.expect_ident()?;
        params.push(first);
        while self.check(&TokenKind::Comma)? {
            self.advance()?;
            let (name, span) = self.expect_ident()?;
            if params.contains(&name) {
                return Err(Diagnostic::error(syntax::DUPLICATE_PARAM)
                    .message(format!("duplicate parameter `{}`", name))
                    .span(span)
                    .build());
            }
            params.push(name);
        }

        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Colon)?;
        let body = self.parse_expr()?;

        let span = start_span.merge(body.span());
        Ok(Expr::Lambda {
            id: NodeId::new(),
            span,
            params,
            body: Box::new(body),
        })
    }

    /// condExpr := 'cond' atom atom atom
    fn parse_cond(&mut self) -> Result<Expr, Diagnostic> {
        let start_span = self.expect(TokenKind::Cond)?.span;
        let condition = self.parse_atom()?;
        let then_expr = self.parse_atom()?;
        let else_expr = self.parse_atom()?;

        let span = start_span.merge(else_expr.span());
        Ok(Expr::Cond {
            id: NodeId::new(),
            span,
            condition: Box::new(condition),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
        })
    }

    /// record := '[' (binding (',' binding)*)? ']'
    fn parse_record(&mut self) -> Result<Expr, Diagnostic> {
        let start_span = self.expect(TokenKind::LBracket)?.span;

        let mut fields: Vec<FieldInit> = Vec::new();
        if !self.check(&TokenKind::RBracket)? {
            loop {
                fields.push(self.parse_binding(&fields)?);
                if self.check(&TokenKind::Comma)? {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }

        let end_span = self.expect(TokenKind::RBracket)?.span;
        Ok(Expr::Record {
            id: NodeId::new(),
            span: start_span.merge(&end_span),
            fields,
        })
    }

    /// binding := IDENT '=' expr
    fn parse_binding(&mut self, seen: &[FieldInit]) -> Result<FieldInit, Diagnostic> {
        let (name, name_span) = self.expect_ident()?;
        if seen.iter().any(|f| f.name == name) {
            return Err(Diagnostic::error(syntax::DUPLICATE_FIELD)
                .message(format!("duplicate record field `{}`", name))
                .span(name_span)
                .build());
        }

        self.expect(TokenKind::Eq)?;
        let expr = self.parse_expr()?;

        let span = name_span.merge(expr.span());
        Ok(FieldInit {
            id: NodeId::new(),
            span,
            name,
            expr,
        })
    }

    fn starts_atom(kind: &TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::IntLit(_)
                | TokenKind::FloatLit(_)
                | TokenKind::Ident(_)
                | TokenKind::LBracket
                | TokenKind::LParen
        )
    }

    fn peek(&mut self) -> Result<&Token, Diagnostic> {
        self.lexer.peek()
    }

    fn advance(&mut self) -> Result<Token, Diagnostic> {
        self.lexer.next_token()
    }

    fn check(&mut self, kind: &TokenKind) -> Result<bool, Diagnostic> {
        Ok(&self.peek()?.kind == kind)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, Diagnostic> {
        let token = self.peek()?.clone();
        if token.kind == kind {
            self.advance()
        } else {
            Err(self.unexpected(&kind.describe(), &token))
        }
    }

    fn expect_ident(&mut self) -> Result<(String, Span), Diagnostic> {
        let token = self.peek()?.clone();
        match token.kind {
            TokenKind::Ident(name) => {
                self.advance()?;
                Ok((name, token.span))
            }
            _ => Err(self.unexpected("an identifier", &token)),
        }
    }

    fn error_unexpected(&mut self, expected: &str) -> Diagnostic {
        let token = match self.lexer.peek() {
            Ok(token) => token.clone(),
            Err(diag) => return diag,
        };
        self.unexpected(expected, &token)
    }

    fn unexpected(&self, expected: &str, found: &Token) -> Diagnostic {
        let code = if found.kind == TokenKind::Eof {
            syntax::UNEXPECTED_EOF
        } else {
            syntax::UNEXPECTED_TOKEN
        };
        Diagnostic::error(code)
            .message(format!(
                "expected {}, found {}",
                expected,
                found.kind.describe()
            ))
            .span(found.span.clone())
            .build()
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
