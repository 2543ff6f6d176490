use super::*;
use crate::parser::span::SourceFile;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::path::PathBuf;

fn parse(source: &str) -> Result<Program, Diagnostic> {
    let file = SourceFile::new(PathBuf::from("test.lzl"), source.to_string());
    let lexer = Lexer::new(&file);
    let mut parser = Parser::new(lexer);
    parser.parse_program()
}

fn parse_ok(source: &str) -> Expr {
    parse(source).expect("parse failed").expr
}

#[test]
fn test_number_atoms() {
    assert!(matches!(parse_ok("42"), Expr::IntLit { value: 42, .. }));
    assert!(matches!(parse_ok("2.5"), Expr::FloatLit { .. }));
}

#[test]
fn test_identifier_atom() {
    let expr = parse_ok("add");
    match expr {
        Expr::Ident { name, .. } => assert_eq!(name, "add"),
        other => panic!("expected identifier, got {:?}", other),
    }
}

#[test]
fn test_application_collects_all_atoms() {
    let expr = parse_ok("add 1 2");
    match expr {
        Expr::Apply { callee, args, .. } => {
            assert!(matches!(*callee, Expr::Ident { ref name, .. } if name == "add"));
            assert_eq!(args.len(), 2);
        }
        other => panic!("expected application, got {:?}", other),
    }
}

#[test]
fn test_projection_chain_is_one_application() {
    // `r n v` is a single Apply node; the evaluator projects field by field
    let expr = parse_ok("r n v");
    match expr {
        Expr::Apply { callee, args, .. } => {
            assert!(matches!(*callee, Expr::Ident { ref name, .. } if name == "r"));
            let names: Vec<_> = args
                .iter()
                .map(|a| match a {
                    Expr::Ident { name, .. } => name.clone(),
                    other => panic!("expected identifier argument, got {:?}", other),
                })
                .collect();
            assert_eq!(names, vec!["n".to_string(), "v".to_string()]);
        }
        other => panic!("expected application, got {:?}", other),
    }
}

#[test]
fn test_lambda_multi_param() {
    let expr = parse_ok("λ(a, b): add a b");
    match expr {
        Expr::Lambda { params, body, .. } => {
            assert_eq!(params, vec!["a".to_string(), "b".to_string()]);
            assert!(matches!(*body, Expr::Apply { .. }));
        }
        other => panic!("expected lambda, got {:?}", other),
    }
}

#[test]
fn test_lambda_body_extends_to_end() {
    // The body is a full expression, not an atom
    let expr = parse_ok("λ(n): cond n 1 0");
    match expr {
        Expr::Lambda { body, .. } => assert!(matches!(*body, Expr::Cond { .. })),
        other => panic!("expected lambda, got {:?}", other),
    }
}

#[test]
fn test_parenthesized_lambda_as_callee() {
    let expr = parse_ok("(λ(x): x) 5");
    match expr {
        Expr::Apply { callee, args, .. } => {
            assert!(matches!(*callee, Expr::Lambda { .. }));
            assert_eq!(args.len(), 1);
        }
        other => panic!("expected application, got {:?}", other),
    }
}

#[test]
fn test_cond_takes_three_atoms() {
    let expr = parse_ok("cond x 10 20");
    match expr {
        Expr::Cond {
            condition,
            then_expr,
            else_expr,
            ..
        } => {
            assert!(matches!(*condition, Expr::Ident { .. }));
            assert!(matches!(*then_expr, Expr::IntLit { value: 10, .. }));
            assert!(matches!(*else_expr, Expr::IntLit { value: 20, .. }));
        }
        other => panic!("expected conditional, got {:?}", other),
    }
}

#[test]
fn test_record_preserves_field_order() {
    let expr = parse_ok("[v=1, n=[], f=λ(x): x]");
    match expr {
        Expr::Record { fields, .. } => {
            let names: Vec<_> = fields.iter().map(|f| f.name.clone()).collect();
            assert_eq!(
                names,
                vec!["v".to_string(), "n".to_string(), "f".to_string()]
            );
        }
        other => panic!("expected record, got {:?}", other),
    }
}

#[test]
fn test_empty_record() {
    let expr = parse_ok("[]");
    match expr {
        Expr::Record { fields, .. } => assert!(fields.is_empty()),
        other => panic!("expected record, got {:?}", other),
    }
}

#[test]
fn test_record_binding_stops_at_comma() {
    let expr = parse_ok("[f=λ(n): n, g=2]");
    match expr {
        Expr::Record { fields, .. } => {
            assert_eq!(fields.len(), 2);
            assert!(matches!(fields[0].expr, Expr::Lambda { .. }));
            assert!(matches!(fields[1].expr, Expr::IntLit { value: 2, .. }));
        }
        other => panic!("expected record, got {:?}", other),
    }
}

#[test]
fn test_record_applied_by_juxtaposition() {
    let expr = parse_ok("[r=[v=1]] r v");
    match expr {
        Expr::Apply { callee, args, .. } => {
            assert!(matches!(*callee, Expr::Record { .. }));
            assert_eq!(args.len(), 2);
        }
        other => panic!("expected application, got {:?}", other),
    }
}

#[test]
fn test_comments_are_skipped() {
    let expr = parse_ok("# leading comment\nadd 1 2 # trailing comment");
    assert!(matches!(expr, Expr::Apply { .. }));
}

#[test]
fn test_error_missing_equals_in_binding() {
    let err = parse("[v 1]").unwrap_err();
    assert_eq!(err.code, syntax::UNEXPECTED_TOKEN);
    assert!(err.message.contains("`=`"));
}

#[test]
fn test_error_unbalanced_paren() {
    let err = parse("(add 1 2").unwrap_err();
    assert_eq!(err.code, syntax::UNEXPECTED_EOF);
}

#[test]
fn test_error_unbalanced_bracket() {
    let err = parse("[v=1").unwrap_err();
    assert_eq!(err.code, syntax::UNEXPECTED_EOF);
}

#[test]
fn test_error_trailing_input() {
    let err = parse("1 = 2").unwrap_err();
    assert_eq!(err.code, syntax::TRAILING_INPUT);
}

#[test]
fn test_error_duplicate_field() {
    let err = parse("[v=1, v=2]").unwrap_err();
    assert_eq!(err.code, syntax::DUPLICATE_FIELD);
    assert!(err.message.contains("`v`"));
}

#[test]
fn test_error_duplicate_param() {
    let err = parse("λ(a, a): a").unwrap_err();
    assert_eq!(err.code, syntax::DUPLICATE_PARAM);
}

#[test]
fn test_error_dot_is_not_grammar() {
    // `.` is a surface token but no production accepts it
    let err = parse("r.v").unwrap_err();
    assert_eq!(err.code, syntax::TRAILING_INPUT);
}

#[test]
fn test_error_empty_input() {
    let err = parse("").unwrap_err();
    assert_eq!(err.code, syntax::UNEXPECTED_EOF);
}

#[test]
fn test_error_cond_missing_branch() {
    let err = parse("cond x 1").unwrap_err();
    assert_eq!(err.code, syntax::UNEXPECTED_EOF);
}

#[test]
fn test_error_has_position() {
    let err = parse("add 1 ]").unwrap_err();
    assert_eq!(err.span.line, 1);
    assert_eq!(err.span.col, 7);
}

proptest! {
    // The front end is total: arbitrary input either parses or reports a
    // positioned diagnostic. It never panics.
    #[test]
    fn parsing_never_panics(input in "\\PC*") {
        match parse(&input) {
            Ok(_) => {}
            Err(diag) => prop_assert!(diag.span.line >= 1),
        }
    }

    #[test]
    fn lexing_is_total(input in "\\PC*") {
        let file = SourceFile::new(PathBuf::from("fuzz.lzl"), input);
        let mut lexer = Lexer::new(&file);
        loop {
            match lexer.next_token() {
                Ok(token) => {
                    if token.kind == TokenKind::Eof {
                        break;
                    }
                }
                Err(diag) => {
                    prop_assert!(diag.span.line >= 1);
                    break;
                }
            }
        }
    }
}
