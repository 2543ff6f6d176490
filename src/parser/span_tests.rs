use super::*;

#[test]
fn test_line_col() {
    let source = SourceFile::new(
        PathBuf::from("test.lzl"),
        "add 1 2\n# comment\ncond".to_string(),
    );

    assert_eq!(source.line_col(0), (1, 1)); // Start of line 1
    assert_eq!(source.line_col(4), (1, 5)); // Middle of line 1
    assert_eq!(source.line_col(8), (2, 1)); // Start of line 2
    assert_eq!(source.line_col(18), (3, 1)); // Start of line 3
}

#[test]
fn test_span() {
    let source = SourceFile::new(PathBuf::from("test.lzl"), "add 1 2".to_string());

    let span = source.span(4, 5);
    assert_eq!(span.start, 4);
    assert_eq!(span.end, 5);
    assert_eq!(span.line, 1);
    assert_eq!(span.col, 5);
}

#[test]
fn test_span_on_later_line() {
    let source = SourceFile::new(PathBuf::from("test.lzl"), "# header\nadd 1 2".to_string());

    let span = source.span(9, 12);
    assert_eq!(span.line, 2);
    assert_eq!(span.col, 1);
}
