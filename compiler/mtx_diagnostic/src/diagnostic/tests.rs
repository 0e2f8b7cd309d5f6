use pretty_assertions::assert_eq;

use super::*;

#[test]
fn diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .at_line(7)
        .with_message("Invalid operands for *: vector and matrix")
        .with_note("only matrix * matrix is a product");

    assert_eq!(diag.code, ErrorCode::E2002);
    assert_eq!(diag.line, 7);
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn display_is_line_prefixed() {
    let diag = undefined_variable(3, "x");
    assert_eq!(diag.to_string(), "Line 3: Variable 'x' not defined");
}

#[test]
fn verbose_adds_code_and_notes() {
    let diag = invalid_number(2, "99999999999999999999");
    assert_eq!(
        diag.verbose(),
        "Line 2: Invalid number literal '99999999999999999999' [E0002]\n  \
         = note: integer literals must fit in 64 bits (max 9223372036854775807)"
    );
}

#[test]
fn scanner_and_parser_helpers() {
    assert_eq!(
        illegal_character(1, '$').to_string(),
        "Line 1: Illegal character '$'"
    );
    assert_eq!(syntax_error(4, ";").to_string(), "Line 4: Syntax error at ';'");
    assert_eq!(unexpected_eof(9).code, ErrorCode::E1002);
    assert_eq!(unterminated_string(5).code, ErrorCode::E0003);
}

#[test]
fn has_errors_reflects_emptiness() {
    assert!(!crate::has_errors(&[]));
    assert!(crate::has_errors(&[syntax_error(1, "x")]));
}
