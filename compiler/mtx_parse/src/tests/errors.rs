use pretty_assertions::assert_eq;

use super::parse_source;
use mtx_diagnostic::ErrorCode;

fn first_error(source: &str) -> String {
    let output = parse_source(source);
    assert_eq!(output.errors.len(), 1, "parsing stops at the first error");
    output.errors[0].to_string()
}

#[test]
fn missing_operand() {
    assert_eq!(first_error("x = 1 +;"), "Line 1: Syntax error at ';'");
}

#[test]
fn unparenthesised_condition() {
    assert_eq!(first_error("if x < 1 x = 2;"), "Line 1: Syntax error at 'x'");
}

#[test]
fn relational_outside_condition() {
    assert_eq!(first_error("x = a < b;"), "Line 1: Syntax error at '<'");
}

#[test]
fn non_literal_index() {
    assert_eq!(first_error("y = v[i];"), "Line 1: Syntax error at 'i'");
}

#[test]
fn unclosed_block_is_unexpected_eof() {
    let output = parse_source("while (i < 3) {\n  i += 1;\n");
    assert_eq!(output.errors[0].code, ErrorCode::E1002);
    assert_eq!(output.errors[0].to_string(), "Line 3: Unexpected end of input");
}

#[test]
fn error_line_is_the_offending_token() {
    assert_eq!(
        first_error("x = 1;\ny = 2;\nz = = 3;"),
        "Line 3: Syntax error at '='"
    );
}

#[test]
fn statements_before_the_error_are_kept() {
    let output = parse_source("x = 1;\ny = ;\nz = 3;");
    assert_eq!(output.program.body.stmts.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1001);
}
