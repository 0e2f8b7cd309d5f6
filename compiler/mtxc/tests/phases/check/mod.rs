//! Front-end diagnostics seen through the driver.

use mtxc::run_source;
use pretty_assertions::assert_eq;

use crate::common::messages;

#[test]
fn elementwise_shape_mismatch_names_both_shapes() {
    assert_eq!(
        messages("A = zeros(2);\nB = ones(3);\nC = A + B;"),
        vec!["Line 3: Incompatible shapes for +: (2, 2) and (3, 3)"]
    );
}

#[test]
fn matmul_checks_inner_dimensions() {
    assert!(messages("A = zeros(2, 3);\nB = ones(3, 4);\nC = A * B;").is_empty());
    assert_eq!(
        messages("A = zeros(2, 3);\nB = ones(2, 3);\nC = A * B;"),
        vec!["Line 3: Matrix multiplication: incompatible dimensions (2, 3) and (2, 3)"]
    );
}

#[test]
fn invalid_operands_reported_once() {
    assert_eq!(
        messages("x = 1 + \"s\";\ny = x;"),
        vec!["Line 1: Invalid operands for +: int and string"]
    );
}

#[test]
fn reassignment_overwrites_recorded_shape() {
    assert!(messages("x = 1;\nx = [1, 2, 3];").is_empty());
    assert_eq!(
        messages("x = 1;\nx = [1, 2, 3];\ny = x[5];"),
        vec!["Line 3: Index 5 out of bounds for vector of size 3"]
    );
}

#[test]
fn empty_matrix_checks_clean() {
    assert!(messages("A = [];\nB = A';").is_empty());
}

#[test]
fn every_independent_problem_is_reported() {
    let source = "\
y = q;
break;
A = [[1, 2], [3]];
B = eye(0);";
    assert_eq!(
        messages(source),
        vec![
            "Line 1: Variable 'q' not defined",
            "Line 2: Break statement outside loop",
            "Line 3: Matrix rows have different sizes: {1, 2}",
            "Line 4: Matrix function 'eye' requires positive size, got 0",
        ]
    );
}

#[test]
fn diagnostics_prevent_execution() {
    let outcome = run_source("print 1;\ny = q;");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(outcome.output.is_empty());
    assert!(outcome.value.is_none());
    assert!(outcome.error.is_none());
    assert!(!outcome.succeeded());
}

#[test]
fn lexical_error_skips_checking() {
    let found = messages("x = 1 @ 2;\ny = q;");
    assert_eq!(found[0], "Line 1: Illegal character '@'");
    assert!(!found.iter().any(|m| m.contains("not defined")));
}

#[test]
fn syntax_error_is_reported() {
    let found = messages("x = ;");
    assert_eq!(found.len(), 1);
    assert!(found[0].starts_with("Line 1: Syntax error at"), "{found:?}");
}
