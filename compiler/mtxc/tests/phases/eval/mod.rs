//! Programs that run to completion (or fault) through the driver.

use mtx_eval::{Array, Value};
use mtxc::run_source;
use pretty_assertions::assert_eq;

use crate::common::{output, run_ok};

#[test]
fn for_range_is_inclusive() {
    assert_eq!(output("for v = 1:3 { print v; }"), "1\n2\n3\n");
}

#[test]
fn print_joins_with_spaces() {
    assert_eq!(output("print \"a\", 1, 1.5;"), "a 1 1.5\n");
}

#[test]
fn break_leaves_only_innermost_loop() {
    let source = "\
for i = 1:2 {
    for j = 1:3 {
        if (j == 2) break;
        print i, j;
    }
}";
    assert_eq!(output(source), "1 1\n2 1\n");
}

#[test]
fn return_unwinds_all_loops() {
    let source = "\
for i = 1:3 {
    while (1 == 1) {
        return i * 10;
    }
}
print \"unreachable\";";
    let outcome = run_ok(source);
    assert_eq!(outcome.value, Some(Value::Int(10)));
    assert!(outcome.output.is_empty());
}

#[test]
fn identity_is_its_own_transpose() {
    let outcome = run_ok("I = eye(3);\nreturn I';");
    assert_eq!(outcome.value, Some(Value::Array(Array::eye(3, 3))));
}

#[test]
fn matrix_product_prints_aligned() {
    assert_eq!(
        output("A = [[1, 2], [3, 4]];\nprint A * A;"),
        "[[ 7 10]\n [15 22]]\n"
    );
}

#[test]
fn element_assignment_updates_vector() {
    assert_eq!(output("v = [1, 2, 3];\nv[0] = 10;\nprint v;"), "[10  2  3]\n");
}

#[test]
fn while_with_compound_assignment() {
    let outcome = run_ok("i = 0;\nwhile (i < 3) i += 1;\nreturn i;");
    assert_eq!(outcome.value, Some(Value::Int(3)));
}

#[test]
fn variables_outlive_their_block() {
    assert_eq!(output("if (1 < 2) { x = 5; }\nprint x;"), "5\n");
}

#[test]
fn runtime_fault_keeps_earlier_output() {
    let outcome = run_source("print 1;\nx = 0;\ny = 1 / x;\nprint 2;");
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.output, "1\n");
    let error = outcome.error.expect("division should fault");
    assert_eq!(error.to_string(), "Line 3: division by zero");
}

#[test]
fn no_return_yields_no_value() {
    assert_eq!(run_ok("x = 1;").value, None);
}

#[test]
fn oversized_matrix_is_a_runtime_error() {
    let outcome = run_source("print 1;\nA = zeros(5000000000);");
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.output, "1\n");
    let error = outcome.error.expect("allocation should fault");
    assert!(error.to_string().starts_with("Line 2: array is too big"), "{error}");
}
