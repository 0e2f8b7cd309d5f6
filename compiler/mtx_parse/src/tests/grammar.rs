use pretty_assertions::assert_eq;

use super::{parse_rhs, parse_source, parse_stmt};
use mtx_ir::{
    print_tree, AssignOp, AssignTarget, BinaryOp, Dims, ExprKind, MatrixFn, MatrixRef, RelOp,
    StmtKind, VectorRef,
};

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expr = parse_rhs("1 + 2 * 3");
    let ExprKind::Binary { op, left, right } = expr.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(left.kind, ExprKind::Int(1));
    assert!(matches!(
        right.kind,
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn elementwise_levels_interleave_with_algebraic_ones() {
    // `.+` sits between `+` and `*`; `.*` binds tighter than `*`
    let tree = print_tree(&parse_source("x = a + b .+ c * d .* e;").program);
    assert_eq!(
        tree,
        "=\n|  x\n|  +\n|  |  a\n|  |  .+\n|  |  |  b\n|  |  |  *\n|  |  |  |  c\n|  |  |  |  .*\n|  |  |  |  |  d\n|  |  |  |  |  e"
    );
}

#[test]
fn subtraction_is_left_associative() {
    let tree = print_tree(&parse_source("x = 1 - 2 - 3;").program);
    assert_eq!(tree, "=\n|  x\n|  -\n|  |  -\n|  |  |  1\n|  |  |  2\n|  |  3");
}

#[test]
fn transpose_binds_tighter_than_unary_minus() {
    let expr = parse_rhs("-A'");
    let ExprKind::Neg(inner) = expr.kind else {
        panic!("expected negation");
    };
    assert!(matches!(inner.kind, ExprKind::Transpose(_)));
}

#[test]
fn bracket_list_of_vectors_is_a_matrix() {
    let expr = parse_rhs("[[1, 2], [3, 4]]");
    let ExprKind::Matrix(rows) = expr.kind else {
        panic!("expected matrix literal");
    };
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.is_vector_literal()));
}

#[test]
fn flat_bracket_list_is_a_vector() {
    let expr = parse_rhs("[1, 2.5, y]");
    let ExprKind::Vector(items) = expr.kind else {
        panic!("expected vector literal");
    };
    assert_eq!(items.len(), 3);
}

#[test]
fn empty_brackets_are_the_empty_matrix() {
    assert_eq!(parse_rhs("[]").kind, ExprKind::Matrix(Vec::new()));
}

#[test]
fn empty_rows_become_empty_vectors() {
    let expr = parse_rhs("[[], []]");
    let ExprKind::Matrix(rows) = expr.kind else {
        panic!("expected matrix literal");
    };
    assert!(rows
        .iter()
        .all(|row| row.kind == ExprKind::Vector(Vec::new())));
}

#[test]
fn matrix_constructors_take_one_or_two_sizes() {
    assert_eq!(
        parse_rhs("eye(3)").kind,
        ExprKind::MatrixFn {
            func: MatrixFn::Eye,
            dims: Dims::Square(3)
        }
    );
    assert_eq!(
        parse_rhs("zeros(2, -1)").kind,
        ExprKind::MatrixFn {
            func: MatrixFn::Zeros,
            dims: Dims::Rect(2, -1)
        }
    );
}

#[test]
fn element_references() {
    assert_eq!(
        parse_rhs("v[2]").kind,
        ExprKind::VectorElement(VectorRef {
            name: "v".into(),
            index: 2
        })
    );
    assert_eq!(
        parse_rhs("m[0, 1]").kind,
        ExprKind::MatrixElement(MatrixRef {
            name: "m".into(),
            row: 0,
            col: 1
        })
    );
}

#[test]
fn compound_and_element_assignments() {
    let StmtKind::Assign { op, target, .. } = parse_stmt("a *= 2;").kind else {
        panic!("expected assignment");
    };
    assert_eq!(op, AssignOp::MulAssign);
    assert_eq!(target, AssignTarget::Variable("a".into()));

    let StmtKind::Assign { op, target, .. } = parse_stmt("m[1, 2] = 0;").kind else {
        panic!("expected assignment");
    };
    assert_eq!(op, AssignOp::Assign);
    assert_eq!(target.name(), "m");
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let stmt = parse_stmt("if (a < 1) if (b > 2) x = 1; else x = 2;");
    let StmtKind::If {
        then_branch,
        else_branch,
        ..
    } = stmt.kind
    else {
        panic!("expected if");
    };
    assert!(else_branch.is_none());
    assert!(matches!(
        then_branch.kind,
        StmtKind::If {
            else_branch: Some(_),
            ..
        }
    ));
}

#[test]
fn conditions_are_relational() {
    let stmt = parse_stmt("while (k >= 0) k -= 1;");
    let StmtKind::While { cond, .. } = stmt.kind else {
        panic!("expected while");
    };
    assert!(matches!(
        cond.kind,
        ExprKind::Relational {
            op: RelOp::GtEq,
            ..
        }
    ));
}

#[test]
fn for_loop_with_block_body() {
    let stmt = parse_stmt("for i = 1:n {\n  print i;\n  break;\n}");
    let StmtKind::For { var, range, body } = stmt.kind else {
        panic!("expected for");
    };
    assert_eq!(var, "i");
    assert_eq!(range.start.kind, ExprKind::Int(1));
    let StmtKind::Block(block) = body.kind else {
        panic!("expected block body");
    };
    let lines: Vec<_> = block.stmts.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![2, 3]);
}

#[test]
fn print_accepts_mixed_items() {
    let StmtKind::Print(values) = parse_stmt("print \"a\", 1, x + 1;").kind else {
        panic!("expected print");
    };
    assert_eq!(values.len(), 3);
    assert_eq!(values[0].kind, ExprKind::Str("a".into()));
}

#[test]
fn statement_lines_follow_source() {
    let output = parse_source("x = 1;\n\ny = 2;\nreturn x;");
    let lines: Vec<_> = output.program.body.stmts.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![1, 3, 4]);
}

#[test]
fn empty_program() {
    let output = parse_source("# nothing here\n");
    assert!(!output.has_errors());
    assert!(output.program.body.stmts.is_empty());
}
