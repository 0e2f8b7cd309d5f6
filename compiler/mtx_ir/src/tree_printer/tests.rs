use pretty_assertions::assert_eq;

use super::print_tree;
use crate::ast::{
    AssignOp, AssignTarget, BinaryOp, Dims, Expr, ExprKind, MatrixFn, Program, Range, RelOp, Stmt,
    StmtKind, VectorRef,
};

fn assign(name: &str, value: Expr) -> Stmt {
    Stmt::new(
        StmtKind::Assign {
            op: AssignOp::Assign,
            target: AssignTarget::Variable(name.to_string()),
            value,
        },
        1,
    )
}

#[test]
fn prints_assignment_of_binary_expression() {
    let program = Program::new(vec![assign(
        "x",
        Expr::binary(BinaryOp::DotMul, Expr::variable("a", 1), Expr::int(2, 1), 1),
    )]);

    assert_eq!(print_tree(&program), "=\n|  x\n|  .*\n|  |  a\n|  |  2");
}

#[test]
fn prints_if_else_branches() {
    let cond = Expr::relational(RelOp::Lt, Expr::variable("a", 1), Expr::float(1.0, 1), 1);
    let program = Program::new(vec![Stmt::new(
        StmtKind::If {
            cond,
            then_branch: Box::new(Stmt::new(StmtKind::Break, 1)),
            else_branch: Some(Box::new(Stmt::new(StmtKind::Continue, 1))),
        },
        1,
    )]);

    assert_eq!(
        print_tree(&program),
        "IF\n|  <\n|  |  a\n|  |  1.0\nTHEN\n|  BREAK\nELSE\n|  CONTINUE"
    );
}

#[test]
fn prints_for_loop_with_range_and_element_reference() {
    let body = Stmt::new(
        StmtKind::Print(vec![
            Expr::string("v", 2),
            Expr::new(
                ExprKind::VectorElement(VectorRef {
                    name: "v".to_string(),
                    index: 0,
                }),
                2,
            ),
        ]),
        2,
    );
    let program = Program::new(vec![Stmt::new(
        StmtKind::For {
            var: "i".to_string(),
            range: Range {
                start: Expr::int(1, 1),
                end: Expr::int(3, 1),
                line: 1,
            },
            body: Box::new(body),
        },
        1,
    )]);

    assert_eq!(
        print_tree(&program),
        "FOR\n|  i\n|  RANGE\n|  |  1\n|  |  3\n|  PRINT\n|  |  \"v\"\n|  |  REF\n|  |  |  v\n|  |  |  0"
    );
}

#[test]
fn prints_matrix_constructors_and_unary_nodes() {
    let value = Expr::new(
        ExprKind::Transpose(Box::new(Expr::new(
            ExprKind::Neg(Box::new(Expr::new(
                ExprKind::MatrixFn {
                    func: MatrixFn::Eye,
                    dims: Dims::Rect(2, 3),
                },
                1,
            ))),
            1,
        ))),
        1,
    );
    let program = Program::new(vec![assign("m", value)]);

    assert_eq!(
        print_tree(&program),
        "=\n|  m\n|  TRANSPOSE\n|  |  -\n|  |  |  eye\n|  |  |  |  (2, 3)"
    );
}

#[test]
fn nested_blocks_are_transparent() {
    let inner = Stmt::new(
        StmtKind::Block(crate::Block {
            stmts: vec![Stmt::new(StmtKind::Break, 2)],
            line: 2,
        }),
        2,
    );
    let program = Program::new(vec![inner]);

    assert_eq!(print_tree(&program), "BREAK");
}
