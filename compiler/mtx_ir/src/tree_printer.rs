//! Indented tree rendering of a program.
//!
//! Every node is printed on its own line, prefixed by one `|  ` per nesting
//! level. Blocks are transparent: their statements print at the block's own
//! depth.

use mtx_stack::ensure_sufficient_stack;

use crate::ast::{AssignTarget, Block, Expr, ExprKind, Program, Range, Stmt, StmtKind};
use crate::format_float;

const INDENT: &str = "|  ";

/// Render `program` as an indented tree.
pub fn print_tree(program: &Program) -> String {
    let mut printer = TreePrinter::default();
    printer.block(&program.body, 0);
    printer.lines.join("\n")
}

#[derive(Default)]
struct TreePrinter {
    lines: Vec<String>,
}

impl TreePrinter {
    fn line(&mut self, indent: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", INDENT.repeat(indent), text.as_ref()));
    }

    fn block(&mut self, block: &Block, indent: usize) {
        for stmt in &block.stmts {
            self.stmt(stmt, indent);
        }
    }

    fn stmt(&mut self, stmt: &Stmt, indent: usize) {
        ensure_sufficient_stack(|| match &stmt.kind {
            StmtKind::Block(block) => self.block(block, indent),
            StmtKind::Assign { op, target, value } => {
                self.line(indent, op.as_symbol());
                self.target(target, indent + 1);
                self.expr(value, indent + 1);
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.line(indent, "IF");
                self.expr(cond, indent + 1);
                self.line(indent, "THEN");
                self.stmt(then_branch, indent + 1);
                if let Some(else_branch) = else_branch {
                    self.line(indent, "ELSE");
                    self.stmt(else_branch, indent + 1);
                }
            }
            StmtKind::While { cond, body } => {
                self.line(indent, "WHILE");
                self.expr(cond, indent + 1);
                self.stmt(body, indent + 1);
            }
            StmtKind::For { var, range, body } => {
                self.line(indent, "FOR");
                self.line(indent + 1, var);
                self.range(range, indent + 1);
                self.stmt(body, indent + 1);
            }
            StmtKind::Break => self.line(indent, "BREAK"),
            StmtKind::Continue => self.line(indent, "CONTINUE"),
            StmtKind::Return(expr) => {
                self.line(indent, "RETURN");
                self.expr(expr, indent + 1);
            }
            StmtKind::Print(values) => {
                self.line(indent, "PRINT");
                for value in values {
                    self.expr(value, indent + 1);
                }
            }
        });
    }

    fn range(&mut self, range: &Range, indent: usize) {
        self.line(indent, "RANGE");
        self.expr(&range.start, indent + 1);
        self.expr(&range.end, indent + 1);
    }

    fn target(&mut self, target: &AssignTarget, indent: usize) {
        match target {
            AssignTarget::Variable(name) => self.line(indent, name),
            AssignTarget::VectorElement(r) => {
                self.line(indent, "REF");
                self.line(indent + 1, &r.name);
                self.line(indent + 1, r.index.to_string());
            }
            AssignTarget::MatrixElement(r) => {
                self.line(indent, "REF");
                self.line(indent + 1, &r.name);
                self.line(indent + 1, r.row.to_string());
                self.line(indent + 1, r.col.to_string());
            }
        }
    }

    fn expr(&mut self, expr: &Expr, indent: usize) {
        ensure_sufficient_stack(|| match &expr.kind {
            ExprKind::Int(value) => self.line(indent, value.to_string()),
            ExprKind::Float(value) => self.line(indent, format_float(*value)),
            ExprKind::Str(value) => self.line(indent, format!("\"{value}\"")),
            ExprKind::Variable(name) => self.line(indent, name),
            ExprKind::VectorElement(r) => {
                self.target(&AssignTarget::VectorElement(r.clone()), indent);
            }
            ExprKind::MatrixElement(r) => {
                self.target(&AssignTarget::MatrixElement(r.clone()), indent);
            }
            ExprKind::Binary { op, left, right } => {
                self.line(indent, op.as_symbol());
                self.expr(left, indent + 1);
                self.expr(right, indent + 1);
            }
            ExprKind::Relational { op, left, right } => {
                self.line(indent, op.as_symbol());
                self.expr(left, indent + 1);
                self.expr(right, indent + 1);
            }
            ExprKind::Vector(items) | ExprKind::Matrix(items) => {
                self.line(indent, "VECTOR");
                for item in items {
                    self.expr(item, indent + 1);
                }
            }
            ExprKind::MatrixFn { func, dims } => {
                self.line(indent, func.name());
                self.line(indent + 1, dims.to_string());
            }
            ExprKind::Neg(inner) => {
                self.line(indent, "-");
                self.expr(inner, indent + 1);
            }
            ExprKind::Transpose(inner) => {
                self.line(indent, "TRANSPOSE");
                self.expr(inner, indent + 1);
            }
        });
    }
}

#[cfg(test)]
mod tests;
