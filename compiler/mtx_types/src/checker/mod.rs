//! The type/shape checker walk.
//!
//! # Module Structure
//!
//! - `mod.rs`: checker state, statements, diagnostics
//! - `expr.rs`: expression inference, element references, literals

mod expr;

use mtx_diagnostic::{undefined_variable, Diagnostic, ErrorCode};
use mtx_ir::{AssignOp, AssignTarget, Block, Expr, Line, Program, Range, Stmt, StmtKind};
use mtx_stack::ensure_sufficient_stack;

use crate::operators::check_compound;
use crate::{Symbol, SymbolTable, TypeInfo};

/// Single-pass checker over a program.
///
/// The walk is flow-insensitive: assignments overwrite the recorded type of
/// a variable wherever they occur, and later references use whatever was
/// recorded last.
pub struct TypeChecker {
    symbols: SymbolTable,
    loop_depth: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            symbols: SymbolTable::new(),
            loop_depth: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn check_program(&mut self, program: &Program) {
        self.check_block(&program.body);
    }

    /// The symbol currently recorded for `name`.
    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    #[cold]
    fn error(&mut self, code: ErrorCode, line: Line, message: impl Into<String>) {
        self.diagnostics.push(
            Diagnostic::error(code)
                .at_line(line)
                .with_message(message),
        );
    }

    #[cold]
    fn undefined(&mut self, line: Line, name: &str) {
        self.diagnostics.push(undefined_variable(line, name));
    }

    /// Run `f` one loop level deeper.
    fn in_loop<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.loop_depth += 1;
        let result = f(self);
        self.loop_depth -= 1;
        result
    }

    fn check_block(&mut self, block: &Block) {
        for stmt in &block.stmts {
            self.check_stmt(stmt);
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| match &stmt.kind {
            StmtKind::Block(block) => self.check_block(block),
            StmtKind::Assign { op, target, value } => {
                self.check_assign(*op, target, value, stmt.line);
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.infer_expr(cond);
                self.check_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.check_stmt(else_branch);
                }
            }
            StmtKind::While { cond, body } => {
                self.infer_expr(cond);
                self.in_loop(|this| this.check_stmt(body));
            }
            StmtKind::For { var, range, body } => {
                self.check_range(range);
                self.symbols
                    .put(Symbol::new(var.clone(), Some(TypeInfo::INT)));
                self.in_loop(|this| this.check_stmt(body));
            }
            StmtKind::Break => {
                if self.loop_depth == 0 {
                    self.error(ErrorCode::E2013, stmt.line, "Break statement outside loop");
                }
            }
            StmtKind::Continue => {
                if self.loop_depth == 0 {
                    self.error(
                        ErrorCode::E2013,
                        stmt.line,
                        "Continue statement outside loop",
                    );
                }
            }
            StmtKind::Return(value) => {
                self.infer_expr(value);
            }
            StmtKind::Print(values) => {
                for value in values {
                    self.infer_expr(value);
                }
            }
        });
    }

    /// The right-hand side is always checked first.
    fn check_assign(&mut self, op: AssignOp, target: &AssignTarget, value: &Expr, line: Line) {
        let value_ty = self.infer_expr(value);

        match target {
            AssignTarget::Variable(name) if op == AssignOp::Assign => {
                self.symbols.put(Symbol::new(name.clone(), value_ty));
            }
            AssignTarget::Variable(name) => {
                let Some(symbol) = self.symbols.get(name) else {
                    self.undefined(line, name);
                    return;
                };
                let (Some(target_ty), Some(value_ty)) = (symbol.ty, value_ty) else {
                    return;
                };
                match check_compound(op, &target_ty, &value_ty) {
                    Ok(result) => self.symbols.put(Symbol::new(name.clone(), Some(result))),
                    Err(err) => self.error(err.code, line, err.message),
                }
            }
            AssignTarget::VectorElement(r) => {
                self.check_vector_ref(r, line);
            }
            AssignTarget::MatrixElement(r) => {
                self.check_matrix_ref(r, line);
            }
        }
    }

    fn check_range(&mut self, range: &Range) {
        let start = self.infer_expr(&range.start);
        let end = self.infer_expr(&range.end);
        if start.is_some_and(|ty| !ty.kind.is_numeric()) {
            self.error(ErrorCode::E2012, range.line, "Range start must be numeric");
        }
        if end.is_some_and(|ty| !ty.kind.is_numeric()) {
            self.error(ErrorCode::E2012, range.line, "Range end must be numeric");
        }
    }
}
