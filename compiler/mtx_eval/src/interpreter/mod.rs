//! Tree-walking interpreter.
//!
//! Statements execute to a [`Signal`]; expressions evaluate to exactly one
//! [`Value`]. Both walks run on the stack guard, so deeply nested programs
//! do not overflow.
//!
//! The interpreter trusts the type checker: it performs no static shape
//! checks of its own, and any combination the checker would reject but
//! that reaches an operation anyway becomes a runtime fault.
//!
//! - `builder.rs`: [`InterpreterBuilder`]
//! - `eval_expr.rs`: expression evaluation, literals, element reads

mod builder;
mod eval_expr;

pub use builder::InterpreterBuilder;

use mtx_ir::{
    AssignOp, AssignTarget, BinaryOp, Block, Expr, Line, Program, Range, Stmt, StmtKind,
};
use mtx_stack::ensure_sufficient_stack;

use crate::errors::{not_indexable, undefined_variable, EvalError, EvalErrorKind, EvalResult};
use crate::exec::control::{is_truthy, loop_range, LoopAction, Signal};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::{MemoryStack, Number, Value};

/// Executes one program against a runtime environment.
pub struct Interpreter {
    env: MemoryStack,
    print_handler: SharedPrintHandler,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach `line` to an operation's fault.
fn at(line: Line) -> impl FnOnce(EvalErrorKind) -> EvalError {
    move |kind| EvalError::new(kind, line)
}

impl Interpreter {
    /// An interpreter with a fresh environment printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn env(&self) -> &MemoryStack {
        &self.env
    }

    pub fn into_env(self) -> MemoryStack {
        self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Run `program` to completion.
    ///
    /// Returns the value of the `return` that ended the run, or `None` if
    /// the program ran off its end.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        let signal = self.exec_block(&program.body)?;
        tracing::debug!(?signal, "run complete");
        match signal {
            Signal::Return(value) => Ok(Some(value)),
            Signal::Normal | Signal::Break | Signal::Continue => Ok(None),
        }
    }

    fn exec_block(&mut self, block: &Block) -> EvalResult<Signal> {
        for stmt in &block.stmts {
            let signal = self.exec_stmt(stmt)?;
            if signal != Signal::Normal {
                return Ok(signal);
            }
        }
        Ok(Signal::Normal)
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<Signal> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> EvalResult<Signal> {
        match &stmt.kind {
            StmtKind::Block(block) => self.exec_block(block),
            StmtKind::Assign { op, target, value } => {
                self.exec_assign(*op, target, value, stmt.line)?;
                Ok(Signal::Normal)
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(cond)? {
                    self.exec_stmt(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch)
                } else {
                    Ok(Signal::Normal)
                }
            }
            StmtKind::While { cond, body } => {
                while self.eval_condition(cond)? {
                    let signal = self.exec_stmt(body)?;
                    if let LoopAction::Exit(signal) = LoopAction::after_body(signal) {
                        return Ok(signal);
                    }
                }
                Ok(Signal::Normal)
            }
            StmtKind::For { var, range, body } => self.exec_for(var, range, body),
            StmtKind::Break => {
                tracing::trace!(line = stmt.line, "break");
                Ok(Signal::Break)
            }
            StmtKind::Continue => {
                tracing::trace!(line = stmt.line, "continue");
                Ok(Signal::Continue)
            }
            StmtKind::Return(value) => {
                let value = self.eval_expr(value)?;
                tracing::trace!(line = stmt.line, "return");
                Ok(Signal::Return(value))
            }
            StmtKind::Print(values) => {
                let mut parts = Vec::with_capacity(values.len());
                for value in values {
                    parts.push(self.eval_expr(value)?.to_string());
                }
                self.print_handler.println(&parts.join(" "));
                Ok(Signal::Normal)
            }
        }
    }

    fn eval_condition(&mut self, cond: &Expr) -> EvalResult<bool> {
        let value = self.eval_expr(cond)?;
        is_truthy(&value).map_err(at(cond.line))
    }

    /// The range is evaluated once; the loop variable is left holding the
    /// last value it took.
    fn exec_for(&mut self, var: &str, range: &Range, body: &Stmt) -> EvalResult<Signal> {
        let start = self.eval_expr(&range.start)?;
        let end = self.eval_expr(&range.end)?;
        for i in loop_range(&start, &end).map_err(at(range.line))? {
            self.env.set(var, Value::Int(i));
            let signal = self.exec_stmt(body)?;
            if let LoopAction::Exit(signal) = LoopAction::after_body(signal) {
                return Ok(signal);
            }
        }
        Ok(Signal::Normal)
    }

    fn exec_assign(
        &mut self,
        op: AssignOp,
        target: &AssignTarget,
        value: &Expr,
        line: Line,
    ) -> EvalResult<()> {
        let value = self.eval_expr(value)?;

        match target {
            AssignTarget::Variable(name) => {
                let value = match op.base_op() {
                    None => value,
                    Some(base) => {
                        let current = self
                            .env
                            .lookup(name)
                            .ok_or_else(|| undefined_variable(name))
                            .map_err(at(line))?;
                        evaluate_binary(current, &value, compound_op(base, current, &value))
                            .map_err(at(line))?
                    }
                };
                self.env.set(name, value);
                Ok(())
            }
            AssignTarget::VectorElement(r) => {
                self.store_element(&r.name, line, |array| match &value {
                    Value::Array(row) => array.set_row(r.index, row).map_err(Into::into),
                    other => {
                        let number = element_number(other)?;
                        array.set(r.index, number).map_err(Into::into)
                    }
                })
            }
            AssignTarget::MatrixElement(r) => self.store_element(&r.name, line, |array| {
                let number = element_number(&value)?;
                array.set2(r.row, r.col, number).map_err(Into::into)
            }),
        }
    }

    /// Mutate the array bound to `name` in place.
    fn store_element(
        &mut self,
        name: &str,
        line: Line,
        store: impl FnOnce(&mut crate::Array) -> Result<(), EvalErrorKind>,
    ) -> EvalResult<()> {
        match self.env.get_mut(name) {
            Some(Value::Array(array)) => store(array).map_err(at(line)),
            Some(other) => Err(EvalError::new(not_indexable(name, other.type_name()), line)),
            None => Err(EvalError::new(undefined_variable(name), line)),
        }
    }
}

/// `*=` on two arrays multiplies elementwise; the target keeps its shape.
fn compound_op(base: BinaryOp, current: &Value, value: &Value) -> BinaryOp {
    match (base, current, value) {
        (BinaryOp::Mul, Value::Array(_), Value::Array(_)) => BinaryOp::DotMul,
        _ => base,
    }
}

fn element_number(value: &Value) -> Result<Number, EvalErrorKind> {
    value.as_number().ok_or(EvalErrorKind::InvalidElement {
        type_name: value.type_name(),
    })
}

/// Run `program` against `env`, printing to stdout.
pub fn run(program: &Program, env: MemoryStack) -> EvalResult<Option<Value>> {
    InterpreterBuilder::new().env(env).build().run(program)
}
