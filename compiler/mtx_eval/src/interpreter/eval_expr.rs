//! Expression evaluation.

use mtx_ir::{Dims, Expr, ExprKind, MatrixFn};
use mtx_stack::ensure_sufficient_stack;

use super::{at, Interpreter};
use crate::array::{Array, Item};
use crate::errors::{not_indexable, EvalErrorKind, EvalResult};
use crate::operators::{evaluate_binary, evaluate_relational};
use crate::unary_operators::{evaluate_neg, evaluate_transpose};
use crate::Value;

impl Interpreter {
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        let line = expr.line;
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Float(x) => Ok(Value::Float(*x)),
            ExprKind::Str(s) => Ok(Value::string(s.as_str())),
            ExprKind::Variable(name) => Ok(self.env.get(name)),
            ExprKind::VectorElement(r) => {
                let item = self
                    .indexed(&r.name)
                    .and_then(|array| array.get(r.index).map_err(Into::into))
                    .map_err(at(line))?;
                Ok(match item {
                    Item::Scalar(number) => Value::from(number),
                    Item::Row(row) => Value::Array(row),
                })
            }
            ExprKind::MatrixElement(r) => {
                let number = self
                    .indexed(&r.name)
                    .and_then(|array| array.get2(r.row, r.col).map_err(Into::into))
                    .map_err(at(line))?;
                Ok(Value::from(number))
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(&left, &right, *op).map_err(at(line))
            }
            ExprKind::Relational { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_relational(&left, &right, *op).map_err(at(line))
            }
            ExprKind::Vector(items) => self.eval_vector(items).map(Value::Array),
            ExprKind::Matrix(rows) => {
                let mut arrays = Vec::with_capacity(rows.len());
                for row in rows {
                    match self.eval_expr(row)? {
                        Value::Array(array) => arrays.push(array),
                        other => {
                            let kind = EvalErrorKind::NonVectorRow {
                                type_name: other.type_name(),
                            };
                            return Err(at(row.line)(kind));
                        }
                    }
                }
                let matrix = Array::from_rows(&arrays)
                    .map_err(EvalErrorKind::from)
                    .map_err(at(line))?;
                Ok(Value::Array(matrix))
            }
            ExprKind::MatrixFn { func, dims } => {
                matrix_fn(*func, *dims).map(Value::Array).map_err(at(line))
            }
            ExprKind::Neg(inner) => {
                let value = self.eval_expr(inner)?;
                evaluate_neg(&value).map_err(at(line))
            }
            ExprKind::Transpose(inner) => {
                let value = self.eval_expr(inner)?;
                evaluate_transpose(&value).map_err(at(line))
            }
        }
    }

    /// The array bound to `name`.
    fn indexed(&self, name: &str) -> Result<&Array, EvalErrorKind> {
        match self.env.lookup(name) {
            Some(Value::Array(array)) => Ok(array),
            Some(other) => Err(not_indexable(name, other.type_name())),
            None => Err(not_indexable(name, Value::Null.type_name())),
        }
    }

    /// Elements are evaluated in source order.
    fn eval_vector(&mut self, items: &[Expr]) -> EvalResult<Array> {
        let mut numbers = Vec::with_capacity(items.len());
        for item in items {
            let value = self.eval_expr(item)?;
            match value.as_number() {
                Some(number) => numbers.push(number),
                None => {
                    let kind = EvalErrorKind::NonNumericElement {
                        type_name: value.type_name(),
                    };
                    return Err(at(item.line)(kind));
                }
            }
        }
        Ok(Array::from_numbers(&numbers))
    }
}

fn matrix_fn(func: MatrixFn, dims: Dims) -> Result<Array, EvalErrorKind> {
    let (rows, cols) = dims.rows_cols();
    let (Ok(rows), Ok(cols)) = (usize::try_from(rows), usize::try_from(cols)) else {
        return Err(EvalErrorKind::NegativeDimensions {
            dims: dims.to_string(),
        });
    };
    Array::checked_len(rows, cols)?;
    Ok(match func {
        MatrixFn::Zeros => Array::zeros(rows, cols),
        MatrixFn::Ones => Array::ones(rows, cols),
        MatrixFn::Eye => Array::eye(rows, cols),
    })
}
