//! Expression inference.

use std::collections::BTreeSet;

use mtx_diagnostic::ErrorCode;
use mtx_ir::{Dims, Expr, ExprKind, Line, MatrixFn, MatrixRef, VectorRef};
use mtx_stack::ensure_sufficient_stack;

use super::TypeChecker;
use crate::operators::check_binary;
use crate::{Kind, Shape, TypeInfo};

/// `true` if `index` lies outside `0..size`.
fn out_of_bounds(index: i64, size: usize) -> bool {
    !matches!(usize::try_from(index), Ok(i) if i < size)
}

impl TypeChecker {
    /// Infer the static type of `expr`, reporting any problems.
    ///
    /// Returns `None` when the type is unknown because of an earlier error.
    pub fn infer_expr(&mut self, expr: &Expr) -> Option<TypeInfo> {
        ensure_sufficient_stack(|| self.infer_expr_inner(expr))
    }

    fn infer_expr_inner(&mut self, expr: &Expr) -> Option<TypeInfo> {
        let line = expr.line;
        match &expr.kind {
            ExprKind::Int(_) => Some(TypeInfo::INT),
            ExprKind::Float(_) => Some(TypeInfo::FLOAT),
            ExprKind::Str(_) => Some(TypeInfo::STR),
            ExprKind::Variable(name) => match self.symbols.get(name) {
                Some(symbol) => symbol.ty,
                None => {
                    self.undefined(line, name);
                    None
                }
            },
            ExprKind::VectorElement(r) => self.check_vector_ref(r, line),
            ExprKind::MatrixElement(r) => self.check_matrix_ref(r, line),
            ExprKind::Binary { op, left, right } => {
                let left = self.infer_expr(left);
                let right = self.infer_expr(right);
                let (left, right) = (left?, right?);
                match check_binary(*op, &left, &right) {
                    Ok(ty) => Some(ty),
                    Err(err) => {
                        self.error(err.code, line, err.message);
                        None
                    }
                }
            }
            ExprKind::Relational { op, left, right } => {
                let left = self.infer_expr(left);
                let right = self.infer_expr(right);
                if let (Some(left), Some(right)) = (left, right) {
                    if !left.kind.is_numeric() || !right.kind.is_numeric() {
                        self.error(
                            ErrorCode::E2005,
                            line,
                            format!("Relational operator {op} requires scalar operands"),
                        );
                    }
                }
                Some(TypeInfo::INT)
            }
            ExprKind::Vector(items) => Some(self.infer_vector(items)),
            ExprKind::Matrix(rows) => Some(self.infer_matrix(rows, line)),
            ExprKind::MatrixFn { func, dims } => self.infer_matrix_fn(*func, *dims, line),
            ExprKind::Neg(inner) => {
                let ty = self.infer_expr(inner)?;
                if ty.kind == Kind::Str {
                    self.error(
                        ErrorCode::E2014,
                        line,
                        format!("Unary minus not applicable to {}", ty.kind),
                    );
                    return None;
                }
                Some(ty)
            }
            ExprKind::Transpose(inner) => {
                let ty = self.infer_expr(inner)?;
                if ty.kind != Kind::Matrix {
                    self.error(
                        ErrorCode::E2015,
                        line,
                        format!("Transpose only applicable to matrices, not {}", ty.kind),
                    );
                    return None;
                }
                Some(TypeInfo {
                    kind: Kind::Matrix,
                    shape: ty.shape.map(Shape::transposed),
                })
            }
        }
    }

    /// `v[i]`: an element of a vector, or a row of a matrix.
    pub(super) fn check_vector_ref(&mut self, r: &VectorRef, line: Line) -> Option<TypeInfo> {
        let Some(symbol) = self.symbols.get(&r.name) else {
            self.undefined(line, &r.name);
            return None;
        };
        let ty = symbol.ty?;

        match (ty.kind, ty.shape) {
            (Kind::Vector, shape) => {
                if let Some(Shape::Vector(size)) = shape {
                    if out_of_bounds(r.index, size) {
                        self.error(
                            ErrorCode::E2009,
                            line,
                            format!("Index {} out of bounds for vector of size {size}", r.index),
                        );
                    }
                }
                Some(TypeInfo::FLOAT)
            }
            (Kind::Matrix, Some(Shape::Matrix(rows, cols))) => {
                if out_of_bounds(r.index, rows) {
                    self.error(
                        ErrorCode::E2009,
                        line,
                        format!(
                            "Row index {} out of bounds for matrix with {rows} rows",
                            r.index
                        ),
                    );
                }
                Some(TypeInfo::vector(cols))
            }
            (Kind::Matrix, _) => Some(TypeInfo::unshaped(Kind::Vector)),
            _ => {
                self.error(
                    ErrorCode::E2007,
                    line,
                    format!("Variable '{}' is not indexable", r.name),
                );
                None
            }
        }
    }

    /// `m[i, j]`: an element of a matrix.
    pub(super) fn check_matrix_ref(&mut self, r: &MatrixRef, line: Line) -> Option<TypeInfo> {
        let Some(symbol) = self.symbols.get(&r.name) else {
            self.undefined(line, &r.name);
            return None;
        };
        let ty = symbol.ty?;

        if ty.kind != Kind::Matrix {
            self.error(
                ErrorCode::E2008,
                line,
                format!("Variable '{}' is not a matrix", r.name),
            );
            return None;
        }
        if let Some(Shape::Matrix(rows, cols)) = ty.shape {
            if out_of_bounds(r.row, rows) {
                self.error(
                    ErrorCode::E2009,
                    line,
                    format!("Row index {} out of bounds for matrix with {rows} rows", r.row),
                );
            }
            if out_of_bounds(r.col, cols) {
                self.error(
                    ErrorCode::E2009,
                    line,
                    format!(
                        "Column index {} out of bounds for matrix with {cols} columns",
                        r.col
                    ),
                );
            }
        }
        Some(TypeInfo::FLOAT)
    }

    /// Elements must be numeric scalars; the shape is the element count
    /// regardless.
    fn infer_vector(&mut self, items: &[Expr]) -> TypeInfo {
        for (i, item) in items.iter().enumerate() {
            if let Some(ty) = self.infer_expr(item) {
                if !ty.kind.is_numeric() {
                    self.error(
                        ErrorCode::E2016,
                        item.line,
                        format!(
                            "Vector element {i} must be a numeric scalar, found {}",
                            ty.kind
                        ),
                    );
                }
            }
        }
        TypeInfo::vector(items.len())
    }

    /// Every row must be a vector literal, all of the same length.
    fn infer_matrix(&mut self, rows: &[Expr], line: Line) -> TypeInfo {
        if rows.is_empty() {
            return TypeInfo::matrix(0, 0);
        }

        let mut well_formed = true;
        let mut sizes = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let ExprKind::Vector(items) = &row.kind else {
                self.error(
                    ErrorCode::E2010,
                    line,
                    format!("Matrix row {i} is not a vector"),
                );
                well_formed = false;
                continue;
            };
            self.infer_vector(items);
            sizes.push(items.len());
        }

        let distinct: BTreeSet<usize> = sizes.iter().copied().collect();
        if distinct.len() > 1 {
            let listed = distinct
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            self.error(
                ErrorCode::E2010,
                line,
                format!("Matrix rows have different sizes: {{{listed}}}"),
            );
            well_formed = false;
        }

        match (well_formed, sizes.first()) {
            (true, Some(&cols)) => TypeInfo::matrix(rows.len(), cols),
            _ => TypeInfo::unshaped(Kind::Matrix),
        }
    }

    fn infer_matrix_fn(&mut self, func: MatrixFn, dims: Dims, line: Line) -> Option<TypeInfo> {
        let (rows, cols) = dims.rows_cols();
        let (Ok(rows_n), Ok(cols_n)) = (usize::try_from(rows), usize::try_from(cols)) else {
            self.report_bad_dims(func, dims, line);
            return None;
        };
        if rows_n == 0 || cols_n == 0 {
            self.report_bad_dims(func, dims, line);
            return None;
        }
        Some(TypeInfo::matrix(rows_n, cols_n))
    }

    #[cold]
    fn report_bad_dims(&mut self, func: MatrixFn, dims: Dims, line: Line) {
        let message = match dims {
            Dims::Square(n) => format!("Matrix function '{func}' requires positive size, got {n}"),
            Dims::Rect(..) => {
                format!("Matrix function '{func}' requires positive dimensions, got {dims}")
            }
        };
        self.error(ErrorCode::E2011, line, message);
    }
}
