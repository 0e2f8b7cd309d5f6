//! Dense numeric arrays backing vector and matrix values.
//!
//! Storage is a flat row-major `Vec<f64>`. Integer arrays keep `f64`
//! storage and remember their dtype, which decides how elements print and
//! what element reads return. Operations follow numpy's behaviour for the
//! subset the language needs: rank 1 and rank 2 only, no broadcasting.

mod display;

use std::fmt;

use thiserror::Error;

/// Element type of an array.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DType {
    Int,
    Float,
}

impl DType {
    /// `Int` only if both are `Int`.
    pub const fn join(self, other: DType) -> DType {
        match (self, other) {
            (DType::Int, DType::Int) => DType::Int,
            _ => DType::Float,
        }
    }
}

/// Dimensions of an array.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArrayShape {
    Vector(usize),
    Matrix(usize, usize),
}

impl ArrayShape {
    /// Total element count.
    pub const fn len(self) -> usize {
        match self {
            ArrayShape::Vector(n) => n,
            ArrayShape::Matrix(rows, cols) => rows * cols,
        }
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub const fn rank(self) -> usize {
        match self {
            ArrayShape::Vector(_) => 1,
            ArrayShape::Matrix(..) => 2,
        }
    }
}

impl fmt::Display for ArrayShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayShape::Vector(n) => write!(f, "({n},)"),
            ArrayShape::Matrix(rows, cols) => write!(f, "({rows}, {cols})"),
        }
    }
}

/// A single element, typed by the array it came from.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    pub const fn dtype(self) -> DType {
        match self {
            Number::Int(_) => DType::Int,
            Number::Float(_) => DType::Float,
        }
    }
}

/// Result of indexing with a single index.
#[derive(Clone, PartialEq, Debug)]
pub enum Item {
    /// An element of a vector.
    Scalar(Number),
    /// A row of a matrix, as a vector.
    Row(Array),
}

/// Elementwise arithmetic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ElementOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ElementOp {
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            ElementOp::Add => a + b,
            ElementOp::Sub => a - b,
            ElementOp::Mul => a * b,
            ElementOp::Div => a / b,
        }
    }

    /// Division always produces floats.
    const fn result_dtype(self, left: DType, right: DType) -> DType {
        match self {
            ElementOp::Div => DType::Float,
            _ => left.join(right),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("operands could not be combined with shapes {left} {right}")]
    ShapeMismatch { left: ArrayShape, right: ArrayShape },
    #[error("matmul requires two matrices, got shapes {left} and {right}")]
    MatMulRank { left: ArrayShape, right: ArrayShape },
    #[error("matmul: inner dimensions of {left} and {right} do not match")]
    MatMulMismatch { left: ArrayShape, right: ArrayShape },
    #[error("index {index} is out of bounds for axis {axis} with size {size}")]
    IndexOutOfBounds { index: i64, axis: usize, size: usize },
    #[error("too many indices for array: array is 1-dimensional, but 2 were indexed")]
    TooManyIndices,
    #[error("matrix rows must be vectors, found shape {shape}")]
    RowNotVector { shape: ArrayShape },
    #[error("matrix rows have inhomogeneous lengths {lengths:?}")]
    InhomogeneousRows { lengths: Vec<usize> },
    #[error("cannot assign array of shape {got} to a row of length {expected}")]
    RowLength { got: ArrayShape, expected: usize },
    #[error("setting an array element with a sequence")]
    SequenceIntoElement,
    #[error("array is too big: ({rows}, {cols}) exceeds the maximum possible size")]
    TooBig { rows: usize, cols: usize },
}

/// Resolve a possibly negative index against an axis of length `size`.
fn normalize(index: i64, axis: usize, size: usize) -> Result<usize, ArrayError> {
    let signed_size = i64::try_from(size).unwrap_or(i64::MAX);
    let resolved = if index < 0 { index + signed_size } else { index };
    usize::try_from(resolved)
        .ok()
        .filter(|&i| i < size)
        .ok_or(ArrayError::IndexOutOfBounds { index, axis, size })
}

/// A rank 1 or rank 2 numeric array.
#[derive(Clone, Debug, PartialEq)]
pub struct Array {
    data: Vec<f64>,
    shape: ArrayShape,
    dtype: DType,
}

impl Array {
    /// A vector of `items`; integer dtype only if every item is an integer.
    pub fn from_numbers(items: &[Number]) -> Array {
        let dtype = if !items.is_empty() && items.iter().all(|n| n.dtype() == DType::Int) {
            DType::Int
        } else {
            DType::Float
        };
        Array {
            data: items.iter().map(|n| n.as_f64()).collect(),
            shape: ArrayShape::Vector(items.len()),
            dtype,
        }
    }

    /// Stack vectors into a matrix. No rows gives the empty `(0, 0)` matrix.
    pub fn from_rows(rows: &[Array]) -> Result<Array, ArrayError> {
        let mut lengths = Vec::with_capacity(rows.len());
        for row in rows {
            match row.shape {
                ArrayShape::Vector(n) => lengths.push(n),
                shape @ ArrayShape::Matrix(..) => return Err(ArrayError::RowNotVector { shape }),
            }
        }

        let cols = lengths.first().copied().unwrap_or(0);
        if lengths.iter().any(|&n| n != cols) {
            return Err(ArrayError::InhomogeneousRows { lengths });
        }

        let dtype = rows
            .iter()
            .map(|row| row.dtype)
            .reduce(DType::join)
            .unwrap_or(DType::Float);
        Ok(Array {
            data: rows.iter().flat_map(|row| row.data.iter().copied()).collect(),
            shape: ArrayShape::Matrix(rows.len(), cols),
            dtype,
        })
    }

    /// Element count of a `rows x cols` matrix, if one can be allocated.
    pub fn checked_len(rows: usize, cols: usize) -> Result<usize, ArrayError> {
        let max = isize::MAX.unsigned_abs() / std::mem::size_of::<f64>();
        rows.checked_mul(cols)
            .filter(|&len| len <= max)
            .ok_or(ArrayError::TooBig { rows, cols })
    }

    fn filled(rows: usize, cols: usize, value: f64) -> Array {
        Array {
            data: vec![value; rows * cols],
            shape: ArrayShape::Matrix(rows, cols),
            dtype: DType::Float,
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Array {
        Array::filled(rows, cols, 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Array {
        Array::filled(rows, cols, 1.0)
    }

    /// Ones on the main diagonal; rectangular shapes are allowed.
    pub fn eye(rows: usize, cols: usize) -> Array {
        let mut array = Array::zeros(rows, cols);
        for i in 0..rows.min(cols) {
            array.data[i * cols + i] = 1.0;
        }
        array
    }

    pub fn shape(&self) -> ArrayShape {
        self.shape
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn number_at(&self, offset: usize) -> Number {
        let value = self.data[offset];
        match self.dtype {
            DType::Int => Number::Int(value as i64),
            DType::Float => Number::Float(value),
        }
    }

    /// Convert `value` to this array's dtype for storage.
    fn stored(&self, value: Number) -> f64 {
        match self.dtype {
            DType::Int => value.as_f64().trunc(),
            DType::Float => value.as_f64(),
        }
    }

    /// Position-by-position `self op other`; shapes must match exactly.
    pub fn elementwise(&self, other: &Array, op: ElementOp) -> Result<Array, ArrayError> {
        if self.shape != other.shape {
            return Err(ArrayError::ShapeMismatch {
                left: self.shape,
                right: other.shape,
            });
        }
        Ok(Array {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| op.apply(a, b))
                .collect(),
            shape: self.shape,
            dtype: op.result_dtype(self.dtype, other.dtype),
        })
    }

    /// Matrix product of `(m, k)` and `(k, n)`.
    pub fn matmul(&self, other: &Array) -> Result<Array, ArrayError> {
        let (ArrayShape::Matrix(rows, inner), ArrayShape::Matrix(other_inner, cols)) =
            (self.shape, other.shape)
        else {
            return Err(ArrayError::MatMulRank {
                left: self.shape,
                right: other.shape,
            });
        };
        if inner != other_inner {
            return Err(ArrayError::MatMulMismatch {
                left: self.shape,
                right: other.shape,
            });
        }

        let mut data = vec![0.0; rows * cols];
        for row in 0..rows {
            for k in 0..inner {
                let lhs = self.data[row * inner + k];
                for col in 0..cols {
                    data[row * cols + col] += lhs * other.data[k * cols + col];
                }
            }
        }
        Ok(Array {
            data,
            shape: ArrayShape::Matrix(rows, cols),
            dtype: self.dtype.join(other.dtype),
        })
    }

    /// Swap rows and columns. Vectors are returned unchanged.
    pub fn transpose(&self) -> Array {
        let ArrayShape::Matrix(rows, cols) = self.shape else {
            return self.clone();
        };
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..cols {
            for i in 0..rows {
                data.push(self.data[i * cols + j]);
            }
        }
        Array {
            data,
            shape: ArrayShape::Matrix(cols, rows),
            dtype: self.dtype,
        }
    }

    pub fn neg(&self) -> Array {
        Array {
            data: self.data.iter().map(|x| -x).collect(),
            shape: self.shape,
            dtype: self.dtype,
        }
    }

    /// `a[i]`: an element of a vector or a row of a matrix.
    pub fn get(&self, index: i64) -> Result<Item, ArrayError> {
        match self.shape {
            ArrayShape::Vector(n) => {
                let i = normalize(index, 0, n)?;
                Ok(Item::Scalar(self.number_at(i)))
            }
            ArrayShape::Matrix(rows, cols) => {
                let i = normalize(index, 0, rows)?;
                Ok(Item::Row(Array {
                    data: self.data[i * cols..(i + 1) * cols].to_vec(),
                    shape: ArrayShape::Vector(cols),
                    dtype: self.dtype,
                }))
            }
        }
    }

    /// `a[i, j]` on a matrix.
    pub fn get2(&self, row: i64, col: i64) -> Result<Number, ArrayError> {
        let offset = self.offset2(row, col)?;
        Ok(self.number_at(offset))
    }

    /// `a[i] = x`: set a vector element, or fill a matrix row with `x`.
    pub fn set(&mut self, index: i64, value: Number) -> Result<(), ArrayError> {
        let stored = self.stored(value);
        match self.shape {
            ArrayShape::Vector(n) => {
                let i = normalize(index, 0, n)?;
                self.data[i] = stored;
            }
            ArrayShape::Matrix(rows, cols) => {
                let i = normalize(index, 0, rows)?;
                self.data[i * cols..(i + 1) * cols].fill(stored);
            }
        }
        Ok(())
    }

    /// `a[i] = v`: replace row `i` of a matrix with the vector `v`.
    pub fn set_row(&mut self, index: i64, row: &Array) -> Result<(), ArrayError> {
        let ArrayShape::Matrix(rows, cols) = self.shape else {
            return Err(ArrayError::SequenceIntoElement);
        };
        if row.shape != ArrayShape::Vector(cols) {
            return Err(ArrayError::RowLength {
                got: row.shape,
                expected: cols,
            });
        }
        let i = normalize(index, 0, rows)?;
        let truncate = self.dtype == DType::Int;
        for (slot, &value) in self.data[i * cols..(i + 1) * cols].iter_mut().zip(&row.data) {
            *slot = if truncate { value.trunc() } else { value };
        }
        Ok(())
    }

    /// `a[i, j] = x` on a matrix.
    pub fn set2(&mut self, row: i64, col: i64, value: Number) -> Result<(), ArrayError> {
        let offset = self.offset2(row, col)?;
        self.data[offset] = self.stored(value);
        Ok(())
    }

    fn offset2(&self, row: i64, col: i64) -> Result<usize, ArrayError> {
        let ArrayShape::Matrix(rows, cols) = self.shape else {
            return Err(ArrayError::TooManyIndices);
        };
        let i = normalize(row, 0, rows)?;
        let j = normalize(col, 1, cols)?;
        Ok(i * cols + j)
    }
}

#[cfg(test)]
mod tests;
