//! Static kinds and shapes.

use std::fmt;

/// Coarse static category of a value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    Int,
    Float,
    Str,
    Vector,
    Matrix,
}

impl Kind {
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "string",
            Kind::Vector => "vector",
            Kind::Matrix => "matrix",
        }
    }

    /// `int` or `float`.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Kind::Int | Kind::Float)
    }

    /// `vector` or `matrix`.
    pub const fn is_array(self) -> bool {
        matches!(self, Kind::Vector | Kind::Matrix)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dimensions of an array.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Shape {
    /// `(n,)`
    Vector(usize),
    /// `(rows, cols)`
    Matrix(usize, usize),
}

impl Shape {
    /// Matrix shape with rows and columns swapped. Vectors are unchanged.
    #[must_use]
    pub const fn transposed(self) -> Shape {
        match self {
            Shape::Vector(n) => Shape::Vector(n),
            Shape::Matrix(rows, cols) => Shape::Matrix(cols, rows),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Vector(n) => write!(f, "({n},)"),
            Shape::Matrix(rows, cols) => write!(f, "({rows}, {cols})"),
        }
    }
}

/// Static type of an expression: a kind and, for arrays, a shape.
///
/// An array whose shape could not be inferred has `shape: None`. Scalars and
/// strings never carry a shape.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeInfo {
    pub kind: Kind,
    pub shape: Option<Shape>,
}

impl TypeInfo {
    pub const INT: TypeInfo = TypeInfo::scalar(Kind::Int);
    pub const FLOAT: TypeInfo = TypeInfo::scalar(Kind::Float);
    pub const STR: TypeInfo = TypeInfo::scalar(Kind::Str);

    pub const fn scalar(kind: Kind) -> Self {
        TypeInfo { kind, shape: None }
    }

    pub const fn vector(len: usize) -> Self {
        TypeInfo {
            kind: Kind::Vector,
            shape: Some(Shape::Vector(len)),
        }
    }

    pub const fn matrix(rows: usize, cols: usize) -> Self {
        TypeInfo {
            kind: Kind::Matrix,
            shape: Some(Shape::Matrix(rows, cols)),
        }
    }

    /// An array of `kind` whose shape is unknown.
    pub const fn unshaped(kind: Kind) -> Self {
        TypeInfo { kind, shape: None }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Some(shape) => write!(f, "{} {shape}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Shape text for messages; `unknown` when absent.
pub(crate) fn shape_text(shape: Option<Shape>) -> String {
    shape.map_or_else(|| "unknown".to_string(), |s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_display_like_tuples() {
        assert_eq!(Shape::Vector(3).to_string(), "(3,)");
        assert_eq!(Shape::Matrix(2, 3).to_string(), "(2, 3)");
        assert_eq!(shape_text(None), "unknown");
    }

    #[test]
    fn transposition_swaps_matrix_axes() {
        assert_eq!(Shape::Matrix(2, 5).transposed(), Shape::Matrix(5, 2));
        assert_eq!(Shape::Vector(4).transposed(), Shape::Vector(4));
    }

    #[test]
    fn type_info_display() {
        assert_eq!(TypeInfo::INT.to_string(), "int");
        assert_eq!(TypeInfo::matrix(1, 2).to_string(), "matrix (1, 2)");
        assert_eq!(TypeInfo::unshaped(Kind::Vector).to_string(), "vector");
    }

    #[test]
    fn kind_classes() {
        assert!(Kind::Float.is_numeric());
        assert!(!Kind::Str.is_numeric());
        assert!(Kind::Matrix.is_array());
        assert!(!Kind::Int.is_array());
    }
}
