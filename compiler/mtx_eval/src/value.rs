//! Runtime values.

use std::fmt;

use mtx_ir::format_float;

use crate::array::{Array, Number};

/// A value produced by evaluating an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Array(Array),
    /// Result of reading a variable that was never assigned.
    Null,
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(array) if array.rank() == 1 => "vector",
            Value::Array(_) => "matrix",
            Value::Null => "null",
        }
    }

    /// The value as an array element, if it is a number.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(x) => Some(Number::Float(*x)),
            _ => None,
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(n) => Value::Int(n),
            Number::Float(x) => Value::Float(x),
        }
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Str(s) => f.write_str(s),
            Value::Array(array) => write!(f, "{array}"),
            Value::Null => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_print_like_a_script() {
        assert_eq!(Value::Int(1).to_string(), "1");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::string("a b").to_string(), "a b");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn type_names() {
        let v = Array::from_numbers(&[Number::Int(1)]);
        assert_eq!(Value::from(v).type_name(), "vector");
        assert_eq!(Value::from(Array::eye(2, 2)).type_name(), "matrix");
        assert_eq!(Value::Null.type_name(), "null");
    }

    #[test]
    fn numbers_convert_both_ways() {
        assert_eq!(Value::from(Number::Int(3)), Value::Int(3));
        assert_eq!(Value::Float(0.5).as_number(), Some(Number::Float(0.5)));
        assert_eq!(Value::string("x").as_number(), None);
    }
}
