#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn ints(values: &[i64]) -> Array {
    let numbers: Vec<Number> = values.iter().map(|&n| Number::Int(n)).collect();
    Array::from_numbers(&numbers)
}

fn floats(values: &[f64]) -> Array {
    let numbers: Vec<Number> = values.iter().map(|&x| Number::Float(x)).collect();
    Array::from_numbers(&numbers)
}

fn int_matrix(rows: &[&[i64]]) -> Array {
    let rows: Vec<Array> = rows.iter().map(|row| ints(row)).collect();
    Array::from_rows(&rows).unwrap()
}

#[test]
fn dtype_follows_elements() {
    assert_eq!(ints(&[1, 2]).dtype(), DType::Int);
    let mixed = Array::from_numbers(&[Number::Int(1), Number::Float(0.5)]);
    assert_eq!(mixed.dtype(), DType::Float);
    assert_eq!(Array::from_numbers(&[]).dtype(), DType::Float);
}

#[test]
fn from_rows_stacks_vectors() {
    let m = int_matrix(&[&[1, 2, 3], &[4, 5, 6]]);
    assert_eq!(m.shape(), ArrayShape::Matrix(2, 3));
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(
        Array::from_rows(&[]).unwrap().shape(),
        ArrayShape::Matrix(0, 0)
    );
}

#[test]
fn from_rows_rejects_ragged_rows() {
    assert_eq!(
        Array::from_rows(&[ints(&[1, 2]), ints(&[3])]),
        Err(ArrayError::InhomogeneousRows {
            lengths: vec![2, 1]
        })
    );
    let m = Array::zeros(2, 2);
    assert_eq!(
        Array::from_rows(&[m]),
        Err(ArrayError::RowNotVector {
            shape: ArrayShape::Matrix(2, 2)
        })
    );
}

#[test]
fn constructors() {
    assert_eq!(Array::zeros(2, 3).as_slice(), &[0.0; 6]);
    assert_eq!(Array::ones(1, 2).as_slice(), &[1.0, 1.0]);
    assert_eq!(
        Array::eye(2, 3).as_slice(),
        &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
    );
}

#[test]
fn checked_len_rejects_unallocatable_shapes() {
    assert_eq!(Array::checked_len(2, 3), Ok(6));
    assert_eq!(Array::checked_len(0, 4), Ok(0));
    assert_eq!(
        Array::checked_len(5_000_000_000, 5_000_000_000),
        Err(ArrayError::TooBig {
            rows: 5_000_000_000,
            cols: 5_000_000_000
        })
    );
    assert!(Array::checked_len(usize::MAX / 8, 2).is_err());
}

#[test]
fn elementwise_ops() {
    let a = ints(&[1, 2, 3]);
    let b = ints(&[4, 5, 6]);
    let sum = a.elementwise(&b, ElementOp::Add).unwrap();
    assert_eq!(sum, ints(&[5, 7, 9]));

    let quotient = b.elementwise(&a, ElementOp::Div).unwrap();
    assert_eq!(quotient.dtype(), DType::Float);
    assert_eq!(quotient.as_slice(), &[4.0, 2.5, 2.0]);

    assert_eq!(
        a.elementwise(&ints(&[1, 2]), ElementOp::Sub),
        Err(ArrayError::ShapeMismatch {
            left: ArrayShape::Vector(3),
            right: ArrayShape::Vector(2),
        })
    );
}

#[test]
fn matmul() {
    let a = int_matrix(&[&[1, 2], &[3, 4], &[5, 6]]);
    let b = int_matrix(&[&[1, 0, 2], &[0, 1, 3]]);
    let product = a.matmul(&b).unwrap();
    assert_eq!(product, int_matrix(&[&[1, 2, 8], &[3, 4, 18], &[5, 6, 28]]));

    assert_eq!(
        a.matmul(&a),
        Err(ArrayError::MatMulMismatch {
            left: ArrayShape::Matrix(3, 2),
            right: ArrayShape::Matrix(3, 2),
        })
    );
    assert!(matches!(
        ints(&[1]).matmul(&a),
        Err(ArrayError::MatMulRank { .. })
    ));
}

#[test]
fn transpose() {
    let m = int_matrix(&[&[1, 2, 3], &[4, 5, 6]]);
    assert_eq!(m.transpose(), int_matrix(&[&[1, 4], &[2, 5], &[3, 6]]));
    assert_eq!(Array::eye(3, 3).transpose(), Array::eye(3, 3));
    let v = ints(&[1, 2]);
    assert_eq!(v.transpose(), v);
}

#[test]
fn indexing() {
    let m = int_matrix(&[&[1, 2], &[3, 4]]);
    assert_eq!(m.get(1).unwrap(), Item::Row(ints(&[3, 4])));
    assert_eq!(m.get2(0, 1).unwrap(), Number::Int(2));
    assert_eq!(m.get(-1).unwrap(), Item::Row(ints(&[3, 4])));
    assert_eq!(
        m.get2(0, 2),
        Err(ArrayError::IndexOutOfBounds {
            index: 2,
            axis: 1,
            size: 2
        })
    );

    let v = floats(&[1.5, 2.5]);
    assert_eq!(v.get(0).unwrap(), Item::Scalar(Number::Float(1.5)));
    assert_eq!(v.get2(0, 0), Err(ArrayError::TooManyIndices));
    assert_eq!(
        v.get(2).unwrap_err().to_string(),
        "index 2 is out of bounds for axis 0 with size 2"
    );
}

#[test]
fn assignment_keeps_dtype() {
    let mut v = ints(&[1, 2, 3]);
    v.set(0, Number::Float(7.9)).unwrap();
    assert_eq!(v, ints(&[7, 2, 3]));

    let mut m = Array::zeros(2, 2);
    m.set2(1, 0, Number::Int(5)).unwrap();
    m.set(0, Number::Float(0.5)).unwrap();
    assert_eq!(m.as_slice(), &[0.5, 0.5, 5.0, 0.0]);

    m.set_row(1, &ints(&[8, 9])).unwrap();
    assert_eq!(m.as_slice(), &[0.5, 0.5, 8.0, 9.0]);
    assert_eq!(
        m.set_row(0, &ints(&[1])),
        Err(ArrayError::RowLength {
            got: ArrayShape::Vector(1),
            expected: 2
        })
    );
    assert_eq!(
        v.set_row(0, &ints(&[1])),
        Err(ArrayError::SequenceIntoElement)
    );
}

#[test]
fn display_int_arrays() {
    assert_eq!(ints(&[1, 2, 3]).to_string(), "[1 2 3]");
    assert_eq!(ints(&[-1, 2, 10]).to_string(), "[-1  2 10]");
    assert_eq!(
        int_matrix(&[&[1, 2], &[3, 40]]).to_string(),
        "[[ 1  2]\n [ 3 40]]"
    );
}

#[test]
fn display_float_arrays() {
    assert_eq!(floats(&[1.0, 0.5]).to_string(), "[1.  0.5]");
    assert_eq!(floats(&[10.0, 1.5]).to_string(), "[10.   1.5]");
    assert_eq!(floats(&[1.0 / 3.0]).to_string(), "[0.33333333]");
    assert_eq!(Array::eye(2, 2).to_string(), "[[1. 0.]\n [0. 1.]]");
    assert_eq!(floats(&[1.5e-5, 1e8]).to_string(), "[1.5e-05 1.0e+08]");
    assert_eq!(floats(&[0.001, 10.0]).to_string(), "[1.e-03 1.e+01]");
    assert_eq!(floats(&[0.01, 10.0]).to_string(), "[ 0.01 10.  ]");
}

#[test]
fn display_empty_arrays() {
    assert_eq!(Array::from_numbers(&[]).to_string(), "[]");
    assert_eq!(Array::from_rows(&[]).unwrap().to_string(), "[]");
    let rows = [Array::from_numbers(&[]), Array::from_numbers(&[])];
    assert_eq!(Array::from_rows(&rows).unwrap().to_string(), "[[]\n []]");
}

proptest! {
    #[test]
    fn transpose_is_an_involution(rows in 1usize..6, cols in 1usize..6, seed in 0i64..100) {
        let data: Vec<Vec<i64>> = (0..rows)
            .map(|i| (0..cols).map(|j| seed + (i * cols + j) as i64).collect())
            .collect();
        let refs: Vec<&[i64]> = data.iter().map(Vec::as_slice).collect();
        let m = int_matrix(&refs);
        prop_assert_eq!(m.transpose().shape(), ArrayShape::Matrix(cols, rows));
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn identity_is_neutral_for_matmul(rows in 1usize..5, cols in 1usize..5) {
        let m = Array::ones(rows, cols);
        prop_assert_eq!(Array::eye(rows, rows).matmul(&m).unwrap(), m.clone());
        prop_assert_eq!(m.matmul(&Array::eye(cols, cols)).unwrap(), m);
    }
}
