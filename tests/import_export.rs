use std::io::Cursor;

use bytes::Buf;
use ratmat::{
    domains::rational::{Rational, RationalError},
    tensors::matrix::{Matrix, MatrixError},
};

#[test]
fn matrix_layout() {
    let mut a = Matrix::new(1, 2);
    a[(0, 0)] = Rational::from((2, 4));
    a[(0, 1)] = Rational::from(-7);

    let mut export = vec![];
    a.write(&mut export).unwrap();

    let mut b = &export[..];
    assert_eq!(b.get_u32_le(), 1);
    assert_eq!(b.get_u32_le(), 2);
    assert_eq!((b.get_i64_le(), b.get_i64_le()), (2, 4));
    assert_eq!((b.get_i64_le(), b.get_i64_le()), (-7, 1));
    assert!(!b.has_remaining());
}

#[test]
fn unreduced_entries_survive() {
    let a = Matrix::from_nested_vec(vec![
        vec![Rational::from((3, 6)), Rational::nan()],
        vec![Rational::new(5, 0).unwrap(), Rational::from((-10, 4))],
    ])
    .unwrap();

    let mut export = vec![];
    a.write(&mut export).unwrap();
    let b = Matrix::import(Cursor::new(&export)).unwrap();

    assert_eq!(b.to_string(), a.to_string());
    assert_eq!(b.to_string(), "[3/6,   NaN]\n[NaN, -10/4]\n");
}

#[test]
fn truncated() {
    let a = Matrix::identity(3);
    let mut export = vec![];
    a.write(&mut export).unwrap();

    for len in [0, 4, 8, 20, export.len() - 1] {
        assert!(matches!(
            Matrix::import(Cursor::new(&export[..len])),
            Err(MatrixError::Io(_))
        ));
    }

    assert_eq!(
        Rational::read_packed(&mut &export[8..20]),
        Err(RationalError::Truncated)
    );
}
