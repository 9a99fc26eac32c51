use ratmat::{
    domains::rational::Rational,
    tensors::matrix::{EliminationMode, Matrix, MatrixError},
};

fn example() -> Matrix {
    Matrix::from_nested_vec(vec![
        vec![
            Rational::from(2),
            Rational::from((1, 2)),
            Rational::zero(),
            Rational::from(3),
            Rational::from(-1),
        ],
        vec![
            Rational::from(1),
            Rational::from(4),
            Rational::from((-2, 3)),
            Rational::zero(),
            Rational::from(2),
        ],
        vec![
            Rational::zero(),
            Rational::from(1),
            Rational::from(5),
            Rational::from((1, 4)),
            Rational::from(3),
        ],
        vec![
            Rational::from(7),
            Rational::zero(),
            Rational::from(1),
            Rational::from(1),
            Rational::zero(),
        ],
        vec![
            Rational::from((3, 5)),
            Rational::from(2),
            Rational::from(-1),
            Rational::zero(),
            Rational::from(6),
        ],
    ])
    .unwrap()
}

/// Compute the determinant by cofactor expansion along the first row in multi-precision.
fn multi_prec_determinant(m: &[Vec<rug::Rational>]) -> rug::Rational {
    if m.is_empty() {
        return rug::Rational::from(1);
    }

    let mut det = rug::Rational::new();
    for (j, e) in m[0].iter().enumerate() {
        let minor: Vec<Vec<_>> = m[1..]
            .iter()
            .map(|r| {
                r.iter()
                    .enumerate()
                    .filter(|(k, _)| *k != j)
                    .map(|(_, x)| x.clone())
                    .collect()
            })
            .collect();

        let term = e.clone() * multi_prec_determinant(&minor);
        if j % 2 == 0 {
            det += term;
        } else {
            det -= term;
        }
    }
    det
}

#[test]
fn identity_is_neutral() {
    let a = example();
    let i = Matrix::identity(5);

    assert_eq!(a.mul(&i).unwrap(), a);
    assert_eq!(i.mul(&a).unwrap(), a);
    assert_eq!(i.determinant().unwrap(), Rational::one());
    assert_eq!(i.inverse().unwrap(), i);
}

#[test]
fn inverse() {
    let a = example();

    let inv = a.inverse().unwrap();
    assert_eq!(inv, a.inverse_strict().unwrap());
    assert_eq!(a.mul(&inv).unwrap(), Matrix::identity(5));
    assert_eq!(inv.mul(&a).unwrap(), Matrix::identity(5));
    assert_eq!(inv.get(4, 4).unwrap(), Rational::from((9587, 51166)));

    // the inverse of the inverse is the original matrix
    assert_eq!(inv.inverse().unwrap(), a);
}

#[test]
fn determinant() {
    let a = example();
    let det = a.determinant().unwrap();
    assert_eq!(det, Rational::from((-25583, 12)));

    let rows: Vec<Vec<_>> = a
        .row_iter()
        .map(|r| r.iter().map(|x| x.to_multi_prec().unwrap()).collect())
        .collect();
    assert_eq!(
        Rational::try_from(multi_prec_determinant(&rows)).unwrap(),
        det
    );

    // swapping two rows flips the sign
    let mut b = a.clone();
    b.swap_rows(0, 3).unwrap();
    assert_eq!(b.determinant().unwrap(), det.neg().unwrap());

    // adding a multiple of a row leaves it invariant
    b.add_rows(1, 2, &Rational::from((7, 3))).unwrap();
    assert_eq!(b.determinant().unwrap(), det.neg().unwrap());

    // a zero row gives zero
    let mut c = a.clone();
    for j in 0..5 {
        c.set(2, j, Rational::zero()).unwrap();
    }
    assert_eq!(c.determinant().unwrap(), Rational::zero());
}

#[test]
fn cramer() {
    let a = example();
    let b = Matrix::new_vec((1..=5).map(|i: i32| Rational::from(i)).collect());

    let x = a.solve(&b).unwrap();
    assert_eq!(a.mul(&x).unwrap(), b);

    let det = a.determinant().unwrap();
    for i in 0..5 {
        let di = a.exchange_column(i, &b).unwrap().determinant().unwrap();
        assert_eq!(x.get(i, 0).unwrap(), di.div(&det).unwrap());
    }
}

#[test]
fn expansion_by_minors() {
    let a = example();
    let det = a.determinant().unwrap();

    let mut sum = Rational::zero();
    for j in 0..5 {
        let term = a[(1, j)].mul(&a.cofactor(1, j).unwrap()).unwrap();
        sum = sum.add(&term).unwrap().reduce().unwrap();
    }
    assert_eq!(sum, det);

    assert_eq!(
        a.minor(3, 1).unwrap(),
        a.remove_row(3)
            .unwrap()
            .remove_column(1)
            .unwrap()
            .determinant()
            .unwrap()
    );

    let adj = a.adjugate().unwrap();
    assert_eq!(a.mul(&adj).unwrap(), Matrix::identity(5).scale(&det).unwrap());
}

#[test]
fn echelon_of_rectangular() {
    let a = Matrix::from_nested_vec(vec![
        vec![Rational::from(1), Rational::from(2), Rational::from(3)],
        vec![Rational::from(2), Rational::from(5), Rational::from(4)],
    ])
    .unwrap();

    let (r, rhs) = a.reduced_row_echelon(None, EliminationMode::Strict).unwrap();
    assert!(rhs.is_none());
    assert_eq!(
        r,
        Matrix::from_nested_vec(vec![
            vec![Rational::from(1), Rational::zero(), Rational::from(7)],
            vec![Rational::zero(), Rational::from(1), Rational::from(-2)],
        ])
        .unwrap()
    );

    assert_eq!(a.determinant(), Err(MatrixError::NotSquare));
    assert!(!a.is_symmetric());
}

#[test]
fn singular() {
    let a = Matrix::from_nested_vec(vec![
        vec![Rational::from(2), Rational::from(4)],
        vec![Rational::from(1), Rational::from(2)],
    ])
    .unwrap();

    let inv = a.inverse().unwrap();
    assert!(inv.row_iter().flatten().any(|x| x.is_nan()));
    assert_eq!(a.inverse_strict(), Err(MatrixError::Singular));
    assert_eq!(a.determinant().unwrap(), Rational::zero());
}
