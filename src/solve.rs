//! Exact polynomial interpolation through sample points.
//!
//! A fit through `n` samples `(x_i, y_i)` solves the Vandermonde system `V c = y`
//! with `V[i][j] = x_i^j`. The solution `c` holds the coefficient of `x^k` at index `k`.
//! The `x_i` are not checked for duplicates: a repeated `x` makes `V` singular, which
//! yields `NaN` coefficients, or [MatrixError::Singular] for the strict variants.

use tracing::{debug, instrument};

use crate::{
    domains::rational::{Rational, RationalError},
    tensors::matrix::{EliminationMode, Matrix, MatrixError},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// Sample `index` does not consist of exactly two values.
    MalformedSample { index: usize, len: usize },
    Matrix(MatrixError),
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::MalformedSample { index, len } => write!(
                f,
                "Sample {} has {} components instead of an (x, y) pair",
                index, len
            ),
            FitError::Matrix(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FitError {}

impl From<MatrixError> for FitError {
    fn from(e: MatrixError) -> Self {
        FitError::Matrix(e)
    }
}

impl From<RationalError> for FitError {
    fn from(e: RationalError) -> Self {
        FitError::Matrix(e.into())
    }
}

/// Create the square Vandermonde matrix with `V[i][j] = xs[i]^j`.
/// Powers are computed without reduction, starting from exactly one.
pub fn vandermonde(xs: &[Rational]) -> Result<Matrix, MatrixError> {
    let n = xs.len();

    let mut data = Vec::with_capacity(n * n);
    for x in xs {
        for j in 0..n {
            data.push(x.pow(j as u32)?);
        }
    }

    Matrix::from_linear(data, n as u32, n as u32)
}

fn split_samples<S: AsRef<[T]>, T: Copy>(samples: &[S]) -> Result<(Vec<T>, Vec<T>), FitError> {
    let mut xs = Vec::with_capacity(samples.len());
    let mut ys = Vec::with_capacity(samples.len());

    for (index, s) in samples.iter().enumerate() {
        match s.as_ref() {
            [x, y] => {
                xs.push(*x);
                ys.push(*y);
            }
            s => {
                return Err(FitError::MalformedSample {
                    index,
                    len: s.len(),
                })
            }
        }
    }

    Ok((xs, ys))
}

fn solve_system(
    v: &Matrix,
    ys: Vec<Rational>,
    mode: EliminationMode,
) -> Result<Vec<Rational>, FitError> {
    let (_, c) = v.reduced_row_echelon(Some(&Matrix::new_vec(ys)), mode)?;
    let Some(c) = c else {
        return Ok(vec![]);
    };

    let coefficients = (0..c.nrows() as u32)
        .map(|k| c.get(k, 0))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Fit has {} NaN coefficients",
        coefficients.iter().filter(|c| c.is_nan()).count()
    );

    Ok(coefficients)
}

/// Find the coefficients of the polynomial of degree `samples.len() - 1`
/// through all `(x, y)` samples, in order of increasing power.
///
/// # Example
///
/// ```
/// use ratmat::{domains::rational::Rational, solve::find_polynomial};
///
/// let samples = [
///     [Rational::from(0), Rational::from(1)],
///     [Rational::from(1), Rational::from(2)],
///     [Rational::from(2), Rational::from(5)],
/// ];
/// let c = find_polynomial(&samples).unwrap();
/// assert_eq!(c, vec![Rational::from(1), Rational::from(0), Rational::from(1)]);
/// ```
#[instrument(level = "debug", skip_all, fields(n = samples.len()))]
pub fn find_polynomial<S: AsRef<[Rational]>>(samples: &[S]) -> Result<Vec<Rational>, FitError> {
    let (xs, ys) = split_samples(samples)?;
    solve_system(&vandermonde(&xs)?, ys, EliminationMode::Permissive)
}

/// Find the coefficients of the polynomial through all `(x, y)` samples,
/// returning [MatrixError::Singular] when two samples share an `x`.
#[instrument(level = "debug", skip_all, fields(n = samples.len()))]
pub fn find_polynomial_strict<S: AsRef<[Rational]>>(
    samples: &[S],
) -> Result<Vec<Rational>, FitError> {
    let (xs, ys) = split_samples(samples)?;
    solve_system(&vandermonde(&xs)?, ys, EliminationMode::Strict)
}

/// Find the coefficients of the polynomial through floating point samples.
/// The powers `x^j` are computed in floating point and every matrix entry is
/// converted with the lossy [Rational::from_f64].
#[instrument(level = "debug", skip_all, fields(n = samples.len()))]
pub fn find_polynomial_f64<S: AsRef<[f64]>>(samples: &[S]) -> Result<Vec<Rational>, FitError> {
    let (xs, ys) = split_samples(samples)?;
    let n = xs.len();

    let mut data = Vec::with_capacity(n * n);
    for x in &xs {
        for j in 0..n {
            data.push(Rational::from_f64(x.powi(j as i32))?);
        }
    }
    let v = Matrix::from_linear(data, n as u32, n as u32)?;

    let ys = ys
        .into_iter()
        .map(Rational::from_f64)
        .collect::<Result<Vec<_>, _>>()?;

    solve_system(&v, ys, EliminationMode::Permissive)
}

#[cfg(test)]
mod test {
    use crate::{
        domains::rational::Rational,
        solve::{find_polynomial, find_polynomial_f64, find_polynomial_strict, vandermonde, FitError},
        tensors::matrix::{Matrix, MatrixError},
    };

    fn samples(s: &[(i32, i32)]) -> Vec<[Rational; 2]> {
        s.iter()
            .map(|&(x, y)| [Rational::from(x), Rational::from(y)])
            .collect()
    }

    #[test]
    fn vandermonde_matrix() {
        let v = vandermonde(&[Rational::zero(), Rational::from(2), Rational::from((1, 3))]).unwrap();

        assert_eq!(
            v,
            Matrix::from_nested_vec(vec![
                vec![Rational::one(), Rational::zero(), Rational::zero()],
                vec![Rational::one(), Rational::from(2), Rational::from(4)],
                vec![Rational::one(), Rational::from((1, 3)), Rational::from((1, 9))],
            ])
            .unwrap()
        );
        assert_eq!(v[(0, 0)].denominator(), 1);
    }

    #[test]
    fn parabola() {
        let c = find_polynomial(&samples(&[(0, 1), (1, 2), (2, 5)])).unwrap();
        assert_eq!(c, vec![Rational::from(1), Rational::from(0), Rational::from(1)]);

        let c = find_polynomial(&samples(&[(1, 1), (2, 8), (3, 27), (4, 64)])).unwrap();
        assert_eq!(
            c,
            vec![Rational::zero(), Rational::zero(), Rational::zero(), Rational::one()]
        );
    }

    #[test]
    fn fractional_samples() {
        let s = [
            [Rational::from(-3), Rational::from((-33, 8))],
            [Rational::from(-1), Rational::from((17, 8))],
            [Rational::from(0), Rational::from(3)],
            [Rational::from(1), Rational::from((27, 8))],
            [Rational::from(2), Rational::from(4)],
            [Rational::from(3), Rational::from((45, 8))],
            [Rational::from(4), Rational::from(9)],
        ];

        let c = find_polynomial(&s).unwrap();
        assert_eq!(
            c,
            vec![
                Rational::from(3),
                Rational::from((1, 2)),
                Rational::from((-1, 4)),
                Rational::from((1, 8)),
                Rational::zero(),
                Rational::zero(),
                Rational::zero()
            ]
        );
        assert_eq!(find_polynomial_strict(&s).unwrap(), c);

        // coefficients are read back in lowest terms
        assert!(c.iter().all(|c| c.reduce().unwrap().numerator() == c.numerator()));
    }

    #[test]
    fn single_sample() {
        let c = find_polynomial(&samples(&[(5, 7)])).unwrap();
        assert_eq!(c, vec![Rational::from(7)]);

        let c = find_polynomial::<[Rational; 2]>(&[]).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn duplicate_x() {
        let s = samples(&[(1, 2), (1, 3)]);

        let c = find_polynomial(&s).unwrap();
        assert!(c.iter().all(|c| c.is_nan()));

        assert_eq!(
            find_polynomial_strict(&s),
            Err(FitError::Matrix(MatrixError::Singular))
        );

        // the determinant reports the same system as zero instead
        let v = vandermonde(&[Rational::one(), Rational::one()]).unwrap();
        assert_eq!(v.determinant().unwrap(), Rational::zero());
    }

    #[test]
    fn malformed() {
        let s: [&[Rational]; 2] = [
            &[Rational::zero(), Rational::one()],
            &[Rational::one(), Rational::one(), Rational::one()],
        ];
        assert_eq!(
            find_polynomial(&s),
            Err(FitError::MalformedSample { index: 1, len: 3 })
        );
        assert_eq!(
            find_polynomial_f64(&[vec![1.0]]),
            Err(FitError::MalformedSample { index: 0, len: 1 })
        );
    }

    #[test]
    fn float_samples() {
        let c = find_polynomial_f64(&[[0.5, 0.25], [1., 1.], [2., 4.]]).unwrap();
        assert_eq!(c, vec![Rational::zero(), Rational::zero(), Rational::one()]);
    }
}
