use std::{
    fmt::Display,
    io::{Read, Write},
    ops::{Index, IndexMut},
    slice::Chunks,
};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use crate::{
    domains::rational::{Rational, RationalError},
    printer::MatrixPrinter,
};

/// Errors that can occur when performing matrix operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// The dimensions of the operands are not compatible.
    ShapeMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
    IndexOutOfRange {
        index: u32,
        len: u32,
    },
    /// An elementary operation that is not allowed, such as scaling a row by zero.
    InvalidOperation(&'static str),
    NotSquare,
    NotRectangular,
    NotAColumnVector,
    /// No usable pivot exists in some column. Only reported in [EliminationMode::Strict].
    Singular,
    /// A zero row of the reduced matrix has a non-zero right-hand side.
    /// Only reported in [EliminationMode::Strict].
    Inconsistent,
    Arithmetic(RationalError),
    Io(String),
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::ShapeMismatch { expected, found } => write!(
                f,
                "The shape of the matrix is not compatible: expected ({},{}), found ({},{})",
                expected.0, expected.1, found.0, found.1
            ),
            MatrixError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of range for length {}", index, len)
            }
            MatrixError::InvalidOperation(op) => write!(f, "Invalid operation: {}", op),
            MatrixError::NotSquare => write!(f, "The matrix is not square"),
            MatrixError::NotRectangular => write!(f, "All rows must have the same length"),
            MatrixError::NotAColumnVector => write!(f, "The matrix is not a column vector"),
            MatrixError::Singular => write!(f, "The matrix is singular"),
            MatrixError::Inconsistent => write!(f, "The system has no solution"),
            MatrixError::Arithmetic(e) => write!(f, "{}", e),
            MatrixError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for MatrixError {}

impl From<RationalError> for MatrixError {
    fn from(e: RationalError) -> Self {
        MatrixError::Arithmetic(e)
    }
}

impl From<std::io::Error> for MatrixError {
    fn from(e: std::io::Error) -> Self {
        MatrixError::Io(e.to_string())
    }
}

/// How elimination treats a column without a non-zero pivot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EliminationMode {
    /// Continue with the zero pivot. The division by zero surfaces as entries
    /// with a zero denominator (`NaN`) in the result.
    #[default]
    Permissive,
    /// Search for a pivot again whenever the current one is zero and return
    /// [MatrixError::Singular] if there is none.
    Strict,
}

/// A dense matrix of rational numbers, stored in row-major order.
/// Matrices with up to 25 entries are stored inline.
///
/// Entries are stored unreduced. Use [Matrix::get] for a reduced read, or
/// [Matrix::simplify] to reduce all entries in place.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Matrix {
    pub(crate) data: SmallVec<[Rational; 25]>,
    pub(crate) nrows: u32,
    pub(crate) ncols: u32,
}

impl Matrix {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: u32, ncols: u32) -> Matrix {
        Matrix {
            data: (0..nrows as usize * ncols as usize)
                .map(|_| Rational::zero())
                .collect(),
            nrows,
            ncols,
        }
    }

    /// Create a new matrix with every entry set to `value`.
    pub fn filled(nrows: u32, ncols: u32, value: Rational) -> Matrix {
        Matrix {
            data: (0..nrows as usize * ncols as usize).map(|_| value).collect(),
            nrows,
            ncols,
        }
    }

    /// Create a new square matrix with `nrows` rows and ones on the main diagonal and zeroes elsewhere.
    pub fn identity(nrows: u32) -> Matrix {
        Matrix {
            data: (0..nrows as usize * nrows as usize)
                .map(|i| {
                    if i % nrows as usize == i / nrows as usize {
                        Rational::one()
                    } else {
                        Rational::zero()
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
        }
    }

    /// Create a new column vector from a list of scalars.
    pub fn new_vec(data: Vec<Rational>) -> Matrix {
        Matrix {
            nrows: data.len() as u32,
            ncols: 1,
            data: data.into(),
        }
    }

    /// Convert a linear representation of a matrix to a `Matrix`.
    pub fn from_linear(data: Vec<Rational>, nrows: u32, ncols: u32) -> Result<Matrix, MatrixError> {
        if data.len() == nrows as usize * ncols as usize {
            Ok(Matrix {
                data: data.into(),
                nrows,
                ncols,
            })
        } else {
            Err(MatrixError::ShapeMismatch {
                expected: (nrows, ncols),
                found: (data.len() as u32, 1),
            })
        }
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    pub fn from_nested_vec(matrix: Vec<Vec<Rational>>) -> Result<Matrix, MatrixError> {
        let nrows = matrix.len() as u32;
        let cols = matrix.first().map(|r| r.len()).unwrap_or(0);

        let mut data = SmallVec::with_capacity(matrix.len() * cols);
        for d in matrix {
            if d.len() != cols {
                return Err(MatrixError::NotRectangular);
            }

            data.extend(d);
        }

        Ok(Matrix {
            data,
            nrows,
            ncols: cols as u32,
        })
    }

    /// Create a new matrix from a 2-dimensional grid of floats.
    /// Every entry is converted with the lossy [Rational::from_f64].
    pub fn from_f64<R: AsRef<[f64]>>(matrix: &[R]) -> Result<Matrix, MatrixError> {
        let cols = matrix.first().map(|r| r.as_ref().len()).unwrap_or(0);

        let mut data = SmallVec::with_capacity(matrix.len() * cols);
        for row in matrix {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::NotRectangular);
            }

            for x in row {
                data.push(Rational::from_f64(*x)?);
            }
        }

        Ok(Matrix {
            data,
            nrows: matrix.len() as u32,
            ncols: cols as u32,
        })
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows as usize
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols as usize
    }

    /// Return `(rows, columns)`.
    pub fn size(&self) -> (u32, u32) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, Rational> {
        self.data.chunks(self.ncols.max(1) as usize)
    }

    fn check_row(&self, row: u32) -> Result<(), MatrixError> {
        if row < self.nrows {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange {
                index: row,
                len: self.nrows,
            })
        }
    }

    fn check_column(&self, col: u32) -> Result<(), MatrixError> {
        if col < self.ncols {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange {
                index: col,
                len: self.ncols,
            })
        }
    }

    /// Get the entry at `(row, col)` in lowest terms. The stored entry is not modified.
    pub fn get(&self, row: u32, col: u32) -> Result<Rational, MatrixError> {
        self.check_row(row)?;
        self.check_column(col)?;
        Ok(self[(row, col)].reduce()?)
    }

    /// Set the entry at `(row, col)`.
    pub fn set(&mut self, row: u32, col: u32, value: Rational) -> Result<(), MatrixError> {
        self.check_row(row)?;
        self.check_column(col)?;
        self[(row, col)] = value;
        Ok(())
    }

    /// Swap two rows.
    pub fn swap_rows(&mut self, i: u32, j: u32) -> Result<(), MatrixError> {
        self.check_row(i)?;
        self.check_row(j)?;

        if i != j {
            for l in 0..self.ncols {
                self.data
                    .swap((self.ncols * i + l) as usize, (self.ncols * j + l) as usize);
            }
        }
        Ok(())
    }

    /// Multiply every entry of row `row` by `value`, which must not be zero.
    pub fn multiply_row(&mut self, row: u32, value: &Rational) -> Result<(), MatrixError> {
        self.check_row(row)?;
        if value.is_zero() {
            return Err(MatrixError::InvalidOperation("cannot multiply a row by zero"));
        }

        for c in 0..self.ncols {
            self[(row, c)] = self[(row, c)].mul(value)?;
        }
        Ok(())
    }

    /// Add `value` times row `source` to row `target`. A zero `value` leaves the matrix unchanged.
    pub fn add_rows(&mut self, target: u32, source: u32, value: &Rational) -> Result<(), MatrixError> {
        self.check_row(target)?;
        self.check_row(source)?;

        for c in 0..self.ncols {
            let s = self[(source, c)].mul(value)?;
            self[(target, c)] = self[(target, c)].add(&s)?;
        }
        Ok(())
    }

    /// Multiply each entry of the matrix by `value`.
    pub fn scale(&self, value: &Rational) -> Result<Matrix, MatrixError> {
        Ok(Matrix {
            data: self
                .data
                .iter()
                .map(|e| e.mul(value))
                .collect::<Result<_, _>>()?,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    fn check_same_shape(&self, rhs: &Matrix) -> Result<(), MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            Err(MatrixError::ShapeMismatch {
                expected: self.size(),
                found: rhs.size(),
            })
        } else {
            Ok(())
        }
    }

    /// Add two matrices entry-wise.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape(rhs)?;

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a.add(b))
                .collect::<Result<_, _>>()?,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Subtract `rhs` from `self` entry-wise.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape(rhs)?;

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a.sub(b))
                .collect::<Result<_, _>>()?,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Multiply two matrices. Every entry of the result is in lowest terms.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::ShapeMismatch {
                expected: (self.ncols, rhs.ncols),
                found: rhs.size(),
            });
        }

        let mut m = Matrix::new(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let mut sum = Rational::zero();
                for k in 0..self.ncols {
                    sum = sum.add(&self[(i, k)].mul(&rhs[(k, j)])?)?.reduce()?;
                }
                m[(i, j)] = sum;
            }
        }

        Ok(m)
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix {
        let mut m = Matrix::new(self.ncols, self.nrows);
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                m[(j, i)] = self[(i, j)];
            }
        }
        m
    }

    /// Reduce every entry to lowest terms, in place.
    pub fn simplify(&mut self) -> Result<(), MatrixError> {
        for e in &mut self.data {
            *e = e.reduce()?;
        }
        Ok(())
    }

    fn simplify_row(&mut self, row: u32) -> Result<(), MatrixError> {
        for c in 0..self.ncols {
            self[(row, c)] = self[(row, c)].reduce()?;
        }
        Ok(())
    }

    /// Create a copy of the matrix without row `row`.
    pub fn remove_row(&self, row: u32) -> Result<Matrix, MatrixError> {
        self.check_row(row)?;

        Ok(Matrix {
            data: self
                .row_iter()
                .enumerate()
                .filter(|(i, _)| *i != row as usize)
                .flat_map(|(_, r)| r.iter().copied())
                .collect(),
            nrows: self.nrows - 1,
            ncols: self.ncols,
        })
    }

    /// Create a copy of the matrix without column `col`.
    pub fn remove_column(&self, col: u32) -> Result<Matrix, MatrixError> {
        self.check_column(col)?;
        Ok(self.transpose().remove_row(col)?.transpose())
    }

    /// Create a copy of the matrix where column `col` is replaced by the column vector `column`.
    pub fn exchange_column(&self, col: u32, column: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_column(col)?;
        if column.ncols != 1 {
            return Err(MatrixError::NotAColumnVector);
        }
        if column.nrows != self.nrows {
            return Err(MatrixError::ShapeMismatch {
                expected: (self.nrows, 1),
                found: column.size(),
            });
        }

        let mut m = self.clone();
        for i in 0..self.nrows {
            m[(i, col)] = column[(i, 0)];
        }
        Ok(m)
    }

    /// Return true iff the matrix is square and equal to its transpose.
    pub fn is_symmetric(&self) -> bool {
        self.is_square() && &self.transpose() == self
    }

    /// Return true iff the matrix is square and equal to its negated transpose.
    pub fn is_skew_symmetric(&self) -> bool {
        self.is_square()
            && self
                .transpose()
                .scale(&Rational::from(-1))
                .map_or(false, |t| &t == self)
    }

    /// Find the first row at or below `from` with a non-zero entry in column `col`.
    fn find_pivot(&self, col: u32, from: u32) -> Option<u32> {
        (from..self.nrows).find(|&k| !self[(k, col)].is_zero())
    }

    /// Bring the matrix in echelon form with ones on the diagonal,
    /// applying the same row operations to `other`.
    fn forward_eliminate(
        &mut self,
        other: &mut Matrix,
        mode: EliminationMode,
    ) -> Result<(), MatrixError> {
        let diag = self.nrows.min(self.ncols);

        // move a non-zero entry onto the diagonal where possible
        for i in 0..diag {
            if self[(i, i)].is_zero() {
                if let Some(k) = self.find_pivot(i, i + 1) {
                    trace!("Swapping rows {} and {}", i, k);
                    self.swap_rows(i, k)?;
                    other.swap_rows(i, k)?;
                } else {
                    // elimination may still produce a pivot here
                    debug!("No non-zero pivot in column {} before elimination", i);
                }
            }
        }

        for a in 0..diag {
            if mode == EliminationMode::Strict && self[(a, a)].is_zero() {
                let Some(k) = self.find_pivot(a, a + 1) else {
                    return Err(MatrixError::Singular);
                };
                trace!("Swapping rows {} and {}", a, k);
                self.swap_rows(a, k)?;
                other.swap_rows(a, k)?;
            }

            for b in a + 1..self.nrows {
                let multiplier = self[(b, a)].div(&self[(a, a)])?.neg()?.reduce()?;
                trace!("Adding {} times row {} to row {}", multiplier, a, b);

                self.add_rows(b, a, &multiplier)?;
                other.add_rows(b, a, &multiplier)?;
                self.simplify()?;
                other.simplify()?;
            }
        }

        // rows below the diagonal of a tall matrix are now zero
        for r in diag..self.nrows {
            let lhs_zero = (0..self.ncols).all(|c| self[(r, c)].is_zero());
            let rhs_zero = (0..other.ncols).all(|c| other[(r, c)].is_zero());
            if lhs_zero && !rhs_zero {
                if mode == EliminationMode::Strict {
                    return Err(MatrixError::Inconsistent);
                }
                debug!("Row {} has no solution", r);
            }
        }

        for i in 0..diag {
            if self[(i, i)].is_zero() {
                if mode == EliminationMode::Strict {
                    return Err(MatrixError::Singular);
                }
                debug!("Zero pivot in row {}", i);
            }

            let multiplier = Rational::one().div(&self[(i, i)])?;
            self.multiply_row(i, &multiplier)?;
            other.multiply_row(i, &multiplier)?;
            self.simplify()?;
            other.simplify()?;
        }

        Ok(())
    }

    /// Clear the entries above the pivots of a matrix in echelon form,
    /// applying the same row operations to `other`.
    fn back_substitute(&mut self, other: &mut Matrix) -> Result<(), MatrixError> {
        let diag = self.nrows.min(self.ncols);
        for a in (0..diag).rev() {
            for b in (0..a).rev() {
                let multiplier = self[(b, a)].neg()?.reduce()?;
                self.add_rows(b, a, &multiplier)?;
                other.add_rows(b, a, &multiplier)?;
                self.simplify()?;
                other.simplify()?;
            }
        }

        self.simplify()?;
        other.simplify()
    }

    fn eliminate(
        &self,
        mut other: Matrix,
        mode: EliminationMode,
        reduced: bool,
    ) -> Result<(Matrix, Matrix), MatrixError> {
        if self.nrows != other.nrows {
            return Err(MatrixError::ShapeMismatch {
                expected: (self.nrows, other.ncols),
                found: other.size(),
            });
        }

        let mut m = self.clone();
        m.forward_eliminate(&mut other, mode)?;
        if reduced {
            m.back_substitute(&mut other)?;
        }

        Ok((m, other))
    }

    /// Write the matrix in echelon form with ones on the diagonal, applying the
    /// same row operations to the `augmented` matrix if it is provided.
    /// Neither `self` nor `augmented` is modified.
    ///
    /// Returns the echelon form and the transformed augmented matrix.
    /// In [EliminationMode::Permissive], a singular matrix yields entries with a zero denominator.
    #[instrument(level = "debug", skip_all, fields(nrows = self.nrows, ncols = self.ncols))]
    pub fn row_echelon(
        &self,
        augmented: Option<&Matrix>,
        mode: EliminationMode,
    ) -> Result<(Matrix, Option<Matrix>), MatrixError> {
        let other = augmented
            .cloned()
            .unwrap_or_else(|| Matrix::new(self.nrows, 1));
        let (m, other) = self.eliminate(other, mode, false)?;
        Ok((m, augmented.map(|_| other)))
    }

    /// Write the matrix in reduced row-echelon form, applying the same row
    /// operations to the `augmented` matrix if it is provided.
    #[instrument(level = "debug", skip_all, fields(nrows = self.nrows, ncols = self.ncols))]
    pub fn reduced_row_echelon(
        &self,
        augmented: Option<&Matrix>,
        mode: EliminationMode,
    ) -> Result<(Matrix, Option<Matrix>), MatrixError> {
        let other = augmented
            .cloned()
            .unwrap_or_else(|| Matrix::new(self.nrows, 1));
        let (m, other) = self.eliminate(other, mode, true)?;
        Ok((m, augmented.map(|_| other)))
    }

    /// Solve `A * x = b` for `x`, where `A` is `self`.
    /// A singular `A` yields entries with a zero denominator in `x`.
    pub fn solve(&self, b: &Matrix) -> Result<Matrix, MatrixError> {
        Ok(self.eliminate(b.clone(), EliminationMode::Permissive, true)?.1)
    }

    /// Solve `A * x = b` for `x`, returning [MatrixError::Singular] if `A` is singular.
    pub fn solve_strict(&self, b: &Matrix) -> Result<Matrix, MatrixError> {
        Ok(self.eliminate(b.clone(), EliminationMode::Strict, true)?.1)
    }

    /// Compute the inverse of a square matrix by row reducing it next to the identity.
    /// The inverse of a singular matrix contains entries with a zero denominator.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        self.inverse_with_mode(EliminationMode::Permissive)
    }

    /// Compute the inverse of a square matrix, if it exists.
    /// Otherwise, this function returns [MatrixError::Singular].
    pub fn inverse_strict(&self) -> Result<Matrix, MatrixError> {
        self.inverse_with_mode(EliminationMode::Strict)
    }

    fn inverse_with_mode(&self, mode: EliminationMode) -> Result<Matrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        Ok(self.eliminate(Matrix::identity(self.nrows), mode, true)?.1)
    }

    /// Compute the determinant of the matrix using Gaussian elimination.
    /// A column without a non-zero pivot gives a zero determinant.
    #[instrument(level = "debug", skip_all, fields(n = self.nrows))]
    pub fn determinant(&self) -> Result<Rational, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        let mut m = self.clone();
        let mut swaps = 0;

        for i in 0..m.nrows {
            if m[(i, i)].is_zero() {
                let Some(k) = m.find_pivot(i, i + 1) else {
                    debug!("No non-zero pivot in column {}", i);
                    return Ok(Rational::zero());
                };

                m.swap_rows(i, k)?;
                swaps += 1;
            }

            for j in i + 1..m.nrows {
                if !m[(j, i)].is_zero() {
                    let factor = m[(j, i)].div(&m[(i, i)])?.neg()?.reduce()?;
                    m.add_rows(j, i, &factor)?;
                    m.simplify_row(j)?;
                }
            }
        }

        let mut det = Rational::one();
        for i in 0..m.nrows {
            det = det.mul(&m[(i, i)])?.reduce()?;
        }

        if swaps % 2 == 1 {
            det = det.neg()?;
        }

        Ok(det)
    }

    /// Compute the determinant of the matrix without row `row` and column `col`.
    pub fn minor(&self, row: u32, col: u32) -> Result<Rational, MatrixError> {
        self.remove_row(row)?.remove_column(col)?.determinant()
    }

    /// Compute `(-1)^(row + col)` times the minor at `(row, col)`.
    pub fn cofactor(&self, row: u32, col: u32) -> Result<Rational, MatrixError> {
        let minor = self.minor(row, col)?;
        if (row + col) % 2 == 0 {
            Ok(minor)
        } else {
            Ok(minor.neg()?)
        }
    }

    /// Compute the matrix of all cofactors.
    pub fn cofactor_matrix(&self) -> Result<Matrix, MatrixError> {
        let mut m = Matrix::new(self.nrows, self.ncols);
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                m[(i, j)] = self.cofactor(i, j)?;
            }
        }
        Ok(m)
    }

    /// Compute the adjugate, the transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix, MatrixError> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Write the matrix to `dest`: the row and column count followed by the packed entries.
    pub fn write<W: Write>(&self, mut dest: W) -> Result<(), std::io::Error> {
        dest.write_u32::<LittleEndian>(self.nrows)?;
        dest.write_u32::<LittleEndian>(self.ncols)?;

        let mut buf = Vec::with_capacity(self.data.len() * 16);
        for e in &self.data {
            e.write_packed(&mut buf);
        }
        dest.write_all(&buf)
    }

    /// Read a matrix written by [Matrix::write].
    pub fn import<R: Read>(mut source: R) -> Result<Matrix, MatrixError> {
        let nrows = source.read_u32::<LittleEndian>()?;
        let ncols = source.read_u32::<LittleEndian>()?;

        let len = nrows.checked_mul(ncols).ok_or_else(|| {
            MatrixError::Io(format!("a {}x{} matrix is too large", nrows, ncols))
        })?;

        let mut data = SmallVec::new();
        let mut cell = [0; 16];
        for _ in 0..len {
            source.read_exact(&mut cell)?;
            data.push(Rational::read_packed(&mut &cell[..])?);
        }

        Ok(Matrix { data, nrows, ncols })
    }
}

impl Index<(u32, u32)> for Matrix {
    type Output = Rational;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[(index.0 * self.ncols + index.1) as usize]
    }
}

impl IndexMut<(u32, u32)> for Matrix {
    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index_mut(&mut self, index: (u32, u32)) -> &mut Rational {
        &mut self.data[(index.0 * self.ncols + index.1) as usize]
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        MatrixPrinter::new(self).fmt(f)
    }
}
