//! Ratmat is an exact linear algebra library over fixed-width rational numbers.
//!
//! It performs Gaussian elimination, matrix inversion and determinants without
//! rounding error, and fits polynomials exactly through sample points.
//!
//! For example:
//!
//! ```
//! use ratmat::{
//!     domains::rational::Rational,
//!     printer::{PolynomialPrinter, PrintOptions},
//!     solve::find_polynomial,
//! };
//!
//! fn main() {
//!     let samples = [
//!         [Rational::from(-1), Rational::from((17, 8))],
//!         [Rational::from(0), Rational::from(3)],
//!         [Rational::from(1), Rational::from((27, 8))],
//!         [Rational::from(2), Rational::from(4)],
//!     ];
//!
//!     let c = find_polynomial(&samples).unwrap();
//!     let p = PolynomialPrinter::new(&c, "x", "g", PrintOptions::latex());
//!     assert_eq!(
//!         p.to_string(),
//!         "g\\left(x\\right)=3+\\frac{1}{2}x-\\frac{1}{4}x^2+\\frac{1}{8}x^3"
//!     );
//! }
//! ```
//!
//! Arithmetic on [Rational](domains::rational::Rational) is checked: an overflow of the
//! 64-bit numerator or denominator is reported as an error instead of wrapping.

pub mod domains;
pub mod printer;
pub mod solve;
pub mod tensors;
pub mod utils;
