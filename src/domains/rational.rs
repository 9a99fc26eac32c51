use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use bytes::{Buf, BufMut};

use crate::utils;

/// Errors that can occur in fixed-width rational arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RationalError {
    /// An intermediate result does not fit in an `i64`.
    Overflow { operation: &'static str },
    /// A floating point number needs more decimal digits than an `i64` can hold.
    TooManyDigits { digits: u32 },
    /// The value has a zero denominator and cannot be converted.
    NotFinite,
    /// Not enough bytes to decode a packed rational.
    Truncated,
}

impl Display for RationalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RationalError::Overflow { operation } => {
                write!(f, "Integer overflow during {}", operation)
            }
            RationalError::TooManyDigits { digits } => write!(
                f,
                "Cannot convert float with {} decimal digits to a fixed-width fraction",
                digits
            ),
            RationalError::NotFinite => write!(f, "The fraction has a zero denominator"),
            RationalError::Truncated => write!(f, "Not enough data to decode a fraction"),
        }
    }
}

impl std::error::Error for RationalError {}

#[inline]
fn overflow(operation: &'static str) -> RationalError {
    RationalError::Overflow { operation }
}

/// A fraction of two `i64` values.
///
/// Arithmetic does not reduce: results are built by cross multiplication and
/// are only brought into lowest terms by [`Rational::reduce`]. Every operation
/// is checked and reports [`RationalError::Overflow`] instead of wrapping.
///
/// The denominator is never negative. A zero denominator encodes a non-finite
/// value, which is printed and converted as `NaN` regardless of the sign of the
/// numerator.
///
/// Two rationals are equal when their reduced forms are equal, so `2/4 == 1/2`.
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl Rational {
    /// Create the fraction `numerator/denominator` without reducing it.
    /// The sign is moved into the numerator.
    pub fn new(numerator: i64, denominator: i64) -> Result<Rational, RationalError> {
        if denominator < 0 {
            Ok(Rational {
                numerator: numerator
                    .checked_neg()
                    .ok_or(overflow("sign normalization"))?,
                denominator: denominator
                    .checked_neg()
                    .ok_or(overflow("sign normalization"))?,
            })
        } else {
            Ok(Rational {
                numerator,
                denominator,
            })
        }
    }

    pub const fn zero() -> Rational {
        Rational {
            numerator: 0,
            denominator: 1,
        }
    }

    pub const fn one() -> Rational {
        Rational {
            numerator: 1,
            denominator: 1,
        }
    }

    /// The canonical non-finite value `0/0`.
    pub const fn nan() -> Rational {
        Rational {
            numerator: 0,
            denominator: 0,
        }
    }

    /// Approximate a float as `round(value * 10^k) / 10^k` in lowest terms,
    /// where `k` is one less than the length of the shortest decimal text of `value`.
    ///
    /// This conversion is lossy: binary floats such as `0.1` are mapped to the
    /// fraction of their decimal text, and values that need too many digits are rejected.
    /// NaN maps to `0/0` and infinities to `±1/0`.
    pub fn from_f64(value: f64) -> Result<Rational, RationalError> {
        if value.is_nan() {
            return Ok(Rational::nan());
        }

        if value.is_infinite() {
            return Ok(Rational {
                numerator: if value > 0. { 1 } else { -1 },
                denominator: 0,
            });
        }

        let digits = value.to_string().len() as u32 - 1;
        let scale = 10i64
            .checked_pow(digits)
            .ok_or(RationalError::TooManyDigits { digits })?;

        let scaled = (value * scale as f64).round();
        // 2^63 is the first float outside of the i64 range
        if scaled.abs() >= 9_223_372_036_854_775_808. {
            return Err(RationalError::TooManyDigits { digits });
        }

        Rational {
            numerator: scaled as i64,
            denominator: scale,
        }
        .reduce()
    }

    #[inline]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Return true iff the numerator is zero. Note that this includes `0/0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Return true iff the fraction equals one.
    pub fn is_one(&self) -> bool {
        self.denominator != 0 && self.numerator == self.denominator
    }

    /// Return true iff the denominator is zero.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.denominator == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Return true iff the fraction is finite and its reduced denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denominator != 0 && self.numerator % self.denominator == 0
    }

    /// Add two fractions. The result is not reduced.
    pub fn add(&self, other: &Rational) -> Result<Rational, RationalError> {
        let n1 = self
            .numerator
            .checked_mul(other.denominator)
            .ok_or(overflow("addition"))?;
        let n2 = other
            .numerator
            .checked_mul(self.denominator)
            .ok_or(overflow("addition"))?;

        Ok(Rational {
            numerator: n1.checked_add(n2).ok_or(overflow("addition"))?,
            denominator: self
                .denominator
                .checked_mul(other.denominator)
                .ok_or(overflow("addition"))?,
        })
    }

    /// Subtract `other` from `self`. The result is not reduced.
    pub fn sub(&self, other: &Rational) -> Result<Rational, RationalError> {
        let n1 = self
            .numerator
            .checked_mul(other.denominator)
            .ok_or(overflow("subtraction"))?;
        let n2 = other
            .numerator
            .checked_mul(self.denominator)
            .ok_or(overflow("subtraction"))?;

        Ok(Rational {
            numerator: n1.checked_sub(n2).ok_or(overflow("subtraction"))?,
            denominator: self
                .denominator
                .checked_mul(other.denominator)
                .ok_or(overflow("subtraction"))?,
        })
    }

    /// Multiply two fractions. The result is not reduced.
    pub fn mul(&self, other: &Rational) -> Result<Rational, RationalError> {
        Ok(Rational {
            numerator: self
                .numerator
                .checked_mul(other.numerator)
                .ok_or(overflow("multiplication"))?,
            denominator: self
                .denominator
                .checked_mul(other.denominator)
                .ok_or(overflow("multiplication"))?,
        })
    }

    pub fn mul_int(&self, other: i64) -> Result<Rational, RationalError> {
        Ok(Rational {
            numerator: self
                .numerator
                .checked_mul(other)
                .ok_or(overflow("multiplication"))?,
            denominator: self.denominator,
        })
    }

    /// Divide `self` by `other`. The result is not reduced.
    ///
    /// Dividing by a fraction with a zero numerator is not an error:
    /// it yields a zero denominator.
    pub fn div(&self, other: &Rational) -> Result<Rational, RationalError> {
        Rational::new(
            self.numerator
                .checked_mul(other.denominator)
                .ok_or(overflow("division"))?,
            self.denominator
                .checked_mul(other.numerator)
                .ok_or(overflow("division"))?,
        )
    }

    pub fn div_int(&self, other: i64) -> Result<Rational, RationalError> {
        Rational::new(
            self.numerator,
            self.denominator
                .checked_mul(other)
                .ok_or(overflow("division"))?,
        )
    }

    pub fn neg(&self) -> Result<Rational, RationalError> {
        Ok(Rational {
            numerator: self.numerator.checked_neg().ok_or(overflow("negation"))?,
            denominator: self.denominator,
        })
    }

    /// Swap the numerator and denominator. The inverse of zero has a zero denominator.
    pub fn inv(&self) -> Result<Rational, RationalError> {
        Rational::new(self.denominator, self.numerator)
    }

    /// Raise the fraction to the power `e` by repeated unreduced multiplication.
    /// The result for `e = 0` is exactly `1`, even for a zero base.
    pub fn pow(&self, e: u32) -> Result<Rational, RationalError> {
        let mut res = Rational::one();
        for _ in 0..e {
            res = res.mul(self)?;
        }
        Ok(res)
    }

    /// Compute the lowest terms of the fraction, with the sign in the numerator.
    /// A zero numerator always yields `0/1`.
    pub fn reduce(&self) -> Result<Rational, RationalError> {
        let (n, d) = self.reduced_parts();
        Ok(Rational {
            numerator: i64::try_from(n).map_err(|_| overflow("reduction"))?,
            denominator: i64::try_from(d).map_err(|_| overflow("reduction"))?,
        })
    }

    /// The reduced form in `i128`, which cannot overflow.
    fn reduced_parts(&self) -> (i128, i128) {
        if self.numerator == 0 {
            return (0, 1);
        }

        let (mut n, mut d) = (self.numerator as i128, self.denominator as i128);
        let g = utils::gcd_signed_i128(n, d) as i128;
        if g != 1 {
            n /= g;
            d /= g;
        }

        if d < 0 {
            (-n, -d)
        } else {
            (n, d)
        }
    }

    /// Convert to a float. A zero denominator yields NaN.
    pub fn to_f64(&self) -> f64 {
        if self.denominator == 0 {
            f64::NAN
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }

    /// Convert to a single precision float. A zero denominator yields NaN.
    pub fn to_f32(&self) -> f32 {
        if self.denominator == 0 {
            f32::NAN
        } else {
            self.numerator as f32 / self.denominator as f32
        }
    }

    /// Convert to a multi-precision rational. Non-finite values cannot be converted.
    pub fn to_multi_prec(self) -> Result<rug::Rational, RationalError> {
        if self.denominator == 0 {
            return Err(RationalError::NotFinite);
        }

        Ok(rug::Rational::from((self.numerator, self.denominator)))
    }

    /// Write the numerator and denominator as little-endian `i64`s.
    pub fn write_packed(&self, dest: &mut impl BufMut) {
        dest.put_i64_le(self.numerator);
        dest.put_i64_le(self.denominator);
    }

    /// Read a fraction written by [`Rational::write_packed`].
    pub fn read_packed(source: &mut impl Buf) -> Result<Rational, RationalError> {
        if source.remaining() < 16 {
            return Err(RationalError::Truncated);
        }

        let numerator = source.get_i64_le();
        let denominator = source.get_i64_le();
        Rational::new(numerator, denominator)
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.reduced_parts() == other.reduced_parts()
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reduced_parts().hash(state)
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(value: i64) -> Self {
        Rational {
            numerator: value,
            denominator: 1,
        }
    }
}

impl From<i32> for Rational {
    #[inline]
    fn from(value: i32) -> Self {
        Rational {
            numerator: value as i64,
            denominator: 1,
        }
    }
}

impl From<(i32, i32)> for Rational {
    /// Create an unreduced fraction. The sign is moved into the numerator,
    /// which cannot overflow for 32-bit inputs.
    #[inline]
    fn from((num, den): (i32, i32)) -> Self {
        if den < 0 {
            Rational {
                numerator: -(num as i64),
                denominator: -(den as i64),
            }
        } else {
            Rational {
                numerator: num as i64,
                denominator: den as i64,
            }
        }
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((num, den): (i64, i64)) -> Result<Self, Self::Error> {
        Rational::new(num, den)
    }
}

impl TryFrom<f64> for Rational {
    type Error = RationalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rational::from_f64(value)
    }
}

impl TryFrom<rug::Rational> for Rational {
    type Error = RationalError;

    fn try_from(value: rug::Rational) -> Result<Self, Self::Error> {
        let (num, den) = value.into_numer_denom();
        match (num.to_i64(), den.to_i64()) {
            (Some(numerator), Some(denominator)) => Ok(Rational {
                numerator,
                denominator,
            }),
            _ => Err(overflow("conversion from a multi-precision rational")),
        }
    }
}

impl Display for Rational {
    /// Print the fraction as is, without reducing it first.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.denominator == 0 {
            f.write_str("NaN")
        } else if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
