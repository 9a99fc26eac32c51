//! Number domains.
//!
//! The only domain is the field of [Rational](rational::Rational) numbers with fixed-width
//! numerator and denominator. Its arithmetic is exact but fallible: every operation reports
//! overflow instead of wrapping, and results are left unreduced until
//! [reduce](rational::Rational::reduce) is called.
pub mod rational;
