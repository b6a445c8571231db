//! The numeric field that expressions are built over.
//!
//! Every operation in this crate is generic over a [`Field`]. Two fields are provided:
//!
//! - [`f64`], the real numbers;
//! - [`Complex64`](num_complex::Complex64), the complex numbers.
//!
//! Equality between field values is **exact**. The simplifier relies on this to recognize the
//! identities `x + 0`, `x * 1`, and so on; a value that is merely close to zero is not zero.

mod complex;
mod real;

use num_traits::{One, Zero};
use std::{fmt::{Debug, Formatter}, ops::{Add, Div, Mul, Neg, Sub}};

/// A numeric type that expressions can be built over and evaluated to.
///
/// The arithmetic operators come from [`std::ops`] and the additive / multiplicative identities
/// come from [`num_traits`]. Division by [`Zero::zero`] is never performed by this crate; the
/// evaluator and simplifier report it as an error before dividing.
pub trait Field:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The name of the field, used in error messages.
    const NAME: &'static str;

    /// Whether the values of this field are totally ordered.
    ///
    /// Differentiating a power needs to compare its exponent against `1`, so it is only supported
    /// for ordered fields.
    const ORDERED: bool;

    /// Converts a real number to a value of the field, used to build literal coefficients.
    fn from_f64(value: f64) -> Self;

    /// Returns the value as a real number, if the field is [ordered](Field::ORDERED).
    fn to_real(self) -> Option<f64>;

    /// Returns the absolute value (modulus) of the value, as a value of the field.
    fn abs(self) -> Self;

    /// Raises the value to the given power.
    fn pow(self, exp: Self) -> Self;

    /// Sine of the value, in radians.
    fn sin(self) -> Self;

    /// Cosine of the value, in radians.
    fn cos(self) -> Self;

    /// Natural logarithm of the value.
    fn ln(self) -> Self;

    /// `e` raised to the value.
    fn exp(self) -> Self;

    /// Writes the value as it appears inside a rendered expression.
    fn fmt_constant(&self, f: &mut Formatter<'_>) -> std::fmt::Result;
}
