//! Utility functions to format real numbers.

use std::fmt::Formatter;

/// Formats a real number.
///
/// Finite numbers with no fractional part are written as integers, with `-0` written as `0`.
/// Every other number is written with Rust's shortest round-trip representation.
pub fn fmt(f: &mut Formatter<'_>, n: f64) -> std::fmt::Result {
    if n.is_finite() && n.fract() == 0.0 {
        // adding positive zero turns `-0` into `0` and leaves everything else alone
        write!(f, "{}", n + 0.0)
    } else {
        write!(f, "{}", n)
    }
}
