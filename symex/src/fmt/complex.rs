//! Utility functions to format complex numbers.

use num_complex::Complex64;
use std::fmt::Formatter;
use super::float;

/// Formats a complex number.
///
/// - `(re + imi)` / `(re - imi)` when both parts are non-zero;
/// - `re` when only the real part is non-zero;
/// - `imi` when only the imaginary part is non-zero;
/// - `0` when both parts are zero.
///
/// The imaginary coefficient is always written, even when it is `1`.
pub fn fmt(f: &mut Formatter<'_>, c: Complex64) -> std::fmt::Result {
    let (re, im) = (c.re, c.im);

    match (re == 0.0, im == 0.0) {
        (false, false) => {
            write!(f, "(")?;
            float::fmt(f, re)?;
            if im >= 0.0 {
                write!(f, " + ")?;
                float::fmt(f, im)?;
            } else {
                write!(f, " - ")?;
                float::fmt(f, -im)?;
            }
            write!(f, "i)")
        },
        (false, true) => float::fmt(f, re),
        (true, false) => {
            float::fmt(f, im)?;
            write!(f, "i")
        },
        (true, true) => write!(f, "0"),
    }
}
