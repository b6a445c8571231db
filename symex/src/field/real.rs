use crate::fmt::float;
use std::fmt::Formatter;
use super::Field;

impl Field for f64 {
    const NAME: &'static str = "real";
    const ORDERED: bool = true;

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_real(self) -> Option<f64> {
        Some(self)
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn pow(self, exp: Self) -> Self {
        self.powf(exp)
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn ln(self) -> Self {
        f64::ln(self)
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }

    /// Negative values are wrapped in parentheses.
    fn fmt_constant(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if *self < 0.0 {
            write!(f, "(")?;
            float::fmt(f, *self)?;
            write!(f, ")")
        } else {
            float::fmt(f, *self)
        }
    }
}
