use crate::fmt::complex;
use num_complex::Complex64;
use std::fmt::Formatter;
use super::Field;

impl Field for Complex64 {
    const NAME: &'static str = "complex";
    const ORDERED: bool = false;

    fn from_f64(value: f64) -> Self {
        Complex64::new(value, 0.0)
    }

    fn to_real(self) -> Option<f64> {
        None
    }

    fn abs(self) -> Self {
        Complex64::new(self.norm(), 0.0)
    }

    fn pow(self, exp: Self) -> Self {
        self.powc(exp)
    }

    fn sin(self) -> Self {
        Complex64::sin(self)
    }

    fn cos(self) -> Self {
        Complex64::cos(self)
    }

    fn ln(self) -> Self {
        Complex64::ln(self)
    }

    fn exp(self) -> Self {
        Complex64::exp(self)
    }

    fn fmt_constant(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        complex::fmt(f, *self)
    }
}
