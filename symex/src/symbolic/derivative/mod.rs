//! Symbolic differentiation.
//!
//! The rules implemented here are the standard single-variable rules, applied structurally. The
//! result is never simplified; pass it to [`simplify`](super::simplify()) for that.
//!
//! # Powers
//!
//! Powers are only differentiated over [ordered](Field::ORDERED) fields. Over any other field,
//! differentiating a power fails with [`UnsupportedOperation`]. Over an ordered field, with
//! `f' = derivative(f)`:
//!
//! - `f ^ c` with a constant `c > 1`: `c * (f ^ (c - 1) * f')`, the power rule.
//! - `f ^ 1`: the constant `1`.
//! - `f ^ c` with any other constant `c`: `(c * f') / f ^ (|c| + 1)`. **This is only correct for
//! `c = -1`.** Do not rely on it for other exponents.
//! - `a ^ g` with a constant `a`: `g' * (a ^ g * ln(a))`.
//! - `f ^ g` otherwise: `g' * ln(f) + g * (f' / f)`. **This is the derivative of `g * ln(f)`, not
//! of `f ^ g`**; the true derivative is that expression multiplied by `f ^ g`.
//!
//! Notice `f ^ 1` differentiates to `1` rather than `f'`, which is again only correct when `f` is
//! the variable itself.

mod function;

use crate::{
    error::{kind::UnsupportedOperation, Error},
    expr::{BinOpKind, Expr, Function},
    field::Field,
};
use std::sync::Arc;
use super::simplify::simplify;

/// Creates the error for differentiating `op` over the field `T`.
fn unsupported<T: Field>(op: BinOpKind) -> Error {
    Error::new(UnsupportedOperation { op, field: T::NAME })
}

/// `(f ^ g)'`, given `f' = lhs_derivative` and `g' = rhs_derivative`. See the
/// [module-level documentation](self) for the rules.
fn power_rule<T: Field>(
    lhs: &Arc<Expr<T>>,
    rhs: &Arc<Expr<T>>,
    lhs_derivative: Expr<T>,
    rhs_derivative: Expr<T>,
) -> Result<Expr<T>, Error> {
    if !T::ORDERED {
        return Err(unsupported::<T>(BinOpKind::Pow));
    }

    // f(x) ^ c
    if let Expr::Constant(exp) = &**rhs {
        let real = exp.to_real().ok_or_else(|| unsupported::<T>(BinOpKind::Pow))?;

        if real > 1.0 {
            let power = Expr::binary(BinOpKind::Pow, lhs.clone(), Expr::constant(*exp - T::one()));
            return Ok(Expr::binary(
                BinOpKind::Mul,
                rhs.clone(),
                Expr::binary(BinOpKind::Mul, power, lhs_derivative),
            ));
        }

        if real == 1.0 {
            return Ok(Expr::one());
        }

        let numerator = Expr::binary(BinOpKind::Mul, rhs.clone(), lhs_derivative);
        let denominator = Expr::binary(
            BinOpKind::Pow,
            lhs.clone(),
            Expr::constant(exp.abs() + T::one()),
        );
        return Ok(Expr::binary(BinOpKind::Div, numerator, denominator));
    }

    // a ^ g(x)
    if let Expr::Constant(_) = &**lhs {
        let power = Expr::binary(BinOpKind::Pow, lhs.clone(), rhs.clone());
        let log = Expr::call(Function::Ln, lhs.clone());
        return Ok(Expr::binary(
            BinOpKind::Mul,
            rhs_derivative,
            Expr::binary(BinOpKind::Mul, power, log),
        ));
    }

    // f(x) ^ g(x)
    let term1 = Expr::binary(
        BinOpKind::Mul,
        rhs_derivative,
        Expr::call(Function::Ln, lhs.clone()),
    );
    let term2 = Expr::binary(
        BinOpKind::Mul,
        rhs.clone(),
        Expr::binary(BinOpKind::Div, lhs_derivative, lhs.clone()),
    );
    Ok(Expr::binary(BinOpKind::Add, term1, term2))
}

/// Computes the derivative of the given expression with respect to the variable `with`.
///
/// Returns [`Err`] if a power is differentiated over a field that does not support it. The error
/// is located at the offending power.
pub fn derivative<T: Field>(f: &Expr<T>, with: &str) -> Result<Expr<T>, Error> {
    match f {
        Expr::Constant(_) => Ok(Expr::zero()),
        Expr::Variable(name) => Ok(if name == with { Expr::one() } else { Expr::zero() }),
        Expr::Call(func, operand) => function::function_derivative(*func, operand, with),
        Expr::Binary(op, lhs, rhs) => {
            let lhs_derivative = derivative(lhs, with).map_err(|err| err.within(0))?;
            let rhs_derivative = derivative(rhs, with).map_err(|err| err.within(1))?;

            Ok(match op {
                // (f ± g)' = f' ± g'
                BinOpKind::Add | BinOpKind::Sub => {
                    Expr::binary(*op, lhs_derivative, rhs_derivative)
                },
                // (f * g)' = f' * g + f * g'
                BinOpKind::Mul => Expr::binary(
                    BinOpKind::Add,
                    Expr::binary(BinOpKind::Mul, lhs_derivative, rhs.clone()),
                    Expr::binary(BinOpKind::Mul, lhs.clone(), rhs_derivative),
                ),
                // (f / g)' = (f' * g - f * g') / g ^ 2
                BinOpKind::Div => {
                    let numerator = Expr::binary(
                        BinOpKind::Sub,
                        Expr::binary(BinOpKind::Mul, lhs_derivative, rhs.clone()),
                        Expr::binary(BinOpKind::Mul, lhs.clone(), rhs_derivative),
                    );
                    let denominator = Expr::binary(
                        BinOpKind::Pow,
                        rhs.clone(),
                        Expr::constant(T::from_f64(2.0)),
                    );
                    Expr::binary(BinOpKind::Div, numerator, denominator)
                },
                BinOpKind::Pow => power_rule(lhs, rhs, lhs_derivative, rhs_derivative)?,
            })
        },
    }
}

/// Computes the `n`-th derivative of the given expression with respect to the variable `with`.
///
/// Each intermediate derivative is simplified before the next one is taken, which keeps the trees
/// from growing exponentially. The `0`-th derivative is the expression itself, unsimplified.
pub fn derivative_n<T: Field>(f: &Expr<T>, with: &str, n: usize) -> Result<Expr<T>, Error> {
    let mut result = f.clone();
    for _ in 0..n {
        result = simplify(&derivative(&result, with)?)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use crate::{
        error::kind::UnsupportedOperation,
        numerical::{ctxt::Ctxt, eval::Eval},
    };
    use num_complex::Complex64;
    use pretty_assertions::assert_eq;
    use rand::Rng;
    use super::*;

    fn x() -> Expr<f64> {
        Expr::var("x")
    }

    fn c(value: f64) -> Expr<f64> {
        Expr::constant(value)
    }

    /// Boilerplate helper function for evaluating an expression and substituting in "x".
    fn eval_x(e: &Expr<f64>, x: f64) -> f64 {
        e.eval(&Ctxt::from_iter([("x", x)])).unwrap()
    }

    /// Performs forward finite difference to approximate the derivative of the expression.
    fn finite_difference(e: &Expr<f64>, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (eval_x(e, x + DX) - eval_x(e, x)) / DX
    }

    fn test_for_function(function: &Expr<f64>, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.001;

        let symbolic = derivative(function, "x").unwrap();

        for point in points.into_iter() {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(function, point);

            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "For \"{function}\" at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}",
            );
        }
    }

    #[test]
    fn constant() {
        for value in [0.0, 1.0, -7.5, 1e10] {
            assert_eq!(derivative(&c(value), "x").unwrap(), Expr::zero());
        }
    }

    #[test]
    fn variable() {
        assert_eq!(derivative(&x(), "x").unwrap(), Expr::one());
        assert_eq!(derivative(&Expr::<f64>::var("y"), "x").unwrap(), Expr::zero());
    }

    #[test]
    fn sin_unsimplified() {
        assert_eq!(derivative(&x().sin(), "x").unwrap().to_string(), "(cos(x) * 1)");
    }

    #[test]
    fn chain_rule_shapes() {
        assert_eq!(
            derivative(&x().cos(), "x").unwrap().to_string(),
            "(((-1) * sin(x)) * 1)",
        );
        assert_eq!(derivative(&x().ln(), "x").unwrap().to_string(), "(1 / x)");
        assert_eq!(derivative(&x().exp(), "x").unwrap().to_string(), "(exp(x) * 1)");
    }

    #[test]
    fn product_and_quotient_shapes() {
        assert_eq!(
            derivative(&(x() * Expr::var("y")), "x").unwrap().to_string(),
            "((1 * y) + (x * 0))",
        );
        assert_eq!(
            derivative(&(c(1.0) / x()), "x").unwrap().to_string(),
            "(((0 * x) - (1 * 1)) / (x ^ 2))",
        );
    }

    #[test]
    fn power_rule_shape() {
        assert_eq!(
            derivative(&x().pow(c(3.0)), "x").unwrap().to_string(),
            "(3 * ((x ^ 2) * 1))",
        );
    }

    #[test]
    fn power_of_one_is_one() {
        // even though (2x)^1 differentiates to 2
        assert_eq!(derivative(&(c(2.0) * x()).pow(c(1.0)), "x").unwrap(), Expr::one());
    }

    /// The rule for exponents other than `c > 1` and `c = 1` is only correct for `c = -1`.
    #[test]
    fn negative_exponent_rule() {
        let reciprocal = x().pow(c(-1.0));
        assert_eq!(
            derivative(&reciprocal, "x").unwrap().to_string(),
            "(((-1) * 1) / (x ^ 2))",
        );
        test_for_function(&reciprocal, [0.5, 1.0, 2.0, 5.0]);

        // d/dx x^0.5 at x = 4 is 0.25
        let sqrt = x().pow(c(0.5));
        let symbolic = derivative(&sqrt, "x").unwrap();
        assert_eq!(symbolic.to_string(), "((0.5 * 1) / (x ^ 1.5))");
        assert_float_absolute_eq!(eval_x(&symbolic, 4.0), 0.0625, 1e-12);
        assert_float_absolute_eq!(finite_difference(&sqrt, 4.0), 0.25, 1e-4);
    }

    #[test]
    fn exponential_rule() {
        let expr = c(2.0).pow(x());
        assert_eq!(
            derivative(&expr, "x").unwrap().to_string(),
            "(1 * ((2 ^ x) * ln(2)))",
        );
        test_for_function(&expr, [-1.0, 0.0, 1.0, 3.0]);
    }

    /// The rule for `f ^ g` computes the derivative of `g * ln(f)`.
    #[test]
    fn general_power_rule() {
        let expr = x().pow(x());
        let symbolic = derivative(&expr, "x").unwrap();
        assert_eq!(symbolic.to_string(), "((1 * ln(x)) + (x * (1 / x)))");

        let log_form = x() * x().ln();
        for point in [0.5, 1.0, 2.0] {
            assert_float_absolute_eq!(
                eval_x(&symbolic, point),
                finite_difference(&log_form, point),
                1e-3
            );
        }
    }

    #[test]
    fn finite_difference_checks() {
        test_for_function(&x().pow(c(3.0)), [-2.0, 0.0, 1.0, 2.5]);
        test_for_function(&(x().sin() * x()), [-1.0, 0.0, 0.5, 3.0]);
        test_for_function(&(x().pow(c(2.0)) + x() + c(1.0)), [0., 1., 2., 5., 8.]);
        test_for_function(&((x() * x()).exp() / (x() + c(3.0))), [0.0, 0.5, 1.0]);
        test_for_function(&(x().cos() - (x() * c(2.0)).ln()), [0.5, 1.0, 2.0]);
    }

    #[test]
    fn sum_rule_with_random_bindings() {
        let f = x().pow(c(2.0)) * Expr::var("y");
        let g = (x() * Expr::var("y")).sin();
        let sum_derivative = derivative(&(f.clone() + g.clone()), "x").unwrap();
        let f_derivative = derivative(&f, "x").unwrap();
        let g_derivative = derivative(&g, "x").unwrap();

        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let ctxt = Ctxt::from_iter([
                ("x", rng.gen_range(-10.0..10.0)),
                ("y", rng.gen_range(-10.0..10.0)),
            ]);
            let lhs = sum_derivative.eval(&ctxt).unwrap();
            let rhs = f_derivative.eval(&ctxt).unwrap() + g_derivative.eval(&ctxt).unwrap();
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn partial_derivative() {
        // d/dy (x * y^2) = x * (2 * y)
        let expr = x() * Expr::var("y").pow(c(2.0));
        let symbolic = derivative(&expr, "y").unwrap();
        let ctxt = Ctxt::from_iter([("x", 3.0), ("y", 5.0)]);
        assert_eq!(symbolic.eval(&ctxt).unwrap(), 30.0);
    }

    #[test]
    fn reuses_subtrees() {
        let operand = Arc::new(x() + c(1.0));
        let expr = Expr::call(Function::Sin, operand.clone());
        let symbolic = derivative(&expr, "x").unwrap();

        let Expr::Binary(_, cos, _) = &symbolic else {
            unreachable!()
        };
        let Expr::Call(Function::Cos, cos_operand) = &**cos else {
            unreachable!()
        };
        assert!(Arc::ptr_eq(cos_operand, &operand));

        // the original is unchanged
        assert_eq!(expr.to_string(), "sin(x + 1)");
    }

    #[test]
    fn complex_field() {
        let z = || Expr::<Complex64>::var("z");
        let expr = (z() * z()).exp();
        let symbolic = derivative(&expr, "z").unwrap();

        // d/dz exp(z^2) = 2z exp(z^2)
        let point = Complex64::new(0.5, -0.25);
        let value = symbolic.eval(&Ctxt::from_iter([("z", point)])).unwrap();
        let expected = Complex64::new(2.0, 0.0) * point * (point * point).exp();
        assert_float_absolute_eq!(value.re, expected.re, 1e-12);
        assert_float_absolute_eq!(value.im, expected.im, 1e-12);
    }

    #[test]
    fn complex_power_is_unsupported() {
        let z = || Expr::<Complex64>::var("z");
        let two = Expr::constant(Complex64::new(2.0, 0.0));

        for expr in [z().pow(two.clone()), two.clone().pow(z()), z().pow(z())] {
            let err = derivative(&expr, "z").unwrap_err();
            let kind = err.downcast_ref::<UnsupportedOperation>().unwrap();
            assert_eq!(kind.op, BinOpKind::Pow);
            assert_eq!(kind.field, "complex");
            assert!(err.path.is_empty());
        }

        let nested = z() + z().pow(two).ln();
        assert_eq!(derivative(&nested, "z").unwrap_err().path, vec![1, 0]);
    }

    #[test]
    fn higher_order() {
        // d^3/dx^3 x^4 = 24x
        let expr = x().pow(c(4.0));
        let third = derivative_n(&expr, "x", 3).unwrap();
        assert_eq!(eval_x(&third, 2.0), 48.0);

        assert_eq!(derivative_n(&expr, "x", 0).unwrap(), expr);
    }
}
