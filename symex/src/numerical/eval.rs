use crate::{error::Error, expr::Expr, field::Field};
use super::ctxt::Ctxt;

/// Any type that can be evaluated to produce a value of the field `T`.
pub trait Eval<T: Field> {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt<T>) -> Result<T, Error>;

    /// Evaluate the expression to produce a value, using an empty context.
    fn eval_default(&self) -> Result<T, Error> {
        self.eval(&Ctxt::default())
    }
}

/// Evaluates the `$child`-th child of a node, re-locating any error to be relative to the node.
macro_rules! eval_child {
    ($expr:expr, $ctxt:expr, $child:literal) => {
        $expr.eval($ctxt).map_err(|err| err.within($child))?
    };
}

/// Evaluation walks the whole tree every time; nothing is cached between calls. The context is
/// only read, so one expression can be evaluated from several threads at once, each with its own
/// context.
impl<T: Field> Eval<T> for Expr<T> {
    fn eval(&self, ctxt: &Ctxt<T>) -> Result<T, Error> {
        match self {
            Expr::Constant(value) => Ok(*value),
            Expr::Variable(name) => ctxt.resolve(name),
            Expr::Call(func, operand) => Ok(func.apply(eval_child!(operand, ctxt, 0))),
            Expr::Binary(op, lhs, rhs) => {
                let lhs = eval_child!(lhs, ctxt, 0);
                let rhs = eval_child!(rhs, ctxt, 1);
                op.apply(lhs, rhs)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use crate::{
        error::kind::{DivisionByZero, UnboundVariable},
        expr::{BinOpKind, Function},
        numerical::ctxt::UnboundPolicy,
    };
    use num_complex::Complex64;
    use std::{sync::Arc, thread};
    use super::*;

    fn x() -> Expr<f64> {
        Expr::var("x")
    }

    #[test]
    fn constant() {
        for value in [0.0, -3.5, 1e300, f64::MIN_POSITIVE] {
            assert_eq!(Expr::constant(value).eval_default().unwrap(), value);
        }
    }

    #[test]
    fn polynomial() {
        // x^2 + 3 at x = 2
        let expr = x().pow(Expr::constant(2.0)) + Expr::constant(3.0);
        let ctxt = Ctxt::from_iter([("x", 2.0)]);
        assert_eq!(expr.eval(&ctxt).unwrap(), 7.0);
    }

    #[test]
    fn functions() {
        let ctxt = Ctxt::from_iter([("x", 0.5)]);
        assert_float_absolute_eq!(x().sin().eval(&ctxt).unwrap(), 0.5f64.sin(), 1e-15);
        assert_float_absolute_eq!(x().cos().eval(&ctxt).unwrap(), 0.5f64.cos(), 1e-15);
        assert_float_absolute_eq!(x().ln().eval(&ctxt).unwrap(), 0.5f64.ln(), 1e-15);
        assert_float_absolute_eq!(x().exp().eval(&ctxt).unwrap(), 0.5f64.exp(), 1e-15);
    }

    #[test]
    fn division_by_zero() {
        let expr = x() / Expr::constant(0.0);
        let ctxt = Ctxt::from_iter([("x", 1.0)]);
        let err = expr.eval(&ctxt).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.path, vec![1]);
    }

    #[test]
    fn division_by_zero_located_in_subtree() {
        // sin(1 + 1 / (x - x))
        let expr = (Expr::constant(1.0) + Expr::constant(1.0) / (x() - x())).sin();
        let ctxt = Ctxt::from_iter([("x", 4.0)]);
        let err = expr.eval(&ctxt).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.path, vec![0, 1, 1]);
    }

    /// With the default policy, an unbound variable is an error. The [`UnboundPolicy::Zero`]
    /// policy instead evaluates it as zero, which can silently produce a wrong answer.
    #[test]
    fn unbound_variable_policies() {
        let expr = x() + Expr::var("y");
        let ctxt = Ctxt::from_iter([("x", 2.0)]);

        let err = expr.eval(&ctxt).unwrap_err();
        assert_eq!(err.downcast_ref::<UnboundVariable>().unwrap().name, "y");
        assert_eq!(err.path, vec![1]);

        let ctxt = ctxt.with_policy(UnboundPolicy::Zero);
        assert_eq!(expr.eval(&ctxt).unwrap(), 2.0);
    }

    #[test]
    fn complex() {
        // (3 - 4i) * z at z = i
        let expr = Expr::constant(Complex64::new(3.0, -4.0)) * Expr::var("z");
        let ctxt = Ctxt::from_iter([("z", Complex64::new(0.0, 1.0))]);
        assert_eq!(expr.eval(&ctxt).unwrap(), Complex64::new(4.0, 3.0));
    }

    #[test]
    fn complex_division_by_zero() {
        let expr = Expr::constant(Complex64::new(1.0, 1.0)) / Expr::var("z");
        let ctxt = Ctxt::from_iter([("z", Complex64::new(0.0, 0.0))]);
        assert!(expr.eval(&ctxt).unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn complex_power() {
        // e^(i * pi) = -1
        let expr = Expr::constant(Complex64::new(std::f64::consts::E, 0.0))
            .pow(Expr::constant(Complex64::new(0.0, std::f64::consts::PI)));
        let value = expr.eval_default().unwrap();
        assert_float_absolute_eq!(value.re, -1.0, 1e-12);
        assert_float_absolute_eq!(value.im, 0.0, 1e-12);
    }

    #[test]
    fn shared_tree_across_threads() {
        // x * x + sin(x), with the same `x` node shared
        let shared = Arc::new(x());
        let expr = Arc::new(
            Expr::binary(BinOpKind::Mul, shared.clone(), shared.clone())
                + Expr::call(Function::Sin, shared)
        );

        let handles = (0..4u8)
            .map(|i| {
                let expr = Arc::clone(&expr);
                thread::spawn(move || {
                    let value = f64::from(i);
                    let ctxt = Ctxt::from_iter([("x", value)]);
                    (value, expr.eval(&ctxt).unwrap())
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            let (value, result) = handle.join().unwrap();
            assert_float_absolute_eq!(result, value * value + value.sin(), 1e-12);
        }
    }
}
