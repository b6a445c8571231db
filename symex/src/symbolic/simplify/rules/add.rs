//! Simplification rules for expressions involving addition and subtraction.

use crate::{
    expr::{BinOpKind, Expr},
    field::Field,
    symbolic::{
        simplify::{rules::do_binary, step::Step},
        step_collector::StepCollector,
    },
};
use std::sync::Arc;

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Arc<Expr<T>>> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if lhs.is_zero() {
            Some(rhs.clone())
        } else if rhs.is_zero() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a-0 = a`
pub fn subtract_zero<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Arc<Expr<T>>> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        rhs.is_zero().then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `0-a = -1*a`
///
/// There is no negation node, so the result is a multiplication by the constant `-1`.
pub fn zero_minus<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Arc<Expr<T>>> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        lhs.is_zero().then(|| {
            Arc::new(Expr::binary(BinOpKind::Mul, Expr::constant(T::from_f64(-1.0)), rhs.clone()))
        })
    })?;

    step_collector.push(Step::ZeroMinus);
    Some(opt)
}

/// Applies all addition rules.
pub fn all<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Arc<Expr<T>>> {
    add_zero(expr, step_collector)
        .or_else(|| subtract_zero(expr, step_collector))
        .or_else(|| zero_minus(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Arc<Expr<f64>> {
        Arc::new(Expr::var("x"))
    }

    #[test]
    fn add_zero_either_side() {
        let x = x();
        for expr in [
            Expr::binary(BinOpKind::Add, x.clone(), Expr::zero()),
            Expr::binary(BinOpKind::Add, Expr::zero(), x.clone()),
        ] {
            let mut steps = Vec::new();
            let result = all(&expr, &mut steps).unwrap();
            assert!(Arc::ptr_eq(&result, &x));
            assert_eq!(steps, vec![Step::AddZero]);
        }
    }

    #[test]
    fn subtract_zero_keeps_lhs() {
        let x = x();
        let mut steps = Vec::new();
        let expr = Expr::binary(BinOpKind::Sub, x.clone(), Expr::zero());
        assert!(Arc::ptr_eq(&all(&expr, &mut steps).unwrap(), &x));
        assert_eq!(steps, vec![Step::SubtractZero]);
    }

    #[test]
    fn zero_minus_negates() {
        let mut steps = Vec::new();
        let expr = Expr::binary(BinOpKind::Sub, Expr::zero(), x());
        let result = all(&expr, &mut steps).unwrap();
        assert_eq!(*result, Expr::constant(-1.0) * Expr::var("x"));
        assert_eq!(steps, vec![Step::ZeroMinus]);
    }

    #[test]
    fn no_match() {
        let mut steps = Vec::new();
        let expr = Expr::binary(BinOpKind::Add, x(), Expr::constant(2.0));
        assert!(all(&expr, &mut steps).is_none());

        let expr = Expr::binary(BinOpKind::Mul, x(), Expr::zero());
        assert!(all(&expr, &mut steps).is_none());
        assert!(steps.is_empty());
    }
}
