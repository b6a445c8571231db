//! Simplification rules for expressions involving multiplication and division.

use crate::{
    error::{kind::DivisionByZero, Error},
    expr::{BinOpKind, Expr},
    field::Field,
    symbolic::{
        simplify::{rules::do_binary, step::Step},
        step_collector::StepCollector,
    },
};
use std::sync::Arc;

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Arc<Expr<T>>> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        (lhs.is_zero() || rhs.is_zero()).then(|| Arc::new(Expr::zero()))
    })?;

    // keep the step collection logic outside of the closure
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Arc<Expr<T>>> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_one() {
            Some(rhs.clone())
        } else if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a/0` is an error, even when `a` is not a constant.
///
/// The error is located at the denominator.
pub fn divide_zero<T: Field>(expr: &Expr<T>) -> Result<(), Error> {
    match do_binary(expr, BinOpKind::Div, |_, rhs| rhs.is_zero().then_some(())) {
        Some(()) => Err(Error::new(DivisionByZero).within(1)),
        None => Ok(()),
    }
}

/// `0/a = 0`
pub fn zero_divide<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Arc<Expr<T>>> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, _| {
        lhs.is_zero().then(|| Arc::new(Expr::zero()))
    })?;

    step_collector.push(Step::ZeroDivide);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Arc<Expr<T>>> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        rhs.is_one().then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// Applies all multiplication rules.
///
/// Returns [`Err`] if the expression divides by the constant `0`.
pub fn all<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Arc<Expr<T>>>, Error> {
    divide_zero(expr)?;

    Ok(multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| zero_divide(expr, step_collector))
        .or_else(|| divide_one(expr, step_collector)))
}
