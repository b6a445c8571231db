//! Derivatives of the functions in [`Function`], combined with the chain rule.

use crate::{
    error::Error,
    expr::{BinOpKind, Expr, Function},
    field::Field,
};
use std::sync::Arc;
use super::derivative;

/// Computes the derivative of `func(operand)` with respect to `with`.
///
/// With `u' = derivative(u)`:
///
/// - `sin(u)' = cos(u) * u'`
/// - `cos(u)' = (-1 * sin(u)) * u'`
/// - `ln(u)' = u' / u`
/// - `exp(u)' = exp(u) * u'`
///
/// Errors raised while differentiating the operand are re-located to be relative to the call.
pub(super) fn function_derivative<T: Field>(
    func: Function,
    operand: &Arc<Expr<T>>,
    with: &str,
) -> Result<Expr<T>, Error> {
    let operand_derivative = derivative(operand, with).map_err(|err| err.within(0))?;

    Ok(match func {
        Function::Sin => Expr::binary(
            BinOpKind::Mul,
            Expr::call(Function::Cos, operand.clone()),
            operand_derivative,
        ),
        Function::Cos => Expr::binary(
            BinOpKind::Mul,
            Expr::binary(
                BinOpKind::Mul,
                Expr::constant(T::from_f64(-1.0)),
                Expr::call(Function::Sin, operand.clone()),
            ),
            operand_derivative,
        ),
        Function::Ln => Expr::binary(BinOpKind::Div, operand_derivative, operand.clone()),
        Function::Exp => Expr::binary(
            BinOpKind::Mul,
            Expr::call(Function::Exp, operand.clone()),
            operand_derivative,
        ),
    })
}
