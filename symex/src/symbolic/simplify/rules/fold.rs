//! Constant folding.

use crate::{
    error::Error,
    expr::Expr,
    field::Field,
    symbolic::{simplify::step::Step, step_collector::StepCollector},
};
use std::sync::Arc;

/// `a op b = c`, where `a` and `b` are constants.
///
/// Only fires when both operands are [`Expr::Constant`]s, so the operation never depends on the
/// value of a variable. Returns [`Err`] if the operation is a division by zero.
pub fn fold_constants<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Arc<Expr<T>>>, Error> {
    let Expr::Binary(op, lhs, rhs) = expr else {
        return Ok(None);
    };
    let (Expr::Constant(lhs), Expr::Constant(rhs)) = (&**lhs, &**rhs) else {
        return Ok(None);
    };

    let value = op.apply(*lhs, *rhs)?;
    step_collector.push(Step::FoldConstants);
    Ok(Some(Arc::new(Expr::Constant(value))))
}
