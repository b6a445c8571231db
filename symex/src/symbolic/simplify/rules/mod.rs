//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules are only ever applied to a node whose children are already
//! simplified.

pub mod add;
pub mod fold;
pub mod multiply;

use crate::{
    error::Error,
    expr::{BinOpKind, Expr},
    field::Field,
    symbolic::step_collector::StepCollector,
};
use std::sync::Arc;
use super::step::Step;

/// If the expression is a binary operation with the given operator, calls the given
/// transformation function with the left and right-hand-side of the operation.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary<T, R>(
    expr: &Expr<T>,
    op: BinOpKind,
    f: impl FnOnce(&Arc<Expr<T>>, &Arc<Expr<T>>) -> Option<R>,
) -> Option<R> {
    match expr {
        Expr::Binary(kind, lhs, rhs) if *kind == op => f(lhs, rhs),
        _ => None,
    }
}

/// Applies all rules, returning the result of the first one that applies.
pub fn all<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Arc<Expr<T>>>, Error> {
    if let Some(folded) = fold::fold_constants(expr, step_collector)? {
        return Ok(Some(folded));
    }

    if let Some(result) = add::all(expr, step_collector) {
        return Ok(Some(result));
    }

    multiply::all(expr, step_collector)
}
