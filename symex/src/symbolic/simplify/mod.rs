//! Simplification of expressions using a fixed set of identities.
//!
//! The simplifier walks the tree bottom-up. Each node's children are simplified first, then the
//! [rules](rules) are tried on the node in order, and the first one that applies replaces it.
//! Every rule produces either a constant, one of the node's (already simplified) children, or a
//! product of `-1` and a simplified child, so one pass is enough: simplifying an already
//! simplified expression returns it unchanged.
//!
//! Subtrees that no rule touches are reused as-is, and the input expression is never modified:
//!
//! ```
//! use symex::{Expr, symbolic::simplify};
//!
//! let expr: Expr<f64> = Expr::var("x").sin() * (Expr::constant(2.0) - Expr::constant(1.0));
//! assert_eq!(simplify(&expr).unwrap().to_string(), "sin(x)");
//! assert_eq!(expr.to_string(), "(sin(x) * (2 - 1))");
//! ```
//!
//! Simplification fails if it finds a division by the constant `0`.

pub mod rules;
pub mod step;

use crate::{error::Error, expr::Expr, field::Field};
use std::sync::Arc;
use step::Step;
use super::step_collector::StepCollector;

/// Simplifies the given node, assuming nothing about its children.
///
/// Returns `Ok(None)` if the node is already fully simplified, in which case the caller should
/// keep the original.
fn inner<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Arc<Expr<T>>>, Error> {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => Ok(None),
        Expr::Call(func, operand) => Ok(inner(operand, step_collector)
            .map_err(|err| err.within(0))?
            .map(|operand| Arc::new(Expr::Call(*func, operand)))),
        Expr::Binary(op, lhs, rhs) => {
            let new_lhs = inner(lhs, step_collector).map_err(|err| err.within(0))?;
            let new_rhs = inner(rhs, step_collector).map_err(|err| err.within(1))?;

            let node = if new_lhs.is_none() && new_rhs.is_none() {
                None
            } else {
                Some(Expr::Binary(
                    *op,
                    new_lhs.unwrap_or_else(|| lhs.clone()),
                    new_rhs.unwrap_or_else(|| rhs.clone()),
                ))
            };

            let current = node.as_ref().unwrap_or(expr);
            match rules::all(current, step_collector)? {
                Some(result) => Ok(Some(result)),
                None => Ok(node.map(Arc::new)),
            }
        },
    }
}

/// Simplifies the given expression, reporting each identity that was applied to the given
/// [`StepCollector`].
pub fn simplify_with<T: Field>(
    expr: &Expr<T>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr<T>, Error> {
    Ok(match inner(expr, step_collector)? {
        Some(simplified) => Arc::unwrap_or_clone(simplified),
        None => expr.clone(),
    })
}

/// Simplifies the given expression.
///
/// Returns [`Err`] if the expression divides by the constant `0`. The error is located at the
/// zero denominator.
pub fn simplify<T: Field>(expr: &Expr<T>) -> Result<Expr<T>, Error> {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, and returns the identities that were applied, in the order
/// they were applied.
pub fn simplify_with_steps<T: Field>(expr: &Expr<T>) -> Result<(Expr<T>, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps)?;
    Ok((simplified, steps))
}
