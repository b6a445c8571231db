//! Errors raised by the operations on expressions.
//!
//! Every error kind is its own type in [`kind`], implementing [`ErrorKind`]. An [`Error`] pairs a
//! kind with the location of the node that raised it, so [`report`] can underline that node in
//! the rendered expression.

pub mod kind;

use ariadne::Report;
use crate::{expr::Expr, field::Field, fmt};
use std::ops::Range;

pub use symex_error::{Error, ErrorKind};

/// Builds a report for an error raised while processing `expr`.
///
/// The report underlines the node that raised the error within the fully parenthesized rendering
/// of `expr` (see [`fmt::render`]). To print it, write it together with that rendering:
///
/// ```
/// use ariadne::Source;
/// use symex::{error, Ctxt, Eval, Expr};
///
/// let expr = Expr::var("x") / (Expr::var("x") - Expr::constant(1.0));
/// let ctxt = Ctxt::from_iter([("x", 1.0)]);
/// let err = expr.eval(&ctxt).unwrap_err();
///
/// let src = expr.to_string();
/// let mut out = Vec::new();
/// error::report(&expr, &err, "input")
///     .write(("input", Source::from(src)), &mut out)
///     .unwrap();
/// ```
pub fn report<'a, T: Field>(
    expr: &Expr<T>,
    err: &Error,
    src_id: &'a str,
) -> Report<'a, (&'a str, Range<usize>)> {
    let span = fmt::locate(expr, &err.path)
        .unwrap_or_else(|| 0..fmt::render(expr).chars().count());
    err.build_report(src_id, span)
}
