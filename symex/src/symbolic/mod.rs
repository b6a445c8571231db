//! Symbolic manipulation of expressions.
//!
//! # Differentiation
//!
//! [`derivative()`] produces a new expression representing the derivative of an expression with
//! respect to a variable. The result is **not** simplified, and reuses the subtrees of the input
//! wherever the differentiation rules copy them:
//!
//! ```
//! use symex::{Expr, symbolic::{derivative, simplify}};
//!
//! let expr: Expr<f64> = Expr::var("x").sin();
//! let derivative = derivative(&expr, "x").unwrap();
//! assert_eq!(derivative.to_string(), "(cos(x) * 1)");
//! assert_eq!(simplify(&derivative).unwrap().to_string(), "cos(x)");
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] rewrites an expression bottom-up using a fixed set of identities, such as
//! `x + 0 = x` and `0 * x = 0`, and folds operations whose operands are both constants. It is a
//! best-effort simplifier, not a canonicalizer: two equivalent expressions do not necessarily
//! simplify to the same result. It is idempotent.
//!
//! [`simplify_with_steps()`] additionally returns the identities that were applied, in order.
//!
//! For more information, see the [`mod@simplify`] module.

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, derivative_n};
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
