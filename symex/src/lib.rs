//! Symbolic expressions over a numeric field.
//!
//! An expression is a tree of [`Expr`] nodes: constants, variables, calls to one of a few
//! transcendental [`Function`]s, and binary operations. Four operations are defined on the tree:
//!
//! - **evaluate** it against a set of variable bindings, with the [`Eval`] trait and a [`Ctxt`];
//! - **differentiate** it with respect to a variable, with [`symbolic::derivative`];
//! - **render** it to a string, with [`fmt::render`] or the [`Display`](std::fmt::Display)
//! implementation;
//! - **simplify** it using a fixed set of algebraic identities and constant folding, with
//! [`symbolic::simplify`].
//!
//! Every operation is generic over the numeric [`Field`] the tree is built over. [`f64`] and
//! [`Complex64`](num_complex::Complex64) are supported out of the box.
//!
//! ```
//! use symex::{Ctxt, Eval, Expr, symbolic};
//!
//! // x^2 + 3
//! let expr = Expr::var("x").pow(Expr::constant(2.0)) + Expr::constant(3.0);
//! assert_eq!(expr.to_string(), "((x ^ 2) + 3)");
//!
//! let ctxt = Ctxt::from_iter([("x", 2.0)]);
//! assert_eq!(expr.eval(&ctxt).unwrap(), 7.0);
//!
//! let derivative = symbolic::derivative(&expr, "x").unwrap();
//! let simplified = symbolic::simplify(&derivative).unwrap();
//! assert_eq!(simplified.to_string(), "(2 * (x ^ 1))");
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `serde` traits for expressions and the types they are built from.

pub mod error;
pub mod expr;
pub mod field;
pub mod fmt;
pub mod numerical;
pub mod symbolic;

pub use error::Error;
pub use expr::{BinOpKind, Expr, Function};
pub use field::Field;
pub use numerical::{ctxt::{Ctxt, UnboundPolicy}, eval::Eval};
