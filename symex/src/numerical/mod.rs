//! Numerical evaluation of expressions.

pub mod ctxt;
pub mod eval;
