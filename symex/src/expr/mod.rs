//! The expression tree.
//!
//! An [`Expr`] is one of four kinds of node: a constant value of the [`Field`], a free variable,
//! a call to a [`Function`], or a binary operation ([`BinOpKind`]). Children are held behind
//! [`Arc`], so a subtree can be shared by several parents (for example, by an expression and its
//! derivative) and an expression can be read from several threads at once.
//!
//! Nodes are never mutated once built. Every operation in this crate that transforms a tree
//! returns a new one, reusing untouched subtrees of the input.
//!
//! Trees can be built with the constructor functions, or with the arithmetic operators:
//!
//! ```
//! use symex::{BinOpKind, Expr};
//!
//! let a: Expr<f64> = Expr::binary(
//!     BinOpKind::Mul,
//!     Expr::constant(2.0),
//!     Expr::var("x").sin(),
//! );
//! let b = Expr::constant(2.0) * Expr::var("x").sin();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "(2 * sin(x))");
//! ```
//!
//! [`PartialEq`] compares trees structurally. Constants are compared with the field's exact
//! equality.

mod func;
mod iter;
mod op;

use crate::field::Field;
use std::{collections::BTreeSet, ops::{Add, Div, Mul, Sub}, sync::Arc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use func::Function;
pub use iter::ExprIter;
pub use op::{Associativity, BinOpKind, Precedence};

/// A symbolic expression over the field `T`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr<T> {
    /// A literal value, such as `2` or `3 - 4i`.
    Constant(T),

    /// A free variable, such as `x`, resolved when the expression is evaluated.
    Variable(String),

    /// A function applied to an operand, such as `sin(x)`.
    Call(Function, Arc<Expr<T>>),

    /// A binary operation, such as `x + 1`.
    Binary(BinOpKind, Arc<Expr<T>>, Arc<Expr<T>>),
}

impl<T> Expr<T> {
    /// Creates a constant.
    pub fn constant(value: T) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable with the given name.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a call to the given function.
    pub fn call(func: Function, operand: impl Into<Arc<Self>>) -> Self {
        Self::Call(func, operand.into())
    }

    /// Creates a binary operation.
    pub fn binary(op: BinOpKind, lhs: impl Into<Arc<Self>>, rhs: impl Into<Arc<Self>>) -> Self {
        Self::Binary(op, lhs.into(), rhs.into())
    }

    /// Raises this expression to the given power.
    pub fn pow(self, exp: impl Into<Arc<Self>>) -> Self {
        Self::binary(BinOpKind::Pow, self, exp)
    }

    /// Returns `sin(self)`.
    pub fn sin(self) -> Self {
        Self::call(Function::Sin, self)
    }

    /// Returns `cos(self)`.
    pub fn cos(self) -> Self {
        Self::call(Function::Cos, self)
    }

    /// Returns `ln(self)`.
    pub fn ln(self) -> Self {
        Self::call(Function::Ln, self)
    }

    /// Returns `exp(self)`.
    pub fn exp(self) -> Self {
        Self::call(Function::Exp, self)
    }

    /// If the expression is an [`Expr::Constant`], returns a reference to the contained value.
    pub fn as_constant(&self) -> Option<&T> {
        match self {
            Self::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// If the expression is an [`Expr::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_, T> {
        ExprIter::new(self)
    }

    /// Returns the names of the free variables in the expression, sorted and without duplicates.
    pub fn variables(&self) -> Vec<&str> {
        self.post_order_iter()
            .filter_map(Expr::as_variable)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns true if the expression contains no free variables, i.e. if it can be evaluated
    /// without any bindings.
    pub fn is_closed(&self) -> bool {
        self.post_order_iter().all(|expr| !matches!(expr, Self::Variable(_)))
    }

    /// Returns the number of nodes in the expression, counting a shared subtree once per parent.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

impl<T: Field> Expr<T> {
    /// Creates the constant `0`.
    pub fn zero() -> Self {
        Self::Constant(T::zero())
    }

    /// Creates the constant `1`.
    pub fn one() -> Self {
        Self::Constant(T::one())
    }

    /// Returns true if the expression is a constant exactly equal to `value`.
    pub fn is_constant_eq(&self, value: T) -> bool {
        self.as_constant().is_some_and(|constant| *constant == value)
    }

    /// Returns true if the expression is the constant `0`.
    pub fn is_zero(&self) -> bool {
        self.is_constant_eq(T::zero())
    }

    /// Returns true if the expression is the constant `1`.
    pub fn is_one(&self) -> bool {
        self.is_constant_eq(T::one())
    }
}

/// Implements an arithmetic operator on [`Expr`] that builds the corresponding
/// [`Expr::Binary`] node.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $kind:ident) => {
        impl<T, R: Into<Arc<Expr<T>>>> $trait<R> for Expr<T> {
            type Output = Expr<T>;

            fn $method(self, rhs: R) -> Self::Output {
                Expr::binary(BinOpKind::$kind, self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, Add);
impl_binary_op!(Sub, sub, Sub);
impl_binary_op!(Mul, mul, Mul);
impl_binary_op!(Div, div, Div);
