//! The binary operators that can appear in an expression.

use crate::{
    error::{kind::{DivisionByZero, UnknownOperator}, Error},
    field::Field,
};
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The precedence of an operator. Operators with higher precedence bind more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `+` and `-`.
    Term,

    /// `*` and `/`.
    Factor,

    /// `^`.
    Exp,
}

/// The associativity of an operator, describing how a chain of operators with the same
/// precedence is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,

    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOpKind {
    /// All binary operators.
    pub const ALL: [BinOpKind; 5] = [
        BinOpKind::Add,
        BinOpKind::Sub,
        BinOpKind::Mul,
        BinOpKind::Div,
        BinOpKind::Pow,
    ];

    /// Returns the symbol used to render the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Pow => Precedence::Exp,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Applies the operation to two values.
    ///
    /// Division checks the right-hand side against zero before dividing. The resulting error is
    /// located at the right operand (`within(1)`), relative to the node performing the operation.
    pub fn apply<T: Field>(&self, left: T, right: T) -> Result<T, Error> {
        Ok(match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right.is_zero() {
                    return Err(Error::new(DivisionByZero).within(1));
                }
                left / right
            },
            Self::Pow => left.pow(right),
        })
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for BinOpKind {
    type Err = Error;

    /// Looks up an operator by its symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| Error::new(UnknownOperator { symbol: s.to_string() }))
    }
}
