//! The functions that can be called in an expression.

use crate::{
    error::{kind::UnknownFunction, Error},
    field::Field,
};
use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::{collections::HashMap, fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Functions indexed by name.
static FUNCTIONS: Lazy<HashMap<&'static str, Function>> = Lazy::new(|| {
    Function::ALL
        .into_iter()
        .map(|func| (func.name(), func))
        .collect()
});

/// A transcendental function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum Function {
    /// Sine, in radians.
    Sin,

    /// Cosine, in radians.
    Cos,

    /// Natural logarithm.
    Ln,

    /// Natural exponential.
    Exp,
}

impl Function {
    /// All functions.
    pub const ALL: [Function; 4] = [Function::Sin, Function::Cos, Function::Ln, Function::Exp];

    /// Returns the name used to render calls to the function.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Ln => "ln",
            Self::Exp => "exp",
        }
    }

    /// Applies the function to a value, using the field's own implementation.
    pub fn apply<T: Field>(&self, value: T) -> T {
        match self {
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Ln => value.ln(),
            Self::Exp => value.exp(),
        }
    }

    /// Returns the names of all functions with a name similar to the given name.
    pub fn similar_names(name: &str) -> Vec<String> {
        let mut names = FUNCTIONS
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.to_string())
            .collect::<Vec<_>>();
        names.sort();
        names
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Function {
    type Err = Error;

    /// Looks up a function by its name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FUNCTIONS.get(s).copied().ok_or_else(|| Error::new(UnknownFunction {
            name: s.to_string(),
            suggestions: Self::similar_names(s),
        }))
    }
}
