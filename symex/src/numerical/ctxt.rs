use crate::{
    error::{kind::UnboundVariable, Error},
    field::Field,
};
use levenshtein::levenshtein;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// What the evaluator does when it finds a variable with no binding in the context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum UnboundPolicy {
    /// Fail with an [`UnboundVariable`] error.
    #[default]
    Error,

    /// Treat the variable as the field's zero. Misspelled variable names go unnoticed with this
    /// policy.
    Zero,
}

/// A context to use when evaluating an expression, containing the values bound to its
/// variables.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt<T> {
    /// The variables in the context.
    vars: HashMap<String, T>,

    /// What to do when the expression refers to a variable that isn't in the context.
    pub on_unbound_variable: UnboundPolicy,
}

impl<T> Default for Ctxt<T> {
    fn default() -> Self {
        Self {
            vars: HashMap::new(),
            on_unbound_variable: UnboundPolicy::default(),
        }
    }
}

impl<T: Field> Ctxt<T> {
    /// Creates a new empty context, which reports unbound variables as errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for unbound variables.
    pub fn with_policy(mut self, policy: UnboundPolicy) -> Self {
        self.on_unbound_variable = policy;
        self
    }

    /// Add a variable to the context, replacing any previous value bound to the same name.
    pub fn add_var(&mut self, name: &str, value: T) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<T> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, T> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, sorted.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.as_str())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }

    /// Resolves a variable according to the context's [`UnboundPolicy`].
    pub fn resolve(&self, name: &str) -> Result<T, Error> {
        match (self.get_var(name), self.on_unbound_variable) {
            (Some(value), _) => Ok(value),
            (None, UnboundPolicy::Zero) => Ok(T::zero()),
            (None, UnboundPolicy::Error) => Err(Error::new(UnboundVariable {
                name: name.to_string(),
                suggestions: self.get_similar_vars(name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })),
        }
    }
}

impl<T, S: Into<String>> FromIterator<(S, T)> for Ctxt<T> {
    /// Creates a context binding each name to its value, which reports unbound variables as
    /// errors.
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
            on_unbound_variable: UnboundPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::kind::UnboundVariable;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn add_and_get() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 2.0);
        ctxt.add_var("x", 3.0);
        assert_eq!(ctxt.get_var("x"), Some(3.0));
        assert_eq!(ctxt.get_var("y"), None);
        assert_eq!(ctxt.get_vars().len(), 1);
    }

    #[test]
    fn similar_vars() {
        let ctxt = Ctxt::from_iter([("x1", 1.0), ("x2", 2.0), ("theta", 3.0)]);
        assert_eq!(ctxt.get_similar_vars("x"), vec!["x1", "x2"]);
        assert_eq!(ctxt.get_similar_vars("thta"), vec!["theta"]);
    }

    #[test]
    fn resolve_with_error_policy() {
        let ctxt = Ctxt::<f64>::new();
        let err = ctxt.resolve("x").unwrap_err();
        assert_eq!(err.downcast_ref::<UnboundVariable>().unwrap().name, "x");
    }

    #[test]
    fn resolve_with_zero_policy() {
        let ctxt = Ctxt::<f64>::new().with_policy(UnboundPolicy::Zero);
        assert_eq!(ctxt.resolve("x").unwrap(), 0.0);
    }
}
