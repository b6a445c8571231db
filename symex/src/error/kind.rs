use ariadne::Fmt;
use crate::expr::BinOpKind;
use symex_attrs::ErrorKind;
use symex_error::EXPR;

/// Formats a list of suggested names for a help message.
fn suggest(suggestions: &[String]) -> Option<String> {
    match suggestions {
        [] => None,
        [one] => Some(format!("did you mean `{}`?", one.as_str().fg(EXPR))),
        many => Some(format!(
            "did you mean one of these? {}",
            many.iter()
                .map(|s| format!("`{}`", s.as_str().fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

/// A denominator is zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    label = "this denominator is zero",
)]
pub struct DivisionByZero;

/// A variable has no binding in the evaluation context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not bound to a value", self.name),
    label = "this variable",
    help = suggest(&self.suggestions).unwrap_or_else(|| format!(
        "add a binding for {} to the context",
        (&self.name).fg(EXPR),
    )),
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: String,

    /// Bound variables with a similar name, if any.
    pub suggestions: Vec<String>,
}

/// The operation cannot be performed over the field the expression is built over.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate `{}` over the {} field", self.op, self.field),
    label = "this operation",
    help = "powers can only be differentiated over an ordered field, such as the real numbers",
)]
pub struct UnsupportedOperation {
    /// The operator that cannot be differentiated.
    pub op: BinOpKind,

    /// The name of the field.
    pub field: &'static str,
}

/// The function does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", self.name),
    label = "this function",
    help = suggest(&self.suggestions).unwrap_or_else(|| format!(
        "the available functions are: {}",
        crate::expr::Function::ALL.map(|f| f.name()).join(", "),
    )),
)]
pub struct UnknownFunction {
    /// The name of the function.
    pub name: String,

    /// Functions with a similar name, if any.
    pub suggestions: Vec<String>,
}

/// The operator does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not an operator", self.symbol),
    label = "this operator",
    help = format!(
        "the available operators are: {}",
        BinOpKind::ALL.map(|op| op.symbol()).join(" "),
    ),
)]
pub struct UnknownOperator {
    /// The symbol that was used.
    pub symbol: String,
}
