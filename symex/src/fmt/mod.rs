//! Rendering expressions to strings.
//!
//! By default, expressions are rendered **fully parenthesized**: every binary operation is wrapped
//! in parentheses, with its operator surrounded by spaces, so the structure of the tree can be
//! read back without knowing any precedence rules.
//!
//! ```
//! use symex::Expr;
//!
//! let expr = (Expr::var("x") + Expr::constant(1.0)).sin() * Expr::constant(-2.0);
//! assert_eq!(expr.to_string(), "(sin(x + 1) * (-2))");
//! ```
//!
//! A function call whose operand is a binary operation reuses the operation's own parentheses,
//! as in `sin(x + 1)` above.
//!
//! [`Parens::Minimal`] omits the parentheses implied by operator precedence and associativity
//! instead.

pub mod complex;
pub mod float;

use crate::{expr::{Associativity, BinOpKind, Expr}, field::Field};
use std::{fmt::{Display, Formatter}, ops::Range};

/// Which parentheses to write around binary operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Parens {
    /// Wrap every binary operation in parentheses.
    #[default]
    Full,

    /// Only write the parentheses needed to preserve the structure of the tree.
    Minimal,
}

/// Formatting options for expressions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Which parentheses to write around binary operations.
    pub parens: Parens,
}

/// Position of a binary operation relative to the binary operation it is an operand of.
#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Wraps a field value to render it as a constant.
struct Constant<'a, T>(&'a T);

impl<T: Field> Display for Constant<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt_constant(f)
    }
}

/// Returns true if a binary operation `child` needs parentheses when it is on the given `side`
/// of the binary operation `parent`, in [`Parens::Minimal`] mode.
fn needs_parens(child: BinOpKind, parent: BinOpKind, side: Side) -> bool {
    match child.precedence().cmp(&parent.precedence()) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => match (parent.associativity(), side) {
            (Associativity::Left, Side::Right) | (Associativity::Right, Side::Left) => true,
            _ => false,
        },
    }
}

/// Renders an expression, optionally recording the span of the node at a given path.
struct Renderer<'p> {
    out: String,
    options: FormatOptions,

    /// The path of the current node from the root.
    path: Vec<usize>,

    /// The path of the node whose span should be recorded.
    target: Option<&'p [usize]>,

    /// The span of the target node, once rendered.
    span: Option<Range<usize>>,
}

impl<'p> Renderer<'p> {
    fn new(options: FormatOptions, target: Option<&'p [usize]>) -> Self {
        Self {
            out: String::new(),
            options,
            path: Vec::new(),
            target,
            span: None,
        }
    }

    /// Renders the `index`-th child of the current node.
    fn child<T: Field>(&mut self, index: usize, expr: &Expr<T>, parent: Option<(BinOpKind, Side)>) {
        self.path.push(index);
        self.node(expr, parent);
        self.path.pop();
    }

    fn node<T: Field>(&mut self, expr: &Expr<T>, parent: Option<(BinOpKind, Side)>) {
        let start = self.out.len();

        match expr {
            Expr::Constant(value) => self.out.push_str(&Constant(value).to_string()),
            Expr::Variable(name) => self.out.push_str(name),
            Expr::Call(func, operand) => {
                self.out.push_str(func.name());
                if self.options.parens == Parens::Full && matches!(**operand, Expr::Binary(..)) {
                    // the operation writes its own parentheses
                    self.child(0, operand, None);
                } else {
                    self.out.push('(');
                    self.child(0, operand, None);
                    self.out.push(')');
                }
            },
            Expr::Binary(op, lhs, rhs) => {
                let wrap = match (self.options.parens, parent) {
                    (Parens::Full, _) => true,
                    (Parens::Minimal, Some((parent, side))) => needs_parens(*op, parent, side),
                    (Parens::Minimal, None) => false,
                };

                if wrap {
                    self.out.push('(');
                }
                self.child(0, lhs, Some((*op, Side::Left)));
                self.out.push(' ');
                self.out.push_str(op.symbol());
                self.out.push(' ');
                self.child(1, rhs, Some((*op, Side::Right)));
                if wrap {
                    self.out.push(')');
                }
            },
        }

        if self.span.is_none() && self.target == Some(self.path.as_slice()) {
            self.span = Some(start..self.out.len());
        }
    }
}

/// Renders the expression fully parenthesized.
pub fn render<T: Field>(expr: &Expr<T>) -> String {
    render_with(expr, FormatOptions::default())
}

/// Renders the expression with the given options.
pub fn render_with<T: Field>(expr: &Expr<T>, options: FormatOptions) -> String {
    let mut renderer = Renderer::new(options, None);
    renderer.node(expr, None);
    renderer.out
}

/// Returns the span of the node at the given path within the fully parenthesized rendering of the
/// expression, or [`None`] if there is no node at that path.
///
/// Each entry of the path is the index of the child to descend into: `0` for the operand of a call
/// or the left side of a binary operation, `1` for the right side.
///
/// The span is measured in characters, not bytes, to match the spans used by [`ariadne`].
pub fn locate<T: Field>(expr: &Expr<T>, path: &[usize]) -> Option<Range<usize>> {
    let mut renderer = Renderer::new(FormatOptions::default(), Some(path));
    renderer.node(expr, None);

    let out = renderer.out;
    renderer.span.map(|span| {
        let start = out[..span.start].chars().count();
        start..start + out[span].chars().count()
    })
}

impl<T: Field> Display for Expr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self))
    }
}
