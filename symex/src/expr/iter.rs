use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// A subtree that is shared by several parents is visited once per parent.
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a, T> {
    /// Expressions left to visit, each paired with whether its children were already pushed.
    stack: Vec<(&'a Expr<T>, bool)>,
}

impl<'a, T> ExprIter<'a, T> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr<T>) -> Self {
        Self { stack: vec![(expr, false)] }
    }
}

impl<'a, T> Iterator for ExprIter<'a, T> {
    type Item = &'a Expr<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.stack.pop()?;
            match expr {
                Expr::Constant(_) | Expr::Variable(_) => return Some(expr),
                _ if expanded => return Some(expr),
                Expr::Call(_, operand) => {
                    self.stack.push((expr, true));
                    self.stack.push((&**operand, false));
                },
                Expr::Binary(_, lhs, rhs) => {
                    self.stack.push((expr, true));
                    self.stack.push((&**rhs, false));
                    self.stack.push((&**lhs, false));
                },
            }
        }
    }
}
