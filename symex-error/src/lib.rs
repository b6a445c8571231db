//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that locates an error inside an expression tree.

use ariadne::{Color, Report};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns `self` as [`Any`], so the concrete kind can be recovered with
    /// [`Error::downcast_ref`].
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error, underlining the given span of the source.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with the node of an expression tree that raised it.
#[derive(Debug)]
pub struct Error {
    /// Path from the root of the tree to the node that raised this error. Each entry is the index
    /// of the child to descend into: `0` for the operand of a call or the left side of a binary
    /// operation, `1` for the right side.
    ///
    /// An empty path refers to the root itself.
    pub path: Vec<usize>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error raised by the root of the tree being processed.
    pub fn new(kind: impl ErrorKind + 'static) -> Self {
        Self { path: Vec::new(), kind: Box::new(kind) }
    }

    /// Re-locates this error to be relative to the parent of the node that raised it, where that
    /// node is the `child`-th child of the parent.
    ///
    /// This is called while the error propagates upwards through the tree.
    pub fn within(mut self, child: usize) -> Self {
        self.path.insert(0, child);
        self
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error if it is `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind, underlining the given span of the source.
    pub fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, span)
    }
}
