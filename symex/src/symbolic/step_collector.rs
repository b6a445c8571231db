/// A type that collects the steps taken by an algorithm, such as the identities applied by the
/// simplifier.
///
/// Implemented for the unit type `()`, which discards every step, and for [`Vec`], which records
/// them in order.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
