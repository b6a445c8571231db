/// An identity applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `a op b = c`, where `a` and `b` are constants.
    FoldConstants,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -1*a`
    ZeroMinus,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a/1 = a`
    DivideOne,

    /// `0/a = 0`
    ZeroDivide,
}
