/// Object holding some configuration that maps an input to an output.
pub trait Function {
    type Input;
    type Output;

    /// Map the input to the output.
    fn map(&self, input: Self::Input) -> Self::Output;
}

/// Composes a new function that feeds the output of `a` into `b`, i.e. `b ∘ a`.
pub fn compose<A, B>(a: A, b: B) -> impl Fn(A::Input) -> B::Output
where
    A: Function,
    B: Function<Input = A::Output>,
{
    move |input: A::Input| b.map(a.map(input))
}
