//! Conditional evaluation.

use super::{Constant, Scalar, ScalarFunc};
use crate::func::Func;

/// A [`Scalar`] that picks one of two branches based on a condition.
///
/// Every form reduces to the same shape: an input scalar, a condition
/// transform and two branch transforms. Evaluating a `Ternary`:
///
/// 1. evaluates the input once,
/// 2. applies the condition to it once,
/// 3. applies exactly one branch to it and returns that result.
///
/// The branch that is not selected is never invoked, so its side effects
/// never happen and it cannot fail. Failures of the input, the condition or
/// the selected branch are returned unchanged.
///
/// # Examples
///
/// Literal condition:
///
/// ```rust
/// use deferrable::scalar::{Scalar, Ternary};
///
/// let picked = Ternary::literal(false, || Ok::<_, ()>("left"), || Ok("right"));
/// assert_eq!(picked.value(), Ok("right"));
/// ```
///
/// Shared input:
///
/// ```rust
/// use deferrable::scalar::{Scalar, Ternary};
///
/// let sign = Ternary::with_input(
///     -5,
///     |number: i32| Ok::<_, ()>(number >= 0),
///     |_: i32| Ok("non-negative"),
///     |_: i32| Ok("negative"),
/// );
/// assert_eq!(sign.value(), Ok("negative"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ternary<I, C, A, B> {
    input: I,
    condition: C,
    consequent: A,
    alternative: B,
}

impl<I, C, A, B> Ternary<I, C, A, B> {
    /// Creates a ternary from an input scalar and three transforms over its
    /// value.
    #[inline]
    pub const fn with_scalar_input(input: I, condition: C, consequent: A, alternative: B) -> Self {
        Self {
            input,
            condition,
            consequent,
            alternative,
        }
    }
}

impl<X, E, C, A, B> Ternary<Constant<X, E>, C, A, B> {
    /// Creates a ternary passing the literal `input` to the condition and to
    /// the selected branch.
    #[inline]
    pub const fn with_input(input: X, condition: C, consequent: A, alternative: B) -> Self {
        Self::with_scalar_input(Constant::new(input), condition, consequent, alternative)
    }
}

impl<E, C, A, B> Ternary<Constant<(), E>, ScalarFunc<C>, ScalarFunc<A>, ScalarFunc<B>> {
    /// Creates a ternary from a condition scalar and two branch scalars.
    #[inline]
    pub const fn new(condition: C, consequent: A, alternative: B) -> Self
    where
        C: Scalar<Output = bool, Error = E>,
        A: Scalar<Error = E>,
        B: Scalar<Output = A::Output, Error = E>,
    {
        Self::with_input(
            (),
            ScalarFunc::new(condition),
            ScalarFunc::new(consequent),
            ScalarFunc::new(alternative),
        )
    }
}

impl<E, A, B>
    Ternary<Constant<(), E>, ScalarFunc<Constant<bool, E>>, ScalarFunc<A>, ScalarFunc<B>>
{
    /// Creates a ternary over a condition that is already known.
    ///
    /// The branches are still deferred: only the selected one is evaluated,
    /// and only when the ternary is.
    #[inline]
    pub const fn literal(condition: bool, consequent: A, alternative: B) -> Self
    where
        A: Scalar<Error = E>,
        B: Scalar<Output = A::Output, Error = E>,
    {
        Self::new(Constant::new(condition), consequent, alternative)
    }
}

impl<T, E>
    Ternary<
        Constant<(), E>,
        ScalarFunc<Constant<bool, E>>,
        ScalarFunc<Constant<T, E>>,
        ScalarFunc<Constant<T, E>>,
    >
{
    /// Creates a ternary choosing between two literal values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferrable::scalar::{Scalar, Ternary};
    ///
    /// let answer = Ternary::of_values(true, 42, 0);
    /// assert_eq!(answer.value(), Ok::<_, std::convert::Infallible>(42));
    /// ```
    #[inline]
    pub const fn of_values(condition: bool, consequent: T, alternative: T) -> Self
    where
        T: Clone,
    {
        Self::literal(condition, Constant::new(consequent), Constant::new(alternative))
    }
}

impl<I, C, A, B> Scalar for Ternary<I, C, A, B>
where
    I: Scalar,
    I::Output: Clone,
    C: Func<I::Output, Output = bool, Error = I::Error>,
    A: Func<I::Output, Error = I::Error>,
    B: Func<I::Output, Output = A::Output, Error = I::Error>,
{
    type Output = A::Output;
    type Error = I::Error;

    fn value(&self) -> Result<Self::Output, Self::Error> {
        let input = self.input.value()?;
        if self.condition.apply(input.clone())? {
            self.consequent.apply(input)
        } else {
            self.alternative.apply(input)
        }
    }
}
