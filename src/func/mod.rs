//! Deferred one- and two-argument transforms.
//!
//! A [`Func`] is a possibly-failing transform that does nothing until
//! [`apply`](Func::apply) is called; a [`BiFunc`] is the same for two
//! arguments. Every closure returning a `Result` already is one:
//!
//! ```rust
//! use deferrable::func::{BiFunc, Func};
//!
//! let parse = |text: &str| text.parse::<i32>();
//! assert_eq!(Func::apply(&parse, "42"), Ok(42));
//! assert!(Func::apply(&parse, "forty-two").is_err());
//!
//! let divide = |left: i32, right: i32| {
//!     left.checked_div(right).ok_or("division by zero")
//! };
//! assert_eq!(BiFunc::apply(&divide, 84, 2), Ok(42));
//! ```
//!
//! The combinators in this module are generic over these traits:
//!
//! - [`Repeated`]: applies a transform a fixed number of times and keeps the
//!   last result
//! - [`CheckedFunc`] and [`CheckedBiFunc`]: remap the transform's failure
//!   into a caller-chosen type
//!
//! No implementation here memoizes. Applying a transform twice runs it twice,
//! with whatever side effects it has.

mod checked;
mod repeated;

pub use checked::{CheckedBiFunc, CheckedFunc};
pub use repeated::Repeated;

/// A deferred, possibly-failing transform of one argument.
///
/// # Examples
///
/// ```rust
/// use deferrable::func::Func;
///
/// struct Doubled;
///
/// impl Func<i32> for Doubled {
///     type Output = i32;
///     type Error = std::num::TryFromIntError;
///
///     fn apply(&self, input: i32) -> Result<i32, Self::Error> {
///         i16::try_from(input).map(|small| i32::from(small) * 2)
///     }
/// }
///
/// assert_eq!(Doubled.apply(21), Ok(42));
/// assert!(Doubled.apply(1 << 20).is_err());
/// ```
pub trait Func<X> {
    /// The value produced on success.
    type Output;
    /// The failure produced otherwise.
    type Error;

    /// Runs the transform on `input`.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the transform itself produces.
    fn apply(&self, input: X) -> Result<Self::Output, Self::Error>;
}

impl<F, X, Y, E> Func<X> for F
where
    F: Fn(X) -> Result<Y, E>,
{
    type Output = Y;
    type Error = E;

    #[inline]
    fn apply(&self, input: X) -> Result<Y, E> {
        self(input)
    }
}

/// A deferred, possibly-failing transform of two arguments.
pub trait BiFunc<X, Y> {
    /// The value produced on success.
    type Output;
    /// The failure produced otherwise.
    type Error;

    /// Runs the transform on `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the transform itself produces.
    fn apply(&self, first: X, second: Y) -> Result<Self::Output, Self::Error>;
}

impl<F, X, Y, Z, E> BiFunc<X, Y> for F
where
    F: Fn(X, Y) -> Result<Z, E>,
{
    type Output = Z;
    type Error = E;

    #[inline]
    fn apply(&self, first: X, second: Y) -> Result<Z, E> {
        self(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_closure_is_func() {
        let increment = |value: i32| Ok::<_, String>(value + 1);
        assert_eq!(Func::apply(&increment, 41), Ok(42));
    }

    #[rstest]
    fn test_closure_is_bi_func() {
        let concatenate = |left: &str, right: &str| Ok::<_, String>(format!("{left}{right}"));
        assert_eq!(
            BiFunc::apply(&concatenate, "de", "ferred"),
            Ok("deferred".to_string())
        );
    }

    #[rstest]
    fn test_func_runs_on_every_apply() {
        let calls = Cell::new(0);
        let counted = |value: i32| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(value)
        };

        assert_eq!(calls.get(), 0);
        let _ = Func::apply(&counted, 1);
        let _ = Func::apply(&counted, 1);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_func_failure_is_returned() {
        let failing = |_: i32| Err::<i32, _>("nope");
        assert_eq!(Func::apply(&failing, 1), Err("nope"));
    }
}
