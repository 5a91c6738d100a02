//! Deferred zero-argument computations.
//!
//! A [`Scalar`] produces a value, or fails, when [`value`](Scalar::value) is
//! called, and not before. Building a graph of scalars runs nothing; the
//! terminal `value()` call walks it.
//!
//! - [`Constant`]: a scalar that always yields the same value
//! - [`ScalarFunc`]: a scalar seen as a transform that ignores its input
//! - [`Ternary`]: evaluates a condition and then exactly one of two branches
//! - [`Checked`]: remaps the failure of a scalar into a caller-chosen type
//! - [`Sticky`]: the only memoizing scalar; everything else re-evaluates
//!
//! # Examples
//!
//! ```rust
//! use deferrable::scalar::{Scalar, Ternary};
//! use std::cell::Cell;
//!
//! let evaluated = Cell::new(false);
//! let answer = Ternary::new(
//!     || Ok::<_, std::io::Error>(true),
//!     || Ok(42),
//!     || {
//!         evaluated.set(true);
//!         Ok(0)
//!     },
//! );
//!
//! assert_eq!(answer.value().ok(), Some(42));
//! assert!(!evaluated.get());
//! ```

mod checked;
mod constant;
mod sticky;
mod ternary;

pub use checked::Checked;
pub use constant::Constant;
pub use sticky::Sticky;
pub use ternary::Ternary;

use crate::func::Func;

/// A deferred, possibly-failing computation of a single value.
///
/// Implementations must not cache unless that is their documented purpose
/// (see [`Sticky`]): each call to [`value`](Scalar::value) performs the
/// computation again, side effects included.
///
/// Every `Fn() -> Result<T, E>` closure is a `Scalar`.
///
/// # Examples
///
/// ```rust
/// use deferrable::scalar::Scalar;
///
/// let port = || std::env::var("NO_SUCH_VARIABLE_HOPEFULLY").map(|text| text.len());
/// assert!(port.value().is_err());
/// ```
pub trait Scalar {
    /// The value produced on success.
    type Output;
    /// The failure produced otherwise.
    type Error;

    /// Runs the computation.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the computation itself produces.
    fn value(&self) -> Result<Self::Output, Self::Error>;
}

impl<F, T, E> Scalar for F
where
    F: Fn() -> Result<T, E>,
{
    type Output = T;
    type Error = E;

    #[inline]
    fn value(&self) -> Result<T, E> {
        self()
    }
}

/// A [`Func`] that ignores its input and evaluates a scalar instead.
///
/// This lets scalar-only pipelines plug into combinators that are written
/// against transforms, such as [`Ternary`].
///
/// # Examples
///
/// ```rust
/// use deferrable::func::Func;
/// use deferrable::scalar::ScalarFunc;
///
/// let constant = ScalarFunc::new(|| Ok::<_, ()>("same"));
/// assert_eq!(constant.apply(1), Ok("same"));
/// assert_eq!(constant.apply(2), Ok("same"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScalarFunc<S> {
    scalar: S,
}

impl<S> ScalarFunc<S> {
    /// Wraps `scalar`.
    #[inline]
    pub const fn new(scalar: S) -> Self {
        Self { scalar }
    }
}

impl<S, X> Func<X> for ScalarFunc<S>
where
    S: Scalar,
{
    type Output = S::Output;
    type Error = S::Error;

    #[inline]
    fn apply(&self, _input: X) -> Result<S::Output, S::Error> {
        self.scalar.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_closure_is_scalar() {
        let answer = || Ok::<_, ()>(42);
        assert_eq!(answer.value(), Ok(42));
    }

    #[rstest]
    fn test_scalar_is_not_memoized() {
        let calls = Cell::new(0);
        let counted = || {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(calls.get())
        };

        assert_eq!(calls.get(), 0);
        assert_eq!(counted.value(), Ok(1));
        assert_eq!(counted.value(), Ok(2));
    }

    #[rstest]
    fn test_scalar_func_ignores_input() {
        let calls = Cell::new(0);
        let adapted = ScalarFunc::new(|| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>("value")
        });

        assert_eq!(adapted.apply(1_u8), Ok("value"));
        assert_eq!(adapted.apply(2_u8), Ok("value"));
        assert_eq!(calls.get(), 2);
    }
}
