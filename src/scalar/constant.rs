//! A scalar that always yields the same value.

use std::fmt;
use std::marker::PhantomData;

use super::Scalar;

/// A [`Scalar`] that yields a clone of a fixed value and never fails.
///
/// The error type `E` is only nominal, so a `Constant` can sit next to
/// fallible scalars of any error type in the same combinator.
///
/// # Examples
///
/// ```rust
/// use deferrable::scalar::{Constant, Scalar};
///
/// let greeting: Constant<&str, std::io::Error> = Constant::new("hello");
/// assert_eq!(greeting.value().ok(), Some("hello"));
/// assert_eq!(greeting.get(), &"hello");
/// ```
pub struct Constant<T, E = std::convert::Infallible> {
    value: T,
    error: PhantomData<fn() -> E>,
}

impl<T, E> Constant<T, E> {
    /// Creates a scalar yielding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            error: PhantomData,
        }
    }

    /// Returns a reference to the wrapped value without evaluating anything.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Consumes the scalar and returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone, E> Scalar for Constant<T, E> {
    type Output = T;
    type Error = E;

    #[inline]
    fn value(&self) -> Result<T, E> {
        Ok(self.value.clone())
    }
}

impl<T: Clone, E> Clone for Constant<T, E> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Constant<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Constant")
            .field(&self.value)
            .finish()
    }
}

impl<T, E> From<T> for Constant<T, E> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
