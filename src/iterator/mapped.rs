//! Lazy, fallible mapping of a sequence.

use std::iter::FusedIterator;

use crate::func::Func;

/// An iterator applying a [`Func`] to every element of another iterator.
///
/// Each element is transformed only when it is requested, and each
/// transformation's outcome is yielded as a `Result`, so a failure on one
/// element neither hides nor stops the rest. Collecting into a
/// `Result<Vec<_>, _>` stops at the first failure instead.
///
/// # Examples
///
/// ```rust
/// use deferrable::error::ExhaustedError;
/// use deferrable::iterator::{Advance, Mapped};
///
/// let mut mapped = Mapped::new([1, 30], |number: i32| u8::try_from(number * 10));
/// assert_eq!(mapped.advance().map(Result::ok), Ok(Some(10)));
/// assert!(mapped.advance().unwrap().is_err());
/// assert!(matches!(mapped.advance(), Err(ExhaustedError)));
/// ```
#[derive(Debug, Clone)]
pub struct Mapped<I, F> {
    origin: I,
    func: F,
}

impl<I, F> Mapped<I, F>
where
    I: Iterator,
    F: Func<I::Item>,
{
    /// Creates an iterator applying `func` to the elements of `origin`.
    pub fn new<S>(origin: S, func: F) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            origin: origin.into_iter(),
            func,
        }
    }
}

impl<I, F> Iterator for Mapped<I, F>
where
    I: Iterator,
    F: Func<I::Item>,
{
    type Item = Result<F::Output, F::Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.origin.next().map(|item| self.func.apply(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.origin.size_hint()
    }
}

impl<I, F> ExactSizeIterator for Mapped<I, F>
where
    I: ExactSizeIterator,
    F: Func<I::Item>,
{
}

impl<I, F> FusedIterator for Mapped<I, F>
where
    I: FusedIterator,
    F: Func<I::Item>,
{
}
