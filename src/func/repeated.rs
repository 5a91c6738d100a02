//! Repetition of a transform.

use super::Func;
use crate::error::{InvalidArgumentError, RepeatedError};

/// A transform that applies another transform a fixed number of times.
///
/// Every repetition receives a clone of the same input and runs in sequence;
/// only the result of the last one is returned. Earlier results are dropped,
/// but their side effects still happen, in order.
///
/// The count is checked on every [`apply`](Func::apply), not at
/// construction. A count of zero or less fails with
/// [`InvalidArgumentError::NonPositiveRepetitions`] and the underlying
/// transform is not touched.
///
/// A failing repetition aborts the whole application; later repetitions do
/// not run.
///
/// # Examples
///
/// ```rust
/// use deferrable::func::{Func, Repeated};
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let counter = |_: ()| {
///     calls.set(calls.get() + 1);
///     Ok::<_, std::convert::Infallible>(calls.get())
/// };
///
/// let repeated = Repeated::new(counter, 3);
/// assert_eq!(repeated.apply(()).ok(), Some(3));
/// assert_eq!(calls.get(), 3);
/// ```
///
/// ```rust
/// use deferrable::func::{Func, Repeated};
///
/// let repeated = Repeated::new(|value: i32| Ok::<_, std::io::Error>(value), 0);
/// assert!(repeated.apply(7).unwrap_err().is_invalid_argument());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Repeated<F> {
    func: F,
    times: i64,
}

impl<F> Repeated<F> {
    /// Creates a transform applying `func` `times` times.
    ///
    /// No validation happens here.
    #[inline]
    pub const fn new(func: F, times: i64) -> Self {
        Self { func, times }
    }

    /// Returns the configured repeat count.
    #[inline]
    pub const fn times(&self) -> i64 {
        self.times
    }
}

impl<F, X> Func<X> for Repeated<F>
where
    F: Func<X>,
    X: Clone,
{
    type Output = F::Output;
    type Error = RepeatedError<F::Error>;

    fn apply(&self, input: X) -> Result<Self::Output, Self::Error> {
        if self.times <= 0 {
            tracing::debug!(
                times = self.times,
                "rejecting non-positive repetition count"
            );
            let rejected = InvalidArgumentError::NonPositiveRepetitions { times: self.times };
            return Err(rejected.into());
        }
        tracing::trace!(times = self.times, "repeating transform");
        for _ in 1..self.times {
            self.func
                .apply(input.clone())
                .map_err(RepeatedError::Evaluation)?;
        }
        self.func.apply(input).map_err(RepeatedError::Evaluation)
    }
}
