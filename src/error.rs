//! Error types shared by the combinators and sequences.
//!
//! Evaluation failures of user-supplied computations keep their own types;
//! the types here cover the failures this crate raises itself:
//!
//! - [`InvalidArgumentError`]: a combinator's precondition was violated
//!   before anything was evaluated
//! - [`ExhaustedError`]: a sequence was advanced past its last element
//! - [`RepeatedError`]: the error of [`Repeated`](crate::func::Repeated),
//!   either of the above precondition kind or the underlying failure

use thiserror::Error;

/// A boxed, dynamically typed failure.
///
/// This is the form in which [`Checked`](crate::scalar::Checked) hands an
/// underlying failure to its remap transform, so the transform can keep it
/// as the `source()` of the failure it builds.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Turns an underlying failure into the target failure type `E`.
///
/// A failure whose dynamic type already is `E` is handed back as the same
/// value; anything else goes through `remap` exactly once.
#[cfg_attr(not(feature = "func"), allow(dead_code))]
pub(crate) fn remap_failure<E, R>(failure: impl Into<Cause>, remap: &R) -> E
where
    E: std::error::Error + Send + Sync + 'static,
    R: Fn(Cause) -> E + ?Sized,
{
    match failure.into().downcast::<E>() {
        Ok(same) => {
            tracing::trace!(
                target_type = std::any::type_name::<E>(),
                "failure already has the target type"
            );
            *same
        }
        Err(other) => {
            tracing::debug!(
                target_type = std::any::type_name::<E>(),
                cause = %other,
                "remapping failure"
            );
            remap(other)
        }
    }
}

/// A combinator was configured with an argument it cannot work with.
///
/// Raised synchronously, before any delegated evaluation happens.
///
/// # Examples
///
/// ```rust
/// use deferrable::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError::NonPositiveRepetitions { times: 0 };
/// assert_eq!(
///     error.to_string(),
///     "the number of repetitions must be at least 1, got 0"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgumentError {
    /// A repetition count was zero or negative.
    #[error("the number of repetitions must be at least 1, got {times}")]
    NonPositiveRepetitions {
        /// The rejected count.
        times: i64,
    },
}

/// A sequence was advanced while it had no more elements.
///
/// # Examples
///
/// ```rust
/// use deferrable::error::ExhaustedError;
///
/// assert_eq!(
///     ExhaustedError.to_string(),
///     "the iterator doesn't have any more items"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("the iterator doesn't have any more items")]
pub struct ExhaustedError;

/// The failure of a [`Repeated`](crate::func::Repeated) transform.
///
/// Both variants are transparent: displaying a `RepeatedError` shows the
/// inner error exactly, and `source()` is delegated to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepeatedError<E> {
    /// The repeat count was not positive; nothing was evaluated.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
    /// One of the repetitions failed; later repetitions did not run.
    #[error(transparent)]
    Evaluation(E),
}

impl<E> RepeatedError<E> {
    /// Returns the underlying evaluation failure, if that is what this is.
    pub fn into_evaluation(self) -> Option<E> {
        match self {
            Self::Evaluation(error) => Some(error),
            Self::InvalidArgument(_) => None,
        }
    }

    /// Returns `true` if the repeat count precondition failed.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
