//! Failure remapping for scalars.

use std::fmt;
use std::marker::PhantomData;

use super::Scalar;
use crate::error::{Cause, remap_failure};

/// A [`Scalar`] whose failures are remapped into the error type `E`.
///
/// Successful values pass through untouched. On failure:
///
/// - if the failure's dynamic type already is `E`, that same failure is
///   returned, not wrapped again;
/// - otherwise it is boxed into a [`Cause`] and `remap` is called with it
///   exactly once. `remap` should keep the cause as the `source()` of the
///   `E` it returns so the original failure stays reachable.
///
/// `remap` is expected to be total. If it panics, the panic propagates.
///
/// # Examples
///
/// ```rust
/// use deferrable::error::Cause;
/// use deferrable::scalar::{Checked, Scalar};
/// use std::error::Error;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("could not load settings")]
/// struct SettingsError(#[source] Cause);
///
/// let settings = Checked::new(
///     || std::fs::read_to_string("/definitely/not/here.toml"),
///     SettingsError,
/// );
///
/// let error = settings.value().unwrap_err();
/// let cause = error.source().and_then(|cause| cause.downcast_ref::<std::io::Error>());
/// assert!(cause.is_some());
/// ```
pub struct Checked<S, R, E> {
    origin: S,
    remap: R,
    target: PhantomData<fn() -> E>,
}

impl<S, R, E> Checked<S, R, E> {
    /// Wraps `origin`, remapping its failures with `remap`.
    #[inline]
    pub const fn new(origin: S, remap: R) -> Self {
        Self {
            origin,
            remap,
            target: PhantomData,
        }
    }
}

impl<S, R, E> Scalar for Checked<S, R, E>
where
    S: Scalar,
    S::Error: Into<Cause>,
    R: Fn(Cause) -> E,
    E: std::error::Error + Send + Sync + 'static,
{
    type Output = S::Output;
    type Error = E;

    fn value(&self) -> Result<S::Output, E> {
        self.origin
            .value()
            .map_err(|failure| remap_failure(failure, &self.remap))
    }
}

impl<S: fmt::Debug, R, E> fmt::Debug for Checked<S, R, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Checked")
            .field("origin", &self.origin)
            .field("target", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::error::Error as _;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("custom failure")]
    struct CustomFailure {
        id: u32,
        #[source]
        cause: Option<Cause>,
    }

    impl CustomFailure {
        const fn bare(id: u32) -> Self {
            Self { id, cause: None }
        }

        fn wrapping(cause: Cause) -> Self {
            Self {
                id: 0,
                cause: Some(cause),
            }
        }
    }

    #[rstest]
    fn test_success_passes_through() {
        let checked = Checked::new(|| Ok::<_, std::io::Error>(42), CustomFailure::wrapping);
        assert_eq!(checked.value().ok(), Some(42));
    }

    #[rstest]
    fn test_foreign_failure_is_remapped_with_cause() {
        let checked = Checked::new(
            || Err::<i32, _>(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
            CustomFailure::wrapping,
        );

        let error = checked.value().unwrap_err();

        assert_eq!(error.id, 0);
        let cause = error
            .source()
            .and_then(|cause| cause.downcast_ref::<std::io::Error>())
            .map(std::io::Error::kind);
        assert_eq!(cause, Some(std::io::ErrorKind::NotFound));
    }

    #[rstest]
    fn test_target_failure_is_not_rewrapped() {
        let remaps = Cell::new(0);
        let checked = Checked::new(
            || Err::<i32, _>(CustomFailure::bare(77)),
            |cause| {
                remaps.set(remaps.get() + 1);
                CustomFailure::wrapping(cause)
            },
        );

        let error = checked.value().unwrap_err();

        assert_eq!(error.id, 77);
        assert!(error.source().is_none());
        assert_eq!(remaps.get(), 0);
    }

    #[rstest]
    fn test_boxed_target_failure_is_unboxed_not_rewrapped() {
        let checked = Checked::new(
            || -> Result<i32, Cause> { Err(Box::new(CustomFailure { id: 5, cause: None })) },
            CustomFailure::wrapping,
        );

        let error = checked.value().unwrap_err();

        assert_eq!(error.id, 5);
        assert!(error.cause.is_none());
    }

    #[rstest]
    fn test_nested_checked_keeps_inner_target() {
        let inner = Checked::new(|| Err::<i32, _>("raw"), CustomFailure::wrapping);
        let outer = Checked::new(
            || inner.value(),
            |cause| CustomFailure {
                id: 99,
                cause: Some(cause),
            },
        );

        let error = outer.value().unwrap_err();

        assert_eq!(error.id, 0);
        assert_eq!(
            error.source().map(ToString::to_string),
            Some("raw".to_string())
        );
    }
}
