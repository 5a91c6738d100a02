//! Failure remapping for transforms.

use std::fmt;
use std::marker::PhantomData;

use super::{BiFunc, Func};
use crate::error::{Cause, remap_failure};

/// A [`Func`] whose failures are remapped into the error type `E`.
///
/// A failure that already is an `E` is returned as-is. Anything else is
/// boxed into a [`Cause`] and handed to the remap function, which should
/// keep it as the `source()` of the `E` it builds.
///
/// # Examples
///
/// ```rust
/// use deferrable::error::Cause;
/// use deferrable::func::{CheckedFunc, Func};
/// use std::error::Error;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("config value is broken")]
/// struct ConfigError(#[source] Cause);
///
/// let parse = CheckedFunc::new(|text: &str| text.parse::<u16>(), ConfigError);
///
/// assert_eq!(parse.apply("8080").ok(), Some(8080));
/// let error = parse.apply("eighty").unwrap_err();
/// assert!(error.source().is_some());
/// ```
pub struct CheckedFunc<F, R, E> {
    origin: F,
    remap: R,
    target: PhantomData<fn() -> E>,
}

impl<F, R, E> CheckedFunc<F, R, E> {
    /// Wraps `origin`, remapping its failures with `remap`.
    #[inline]
    pub const fn new(origin: F, remap: R) -> Self {
        Self {
            origin,
            remap,
            target: PhantomData,
        }
    }
}

impl<F, R, E, X> Func<X> for CheckedFunc<F, R, E>
where
    F: Func<X>,
    F::Error: Into<Cause>,
    R: Fn(Cause) -> E,
    E: std::error::Error + Send + Sync + 'static,
{
    type Output = F::Output;
    type Error = E;

    fn apply(&self, input: X) -> Result<Self::Output, E> {
        self.origin
            .apply(input)
            .map_err(|failure| remap_failure(failure, &self.remap))
    }
}

impl<F: fmt::Debug, R, E> fmt::Debug for CheckedFunc<F, R, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CheckedFunc")
            .field("origin", &self.origin)
            .field("target", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}

/// A [`BiFunc`] whose failures are remapped into the error type `E`.
///
/// Follows the same rule as [`CheckedFunc`].
pub struct CheckedBiFunc<F, R, E> {
    origin: F,
    remap: R,
    target: PhantomData<fn() -> E>,
}

impl<F, R, E> CheckedBiFunc<F, R, E> {
    /// Wraps `origin`, remapping its failures with `remap`.
    #[inline]
    pub const fn new(origin: F, remap: R) -> Self {
        Self {
            origin,
            remap,
            target: PhantomData,
        }
    }
}

impl<F, R, E, X, Y> BiFunc<X, Y> for CheckedBiFunc<F, R, E>
where
    F: BiFunc<X, Y>,
    F::Error: Into<Cause>,
    R: Fn(Cause) -> E,
    E: std::error::Error + Send + Sync + 'static,
{
    type Output = F::Output;
    type Error = E;

    fn apply(&self, first: X, second: Y) -> Result<Self::Output, E> {
        self.origin
            .apply(first, second)
            .map_err(|failure| remap_failure(failure, &self.remap))
    }
}

impl<F: fmt::Debug, R, E> fmt::Debug for CheckedBiFunc<F, R, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CheckedBiFunc")
            .field("origin", &self.origin)
            .field("target", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}
