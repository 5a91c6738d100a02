//! Explicit memoization of a scalar.

use std::cell::RefCell;
use std::fmt;

use super::Scalar;

/// A [`Scalar`] that evaluates its origin once and then keeps the value.
///
/// Only a successful evaluation is remembered. A failure is returned to the
/// caller and the next call evaluates the origin again.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; the cache lives in a `RefCell`.
///
/// # Examples
///
/// ```rust
/// use deferrable::scalar::{Scalar, Sticky};
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let sticky = Sticky::new(|| {
///     calls.set(calls.get() + 1);
///     Ok::<_, ()>(42)
/// });
///
/// assert_eq!(calls.get(), 0);
/// assert_eq!(sticky.value(), Ok(42));
/// assert_eq!(sticky.value(), Ok(42));
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Sticky<S: Scalar> {
    origin: S,
    cache: RefCell<Option<S::Output>>,
}

impl<S: Scalar> Sticky<S> {
    /// Wraps `origin`; nothing is evaluated yet.
    #[inline]
    pub const fn new(origin: S) -> Self {
        Self {
            origin,
            cache: RefCell::new(None),
        }
    }

    /// Returns whether a value has been cached.
    #[inline]
    pub fn is_cached(&self) -> bool {
        self.cache.borrow().is_some()
    }
}

impl<S> Scalar for Sticky<S>
where
    S: Scalar,
    S::Output: Clone,
{
    type Output = S::Output;
    type Error = S::Error;

    fn value(&self) -> Result<S::Output, S::Error> {
        if let Some(cached) = self.cache.borrow().as_ref() {
            return Ok(cached.clone());
        }
        // The borrow is released before evaluating, so a re-entrant origin
        // sees an empty cache instead of a borrow panic.
        let computed = self.origin.value()?;
        *self.cache.borrow_mut() = Some(computed.clone());
        Ok(computed)
    }
}

impl<S> fmt::Debug for Sticky<S>
where
    S: Scalar,
    S::Output: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.cache.borrow() {
            Some(value) => formatter.debug_tuple("Sticky").field(value).finish(),
            None => formatter.debug_tuple("Sticky").field(&"<pending>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_sticky_is_lazy() {
        let calls = Cell::new(0);
        let sticky = Sticky::new(|| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(1)
        });

        assert!(!sticky.is_cached());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_sticky_retries_after_failure() {
        let calls = Cell::new(0);
        let sticky = Sticky::new(|| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Err("warming up")
            } else {
                Ok(calls.get())
            }
        });

        assert_eq!(sticky.value(), Err("warming up"));
        assert!(!sticky.is_cached());
        assert_eq!(sticky.value(), Ok(2));
        assert_eq!(sticky.value(), Ok(2));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_sticky_debug() {
        let sticky = Sticky::new(|| Ok::<_, ()>(5));
        assert_eq!(format!("{sticky:?}"), "Sticky(\"<pending>\")");
        let _ = sticky.value();
        assert_eq!(format!("{sticky:?}"), "Sticky(5)");
    }
}
