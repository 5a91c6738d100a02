//! A cycling cursor that can be shared between threads.

use std::fmt;

use parking_lot::Mutex;

use super::Cycled;
use crate::error::ExhaustedError;

/// A [`Cycled`] cursor guarded by a lock.
///
/// Every operation takes the lock once and performs the whole
/// check-then-refresh-then-read sequence under it, so concurrent callers can
/// neither skip an element nor observe a stale exhausted state. Each element
/// is handed to exactly one caller.
///
/// # Examples
///
/// ```rust
/// use deferrable::iterator::SharedCycled;
/// use std::sync::Arc;
/// use std::thread;
///
/// let colors = Arc::new(SharedCycled::new(vec!["red", "green", "blue"]));
///
/// let handles: Vec<_> = (0..3)
///     .map(|_| {
///         let colors = Arc::clone(&colors);
///         thread::spawn(move || colors.advance())
///     })
///     .collect();
///
/// let mut picked: Vec<_> = handles
///     .into_iter()
///     .map(|handle| handle.join().unwrap().unwrap())
///     .collect();
/// picked.sort_unstable();
/// assert_eq!(picked, vec!["blue", "green", "red"]);
/// ```
pub struct SharedCycled<I: IntoIterator> {
    inner: Mutex<Cycled<I>>,
}

impl<I> SharedCycled<I>
where
    I: IntoIterator + Clone,
{
    /// Creates a shared cycling cursor over `origin`.
    pub fn new(origin: I) -> Self {
        Self {
            inner: Mutex::new(Cycled::new(origin)),
        }
    }

    /// Returns whether another element is available, rewinding first if the
    /// current traversal is used up.
    pub fn has_next(&self) -> bool {
        self.inner.lock().has_next()
    }

    /// Returns the next element, or `None` if the source is empty.
    pub fn next_item(&self) -> Option<I::Item> {
        self.inner.lock().next()
    }

    /// Returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedError`] if the source is empty.
    pub fn advance(&self) -> Result<I::Item, ExhaustedError> {
        self.next_item().ok_or(ExhaustedError)
    }

    /// Consumes the lock and returns the single-threaded cursor, keeping its
    /// position.
    pub fn into_inner(self) -> Cycled<I> {
        self.inner.into_inner()
    }
}

impl<I> Iterator for SharedCycled<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.get_mut().next()
    }
}

impl<I> From<Cycled<I>> for SharedCycled<I>
where
    I: IntoIterator,
{
    fn from(cycled: Cycled<I>) -> Self {
        Self {
            inner: Mutex::new(cycled),
        }
    }
}

impl<I> fmt::Debug for SharedCycled<I>
where
    I: IntoIterator + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(cycled) => formatter
                .debug_struct("SharedCycled")
                .field("inner", &*cycled)
                .finish(),
            None => formatter
                .debug_struct("SharedCycled")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}

static_assertions::assert_impl_all!(SharedCycled<Vec<i32>>: Send, Sync);
