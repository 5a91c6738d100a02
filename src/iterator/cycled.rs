//! An endless repetition of a finite sequence.

use std::fmt;
use std::iter::Peekable;

/// An iterator that cycles through a finite source forever.
///
/// `Cycled` keeps the original source and a current traversal over it.
/// Whenever the current traversal has no next element, a brand-new traversal
/// is obtained by cloning the source and becomes current. A non-empty source
/// therefore yields an endless sequence that restarts from its first element
/// each time it wraps; an empty source yields nothing, ever.
///
/// Unlike [`Iterator::cycle`], the source is re-acquired rather than the
/// traversal cloned, so a source that produces different elements on each
/// traversal is observed fresh on every lap. `None` only reports that the
/// fresh traversal acquired for that call was empty: the next call acquires
/// another one, which may yield again. `Cycled` is therefore not a
/// [`FusedIterator`](std::iter::FusedIterator); use [`Iterator::fuse`] to
/// stop at the first empty lap.
///
/// # Thread Safety
///
/// `Cycled` is plain single-threaded state: every transition takes
/// `&mut self`. Use [`SharedCycled`](super::SharedCycled) to share one
/// cursor between threads.
///
/// # Examples
///
/// ```rust
/// use deferrable::iterator::Cycled;
///
/// let letters: Vec<char> = Cycled::new(vec!['a', 'b', 'c']).take(7).collect();
/// assert_eq!(letters, vec!['a', 'b', 'c', 'a', 'b', 'c', 'a']);
///
/// let mut nothing = Cycled::new(Vec::<char>::new());
/// assert!(!nothing.has_next());
/// assert_eq!(nothing.next(), None);
/// ```
pub struct Cycled<I: IntoIterator> {
    origin: I,
    current: Peekable<I::IntoIter>,
}

impl<I> Cycled<I>
where
    I: IntoIterator + Clone,
{
    /// Creates a cycling iterator over `origin`.
    ///
    /// The first traversal is acquired immediately; nothing is read from it
    /// until the first query.
    pub fn new(origin: I) -> Self {
        let current = origin.clone().into_iter().peekable();
        Self { origin, current }
    }

    /// Returns whether another element is available.
    ///
    /// If the current traversal is used up, a fresh one is acquired from the
    /// source first. Asking repeatedly without advancing returns the same
    /// answer and does not skip elements.
    pub fn has_next(&mut self) -> bool {
        if self.current.peek().is_none() {
            tracing::trace!("cycled traversal used up, acquiring a fresh one");
            self.current = self.origin.clone().into_iter().peekable();
        }
        self.current.peek().is_some()
    }

    /// Returns a reference to the element the next call to `next` yields,
    /// rewinding first if needed.
    pub fn peek(&mut self) -> Option<&I::Item> {
        if self.has_next() {
            self.current.peek()
        } else {
            None
        }
    }

    /// Returns a reference to the original source.
    #[inline]
    pub const fn origin(&self) -> &I {
        &self.origin
    }
}

impl<I> Iterator for Cycled<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.has_next() {
            self.current.next()
        } else {
            None
        }
    }
}

impl<I> fmt::Debug for Cycled<I>
where
    I: IntoIterator + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cycled")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Cycled<Vec<i32>>: Send, Sync);
