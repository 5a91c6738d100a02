//! Sequences built on the standard [`Iterator`] protocol.
//!
//! - [`Cycled`]: repeats a finite source forever by re-acquiring a fresh
//!   traversal whenever the current one runs out
//! - [`SharedCycled`]: the same cursor behind a lock, for sharing across
//!   threads (requires the `sync` feature)
//! - [`Mapped`]: applies a [`Func`](crate::func::Func) to each element lazily
//! - [`Advance`]: the fallible "advance" operation for any iterator
//!
//! # Examples
//!
//! ```rust
//! use deferrable::iterator::{Advance, Cycled};
//!
//! let mut weekdays = Cycled::new(["sat", "sun"]);
//! assert_eq!(weekdays.advance(), Ok("sat"));
//! assert_eq!(weekdays.advance(), Ok("sun"));
//! assert_eq!(weekdays.advance(), Ok("sat"));
//! ```

mod cycled;
mod mapped;
#[cfg(feature = "sync")]
mod shared_cycled;

pub use cycled::Cycled;
pub use mapped::Mapped;
#[cfg(feature = "sync")]
pub use shared_cycled::SharedCycled;

use crate::error::ExhaustedError;

/// Fallible advancing for iterators.
///
/// [`Iterator::next`] signals the end with `None`; `advance` turns that into
/// an [`ExhaustedError`] so it can be propagated with `?`. It is implemented
/// for every iterator.
///
/// # Examples
///
/// ```rust
/// use deferrable::error::ExhaustedError;
/// use deferrable::iterator::Advance;
///
/// let mut single = std::iter::once(1);
/// assert_eq!(single.advance(), Ok(1));
/// assert_eq!(single.advance(), Err(ExhaustedError));
/// ```
pub trait Advance: Iterator {
    /// Returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedError`] if there are no more elements.
    #[inline]
    fn advance(&mut self) -> Result<Self::Item, ExhaustedError> {
        self.next().ok_or(ExhaustedError)
    }
}

impl<I: Iterator + ?Sized> Advance for I {}
