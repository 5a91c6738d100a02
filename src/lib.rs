//! # deferrable
//!
//! Small, composable building blocks for deferred computation.
//!
//! ## Overview
//!
//! - **Scalars**: [`Scalar`](scalar::Scalar) values computed on demand,
//!   with constants, memoization, conditional selection and typed failure
//!   remapping
//! - **Functions**: [`Func`](func::Func) and [`BiFunc`](func::BiFunc)
//!   contracts, repetition and failure remapping
//! - **Iterators**: endlessly cycling sequences and lazy fallible mapping
//! - **Collections**: envelopes over the standard containers and eager map
//!   builders with last-write-wins semantics
//!
//! Every contract is implemented for plain closures returning `Result`, so
//! most call sites never name a type.
//!
//! ## Feature Flags
//!
//! - `scalar`: deferred values (implies `func`)
//! - `func`: one and two argument functions
//! - `iterator`: cycling and mapping iterators (implies `func`)
//! - `sync`: [`SharedCycled`](iterator::SharedCycled), a lock-protected
//!   cycling cursor
//! - `collection`: envelopes and map builders
//! - `serde`: `Serialize`/`Deserialize` for the envelopes
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use deferrable::prelude::*;
//!
//! let answer = Ternary::new(
//!     || Ok::<_, std::num::ParseIntError>(true),
//!     || "42".parse::<i32>(),
//!     || "0".parse::<i32>(),
//! );
//!
//! assert_eq!(answer.value(), Ok(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the contracts and the most used combinators.
///
/// ```rust
/// use deferrable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Cause, ExhaustedError, InvalidArgumentError, RepeatedError};

    #[cfg(feature = "func")]
    pub use crate::func::*;

    #[cfg(feature = "scalar")]
    pub use crate::scalar::*;

    #[cfg(feature = "iterator")]
    pub use crate::iterator::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "collection")]
    pub use crate::map_of;
}

pub mod error;

#[cfg(feature = "func")]
pub mod func;

#[cfg(feature = "scalar")]
pub mod scalar;

#[cfg(feature = "iterator")]
pub mod iterator;

#[cfg(feature = "collection")]
pub mod collection;
