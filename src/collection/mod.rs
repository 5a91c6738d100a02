//! Container envelopes and eager map construction.
//!
//! An envelope is a thin facade that forwards every query and mutation to
//! one backing standard container:
//!
//! - [`MapEnvelope`]: over a [`HashMap`](std::collections::HashMap)
//! - [`SetEnvelope`]: over a [`HashSet`](std::collections::HashSet)
//! - [`CollectionEnvelope`]: over a [`Vec`]
//!
//! Maps are usually built eagerly from key/value entries with
//! [`MapEnvelope::of`], [`MapEnvelope::extended`], [`MapEnvelope::derived`],
//! [`MapEnvelope::from_entry_func`], [`MapEnvelope::from_scalar`] or the
//! [`map_of!`](crate::map_of) macro. Entries are inserted in order, so a
//! repeated key keeps its last value.
//!
//! # Examples
//!
//! ```rust
//! use deferrable::collection::MapEnvelope;
//!
//! let scores = MapEnvelope::derived(
//!     |(name, _): (&str, u32)| Ok::<_, ()>(name.to_string()),
//!     |(_, score): (&str, u32)| Ok::<_, ()>(score),
//!     [("ann", 3), ("bob", 5), ("ann", 7)],
//! )
//! .unwrap();
//!
//! assert_eq!(scores.len(), 2);
//! assert_eq!(scores["ann"], 7);
//! ```

mod map;
mod map_of;
mod sequence;
mod set;

pub use map::MapEnvelope;
pub use sequence::CollectionEnvelope;
pub use set::SetEnvelope;
