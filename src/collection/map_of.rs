//! Eager construction of [`MapEnvelope`]s.
//!
//! Every builder here normalizes its input to one ordered sequence of
//! key/value entries and inserts them into a fresh backing map, in order, at
//! construction time. A key that appears again replaces the earlier value
//! (last write wins). The result is a snapshot: the entry source is never
//! read again.
//!
//! # Examples
//!
//! ```rust
//! use deferrable::collection::MapEnvelope;
//!
//! let map = MapEnvelope::of([("a", 1), ("b", 2), ("a", 3)]);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("a"), Some(&3));
//! assert_eq!(map.get("b"), Some(&2));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::MapEnvelope;
use crate::func::Func;
use crate::iterator::Mapped;
use crate::scalar::Scalar;

impl<K: Eq + Hash, V> MapEnvelope<K, V> {
    /// Builds a map from `entries`, last write wins.
    pub fn of<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        match Self::try_of(entries.into_iter().map(Ok::<_, std::convert::Infallible>)) {
            Ok(map) => map,
            Err(never) => match never {},
        }
    }

    /// Builds a map from the entries of `source` followed by `entries`.
    ///
    /// `source` is consumed; pass a clone to keep the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferrable::collection::MapEnvelope;
    /// use std::collections::HashMap;
    ///
    /// let defaults = HashMap::from([("retries", 3), ("timeout", 30)]);
    /// let settings = MapEnvelope::extended(defaults, [("timeout", 5)]);
    ///
    /// assert_eq!(settings["retries"], 3);
    /// assert_eq!(settings["timeout"], 5);
    /// ```
    pub fn extended<M, I>(source: M, entries: I) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::of(source.into_iter().chain(entries))
    }

    /// Builds a map from the entries `entry` derives from each of `items`.
    ///
    /// # Errors
    ///
    /// Returns the first failure of `entry`; items after it are not read.
    pub fn from_entry_func<Z, F, S>(entry: F, items: S) -> Result<Self, F::Error>
    where
        S: IntoIterator<Item = Z>,
        F: Func<Z, Output = (K, V)>,
    {
        Self::try_of(Mapped::new(items, entry))
    }

    /// Builds a map from the entries of `source` followed by the entries
    /// `entry` derives from each of `items`.
    ///
    /// # Errors
    ///
    /// Returns the first failure of `entry`.
    pub fn from_entry_func_extending<Z, F, M, S>(
        entry: F,
        source: M,
        items: S,
    ) -> Result<Self, F::Error>
    where
        M: IntoIterator<Item = (K, V)>,
        S: IntoIterator<Item = Z>,
        F: Func<Z, Output = (K, V)>,
    {
        Self::try_of(source.into_iter().map(Ok).chain(Mapped::new(items, entry)))
    }

    /// Builds a map whose keys and values are derived from each of `items`.
    ///
    /// Both functions receive the same item; `key` is applied before
    /// `value`.
    ///
    /// # Errors
    ///
    /// Returns the first failure of either function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferrable::collection::MapEnvelope;
    ///
    /// let lengths = MapEnvelope::derived(
    ///     |word: &str| Ok::<_, ()>(word.to_uppercase()),
    ///     |word: &str| Ok::<_, ()>(word.len()),
    ///     ["apple", "fig"],
    /// );
    ///
    /// let lengths = lengths.unwrap();
    /// assert_eq!(lengths["APPLE"], 5);
    /// assert_eq!(lengths["FIG"], 3);
    /// ```
    pub fn derived<Z, E, KF, VF, S>(key: KF, value: VF, items: S) -> Result<Self, E>
    where
        Z: Clone,
        S: IntoIterator<Item = Z>,
        KF: Func<Z, Output = K, Error = E>,
        VF: Func<Z, Output = V, Error = E>,
    {
        Self::from_entry_func(derive_entry(key, value), items)
    }

    /// Builds a map from the entries of `source` followed by the derived
    /// entries of `items`.
    ///
    /// # Errors
    ///
    /// Returns the first failure of either function.
    pub fn derived_extending<Z, E, KF, VF, M, S>(
        key: KF,
        value: VF,
        source: M,
        items: S,
    ) -> Result<Self, E>
    where
        Z: Clone,
        M: IntoIterator<Item = (K, V)>,
        S: IntoIterator<Item = Z>,
        KF: Func<Z, Output = K, Error = E>,
        VF: Func<Z, Output = V, Error = E>,
    {
        Self::from_entry_func_extending(derive_entry(key, value), source, items)
    }

    /// Builds a map from the entries produced by evaluating `scalar` once.
    ///
    /// The scalar is only borrowed; evaluating it again later builds a new
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns the failure of `scalar`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferrable::collection::MapEnvelope;
    /// use std::collections::HashMap;
    ///
    /// let loader = || Ok::<_, ()>(HashMap::from([(1, "one")]));
    /// let loaded = MapEnvelope::from_scalar(&loader);
    /// assert_eq!(loaded.unwrap().get(&1), Some(&"one"));
    /// ```
    pub fn from_scalar<S>(scalar: &S) -> Result<Self, S::Error>
    where
        S: Scalar + ?Sized,
        S::Output: IntoIterator<Item = (K, V)>,
    {
        scalar.value().map(Self::of)
    }

    fn try_of<I, E>(entries: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<(K, V), E>>,
    {
        let mut backing = HashMap::new();
        let mut inserted = 0_usize;
        let mut overwritten = 0_usize;
        for entry in entries {
            let (key, value) = entry?;
            inserted += 1;
            if backing.insert(key, value).is_some() {
                overwritten += 1;
            }
        }
        tracing::debug!(
            entries = inserted,
            size = backing.len(),
            overwritten,
            "built map envelope"
        );
        Ok(Self::from_backing(backing))
    }
}

fn derive_entry<Z, E, K, V, KF, VF>(key: KF, value: VF) -> impl Fn(Z) -> Result<(K, V), E>
where
    Z: Clone,
    KF: Func<Z, Output = K, Error = E>,
    VF: Func<Z, Output = V, Error = E>,
{
    move |item: Z| Ok((key.apply(item.clone())?, value.apply(item)?))
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for MapEnvelope<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self::of(entries)
    }
}

/// Builds a [`MapEnvelope`] from `key => value` pairs, last write wins.
///
/// # Examples
///
/// ```rust
/// use deferrable::map_of;
///
/// let ports = map_of! {
///     "http" => 80,
///     "https" => 443,
///     "http" => 8080,
/// };
///
/// assert_eq!(ports.len(), 2);
/// assert_eq!(ports["http"], 8080);
/// ```
#[macro_export]
macro_rules! map_of {
    () => {
        $crate::collection::MapEnvelope::default()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::collection::MapEnvelope::of([$(($key, $value)),+])
    };
}
