//! A delegating facade over a hash set.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;

/// A set that forwards every operation to one backing [`HashSet`].
///
/// # Examples
///
/// ```rust
/// use deferrable::collection::SetEnvelope;
///
/// let mut tags: SetEnvelope<&str> = ["red", "blue", "red"].into_iter().collect();
/// assert_eq!(tags.len(), 2);
/// assert!(tags.insert("green"));
/// assert!(!tags.insert("red"));
/// assert!(tags.contains("blue"));
/// ```
#[derive(Clone)]
pub struct SetEnvelope<T> {
    backing: HashSet<T>,
}

impl<T> SetEnvelope<T> {
    /// Wraps `backing`.
    #[inline]
    pub const fn from_backing(backing: HashSet<T>) -> Self {
        Self { backing }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Iterates over the elements in arbitrary order.
    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.backing.iter()
    }

    /// Returns the backing set.
    #[inline]
    pub const fn as_backing(&self) -> &HashSet<T> {
        &self.backing
    }

    /// Consumes the envelope and returns the backing set.
    #[inline]
    pub fn into_backing(self) -> HashSet<T> {
        self.backing
    }
}

impl<T: Eq + Hash> SetEnvelope<T> {
    /// Returns `true` if `value` is an element.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backing.contains(value)
    }

    /// Adds `value`, returning `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        self.backing.insert(value)
    }

    /// Removes `value`, returning whether it was present.
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backing.remove(value)
    }
}

impl<T: Eq + Hash> PartialEq for SetEnvelope<T> {
    fn eq(&self, other: &Self) -> bool {
        self.backing == other.backing
    }
}

impl<T: Eq + Hash> Eq for SetEnvelope<T> {}

impl<T> Default for SetEnvelope<T> {
    fn default() -> Self {
        Self::from_backing(HashSet::new())
    }
}

impl<T> From<HashSet<T>> for SetEnvelope<T> {
    fn from(backing: HashSet<T>) -> Self {
        Self::from_backing(backing)
    }
}

impl<T: Eq + Hash> FromIterator<T> for SetEnvelope<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::from_backing(elements.into_iter().collect())
    }
}

impl<T: Eq + Hash> Extend<T> for SetEnvelope<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.backing.extend(elements);
    }
}

impl<T> IntoIterator for SetEnvelope<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SetEnvelope<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SetEnvelope<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.backing.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SetEnvelope<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.backing.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SetEnvelope<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <HashSet<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_backing)
    }
}
