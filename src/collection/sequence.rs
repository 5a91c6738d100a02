//! A delegating facade over a growable sequence.

use std::fmt;
use std::slice;
use std::vec;

/// A collection that forwards every operation to one backing [`Vec`].
///
/// Elements keep their insertion order and may repeat.
///
/// # Examples
///
/// ```rust
/// use deferrable::collection::CollectionEnvelope;
///
/// let mut steps: CollectionEnvelope<&str> = ["fetch", "parse"].into_iter().collect();
/// steps.push("store");
///
/// assert_eq!(steps.len(), 3);
/// assert!(steps.contains(&"parse"));
/// assert!(steps.remove(&"fetch"));
/// assert_eq!(steps.as_slice(), &["parse", "store"]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CollectionEnvelope<T> {
    backing: Vec<T>,
}

impl<T> CollectionEnvelope<T> {
    /// Wraps `backing`.
    #[inline]
    pub const fn from_backing(backing: Vec<T>) -> Self {
        Self { backing }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.backing.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.backing.iter()
    }

    /// Appends `value`.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.backing.push(value);
    }

    /// Returns the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        self.backing.as_slice()
    }

    /// Consumes the envelope and returns the backing vector.
    #[inline]
    pub fn into_backing(self) -> Vec<T> {
        self.backing
    }
}

impl<T: PartialEq> CollectionEnvelope<T> {
    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.backing.contains(value)
    }

    /// Removes the first element equal to `value`, returning whether one was
    /// found.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.backing.iter().position(|element| element == value) {
            Some(index) => {
                self.backing.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for CollectionEnvelope<T> {
    fn default() -> Self {
        Self::from_backing(Vec::new())
    }
}

impl<T> From<Vec<T>> for CollectionEnvelope<T> {
    fn from(backing: Vec<T>) -> Self {
        Self::from_backing(backing)
    }
}

impl<T> FromIterator<T> for CollectionEnvelope<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::from_backing(elements.into_iter().collect())
    }
}

impl<T> Extend<T> for CollectionEnvelope<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.backing.extend(elements);
    }
}

impl<T> IntoIterator for CollectionEnvelope<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CollectionEnvelope<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for CollectionEnvelope<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.backing.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CollectionEnvelope<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.backing.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for CollectionEnvelope<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_backing)
    }
}
