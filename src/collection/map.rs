//! A delegating facade over a hash map.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

/// A map that forwards every operation to one backing [`HashMap`].
///
/// The backing map is given at construction and never replaced; the
/// envelope holds nothing else. It is usually obtained from one of the
/// eager builders ([`MapEnvelope::of`], [`MapEnvelope::extended`],
/// [`MapEnvelope::derived`], ...) or the [`map_of!`](crate::map_of) macro.
///
/// # Examples
///
/// ```rust
/// use deferrable::collection::MapEnvelope;
/// use std::collections::HashMap;
///
/// let mut map = MapEnvelope::from_backing(HashMap::from([("one", 1)]));
/// map.insert("two", 2);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("two"), Some(&2));
/// assert_eq!(map["one"], 1);
/// ```
#[derive(Clone)]
pub struct MapEnvelope<K, V> {
    backing: HashMap<K, V>,
}

impl<K, V> MapEnvelope<K, V> {
    /// Wraps `backing`.
    #[inline]
    pub const fn from_backing(backing: HashMap<K, V>) -> Self {
        Self { backing }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Iterates over the entries in arbitrary order.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.backing.iter()
    }

    /// Iterates over the keys in arbitrary order.
    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.backing.keys()
    }

    /// Iterates over the values in arbitrary order.
    #[inline]
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.backing.values()
    }

    /// Returns the backing map.
    #[inline]
    pub const fn as_backing(&self) -> &HashMap<K, V> {
        &self.backing
    }

    /// Consumes the envelope and returns the backing map.
    #[inline]
    pub fn into_backing(self) -> HashMap<K, V> {
        self.backing
    }
}

impl<K: Eq + Hash, V> MapEnvelope<K, V> {
    /// Returns the value stored under `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backing.get(key)
    }

    /// Returns the stored key and value for `key`.
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backing.get_key_value(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backing.contains_key(key)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.backing.insert(key, value)
    }

    /// Removes `key`, returning its value.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backing.remove(key)
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for MapEnvelope<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.backing == other.backing
    }
}

impl<K: Eq + Hash, V: Eq> Eq for MapEnvelope<K, V> {}

impl<K, V> Default for MapEnvelope<K, V> {
    fn default() -> Self {
        Self::from_backing(HashMap::new())
    }
}

impl<K, V> From<HashMap<K, V>> for MapEnvelope<K, V> {
    fn from(backing: HashMap<K, V>) -> Self {
        Self::from_backing(backing)
    }
}

impl<K, Q, V> Index<&Q> for MapEnvelope<K, V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        &self.backing[key]
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for MapEnvelope<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        self.backing.extend(entries);
    }
}

impl<K, V> IntoIterator for MapEnvelope<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a MapEnvelope<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MapEnvelope<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.backing.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for MapEnvelope<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct MapEnvelopeVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> (K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for MapEnvelopeVisitor<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    type Value = MapEnvelope<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // Entries go through the eager builder in document order, so a
        // repeated key keeps its last value.
        let mut entries = Vec::new();
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(MapEnvelope::of(entries))
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for MapEnvelope<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(MapEnvelopeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

static_assertions::assert_impl_all!(MapEnvelope<String, i32>: Send, Sync, Clone, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> MapEnvelope<String, i32> {
        MapEnvelope::from_backing(HashMap::from([
            ("alpha".to_string(), 1),
            ("beta".to_string(), 2),
        ]))
    }

    #[rstest]
    fn test_lookups_forward_to_backing() {
        let map = sample();
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        assert_eq!(map.get("alpha"), Some(&1));
        assert_eq!(map.get_key_value("beta"), Some((&"beta".to_string(), &2)));
        assert!(map.contains_key("beta"));
        assert!(!map.contains_key("gamma"));
        assert_eq!(map["beta"], 2);
    }

    #[rstest]
    fn test_mutations_forward_to_backing() {
        let mut map = sample();
        assert_eq!(map.insert("alpha".to_string(), 10), Some(1));
        assert_eq!(map.insert("gamma".to_string(), 3), None);
        assert_eq!(map.remove("beta"), Some(2));
        assert_eq!(map.remove("beta"), None);

        let backing = map.into_backing();
        assert_eq!(backing.len(), 2);
        assert_eq!(backing.get("alpha"), Some(&10));
        assert_eq!(backing.get("gamma"), Some(&3));
    }

    #[rstest]
    fn test_iteration_matches_backing() {
        let map = sample();
        let mut keys: Vec<_> = map.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["alpha", "beta"]);

        let total: i32 = map.values().sum();
        assert_eq!(total, 3);

        let mut entries: Vec<_> = (&map)
            .into_iter()
            .map(|(key, value)| (key.as_str(), *value))
            .collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![("alpha", 1), ("beta", 2)]);
    }

    #[rstest]
    fn test_extend_overwrites() {
        let mut map = sample();
        map.extend([("alpha".to_string(), 100), ("delta".to_string(), 4)]);
        assert_eq!(map.len(), 3);
        assert_eq!(map["alpha"], 100);
    }

    #[rstest]
    fn test_default_is_empty() {
        let map: MapEnvelope<i32, i32> = MapEnvelope::default();
        assert!(map.is_empty());
        assert_eq!(format!("{map:?}"), "{}");
    }

    #[rstest]
    fn test_debug_single_entry() {
        let map = MapEnvelope::from_backing(HashMap::from([(1, "one")]));
        assert_eq!(format!("{map:?}"), "{1: \"one\"}");
    }

    #[rstest]
    fn test_equality_is_backing_equality() {
        let left = sample();
        let backing = HashMap::from([("beta".to_string(), 2), ("alpha".to_string(), 1)]);
        let right: MapEnvelope<String, i32> = backing.into();
        assert_eq!(left, right);
    }
}
