//! The concrete ordered key/value collection.

use super::key::{Entry, Key};

/// A concrete, ordered key/value collection.
///
/// Entries keep their insertion order. Keys are not required to be unique:
/// chaining two sources that share a key yields both elements, and the
/// materialized collection keeps both.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Collection, Key};
///
/// let positional: Collection<i32> = vec![1, 2, 3].into_iter().collect();
/// assert_eq!(positional.get(&Key::Index(1)), Some(&2));
///
/// let named: Collection<i32> = [("one", 1), ("two", 2)].into_iter().collect();
/// assert_eq!(named.get(&Key::from("two")), Some(&2));
/// assert_eq!(named.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Collection<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Collection<V> {
    /// Creates an empty collection.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a collection whose keys are the positions of `values`.
    pub fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        Self::from_entries(
            values
                .into_iter()
                .enumerate()
                .map(|(position, value)| Entry::new(position, value)),
        )
    }

    /// Creates a collection from entries, keeping their keys.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry<V>>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Appends an entry.
    #[inline]
    pub fn push(&mut self, key: impl Into<Key>, value: V) {
        self.entries.push(Entry::new(key, value));
    }

    #[inline]
    pub(crate) fn push_entry(&mut self, entry: Entry<V>) {
        self.entries.push(entry);
    }

    /// Returns the number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection holds no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value of the first entry with the given key.
    pub fn get(&self, key: &Key) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<V>> {
        self.entries.iter()
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Iterates over the values in order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Consumes the collection, returning its values in order.
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|entry| entry.value).collect()
    }

    /// Consumes the collection, returning its entries in order.
    pub fn into_entries(self) -> Vec<Entry<V>> {
        self.entries
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<V> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iterable: I) -> Self {
        Self::from_values(iterable)
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        Self::from_entries(iterable.into_iter().map(Entry::from))
    }
}

impl<V> FromIterator<Entry<V>> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = Entry<V>>>(iterable: I) -> Self {
        Self::from_entries(iterable)
    }
}

impl<V> From<Vec<V>> for Collection<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = Entry<V>;
    type IntoIter = std::vec::IntoIter<Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = &'a Entry<V>;
    type IntoIter = std::slice::Iter<'a, Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
