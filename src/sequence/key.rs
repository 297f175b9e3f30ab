//! Keys and entries carried through every cursor.

use std::fmt;

/// The key of one element of an enumerable.
///
/// Keys are either sequential zero-based positions or explicit names carried
/// over from the source collection. Combinators document whether they
/// preserve source keys or produce fresh positions.
///
/// # Examples
///
/// ```rust
/// use lazyfn::Key;
///
/// assert_eq!(Key::from(3), Key::Index(3));
/// assert_eq!(Key::from("one"), Key::Name("one".to_string()));
/// assert_eq!(format!("{}", Key::Name("one".to_string())), "one");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Key {
    /// A zero-based position.
    Index(usize),
    /// An explicit name.
    Name(String),
}

impl Key {
    /// Returns the position if this is an [`Key::Index`].
    #[inline]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the name if this is a [`Key::Name`].
    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl From<usize> for Key {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    #[inline]
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

/// One (key, value) pair produced by a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<V> {
    /// The element's key.
    pub key: Key,
    /// The element's value.
    pub value: V,
}

impl<V> Entry<V> {
    /// Creates an entry from a key and a value.
    #[inline]
    pub fn new(key: impl Into<Key>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Replaces the value, keeping the key.
    #[inline]
    pub fn map_value<U>(self, function: impl FnOnce(V) -> U) -> Entry<U> {
        Entry {
            key: self.key,
            value: function(self.value),
        }
    }

    /// Replaces the key with a position, keeping the value.
    #[inline]
    pub(crate) fn at(self, position: usize) -> Self {
        Self {
            key: Key::Index(position),
            value: self.value,
        }
    }

    /// Splits the entry into its key and value.
    #[inline]
    pub fn into_pair(self) -> (Key, V) {
        (self.key, self.value)
    }
}

impl<K: Into<Key>, V> From<(K, V)> for Entry<V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
