//! Normalization of enumerables into the canonical cursor protocol, and
//! materialization of cursors back into collections.

use tracing::trace;

use super::collection::Collection;
use super::cursor::{BoxCursor, CollectionCursor, Cursor};
use super::enumerable::{Enumerable, IntoEnumerable};
use super::key::Entry;
use crate::error::{Error, Result};

/// The number of nested wrappers a default [`Normalizer`] unwraps before
/// giving up.
pub const DEFAULT_WRAPPER_DEPTH_LIMIT: usize = 256;

/// Turns any [`Enumerable`] into a cursor.
///
/// - A concrete collection becomes a cursor over its entries in insertion
///   order, keeping each entry's key.
/// - A stateful cursor is returned unchanged.
/// - A wrapper is unwrapped repeatedly until a non-wrapper is reached.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Enumerable, Error, Normalizer};
///
/// let strict = Normalizer::new().with_wrapper_depth_limit(1);
///
/// assert!(strict.normalize(Enumerable::wrap(vec![1])).is_ok());
/// assert!(matches!(
///     strict.normalize(Enumerable::wrap(Enumerable::wrap(vec![1]))),
///     Err(Error::UnsupportedEnumerableKind { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Normalizer {
    wrapper_depth_limit: usize,
}

impl Normalizer {
    /// Creates a normalizer with [`DEFAULT_WRAPPER_DEPTH_LIMIT`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            wrapper_depth_limit: DEFAULT_WRAPPER_DEPTH_LIMIT,
        }
    }

    /// Sets how many nested wrappers are unwrapped before normalization fails.
    #[inline]
    #[must_use]
    pub const fn with_wrapper_depth_limit(self, limit: usize) -> Self {
        Self {
            wrapper_depth_limit: limit,
        }
    }

    /// Returns the configured wrapper depth limit.
    #[inline]
    pub const fn wrapper_depth_limit(&self) -> usize {
        self.wrapper_depth_limit
    }

    /// Normalizes an enumerable into a cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEnumerableKind`] if the wrapper chain is
    /// deeper than the configured limit.
    pub fn normalize<'a, V: 'a>(
        &self,
        source: impl IntoEnumerable<'a, Value = V>,
    ) -> Result<BoxCursor<'a, V>> {
        let mut current = source.into_enumerable();
        let mut depth = 0;
        loop {
            match current {
                Enumerable::Concrete(collection) => {
                    trace!(kind = "concrete", depth, len = collection.len(), "normalized enumerable");
                    return Ok(Box::new(CollectionCursor::new(collection)));
                }
                Enumerable::Stateful(cursor) => {
                    trace!(kind = "stateful", depth, "normalized enumerable");
                    return Ok(cursor);
                }
                Enumerable::Wrapping(aggregate) => {
                    if depth == self.wrapper_depth_limit {
                        return Err(Error::wrapper_depth_exceeded(self.wrapper_depth_limit));
                    }
                    depth += 1;
                    current = aggregate.into_inner();
                }
            }
        }
    }

    /// Drains an enumerable into a collection, keeping keys and order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while normalizing or draining. No
    /// partial collection is returned.
    pub fn materialize<'a, V: 'a>(
        &self,
        source: impl IntoEnumerable<'a, Value = V>,
    ) -> Result<Collection<V>> {
        let mut cursor = self.normalize(source)?;
        let mut collection = Collection::new();
        while let Some(entry) = cursor.advance()? {
            collection.push_entry(entry);
        }
        trace!(len = collection.len(), "materialized enumerable");
        Ok(collection)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes an enumerable into a cursor with the default [`Normalizer`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedEnumerableKind`] if the wrapper chain does not
/// resolve within [`DEFAULT_WRAPPER_DEPTH_LIMIT`] levels.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Cursor, Entry, to_iterator};
///
/// let mut cursor = to_iterator(vec!["a", "b"])?;
/// assert_eq!(cursor.advance()?, Some(Entry::new(0, "a")));
/// assert_eq!(cursor.advance()?, Some(Entry::new(1, "b")));
/// assert_eq!(cursor.advance()?, None);
/// assert!(cursor.is_exhausted());
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn to_iterator<'a, V: 'a>(
    source: impl IntoEnumerable<'a, Value = V>,
) -> Result<BoxCursor<'a, V>> {
    Normalizer::new().normalize(source)
}

/// Drains an enumerable into a concrete collection with the default
/// [`Normalizer`].
///
/// Fully consumes a single-pass source.
///
/// # Errors
///
/// Returns the first error raised while normalizing or draining.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Collection, to_array};
///
/// let named: Collection<i32> = [("one", 1)].into_iter().collect();
/// assert_eq!(to_array(named.clone())?, named);
/// assert!(to_array(Vec::<i32>::new())?.is_empty());
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn to_array<'a, V: 'a>(source: impl IntoEnumerable<'a, Value = V>) -> Result<Collection<V>> {
    Normalizer::new().materialize(source)
}

/// An upstream held by a lazy cursor: normalized on the first pull.
pub(crate) struct Upstream<'a, V> {
    pending: Option<Enumerable<'a, V>>,
    cursor: Option<BoxCursor<'a, V>>,
}

impl<'a, V: 'a> Upstream<'a, V> {
    pub(crate) fn new(source: impl IntoEnumerable<'a, Value = V>) -> Self {
        Self {
            pending: Some(source.into_enumerable()),
            cursor: None,
        }
    }

    pub(crate) fn advance(&mut self) -> Result<Option<Entry<V>>> {
        if let Some(pending) = self.pending.take() {
            self.cursor = Some(to_iterator(pending)?);
        }
        match self.cursor.as_mut() {
            Some(cursor) => cursor.advance(),
            None => Ok(None),
        }
    }
}

/// A standard [`Iterator`] over the entries of an enumerable.
///
/// Created by [`Enumerable::entries`]. Normalization happens on the first
/// call to `next`. After the first error the iterator is fused.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Enumerable, Result};
///
/// let values: Result<Vec<i32>> = Enumerable::from(vec![1, 2, 3])
///     .entries()
///     .map(|entry| entry.map(|entry| entry.value * 10))
///     .collect();
/// assert_eq!(values?, vec![10, 20, 30]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub struct Entries<'a, V> {
    upstream: Upstream<'a, V>,
    failed: bool,
}

impl<'a, V: 'a> Entries<'a, V> {
    pub(crate) fn new(source: Enumerable<'a, V>) -> Self {
        Self {
            upstream: Upstream::new(source),
            failed: false,
        }
    }
}

impl<'a, V: 'a> Iterator for Entries<'a, V> {
    type Item = Result<Entry<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.upstream.advance() {
            Ok(entry) => entry.map(Ok),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

impl<'a, V: 'a> IntoIterator for Enumerable<'a, V> {
    type Item = Result<Entry<V>>;
    type IntoIter = Entries<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::enumerable::Aggregate;
    use crate::sequence::key::Key;
    use rstest::rstest;

    struct Bottomless;

    impl<'a> Aggregate<'a> for Bottomless {
        type Value = i32;

        fn into_inner(self: Box<Self>) -> Enumerable<'a, i32> {
            Enumerable::wrapping(Bottomless)
        }
    }

    #[rstest]
    fn test_normalize_unwraps_nested_wrappers() {
        let nested = Enumerable::wrap(Enumerable::wrap(Enumerable::wrap(vec![1, 2])));
        let collection = to_array(nested).unwrap();
        assert_eq!(collection.into_values(), vec![1, 2]);
    }

    #[rstest]
    fn test_normalize_rejects_bottomless_wrappers() {
        let error = to_iterator(Enumerable::wrapping(Bottomless)).err().unwrap();
        assert!(matches!(error, Error::UnsupportedEnumerableKind { .. }));
    }

    #[rstest]
    #[case(0, 0, true)]
    #[case(0, 1, false)]
    #[case(3, 3, true)]
    #[case(3, 4, false)]
    fn test_wrapper_depth_limit(#[case] limit: usize, #[case] wrappers: usize, #[case] accepted: bool) {
        let mut enumerable = Enumerable::from(vec![1]);
        for _ in 0..wrappers {
            enumerable = Enumerable::wrap(enumerable);
        }
        let normalizer = Normalizer::new().with_wrapper_depth_limit(limit);
        assert_eq!(normalizer.normalize(enumerable).is_ok(), accepted);
    }

    #[rstest]
    fn test_upstream_normalizes_on_first_pull() {
        let mut upstream = Upstream::new(Enumerable::wrap(vec![1]));
        assert!(upstream.cursor.is_none());
        assert_eq!(upstream.advance().unwrap(), Some(Entry::new(Key::Index(0), 1)));
        assert!(upstream.pending.is_none());
        assert_eq!(upstream.advance().unwrap(), None);
    }

    #[rstest]
    fn test_entries_fuse_after_error() {
        let mut entries = Enumerable::wrapping(Bottomless).entries();
        assert!(matches!(entries.next(), Some(Err(_))));
        assert!(entries.next().is_none());
    }

    #[rstest]
    fn test_enumerable_into_iterator() {
        let keys: Vec<Key> = Enumerable::from(vec!['a', 'b'])
            .into_iter()
            .map(|entry| entry.unwrap().key)
            .collect();
        assert_eq!(keys, vec![Key::Index(0), Key::Index(1)]);
    }
}
