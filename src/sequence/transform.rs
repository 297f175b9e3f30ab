//! Element-wise lazy combinators: `map`, `filter`, `reject` and `flat_map`.
//!
//! Each combinator returns an [`Enumerable`] at once and does no work until
//! it is pulled. A failing caller-supplied function ends the walk: the error
//! is returned from that pull and the cursor is exhausted afterwards.

use std::convert::Infallible;

use super::cursor::{BoxCursor, Cursor, CursorState};
use super::enumerable::{Enumerable, IntoEnumerable};
use super::key::Entry;
use super::normalize::{Upstream, to_iterator};
use crate::error::{BoxError, Error, Result};

// =============================================================================
// map
// =============================================================================

/// The cursor behind [`map`] and [`try_map`].
pub struct Map<'a, V, F> {
    upstream: Upstream<'a, V>,
    function: F,
    state: CursorState,
}

impl<'a, V: 'a, F> Map<'a, V, F> {
    /// Creates the cursor without touching the source.
    pub fn new(source: impl IntoEnumerable<'a, Value = V>, function: F) -> Self {
        Self {
            upstream: Upstream::new(source),
            function,
            state: CursorState::Active,
        }
    }

    /// Returns the cursor's state.
    #[inline]
    pub const fn state(&self) -> CursorState {
        self.state
    }
}

impl<'a, V: 'a, U, E, F> Map<'a, V, F>
where
    F: FnMut(V) -> Result<U, E>,
    E: Into<BoxError>,
{
    fn pull(&mut self) -> Result<Option<Entry<U>>> {
        let Some(entry) = self.upstream.advance()? else {
            return Ok(None);
        };
        let value = (self.function)(entry.value).map_err(Error::callback)?;
        Ok(Some(Entry {
            key: entry.key,
            value,
        }))
    }
}

impl<'a, V: 'a, U, E, F> Cursor for Map<'a, V, F>
where
    F: FnMut(V) -> Result<U, E>,
    E: Into<BoxError>,
{
    type Value = U;

    fn advance(&mut self) -> Result<Option<Entry<U>>> {
        if self.state.is_exhausted() {
            return Ok(None);
        }
        let outcome = self.pull();
        self.state.settle(outcome)
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

/// Lazily replaces every value with `function(value)`, keeping keys.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Collection, map, to_array};
///
/// let squares = to_array(map(vec![1, 2, 3], |n: i32| n * n))?;
/// assert_eq!(squares, Collection::from_values([1, 4, 9]));
///
/// let named: Collection<i32> = [("one", 1)].into_iter().collect();
/// let doubled = to_array(map(named, |n: i32| n * 2))?;
/// assert_eq!(doubled, [("one", 2)].into_iter().collect());
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn map<'a, S, U, F>(source: S, mut function: F) -> Enumerable<'a, U>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    U: 'a,
    F: FnMut(S::Value) -> U + 'a,
{
    try_map(source, move |value| Ok::<U, Infallible>(function(value)))
}

/// Like [`map`], for a function that may fail.
///
/// The function's error is surfaced as [`Error::CallbackFailure`] by the pull
/// that invoked it.
pub fn try_map<'a, S, U, E, F>(source: S, function: F) -> Enumerable<'a, U>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    U: 'a,
    E: Into<BoxError> + 'a,
    F: FnMut(S::Value) -> Result<U, E> + 'a,
{
    Enumerable::stateful(Map::new(source, function))
}

// =============================================================================
// filter / reject
// =============================================================================

/// The cursor behind [`filter`], [`reject`] and their fallible forms.
///
/// Keeps elements whose predicate result equals `keep`. Keys are never
/// renumbered.
pub struct Filter<'a, V, P> {
    upstream: Upstream<'a, V>,
    predicate: P,
    keep: bool,
    state: CursorState,
}

impl<'a, V: 'a, P> Filter<'a, V, P> {
    /// Creates a cursor keeping elements for which the predicate returns `keep`.
    pub fn new(source: impl IntoEnumerable<'a, Value = V>, predicate: P, keep: bool) -> Self {
        Self {
            upstream: Upstream::new(source),
            predicate,
            keep,
            state: CursorState::Active,
        }
    }

    /// Returns the cursor's state.
    #[inline]
    pub const fn state(&self) -> CursorState {
        self.state
    }
}

impl<'a, V: 'a, E, P> Filter<'a, V, P>
where
    P: FnMut(&V) -> Result<bool, E>,
    E: Into<BoxError>,
{
    fn pull(&mut self) -> Result<Option<Entry<V>>> {
        while let Some(entry) = self.upstream.advance()? {
            if (self.predicate)(&entry.value).map_err(Error::callback)? == self.keep {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }
}

impl<'a, V: 'a, E, P> Cursor for Filter<'a, V, P>
where
    P: FnMut(&V) -> Result<bool, E>,
    E: Into<BoxError>,
{
    type Value = V;

    fn advance(&mut self) -> Result<Option<Entry<V>>> {
        if self.state.is_exhausted() {
            return Ok(None);
        }
        let outcome = self.pull();
        self.state.settle(outcome)
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

/// Lazily keeps the elements for which `predicate` holds. Keys are preserved.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Key, filter, range, to_array};
///
/// let evens = to_array(filter(range(1, 8, 1)?, |n: &i64| n % 2 == 0))?;
/// let keys: Vec<_> = evens.keys().cloned().collect();
/// assert_eq!(keys, vec![Key::Index(1), Key::Index(3), Key::Index(5), Key::Index(7)]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn filter<'a, S, P>(source: S, mut predicate: P) -> Enumerable<'a, S::Value>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    P: FnMut(&S::Value) -> bool + 'a,
{
    try_filter(source, move |value: &S::Value| Ok::<bool, Infallible>(predicate(value)))
}

/// Like [`filter`], for a predicate that may fail.
pub fn try_filter<'a, S, E, P>(source: S, predicate: P) -> Enumerable<'a, S::Value>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    E: Into<BoxError> + 'a,
    P: FnMut(&S::Value) -> Result<bool, E> + 'a,
{
    Enumerable::stateful(Filter::new(source, predicate, true))
}

/// Lazily keeps the elements for which `predicate` does not hold. Keys are
/// preserved.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{reject, to_array};
///
/// let odds = to_array(reject(vec![1, 2, 3, 4], |n: &i32| n % 2 == 0))?;
/// assert_eq!(odds.into_values(), vec![1, 3]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn reject<'a, S, P>(source: S, mut predicate: P) -> Enumerable<'a, S::Value>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    P: FnMut(&S::Value) -> bool + 'a,
{
    try_reject(source, move |value: &S::Value| Ok::<bool, Infallible>(predicate(value)))
}

/// Like [`reject`], for a predicate that may fail.
pub fn try_reject<'a, S, E, P>(source: S, predicate: P) -> Enumerable<'a, S::Value>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    E: Into<BoxError> + 'a,
    P: FnMut(&S::Value) -> Result<bool, E> + 'a,
{
    Enumerable::stateful(Filter::new(source, predicate, false))
}

// =============================================================================
// flat_map
// =============================================================================

/// The cursor behind [`flat_map`] and [`try_flat_map`].
pub struct FlatMap<'a, V, U, F> {
    upstream: Upstream<'a, V>,
    function: F,
    inner: Option<BoxCursor<'a, U>>,
    position: usize,
    state: CursorState,
}

impl<'a, V: 'a, U, F> FlatMap<'a, V, U, F> {
    /// Creates the cursor without touching the source.
    pub fn new(source: impl IntoEnumerable<'a, Value = V>, function: F) -> Self {
        Self {
            upstream: Upstream::new(source),
            function,
            inner: None,
            position: 0,
            state: CursorState::Active,
        }
    }

    /// Returns the cursor's state.
    #[inline]
    pub const fn state(&self) -> CursorState {
        self.state
    }
}

impl<'a, V: 'a, U: 'a, S, E, F> FlatMap<'a, V, U, F>
where
    F: FnMut(V) -> Result<S, E>,
    S: IntoEnumerable<'a, Value = U>,
    E: Into<BoxError>,
{
    fn pull(&mut self) -> Result<Option<Entry<U>>> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(entry) = inner.advance()? {
                    let entry = entry.at(self.position);
                    self.position += 1;
                    return Ok(Some(entry));
                }
                self.inner = None;
            }
            let Some(entry) = self.upstream.advance()? else {
                return Ok(None);
            };
            let produced = (self.function)(entry.value).map_err(Error::callback)?;
            self.inner = Some(to_iterator(produced)?);
        }
    }
}

impl<'a, V: 'a, U: 'a, S, E, F> Cursor for FlatMap<'a, V, U, F>
where
    F: FnMut(V) -> Result<S, E>,
    S: IntoEnumerable<'a, Value = U>,
    E: Into<BoxError>,
{
    type Value = U;

    fn advance(&mut self) -> Result<Option<Entry<U>>> {
        if self.state.is_exhausted() {
            return Ok(None);
        }
        let outcome = self.pull();
        self.state.settle(outcome)
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

/// Lazily maps every value to an enumerable and splices its elements in
/// place, one level deep. Output keys are sequential positions.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{flat_map, to_array};
///
/// let words = flat_map(vec!["q w", "e z"], |pair| pair.split(' ').collect::<Vec<_>>());
/// assert_eq!(to_array(words)?.into_values(), vec!["q", "w", "e", "z"]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn flat_map<'a, S, T, F>(source: S, mut function: F) -> Enumerable<'a, T::Value>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    T: IntoEnumerable<'a>,
    T::Value: 'a,
    F: FnMut(S::Value) -> T + 'a,
{
    try_flat_map(source, move |value| Ok::<T, Infallible>(function(value)))
}

/// Like [`flat_map`], for a function that may fail.
pub fn try_flat_map<'a, S, T, E, F>(source: S, function: F) -> Enumerable<'a, T::Value>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    T: IntoEnumerable<'a>,
    T::Value: 'a,
    E: Into<BoxError> + 'a,
    F: FnMut(S::Value) -> Result<T, E> + 'a,
{
    Enumerable::stateful(FlatMap::<'a, S::Value, T::Value, F>::new(source, function))
}
