//! Lazy combinators over several sources: `chain` and `zip`.
//!
//! Both take an ordered collection of sources rather than a variable number
//! of arguments. Sources of different shapes are mixed by converting them to
//! [`Enumerable`] first.

use std::collections::VecDeque;

use super::cursor::{Cursor, CursorState};
use super::enumerable::{Enumerable, IntoEnumerable};
use super::key::Entry;
use super::normalize::Upstream;
use crate::error::Result;

/// The cursor behind [`chain`].
pub struct Chain<'a, V> {
    sources: VecDeque<Upstream<'a, V>>,
    state: CursorState,
}

impl<'a, V: 'a> Chain<'a, V> {
    /// Creates the cursor without touching any source.
    pub fn new<S>(sources: impl IntoIterator<Item = S>) -> Self
    where
        S: IntoEnumerable<'a, Value = V>,
    {
        Self {
            sources: sources.into_iter().map(Upstream::new).collect(),
            state: CursorState::Active,
        }
    }

    /// Returns the cursor's state.
    #[inline]
    pub const fn state(&self) -> CursorState {
        self.state
    }

    /// Returns how many sources have not been drained yet.
    #[inline]
    pub fn remaining_sources(&self) -> usize {
        self.sources.len()
    }

    fn pull(&mut self) -> Result<Option<Entry<V>>> {
        while let Some(source) = self.sources.front_mut() {
            if let Some(entry) = source.advance()? {
                return Ok(Some(entry));
            }
            self.sources.pop_front();
        }
        Ok(None)
    }
}

impl<'a, V: 'a> Cursor for Chain<'a, V> {
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

/// Lazily yields every element of each source in turn.
///
/// Keys are preserved as they are: two sources sharing a key both yield an
/// element with that key. No sources, or only empty ones, give an empty
/// result.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Collection, Enumerable, IterCursor, chain, to_array};
///
/// let named: Collection<i32> = [("o", 1)].into_iter().collect();
/// let chained = chain([
///     Enumerable::from(named),
///     Enumerable::stateful(IterCursor::new(vec![3])),
///     Enumerable::wrap(vec![4]),
/// ]);
///
/// let collection = to_array(chained)?;
/// assert_eq!(collection.keys().map(|key| key.to_string()).collect::<Vec<_>>(), ["o", "0", "0"]);
/// assert_eq!(collection.into_values(), vec![1, 3, 4]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn chain<'a, I, S>(sources: I) -> Enumerable<'a, S::Value>
where
    I: IntoIterator<Item = S>,
    S: IntoEnumerable<'a>,
    S::Value: 'a,
{
    Enumerable::stateful(Chain::new(sources))
}

/// The cursor behind [`zip`].
///
/// Sources are pulled in order within a row. When a source ends, values
/// already pulled from the sources before it in that row are discarded.
pub struct Zip<'a, V> {
    sources: Vec<Upstream<'a, V>>,
    position: usize,
    state: CursorState,
}

impl<'a, V: 'a> Zip<'a, V> {
    /// Creates the cursor without touching any source.
    pub fn new<S>(sources: impl IntoIterator<Item = S>) -> Self
    where
        S: IntoEnumerable<'a, Value = V>,
    {
        Self {
            sources: sources.into_iter().map(Upstream::new).collect(),
            position: 0,
            state: CursorState::Active,
        }
    }

    /// Returns the cursor's state.
    #[inline]
    pub const fn state(&self) -> CursorState {
        self.state
    }

    fn pull(&mut self) -> Result<Option<Entry<Vec<V>>>> {
        if self.sources.is_empty() {
            return Ok(None);
        }
        let mut row = Vec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            match source.advance()? {
                Some(entry) => row.push(entry.value),
                None => return Ok(None),
            }
        }
        let entry = Entry::new(self.position, row);
        self.position += 1;
        Ok(Some(entry))
    }
}

impl<'a, V: 'a> Cursor for Zip<'a, V> {
    type Value = Vec<V>;

    fn advance(&mut self) -> Result<Option<Entry<Vec<V>>>> {
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

/// Lazily yields rows built from the i-th element of every source.
///
/// Stops as soon as any source is exhausted, so the result is as long as
/// the shortest source. Output keys are sequential positions.
///
/// Each row pulls the sources in order. On the last, incomplete row the
/// values taken from sources listed before the exhausted one are dropped,
/// so a lent cursor loses one element if it precedes a shorter source.
/// List the shortest source first to leave lent cursors untouched past the
/// last row.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Enumerable, IterCursor, zip, to_array};
///
/// let zipped = zip([
///     Enumerable::from(vec![1, 2, 3]),
///     Enumerable::stateful(IterCursor::new(vec![4, 5])),
///     Enumerable::wrap(vec![6, 7]),
/// ]);
/// assert_eq!(to_array(zipped)?.into_values(), vec![vec![1, 4, 6], vec![2, 5, 7]]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn zip<'a, I, S>(sources: I) -> Enumerable<'a, Vec<S::Value>>
where
    I: IntoIterator<Item = S>,
    S: IntoEnumerable<'a>,
    S::Value: 'a,
{
    Enumerable::stateful(Zip::new(sources))
}
