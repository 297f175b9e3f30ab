//! The canonical cursor protocol and the cursors that feed it.
//!
//! A [`Cursor`] is a single-pass, pull-based walk over (key, value) pairs.
//! Each call to [`Cursor::advance`] moves to the next element and hands it
//! over; the key and the value of the current element arrive together as an
//! [`Entry`]. A cursor is either *active* or *exhausted*, and once exhausted
//! it stays exhausted: further calls report no element and never touch the
//! upstream again.

use std::marker::PhantomData;

use super::key::Entry;
use super::collection::Collection;
use crate::error::Result;

/// A boxed cursor, the form every lazy enumerable is normalized into.
pub type BoxCursor<'a, V> = Box<dyn Cursor<Value = V> + 'a>;

/// The canonical iterator protocol.
///
/// Implement this trait to feed an external stateful source into the
/// combinators via [`Enumerable::stateful`](crate::Enumerable::stateful).
///
/// # Contract
///
/// - `advance` returns `Ok(Some(entry))` while elements remain.
/// - The first `Ok(None)` or `Err(_)` moves the cursor to the exhausted
///   state; from then on `advance` returns `Ok(None)`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Cursor, Entry, Enumerable, Result, to_array};
///
/// struct Countdown {
///     remaining: usize,
/// }
///
/// impl Cursor for Countdown {
///     type Value = usize;
///
///     fn advance(&mut self) -> Result<Option<Entry<usize>>> {
///         if self.remaining == 0 {
///             return Ok(None);
///         }
///         self.remaining -= 1;
///         Ok(Some(Entry::new(self.remaining, self.remaining)))
///     }
///
///     fn is_exhausted(&self) -> bool {
///         self.remaining == 0
///     }
/// }
///
/// let collection = to_array(Enumerable::stateful(Countdown { remaining: 3 }))?;
/// assert_eq!(collection.into_values(), vec![2, 1, 0]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub trait Cursor {
    /// The type of the values this cursor yields.
    type Value;

    /// Moves to the next element and returns it.
    ///
    /// # Errors
    ///
    /// Returns any error raised while producing the element, such as a
    /// failing caller-supplied function further upstream.
    fn advance(&mut self) -> Result<Option<Entry<Self::Value>>>;

    /// Returns `true` once the cursor has reported exhaustion.
    fn is_exhausted(&self) -> bool;
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Value = C::Value;

    #[inline]
    fn advance(&mut self) -> Result<Option<Entry<Self::Value>>> {
        (**self).advance()
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Value = C::Value;

    #[inline]
    fn advance(&mut self) -> Result<Option<Entry<Self::Value>>> {
        (**self).advance()
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

/// The two states of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorState {
    /// The cursor has not reported exhaustion yet.
    #[default]
    Active,
    /// The cursor has reported exhaustion or failed. Terminal.
    Exhausted,
}

impl CursorState {
    /// Returns `true` if this is the terminal state.
    #[inline]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Records the outcome of a pull, moving to [`CursorState::Exhausted`]
    /// on anything but a produced element.
    #[inline]
    pub(crate) fn settle<T>(&mut self, outcome: Result<Option<T>>) -> Result<Option<T>> {
        if !matches!(outcome, Ok(Some(_))) {
            *self = Self::Exhausted;
        }
        outcome
    }
}

/// A cursor over a [`Collection`], yielding its entries in insertion order
/// with their original keys.
#[derive(Debug)]
pub struct CollectionCursor<V> {
    entries: std::vec::IntoIter<Entry<V>>,
    state: CursorState,
}

impl<V> CollectionCursor<V> {
    /// Creates a cursor that walks the given collection.
    pub fn new(collection: Collection<V>) -> Self {
        Self {
            entries: collection.into_iter(),
            state: CursorState::Active,
        }
    }

    /// Returns the cursor's state.
    #[inline]
    pub const fn state(&self) -> CursorState {
        self.state
    }
}

impl<V> Cursor for CollectionCursor<V> {
    type Value = V;

    fn advance(&mut self) -> Result<Option<Entry<V>>> {
        if self.state.is_exhausted() {
            return Ok(None);
        }
        let next = self.entries.next();
        self.state.settle(Ok(next))
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

/// A cursor with no elements.
#[derive(Debug)]
pub struct EmptyCursor<V> {
    marker: PhantomData<fn() -> V>,
}

impl<V> EmptyCursor<V> {
    /// Creates an empty cursor.
    #[inline]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<V> Default for EmptyCursor<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Cursor for EmptyCursor<V> {
    type Value = V;

    #[inline]
    fn advance(&mut self) -> Result<Option<Entry<V>>> {
        Ok(None)
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        true
    }
}

/// Adapts any [`Iterator`] into a stateful cursor with sequential keys.
///
/// The iterator is pulled one element per [`Cursor::advance`] and is never
/// pulled again after it returns `None`, so unbounded iterators are fine as
/// long as the consumer stops pulling (for example through [`take`](crate::take)).
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Enumerable, IterCursor, take, to_array};
///
/// let naturals = Enumerable::stateful(IterCursor::new(0_u64..));
/// let collection = to_array(take(naturals, 3))?;
/// assert_eq!(collection.into_values(), vec![0, 1, 2]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
#[derive(Debug)]
pub struct IterCursor<I> {
    iterator: I,
    position: usize,
    state: CursorState,
}

impl<I: Iterator> IterCursor<I> {
    /// Wraps an iterator.
    pub fn new(iterable: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iterator: iterable.into_iter(),
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

impl<I: Iterator> Cursor for IterCursor<I> {
    type Value = I::Item;

    fn advance(&mut self) -> Result<Option<Entry<I::Item>>> {
        if self.state.is_exhausted() {
            return Ok(None);
        }
        let next = self.iterator.next().map(|value| {
            let entry = Entry::new(self.position, value);
            self.position += 1;
            entry
        });
        self.state.settle(Ok(next))
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}
