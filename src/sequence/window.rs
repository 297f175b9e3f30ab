//! Positional lazy combinators: `take`, `drop` and `slice`.
//!
//! All three renumber their output with sequential positions.

use super::cursor::{Cursor, CursorState};
use super::enumerable::{Enumerable, IntoEnumerable};
use super::key::Entry;
use super::normalize::Upstream;
use crate::error::Result;

/// The cursor behind [`take`].
///
/// Never pulls the upstream once the quota is used up, so an unbounded
/// upstream is safe.
pub struct Take<'a, V> {
    upstream: Upstream<'a, V>,
    remaining: usize,
    position: usize,
    state: CursorState,
}

impl<'a, V: 'a> Take<'a, V> {
    /// Creates the cursor without touching the source.
    pub fn new(source: impl IntoEnumerable<'a, Value = V>, count: usize) -> Self {
        Self {
            upstream: Upstream::new(source),
            remaining: count,
            position: 0,
            state: CursorState::Active,
        }
    }

    /// Returns the cursor's state.
    #[inline]
    pub const fn state(&self) -> CursorState {
        self.state
    }

    /// Returns how many more elements may be yielded at most.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    fn pull(&mut self) -> Result<Option<Entry<V>>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let Some(entry) = self.upstream.advance()? else {
            return Ok(None);
        };
        self.remaining -= 1;
        let entry = entry.at(self.position);
        self.position += 1;
        Ok(Some(entry))
    }
}

impl<'a, V: 'a> Cursor for Take<'a, V> {
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

/// Lazily yields at most the first `count` elements. A shorter source is
/// yielded in full, without padding.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{range, take, to_array};
///
/// assert_eq!(to_array(take(range(1, 10, 1)?, 3))?.into_values(), vec![1, 2, 3]);
/// assert_eq!(to_array(take(range(1, 2, 1)?, 3))?.into_values(), vec![1, 2]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn take<'a, S>(source: S, count: usize) -> Enumerable<'a, S::Value>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
{
    Enumerable::stateful(Take::new(source, count))
}

/// The cursor behind [`drop`].
///
/// The skipping happens on the first pull.
pub struct Skip<'a, V> {
    upstream: Upstream<'a, V>,
    to_skip: usize,
    position: usize,
    state: CursorState,
}

impl<'a, V: 'a> Skip<'a, V> {
    /// Creates the cursor without touching the source.
    pub fn new(source: impl IntoEnumerable<'a, Value = V>, count: usize) -> Self {
        Self {
            upstream: Upstream::new(source),
            to_skip: count,
            position: 0,
            state: CursorState::Active,
        }
    }

    /// Returns the cursor's state.
    #[inline]
    pub const fn state(&self) -> CursorState {
        self.state
    }

    fn pull(&mut self) -> Result<Option<Entry<V>>> {
        while self.to_skip > 0 {
            if self.upstream.advance()?.is_none() {
                return Ok(None);
            }
            self.to_skip -= 1;
        }
        let Some(entry) = self.upstream.advance()? else {
            return Ok(None);
        };
        let entry = entry.at(self.position);
        self.position += 1;
        Ok(Some(entry))
    }
}

impl<'a, V: 'a> Cursor for Skip<'a, V> {
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

/// Lazily skips the first `count` elements and yields the rest.
///
/// Glob-importing this function shadows [`std::mem::drop`].
///
/// # Examples
///
/// ```rust
/// use lazyfn::{drop, range, to_array};
///
/// assert_eq!(to_array(drop(range(1, 5, 1)?, 3))?.into_values(), vec![4, 5]);
/// assert!(to_array(drop(range(1, 2, 1)?, 3))?.is_empty());
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn drop<'a, S>(source: S, count: usize) -> Enumerable<'a, S::Value>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
{
    Enumerable::stateful(Skip::new(source, count))
}

/// Lazily yields the elements at zero-based positions `start..=end`.
///
/// Equivalent to `take(drop(source, start), end - start + 1)`; empty when
/// `start > end`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{range, slice, to_array};
///
/// assert_eq!(to_array(slice(range(1, 7, 1)?, 4, 5))?.into_values(), vec![5, 6]);
/// assert!(to_array(slice(range(1, 7, 1)?, 5, 4))?.is_empty());
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn slice<'a, S>(source: S, start: usize, end: usize) -> Enumerable<'a, S::Value>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
{
    if start > end {
        return Enumerable::empty();
    }
    take(drop(source, start), (end - start).saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::cursor::IterCursor;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_take_zero_never_pulls() {
        let pulls = Cell::new(0);
        let source = IterCursor::new(std::iter::from_fn(|| {
            pulls.set(pulls.get() + 1);
            Some(1)
        }));
        let mut cursor = Take::new(Enumerable::stateful(source), 0);

        assert_eq!(cursor.advance().unwrap(), None);
        assert_eq!(pulls.get(), 0);
        assert_eq!(cursor.state(), CursorState::Exhausted);
    }

    #[rstest]
    fn test_take_stops_pulling_after_quota() {
        let pulls = Cell::new(0);
        let source = IterCursor::new(std::iter::from_fn(|| {
            pulls.set(pulls.get() + 1);
            Some(pulls.get())
        }));
        let mut cursor = Take::new(Enumerable::stateful(source), 2);

        assert_eq!(cursor.advance().unwrap().map(|entry| entry.value), Some(1));
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.advance().unwrap().map(|entry| entry.value), Some(2));
        assert_eq!(cursor.advance().unwrap(), None);
        assert_eq!(pulls.get(), 2);
    }

    #[rstest]
    fn test_drop_is_lazy_until_first_pull() {
        let pulls = Cell::new(0);
        let source = IterCursor::new(std::iter::from_fn(|| {
            pulls.set(pulls.get() + 1);
            (pulls.get() <= 5).then_some(pulls.get())
        }));
        let mut cursor = Skip::new(Enumerable::stateful(source), 3);

        assert_eq!(pulls.get(), 0);
        assert_eq!(cursor.advance().unwrap(), Some(Entry::new(0, 4)));
        assert_eq!(pulls.get(), 4);
    }

    #[rstest]
    #[case(0, 0, vec![10])]
    #[case(1, 2, vec![20, 30])]
    #[case(2, 9, vec![30])]
    #[case(3, 3, vec![])]
    fn test_slice_bounds(#[case] start: usize, #[case] end: usize, #[case] expected: Vec<i32>) {
        let collection = crate::sequence::normalize::to_array(slice(vec![10, 20, 30], start, end)).unwrap();
        assert_eq!(collection.into_values(), expected);
    }
}
