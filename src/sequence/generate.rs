//! `range`, the one generator among the combinators.

use std::cmp::Ordering;

use tracing::trace;

use super::cursor::{Cursor, CursorState};
use super::enumerable::Enumerable;
use super::key::Entry;
use crate::error::{Error, Result};

/// The cursor behind [`range`].
///
/// Holds the next value to yield, the bound and the step magnitude. The
/// direction is fixed at construction from `start` and `end`.
#[derive(Debug, Clone)]
pub struct Range {
    next: Option<i64>,
    end: i64,
    step: u64,
    direction: Ordering,
    position: usize,
    state: CursorState,
}

impl Range {
    /// Creates the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] if `step` is zero and `start != end`.
    pub fn new(start: i64, end: i64, step: i64) -> Result<Self> {
        let direction = start.cmp(&end);
        if step == 0 && direction != Ordering::Equal {
            return Err(Error::InvalidStep { start, end });
        }
        Ok(Self::with_magnitude(start, end, step.unsigned_abs()))
    }

    fn with_magnitude(start: i64, end: i64, step: u64) -> Self {
        let direction = start.cmp(&end);
        trace!(start, end, step, ?direction, "created range");
        Self {
            next: Some(start),
            end,
            step,
            direction,
            position: 0,
            state: CursorState::Active,
        }
    }

    /// Returns the cursor's state.
    #[inline]
    pub const fn state(&self) -> CursorState {
        self.state
    }

    fn successor(&self, current: i64) -> Option<i64> {
        match self.direction {
            Ordering::Less => current
                .checked_add_unsigned(self.step)
                .filter(|next| *next <= self.end),
            Ordering::Greater => current
                .checked_sub_unsigned(self.step)
                .filter(|next| *next >= self.end),
            Ordering::Equal => None,
        }
    }
}

impl Cursor for Range {
    type Value = i64;

    fn advance(&mut self) -> Result<Option<Entry<i64>>> {
        if self.state.is_exhausted() {
            return Ok(None);
        }
        let entry = self.next.map(|current| {
            self.next = self.successor(current);
            let entry = Entry::new(self.position, current);
            self.position += 1;
            entry
        });
        self.state.settle(Ok(entry))
    }

    fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }
}

/// Lazily yields the integers from `start` towards `end`, inclusive.
///
/// The direction comes from comparing `start` and `end`; only the magnitude
/// of `step` is used. If `start == end` the single value `start` is yielded
/// whatever the step. Output keys are sequential positions. Pass `1` for the
/// conventional unit step.
///
/// # Errors
///
/// Returns [`Error::InvalidStep`] if `step` is zero and `start != end`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{range, to_array};
///
/// assert_eq!(to_array(range(1, 5, 2)?)?.into_values(), vec![1, 3, 5]);
/// assert_eq!(to_array(range(1, 5, -2)?)?.into_values(), vec![1, 3, 5]);
/// assert_eq!(to_array(range(5, 1, 2)?)?.into_values(), vec![5, 3, 1]);
/// assert_eq!(to_array(range(5, 5, 0)?)?.into_values(), vec![5]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn range<'a>(start: i64, end: i64, step: i64) -> Result<Enumerable<'a, i64>> {
    Ok(Enumerable::stateful(Range::new(start, end, step)?))
}

/// Lazily yields every integer from `start` to `end`, both included.
///
/// The same sequence as `range(start, end, 1)`, which cannot fail. Counts
/// down when `start > end`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{range_inclusive, to_array};
///
/// assert_eq!(to_array(range_inclusive(1, 4))?.into_values(), vec![1, 2, 3, 4]);
/// assert_eq!(to_array(range_inclusive(2, 0))?.into_values(), vec![2, 1, 0]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn range_inclusive<'a>(start: i64, end: i64) -> Enumerable<'a, i64> {
    Enumerable::stateful(Range::with_magnitude(start, end, 1))
}
