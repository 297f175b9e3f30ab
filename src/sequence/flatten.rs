//! Recursive flattening of nested enumerables.

use std::fmt;

use super::cursor::{Cursor, CursorState};
use super::enumerable::{Enumerable, IntoEnumerable};
use super::key::Entry;
use super::normalize::Upstream;
use crate::error::Result;

/// An element that is either a plain value or a nested enumerable.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Depth, Nested, flatten, to_array};
///
/// let nested = vec![
///     Nested::Leaf(1),
///     Nested::nest(vec![Nested::Leaf(2)]),
///     Nested::nest(vec![Nested::nest(vec![Nested::Leaf(3)])]),
/// ];
/// let flat = to_array(flatten(nested, Depth::Levels(2)))?;
/// let leaves: Vec<i32> = flat.into_values().into_iter().filter_map(Nested::into_leaf).collect();
/// assert_eq!(leaves, vec![1, 2, 3]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub enum Nested<'a, V> {
    /// A plain value.
    Leaf(V),
    /// A nested enumerable.
    Nested(Enumerable<'a, Nested<'a, V>>),
}

impl<'a, V: 'a> Nested<'a, V> {
    /// Creates a nested element from anything enumerable.
    pub fn nest(inner: impl IntoEnumerable<'a, Value = Self>) -> Self {
        Self::Nested(inner.into_enumerable())
    }

    /// Returns `true` if this is a [`Nested::Leaf`].
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the plain value, if any.
    #[inline]
    pub fn into_leaf(self) -> Option<V> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Nested(_) => None,
        }
    }

    /// Returns the nested enumerable, if any.
    #[inline]
    pub fn into_nested(self) -> Option<Enumerable<'a, Self>> {
        match self {
            Self::Leaf(_) => None,
            Self::Nested(inner) => Some(inner),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Nested<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(value) => formatter.debug_tuple("Leaf").field(value).finish(),
            Self::Nested(inner) => formatter.debug_tuple("Nested").field(inner).finish(),
        }
    }
}

/// How many levels of nesting [`flatten`] descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Depth {
    /// Flatten fully.
    #[default]
    Unbounded,
    /// Flatten at most this many levels. `Levels(0)` flattens nothing.
    Levels(usize),
}

impl Depth {
    /// Returns the budget left after descending one level, or `None` if no
    /// descent is allowed.
    #[inline]
    pub const fn descend(self) -> Option<Self> {
        match self {
            Self::Unbounded => Some(Self::Unbounded),
            Self::Levels(0) => None,
            Self::Levels(levels) => Some(Self::Levels(levels - 1)),
        }
    }
}

impl From<usize> for Depth {
    #[inline]
    fn from(levels: usize) -> Self {
        Self::Levels(levels)
    }
}

/// The cursor behind [`flatten`].
///
/// Keeps a stack of open enumerables, each with the depth budget left for
/// the elements it yields.
pub struct Flatten<'a, V> {
    stack: Vec<(Upstream<'a, Nested<'a, V>>, Depth)>,
    position: usize,
    state: CursorState,
}

impl<'a, V: 'a> Flatten<'a, V> {
    /// Creates the cursor without touching the source.
    pub fn new(source: impl IntoEnumerable<'a, Value = Nested<'a, V>>, depth: Depth) -> Self {
        Self {
            stack: vec![(Upstream::new(source), depth)],
            position: 0,
            state: CursorState::Active,
        }
    }

    /// Returns the cursor's state.
    #[inline]
    pub const fn state(&self) -> CursorState {
        self.state
    }

    /// Returns how many enumerables are currently open.
    #[inline]
    pub fn open_levels(&self) -> usize {
        self.stack.len()
    }

    fn pull(&mut self) -> Result<Option<Entry<Nested<'a, V>>>> {
        loop {
            let Some((upstream, depth)) = self.stack.last_mut() else {
                return Ok(None);
            };
            let depth = *depth;
            let Some(entry) = upstream.advance()? else {
                self.stack.pop();
                continue;
            };
            match (entry.value, depth.descend()) {
                (Nested::Nested(inner), Some(remaining)) => {
                    self.stack.push((Upstream::new(inner), remaining));
                }
                (value, _) => {
                    let entry = Entry::new(self.position, value);
                    self.position += 1;
                    return Ok(Some(entry));
                }
            }
        }
    }
}

impl<'a, V: 'a> Cursor for Flatten<'a, V> {
    type Value = Nested<'a, V>;

    fn advance(&mut self) -> Result<Option<Entry<Nested<'a, V>>>> {
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

/// Lazily splices nested enumerables into the sequence, up to `depth` levels.
///
/// `Depth::Levels(0)` passes every element through unchanged, nested
/// enumerables included. Nested enumerables below the depth limit are
/// yielded intact. Output keys are sequential positions.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Depth, Nested, flatten, to_array};
///
/// let nested = vec![Nested::Leaf(1), Nested::nest(vec![Nested::Leaf(2)]), Nested::Leaf(3)];
/// let untouched = to_array(flatten(nested, Depth::Levels(0)))?.into_values();
///
/// assert!(untouched[0].is_leaf());
/// assert!(!untouched[1].is_leaf());
/// assert!(untouched[2].is_leaf());
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn flatten<'a, S, V>(source: S, depth: impl Into<Depth>) -> Enumerable<'a, Nested<'a, V>>
where
    S: IntoEnumerable<'a, Value = Nested<'a, V>>,
    V: 'a,
{
    Enumerable::stateful(Flatten::new(source, depth.into()))
}
