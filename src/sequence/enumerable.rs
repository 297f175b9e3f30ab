//! The three shapes of input every combinator accepts.

use std::fmt;

use super::collection::Collection;
use super::combine::{Chain, Zip};
use super::cursor::{BoxCursor, CollectionCursor, Cursor, EmptyCursor, IterCursor};
use super::flatten::Flatten;
use super::generate::Range;
use super::key::Entry;
use super::normalize::Entries;
use super::transform::{Filter, FlatMap, Map};
use super::window::{Skip, Take};

/// Any value admissible as input to a combinator.
///
/// - [`Enumerable::Concrete`]: an ordered key/value [`Collection`].
/// - [`Enumerable::Stateful`]: an external single-pass [`Cursor`].
/// - [`Enumerable::Wrapping`]: a wrapper whose only behavior is to expose
///   another enumerable, which may itself be a wrapper.
///
/// Lazy combinators return `Stateful` enumerables whose cursors pull from
/// their upstreams on demand.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Enumerable, IterCursor, to_array};
///
/// let concrete = Enumerable::from(vec![1, 2, 3]);
/// let stateful = Enumerable::stateful(IterCursor::new(vec![1, 2, 3]));
/// let wrapped = Enumerable::wrap(Enumerable::wrap(Enumerable::from(vec![1, 2, 3])));
///
/// let expected = to_array(concrete)?;
/// assert_eq!(to_array(stateful)?, expected);
/// assert_eq!(to_array(wrapped)?, expected);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub enum Enumerable<'a, V> {
    /// A concrete ordered collection.
    Concrete(Collection<V>),
    /// An external stateful cursor, already canonical.
    Stateful(BoxCursor<'a, V>),
    /// A wrapper exposing an inner enumerable.
    Wrapping(Box<dyn Aggregate<'a, Value = V> + 'a>),
}

impl<'a, V> Enumerable<'a, V> {
    /// Creates an enumerable with no elements.
    #[inline]
    pub const fn empty() -> Self {
        Self::Concrete(Collection::new())
    }

    /// Wraps an external cursor.
    pub fn stateful<C>(cursor: C) -> Self
    where
        C: Cursor<Value = V> + 'a,
    {
        Self::Stateful(Box::new(cursor))
    }

    /// Wraps an aggregate.
    pub fn wrapping<A>(aggregate: A) -> Self
    where
        A: Aggregate<'a, Value = V> + 'a,
    {
        Self::Wrapping(Box::new(aggregate))
    }

    /// Nests an enumerable one level deeper behind a wrapper.
    pub fn wrap(inner: impl IntoEnumerable<'a, Value = V>) -> Self
    where
        V: 'a,
    {
        Self::Wrapping(Box::new(inner.into_enumerable()))
    }

    /// Returns the name of this shape, as reported in traces.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Concrete(_) => "concrete",
            Self::Stateful(_) => "stateful",
            Self::Wrapping(_) => "wrapping",
        }
    }

    /// Normalizes on first pull and walks the elements as a standard iterator.
    pub fn entries(self) -> Entries<'a, V>
    where
        V: 'a,
    {
        Entries::new(self)
    }
}

impl<V> Default for Enumerable<'_, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: fmt::Debug> fmt::Debug for Enumerable<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete(collection) => formatter.debug_tuple("Concrete").field(collection).finish(),
            Self::Stateful(_) => formatter.write_str("Stateful(..)"),
            Self::Wrapping(_) => formatter.write_str("Wrapping(..)"),
        }
    }
}

impl<V> From<Collection<V>> for Enumerable<'_, V> {
    fn from(collection: Collection<V>) -> Self {
        Self::Concrete(collection)
    }
}

impl<V> From<Vec<V>> for Enumerable<'_, V> {
    fn from(values: Vec<V>) -> Self {
        Self::Concrete(Collection::from_values(values))
    }
}

impl<V> FromIterator<V> for Enumerable<'_, V> {
    fn from_iter<I: IntoIterator<Item = V>>(iterable: I) -> Self {
        Self::Concrete(Collection::from_values(iterable))
    }
}

impl<V> FromIterator<Entry<V>> for Enumerable<'_, V> {
    fn from_iter<I: IntoIterator<Item = Entry<V>>>(iterable: I) -> Self {
        Self::Concrete(Collection::from_entries(iterable))
    }
}

/// A wrapper whose sole behavior is to expose an inner enumerable.
///
/// Normalization unwraps aggregates repeatedly until it reaches a concrete
/// collection or a cursor. Derive this trait with
/// `#[derive(Aggregate)]` when the `derive` feature is enabled.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Aggregate, Enumerable, map, to_array};
///
/// struct Playlist {
///     tracks: Vec<&'static str>,
/// }
///
/// impl<'a> Aggregate<'a> for Playlist {
///     type Value = &'static str;
///
///     fn into_inner(self: Box<Self>) -> Enumerable<'a, &'static str> {
///         Enumerable::from(self.tracks)
///     }
/// }
///
/// let playlist = Enumerable::wrapping(Playlist { tracks: vec!["intro", "outro"] });
/// let lengths = to_array(map(playlist, |track: &str| track.len()))?;
/// assert_eq!(lengths.into_values(), vec![5, 5]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub trait Aggregate<'a> {
    /// The type of the values of the inner enumerable.
    type Value;

    /// Gives up the wrapper, returning the enumerable it exposes.
    fn into_inner(self: Box<Self>) -> Enumerable<'a, Self::Value>;
}

impl<'a, V> Aggregate<'a> for Enumerable<'a, V> {
    type Value = V;

    #[inline]
    fn into_inner(self: Box<Self>) -> Self {
        *self
    }
}

/// Conversion into an [`Enumerable`].
///
/// Every combinator accepts `impl IntoEnumerable`, so plain vectors, arrays,
/// collections, enumerables and derived aggregates can be passed directly.
pub trait IntoEnumerable<'a> {
    /// The type of the elements' values.
    type Value;

    /// Performs the conversion. No caller code runs here.
    fn into_enumerable(self) -> Enumerable<'a, Self::Value>;
}

impl<'a, V> IntoEnumerable<'a> for Enumerable<'a, V> {
    type Value = V;

    #[inline]
    fn into_enumerable(self) -> Self {
        self
    }
}

impl<'a, V> IntoEnumerable<'a> for Collection<V> {
    type Value = V;

    #[inline]
    fn into_enumerable(self) -> Enumerable<'a, V> {
        Enumerable::Concrete(self)
    }
}

impl<'a, V> IntoEnumerable<'a> for Vec<V> {
    type Value = V;

    #[inline]
    fn into_enumerable(self) -> Enumerable<'a, V> {
        Enumerable::from(self)
    }
}

impl<'a, V, const N: usize> IntoEnumerable<'a> for [V; N] {
    type Value = V;

    #[inline]
    fn into_enumerable(self) -> Enumerable<'a, V> {
        Enumerable::Concrete(Collection::from_values(self))
    }
}

impl<'a, V: 'a> IntoEnumerable<'a> for BoxCursor<'a, V> {
    type Value = V;

    #[inline]
    fn into_enumerable(self) -> Enumerable<'a, V> {
        Enumerable::Stateful(self)
    }
}

/// A lent cursor: progress made through it stays with the owner.
impl<'a, C> IntoEnumerable<'a> for &'a mut C
where
    C: Cursor + ?Sized + 'a,
{
    type Value = C::Value;

    #[inline]
    fn into_enumerable(self) -> Enumerable<'a, C::Value> {
        Enumerable::stateful(self)
    }
}

macro_rules! impl_stateful_into_enumerable {
    ($lifetime:lifetime; $([$($generic:ident),*] $cursor:ty),* $(,)?) => {
        $(
            impl<$lifetime, $($generic),*> IntoEnumerable<$lifetime> for $cursor
            where
                Self: Cursor + $lifetime,
            {
                type Value = <Self as Cursor>::Value;

                #[inline]
                fn into_enumerable(self) -> Enumerable<$lifetime, Self::Value> {
                    Enumerable::stateful(self)
                }
            }
        )*
    };
}

impl_stateful_into_enumerable!('a;
    [V] CollectionCursor<V>,
    [V] EmptyCursor<V>,
    [I] IterCursor<I>,
    [] Range,
    [V, F] Map<'a, V, F>,
    [V, P] Filter<'a, V, P>,
    [V, U, F] FlatMap<'a, V, U, F>,
    [V] Chain<'a, V>,
    [V] Zip<'a, V>,
    [V] Flatten<'a, V>,
    [V] Take<'a, V>,
    [V] Skip<'a, V>,
);
