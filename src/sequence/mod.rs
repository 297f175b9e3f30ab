//! Enumerables, the canonical cursor protocol and the combinators built on it.
//!
//! # Overview
//!
//! - [`Enumerable`]: the three admissible input shapes (concrete collection,
//!   stateful cursor, wrapper)
//! - [`Cursor`]: the canonical single-pass protocol every combinator consumes
//!   and produces
//! - [`to_iterator`] / [`to_array`]: normalization and materialization
//!
//! # Lazy combinators
//!
//! [`map`], [`filter`], [`reject`], [`chain`], [`zip`], [`range`] ([`range_inclusive`]),
//! [`flatten`], [`flat_map`], [`take`], [`drop`] and [`slice`] return an
//! [`Enumerable`] immediately. Nothing is pulled from their sources until the
//! result is pulled, and then one element at a time.
//!
//! # Eager combinators
//!
//! [`reduce`], [`apply`], [`all`] and [`any`] drain their source before
//! returning; `all` and `any` stop at the first element that decides them.
//!
//! # Keys
//!
//! | Combinator | Output keys |
//! |---|---|
//! | `map`, `filter`, `reject`, `chain` | preserved from the source |
//! | `zip`, `range`, `range_inclusive`, `flatten`, `flat_map`, `take`, `drop`, `slice` | sequential positions from 0 |
//!
//! # Single pass
//!
//! Combinators take ownership of their sources. A stateful cursor can be
//! lent instead (`Enumerable::stateful(&mut cursor)`); once exhausted it
//! yields nothing to any later consumer.
//!
//! ```rust
//! use lazyfn::{Enumerable, IterCursor, to_array};
//!
//! let mut cursor = IterCursor::new(vec![1, 2]);
//! assert_eq!(to_array(Enumerable::stateful(&mut cursor))?.len(), 2);
//! assert!(to_array(Enumerable::stateful(&mut cursor))?.is_empty());
//! # Ok::<(), lazyfn::Error>(())
//! ```

mod collection;
mod combine;
mod cursor;
mod eager;
mod enumerable;
mod flatten;
mod generate;
mod key;
mod normalize;
mod transform;
mod window;

pub use collection::Collection;
pub use combine::{Chain, Zip, chain, zip};
pub use cursor::{BoxCursor, CollectionCursor, Cursor, CursorState, EmptyCursor, IterCursor};
pub use eager::{all, any, apply, reduce, try_all, try_any, try_apply, try_reduce};
pub use enumerable::{Aggregate, Enumerable, IntoEnumerable};
pub use flatten::{Depth, Flatten, Nested, flatten};
pub use generate::{Range, range, range_inclusive};
pub use key::{Entry, Key};
pub use normalize::{DEFAULT_WRAPPER_DEPTH_LIMIT, Entries, Normalizer, to_array, to_iterator};
pub use transform::{
    Filter, FlatMap, Map, filter, flat_map, map, reject, try_filter, try_flat_map, try_map,
    try_reject,
};
pub use window::{Skip, Take, drop, slice, take};
