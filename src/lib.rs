//! # lazyfn
//!
//! Lazy sequence combinators over heterogeneous enumerables.
//!
//! ## Overview
//!
//! Every combinator in this library accepts any *enumerable*: a concrete
//! ordered key/value [`Collection`], a stateful [`Cursor`] supplied by the
//! caller, or a wrapper ([`Aggregate`]) that merely exposes another
//! enumerable. Inputs are normalized on demand into one canonical cursor
//! protocol, and the combinators are built on that protocol:
//!
//! - **Normalization**: [`to_iterator`], [`to_array`], [`Normalizer`]
//! - **Lazy combinators**: [`map`], [`filter`], [`reject`], [`chain`], [`zip`],
//!   [`range`], [`range_inclusive`], [`flatten`], [`flat_map`], [`take`], [`drop`], [`slice`]
//! - **Eager combinators**: [`reduce`], [`apply`], [`all`], [`any`]
//! - **Partial application**: [`compose::curry`], [`compose::apply`]
//!
//! ## Feature Flags
//!
//! - `compose`: Partial application helpers (enabled by default)
//! - `derive`: `#[derive(Aggregate)]` for wrapper types (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for keys, entries and collections
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyfn::prelude::*;
//!
//! let evens = filter(range_inclusive(1, 8), |n: &i64| n % 2 == 0);
//! let collection = to_array(evens)?;
//!
//! assert_eq!(collection.values().copied().collect::<Vec<_>>(), vec![2, 4, 6, 8]);
//! assert_eq!(
//!     collection.keys().cloned().collect::<Vec<_>>(),
//!     vec![Key::Index(1), Key::Index(3), Key::Index(5), Key::Index(7)]
//! );
//! # Ok::<(), lazyfn::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence types, every combinator and the error type.
/// The partial application helpers are re-exported except for
/// [`compose::apply`], whose name collides with the eager [`apply`].
///
/// # Usage
///
/// ```rust
/// use lazyfn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sequence::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::{Callable, Concat, Curried, curry};

    #[cfg(feature = "derive")]
    pub use lazyfn_derive::Aggregate;
}

mod error;
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;

pub use error::{BoxError, Error, Result};
pub use sequence::*;

#[cfg(feature = "derive")]
pub use lazyfn_derive::Aggregate;
