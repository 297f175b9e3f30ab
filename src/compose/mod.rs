//! Partial application helpers.
//!
//! This module is independent of the sequence combinators: it binds and
//! spreads function arguments and consumes no enumerable.
//!
//! - [`curry`]: bind leading arguments, call later with the rest
//! - [`apply`]: call immediately with an argument tuple
//!
//! # Examples
//!
//! ```
//! use lazyfn::compose::{apply, curry};
//!
//! fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
//!
//! let percent = curry(clamp, (0, 100));
//! assert_eq!(percent.call((150,)), 100);
//! assert_eq!(apply(clamp, (0, 100, -5)), 0);
//! ```
//!
//! # Laws
//!
//! - **Spreading**: `curry(f, bound).call(rest) == apply(f, bound.concat(rest))`
//! - **Rebinding**: `curry(f, a).bind(b).call(c) == curry(f, a.concat(b)).call(c)`

mod callable;
mod curry;

pub use callable::{Callable, apply};
pub use curry::{Concat, Curried, curry};
