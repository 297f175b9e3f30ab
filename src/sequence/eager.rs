//! Eager combinators: `reduce`, `apply`, `all` and `any`.
//!
//! These drain their source before returning. `all` and `any` stop pulling
//! as soon as the answer is known.

use std::convert::Infallible;

use super::cursor::Cursor;
use super::enumerable::IntoEnumerable;
use super::normalize::to_iterator;
use crate::error::{BoxError, Error, Result};

/// Left fold: `accumulator = function(value, accumulator)` for every element
/// in order, starting from `initial`.
///
/// The value comes before the accumulator. An empty source returns `initial`
/// unchanged.
///
/// # Errors
///
/// Returns any error raised while normalizing or pulling the source.
///
/// # Examples
///
/// ```rust
/// use lazyfn::reduce;
///
/// assert_eq!(reduce(vec![2, 3, 4], 1, |n, accumulator| n + accumulator)?, 10);
/// assert_eq!(reduce(Vec::<i32>::new(), 1, |n, accumulator| n + accumulator)?, 1);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn reduce<'a, S, A, F>(source: S, initial: A, mut function: F) -> Result<A>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    F: FnMut(S::Value, A) -> A,
{
    try_reduce(source, initial, |value, accumulator| {
        Ok::<A, Infallible>(function(value, accumulator))
    })
}

/// Like [`reduce`], for a function that may fail.
///
/// # Errors
///
/// Returns [`Error::CallbackFailure`] with the function's error, or any
/// error raised while pulling the source.
pub fn try_reduce<'a, S, A, E, F>(source: S, initial: A, mut function: F) -> Result<A>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    E: Into<BoxError>,
    F: FnMut(S::Value, A) -> Result<A, E>,
{
    let mut cursor = to_iterator(source)?;
    let mut accumulator = initial;
    while let Some(entry) = cursor.advance()? {
        accumulator = function(entry.value, accumulator).map_err(Error::callback)?;
    }
    Ok(accumulator)
}

/// Invokes `callback` once per element, in order, for its side effects.
///
/// # Errors
///
/// Returns any error raised while normalizing or pulling the source.
///
/// # Examples
///
/// ```rust
/// use lazyfn::apply;
///
/// let mut seen = Vec::new();
/// apply(vec![3, 1], |n| seen.push(n))?;
/// assert_eq!(seen, vec![3, 1]);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn apply<'a, S, F>(source: S, mut callback: F) -> Result<()>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    F: FnMut(S::Value),
{
    try_apply(source, |value| {
        callback(value);
        Ok::<(), Infallible>(())
    })
}

/// Like [`apply`], for a callback that may fail. Stops at the first failure.
///
/// # Errors
///
/// Returns [`Error::CallbackFailure`] with the callback's error, or any
/// error raised while pulling the source.
pub fn try_apply<'a, S, E, F>(source: S, mut callback: F) -> Result<()>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    E: Into<BoxError>,
    F: FnMut(S::Value) -> Result<(), E>,
{
    let mut cursor = to_iterator(source)?;
    while let Some(entry) = cursor.advance()? {
        callback(entry.value).map_err(Error::callback)?;
    }
    Ok(())
}

/// Returns `true` iff `predicate` holds for every element.
///
/// Stops pulling at the first element for which it does not hold.
///
/// # Errors
///
/// Returns any error raised while normalizing or pulling the source.
///
/// # Examples
///
/// ```rust
/// use lazyfn::all;
///
/// assert!(all(vec![1, 2, 3], |n: &i32| *n > 0)?);
/// assert!(!all(vec![1, -2, 3], |n: &i32| *n > 0)?);
/// assert!(all(Vec::<i32>::new(), |n: &i32| *n > 0)?);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn all<'a, S, P>(source: S, mut predicate: P) -> Result<bool>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    P: FnMut(&S::Value) -> bool,
{
    try_all(source, |value: &S::Value| Ok::<bool, Infallible>(predicate(value)))
}

/// Like [`all`], for a predicate that may fail.
///
/// # Errors
///
/// Returns [`Error::CallbackFailure`] with the predicate's error, or any
/// error raised while pulling the source.
pub fn try_all<'a, S, E, P>(source: S, predicate: P) -> Result<bool>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    E: Into<BoxError>,
    P: FnMut(&S::Value) -> Result<bool, E>,
{
    short_circuit(source, predicate, false).map(|found| !found)
}

/// Returns `true` iff `predicate` holds for at least one element.
///
/// Stops pulling at the first element for which it holds.
///
/// # Errors
///
/// Returns any error raised while normalizing or pulling the source.
///
/// # Examples
///
/// ```rust
/// use lazyfn::any;
///
/// assert!(any(vec![-1, 2, -3], |n: &i32| *n > 0)?);
/// assert!(!any(vec![-1, -2, -3], |n: &i32| *n > 0)?);
/// # Ok::<(), lazyfn::Error>(())
/// ```
pub fn any<'a, S, P>(source: S, mut predicate: P) -> Result<bool>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    P: FnMut(&S::Value) -> bool,
{
    try_any(source, |value: &S::Value| Ok::<bool, Infallible>(predicate(value)))
}

/// Like [`any`], for a predicate that may fail.
///
/// # Errors
///
/// Returns [`Error::CallbackFailure`] with the predicate's error, or any
/// error raised while pulling the source.
pub fn try_any<'a, S, E, P>(source: S, predicate: P) -> Result<bool>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    E: Into<BoxError>,
    P: FnMut(&S::Value) -> Result<bool, E>,
{
    short_circuit(source, predicate, true)
}

/// Pulls until `predicate` returns `target`; reports whether it did.
fn short_circuit<'a, S, E, P>(source: S, mut predicate: P, target: bool) -> Result<bool>
where
    S: IntoEnumerable<'a>,
    S::Value: 'a,
    E: Into<BoxError>,
    P: FnMut(&S::Value) -> Result<bool, E>,
{
    let mut cursor = to_iterator(source)?;
    while let Some(entry) = cursor.advance()? {
        if predicate(&entry.value).map_err(Error::callback)? == target {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::cursor::IterCursor;
    use crate::sequence::enumerable::Enumerable;
    use rstest::rstest;

    #[derive(Debug)]
    struct Overflow;

    impl std::fmt::Display for Overflow {
        fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(formatter, "overflow")
        }
    }

    impl std::error::Error for Overflow {}

    #[rstest]
    fn test_reduce_passes_value_before_accumulator() {
        let joined = reduce(vec!["a", "b", "c"], String::new(), |value, mut accumulator| {
            accumulator.push_str(value);
            accumulator
        })
        .unwrap();
        assert_eq!(joined, "abc");
    }

    #[rstest]
    fn test_try_reduce_stops_at_failure() {
        let mut visited = 0;
        let result = try_reduce(vec![100_u8, 100, 100, 1], 0_u8, |value, accumulator| {
            visited += 1;
            accumulator.checked_add(value).ok_or(Overflow)
        });

        assert!(result.unwrap_err().is_callback_failure());
        assert_eq!(visited, 3);
    }

    #[rstest]
    fn test_any_leaves_rest_of_source_unconsumed() {
        let mut cursor = IterCursor::new(vec![1, 2, 3, 4]);

        assert!(any(Enumerable::stateful(&mut cursor), |n: &i32| *n == 2).unwrap());
        assert_eq!(cursor.advance().unwrap().map(|entry| entry.value), Some(3));
    }

    #[rstest]
    fn test_try_apply_propagates_callback_error() {
        let result = try_apply(vec![1, 2], |_| Err(Overflow));
        assert!(result.unwrap_err().into_callback_error::<Overflow>().is_ok());
    }
}
