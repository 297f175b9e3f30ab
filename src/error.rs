//! Error types for sequence normalization and combinators.
//!
//! All failures surface synchronously to the caller of the operation that
//! triggered them. Nothing is retried and nothing is logged here.

use std::error::Error as StdError;

/// A boxed error raised by a caller-supplied function.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Represents errors that can occur while normalizing or combining sequences.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{Error, range};
///
/// let error = range(1, 5, 0).unwrap_err();
/// assert!(matches!(error, Error::InvalidStep { start: 1, end: 5 }));
/// assert_eq!(
///     format!("{error}"),
///     "invalid step: step must be non-zero when start (1) differs from end (5)"
/// );
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The value given to the normalizer could not be resolved into a cursor.
    ///
    /// Raised for wrapper chains that exceed the normalizer's depth limit,
    /// which covers chains that never terminate in a supported kind.
    #[error("unsupported enumerable kind: {reason}")]
    UnsupportedEnumerableKind {
        /// Why normalization gave up.
        reason: String,
    },

    /// `range` was given a zero step while `start` and `end` differ.
    #[error("invalid step: step must be non-zero when start ({start}) differs from end ({end})")]
    InvalidStep {
        /// The requested start of the range.
        start: i64,
        /// The requested end of the range.
        end: i64,
    },

    /// A caller-supplied function failed. The caller's error is carried as is.
    #[error(transparent)]
    CallbackFailure(BoxError),
}

impl Error {
    /// Wraps an error raised by a caller-supplied function.
    pub fn callback<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::CallbackFailure(error.into())
    }

    /// Returns `true` if this error came from a caller-supplied function.
    #[inline]
    pub const fn is_callback_failure(&self) -> bool {
        matches!(self, Self::CallbackFailure(_))
    }

    /// Recovers the caller's concrete error type from a [`Error::CallbackFailure`].
    ///
    /// Returns `Err(self)` unchanged if this is another variant or the boxed
    /// error is of a different type.
    ///
    /// # Errors
    ///
    /// Returns the original error when the downcast does not apply.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::{Error, try_map, to_array};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Negative(i32);
    ///
    /// impl std::fmt::Display for Negative {
    ///     fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    ///         write!(formatter, "negative value {}", self.0)
    ///     }
    /// }
    ///
    /// impl std::error::Error for Negative {}
    ///
    /// let checked = try_map(vec![1, -2, 3], |n: i32| {
    ///     if n < 0 { Err(Negative(n)) } else { Ok(n) }
    /// });
    /// let error = to_array(checked).unwrap_err();
    ///
    /// assert_eq!(error.into_callback_error::<Negative>().unwrap(), Negative(-2));
    /// ```
    pub fn into_callback_error<E>(self) -> Result<E, Self>
    where
        E: StdError + 'static,
    {
        match self {
            Self::CallbackFailure(boxed) => match boxed.downcast::<E>() {
                Ok(error) => Ok(*error),
                Err(boxed) => Err(Self::CallbackFailure(boxed)),
            },
            other => Err(other),
        }
    }

    pub(crate) fn wrapper_depth_exceeded(limit: usize) -> Self {
        Self::UnsupportedEnumerableKind {
            reason: format!("wrapper chain did not resolve within {limit} levels"),
        }
    }
}

/// A specialized `Result` type for sequence operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
