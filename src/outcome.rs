//! A hand-built success-or-error container with chaining combinators.
//!
//! `Outcome<T, E>` deliberately rebuilds what `std::result::Result` gives you
//! for free: a two-variant sum type, loud accessors, and the small combinator
//! set that turns nested failure checks into a linear chain. Building it by
//! hand makes the machinery behind `?` and `and_then` visible.

use std::fmt::Debug;

/// Holds exactly one of a success value or an error value.
///
/// The two construction paths are distinct variants, so there is no ambiguity
/// even when `T` and `E` are the same type.
#[must_use = "an Outcome may hold a failure that should be handled"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// True if this holds a success value.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// True if this holds an error value.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`. Reading the wrong side is a caller bug;
    /// failing loudly beats handing back a garbage value.
    pub fn value(self) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("called `Outcome::value()` on a `Failure`: {:?}", error)
            }
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    pub fn error(self) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Success(value) => {
                panic!("called `Outcome::error()` on a `Success`: {:?}", value)
            }
            Outcome::Failure(error) => error,
        }
    }

    /// Returns the success payload, or `default` if this is a `Failure`.
    /// Never panics.
    pub fn value_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Chains a dependent fallible operation.
    ///
    /// On success, `op` runs on the payload and its result is returned
    /// directly (flattened, not nested). On failure, `op` is never invoked
    /// and the original error passes through unchanged.
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => op(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a fallback fallible operation.
    ///
    /// The mirror of [`and_then`](Self::and_then): `op` runs only on failure,
    /// receiving the error; a success passes through untouched. This is the
    /// combinator that expresses "try the primary source, then the fallback".
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => op(error),
        }
    }

    /// Applies a plain function to the success payload, re-wrapping the
    /// return value as a `Success`. A failure passes through unchanged.
    /// The state (success/failure) never changes, only the payload.
    pub fn map<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(op(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a plain function to the error payload. The success side
    /// passes through unchanged.
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(op(error)),
        }
    }

    /// Converts into the standard `Result`, for `?` and the rest of the
    /// ecosystem at application boundaries.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}
