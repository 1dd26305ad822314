//! Success/failure wrapper and its combinator algebra.
//!
//! [`Result`] holds either a success value (`Ok`) or a typed failure value
//! (`Err`) and never anything else. Every operation is total over both
//! variants; the only place panics enter the algebra is the [`Result::of`] /
//! [`Result::of_catch`] constructors, which exist to adapt imperative,
//! panicking APIs. Callback panics (in `map`, `and_then`, ...) are
//! deliberately not intercepted.

use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, UnwindSafe};
use std::result::Result as StdResult;

use serde::{Deserialize, Serialize};

use crate::errors::{unwrap_failed, CaughtPanic, UnwrapKind};
use crate::iter::{IntoIter, Iter};
use crate::option::Option::{self, Nothing, Some};

use self::Result::{Err, Ok};

/// A value that is either a success (`Ok`) or a typed failure (`Err`).
///
/// Importing this type shadows the std prelude's `Result`; spell
/// `std::result::Result` where both are needed. Equality, hashing, and
/// serialization are structural, derived the same way as on any other plain
/// data enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Result<T, E> {
    /// Success, holding the operation's value.
    Ok(T),
    /// Failure, holding the error value.
    Err(E),
}

impl<T> Result<T, CaughtPanic> {
    /// Run `f`, wrapping a normal return in `Ok` and any panic in
    /// `Err(CaughtPanic)`.
    ///
    /// This is the broad form of the panic boundary; [`Result::of_catch`]
    /// intercepts only a chosen payload type.
    pub fn of<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            StdResult::Ok(value) => Ok(value),
            StdResult::Err(payload) => Err(CaughtPanic::new(payload)),
        }
    }
}

impl<T, E: Any + Send + 'static> Result<T, E> {
    /// Run `f`, intercepting a panic only when its payload downcasts to `E`.
    ///
    /// Any other payload resumes unwinding unchanged, like an exception
    /// filter that re-raises what it does not handle.
    pub fn of_catch<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            StdResult::Ok(value) => Ok(value),
            StdResult::Err(payload) => match payload.downcast::<E>() {
                StdResult::Ok(err) => Err(*err),
                StdResult::Err(payload) => panic::resume_unwind(payload),
            },
        }
    }
}

impl<T> Result<T, T> {
    /// `Ok(value)` when the predicate holds for it, `Err(value)` otherwise.
    pub fn ok_if<P>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Ok(value)
        } else {
            Err(value)
        }
    }

    /// `Err(value)` when the predicate holds for it, `Ok(value)` otherwise.
    pub fn err_if<P>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Err(value)
        } else {
            Ok(value)
        }
    }
}

impl<T, E> Result<T, E> {
    /// Collect results in order into a result of all the success values.
    ///
    /// The first `Err` is returned as-is and the source iterator is not
    /// advanced past it.
    pub fn collect<I>(results: I) -> Result<Vec<T>, E>
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let results = results.into_iter();
        let mut values = Vec::with_capacity(results.size_hint().0);
        for result in results {
            match result {
                Ok(value) => values.push(value),
                Err(err) => return Err(err),
            }
        }
        Ok(values)
    }

    /// Return `res` if `self` is `Ok`, otherwise the `Err` unchanged.
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Ok(_) => res,
            Err(err) => Err(err),
        }
    }

    /// Return `res` if `self` is `Err`, otherwise the `Ok` unchanged.
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Ok(value) => Ok(value),
            Err(_) => res,
        }
    }

    /// Chain a result-returning function over the success value.
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Ok(value) => f(value),
            Err(err) => Err(err),
        }
    }

    /// Chain a result-returning function over the error value.
    pub fn or_else<F, O>(self, f: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => f(err),
        }
    }

    /// Map the success value, leaving an `Err` unchanged. Panics raised by
    /// `f` are not intercepted; compose `and_then` with [`Result::of`] for
    /// that.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(value) => Ok(f(value)),
            Err(err) => Err(err),
        }
    }

    /// Map the error value, leaving an `Ok` unchanged.
    pub fn map_err<F, O>(self, f: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(f(err)),
        }
    }

    /// Bridge to [`Option`], keeping the success side.
    pub fn ok(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(_) => Nothing,
        }
    }

    /// Bridge to [`Option`], keeping the error side.
    pub fn err(self) -> Option<E> {
        match self {
            Ok(_) => Nothing,
            Err(err) => Some(err),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrow both sides in place.
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err),
        }
    }

    /// Iterate over the success value: length 1 for `Ok`, 0 for `Err`.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Ok(value) => Iter::once(value),
            Err(_) => Iter::empty(),
        }
    }

    /// Extract the success value.
    ///
    /// # Panics
    ///
    /// On `Err`, panics with an [`UnwrapError`](crate::UnwrapError) payload
    /// of kind [`UnwrapKind::UnwrapOnErr`] embedding the error's `Debug`
    /// rendering.
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Ok(value) => value,
            Err(err) => unwrap_failed(
                UnwrapKind::UnwrapOnErr,
                format!("called `Result::unwrap()` on an `Err` value: {err:?}"),
            ),
        }
    }

    /// Extract the error value.
    ///
    /// # Panics
    ///
    /// On `Ok`, panics with a payload of kind [`UnwrapKind::UnwrapOnOk`].
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Ok(value) => unwrap_failed(
                UnwrapKind::UnwrapOnOk,
                format!("called `Result::unwrap_err()` on an `Ok` value: {value:?}"),
            ),
            Err(err) => err,
        }
    }

    /// The success value, or `default` for an `Err`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(_) => default,
        }
    }

    /// The success value, or one computed from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Ok(value) => value,
            Err(err) => f(err),
        }
    }

    /// Extract the success value with caller-supplied context.
    ///
    /// # Panics
    ///
    /// On `Err`, panics with kind [`UnwrapKind::UnwrapOnErr`] and the
    /// message `"{msg}: {err:?}"`.
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            Ok(value) => value,
            Err(err) => unwrap_failed(UnwrapKind::UnwrapOnErr, format!("{msg}: {err:?}")),
        }
    }

    /// Extract the error value with caller-supplied context.
    ///
    /// # Panics
    ///
    /// On `Ok`, panics with kind [`UnwrapKind::UnwrapOnOk`] and the message
    /// `"{msg}: {value:?}"`.
    pub fn expect_err(self, msg: &str) -> E
    where
        T: Debug,
    {
        match self {
            Ok(value) => unwrap_failed(UnwrapKind::UnwrapOnOk, format!("{msg}: {value:?}")),
            Err(err) => err,
        }
    }

    /// Convert from the std result.
    pub fn from_std(res: StdResult<T, E>) -> Self {
        res.into()
    }

    /// Convert into the std result, e.g. to use the `?` operator.
    pub fn into_std(self) -> StdResult<T, E> {
        self.into()
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(res: StdResult<T, E>) -> Self {
        match res {
            StdResult::Ok(value) => Ok(value),
            StdResult::Err(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(value) => StdResult::Ok(value),
            Err(err) => StdResult::Err(err),
        }
    }
}

impl<T, E> FromIterator<Result<T, E>> for Result<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        Result::collect(iter)
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        match self {
            Ok(value) => IntoIter::once(value),
            Err(_) => IntoIter::empty(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
