//! Error types for the wrapper algebra.
//!
//! In-band failures are ordinary `Err`/`Nothing` values and never touch this
//! module. What lives here is the out-of-band channel: the typed panic
//! payload raised when an extraction method is called on the wrong variant,
//! and the wrapper around panics intercepted by `Result::of`.

use std::any::Any;
use std::fmt;
use std::result::Result as StdResult;

use thiserror::Error;

use crate::result::Result::{self, Err, Ok};

/// Which extraction assertion failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnwrapKind {
    /// `unwrap`/`expect` was called on an `Err`.
    UnwrapOnErr,
    /// `unwrap_err`/`expect_err` was called on an `Ok`.
    UnwrapOnOk,
    /// `unwrap`/`expect` was called on `Nothing`.
    UnwrapOnNothing,
}

/// Panic payload raised when a caller asserts a variant that does not hold.
///
/// This signals a programmer error, not an algebraic failure, so it is kept
/// distinguishable from both: tests and panic hooks can downcast the payload
/// and inspect [`kind`](UnwrapError::kind), and `Result::of_catch::<UnwrapError>`
/// can pull the failure back into the algebra.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{message}")]
pub struct UnwrapError {
    kind: UnwrapKind,
    message: String,
}

impl UnwrapError {
    pub(crate) fn new(kind: UnwrapKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Which assertion failed.
    pub fn kind(&self) -> UnwrapKind {
        self.kind
    }

    /// The full failure message, including any caller-supplied context and
    /// the rendering of the unexpected wrapped value.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Raise the fatal-failure panic with a typed payload.
pub(crate) fn unwrap_failed(kind: UnwrapKind, message: String) -> ! {
    std::panic::panic_any(UnwrapError::new(kind, message))
}

/// A panic intercepted by `Result::of`.
///
/// Wraps the raw `Box<dyn Any + Send>` payload. String payloads (the common
/// case, produced by `panic!("...")`) are exposed through
/// [`message`](CaughtPanic::message); anything else stays reachable through
/// [`payload`](CaughtPanic::payload) and [`downcast`](CaughtPanic::downcast).
pub struct CaughtPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CaughtPanic {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// The panic message, when the payload was a `&str` or `String`.
    pub fn message(&self) -> Option<&str> {
        if let Some(msg) = self.payload.downcast_ref::<&'static str>() {
            return Some(msg);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// Borrow the raw payload.
    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Take the raw payload back out.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Downcast the payload to a concrete type, handing `self` back on a
    /// mismatch so the payload is not lost.
    pub fn downcast<E: Any + Send>(self) -> Result<E, CaughtPanic> {
        match self.payload.downcast::<E>() {
            StdResult::Ok(payload) => Ok(*payload),
            StdResult::Err(payload) => Err(CaughtPanic { payload }),
        }
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaughtPanic")
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "panic: {msg}"),
            None => write!(f, "panic with a non-string payload"),
        }
    }
}

impl std::error::Error for CaughtPanic {}
