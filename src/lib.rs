//! Typesafe success/failure and presence/absence wrappers.
//!
//! Two closed sum types with a deliberately exhaustive, symmetric
//! combinator algebra:
//!
//! - [`Result<T, E>`]: `Ok(T)` or `Err(E)`, for fallible operations with a
//!   typed failure channel.
//! - [`Option<T>`]: `Some(T)` or `Nothing`, for values that may be absent.
//!
//! Failures and absences propagate as ordinary values. The one boundary
//! where panics meet the algebra is [`Result::of`] / [`Result::of_catch`],
//! which adapt imperative panicking calls into `Err` values. Extraction
//! methods (`unwrap`, `expect`, ...) called on the wrong variant raise a
//! typed [`UnwrapError`] panic payload so assertion failures stay
//! distinguishable from algebraic ones.
//!
//! ```
//! use safetywrap::{Err, Ok, Result};
//!
//! fn halve(n: i32) -> Result<i32, String> {
//!     Result::ok_if(|n| n % 2 == 0, n)
//!         .map_err(|n| format!("{n} is odd"))
//!         .map(|n| n / 2)
//! }
//!
//! assert_eq!(halve(4), Ok(2));
//! assert_eq!(halve(3), Err(String::from("3 is odd")));
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod errors;
mod iter;
mod option;
mod result;

pub use errors::{CaughtPanic, UnwrapError, UnwrapKind};
pub use iter::{IntoIter, Iter};
pub use option::Option::{self, Nothing, Some};
pub use result::Result::{self, Err, Ok};
