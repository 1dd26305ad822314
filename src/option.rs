//! Presence/absence wrapper and its combinator algebra.
//!
//! [`Option`] mirrors the `Result` algebra for values that may simply be
//! absent. `Nothing` carries no payload, so equality between absences is
//! structural and absence costs no allocation. Bridging back to `Result`
//! (`ok_or`, `ok_or_else`) supplies the missing error value.

use std::option::Option as StdOption;

use serde::{Deserialize, Serialize};

use crate::errors::{unwrap_failed, UnwrapKind};
use crate::iter::{IntoIter, Iter};
use crate::result::Result::{self, Err, Ok};

use self::Option::{Nothing, Some};

/// A value that is either present (`Some`) or absent (`Nothing`).
///
/// Importing this type shadows the std prelude's `Option`; spell
/// `std::option::Option` where both are needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Option<T> {
    /// A present value.
    Some(T),
    /// Absence. All `Nothing`s are equal to each other.
    Nothing,
}

impl<T> Option<T> {
    /// Bridge from the host optional: `None` becomes `Nothing`.
    pub fn of(value: StdOption<T>) -> Self {
        match value {
            StdOption::Some(value) => Some(value),
            StdOption::None => Nothing,
        }
    }

    /// `Some(value)` when the predicate holds for it, `Nothing` otherwise.
    pub fn some_if<P>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Some(value)
        } else {
            Nothing
        }
    }

    /// `Nothing` when the predicate holds for the value, `Some(value)`
    /// otherwise.
    pub fn nothing_if<P>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Nothing
        } else {
            Some(value)
        }
    }

    /// Collect options in order into an option of all the present values.
    ///
    /// The first `Nothing` short-circuits; the source iterator is not
    /// advanced past it.
    pub fn collect<I>(options: I) -> Option<Vec<T>>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let options = options.into_iter();
        let mut values = Vec::with_capacity(options.size_hint().0);
        for option in options {
            match option {
                Some(value) => values.push(value),
                Nothing => return Nothing,
            }
        }
        Some(values)
    }

    /// Return `optb` if `self` is `Some`, otherwise `Nothing`.
    pub fn and<U>(self, optb: Option<U>) -> Option<U> {
        match self {
            Some(_) => optb,
            Nothing => Nothing,
        }
    }

    /// Return `self` if it is `Some`, otherwise `optb`.
    pub fn or(self, optb: Option<T>) -> Option<T> {
        match self {
            Some(value) => Some(value),
            Nothing => optb,
        }
    }

    /// `Some` iff exactly one of `self`, `optb` is `Some`.
    pub fn xor(self, optb: Option<T>) -> Option<T> {
        match (self, optb) {
            (Some(value), Nothing) => Some(value),
            (Nothing, Some(value)) => Some(value),
            _ => Nothing,
        }
    }

    /// Chain an option-returning function over the present value.
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Some(value) => f(value),
            Nothing => Nothing,
        }
    }

    /// Return `self` if it is `Some`, otherwise compute an alternative.
    pub fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Some(value) => Some(value),
            Nothing => f(),
        }
    }

    /// Keep a present value only if the predicate holds for it.
    pub fn filter<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Some(value) => {
                if predicate(&value) {
                    Some(value)
                } else {
                    Nothing
                }
            }
            Nothing => Nothing,
        }
    }

    /// Map the present value, leaving `Nothing` unchanged. Panics raised by
    /// `f` are not intercepted.
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(value) => Some(f(value)),
            Nothing => Nothing,
        }
    }

    /// Map the present value, or return `default`.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(value) => f(value),
            Nothing => default,
        }
    }

    /// Map the present value, or compute a default.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Some(value) => f(value),
            Nothing => default(),
        }
    }

    /// Bridge to [`Result`], supplying the error for an absence.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Some(value) => Ok(value),
            Nothing => Err(err),
        }
    }

    /// Bridge to [`Result`], computing the error only on absence.
    pub fn ok_or_else<E, F>(self, err_fn: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Ok(value),
            Nothing => Err(err_fn()),
        }
    }

    pub fn is_some(&self) -> bool {
        matches!(self, Some(_))
    }

    pub fn is_nothing(&self) -> bool {
        !self.is_some()
    }

    /// Borrow the present value in place.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Some(value) => Some(value),
            Nothing => Nothing,
        }
    }

    /// Iterate over the present value: length 1 for `Some`, 0 for `Nothing`.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Some(value) => Iter::once(value),
            Nothing => Iter::empty(),
        }
    }

    /// Extract the present value.
    ///
    /// # Panics
    ///
    /// On `Nothing`, panics with an [`UnwrapError`](crate::UnwrapError)
    /// payload of kind [`UnwrapKind::UnwrapOnNothing`].
    pub fn unwrap(self) -> T {
        match self {
            Some(value) => value,
            Nothing => unwrap_failed(
                UnwrapKind::UnwrapOnNothing,
                String::from("called `Option::unwrap()` on a `Nothing` value"),
            ),
        }
    }

    /// The present value, or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Some(value) => value,
            Nothing => default,
        }
    }

    /// The present value, or one computed on demand.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Some(value) => value,
            Nothing => f(),
        }
    }

    /// Extract the present value with caller-supplied context.
    ///
    /// # Panics
    ///
    /// On `Nothing`, panics with kind [`UnwrapKind::UnwrapOnNothing`] and
    /// exactly `msg` as the message (there is no absent value to render).
    pub fn expect(self, msg: &str) -> T {
        match self {
            Some(value) => value,
            Nothing => unwrap_failed(UnwrapKind::UnwrapOnNothing, String::from(msg)),
        }
    }

    /// Convert from the host optional.
    pub fn from_std(value: StdOption<T>) -> Self {
        Self::of(value)
    }

    /// Convert into the host optional.
    pub fn into_std(self) -> StdOption<T> {
        self.into()
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    fn from(value: StdOption<T>) -> Self {
        Option::of(value)
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => StdOption::Some(value),
            Nothing => StdOption::None,
        }
    }
}

impl<T> FromIterator<Option<T>> for Option<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Option::collect(iter)
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        match self {
            Some(value) => IntoIter::once(value),
            Nothing => IntoIter::empty(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnwrapError;

    #[test]
    fn of_maps_the_host_absence_sentinel() {
        assert_eq!(Option::of(StdOption::Some("a")), Some("a"));
        assert_eq!(Option::of(StdOption::<&str>::None), Nothing);
    }

    #[test]
    fn some_if_and_nothing_if_mirror_each_other() {
        let even = |n: &i32| n % 2 == 0;
        assert_eq!(Option::some_if(even, 4), Some(4));
        assert_eq!(Option::some_if(even, 5), Nothing);
        assert_eq!(Option::nothing_if(even, 4), Nothing);
        assert_eq!(Option::nothing_if(even, 5), Some(5));
    }

    #[test]
    fn collect_gathers_all_present_values_in_order() {
        assert_eq!(
            Option::collect(vec![Some(1), Some(2), Some(3)]),
            Some(vec![1, 2, 3])
        );
        assert_eq!(Option::collect(vec![Some(1), Nothing, Some(3)]), Nothing);
        assert_eq!(Option::collect(Vec::<Option<i32>>::new()), Some(vec![]));
    }

    #[test]
    fn and_requires_both_present() {
        assert_eq!(Some(2).and(Nothing::<i32>), Nothing);
        assert_eq!(Nothing::<i32>.and(Some(2)), Nothing);
        assert_eq!(Some(1).and(Some(2)), Some(2));
        assert_eq!(Nothing::<i32>.and(Nothing::<i32>), Nothing);
    }

    #[test]
    fn or_takes_the_first_present() {
        assert_eq!(Some(2).or(Nothing), Some(2));
        assert_eq!(Nothing.or(Some(2)), Some(2));
        assert_eq!(Some(1).or(Some(2)), Some(1));
        assert_eq!(Nothing::<i32>.or(Nothing), Nothing);
    }

    #[test]
    fn xor_takes_exactly_one_present() {
        assert_eq!(Some(1).xor(Nothing), Some(1));
        assert_eq!(Nothing.xor(Some(2)), Some(2));
        assert_eq!(Some(1).xor(Some(2)), Nothing);
        assert_eq!(Nothing::<i32>.xor(Nothing), Nothing);
    }

    #[test]
    fn and_then_chains_option_returning_functions() {
        let half = |n: i32| {
            if n % 2 == 0 {
                Some(n / 2)
            } else {
                Nothing
            }
        };
        assert_eq!(Some(8).and_then(half).and_then(half), Some(2));
        assert_eq!(Some(6).and_then(half).and_then(half), Nothing);
        assert_eq!(Nothing.and_then(half), Nothing);
    }

    #[test]
    fn or_else_computes_an_alternative_only_on_absence() {
        assert_eq!(Some(1).or_else(|| Some(2)), Some(1));
        assert_eq!(Nothing.or_else(|| Some(2)), Some(2));
        assert_eq!(Nothing::<i32>.or_else(|| Nothing), Nothing);
    }

    #[test]
    fn filter_drops_values_failing_the_predicate() {
        let even = |n: &i32| n % 2 == 0;
        assert_eq!(Some(4).filter(even), Some(4));
        assert_eq!(Some(5).filter(even), Nothing);
        assert_eq!(Nothing.filter(even), Nothing);
    }

    #[test]
    fn map_family_transforms_or_defaults() {
        assert_eq!(Some(2).map(|x| x * x), Some(4));
        assert_eq!(Nothing::<i32>.map(|x| x * x), Nothing);
        assert_eq!(Some(2).map_or(0, |x| x + 1), 3);
        assert_eq!(Nothing::<i32>.map_or(0, |x| x + 1), 0);
        assert_eq!(Some(2).map_or_else(|| 0, |x| x + 1), 3);
        assert_eq!(Nothing::<i32>.map_or_else(|| 0, |x| x + 1), 0);
    }

    #[test]
    fn ok_or_bridges_to_result() {
        assert_eq!(Some(1).ok_or("gone"), Ok(1));
        assert_eq!(Nothing::<i32>.ok_or("gone"), Err("gone"));
        assert_eq!(Some(1).ok_or_else(|| "gone"), Ok(1));
        assert_eq!(Nothing::<i32>.ok_or_else(|| "gone"), Err("gone"));
    }

    #[test]
    fn exactly_one_variant_predicate_is_true() {
        assert!(Some(1).is_some() && !Some(1).is_nothing());
        assert!(Nothing::<i32>.is_nothing() && !Nothing::<i32>.is_some());
    }

    #[test]
    fn iteration_yields_the_present_value_only() {
        let some: Option<i32> = Some(5);
        let nothing: Option<i32> = Nothing;
        assert_eq!(some.iter().collect::<Vec<_>>(), vec![&5]);
        assert_eq!(nothing.iter().count(), 0);
        assert_eq!(some.into_iter().collect::<Vec<_>>(), vec![5]);
        assert_eq!(nothing.into_iter().count(), 0);
    }

    #[test]
    fn unwrap_family_extracts_or_substitutes() {
        assert_eq!(Some(5).unwrap(), 5);
        assert_eq!(Some(5).unwrap_or(6), 5);
        assert_eq!(Nothing.unwrap_or(6), 6);
        assert_eq!(Some(5).unwrap_or_else(|| 6), 5);
        assert_eq!(Nothing.unwrap_or_else(|| 6), 6);
        assert_eq!(Some(5).expect("gone"), 5);
    }

    #[test]
    fn unwrap_on_nothing_panics_with_a_typed_payload() {
        let res = Result::<i32, UnwrapError>::of_catch(|| Nothing::<i32>.unwrap());
        assert_eq!(res.unwrap_err().kind(), UnwrapKind::UnwrapOnNothing);
    }

    #[test]
    fn expect_on_nothing_panics_with_exactly_the_message() {
        let res = Result::<i32, UnwrapError>::of_catch(|| Nothing::<i32>.expect("gone"));
        assert_eq!(res.unwrap_err().message(), "gone");
    }

    #[test]
    fn equality_is_structural_and_all_nothings_agree() {
        assert_eq!(Some(1), Some(1));
        assert_ne!(Some(1), Some(2));
        assert_ne!(Some(1), Nothing);
        assert_eq!(Nothing::<i32>, Nothing);
    }

    #[test]
    fn std_conversions_round_trip() {
        assert_eq!(Option::from_std(StdOption::Some(3)), Some(3));
        assert_eq!(Some(3).into_std(), StdOption::Some(3));
        assert_eq!(Nothing::<i32>.into_std(), StdOption::None);
        let ours: Option<i32> = StdOption::None.into();
        assert_eq!(ours, Nothing);
    }
}
