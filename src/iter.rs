//! Zero-or-one-element iterators over the wrapper types.
//!
//! `Ok`/`Some` iterate once over the wrapped value; `Err`/`Nothing` iterate
//! zero times.

use std::iter::FusedIterator;

/// Borrowing iterator returned by `Result::iter` and `Option::iter`.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn once(value: &'a T) -> Self {
        Self { inner: Some(value) }
    }

    pub(crate) fn empty() -> Self {
        Self { inner: None }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Consuming iterator returned by `into_iter` on both wrapper types.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn once(value: T) -> Self {
        Self { inner: Some(value) }
    }

    pub(crate) fn empty() -> Self {
        Self { inner: None }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_yields_exactly_one_item() {
        let mut iter = Iter::once(&7);
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&7));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn empty_yields_nothing() {
        let mut iter = Iter::<i32>::empty();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_iter_consumes_the_value() {
        let collected: Vec<String> = IntoIter::once(String::from("a")).collect();
        assert_eq!(collected, vec![String::from("a")]);
        assert_eq!(IntoIter::<String>::empty().count(), 0);
    }
}
