//! Element-wise projection.

use crate::cursor::{BidirectionalCursor, Category, Cursor, OrderedCursor, RandomAccessCursor};
use crate::view::{View, ViewItem};

/// A view applying a function to every element of its source on
/// dereference.
///
/// Only dereference changes, so the cursor keeps every capability of the
/// source cursor.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let squares = all(vec![1, 2, 3]).transform(|value| value * value);
/// assert_eq!(squares.to::<Vec<_>>(), vec![1, 4, 9]);
/// assert_eq!(squares.len(), 3);
/// assert_eq!(squares.back(), Ok(9));
/// ```
#[derive(Debug, Clone)]
pub struct Transform<V, F> {
    source: V,
    function: F,
}

impl<V, F> Transform<V, F> {
    /// Creates the view.
    #[inline]
    pub const fn new(source: V, function: F) -> Self {
        Self { source, function }
    }
}

impl<V, F, U> View for Transform<V, F>
where
    V: View,
    F: Fn(ViewItem<V>) -> U + Clone,
{
    type Cursor = TransformCursor<V::Cursor, F>;

    fn begin(&self) -> Self::Cursor {
        TransformCursor {
            inner: self.source.begin(),
            function: self.function.clone(),
        }
    }

    fn end(&self) -> Self::Cursor {
        TransformCursor {
            inner: self.source.end(),
            function: self.function.clone(),
        }
    }
}

/// The cursor of a [`Transform`].
#[derive(Debug, Clone)]
pub struct TransformCursor<C, F> {
    inner: C,
    function: F,
}

impl<C, F, U> Cursor for TransformCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U + Clone,
{
    type Item = U;

    const CATEGORY: Category = C::CATEGORY;

    #[inline]
    fn get(&self) -> U {
        (self.function)(self.inner.get())
    }

    #[inline]
    fn inc(&mut self) {
        self.inner.inc();
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.inner.is_equal(&other.inner)
    }

    #[inline]
    fn step_within(&mut self, count: usize, end: &Self) -> usize {
        self.inner.step_within(count, &end.inner)
    }

    #[inline]
    fn distance_hint(&self, end: &Self) -> Option<usize> {
        self.inner.distance_hint(&end.inner)
    }
}

impl<C, F, U> BidirectionalCursor for TransformCursor<C, F>
where
    C: BidirectionalCursor,
    F: Fn(C::Item) -> U + Clone,
{
    #[inline]
    fn dec(&mut self) {
        self.inner.dec();
    }
}

impl<C, F, U> OrderedCursor for TransformCursor<C, F>
where
    C: OrderedCursor,
    F: Fn(C::Item) -> U + Clone,
{
    #[inline]
    fn is_less(&self, other: &Self) -> bool {
        self.inner.is_less(&other.inner)
    }
}

impl<C, F, U> RandomAccessCursor for TransformCursor<C, F>
where
    C: RandomAccessCursor,
    F: Fn(C::Item) -> U + Clone,
{
    #[inline]
    fn advance(&mut self, offset: isize) {
        self.inner.advance(offset);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.inner.distance_to(&other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::all;
    use std::cell::Cell;

    #[test]
    fn test_transform_values() {
        let data = vec![1, 2, 3];
        let doubled: Vec<i32> = all(&data).transform(|value| value * 2).to();
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[test]
    fn test_transform_keeps_category() {
        let view = all(vec![1, 2, 3]).transform(|value| value + 1);
        assert_eq!(view.positions().0.category(), Category::RandomAccess);
        assert_eq!(view.index(2), 4);
    }

    #[test]
    fn test_transform_is_lazy() {
        let calls = Cell::new(0);
        let counter = &calls;
        let view = all(vec![1, 2, 3]).transform(move |value| {
            counter.set(counter.get() + 1);
            value
        });
        assert_eq!(calls.get(), 0);
        let _ = view.front();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_transform_returning_references() {
        let pairs = vec![(1, String::from("one")), (2, String::from("two"))];
        let names: Vec<&String> = all(&pairs).transform(|pair| &pair.1).to();
        assert!(std::ptr::eq(names[1], &pairs[1].1));
    }

    #[test]
    fn test_transform_reversed() {
        let view = all(vec![1, 2, 3]).transform(|value| value * 10);
        assert_eq!(view.iter().rev().collect::<Vec<_>>(), vec![30, 20, 10]);
    }
}
