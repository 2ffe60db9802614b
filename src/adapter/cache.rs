//! Single-element dereference cache.

use std::cell::OnceCell;
use std::fmt;

use crate::cursor::{BidirectionalCursor, Category, Cursor};
use crate::view::View;

/// A view that computes each element at most once per cursor position.
///
/// The first dereference at a position stores the element in the cursor;
/// later dereferences at that position return clones of it. Moving the
/// cursor clears the cache. An element that is a reference is cached as
/// that reference; an element that is a temporary is cached by value. The
/// cursor is at most bidirectional.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let view = all(vec![1, 2])
///     .transform(|value| {
///         calls.set(calls.get() + 1);
///         value * 10
///     })
///     .cache1();
///
/// let cursor = view.begin();
/// assert_eq!(cursor.get(), 10);
/// assert_eq!(cursor.get(), 10);
/// assert_eq!(calls.get(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cache1<V> {
    source: V,
}

impl<V> Cache1<V> {
    /// Creates the view.
    #[inline]
    pub const fn new(source: V) -> Self {
        Self { source }
    }
}

impl<V> View for Cache1<V>
where
    V: View,
    <V::Cursor as Cursor>::Item: Clone,
{
    type Cursor = Cache1Cursor<V::Cursor>;

    #[inline]
    fn begin(&self) -> Self::Cursor {
        Cache1Cursor::new(self.source.begin())
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        Cache1Cursor::new(self.source.end())
    }
}

/// The cursor of a [`Cache1`].
pub struct Cache1Cursor<C: Cursor> {
    inner: C,
    cached: OnceCell<C::Item>,
}

impl<C: Cursor> Cache1Cursor<C> {
    #[inline]
    fn new(inner: C) -> Self {
        Self {
            inner,
            cached: OnceCell::new(),
        }
    }

    /// Returns `true` if the element at the current position has been
    /// computed.
    #[inline]
    pub fn is_cached(&self) -> bool {
        self.cached.get().is_some()
    }
}

impl<C> Clone for Cache1Cursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            cached: self.cached.clone(),
        }
    }
}

impl<C> fmt::Debug for Cache1Cursor<C>
where
    C: Cursor + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cache1Cursor")
            .field("inner", &self.inner)
            .field("is_cached", &self.is_cached())
            .finish()
    }
}

impl<C> Cursor for Cache1Cursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    const CATEGORY: Category = C::CATEGORY.weaker(Category::Bidirectional);

    #[inline]
    fn get(&self) -> C::Item {
        self.cached.get_or_init(|| self.inner.get()).clone()
    }

    #[inline]
    fn inc(&mut self) {
        self.inner.inc();
        self.cached.take();
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.inner.is_equal(&other.inner)
    }

    fn step_within(&mut self, count: usize, end: &Self) -> usize {
        let taken = self.inner.step_within(count, &end.inner);
        if taken > 0 {
            self.cached.take();
        }
        taken
    }

    #[inline]
    fn distance_hint(&self, end: &Self) -> Option<usize> {
        self.inner.distance_hint(&end.inner)
    }
}

impl<C> BidirectionalCursor for Cache1Cursor<C>
where
    C: BidirectionalCursor,
    C::Item: Clone,
{
    #[inline]
    fn dec(&mut self) {
        self.inner.dec();
        self.cached.take();
    }
}
