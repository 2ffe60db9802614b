//! Back-to-front traversal.

use crate::cursor::{BidirectionalCursor, Category, Cursor, OrderedCursor, RandomAccessCursor};
use crate::view::View;

/// A view visiting its source back to front.
///
/// The cursor stores the source position *one past* the element it
/// denotes and dereferences the predecessor. `begin()` wraps the source's
/// `end()` and `end()` wraps the source's `begin()`, so no extra sentinel
/// is needed and reversing twice gives back the original order.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let view = all(vec![1, 2, 3]).reverse();
/// assert_eq!(view.to::<Vec<_>>(), vec![3, 2, 1]);
/// assert_eq!(view.index(0), 3);
/// assert_eq!(view.reverse().to::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Reverse<V> {
    source: V,
}

impl<V> Reverse<V> {
    /// Creates the view.
    #[inline]
    pub const fn new(source: V) -> Self {
        Self { source }
    }

    /// Returns the reversed view.
    #[inline]
    pub fn into_inner(self) -> V {
        self.source
    }
}

impl<V> View for Reverse<V>
where
    V: View,
    V::Cursor: BidirectionalCursor,
{
    type Cursor = ReverseCursor<V::Cursor>;

    #[inline]
    fn begin(&self) -> Self::Cursor {
        ReverseCursor {
            inner: self.source.end(),
        }
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        ReverseCursor {
            inner: self.source.begin(),
        }
    }
}

/// The cursor of a [`Reverse`].
#[derive(Debug, Clone)]
pub struct ReverseCursor<C> {
    inner: C,
}

impl<C: BidirectionalCursor> Cursor for ReverseCursor<C> {
    type Item = C::Item;

    const CATEGORY: Category = C::CATEGORY;

    fn get(&self) -> C::Item {
        let mut previous = self.inner.clone();
        previous.dec();
        previous.get()
    }

    #[inline]
    fn inc(&mut self) {
        self.inner.dec();
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.inner.is_equal(&other.inner)
    }

    #[inline]
    fn distance_hint(&self, end: &Self) -> Option<usize> {
        end.inner.distance_hint(&self.inner)
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for ReverseCursor<C> {
    #[inline]
    fn dec(&mut self) {
        self.inner.inc();
    }
}

impl<C> OrderedCursor for ReverseCursor<C>
where
    C: BidirectionalCursor + OrderedCursor,
{
    #[inline]
    fn is_less(&self, other: &Self) -> bool {
        other.inner.is_less(&self.inner)
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for ReverseCursor<C> {
    #[inline]
    fn advance(&mut self, offset: isize) {
        self.inner.advance(-offset);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        other.inner.distance_to(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{all, iota_range};

    #[test]
    fn test_reverse_text() {
        let reversed: String = all("stressed").reverse().to();
        assert_eq!(reversed, "desserts");
    }

    #[test]
    fn test_reverse_random_access() {
        let view = iota_range(0, 10).reverse();
        assert_eq!(view.positions().0.category(), Category::RandomAccess);
        assert_eq!(view.len(), 10);
        assert_eq!(view.at(2), Ok(7));
        assert_eq!(view.back(), Ok(0));
    }

    #[test]
    fn test_reverse_ordering() {
        let view = iota_range(0, 4).reverse();
        let (begin, end) = view.positions();
        assert!(begin < end);
        assert_eq!(end - begin, 4);
    }

    #[test]
    fn test_reverse_empty() {
        assert!(all(Vec::<u8>::new()).reverse().is_empty());
    }

    #[test]
    fn test_reverse_take() {
        let data = vec![1, 2, 3, 4, 5];
        let last_two: Vec<&i32> = all(&data).reverse().take(2).to();
        assert_eq!(last_two, vec![&5, &4]);
    }
}
