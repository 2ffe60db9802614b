//! Bridge from a cursor pair to a standard [`Iterator`].

use std::iter::FusedIterator;

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};

/// A standard iterator over the positions between two cursors.
///
/// Produced by [`View::iter`](crate::view::View::iter). Implements
/// [`DoubleEndedIterator`] when the cursor is bidirectional and
/// [`ExactSizeIterator`] when it is random access.
#[derive(Debug, Clone)]
pub struct Walk<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Walk<C> {
    /// Creates an iterator over `[front, back)`.
    #[inline]
    pub const fn new(front: C, back: C) -> Self {
        Self { front, back }
    }

    /// Returns the remaining cursor pair.
    #[inline]
    pub fn into_cursors(self) -> (C, C) {
        (self.front, self.back)
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front.is_equal(&self.back) {
            return None;
        }
        let item = self.front.get();
        self.front.inc();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front.is_equal(&self.back) {
            return (0, Some(0));
        }
        match self.front.distance_hint(&self.back) {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Walk<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front.is_equal(&self.back) {
            return None;
        }
        self.back.dec();
        Some(self.back.get())
    }
}

impl<C: RandomAccessCursor> ExactSizeIterator for Walk<C> {
    fn len(&self) -> usize {
        usize::try_from(self.front.distance_to(&self.back)).unwrap_or(0)
    }
}

impl<C: Cursor> FusedIterator for Walk<C> {}

#[cfg(test)]
mod tests {
    use crate::source::all;
    use crate::view::View;

    #[test]
    fn test_walk_forward() {
        let data = vec![1, 2, 3];
        let collected: Vec<i32> = all(&data).iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn test_walk_backward() {
        let data = vec![1, 2, 3];
        let collected: Vec<i32> = all(&data).iter().rev().copied().collect();
        assert_eq!(collected, vec![3, 2, 1]);
    }

    #[test]
    fn test_walk_meets_in_the_middle() {
        let data = vec![1, 2, 3, 4];
        let mut walk = all(&data).iter();
        assert_eq!(walk.next(), Some(&1));
        assert_eq!(walk.next_back(), Some(&4));
        assert_eq!(walk.next(), Some(&2));
        assert_eq!(walk.next_back(), Some(&3));
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next_back(), None);
    }

    #[test]
    fn test_walk_exact_size() {
        let data = vec![1, 2, 3, 4];
        let mut walk = all(&data).iter();
        assert_eq!(walk.len(), 4);
        walk.next();
        assert_eq!(walk.len(), 3);
        assert_eq!(walk.size_hint(), (3, Some(3)));
    }
}
