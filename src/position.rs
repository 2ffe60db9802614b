//! The iterator wrapper: full iterator semantics derived from a cursor.
//!
//! [`Position`] owns exactly one cursor and exposes comparison and
//! arithmetic operators. Each operator is implemented only when the cursor
//! provides the underlying capability:
//!
//! | Operation | Requires |
//! |-----------|----------|
//! | `get`, `inc`, `post_inc`, `==` | [`Cursor`] |
//! | `dec`, `post_dec` | [`BidirectionalCursor`] |
//! | `<`, `<=`, `>`, `>=` | [`OrderedCursor`] |
//! | `+=`, `-=`, `+`, `-` (offset), `at` | [`RandomAccessCursor`] |
//! | `position - position` | [`RandomAccessCursor`] |
//!
//! # Examples
//!
//! ```rust
//! use pipeview::prelude::*;
//!
//! let data = vec![10, 20, 30, 40];
//! let (begin, end) = all(&data).positions();
//!
//! assert_eq!(end.clone() - begin.clone(), 4);
//! assert_eq!(*(begin.clone() + 2).get(), 30);
//! assert!(begin < end);
//! ```

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::cursor::{self, BidirectionalCursor, Category, Cursor, OrderedCursor, RandomAccessCursor};

/// A cursor wrapped with operator semantics.
#[derive(Debug, Clone, Default)]
pub struct Position<C> {
    cursor: C,
}

impl<C: Cursor> Position<C> {
    /// Wraps a cursor.
    #[inline]
    pub const fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns the wrapped cursor.
    #[inline]
    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Borrows the wrapped cursor.
    #[inline]
    pub const fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Reads the element at this position.
    #[inline]
    pub fn get(&self) -> C::Item {
        self.cursor.get()
    }

    /// Prefix increment.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.cursor.inc();
        self
    }

    /// Postfix increment: moves forward and returns the previous position.
    #[inline]
    #[must_use = "use `inc` if the previous position is not needed"]
    pub fn post_inc(&mut self) -> Self {
        let previous = self.clone();
        self.cursor.inc();
        previous
    }

    /// The capability class of the wrapped cursor.
    #[inline]
    pub const fn category(&self) -> Category {
        C::CATEGORY
    }
}

impl<C: BidirectionalCursor> Position<C> {
    /// Prefix decrement.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.cursor.dec();
        self
    }

    /// Postfix decrement: moves backward and returns the previous position.
    #[inline]
    #[must_use = "use `dec` if the previous position is not needed"]
    pub fn post_dec(&mut self) -> Self {
        let previous = self.clone();
        self.cursor.dec();
        previous
    }
}

impl<C: RandomAccessCursor> Position<C> {
    /// Reads the element `offset` positions away without moving.
    #[inline]
    pub fn at(&self, offset: isize) -> C::Item {
        let mut target = self.cursor.clone();
        target.advance(offset);
        target.get()
    }
}

impl<C: Cursor> PartialEq for Position<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor.is_equal(&other.cursor)
    }
}

impl<C: OrderedCursor> PartialOrd for Position<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cursor::compare(&self.cursor, &other.cursor))
    }
}

impl<C: RandomAccessCursor> AddAssign<isize> for Position<C> {
    fn add_assign(&mut self, offset: isize) {
        self.cursor.advance(offset);
    }
}

impl<C: RandomAccessCursor> SubAssign<isize> for Position<C> {
    fn sub_assign(&mut self, offset: isize) {
        self.cursor.advance(-offset);
    }
}

impl<C: RandomAccessCursor> Add<isize> for Position<C> {
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<C: RandomAccessCursor> Sub<isize> for Position<C> {
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

impl<C: RandomAccessCursor> Sub for Position<C> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        other.cursor.distance_to(&self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Filter;
    use crate::source::{Borrowed, IndexCursor};
    use crate::view::View;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    type SliceCursor = IndexCursor<&'static [i32]>;
    type FilteredCursor = <Filter<Borrowed<'static, [i32]>, fn(&&'static i32) -> bool> as View>::Cursor;

    assert_impl_all!(Position<SliceCursor>: PartialEq, PartialOrd, Add<isize>, Sub<isize>, Sub<Position<SliceCursor>>);
    assert_impl_all!(Position<FilteredCursor>: PartialEq);
    assert_not_impl_any!(Position<FilteredCursor>: PartialOrd, Add<isize>, Sub<isize>, AddAssign<isize>);

    fn positions(data: &'static [i32]) -> (Position<SliceCursor>, Position<SliceCursor>) {
        Borrowed::new(data).positions()
    }

    #[test]
    fn test_post_inc_returns_previous() {
        let (mut begin, _) = positions(&[1, 2, 3]);
        let previous = begin.post_inc();
        assert_eq!(*previous.get(), 1);
        assert_eq!(*begin.get(), 2);
    }

    #[test]
    fn test_dec_and_post_dec() {
        let (_, mut end) = positions(&[1, 2, 3]);
        end.dec();
        assert_eq!(*end.get(), 3);
        let previous = end.post_dec();
        assert_eq!(*previous.get(), 3);
        assert_eq!(*end.get(), 2);
    }

    #[test]
    fn test_arithmetic() {
        let (begin, end) = positions(&[1, 2, 3, 4, 5]);
        assert_eq!(end.clone() - begin.clone(), 5);
        assert_eq!(begin.clone() - end.clone(), -5);
        let mut middle = begin.clone() + 2;
        assert_eq!(*middle.get(), 3);
        middle -= 1;
        assert_eq!(*middle.get(), 2);
        assert_eq!(*(end - 1).get(), 5);
        assert_eq!(*begin.at(4), 5);
    }

    #[test]
    fn test_comparison() {
        let (begin, end) = positions(&[1, 2]);
        assert!(begin < end);
        assert!(end > begin);
        assert!(begin <= begin.clone());
        assert_eq!(begin.clone() + 2, end);
        assert_ne!(begin, end);
    }

    #[test]
    fn test_category() {
        let (begin, _) = positions(&[1]);
        assert_eq!(begin.category(), Category::RandomAccess);
    }
}
