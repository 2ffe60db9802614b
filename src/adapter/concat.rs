//! Sequencing two views one after the other.

use crate::cursor::{BidirectionalCursor, Category, Cursor};
use crate::source::IntoView;
use crate::view::View;

/// A view of all elements of `first` followed by all elements of `second`.
///
/// Both views must yield the same element type. The cursor is
/// bidirectional when both sources are.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let view = concat(vec![1, 2], vec![3]);
/// assert_eq!(view.to::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(view.back(), Ok(3));
/// ```
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    /// Creates the view.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> View for Concat<A, B>
where
    A: View,
    B: View,
    B::Cursor: Cursor<Item = <A::Cursor as Cursor>::Item>,
{
    type Cursor = ConcatCursor<A::Cursor, B::Cursor>;

    fn begin(&self) -> Self::Cursor {
        let second_begin = self.second.begin();
        ConcatCursor {
            first: self.first.begin(),
            first_end: self.first.end(),
            second: second_begin.clone(),
            second_begin,
        }
    }

    fn end(&self) -> Self::Cursor {
        ConcatCursor {
            first: self.first.end(),
            first_end: self.first.end(),
            second: self.second.end(),
            second_begin: self.second.begin(),
        }
    }
}

/// The cursor of a [`Concat`].
///
/// The cursor is in the first part while `first != first_end`; there
/// `second` rests at `second_begin`.
#[derive(Debug, Clone)]
pub struct ConcatCursor<A, B> {
    first: A,
    first_end: A,
    second: B,
    second_begin: B,
}

impl<A: Cursor, B: Cursor> ConcatCursor<A, B> {
    #[inline]
    fn in_first(&self) -> bool {
        !self.first.is_equal(&self.first_end)
    }
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    const CATEGORY: Category = A::CATEGORY
        .weaker(B::CATEGORY)
        .weaker(Category::Bidirectional);

    #[inline]
    fn get(&self) -> A::Item {
        if self.in_first() {
            self.first.get()
        } else {
            self.second.get()
        }
    }

    #[inline]
    fn inc(&mut self) {
        if self.in_first() {
            self.first.inc();
        } else {
            self.second.inc();
        }
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.first.is_equal(&other.first) && self.second.is_equal(&other.second)
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        let in_first = self.first.distance_hint(&end.first)?;
        let in_second = self.second.distance_hint(&end.second)?;
        in_first.checked_add(in_second)
    }
}

impl<A, B> BidirectionalCursor for ConcatCursor<A, B>
where
    A: BidirectionalCursor,
    B: BidirectionalCursor<Item = A::Item>,
{
    fn dec(&mut self) {
        if self.second.is_equal(&self.second_begin) {
            self.first.dec();
        } else {
            self.second.dec();
        }
    }
}

/// Concatenates two range-like values.
#[inline]
pub fn concat<A: IntoView, B: IntoView>(first: A, second: B) -> Concat<A::View, B::View> {
    Concat::new(first.into_view(), second.into_view())
}

/// Concatenates one or more range-like values.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
/// use pipeview::concat_views;
///
/// let view = concat_views!(vec![1], vec![2, 3], Vec::<i32>::new(), vec![4]);
/// assert_eq!(view.to::<Vec<_>>(), vec![1, 2, 3, 4]);
/// ```
#[macro_export]
macro_rules! concat_views {
    ($only:expr $(,)?) => {
        $crate::source::all($only)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::adapter::concat($first, $crate::concat_views!($($rest),+))
    };
}
