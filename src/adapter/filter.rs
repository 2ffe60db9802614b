//! Predicate-based selection.

use crate::cursor::{Category, Cursor};
use crate::view::{View, ViewItem};

/// A view of the elements of its source that satisfy a predicate.
///
/// The cursor skips non-matching elements when it is created and after
/// every increment. It moves forward only: stepping backward would need to
/// re-test elements in reverse, which this adapter does not do, so its
/// cursor never implements `BidirectionalCursor`.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let data = vec![1, 2, 3, 4, 5, 6];
/// let even: Vec<&i32> = all(&data).filter(|value| **value % 2 == 0).to();
/// assert_eq!(even, vec![&2, &4, &6]);
/// ```
#[derive(Debug, Clone)]
pub struct Filter<V, P> {
    source: V,
    predicate: P,
}

impl<V, P> Filter<V, P> {
    /// Creates the view.
    #[inline]
    pub const fn new(source: V, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<V, P> View for Filter<V, P>
where
    V: View,
    P: Fn(&ViewItem<V>) -> bool + Clone,
{
    type Cursor = FilterCursor<V::Cursor, P>;

    fn begin(&self) -> Self::Cursor {
        let mut cursor = FilterCursor {
            current: self.source.begin(),
            end: self.source.end(),
            predicate: self.predicate.clone(),
        };
        cursor.satisfy();
        cursor
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        FilterCursor {
            current: end.clone(),
            end,
            predicate: self.predicate.clone(),
        }
    }
}

/// The cursor of a [`Filter`].
#[derive(Debug, Clone)]
pub struct FilterCursor<C, P> {
    current: C,
    end: C,
    predicate: P,
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    fn satisfy(&mut self) {
        while !self.current.is_equal(&self.end) && !(self.predicate)(&self.current.get()) {
            self.current.inc();
        }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    type Item = C::Item;

    const CATEGORY: Category = C::CATEGORY.weaker(Category::Forward);

    #[inline]
    fn get(&self) -> C::Item {
        self.current.get()
    }

    fn inc(&mut self) {
        self.current.inc();
        self.satisfy();
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.current.is_equal(&other.current)
    }
}
