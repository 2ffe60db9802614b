//! Lazily skipping a leading run.

use std::cell::{Cell, RefCell};

use crate::cursor::{BidirectionalCursor, Category, Cursor, OrderedCursor, RandomAccessCursor};
use crate::view::{View, ViewItem};

/// A view of its source after the longest prefix satisfying a predicate.
///
/// The prefix is not skipped when the view or its begin cursor is created.
/// The begin cursor starts in the [`SkipState::Pending`] state and performs
/// the skip the first time it is compared, read or moved; afterwards it is
/// [`SkipState::Resolved`] and the skip never runs again.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let rest: Vec<i32> = all(vec![1, 2, 7, 1, 2]).drop_while(|value| *value < 5).to();
/// assert_eq!(rest, vec![7, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct DropWhile<V, P> {
    source: V,
    predicate: P,
}

impl<V, P> DropWhile<V, P> {
    /// Creates the view.
    #[inline]
    pub const fn new(source: V, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<V, P> View for DropWhile<V, P>
where
    V: View,
    P: Fn(&ViewItem<V>) -> bool + Clone,
{
    type Cursor = DropWhileCursor<V::Cursor, P>;

    fn begin(&self) -> Self::Cursor {
        DropWhileCursor {
            current: RefCell::new(self.source.begin()),
            end: self.source.end(),
            predicate: self.predicate.clone(),
            state: Cell::new(SkipState::Pending),
        }
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        DropWhileCursor {
            current: RefCell::new(end.clone()),
            end,
            predicate: self.predicate.clone(),
            state: Cell::new(SkipState::Resolved),
        }
    }
}

/// Whether a [`DropWhileCursor`] has skipped its prefix yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipState {
    /// The prefix has not been skipped.
    Pending,
    /// The prefix has been skipped; the cursor is at a real position.
    Resolved,
}

/// The cursor of a [`DropWhile`].
#[derive(Debug, Clone)]
pub struct DropWhileCursor<C, P> {
    current: RefCell<C>,
    end: C,
    predicate: P,
    state: Cell<SkipState>,
}

impl<C, P> DropWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    /// The current skip state.
    #[inline]
    pub fn state(&self) -> SkipState {
        self.state.get()
    }

    fn resolve(&self) {
        if self.state.get() == SkipState::Resolved {
            return;
        }
        let mut current = self.current.borrow_mut();
        while !current.is_equal(&self.end) && (self.predicate)(&current.get()) {
            current.inc();
        }
        self.state.set(SkipState::Resolved);
    }
}

impl<C, P> Cursor for DropWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    type Item = C::Item;

    const CATEGORY: Category = C::CATEGORY;

    fn get(&self) -> C::Item {
        self.resolve();
        self.current.borrow().get()
    }

    fn inc(&mut self) {
        self.resolve();
        self.current.get_mut().inc();
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.resolve();
        other.resolve();
        self.current.borrow().is_equal(&other.current.borrow())
    }
}

impl<C, P> BidirectionalCursor for DropWhileCursor<C, P>
where
    C: BidirectionalCursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    fn dec(&mut self) {
        self.resolve();
        self.current.get_mut().dec();
    }
}

impl<C, P> OrderedCursor for DropWhileCursor<C, P>
where
    C: OrderedCursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    fn is_less(&self, other: &Self) -> bool {
        self.resolve();
        other.resolve();
        self.current.borrow().is_less(&other.current.borrow())
    }
}

impl<C, P> RandomAccessCursor for DropWhileCursor<C, P>
where
    C: RandomAccessCursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    fn advance(&mut self, offset: isize) {
        self.resolve();
        self.current.get_mut().advance(offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.resolve();
        other.resolve();
        self.current.borrow().distance_to(&other.current.borrow())
    }
}
