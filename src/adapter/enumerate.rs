//! Pairing elements with a running index.

use crate::cursor::{Category, Cursor};
use crate::view::View;

/// A view yielding `(index, element)` pairs.
///
/// The end cursor carries no meaningful index: equality compares the
/// source cursors only, so a begin cursor that has walked the whole source
/// is equal to `end()` whatever its counter reached.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let letters = vec!['a', 'b', 'c'];
/// let pairs: Vec<(usize, &char)> = all(&letters).enumerate_from(1).to();
/// assert_eq!(pairs, vec![(1, &'a'), (2, &'b'), (3, &'c')]);
/// ```
#[derive(Debug, Clone)]
pub struct Enumerate<V> {
    source: V,
    start: usize,
}

impl<V> Enumerate<V> {
    /// Creates the view; the first element is paired with `start`.
    #[inline]
    pub const fn new(source: V, start: usize) -> Self {
        Self { source, start }
    }
}

impl<V: View> View for Enumerate<V> {
    type Cursor = EnumerateCursor<V::Cursor>;

    fn begin(&self) -> Self::Cursor {
        EnumerateCursor {
            inner: self.source.begin(),
            index: self.start,
        }
    }

    fn end(&self) -> Self::Cursor {
        EnumerateCursor {
            inner: self.source.end(),
            index: EnumerateCursor::<V::Cursor>::END_INDEX,
        }
    }
}

/// The cursor of an [`Enumerate`].
#[derive(Debug, Clone)]
pub struct EnumerateCursor<C> {
    inner: C,
    index: usize,
}

impl<C> EnumerateCursor<C> {
    const END_INDEX: usize = usize::MAX;

    /// The index the next dereference will report.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<C: Cursor> Cursor for EnumerateCursor<C> {
    type Item = (usize, C::Item);

    const CATEGORY: Category = C::CATEGORY.weaker(Category::Forward);

    #[inline]
    fn get(&self) -> Self::Item {
        (self.index, self.inner.get())
    }

    #[inline]
    fn inc(&mut self) {
        self.inner.inc();
        self.index = self.index.wrapping_add(1);
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.inner.is_equal(&other.inner)
    }

    fn step_within(&mut self, count: usize, end: &Self) -> usize {
        let taken = self.inner.step_within(count, &end.inner);
        self.index = self.index.wrapping_add(taken);
        taken
    }

    #[inline]
    fn distance_hint(&self, end: &Self) -> Option<usize> {
        self.inner.distance_hint(&end.inner)
    }
}
