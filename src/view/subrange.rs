//! A plain begin/end pair.

use crate::cursor::Cursor;
use crate::view::{View, Walk};

/// A view made of two cursors of the same type.
///
/// `take`, `drop` and `take_while` produce subranges of their source's
/// cursor type, so bounding a view adds no per-element overhead. The chunk
/// family yields one subrange per chunk.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let data = vec![1, 2, 3, 4, 5];
/// let middle = all(&data).drop(1).take(3);
/// assert_eq!(middle.to::<Vec<_>>(), vec![&2, &3, &4]);
/// ```
#[derive(Debug, Clone)]
pub struct Subrange<C> {
    begin: C,
    end: C,
}

impl<C: Cursor> Subrange<C> {
    /// Creates a subrange over `[begin, end)`.
    #[inline]
    pub const fn new(begin: C, end: C) -> Self {
        Self { begin, end }
    }

    /// Splits the subrange into its cursors.
    #[inline]
    pub fn into_cursors(self) -> (C, C) {
        (self.begin, self.end)
    }
}

impl<C: Cursor> View for Subrange<C> {
    type Cursor = C;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> C {
        self.end.clone()
    }
}

impl<C: Cursor> IntoIterator for Subrange<C> {
    type Item = C::Item;
    type IntoIter = Walk<C>;

    fn into_iter(self) -> Walk<C> {
        Walk::new(self.begin, self.end)
    }
}

impl<C: Cursor> IntoIterator for &Subrange<C> {
    type Item = C::Item;
    type IntoIter = Walk<C>;

    fn into_iter(self) -> Walk<C> {
        self.iter()
    }
}
