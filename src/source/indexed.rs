//! Referencing and owning views over random-access storage.

use std::fmt;
use std::rc::Rc;

use crate::cursor::{self, BidirectionalCursor, Category, Cursor, OrderedCursor, RandomAccessCursor};
use crate::source::storage::{Holder, Storage};
use crate::view::View;

/// A random-access cursor: a storage holder plus an index.
///
/// Cursors from the same view compare by index only.
#[derive(Clone)]
pub struct IndexCursor<H> {
    holder: H,
    index: usize,
}

impl<H> IndexCursor<H> {
    /// Creates a cursor at `index`.
    #[inline]
    pub const fn new(holder: H, index: usize) -> Self {
        Self { holder, index }
    }

    /// The current index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<H> fmt::Debug for IndexCursor<H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IndexCursor")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<H: Holder> Cursor for IndexCursor<H> {
    type Item = H::Item;

    const CATEGORY: Category = Category::RandomAccess;

    #[inline]
    fn get(&self) -> H::Item {
        self.holder.fetch(self.index)
    }

    #[inline]
    fn inc(&mut self) {
        self.index += 1;
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.index == other.index
    }

    #[inline]
    fn step_within(&mut self, count: usize, end: &Self) -> usize {
        let taken = cursor::clamp_step(self.index, count, end.index);
        self.index += taken;
        taken
    }

    #[inline]
    fn distance_hint(&self, end: &Self) -> Option<usize> {
        Some(end.index.saturating_sub(self.index))
    }
}

impl<H: Holder> BidirectionalCursor for IndexCursor<H> {
    #[inline]
    fn dec(&mut self) {
        self.index = cursor::offset_index(self.index, -1);
    }
}

impl<H: Holder> OrderedCursor for IndexCursor<H> {
    #[inline]
    fn is_less(&self, other: &Self) -> bool {
        self.index < other.index
    }
}

impl<H: Holder> RandomAccessCursor for IndexCursor<H> {
    #[inline]
    fn advance(&mut self, offset: isize) {
        self.index = cursor::offset_index(self.index, offset);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        cursor::signed_distance(self.index, other.index)
    }
}

// =============================================================================
// Borrowed
// =============================================================================

/// A referencing view: borrows storage owned by the caller.
///
/// Elements are yielded as references into the caller's storage, so their
/// addresses are the addresses of the stored elements. The borrow ties the
/// view's lifetime to the storage; a view that would outlive its source is
/// rejected by the borrow checker.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let data = vec![1, 2, 3];
/// let view = referencing(&data);
/// assert!(std::ptr::eq(view.front().unwrap(), &data[0]));
/// ```
pub struct Borrowed<'a, S: ?Sized> {
    storage: &'a S,
}

impl<'a, S: Storage + ?Sized> Borrowed<'a, S> {
    /// Borrows `storage`.
    #[inline]
    pub const fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// The borrowed storage.
    #[inline]
    pub const fn source(&self) -> &'a S {
        self.storage
    }
}

impl<S: ?Sized> Clone for Borrowed<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Borrowed<'_, S> {}

impl<S: ?Sized> fmt::Debug for Borrowed<'_, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Borrowed").finish_non_exhaustive()
    }
}

impl<'a, S: Storage + ?Sized> View for Borrowed<'a, S> {
    type Cursor = IndexCursor<&'a S>;

    #[inline]
    fn begin(&self) -> Self::Cursor {
        IndexCursor::new(self.storage, 0)
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        IndexCursor::new(self.storage, self.storage.size())
    }
}

// =============================================================================
// Owning
// =============================================================================

/// An owning view: holds storage moved in by the caller.
///
/// The storage is shared between the view and its cursors, so cursors stay
/// valid after the view is dropped. Elements are yielded as clones.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// fn evens() -> Owning<Vec<i32>> {
///     owning(vec![2, 4, 6])
/// }
///
/// assert_eq!(evens().to::<Vec<_>>(), vec![2, 4, 6]);
/// ```
pub struct Owning<S> {
    storage: Rc<S>,
}

impl<S: Storage> Owning<S> {
    /// Takes ownership of `storage`.
    #[inline]
    pub fn new(storage: S) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    /// The owned storage.
    #[inline]
    pub fn source(&self) -> &S {
        &self.storage
    }
}

impl<S> Clone for Owning<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Owning<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Owning")
            .field("storage", &self.storage)
            .finish()
    }
}

impl<S> View for Owning<S>
where
    S: Storage,
    S::Element: Clone,
{
    type Cursor = IndexCursor<Rc<S>>;

    #[inline]
    fn begin(&self) -> Self::Cursor {
        IndexCursor::new(Rc::clone(&self.storage), 0)
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        IndexCursor::new(Rc::clone(&self.storage), self.storage.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(IndexCursor<&'static [i32]>: RandomAccessCursor);
    assert_impl_all!(IndexCursor<Rc<Vec<i32>>>: RandomAccessCursor);
    assert_impl_all!(Borrowed<'static, [i32]>: Copy);
    assert_not_impl_any!(Owning<Vec<i32>>: Send, Sync);

    #[test]
    fn test_borrowed_yields_addresses_of_source() {
        let data = vec![7, 8, 9];
        let view = Borrowed::new(data.as_slice());
        for (item, original) in view.iter().zip(data.iter()) {
            assert!(std::ptr::eq(item, original));
        }
    }

    #[test]
    fn test_owning_outlives_its_view() {
        let view = Owning::new(vec![String::from("x"), String::from("y")]);
        let begin = view.begin();
        let end = view.end();
        drop(view);
        let collected: Vec<String> = crate::view::Walk::new(begin, end).collect();
        assert_eq!(collected, vec!["x", "y"]);
    }

    #[test]
    fn test_owning_and_borrowed_agree() {
        let data = vec![1, 2, 3];
        let borrowed: Vec<i32> = Borrowed::new(&data).iter().copied().collect();
        let owned: Vec<i32> = Owning::new(data.clone()).to();
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_cursor_arithmetic() {
        let data = [1, 2, 3, 4];
        let view = Borrowed::new(&data);
        let mut cursor = view.begin();
        cursor.advance(3);
        assert_eq!(*cursor.get(), 4);
        assert_eq!(view.begin().distance_to(&cursor), 3);
        assert_eq!(cursor.distance_to(&view.begin()), -3);
        cursor.dec();
        assert_eq!(*cursor.get(), 3);
        assert!(view.begin().is_less(&cursor));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_step_within_is_clamped() {
        let data = [1, 2, 3];
        let view = Borrowed::new(&data);
        let mut cursor = view.begin();
        assert_eq!(cursor.step_within(10, &view.end()), 3);
        assert!(cursor.is_equal(&view.end()));
    }

    #[test]
    fn test_category() {
        assert_eq!(
            <IndexCursor<&[i32]> as Cursor>::CATEGORY,
            Category::RandomAccess
        );
    }
}
