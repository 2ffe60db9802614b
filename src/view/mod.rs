//! The view abstraction.
//!
//! A view is anything that hands out a `begin` and an `end` cursor of the
//! same type. The [`View`] trait requires only those two methods and derives
//! everything else from them: emptiness, front/back access, indexing,
//! conversion into containers, a standard [`Iterator`] bridge, and the
//! adapter methods that build new views lazily.
//!
//! Because `begin` and `end` share the single associated [`View::Cursor`]
//! type, a view whose endpoints disagree cannot be expressed.
//!
//! # Examples
//!
//! ```rust
//! use pipeview::prelude::*;
//!
//! let words = vec!["apple", "banana", "cherry"];
//! let lengths: Vec<usize> = all(&words).transform(|word| word.len()).to();
//! assert_eq!(lengths, vec![5, 6, 6]);
//!
//! let view = all(&words);
//! assert_eq!(view.front(), Ok(&"apple"));
//! assert_eq!(view.back(), Ok(&"cherry"));
//! assert_eq!(view.len(), 3);
//! assert!(view.at(3).is_err());
//! ```
//!
//! # Capabilities
//!
//! Methods that need more than a forward cursor are bounded by the matching
//! capability trait. A filtered view is forward only, so each of these is
//! rejected at compile time:
//!
//! ```compile_fail
//! use pipeview::prelude::*;
//!
//! let reversed = all(vec![1, 2, 3]).filter(|value| *value > 1).reverse();
//! ```
//!
//! ```compile_fail
//! use pipeview::prelude::*;
//!
//! let length = all(vec![1, 2, 3]).filter(|value| *value > 1).len();
//! ```
//!
//! ```compile_fail
//! use pipeview::prelude::*;
//!
//! let last = all(vec![1, 2, 3]).filter(|value| *value > 1).back();
//! ```
//!
//! ```compile_fail
//! use pipeview::prelude::*;
//!
//! let (begin, end) = all(vec![1, 2, 3]).filter(|value| *value > 1).positions();
//! let ordered = begin < end;
//! ```
//!
//! Concatenation keeps bidirectional access but not random access:
//!
//! ```compile_fail
//! use pipeview::prelude::*;
//!
//! let third = all(vec![1, 2]).concat(vec![3]).at(2);
//! ```
//!
//! ```rust
//! use pipeview::prelude::*;
//!
//! assert_eq!(all(vec![1, 2]).concat(vec![3]).back(), Ok(3));
//! ```

mod subrange;
mod walk;

pub use subrange::Subrange;
pub use walk::Walk;

use crate::adapter::{
    Cache1, ChunkByKeyPolicy, ChunkByPolicy, ChunkPolicy, Chunks, Concat, DropWhile, Enumerate,
    Filter, GroupBy, Intersperse, Join, JoinWith, Reverse, SlidePolicy, SplitOnPolicy,
    SplitPolicy, Stride, Transform, Zip,
};
use crate::cursor::{self, BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::error::ViewError;
use crate::position::Position;
use crate::source::IntoView;

/// The element type of a view.
pub type ViewItem<V> = <<V as View>::Cursor as Cursor>::Item;

/// A lazily evaluated, re-iterable sequence.
pub trait View {
    /// The cursor type returned by both [`View::begin`] and [`View::end`].
    type Cursor: Cursor;

    /// Returns a cursor at the first element.
    fn begin(&self) -> Self::Cursor;

    /// Returns the end sentinel.
    fn end(&self) -> Self::Cursor;

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns a standard iterator over the view.
    #[inline]
    fn iter(&self) -> Walk<Self::Cursor> {
        Walk::new(self.begin(), self.end())
    }

    /// Returns the begin and end cursors wrapped as [`Position`]s.
    #[inline]
    fn positions(&self) -> (Position<Self::Cursor>, Position<Self::Cursor>) {
        (Position::new(self.begin()), Position::new(self.end()))
    }

    /// Collects the view into any container buildable from its items.
    ///
    /// ```rust
    /// use pipeview::prelude::*;
    /// use std::collections::BTreeSet;
    ///
    /// let set: BTreeSet<i32> = all(vec![3, 1, 2, 1]).to();
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[inline]
    fn to<B>(&self) -> B
    where
        B: FromIterator<ViewItem<Self>>,
    {
        self.iter().collect()
    }

    /// Returns `true` if the view has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.begin().is_equal(&self.end())
    }

    /// Counts the elements by walking the view.
    #[inline]
    fn count(&self) -> usize {
        cursor::count_between(&self.begin(), &self.end())
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Empty`] if the view has no elements.
    fn front(&self) -> Result<ViewItem<Self>, ViewError> {
        let begin = self.begin();
        if begin.is_equal(&self.end()) {
            return Err(ViewError::Empty { operation: "front" });
        }
        Ok(begin.get())
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Empty`] if the view has no elements.
    fn back(&self) -> Result<ViewItem<Self>, ViewError>
    where
        Self::Cursor: BidirectionalCursor,
    {
        let mut end = self.end();
        if self.begin().is_equal(&end) {
            return Err(ViewError::Empty { operation: "back" });
        }
        end.dec();
        Ok(end.get())
    }

    /// Returns the number of elements, measured by cursor distance.
    #[inline]
    fn len(&self) -> usize
    where
        Self::Cursor: RandomAccessCursor,
    {
        usize::try_from(self.begin().distance_to(&self.end())).unwrap_or(0)
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Panics
    ///
    /// Reading past the end panics in the underlying cursor.
    fn index(&self, index: usize) -> ViewItem<Self>
    where
        Self::Cursor: RandomAccessCursor,
    {
        let mut cursor = self.begin();
        cursor.advance(isize::try_from(index).unwrap_or(isize::MAX));
        cursor.get()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfRange`] if `index` is not below
    /// [`View::len`].
    fn at(&self, index: usize) -> Result<ViewItem<Self>, ViewError>
    where
        Self::Cursor: RandomAccessCursor,
    {
        let len = self.len();
        if index >= len {
            return Err(ViewError::OutOfRange { index, len });
        }
        Ok(self.index(index))
    }

    // =========================================================================
    // Element-wise adapters
    // =========================================================================

    /// Applies `function` to every element on dereference.
    fn transform<F, U>(self, function: F) -> Transform<Self, F>
    where
        Self: Sized,
        F: Fn(ViewItem<Self>) -> U + Clone,
    {
        Transform::new(self, function)
    }

    /// Keeps the elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&ViewItem<Self>) -> bool + Clone,
    {
        Filter::new(self, predicate)
    }

    /// Pairs every element with a running index starting at zero.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self, 0)
    }

    /// Pairs every element with a running index starting at `start`.
    fn enumerate_from(self, start: usize) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self, start)
    }

    /// Visits the elements back to front.
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
        Self::Cursor: BidirectionalCursor,
    {
        Reverse::new(self)
    }

    /// Keeps every `step`-th element, starting with the first.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    fn stride(self, step: usize) -> Stride<Self>
    where
        Self: Sized,
    {
        Stride::new(self, step)
    }

    /// Caches the most recently read element of the current position.
    fn cache1(self) -> Cache1<Self>
    where
        Self: Sized,
    {
        Cache1::new(self)
    }

    // =========================================================================
    // Bounds
    // =========================================================================

    /// The first `count` elements (fewer if the view is shorter).
    fn take(&self, count: usize) -> Subrange<Self::Cursor> {
        let begin = self.begin();
        let end = self.end();
        let mut stop = begin.clone();
        stop.step_within(count, &end);
        Subrange::new(begin, stop)
    }

    /// Everything after the first `count` elements.
    fn drop(&self, count: usize) -> Subrange<Self::Cursor> {
        let end = self.end();
        let mut start = self.begin();
        start.step_within(count, &end);
        Subrange::new(start, end)
    }

    /// The longest prefix whose elements satisfy `predicate`.
    ///
    /// The stopping point is found eagerly, when this method is called.
    fn take_while<P>(&self, predicate: P) -> Subrange<Self::Cursor>
    where
        P: Fn(&ViewItem<Self>) -> bool,
    {
        let begin = self.begin();
        let end = self.end();
        let mut stop = begin.clone();
        while !stop.is_equal(&end) && predicate(&stop.get()) {
            stop.inc();
        }
        Subrange::new(begin, stop)
    }

    /// Everything after the longest prefix satisfying `predicate`.
    ///
    /// The prefix is skipped lazily, the first time a cursor of the result
    /// is compared, read or moved.
    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&ViewItem<Self>) -> bool + Clone,
    {
        DropWhile::new(self, predicate)
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Pairs this view with another, stopping at the shorter one.
    fn zip_with<O>(self, other: O) -> Zip<(Self, O::View)>
    where
        Self: Sized,
        O: IntoView,
    {
        Zip::new((self, other.into_view()))
    }

    /// Appends another view with the same element type.
    fn concat<O>(self, other: O) -> Concat<Self, O::View>
    where
        Self: Sized,
        O: IntoView,
    {
        Concat::new(self, other.into_view())
    }

    /// Places `delimiter` between consecutive elements.
    fn intersperse(self, delimiter: ViewItem<Self>) -> Intersperse<Self, ViewItem<Self>>
    where
        Self: Sized,
        ViewItem<Self>: Clone,
    {
        Intersperse::new(self, delimiter)
    }

    /// Flattens a view of ranges by one level, skipping empty ranges.
    fn join(self) -> Join<Self>
    where
        Self: Sized,
        ViewItem<Self>: IntoView,
    {
        Join::new(self)
    }

    /// Flattens a view of ranges, inserting `delimiter` between them.
    fn join_with<D>(self, delimiter: D) -> JoinWith<Self, D::View>
    where
        Self: Sized,
        ViewItem<Self>: IntoView,
        D: IntoView,
    {
        JoinWith::new(self, delimiter.into_view())
    }

    /// Maps every element to a range and flattens the result.
    ///
    /// `function` runs once per element: its result is cached for the
    /// element's lifetime in the join instead of being recomputed on every
    /// dereference.
    fn transform_join<F, U>(self, function: F) -> Join<Cache1<Transform<Self, F>>>
    where
        Self: Sized,
        F: Fn(ViewItem<Self>) -> U + Clone,
        U: IntoView + Clone,
    {
        Join::new(Cache1::new(Transform::new(self, function)))
    }

    // =========================================================================
    // Chunking
    // =========================================================================

    /// Splits the view into consecutive chunks of `size` elements; the last
    /// chunk may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn chunk(self, size: usize) -> Chunks<Self, ChunkPolicy>
    where
        Self: Sized,
    {
        Chunks::new(self, ChunkPolicy::new(size))
    }

    /// Windows of `size` elements starting at every position; windows near
    /// the end are shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn slide(self, size: usize) -> Chunks<Self, SlidePolicy>
    where
        Self: Sized,
    {
        Chunks::new(self, SlidePolicy::new(size))
    }

    /// Splits at every element equal to `delimiter`, dropping the delimiter.
    fn split<T>(self, delimiter: T) -> Chunks<Self, SplitPolicy<T>>
    where
        Self: Sized,
    {
        Chunks::new(self, SplitPolicy::new(delimiter))
    }

    /// Splits at every occurrence of the sequence `pattern`.
    fn split_on<I>(self, pattern: I) -> Chunks<Self, SplitOnPolicy<I::Item>>
    where
        Self: Sized,
        I: IntoIterator,
    {
        Chunks::new(self, SplitOnPolicy::new(pattern))
    }

    /// Groups runs of elements related to the first element of the run.
    fn chunk_by<F>(self, relation: F) -> Chunks<Self, ChunkByPolicy<F>>
    where
        Self: Sized,
        F: Fn(&ViewItem<Self>, &ViewItem<Self>) -> bool + Clone,
    {
        Chunks::new(self, ChunkByPolicy::new(relation))
    }

    /// Groups runs of elements with equal keys.
    fn chunk_by_key<F, K>(self, key: F) -> Chunks<Self, ChunkByKeyPolicy<F>>
    where
        Self: Sized,
        F: Fn(&ViewItem<Self>) -> K + Clone,
        K: PartialEq,
    {
        Chunks::new(self, ChunkByKeyPolicy::new(key))
    }

    /// Groups runs of elements with equal keys, yielding `(key, chunk)`.
    fn group_by<F, K>(self, key: F) -> GroupBy<Self, F>
    where
        Self: Sized,
        F: Fn(&ViewItem<Self>) -> K + Clone,
        K: PartialEq,
    {
        GroupBy::new(self, key)
    }

    // =========================================================================
    // Erasure
    // =========================================================================

    /// Hides the concrete view and cursor types behind
    /// [`AnyView`](crate::erase::AnyView).
    #[cfg(feature = "erase")]
    fn erase(self) -> crate::erase::AnyView<ViewItem<Self>>
    where
        Self: Sized + 'static,
        Self::Cursor: 'static,
    {
        crate::erase::AnyView::new(self)
    }
}
