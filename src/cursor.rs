//! Cursor traits: the minimal behavior an iterator position must provide.
//!
//! A cursor is a small value that knows how to read the element at its
//! position and how to move. Every adapter in this crate defines its own
//! cursor type and implements only the capabilities its source supports:
//!
//! - [`Cursor`]: read, step forward, compare for equality
//! - [`BidirectionalCursor`]: step backward
//! - [`OrderedCursor`]: strict ordering between positions
//! - [`RandomAccessCursor`]: jump by a signed offset and measure distance
//!
//! Code that needs a capability states it as a trait bound, so using an
//! operation the cursor does not provide is rejected at compile time.
//!
//! # Examples
//!
//! ```rust
//! use pipeview::cursor::{BidirectionalCursor, Category, Cursor};
//!
//! #[derive(Clone)]
//! struct Countdown {
//!     value: u32,
//! }
//!
//! impl Cursor for Countdown {
//!     type Item = u32;
//!
//!     fn get(&self) -> u32 {
//!         self.value
//!     }
//!
//!     fn inc(&mut self) {
//!         self.value -= 1;
//!     }
//!
//!     fn is_equal(&self, other: &Self) -> bool {
//!         self.value == other.value
//!     }
//! }
//!
//! let mut cursor = Countdown { value: 3 };
//! cursor.inc();
//! assert_eq!(cursor.get(), 2);
//! assert_eq!(Countdown::CATEGORY, Category::Forward);
//! ```

use std::cmp::Ordering;

/// The capability class of a cursor.
///
/// Classes are totally ordered from weakest to strongest, so an adapter that
/// combines several sources can take the weakest of them with
/// [`Category::weaker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Single pass: copies of a cursor do not observe independent positions.
    Input,
    /// Multi-pass, forward only.
    Forward,
    /// Multi-pass, forward and backward.
    Bidirectional,
    /// Constant-time jumps and distance measurement.
    RandomAccess,
}

impl Category {
    /// Returns the weaker of two categories.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipeview::cursor::Category;
    ///
    /// assert_eq!(
    ///     Category::RandomAccess.weaker(Category::Forward),
    ///     Category::Forward
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub const fn weaker(self, other: Self) -> Self {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Returns `true` if cursors of this category may be copied and walked
    /// independently.
    #[inline]
    pub const fn is_multi_pass(self) -> bool {
        !matches!(self, Self::Input)
    }
}

/// The base cursor capability: read, step forward, compare.
///
/// Implementors must be cheap to clone; views hand out fresh cursors from
/// `begin()` and `end()` and adapters copy them freely.
pub trait Cursor: Clone {
    /// The element type produced by [`Cursor::get`].
    type Item;

    /// The capability class of this cursor.
    ///
    /// Defaults to [`Category::Forward`]. Adapters that wrap another cursor
    /// forward or clamp their source's category.
    const CATEGORY: Category = Category::Forward;

    /// Reads the element at the current position.
    ///
    /// # Panics
    ///
    /// Reading an end position is a contract violation. Implementations
    /// panic rather than return garbage.
    fn get(&self) -> Self::Item;

    /// Moves to the next position.
    fn inc(&mut self);

    /// Returns `true` if both cursors denote the same position.
    fn is_equal(&self, other: &Self) -> bool;

    /// Moves forward by at most `count` positions without passing `end`,
    /// returning the number of positions actually taken.
    ///
    /// The provided implementation steps one position at a time. Random
    /// access cursors override it with constant-time arithmetic.
    fn step_within(&mut self, count: usize, end: &Self) -> usize {
        let mut taken = 0;
        while taken < count && !self.is_equal(end) {
            self.inc();
            taken += 1;
        }
        taken
    }

    /// Returns the exact number of positions between `self` and `end`, when
    /// it can be computed without walking.
    fn distance_hint(&self, _end: &Self) -> Option<usize> {
        None
    }
}

/// A cursor that can also step backward.
pub trait BidirectionalCursor: Cursor {
    /// Moves to the previous position.
    fn dec(&mut self);
}

/// A cursor whose positions are strictly ordered.
pub trait OrderedCursor: Cursor {
    /// Returns `true` if `self` is strictly before `other`.
    fn is_less(&self, other: &Self) -> bool;
}

/// A cursor that jumps by arbitrary signed offsets in constant time.
pub trait RandomAccessCursor: BidirectionalCursor + OrderedCursor {
    /// Moves by `offset` positions (negative moves backward).
    fn advance(&mut self, offset: isize);

    /// Returns the signed number of positions from `self` to `other`.
    fn distance_to(&self, other: &Self) -> isize;
}

/// Counts the positions from `begin` up to `end` by stepping.
///
/// Works for every cursor; prefer [`Cursor::distance_hint`] when it is
/// available.
pub fn count_between<C: Cursor>(begin: &C, end: &C) -> usize {
    if let Some(distance) = begin.distance_hint(end) {
        return distance;
    }
    let mut current = begin.clone();
    let mut count = 0;
    while !current.is_equal(end) {
        current.inc();
        count += 1;
    }
    count
}

/// Compares two ordered cursors.
pub fn compare<C: OrderedCursor>(left: &C, right: &C) -> Ordering {
    if left.is_equal(right) {
        Ordering::Equal
    } else if left.is_less(right) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Signed distance between two indices, saturating at the `isize` bounds.
pub(crate) fn signed_distance(from: usize, to: usize) -> isize {
    if to >= from {
        isize::try_from(to - from).unwrap_or(isize::MAX)
    } else {
        isize::try_from(from - to).map_or(isize::MIN, |distance| -distance)
    }
}

/// Applies a signed offset to an index.
///
/// # Panics
///
/// Panics if the result would fall before the start of the sequence.
pub(crate) fn offset_index(index: usize, offset: isize) -> usize {
    index
        .checked_add_signed(offset)
        .unwrap_or_else(|| panic!("cursor moved before the start of its sequence"))
}

/// Constant-time `step_within` for index-based cursors.
pub(crate) fn clamp_step(index: usize, count: usize, end_index: usize) -> usize {
    count.min(end_index.saturating_sub(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Counter {
        value: usize,
    }

    impl Cursor for Counter {
        type Item = usize;

        fn get(&self) -> usize {
            self.value
        }

        fn inc(&mut self) {
            self.value += 1;
        }

        fn is_equal(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    #[test]
    fn test_category_ordering() {
        assert!(Category::Input < Category::Forward);
        assert!(Category::Forward < Category::Bidirectional);
        assert!(Category::Bidirectional < Category::RandomAccess);
    }

    #[test]
    fn test_category_weaker() {
        assert_eq!(
            Category::Bidirectional.weaker(Category::RandomAccess),
            Category::Bidirectional
        );
        assert_eq!(Category::Forward.weaker(Category::Input), Category::Input);
        assert!(!Category::Input.is_multi_pass());
        assert!(Category::Forward.is_multi_pass());
    }

    #[test]
    fn test_default_category_is_forward() {
        assert_eq!(Counter::CATEGORY, Category::Forward);
    }

    #[test]
    fn test_step_within_stops_at_end() {
        let mut cursor = Counter { value: 0 };
        let end = Counter { value: 3 };
        assert_eq!(cursor.step_within(10, &end), 3);
        assert!(cursor.is_equal(&end));
    }

    #[test]
    fn test_step_within_partial() {
        let mut cursor = Counter { value: 0 };
        let end = Counter { value: 10 };
        assert_eq!(cursor.step_within(4, &end), 4);
        assert_eq!(cursor.get(), 4);
    }

    #[test]
    fn test_count_between_walks() {
        let begin = Counter { value: 2 };
        let end = Counter { value: 7 };
        assert_eq!(count_between(&begin, &end), 5);
    }

    #[test]
    fn test_signed_distance() {
        assert_eq!(signed_distance(2, 5), 3);
        assert_eq!(signed_distance(5, 2), -3);
        assert_eq!(signed_distance(4, 4), 0);
    }

    #[test]
    fn test_offset_index() {
        assert_eq!(offset_index(5, -2), 3);
        assert_eq!(offset_index(5, 2), 7);
    }

    #[test]
    #[should_panic(expected = "before the start")]
    fn test_offset_index_underflow_panics() {
        let _ = offset_index(1, -2);
    }

    #[test]
    fn test_clamp_step() {
        assert_eq!(clamp_step(2, 10, 5), 3);
        assert_eq!(clamp_step(2, 1, 5), 1);
        assert_eq!(clamp_step(6, 1, 5), 0);
    }
}
