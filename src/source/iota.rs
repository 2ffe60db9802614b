//! Counting views over integers.

use crate::cursor::{BidirectionalCursor, Category, Cursor, OrderedCursor, RandomAccessCursor};
use crate::view::View;

/// Integer types that can be counted by [`Iota`].
pub trait Counter: Copy + PartialEq + PartialOrd {
    /// `self + offset`, wrapping on overflow.
    fn offset_by(self, offset: isize) -> Self;

    /// `other - self` as a signed distance.
    fn span_to(self, other: Self) -> isize;
}

macro_rules! impl_counter {
    ($($integer:ty),+ $(,)?) => {
        $(
            #[allow(
                clippy::cast_lossless,
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_sign_loss
            )]
            impl Counter for $integer {
                #[inline]
                fn offset_by(self, offset: isize) -> Self {
                    (self as i128).wrapping_add(offset as i128) as Self
                }

                #[inline]
                fn span_to(self, other: Self) -> isize {
                    (other as i128 - self as i128) as isize
                }
            }
        )+
    };
}

impl_counter!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// A view counting from `start` up to (excluding) `end`, or forever when
/// unbounded.
///
/// Bounded iotas are random access. `Range<integer>` converts into a bounded
/// iota through [`IntoView`](crate::source::IntoView).
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// assert_eq!(all(3..7_i32).to::<Vec<_>>(), vec![3, 4, 5, 6]);
/// assert_eq!(iota(10_u8).take(3).to::<Vec<_>>(), vec![10, 11, 12]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Iota<T> {
    start: T,
    end: Option<T>,
}

impl<T: Counter> Iota<T> {
    /// Counts from `start` up to (excluding) `end`.
    ///
    /// An `end` below `start` yields an empty view.
    #[inline]
    pub fn bounded(start: T, end: T) -> Self {
        let end = if end < start { start } else { end };
        Self {
            start,
            end: Some(end),
        }
    }

    /// Counts from `start` without bound.
    #[inline]
    pub const fn unbounded(start: T) -> Self {
        Self { start, end: None }
    }
}

impl<T: Counter> View for Iota<T> {
    type Cursor = IotaCursor<T>;

    fn begin(&self) -> IotaCursor<T> {
        IotaCursor {
            value: self.start,
            sentinel: false,
        }
    }

    fn end(&self) -> IotaCursor<T> {
        match self.end {
            Some(end) => IotaCursor {
                value: end,
                sentinel: false,
            },
            None => IotaCursor {
                value: self.start,
                sentinel: true,
            },
        }
    }
}

/// The cursor of an [`Iota`]. The end of an unbounded iota is a sentinel
/// that no counting position ever equals.
#[derive(Debug, Clone, Copy)]
pub struct IotaCursor<T> {
    value: T,
    sentinel: bool,
}

impl<T: Counter> Cursor for IotaCursor<T> {
    type Item = T;

    const CATEGORY: Category = Category::RandomAccess;

    #[inline]
    fn get(&self) -> T {
        assert!(!self.sentinel, "dereferenced the end of an unbounded iota");
        self.value
    }

    #[inline]
    fn inc(&mut self) {
        self.value = self.value.offset_by(1);
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        if self.sentinel || other.sentinel {
            return self.sentinel == other.sentinel;
        }
        self.value == other.value
    }

    fn step_within(&mut self, count: usize, end: &Self) -> usize {
        let taken = if end.sentinel {
            count
        } else {
            count.min(usize::try_from(self.value.span_to(end.value)).unwrap_or(0))
        };
        self.value = self
            .value
            .offset_by(isize::try_from(taken).unwrap_or(isize::MAX));
        taken
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        if self.sentinel || end.sentinel {
            return None;
        }
        usize::try_from(self.value.span_to(end.value)).ok()
    }
}

impl<T: Counter> BidirectionalCursor for IotaCursor<T> {
    #[inline]
    fn dec(&mut self) {
        self.value = self.value.offset_by(-1);
    }
}

impl<T: Counter> OrderedCursor for IotaCursor<T> {
    fn is_less(&self, other: &Self) -> bool {
        match (self.sentinel, other.sentinel) {
            (false, false) => self.value < other.value,
            (false, true) => true,
            (true, _) => false,
        }
    }
}

impl<T: Counter> RandomAccessCursor for IotaCursor<T> {
    #[inline]
    fn advance(&mut self, offset: isize) {
        self.value = self.value.offset_by(offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        match (self.sentinel, other.sentinel) {
            (false, false) => self.value.span_to(other.value),
            (false, true) => isize::MAX,
            (true, false) => isize::MIN,
            (true, true) => 0,
        }
    }
}

/// Counts upward from `start` forever.
#[inline]
pub const fn iota<T: Counter>(start: T) -> Iota<T> {
    Iota::unbounded(start)
}

/// Counts from `start` up to (excluding) `end`.
#[inline]
pub fn iota_range<T: Counter>(start: T, end: T) -> Iota<T> {
    Iota::bounded(start, end)
}
