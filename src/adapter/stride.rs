//! Keeping every n-th element.

use crate::cursor::{Category, Cursor};
use crate::view::View;

/// A view of every `step`-th element of its source, starting with the
/// first.
///
/// Each increment moves the source cursor `step` positions but never past
/// the source's end, so the last stride lands exactly on `end()`.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// assert_eq!(all(0..10_i32).stride(3).to::<Vec<_>>(), vec![0, 3, 6, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct Stride<V> {
    source: V,
    step: usize,
}

impl<V> Stride<V> {
    /// Creates the view.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    #[inline]
    pub fn new(source: V, step: usize) -> Self {
        assert!(step > 0, "stride step must be positive");
        Self { source, step }
    }
}

impl<V: View> View for Stride<V> {
    type Cursor = StrideCursor<V::Cursor>;

    fn begin(&self) -> Self::Cursor {
        StrideCursor {
            inner: self.source.begin(),
            end: self.source.end(),
            step: self.step,
        }
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        StrideCursor {
            inner: end.clone(),
            end,
            step: self.step,
        }
    }
}

/// The cursor of a [`Stride`].
#[derive(Debug, Clone)]
pub struct StrideCursor<C> {
    inner: C,
    end: C,
    step: usize,
}

impl<C: Cursor> Cursor for StrideCursor<C> {
    type Item = C::Item;

    const CATEGORY: Category = C::CATEGORY.weaker(Category::Forward);

    #[inline]
    fn get(&self) -> C::Item {
        self.inner.get()
    }

    #[inline]
    fn inc(&mut self) {
        self.inner.step_within(self.step, &self.end);
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.inner.is_equal(&other.inner)
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        self.inner
            .distance_hint(&end.inner)
            .map(|remaining| remaining.div_ceil(self.step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{all, iota};

    #[test]
    fn test_stride_exact_multiple() {
        assert_eq!(all(vec![1, 2, 3, 4]).stride(2).to::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_stride_count_matches_hint() {
        let view = all(0..10_u32).stride(4);
        assert_eq!(view.iter().size_hint(), (3, Some(3)));
        assert_eq!(view.count(), 3);
    }

    #[test]
    fn test_stride_one_is_identity() {
        assert_eq!(all("abc").stride(1).to::<String>(), "abc");
    }

    #[test]
    fn test_stride_over_infinite_source() {
        assert_eq!(iota(1_u16).stride(5).take(3).to::<Vec<_>>(), vec![1, 6, 11]);
    }

    #[test]
    #[should_panic(expected = "stride step must be positive")]
    fn test_zero_step_panics() {
        let _ = all(vec![1]).stride(0);
    }
}
