//! Placing a delimiter between consecutive elements.

use crate::cursor::{Category, Cursor};
use crate::view::View;

/// A view alternating the elements of its source with a delimiter.
///
/// A source of `N` elements yields `2N - 1` elements, or none when `N` is
/// zero: the delimiter never leads or trails.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let spaced: String = all("abc").intersperse('-').to();
/// assert_eq!(spaced, "a-b-c");
/// ```
#[derive(Debug, Clone)]
pub struct Intersperse<V, T> {
    source: V,
    delimiter: T,
}

impl<V, T> Intersperse<V, T> {
    /// Creates the view.
    #[inline]
    pub const fn new(source: V, delimiter: T) -> Self {
        Self { source, delimiter }
    }
}

impl<V, T> View for Intersperse<V, T>
where
    V: View,
    V::Cursor: Cursor<Item = T>,
    T: Clone,
{
    type Cursor = IntersperseCursor<V::Cursor, T>;

    fn begin(&self) -> Self::Cursor {
        IntersperseCursor {
            inner: self.source.begin(),
            end: self.source.end(),
            delimiter: self.delimiter.clone(),
            on_delimiter: false,
        }
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        IntersperseCursor {
            inner: end.clone(),
            end,
            delimiter: self.delimiter.clone(),
            on_delimiter: false,
        }
    }
}

/// The cursor of an [`Intersperse`].
///
/// On a delimiter, `inner` already points at the element that follows it.
#[derive(Debug, Clone)]
pub struct IntersperseCursor<C, T> {
    inner: C,
    end: C,
    delimiter: T,
    on_delimiter: bool,
}

impl<C, T> Cursor for IntersperseCursor<C, T>
where
    C: Cursor<Item = T>,
    T: Clone,
{
    type Item = T;

    const CATEGORY: Category = C::CATEGORY.weaker(Category::Forward);

    #[inline]
    fn get(&self) -> T {
        if self.on_delimiter {
            self.delimiter.clone()
        } else {
            self.inner.get()
        }
    }

    fn inc(&mut self) {
        if self.on_delimiter {
            self.on_delimiter = false;
        } else {
            self.inner.inc();
            self.on_delimiter = !self.inner.is_equal(&self.end);
        }
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.on_delimiter == other.on_delimiter && self.inner.is_equal(&other.inner)
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        let remaining = self.inner.distance_hint(&end.inner)?;
        if self.on_delimiter {
            remaining.checked_mul(2)
        } else {
            Some(remaining.saturating_mul(2).saturating_sub(1))
        }
    }
}
