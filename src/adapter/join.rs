//! Flattening a view of ranges.

use crate::cursor::{Category, Cursor};
use crate::source::IntoView;
use crate::view::{View, ViewItem};

/// The cursor type of the range produced by dereferencing an outer cursor.
type InnerCursor<C> = <<<C as Cursor>::Item as IntoView>::View as View>::Cursor;

/// Builds the inner cursor pair for the outer element under `outer`.
fn open_inner<C>(outer: &C) -> (InnerCursor<C>, InnerCursor<C>)
where
    C: Cursor,
    C::Item: IntoView,
{
    let inner = outer.get().into_view();
    (inner.begin(), inner.end())
}

// =============================================================================
// Join
// =============================================================================

/// A view flattening one level of nesting.
///
/// Each element of the source is normalized with [`IntoView`], so the
/// source may yield containers, borrowed containers, strings or views.
/// Empty inner ranges are skipped.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let words = vec!["Alpha", "Beta", "Gamma"];
/// let joined: String = all(words).join().to();
/// assert_eq!(joined, "AlphaBetaGamma");
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// let flat: Vec<&i32> = all(&nested).join().to();
/// assert_eq!(flat, vec![&1, &2, &3]);
/// ```
#[derive(Debug, Clone)]
pub struct Join<V> {
    source: V,
}

impl<V> Join<V> {
    /// Creates the view.
    #[inline]
    pub const fn new(source: V) -> Self {
        Self { source }
    }
}

impl<V> View for Join<V>
where
    V: View,
    ViewItem<V>: IntoView,
{
    type Cursor = JoinCursor<V::Cursor, InnerCursor<V::Cursor>>;

    fn begin(&self) -> Self::Cursor {
        let mut cursor = JoinCursor {
            outer: self.source.begin(),
            outer_end: self.source.end(),
            inner: None,
        };
        cursor.settle();
        cursor
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        JoinCursor {
            outer: end.clone(),
            outer_end: end,
            inner: None,
        }
    }
}

/// The cursor of a [`Join`].
///
/// Unless the outer cursor is at its end, `inner` holds a non-empty range
/// built from the current outer element. The end cursor carries no inner
/// state, so reaching the end is decided by the outer cursor alone.
#[derive(Debug, Clone)]
pub struct JoinCursor<O, I> {
    outer: O,
    outer_end: O,
    inner: Option<(I, I)>,
}

impl<O, I> JoinCursor<O, I>
where
    O: Cursor,
    O::Item: IntoView,
    <O::Item as IntoView>::View: View<Cursor = I>,
    I: Cursor,
{
    fn settle(&mut self) {
        loop {
            if let Some((current, end)) = &self.inner {
                if !current.is_equal(end) {
                    return;
                }
                self.outer.inc();
                self.inner = None;
            }
            if self.outer.is_equal(&self.outer_end) {
                return;
            }
            self.inner = Some(open_inner(&self.outer));
        }
    }
}

impl<O, I> Cursor for JoinCursor<O, I>
where
    O: Cursor,
    O::Item: IntoView,
    <O::Item as IntoView>::View: View<Cursor = I>,
    I: Cursor,
{
    type Item = I::Item;

    const CATEGORY: Category = O::CATEGORY
        .weaker(I::CATEGORY)
        .weaker(Category::Forward);

    fn get(&self) -> I::Item {
        match &self.inner {
            Some((current, _)) => current.get(),
            None => panic!("dereferenced the end of a joined view"),
        }
    }

    fn inc(&mut self) {
        if let Some((current, _)) = &mut self.inner {
            current.inc();
        }
        self.settle();
    }

    fn is_equal(&self, other: &Self) -> bool {
        if !self.outer.is_equal(&other.outer) {
            return false;
        }
        match (&self.inner, &other.inner) {
            (Some((left, _)), Some((right, _))) => left.is_equal(right),
            (None, None) => true,
            _ => false,
        }
    }
}

// =============================================================================
// JoinWith
// =============================================================================

/// A view flattening one level of nesting with a delimiter range between
/// consecutive inner ranges.
///
/// Unlike [`Join`], empty inner ranges still count as elements: a
/// delimiter separates every pair of adjacent outer elements.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let words = vec!["Alpha", "Beta", "Gamma"];
/// let joined: String = all(words).join_with(", ").to();
/// assert_eq!(joined, "Alpha, Beta, Gamma");
/// ```
#[derive(Debug, Clone)]
pub struct JoinWith<V, D> {
    source: V,
    delimiter: D,
}

impl<V, D> JoinWith<V, D> {
    /// Creates the view.
    #[inline]
    pub const fn new(source: V, delimiter: D) -> Self {
        Self { source, delimiter }
    }
}

impl<V, D> View for JoinWith<V, D>
where
    V: View,
    ViewItem<V>: IntoView,
    D: View,
    D::Cursor: Cursor<Item = <InnerCursor<V::Cursor> as Cursor>::Item>,
{
    type Cursor = JoinWithCursor<V::Cursor, InnerCursor<V::Cursor>, D::Cursor>;

    fn begin(&self) -> Self::Cursor {
        let outer = self.source.begin();
        let outer_end = self.source.end();
        let segment = if outer.is_equal(&outer_end) {
            Segment::Done
        } else {
            let (current, end) = open_inner(&outer);
            Segment::Inner { current, end }
        };
        let mut cursor = JoinWithCursor {
            outer,
            outer_end,
            delimiter_begin: self.delimiter.begin(),
            delimiter_end: self.delimiter.end(),
            segment,
        };
        cursor.settle();
        cursor
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        JoinWithCursor {
            outer: end.clone(),
            outer_end: end,
            delimiter_begin: self.delimiter.begin(),
            delimiter_end: self.delimiter.end(),
            segment: Segment::Done,
        }
    }
}

/// Where a [`JoinWithCursor`] currently reads from.
#[derive(Debug, Clone)]
enum Segment<I, D> {
    Inner { current: I, end: I },
    Delimiter { current: D },
    Done,
}

enum Transition {
    LeaveInner,
    EnterInner,
}

/// The cursor of a [`JoinWith`].
#[derive(Debug, Clone)]
pub struct JoinWithCursor<O, I, D> {
    outer: O,
    outer_end: O,
    delimiter_begin: D,
    delimiter_end: D,
    segment: Segment<I, D>,
}

impl<O, I, D> JoinWithCursor<O, I, D>
where
    O: Cursor,
    O::Item: IntoView,
    <O::Item as IntoView>::View: View<Cursor = I>,
    I: Cursor,
    D: Cursor<Item = I::Item>,
{
    fn settle(&mut self) {
        loop {
            let transition = match &self.segment {
                Segment::Inner { current, end } if current.is_equal(end) => Transition::LeaveInner,
                Segment::Delimiter { current } if current.is_equal(&self.delimiter_end) => {
                    Transition::EnterInner
                }
                _ => return,
            };
            match transition {
                Transition::LeaveInner => {
                    self.outer.inc();
                    self.segment = if self.outer.is_equal(&self.outer_end) {
                        Segment::Done
                    } else {
                        Segment::Delimiter {
                            current: self.delimiter_begin.clone(),
                        }
                    };
                }
                Transition::EnterInner => {
                    let (current, end) = open_inner(&self.outer);
                    self.segment = Segment::Inner { current, end };
                }
            }
        }
    }
}

impl<O, I, D> Cursor for JoinWithCursor<O, I, D>
where
    O: Cursor,
    O::Item: IntoView,
    <O::Item as IntoView>::View: View<Cursor = I>,
    I: Cursor,
    D: Cursor<Item = I::Item>,
{
    type Item = I::Item;

    const CATEGORY: Category = O::CATEGORY
        .weaker(I::CATEGORY)
        .weaker(D::CATEGORY)
        .weaker(Category::Forward);

    fn get(&self) -> I::Item {
        match &self.segment {
            Segment::Inner { current, .. } => current.get(),
            Segment::Delimiter { current } => current.get(),
            Segment::Done => panic!("dereferenced the end of a joined view"),
        }
    }

    fn inc(&mut self) {
        match &mut self.segment {
            Segment::Inner { current, .. } => current.inc(),
            Segment::Delimiter { current } => current.inc(),
            Segment::Done => return,
        }
        self.settle();
    }

    fn is_equal(&self, other: &Self) -> bool {
        if !self.outer.is_equal(&other.outer) {
            return false;
        }
        match (&self.segment, &other.segment) {
            (Segment::Inner { current: left, .. }, Segment::Inner { current: right, .. }) => {
                left.is_equal(right)
            }
            (Segment::Delimiter { current: left }, Segment::Delimiter { current: right }) => {
                left.is_equal(right)
            }
            (Segment::Done, Segment::Done) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{all, iota_range};

    #[test]
    fn test_join_skips_empty_inner_ranges() {
        let nested: Vec<Vec<i32>> = vec![vec![], vec![1], vec![], vec![], vec![2, 3], vec![]];
        assert_eq!(all(nested).join().to::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_join_all_empty() {
        let nested: Vec<Vec<i32>> = vec![vec![], vec![]];
        assert!(all(nested).join().is_empty());
    }

    #[test]
    fn test_join_take_inside_first_inner() {
        let nested = vec![vec![1, 2, 3], vec![4]];
        let view = all(&nested).join();
        assert_eq!(view.take(2).to::<Vec<_>>(), vec![&1, &2]);
        assert_eq!(view.drop(2).to::<Vec<_>>(), vec![&3, &4]);
    }

    #[test]
    fn test_join_of_generated_ranges() {
        let triangle: Vec<u8> = iota_range(1_u8, 4)
            .transform(|length| iota_range(0_u8, length))
            .join()
            .to();
        assert_eq!(triangle, vec![0, 0, 1, 0, 1, 2]);
    }

    #[test]
    fn test_join_with_keeps_empty_elements() {
        let parts = vec!["a", "", "b"];
        assert_eq!(all(parts).join_with(",").to::<String>(), "a,,b");
    }

    #[test]
    fn test_join_with_empty_delimiter() {
        let parts = vec!["ab", "cd"];
        assert_eq!(all(parts).join_with("").to::<String>(), "abcd");
    }

    #[test]
    fn test_join_with_single_and_empty_outer() {
        assert_eq!(all(vec!["solo"]).join_with(", ").to::<String>(), "solo");
        assert!(all(Vec::<&str>::new()).join_with(", ").is_empty());
    }

    #[test]
    fn test_join_with_numbers() {
        let rows = vec![vec![1, 2], vec![3]];
        let flat: Vec<i32> = all(rows).join_with(vec![0, 0]).to();
        assert_eq!(flat, vec![1, 2, 0, 0, 3]);
    }

    #[test]
    fn test_transform_join_calls_function_once_per_element() {
        let calls = std::cell::Cell::new(0);
        let counter = &calls;
        let view = all(vec![2_usize, 0, 3]).transform_join(move |length| {
            counter.set(counter.get() + 1);
            vec!['x'; length]
        });
        assert_eq!(view.to::<String>(), "xxxxx");
        assert_eq!(calls.get(), 3);
    }
}
