//! The chunk family: one engine, several boundary policies.
//!
//! [`Chunks`] walks its source and asks a [`BoundaryPolicy`] where the chunk
//! starting at the current position ends and where the next one begins.
//! Every chunk is a [`Subrange`] of the source cursor type. The engine
//! guarantees:
//!
//! - an empty source yields zero chunks, never one empty chunk;
//! - chunks are produced lazily, one boundary search per increment;
//! - the last chunk may be shorter than the others.
//!
//! | Method | Policy | Chunk end | Next start |
//! |--------|--------|-----------|------------|
//! | `chunk(n)` | [`ChunkPolicy`] | `n` ahead | chunk end |
//! | `slide(n)` | [`SlidePolicy`] | `n` ahead | one ahead |
//! | `split(x)` | [`SplitPolicy`] | first `x` | past the `x` |
//! | `split_on(p)` | [`SplitOnPolicy`] | first match of `p` | past the match |
//! | `chunk_by(r)` | [`ChunkByPolicy`] | first element not related to the run's first | chunk end |
//! | `chunk_by_key(k)` | [`ChunkByKeyPolicy`] | first element whose key differs | chunk end |

use std::borrow::Borrow;

use smallvec::SmallVec;

use crate::cursor::{Category, Cursor};
use crate::view::{Subrange, View};

/// Where a chunk ends and where the next chunk begins.
#[derive(Debug, Clone)]
pub struct Boundary<C> {
    /// One past the last element of the chunk.
    pub chunk_end: C,
    /// The first position of the next chunk.
    pub next_start: C,
}

/// Decides chunk boundaries for [`Chunks`].
pub trait BoundaryPolicy<C: Cursor>: Clone {
    /// Returns the boundary of the chunk starting at `start`.
    ///
    /// Called only when `start` is not equal to `end`. The returned
    /// `next_start` must lie strictly after `start` so that iteration makes
    /// progress.
    fn boundary(&self, start: &C, end: &C) -> Boundary<C>;

    /// The number of chunks left when `remaining` elements are left, if the
    /// policy can tell without searching.
    fn count_hint(&self, _remaining: usize) -> Option<usize> {
        None
    }
}

/// Advances a copy of `start` by up to `count` positions, stopping at `end`.
fn ahead<C: Cursor>(start: &C, count: usize, end: &C) -> C {
    let mut cursor = start.clone();
    cursor.step_within(count, end);
    cursor
}

/// Returns the first position in `[start, end)` failing `keep`, or `end`.
fn first_failing<C, F>(start: &C, end: &C, keep: F) -> C
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    let mut cursor = start.clone();
    while !cursor.is_equal(end) && keep(&cursor.get()) {
        cursor.inc();
    }
    cursor
}

// =============================================================================
// Policies
// =============================================================================

/// Consecutive, non-overlapping chunks of a fixed size.
#[derive(Debug, Clone, Copy)]
pub struct ChunkPolicy {
    size: usize,
}

impl ChunkPolicy {
    /// Creates the policy.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "chunk size must be positive");
        Self { size }
    }
}

impl<C: Cursor> BoundaryPolicy<C> for ChunkPolicy {
    fn boundary(&self, start: &C, end: &C) -> Boundary<C> {
        let chunk_end = ahead(start, self.size, end);
        Boundary {
            next_start: chunk_end.clone(),
            chunk_end,
        }
    }

    fn count_hint(&self, remaining: usize) -> Option<usize> {
        Some(remaining.div_ceil(self.size))
    }
}

/// Overlapping windows starting at every position.
#[derive(Debug, Clone, Copy)]
pub struct SlidePolicy {
    size: usize,
}

impl SlidePolicy {
    /// Creates the policy.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "window size must be positive");
        Self { size }
    }
}

impl<C: Cursor> BoundaryPolicy<C> for SlidePolicy {
    fn boundary(&self, start: &C, end: &C) -> Boundary<C> {
        Boundary {
            chunk_end: ahead(start, self.size, end),
            next_start: ahead(start, 1, end),
        }
    }

    fn count_hint(&self, remaining: usize) -> Option<usize> {
        Some(remaining)
    }
}

/// Chunks separated by a single delimiter element, which is dropped.
#[derive(Debug, Clone)]
pub struct SplitPolicy<T> {
    delimiter: T,
}

impl<T> SplitPolicy<T> {
    /// Creates the policy.
    pub const fn new(delimiter: T) -> Self {
        Self { delimiter }
    }
}

impl<C, T> BoundaryPolicy<C> for SplitPolicy<T>
where
    C: Cursor,
    C::Item: Borrow<T>,
    T: PartialEq + Clone,
{
    fn boundary(&self, start: &C, end: &C) -> Boundary<C> {
        let chunk_end = first_failing(start, end, |item| {
            <C::Item as Borrow<T>>::borrow(item) != &self.delimiter
        });
        let next_start = ahead(&chunk_end, 1, end);
        Boundary {
            chunk_end,
            next_start,
        }
    }
}

/// Chunks separated by a delimiter sequence, which is dropped.
///
/// An empty pattern never matches, so the whole remainder becomes a single
/// chunk.
#[derive(Debug, Clone)]
pub struct SplitOnPolicy<T> {
    pattern: SmallVec<[T; 4]>,
}

impl<T> SplitOnPolicy<T> {
    /// Creates the policy from the delimiter sequence.
    pub fn new<I: IntoIterator<Item = T>>(pattern: I) -> Self {
        Self {
            pattern: pattern.into_iter().collect(),
        }
    }

    /// Returns the end of the match starting at `at`, if the pattern
    /// matches there.
    fn match_at<C>(&self, at: &C, end: &C) -> Option<C>
    where
        C: Cursor,
        C::Item: Borrow<T>,
        T: PartialEq,
    {
        let mut cursor = at.clone();
        for expected in &self.pattern {
            if cursor.is_equal(end) || <C::Item as Borrow<T>>::borrow(&cursor.get()) != expected {
                return None;
            }
            cursor.inc();
        }
        Some(cursor)
    }
}

impl<C, T> BoundaryPolicy<C> for SplitOnPolicy<T>
where
    C: Cursor,
    C::Item: Borrow<T>,
    T: PartialEq + Clone,
{
    fn boundary(&self, start: &C, end: &C) -> Boundary<C> {
        let mut candidate = start.clone();
        if !self.pattern.is_empty() {
            while !candidate.is_equal(end) {
                if let Some(after_match) = self.match_at(&candidate, end) {
                    return Boundary {
                        chunk_end: candidate,
                        next_start: after_match,
                    };
                }
                candidate.inc();
            }
        } else {
            candidate = end.clone();
        }
        Boundary {
            next_start: candidate.clone(),
            chunk_end: candidate,
        }
    }
}

/// Runs of elements related to the first element of the run.
#[derive(Debug, Clone)]
pub struct ChunkByPolicy<F> {
    relation: F,
}

impl<F> ChunkByPolicy<F> {
    /// Creates the policy from a relation `(first_of_run, candidate)`.
    pub const fn new(relation: F) -> Self {
        Self { relation }
    }
}

impl<C, F> BoundaryPolicy<C> for ChunkByPolicy<F>
where
    C: Cursor,
    F: Fn(&C::Item, &C::Item) -> bool + Clone,
{
    fn boundary(&self, start: &C, end: &C) -> Boundary<C> {
        let first = start.get();
        let chunk_end = first_failing(&ahead(start, 1, end), end, |item| {
            (self.relation)(&first, item)
        });
        Boundary {
            next_start: chunk_end.clone(),
            chunk_end,
        }
    }
}

/// Runs of elements with equal keys.
#[derive(Debug, Clone)]
pub struct ChunkByKeyPolicy<F> {
    key: F,
}

impl<F> ChunkByKeyPolicy<F> {
    /// Creates the policy from a key projection.
    pub const fn new(key: F) -> Self {
        Self { key }
    }
}

impl<C, F, K> BoundaryPolicy<C> for ChunkByKeyPolicy<F>
where
    C: Cursor,
    F: Fn(&C::Item) -> K + Clone,
    K: PartialEq,
{
    fn boundary(&self, start: &C, end: &C) -> Boundary<C> {
        let run_key = (self.key)(&start.get());
        let chunk_end = first_failing(&ahead(start, 1, end), end, |item| {
            (self.key)(item) == run_key
        });
        Boundary {
            next_start: chunk_end.clone(),
            chunk_end,
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

/// A view of the chunks of its source, as decided by a [`BoundaryPolicy`].
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let windows: Vec<String> = all("1234")
///     .slide(3)
///     .iter()
///     .map(|window| window.to::<String>())
///     .collect();
/// assert_eq!(windows, vec!["123", "234", "34", "4"]);
///
/// let rows: Vec<Vec<i32>> = all(vec![1, 2, 3, 4, 5])
///     .chunk(2)
///     .iter()
///     .map(|row| row.to())
///     .collect();
/// assert_eq!(rows, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
#[derive(Debug, Clone)]
pub struct Chunks<V, P> {
    source: V,
    policy: P,
}

impl<V, P> Chunks<V, P> {
    /// Creates the view.
    #[inline]
    pub const fn new(source: V, policy: P) -> Self {
        Self { source, policy }
    }
}

impl<V, P> View for Chunks<V, P>
where
    V: View,
    P: BoundaryPolicy<V::Cursor>,
{
    type Cursor = ChunkCursor<V::Cursor, P>;

    fn begin(&self) -> Self::Cursor {
        ChunkCursor::new(self.source.begin(), self.source.end(), self.policy.clone())
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        ChunkCursor::new(end.clone(), end, self.policy.clone())
    }
}

/// The cursor of a [`Chunks`].
#[derive(Debug, Clone)]
pub struct ChunkCursor<C, P> {
    start: C,
    chunk_end: C,
    next_start: C,
    end: C,
    policy: P,
}

impl<C, P> ChunkCursor<C, P>
where
    C: Cursor,
    P: BoundaryPolicy<C>,
{
    fn new(start: C, end: C, policy: P) -> Self {
        let mut cursor = Self {
            chunk_end: start.clone(),
            next_start: start.clone(),
            start,
            end,
            policy,
        };
        cursor.locate();
        cursor
    }

    fn locate(&mut self) {
        if self.start.is_equal(&self.end) {
            self.chunk_end = self.end.clone();
            self.next_start = self.end.clone();
            return;
        }
        let Boundary {
            chunk_end,
            next_start,
        } = self.policy.boundary(&self.start, &self.end);
        self.chunk_end = chunk_end;
        self.next_start = next_start;
    }
}

impl<C, P> Cursor for ChunkCursor<C, P>
where
    C: Cursor,
    P: BoundaryPolicy<C>,
{
    type Item = Subrange<C>;

    const CATEGORY: Category = C::CATEGORY.weaker(Category::Forward);

    #[inline]
    fn get(&self) -> Subrange<C> {
        Subrange::new(self.start.clone(), self.chunk_end.clone())
    }

    fn inc(&mut self) {
        self.start = self.next_start.clone();
        self.locate();
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.start.is_equal(&other.start)
    }

    fn distance_hint(&self, end: &Self) -> Option<usize> {
        let remaining = self.start.distance_hint(&end.start)?;
        self.policy.count_hint(remaining)
    }
}

// =============================================================================
// GroupBy
// =============================================================================

/// A view of `(key, run)` pairs for runs of elements with equal keys.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
/// let groups: Vec<(char, usize)> = all(&words)
///     .group_by(|word| word.chars().next())
///     .iter()
///     .map(|(initial, run)| (initial.unwrap_or(' '), run.count()))
///     .collect();
/// assert_eq!(groups, vec![('a', 2), ('b', 2), ('c', 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct GroupBy<V, F> {
    chunks: Chunks<V, ChunkByKeyPolicy<F>>,
    key: F,
}

impl<V, F: Clone> GroupBy<V, F> {
    /// Creates the view.
    pub fn new(source: V, key: F) -> Self {
        Self {
            chunks: Chunks::new(source, ChunkByKeyPolicy::new(key.clone())),
            key,
        }
    }
}

impl<V, F, K> View for GroupBy<V, F>
where
    V: View,
    F: Fn(&<V::Cursor as Cursor>::Item) -> K + Clone,
    K: PartialEq,
{
    type Cursor = GroupCursor<V::Cursor, F>;

    fn begin(&self) -> Self::Cursor {
        GroupCursor {
            inner: self.chunks.begin(),
            key: self.key.clone(),
        }
    }

    fn end(&self) -> Self::Cursor {
        GroupCursor {
            inner: self.chunks.end(),
            key: self.key.clone(),
        }
    }
}

/// The cursor of a [`GroupBy`].
#[derive(Debug, Clone)]
pub struct GroupCursor<C, F> {
    inner: ChunkCursor<C, ChunkByKeyPolicy<F>>,
    key: F,
}

impl<C, F, K> Cursor for GroupCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> K + Clone,
    K: PartialEq,
{
    type Item = (K, Subrange<C>);

    const CATEGORY: Category = C::CATEGORY.weaker(Category::Forward);

    fn get(&self) -> Self::Item {
        let run = self.inner.get();
        ((self.key)(&run.begin().get()), run)
    }

    #[inline]
    fn inc(&mut self) {
        self.inner.inc();
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.inner.is_equal(&other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{all, iota};
    use rstest::rstest;

    fn collected<V, C>(view: &V) -> Vec<Vec<i32>>
    where
        V: View,
        V::Cursor: Cursor<Item = Subrange<C>>,
        C: Cursor<Item = i32>,
    {
        view.iter().map(|chunk| chunk.to()).collect()
    }

    #[rstest]
    #[case(0, 3, 0)]
    #[case(1, 3, 1)]
    #[case(6, 3, 2)]
    #[case(7, 3, 3)]
    #[case(7, 1, 7)]
    fn test_chunk_count_is_ceiling(#[case] length: usize, #[case] size: usize, #[case] expected: usize) {
        let view = all((0..length).collect::<Vec<_>>()).chunk(size);
        assert_eq!(view.count(), expected);
        assert_eq!(view.iter().size_hint(), (expected, Some(expected)));
    }

    #[test]
    fn test_chunk_last_is_short() {
        let view = all(vec![1, 2, 3, 4, 5]).chunk(2);
        assert_eq!(collected(&view), vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_chunk_of_empty_is_empty() {
        assert!(all(Vec::<i32>::new()).chunk(4).is_empty());
        assert!(all(Vec::<i32>::new()).slide(4).is_empty());
        assert!(all(Vec::<i32>::new()).split(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "chunk size must be positive")]
    fn test_zero_chunk_size_panics() {
        let _ = all(vec![1]).chunk(0);
    }

    #[test]
    fn test_slide_produces_one_window_per_position() {
        let view = all(vec![1, 2, 3, 4]).slide(2);
        assert_eq!(
            collected(&view),
            vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4]]
        );
    }

    #[test]
    fn test_split_drops_delimiters() {
        let view = all(vec![1, 0, 2, 3, 0, 0, 4]).split(0);
        assert_eq!(
            collected(&view),
            vec![vec![1], vec![2, 3], vec![], vec![4]]
        );
    }

    #[test]
    fn test_split_leading_delimiter_gives_empty_first_chunk() {
        let view = all(vec![0, 1]).split(0);
        assert_eq!(collected(&view), vec![vec![], vec![1]]);
    }

    #[test]
    fn test_split_borrowed_items() {
        let line: Vec<i32> = vec![1, 9, 2];
        let parts: Vec<usize> = all(&line).split(9_i32).iter().map(|part| part.count()).collect();
        assert_eq!(parts, vec![1, 1]);
    }

    #[test]
    fn test_split_on_sequence() {
        let words: Vec<String> = all("one--two--three")
            .split_on("--".chars())
            .iter()
            .map(|word| word.to())
            .collect();
        assert_eq!(words, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_split_on_empty_pattern_is_one_chunk() {
        let view = all(vec![1, 2, 3]).split_on(Vec::<i32>::new());
        assert_eq!(collected(&view), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_split_on_partial_match_at_end() {
        let view = all(vec![1, 2, 1]).split_on([1, 2]);
        assert_eq!(collected(&view), vec![vec![], vec![1]]);
    }

    #[test]
    fn test_chunk_by_relates_to_first_of_run() {
        let view = all(vec![1, 2, 3, 4, 10, 11]).chunk_by(|first, next| next - first < 3);
        assert_eq!(
            collected(&view),
            vec![vec![1, 2, 3], vec![4], vec![10, 11]]
        );
    }

    #[test]
    fn test_chunk_by_key() {
        let view = all(vec![1, 3, 2, 4, 5]).chunk_by_key(|value| value % 2);
        assert_eq!(collected(&view), vec![vec![1, 3], vec![2, 4], vec![5]]);
    }

    #[test]
    fn test_group_by_yields_keys() {
        let keys: Vec<i32> = all(vec![1, 1, 2, 3, 3])
            .group_by(|value| *value)
            .iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn test_chunks_of_infinite_source() {
        let rows: Vec<Vec<u32>> = iota(0_u32)
            .chunk(3)
            .take(2)
            .iter()
            .map(|row| row.to())
            .collect();
        assert_eq!(rows, vec![vec![0, 1, 2], vec![3, 4, 5]]);
    }
}
