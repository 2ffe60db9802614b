//! Adapter factories as one-stage pipelines.
//!
//! Each factory takes an adapter's configuration and returns a
//! [`Pipeline`] with one stage. When the pipeline runs, the stage
//! normalizes its input with [`IntoView`], so a stage accepts containers,
//! borrowed containers, strings, integer ranges and views alike.
//!
//! Closures passed to these factories are created before the input type is
//! known, so their parameter types must be written out. The methods of
//! [`View`] infer them instead.
//!
//! Several factory names (`drop`, `take`, `concat`, ...) coincide with
//! functions elsewhere; this module is meant to be used by path, as
//! `stages::filter(...)`.
//!
//! # Examples
//!
//! ```rust
//! use pipeview::prelude::*;
//!
//! let data = vec![5, 1, 4, 2, 3];
//! let pipeline = stages::enumerate()
//!     | stages::filter(|(_, value): &(usize, &i32)| **value > 2)
//!     | stages::transform(|(index, _): (usize, &i32)| index)
//!     | stages::to::<Vec<_>>();
//! assert_eq!((&data).pipe(pipeline), vec![0, 2, 4]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::adapter::{
    Cache1, ChunkByKeyPolicy, ChunkByPolicy, ChunkPolicy, Chunks, Concat, DropWhile, Enumerate,
    Filter, GroupBy, Intersperse, Join, JoinWith, Reverse, SlidePolicy, SplitOnPolicy,
    SplitPolicy, Stride, Transform, Zip,
};
use crate::cursor::Cursor;
use crate::pipeline::{Pipeline, Stage};
use crate::source::IntoView;
use crate::view::{Subrange, View, ViewItem};

/// A one-stage pipeline.
pub type Single<S> = Pipeline<(S, ())>;

/// The cursor of the view an input normalizes to.
type SourceCursor<In> = <<In as IntoView>::View as View>::Cursor;

// =============================================================================
// Normalization and collection
// =============================================================================

/// Stage produced by [`all`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AllStage;

impl<In: IntoView> Stage<In> for AllStage {
    type Output = In::View;

    #[inline]
    fn run(self, input: In) -> In::View {
        input.into_view()
    }
}

/// Normalizes the input into a view without changing it.
#[inline]
pub const fn all() -> Single<AllStage> {
    Pipeline::single(AllStage)
}

/// Stage produced by [`to`].
pub struct ToStage<B> {
    target: PhantomData<fn() -> B>,
}

impl<B> Clone for ToStage<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for ToStage<B> {}

impl<B> fmt::Debug for ToStage<B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ToStage").finish()
    }
}

impl<In, B> Stage<In> for ToStage<B>
where
    In: IntoView,
    B: FromIterator<ViewItem<In::View>>,
{
    type Output = B;

    #[inline]
    fn run(self, input: In) -> B {
        input.into_view().to()
    }
}

/// Collects the input into a container; usually the last stage.
#[inline]
pub const fn to<B>() -> Single<ToStage<B>> {
    Pipeline::single(ToStage {
        target: PhantomData,
    })
}

// =============================================================================
// Element-wise
// =============================================================================

/// Stage produced by [`transform`].
#[derive(Debug, Clone, Copy)]
pub struct TransformStage<F> {
    function: F,
}

impl<In: IntoView, F> Stage<In> for TransformStage<F> {
    type Output = Transform<In::View, F>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Transform::new(input.into_view(), self.function)
    }
}

/// See [`View::transform`].
#[inline]
pub const fn transform<F>(function: F) -> Single<TransformStage<F>> {
    Pipeline::single(TransformStage { function })
}

/// Stage produced by [`filter`].
#[derive(Debug, Clone, Copy)]
pub struct FilterStage<P> {
    predicate: P,
}

impl<In: IntoView, P> Stage<In> for FilterStage<P> {
    type Output = Filter<In::View, P>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Filter::new(input.into_view(), self.predicate)
    }
}

/// See [`View::filter`].
#[inline]
pub const fn filter<P>(predicate: P) -> Single<FilterStage<P>> {
    Pipeline::single(FilterStage { predicate })
}

/// Stage produced by [`enumerate`] and [`enumerate_from`].
#[derive(Debug, Clone, Copy)]
pub struct EnumerateStage {
    start: usize,
}

impl<In: IntoView> Stage<In> for EnumerateStage {
    type Output = Enumerate<In::View>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Enumerate::new(input.into_view(), self.start)
    }
}

/// See [`View::enumerate`].
#[inline]
pub const fn enumerate() -> Single<EnumerateStage> {
    enumerate_from(0)
}

/// See [`View::enumerate_from`].
#[inline]
pub const fn enumerate_from(start: usize) -> Single<EnumerateStage> {
    Pipeline::single(EnumerateStage { start })
}

/// Stage produced by [`reverse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseStage;

impl<In: IntoView> Stage<In> for ReverseStage {
    type Output = Reverse<In::View>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Reverse::new(input.into_view())
    }
}

/// See [`View::reverse`].
#[inline]
pub const fn reverse() -> Single<ReverseStage> {
    Pipeline::single(ReverseStage)
}

/// Stage produced by [`stride`].
#[derive(Debug, Clone, Copy)]
pub struct StrideStage {
    step: usize,
}

impl<In: IntoView> Stage<In> for StrideStage {
    type Output = Stride<In::View>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Stride::new(input.into_view(), self.step)
    }
}

/// See [`View::stride`].
///
/// # Panics
///
/// Panics if `step` is zero.
#[inline]
pub fn stride(step: usize) -> Single<StrideStage> {
    assert!(step > 0, "stride step must be positive");
    Pipeline::single(StrideStage { step })
}

/// Stage produced by [`cache1`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Cache1Stage;

impl<In: IntoView> Stage<In> for Cache1Stage {
    type Output = Cache1<In::View>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Cache1::new(input.into_view())
    }
}

/// See [`View::cache1`].
#[inline]
pub const fn cache1() -> Single<Cache1Stage> {
    Pipeline::single(Cache1Stage)
}

// =============================================================================
// Bounds
// =============================================================================

/// Stage produced by [`take`].
#[derive(Debug, Clone, Copy)]
pub struct TakeStage {
    count: usize,
}

impl<In: IntoView> Stage<In> for TakeStage {
    type Output = Subrange<SourceCursor<In>>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        input.into_view().take(self.count)
    }
}

/// See [`View::take`].
#[inline]
pub const fn take(count: usize) -> Single<TakeStage> {
    Pipeline::single(TakeStage { count })
}

/// Stage produced by [`drop`].
#[derive(Debug, Clone, Copy)]
pub struct DropStage {
    count: usize,
}

impl<In: IntoView> Stage<In> for DropStage {
    type Output = Subrange<SourceCursor<In>>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        View::drop(&input.into_view(), self.count)
    }
}

/// See [`View::drop`].
#[inline]
pub const fn drop(count: usize) -> Single<DropStage> {
    Pipeline::single(DropStage { count })
}

/// Stage produced by [`take_while`].
#[derive(Debug, Clone, Copy)]
pub struct TakeWhileStage<P> {
    predicate: P,
}

impl<In, P> Stage<In> for TakeWhileStage<P>
where
    In: IntoView,
    P: Fn(&ViewItem<In::View>) -> bool,
{
    type Output = Subrange<SourceCursor<In>>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        input.into_view().take_while(self.predicate)
    }
}

/// See [`View::take_while`].
#[inline]
pub const fn take_while<P>(predicate: P) -> Single<TakeWhileStage<P>> {
    Pipeline::single(TakeWhileStage { predicate })
}

/// Stage produced by [`drop_while`].
#[derive(Debug, Clone, Copy)]
pub struct DropWhileStage<P> {
    predicate: P,
}

impl<In: IntoView, P> Stage<In> for DropWhileStage<P> {
    type Output = DropWhile<In::View, P>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        DropWhile::new(input.into_view(), self.predicate)
    }
}

/// See [`View::drop_while`].
#[inline]
pub const fn drop_while<P>(predicate: P) -> Single<DropWhileStage<P>> {
    Pipeline::single(DropWhileStage { predicate })
}

// =============================================================================
// Combination
// =============================================================================

/// Stage produced by [`zip_with`].
#[derive(Debug, Clone, Copy)]
pub struct ZipWithStage<O> {
    other: O,
}

impl<In: IntoView, O: IntoView> Stage<In> for ZipWithStage<O> {
    type Output = Zip<(In::View, O::View)>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Zip::new((input.into_view(), self.other.into_view()))
    }
}

/// Pairs the input with `other`; see [`View::zip_with`].
#[inline]
pub const fn zip_with<O>(other: O) -> Single<ZipWithStage<O>> {
    Pipeline::single(ZipWithStage { other })
}

/// Stage produced by [`concat`].
#[derive(Debug, Clone, Copy)]
pub struct ConcatStage<O> {
    other: O,
}

impl<In: IntoView, O: IntoView> Stage<In> for ConcatStage<O> {
    type Output = Concat<In::View, O::View>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Concat::new(input.into_view(), self.other.into_view())
    }
}

/// Appends `other` to the input; see [`View::concat`].
#[inline]
pub const fn concat<O>(other: O) -> Single<ConcatStage<O>> {
    Pipeline::single(ConcatStage { other })
}

/// Stage produced by [`intersperse`].
#[derive(Debug, Clone, Copy)]
pub struct IntersperseStage<T> {
    delimiter: T,
}

impl<In: IntoView, T> Stage<In> for IntersperseStage<T> {
    type Output = Intersperse<In::View, T>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Intersperse::new(input.into_view(), self.delimiter)
    }
}

/// See [`View::intersperse`].
#[inline]
pub const fn intersperse<T>(delimiter: T) -> Single<IntersperseStage<T>> {
    Pipeline::single(IntersperseStage { delimiter })
}

/// Stage produced by [`join`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinStage;

impl<In: IntoView> Stage<In> for JoinStage {
    type Output = Join<In::View>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Join::new(input.into_view())
    }
}

/// See [`View::join`].
#[inline]
pub const fn join() -> Single<JoinStage> {
    Pipeline::single(JoinStage)
}

/// Stage produced by [`join_with`].
#[derive(Debug, Clone, Copy)]
pub struct JoinWithStage<D> {
    delimiter: D,
}

impl<In: IntoView, D: IntoView> Stage<In> for JoinWithStage<D> {
    type Output = JoinWith<In::View, D::View>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        JoinWith::new(input.into_view(), self.delimiter.into_view())
    }
}

/// See [`View::join_with`].
#[inline]
pub const fn join_with<D>(delimiter: D) -> Single<JoinWithStage<D>> {
    Pipeline::single(JoinWithStage { delimiter })
}

/// Stage produced by [`transform_join`].
#[derive(Debug, Clone, Copy)]
pub struct TransformJoinStage<F> {
    function: F,
}

impl<In: IntoView, F> Stage<In> for TransformJoinStage<F> {
    type Output = Join<Cache1<Transform<In::View, F>>>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Join::new(Cache1::new(Transform::new(input.into_view(), self.function)))
    }
}

/// See [`View::transform_join`].
#[inline]
pub const fn transform_join<F>(function: F) -> Single<TransformJoinStage<F>> {
    Pipeline::single(TransformJoinStage { function })
}

// =============================================================================
// Chunking
// =============================================================================

/// Stage produced by the chunk family: applies a boundary policy.
#[derive(Debug, Clone, Copy)]
pub struct ChunkStage<P> {
    policy: P,
}

impl<In: IntoView, P> Stage<In> for ChunkStage<P> {
    type Output = Chunks<In::View, P>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        Chunks::new(input.into_view(), self.policy)
    }
}

const fn chunk_stage<P>(policy: P) -> Single<ChunkStage<P>> {
    Pipeline::single(ChunkStage { policy })
}

/// See [`View::chunk`].
///
/// # Panics
///
/// Panics if `size` is zero.
#[inline]
pub fn chunk(size: usize) -> Single<ChunkStage<ChunkPolicy>> {
    chunk_stage(ChunkPolicy::new(size))
}

/// See [`View::slide`].
///
/// # Panics
///
/// Panics if `size` is zero.
#[inline]
pub fn slide(size: usize) -> Single<ChunkStage<SlidePolicy>> {
    chunk_stage(SlidePolicy::new(size))
}

/// See [`View::split`].
#[inline]
pub const fn split<T>(delimiter: T) -> Single<ChunkStage<SplitPolicy<T>>> {
    chunk_stage(SplitPolicy::new(delimiter))
}

/// See [`View::split_on`].
#[inline]
pub fn split_on<I>(pattern: I) -> Single<ChunkStage<SplitOnPolicy<I::Item>>>
where
    I: IntoIterator,
{
    chunk_stage(SplitOnPolicy::new(pattern))
}

/// See [`View::chunk_by`].
#[inline]
pub const fn chunk_by<F>(relation: F) -> Single<ChunkStage<ChunkByPolicy<F>>> {
    chunk_stage(ChunkByPolicy::new(relation))
}

/// See [`View::chunk_by_key`].
#[inline]
pub const fn chunk_by_key<F>(key: F) -> Single<ChunkStage<ChunkByKeyPolicy<F>>> {
    chunk_stage(ChunkByKeyPolicy::new(key))
}

/// Stage produced by [`group_by`].
#[derive(Debug, Clone, Copy)]
pub struct GroupByStage<F> {
    key: F,
}

impl<In: IntoView, F: Clone> Stage<In> for GroupByStage<F> {
    type Output = GroupBy<In::View, F>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        GroupBy::new(input.into_view(), self.key)
    }
}

/// See [`View::group_by`].
#[inline]
pub const fn group_by<F>(key: F) -> Single<GroupByStage<F>> {
    Pipeline::single(GroupByStage { key })
}

// =============================================================================
// Erasure
// =============================================================================

/// Stage produced by [`erase`].
#[cfg(feature = "erase")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EraseStage;

#[cfg(feature = "erase")]
impl<In> Stage<In> for EraseStage
where
    In: IntoView,
    In::View: 'static,
    SourceCursor<In>: 'static,
{
    type Output = crate::erase::AnyView<<SourceCursor<In> as Cursor>::Item>;

    #[inline]
    fn run(self, input: In) -> Self::Output {
        crate::erase::AnyView::new(input.into_view())
    }
}

/// See [`View::erase`].
#[cfg(feature = "erase")]
#[inline]
pub const fn erase() -> Single<EraseStage> {
    Pipeline::single(EraseStage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{PipeExt, stage};
    use crate::source::iota;
    use rstest::rstest;

    #[test]
    fn test_stage_accepts_borrowed_and_owned_input() {
        let data = vec![1, 2, 3];
        let borrowed: Vec<&i32> = (&data).pipe(take(2) | to());
        let owned: Vec<i32> = data.clone().pipe(take(2) | to());
        assert_eq!(borrowed, vec![&1, &2]);
        assert_eq!(owned, vec![1, 2]);
    }

    #[test]
    fn test_stage_passes_views_through() {
        let result: Vec<u32> = iota(1_u32).pipe(
            filter(|value: &u32| value % 3 == 0) | take(3) | to(),
        );
        assert_eq!(result, vec![3, 6, 9]);
    }

    #[test]
    fn test_pipeline_is_reusable_when_copy() {
        let pipeline = drop(1) | reverse() | to::<String>();
        assert_eq!("abc".pipe(pipeline), "cb");
        assert_eq!("xyz".pipe(pipeline), "zy");
    }

    #[test]
    fn test_bounds_on_text() {
        let word: String = "  padded".pipe(drop_while(|character: &char| *character == ' ') | to());
        assert_eq!(word, "padded");
        let head: String =
            "abc123".pipe(take_while(|character: &char| character.is_alphabetic()) | to());
        assert_eq!(head, "abc");
    }

    #[test]
    fn test_enumerate_from_and_stride() {
        let result: Vec<(usize, i32)> =
            vec![10, 20, 30, 40, 50].pipe(stride(2) | enumerate_from(1) | to());
        assert_eq!(result, vec![(1, 10), (2, 30), (3, 50)]);
    }

    #[test]
    fn test_combination_stages() {
        let zipped: Vec<(i32, char)> = vec![1, 2, 3].pipe(zip_with("ab") | to());
        assert_eq!(zipped, vec![(1, 'a'), (2, 'b')]);

        let joined: Vec<i32> = vec![1, 2].pipe(concat(vec![3]) | intersperse(0) | to());
        assert_eq!(joined, vec![1, 0, 2, 0, 3]);
    }

    #[test]
    fn test_join_stages() {
        let words = vec!["Alpha", "Beta", "Gamma"];
        assert_eq!((&words).pipe(join() | to::<String>()), "AlphaBetaGamma");
        assert_eq!(
            (&words).pipe(join_with(", ") | to::<String>()),
            "Alpha, Beta, Gamma"
        );

        let expanded: Vec<u32> = vec![1_usize, 3]
            .pipe(transform_join(|count: usize| iota(0_u32).take(count)) | to());
        assert_eq!(expanded, vec![0, 0, 1, 2]);
    }

    #[rstest]
    #[case(1, 5)]
    #[case(2, 3)]
    #[case(5, 1)]
    #[case(9, 1)]
    fn test_chunk_stage_counts(#[case] size: usize, #[case] expected: usize) {
        let chunks = vec![1, 2, 3, 4, 5].pipe(chunk(size));
        assert_eq!(chunks.count(), expected);
    }

    #[test]
    fn test_split_and_group_stages() {
        let parts = "a,b,,c".pipe(split(','));
        let parts: Vec<String> = parts.iter().map(|part| part.to()).collect();
        assert_eq!(parts, vec!["a", "b", "", "c"]);

        let runs = vec![2, 4, 1, 3, 6].pipe(group_by(|value: &i32| value % 2 == 0));
        let runs: Vec<(bool, usize)> = runs.iter().map(|(key, run)| (key, run.count())).collect();
        assert_eq!(runs, vec![(true, 2), (false, 2), (true, 1)]);
    }

    #[test]
    fn test_slide_stage_windows() {
        let windows = "1234".pipe(slide(3));
        let windows: Vec<String> = windows.iter().map(|window| window.to()).collect();
        assert_eq!(windows, vec!["123", "234", "34", "4"]);
    }

    #[test]
    #[should_panic(expected = "chunk size must be positive")]
    fn test_zero_chunk_size_panics_when_built() {
        let _ = chunk(0);
    }

    #[test]
    fn test_custom_stage_between_adapters() {
        let total = vec![1, 2, 3, 4].pipe(
            filter(|value: &i32| *value > 1)
                | to::<Vec<i32>>()
                | stage(|values: Vec<i32>| values.iter().sum::<i32>()),
        );
        assert_eq!(total, 9);
    }

    #[cfg(feature = "erase")]
    #[test]
    fn test_erase_stage() {
        let erased = vec![3, 1, 2].pipe(reverse() | erase());
        assert_eq!(erased.to::<Vec<i32>>(), vec![2, 1, 3]);
    }
}
