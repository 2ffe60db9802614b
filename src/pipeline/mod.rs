//! Pipeline composition.
//!
//! A [`Pipeline`] is an ordered list of [`Stage`]s that is applied to a
//! value from left to right. Pipelines compose with `|`, and composition
//! always flattens: the stage list of `a | b` is the stage list of `a`
//! followed by the stage list of `b`, never a pipeline nested inside
//! another. `(a | b) | c` and `a | (b | c)` therefore have the same type and
//! the same behavior.
//!
//! The stage list is a type-level cons list, `(First, (Second, ()))`, so a
//! composed pipeline is a plain value with no boxing or dynamic dispatch.
//!
//! Every adapter of the crate is available as a one-stage pipeline in
//! [`stages`]; any other function can be lifted with [`stage`]. A pipeline
//! is applied with [`Pipeline::apply`], with [`PipeExt::pipe`], or with the
//! [`pipe!`](crate::pipe!) macro.
//!
//! # Examples
//!
//! ```rust
//! use pipeview::prelude::*;
//!
//! let evens_squared = stages::filter(|value: &i32| value % 2 == 0)
//!     | stages::transform(|value: i32| value * value);
//! let first_two = stages::take(2) | stages::to::<Vec<i32>>();
//!
//! let result = vec![1, 2, 3, 4, 5, 6].pipe(evens_squared | first_two);
//! assert_eq!(result, vec![4, 16]);
//! ```

mod pipe_macro;
pub mod stages;

use std::ops::BitOr;

// =============================================================================
// Stages
// =============================================================================

/// One step of a pipeline: consumes an input and produces an output.
pub trait Stage<In> {
    /// The produced value.
    type Output;

    /// Runs the stage.
    fn run(self, input: In) -> Self::Output;
}

/// A stage backed by a function.
///
/// Created by [`stage`].
#[derive(Debug, Clone, Copy)]
pub struct FnStage<F> {
    function: F,
}

impl<F, In, Out> Stage<In> for FnStage<F>
where
    F: FnOnce(In) -> Out,
{
    type Output = Out;

    #[inline]
    fn run(self, input: In) -> Out {
        (self.function)(input)
    }
}

/// Lifts a function into a one-stage pipeline.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// fn total<V>(view: V) -> i32
/// where
///     V: View,
///     V::Cursor: Cursor<Item = i32>,
/// {
///     view.iter().sum()
/// }
///
/// let pipeline = stages::transform(|value: i32| value + 1) | stage(total);
/// assert_eq!(vec![1, 2, 3].pipe(pipeline), 9);
/// ```
#[inline]
pub const fn stage<F>(function: F) -> Pipeline<(FnStage<F>, ())> {
    Pipeline::single(FnStage { function })
}

// =============================================================================
// Stage lists
// =============================================================================

/// Applies a cons list of stages in order.
///
/// `()` is the identity; `(Head, Tail)` runs `Head` and feeds its output to
/// `Tail`.
pub trait Apply<In> {
    /// The output of the last stage.
    type Output;

    /// Runs every stage in order.
    fn apply(self, input: In) -> Self::Output;
}

impl<In> Apply<In> for () {
    type Output = In;

    #[inline]
    fn apply(self, input: In) -> In {
        input
    }
}

impl<In, Head, Tail> Apply<In> for (Head, Tail)
where
    Head: Stage<In>,
    Tail: Apply<Head::Output>,
{
    type Output = Tail::Output;

    #[inline]
    fn apply(self, input: In) -> Self::Output {
        let (head, tail) = self;
        tail.apply(head.run(input))
    }
}

/// Concatenates two cons lists of stages.
pub trait Append<Other> {
    /// The concatenated list.
    type Output;

    /// Appends `other` after the stages of `self`.
    fn append(self, other: Other) -> Self::Output;
}

impl<Other> Append<Other> for () {
    type Output = Other;

    #[inline]
    fn append(self, other: Other) -> Other {
        other
    }
}

impl<Head, Tail, Other> Append<Other> for (Head, Tail)
where
    Tail: Append<Other>,
{
    type Output = (Head, Tail::Output);

    #[inline]
    fn append(self, other: Other) -> Self::Output {
        let (head, tail) = self;
        (head, tail.append(other))
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// A flat, ordered sequence of stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline<L> {
    stages: L,
}

impl Pipeline<()> {
    /// The empty pipeline, which returns its input unchanged.
    #[inline]
    pub const fn identity() -> Self {
        Self { stages: () }
    }
}

impl<S> Pipeline<(S, ())> {
    /// A pipeline with one stage.
    #[inline]
    pub const fn single(stage: S) -> Self {
        Self { stages: (stage, ()) }
    }
}

impl<L> Pipeline<L> {
    /// Runs every stage on `input`, first to last.
    #[inline]
    pub fn apply<In>(self, input: In) -> L::Output
    where
        L: Apply<In>,
    {
        self.stages.apply(input)
    }

    /// Appends the stages of `other`. Same as `self | other`.
    #[inline]
    pub fn then<R>(self, other: Pipeline<R>) -> Pipeline<L::Output>
    where
        L: Append<R>,
    {
        Pipeline {
            stages: self.stages.append(other.stages),
        }
    }

    /// Appends a function as the last stage.
    #[inline]
    pub fn then_fn<F>(self, function: F) -> Pipeline<L::Output>
    where
        L: Append<(FnStage<F>, ())>,
    {
        self.then(stage(function))
    }

    /// Prepends a function as the first stage.
    #[inline]
    pub fn before_fn<F>(self, function: F) -> Pipeline<(FnStage<F>, L)> {
        Pipeline {
            stages: (FnStage { function }, self.stages),
        }
    }

    /// Returns the stage list.
    #[inline]
    pub fn into_stages(self) -> L {
        self.stages
    }
}

impl<L, R> BitOr<Pipeline<R>> for Pipeline<L>
where
    L: Append<R>,
{
    type Output = Pipeline<L::Output>;

    #[inline]
    fn bitor(self, other: Pipeline<R>) -> Self::Output {
        self.then(other)
    }
}

// =============================================================================
// Application
// =============================================================================

/// Applies pipelines in method position.
pub trait PipeExt: Sized {
    /// Runs `pipeline` on `self`.
    ///
    /// ```rust
    /// use pipeview::prelude::*;
    ///
    /// let letters: String = "a-b-c".pipe(
    ///     stages::filter(|character: &char| *character != '-') | stages::to::<String>(),
    /// );
    /// assert_eq!(letters, "abc");
    /// ```
    #[inline]
    fn pipe<L>(self, pipeline: Pipeline<L>) -> L::Output
    where
        L: Apply<Self>,
    {
        pipeline.apply(self)
    }
}

impl<T> PipeExt for T {}
