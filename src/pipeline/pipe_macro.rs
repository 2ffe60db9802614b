//! The `pipe!` macro for left-to-right pipeline application.

/// Runs a value through a series of pipelines from left to right.
///
/// `pipe!(x, a, b, c)` is equivalent to `x.pipe(a | b | c)`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, a)` - Returns `a.apply(x)`
/// - `pipe!(x, a, b, ...)` - Composes `a | b | ...` into one flat pipeline
///   and applies it to `x`
///
/// Every argument after the value must be a
/// [`Pipeline`](crate::pipeline::Pipeline); wrap plain functions with
/// [`stage`](crate::pipeline::stage).
///
/// # Examples
///
/// ```rust
/// use pipeview::pipe;
/// use pipeview::prelude::*;
///
/// let data = vec![4, 8, 15, 16, 23, 42];
/// let result: Vec<i32> = pipe!(
///     &data,
///     stages::filter(|value: &&i32| **value % 2 == 0),
///     stages::transform(|value: &i32| value / 2),
///     stages::drop(1),
///     stages::to(),
/// );
/// assert_eq!(result, vec![4, 8, 21]);
/// ```
///
/// ## With plain functions
///
/// ```rust
/// use pipeview::pipe;
/// use pipeview::prelude::*;
///
/// let word_count = pipe!(
///     "lazy views",
///     stages::split(' '),
///     stage(|words: Chunks<Text<&str>, SplitPolicy<char>>| words.count()),
/// );
/// assert_eq!(word_count, 2);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // One or more pipelines: compose them flat, then apply once
    ($value:expr, $first:expr $(, $remaining:expr)* $(,)?) => {
        ($first $(| $remaining)*).apply($value)
    };
}
