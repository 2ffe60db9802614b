//! # pipeview
//!
//! Composable, lazily evaluated views and pipelines over arbitrary
//! sequences.
//!
//! ## Overview
//!
//! A [`View`](view::View) is a re-iterable sequence described by a pair of
//! cursors. Adapters such as `filter`, `transform`, `take`, `chunk`, `zip`,
//! `join` or `group_by` wrap a view into a new one without computing or
//! storing any element; the work happens when the final view is walked.
//!
//! - **Cursors**: [`Cursor`](cursor::Cursor) and its optional capabilities
//!   (bidirectional, ordered, random access). Adapters keep the strongest
//!   capability their semantics allow, and using a missing one is a compile
//!   error.
//! - **Sources**: [`all`](source::all) turns containers, borrowed
//!   containers, strings and integer ranges into views, choosing between
//!   owning and referencing by the argument's type.
//! - **Adapters**: the views in [`adapter`], usually reached through the
//!   methods of [`View`](view::View).
//! - **Generators**: views computed by calling a function, finite or
//!   infinite.
//! - **Pipelines**: reusable, flat compositions of adapter stages applied
//!   with `|` and [`pipe`](pipeline::PipeExt::pipe).
//!
//! ## Feature Flags
//!
//! - `generate`: Generator views (`generate`, `unfold`, `repeat`, ...)
//! - `erase`: Type-erased views (`AnyView`, `AnyCursor`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pipeview::prelude::*;
//!
//! let text = "the quick brown fox jumps over the lazy dog";
//! let long_words: Vec<String> = all(text)
//!     .split(' ')
//!     .filter(|word| word.count() > 4)
//!     .transform(|word| word.to::<String>())
//!     .to();
//! assert_eq!(long_words, vec!["quick", "brown", "jumps"]);
//!
//! let normalize = stages::filter(|value: &i32| *value >= 0)
//!     | stages::transform(|value: i32| value * 10)
//!     | stages::to::<Vec<_>>();
//! assert_eq!(vec![3, -1, 2].pipe(normalize), vec![30, 20]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits, views and functions needed to build views and
/// pipelines. Pipeline stage factories stay under [`stages`](pipeline::stages)
/// because several of their names (`take`, `drop`, `concat`) collide with
/// other functions.
///
/// # Usage
///
/// ```rust
/// use pipeview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::*;
    pub use crate::cursor::{
        BidirectionalCursor, Category, Cursor, OrderedCursor, RandomAccessCursor,
    };
    pub use crate::error::ViewError;
    pub use crate::pipeline::{
        Append, Apply, FnStage, PipeExt, Pipeline, Stage, stage, stages,
    };
    pub use crate::position::Position;
    pub use crate::source::*;
    pub use crate::view::{Subrange, View, ViewItem, Walk};

    #[cfg(feature = "generate")]
    pub use crate::generate::*;

    #[cfg(feature = "erase")]
    pub use crate::erase::{AnyCursor, AnyView};
}

pub mod adapter;
pub mod cursor;
pub mod error;
pub mod pipeline;
pub mod position;
pub mod source;
pub mod view;

#[cfg(feature = "generate")]
pub mod generate;

#[cfg(feature = "erase")]
pub mod erase;
