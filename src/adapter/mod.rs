//! View adapters.
//!
//! Every adapter is a view type paired with a cursor type. The view holds
//! its source and configuration; the cursor wraps the source's cursor plus
//! whatever per-position state the adapter needs. A cursor implements the
//! optional capability traits ([`BidirectionalCursor`], [`OrderedCursor`],
//! [`RandomAccessCursor`]) only where both the adapter's semantics and its
//! source allow it:
//!
//! | Adapter | Strongest category |
//! |---------|--------------------|
//! | [`Transform`], [`Cache1`] (bidirectional at most), [`DropWhile`], [`Reverse`] | the source's |
//! | [`Concat`] | bidirectional |
//! | [`Filter`], [`Enumerate`], [`Stride`], [`Zip`], [`ZipTransform`], [`Intersperse`], [`Join`], [`JoinWith`], [`Chunks`], [`GroupBy`] | forward |
//!
//! The adapters are normally reached through the methods of
//! [`View`](crate::view::View) or through the pipeline stages in
//! [`pipeline`](crate::pipeline).
//!
//! [`BidirectionalCursor`]: crate::cursor::BidirectionalCursor
//! [`OrderedCursor`]: crate::cursor::OrderedCursor
//! [`RandomAccessCursor`]: crate::cursor::RandomAccessCursor

mod cache;
mod chunk;
mod concat;
mod drop_while;
mod enumerate;
mod filter;
mod intersperse;
mod join;
mod reverse;
mod stride;
mod transform;
mod zip;

pub use cache::{Cache1, Cache1Cursor};
pub use chunk::{
    Boundary, BoundaryPolicy, ChunkByKeyPolicy, ChunkByPolicy, ChunkCursor, ChunkPolicy, Chunks,
    GroupBy, GroupCursor, SlidePolicy, SplitOnPolicy, SplitPolicy,
};
pub use concat::{Concat, ConcatCursor, concat};
pub use drop_while::{DropWhile, DropWhileCursor, SkipState};
pub use enumerate::{Enumerate, EnumerateCursor};
pub use filter::{Filter, FilterCursor};
pub use intersperse::{Intersperse, IntersperseCursor};
pub use join::{Join, JoinCursor, JoinWith, JoinWithCursor};
pub use reverse::{Reverse, ReverseCursor};
pub use stride::{Stride, StrideCursor};
pub use transform::{Transform, TransformCursor};
pub use zip::{
    Zip, ZipCursor, ZipTransform, ZipTransformCursor, zip, zip_transform, zip_transform2,
    zip_transform3, zip_transform4, zip2, zip3, zip4,
};
