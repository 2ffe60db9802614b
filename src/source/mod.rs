//! Sources: turning containers and values into views.
//!
//! Every adapter accepts anything implementing [`IntoView`] and normalizes
//! it with [`all`]. The kind of view is decided by the argument's type:
//!
//! - **pass-through**: a value that already is a view is used unchanged;
//! - **referencing** ([`Borrowed`]): a borrowed container (`&vec`) is
//!   wrapped by reference, and its elements are yielded as references into
//!   the caller's storage;
//! - **owning** ([`Owning`]): a container moved in (`vec`) is stored inside
//!   the view, shared with the view's cursors.
//!
//! # Lifetimes of referencing views
//!
//! A referencing view must not outlive the storage it borrows. Returning a
//! referencing view built over a function's by-value parameter is the
//! classic dangling-view mistake; here the borrow checker rejects it:
//!
//! ```compile_fail
//! use pipeview::prelude::*;
//!
//! fn dangling(data: Vec<i32>) -> Borrowed<'static, [i32]> {
//!     all(&data)
//! }
//! ```
//!
//! Moving the container in instead produces an owning view that is free to
//! leave the function:
//!
//! ```rust
//! use pipeview::prelude::*;
//!
//! fn kept(data: Vec<i32>) -> Owning<Vec<i32>> {
//!     all(data)
//! }
//!
//! assert_eq!(kept(vec![1, 2]).to::<Vec<_>>(), vec![1, 2]);
//! ```

mod indexed;
mod into_view;
mod iota;
mod storage;
mod text;

pub use indexed::{Borrowed, IndexCursor, Owning};
pub use into_view::{IntoView, all, owning, referencing};
pub use iota::{Counter, Iota, IotaCursor, iota, iota_range};
pub use storage::{Holder, Storage};
pub use text::{Text, TextCursor};
