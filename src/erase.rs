//! Runtime type erasure for views.
//!
//! Adapter chains produce deeply nested concrete types. When a uniform type
//! is needed, for example to store differently built views in one field or
//! to return one of several pipelines from a function, [`View::erase`]
//! hides the concrete view behind [`AnyView<T>`], whose cursor is the boxed
//! [`AnyCursor<T>`].
//!
//! Erasure costs one allocation per cursor and dynamic dispatch per
//! operation; prefer the static types everywhere else.
//!
//! # Examples
//!
//! ```rust
//! use pipeview::prelude::*;
//!
//! fn numbers(only_even: bool) -> AnyView<i32> {
//!     let source = all(vec![1, 2, 3, 4]);
//!     if only_even {
//!         source.filter(|value| value % 2 == 0).erase()
//!     } else {
//!         source.erase()
//!     }
//! }
//!
//! assert_eq!(numbers(true).to::<Vec<_>>(), vec![2, 4]);
//! assert_eq!(numbers(false).to::<Vec<_>>(), vec![1, 2, 3, 4]);
//! ```
//!
//! [`View::erase`]: crate::view::View::erase

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::cursor::{Category, Cursor};
use crate::view::View;

// =============================================================================
// Object-safe cursor
// =============================================================================

/// The object-safe subset of [`Cursor`] behind an [`AnyCursor`].
trait DynCursor<T> {
    fn get_dyn(&self) -> T;

    fn inc_dyn(&mut self);

    fn category_dyn(&self) -> Category;

    fn clone_box(&self) -> Box<dyn DynCursor<T>>;

    fn as_any(&self) -> &dyn Any;

    /// Equal only if `other` wraps the same concrete cursor type and the
    /// cursors themselves are equal.
    fn is_equal_dyn(&self, other: &dyn DynCursor<T>) -> bool;
}

impl<C> DynCursor<C::Item> for C
where
    C: Cursor + 'static,
{
    fn get_dyn(&self) -> C::Item {
        self.get()
    }

    fn inc_dyn(&mut self) {
        self.inc();
    }

    fn category_dyn(&self) -> Category {
        C::CATEGORY
    }

    fn clone_box(&self) -> Box<dyn DynCursor<C::Item>> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_equal_dyn(&self, other: &dyn DynCursor<C::Item>) -> bool {
        other
            .as_any()
            .downcast_ref::<C>()
            .is_some_and(|other| self.is_equal(other))
    }
}

/// A cursor with its concrete type erased.
///
/// Only the forward operations survive erasure, so the static
/// [`Cursor::CATEGORY`] is [`Category::Forward`]. The category of the
/// wrapped cursor is kept and reported by [`AnyCursor::category`]; an erased
/// generator reports [`Category::Input`] there.
pub struct AnyCursor<T> {
    inner: Box<dyn DynCursor<T>>,
}

impl<T> AnyCursor<T> {
    /// Boxes `cursor`.
    pub fn new<C>(cursor: C) -> Self
    where
        C: Cursor<Item = T> + 'static,
    {
        Self {
            inner: Box::new(cursor),
        }
    }

    /// The category of the wrapped cursor, capped at
    /// [`Category::Forward`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipeview::prelude::*;
    ///
    /// let erased = all(vec![1, 2]).erase();
    /// assert_eq!(erased.begin().category(), Category::Forward);
    /// ```
    #[inline]
    pub fn category(&self) -> Category {
        self.inner.category_dyn().weaker(Category::Forward)
    }
}

impl<T> Clone for AnyCursor<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl<T> fmt::Debug for AnyCursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("AnyCursor").finish_non_exhaustive()
    }
}

impl<T> Cursor for AnyCursor<T> {
    type Item = T;

    const CATEGORY: Category = Category::Forward;

    #[inline]
    fn get(&self) -> T {
        self.inner.get_dyn()
    }

    #[inline]
    fn inc(&mut self) {
        self.inner.inc_dyn();
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        self.inner.is_equal_dyn(&*other.inner)
    }
}

// =============================================================================
// Object-safe view
// =============================================================================

trait DynView<T> {
    fn begin_dyn(&self) -> AnyCursor<T>;

    fn end_dyn(&self) -> AnyCursor<T>;
}

impl<V> DynView<<V::Cursor as Cursor>::Item> for V
where
    V: View,
    V::Cursor: 'static,
{
    fn begin_dyn(&self) -> AnyCursor<<V::Cursor as Cursor>::Item> {
        AnyCursor::new(self.begin())
    }

    fn end_dyn(&self) -> AnyCursor<<V::Cursor as Cursor>::Item> {
        AnyCursor::new(self.end())
    }
}

/// A view with its concrete type erased.
///
/// Cloning an `AnyView` shares the underlying view. Every call to
/// [`View::begin`] still goes to the wrapped view, so erased generators
/// restart as usual.
pub struct AnyView<T> {
    view: Rc<dyn DynView<T>>,
}

impl<T> AnyView<T> {
    /// Erases the type of `view`.
    pub fn new<V>(view: V) -> Self
    where
        V: View + 'static,
        V::Cursor: Cursor<Item = T> + 'static,
    {
        Self {
            view: Rc::new(view),
        }
    }
}

impl<T> Clone for AnyView<T> {
    fn clone(&self) -> Self {
        Self {
            view: Rc::clone(&self.view),
        }
    }
}

impl<T> fmt::Debug for AnyView<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("AnyView").finish_non_exhaustive()
    }
}

impl<T> View for AnyView<T> {
    type Cursor = AnyCursor<T>;

    #[inline]
    fn begin(&self) -> AnyCursor<T> {
        self.view.begin_dyn()
    }

    #[inline]
    fn end(&self) -> AnyCursor<T> {
        self.view.end_dyn()
    }
}
