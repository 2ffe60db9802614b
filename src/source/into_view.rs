//! Normalizing range-like expressions into views.

use std::collections::VecDeque;
use std::ops::Range;
use std::rc::Rc;

use crate::source::indexed::{Borrowed, Owning};
use crate::source::iota::Iota;
use crate::source::storage::Storage;
use crate::source::text::Text;
use crate::view::View;

/// Conversion of a range-like value into a [`View`].
///
/// The implementation is selected by the argument's type alone:
///
/// | Argument | View |
/// |----------|------|
/// | a view | the same view, unchanged |
/// | `&Vec<T>`, `&[T]`, `&[T; N]`, `&Box<[T]>`, `&VecDeque<T>` | [`Borrowed`] |
/// | `Vec<T>`, `[T; N]`, `Box<[T]>`, `VecDeque<T>` | [`Owning`] |
/// | `&str`, `&&str`, `&String` | [`Text`] borrowing the string |
/// | `String` | [`Text`] owning the string |
/// | `Range<integer>` | bounded [`Iota`] |
pub trait IntoView {
    /// The resulting view type.
    type View: View;

    /// Performs the conversion.
    fn into_view(self) -> Self::View;
}

impl<V: View> IntoView for V {
    type View = V;

    #[inline]
    fn into_view(self) -> V {
        self
    }
}

impl<'a, T> IntoView for &'a [T] {
    type View = Borrowed<'a, [T]>;

    #[inline]
    fn into_view(self) -> Self::View {
        Borrowed::new(self)
    }
}

impl<'a, T> IntoView for &'a Vec<T> {
    type View = Borrowed<'a, [T]>;

    #[inline]
    fn into_view(self) -> Self::View {
        Borrowed::new(self.as_slice())
    }
}

impl<'a, T, const N: usize> IntoView for &'a [T; N] {
    type View = Borrowed<'a, [T]>;

    #[inline]
    fn into_view(self) -> Self::View {
        Borrowed::new(self.as_slice())
    }
}

impl<'a, T> IntoView for &'a Box<[T]> {
    type View = Borrowed<'a, [T]>;

    #[inline]
    fn into_view(self) -> Self::View {
        Borrowed::new(&**self)
    }
}

impl<'a, T> IntoView for &'a VecDeque<T> {
    type View = Borrowed<'a, VecDeque<T>>;

    #[inline]
    fn into_view(self) -> Self::View {
        Borrowed::new(self)
    }
}

impl<T: Clone> IntoView for Vec<T> {
    type View = Owning<Self>;

    #[inline]
    fn into_view(self) -> Self::View {
        Owning::new(self)
    }
}

impl<T: Clone, const N: usize> IntoView for [T; N] {
    type View = Owning<Self>;

    #[inline]
    fn into_view(self) -> Self::View {
        Owning::new(self)
    }
}

impl<T: Clone> IntoView for Box<[T]> {
    type View = Owning<Self>;

    #[inline]
    fn into_view(self) -> Self::View {
        Owning::new(self)
    }
}

impl<T: Clone> IntoView for VecDeque<T> {
    type View = Owning<Self>;

    #[inline]
    fn into_view(self) -> Self::View {
        Owning::new(self)
    }
}

impl<'a> IntoView for &'a str {
    type View = Text<&'a str>;

    #[inline]
    fn into_view(self) -> Self::View {
        Text::new(self)
    }
}

impl<'b> IntoView for &&'b str {
    type View = Text<&'b str>;

    #[inline]
    fn into_view(self) -> Self::View {
        Text::new(*self)
    }
}

impl<'a> IntoView for &'a String {
    type View = Text<&'a str>;

    #[inline]
    fn into_view(self) -> Self::View {
        Text::new(self.as_str())
    }
}

impl IntoView for String {
    type View = Text<Rc<str>>;

    #[inline]
    fn into_view(self) -> Self::View {
        Text::new(Rc::from(self))
    }
}

macro_rules! impl_range_into_view {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl IntoView for Range<$integer> {
                type View = Iota<$integer>;

                #[inline]
                fn into_view(self) -> Self::View {
                    Iota::bounded(self.start, self.end)
                }
            }
        )+
    };
}

impl_range_into_view!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Normalizes any range-like value into a view.
///
/// - a view passes through unchanged;
/// - a borrowed container becomes a referencing view;
/// - a container moved in becomes an owning view.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let data = vec![1, 2, 3];
///
/// // Borrowed: elements are references into `data`.
/// let borrowed = all(&data);
/// assert!(std::ptr::eq(borrowed.front().unwrap(), &data[0]));
///
/// // Moved: the view owns its storage.
/// let owned = all(data.clone());
/// assert_eq!(owned.to::<Vec<i32>>(), data);
///
/// // A view passes through without re-wrapping.
/// let same: Borrowed<'_, [i32]> = all(borrowed);
/// assert_eq!(same.len(), 3);
/// ```
#[inline]
pub fn all<R: IntoView>(range: R) -> R::View {
    range.into_view()
}

/// Moves `storage` into an owning view.
#[inline]
pub fn owning<S>(storage: S) -> Owning<S>
where
    S: Storage,
    S::Element: Clone,
{
    Owning::new(storage)
}

/// Builds a referencing view over `storage`.
///
/// The view borrows `storage`; it cannot outlive it.
#[inline]
pub fn referencing<S: Storage + ?Sized>(storage: &S) -> Borrowed<'_, S> {
    Borrowed::new(storage)
}
