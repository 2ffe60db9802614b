//! Lockstep traversal of several views.
//!
//! [`Zip`] and [`ZipTransform`] are implemented for tuples of two to four
//! views. The arity-specific constructors (`zip2` ... `zip4`,
//! `zip_transform2` ... `zip_transform4`) are generated; the [`zip!`] and
//! [`zip_transform!`] macros pick the right one from the number of
//! arguments.
//!
//! A zipped cursor equals another as soon as ANY pair of component cursors
//! is equal. Comparing against `end()` therefore stops at the shortest
//! source, and the length of a zip is the minimum of its sources' lengths.
//!
//! [`zip!`]: crate::zip!
//! [`zip_transform!`]: crate::zip_transform!

use paste::paste;

use crate::cursor::{Category, Cursor};
use crate::source::IntoView;
use crate::view::{View, ViewItem};

/// A view of tuples drawn from a tuple of views in lockstep.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let names = vec!["ada", "grace", "barbara"];
/// let years = vec![1815, 1906];
/// let pairs: Vec<(&&str, &i32)> = zip(&names, &years).to();
/// assert_eq!(pairs, vec![(&"ada", &1815), (&"grace", &1906)]);
/// ```
#[derive(Debug, Clone)]
pub struct Zip<Views> {
    views: Views,
}

impl<Views> Zip<Views> {
    /// Creates the view from a tuple of views.
    #[inline]
    pub const fn new(views: Views) -> Self {
        Self { views }
    }
}

/// The cursor of a [`Zip`]: one cursor per source.
#[derive(Debug, Clone)]
pub struct ZipCursor<Cursors> {
    cursors: Cursors,
}

/// A view applying a function to the elements of several views in
/// lockstep.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let sums = zip_transform(|left: i32, right: i32| left + right, vec![1, 2, 3], vec![10, 20]);
/// assert_eq!(sums.to::<Vec<_>>(), vec![11, 22]);
/// ```
#[derive(Debug, Clone)]
pub struct ZipTransform<F, Views> {
    function: F,
    views: Views,
}

impl<F, Views> ZipTransform<F, Views> {
    /// Creates the view from a function and a tuple of views.
    #[inline]
    pub const fn new(function: F, views: Views) -> Self {
        Self { function, views }
    }
}

/// The cursor of a [`ZipTransform`].
#[derive(Debug, Clone)]
pub struct ZipTransformCursor<F, Cursors> {
    function: F,
    zipped: ZipCursor<Cursors>,
}

// =============================================================================
// Arity-specific implementations
// =============================================================================

macro_rules! impl_zip {
    ($arity:literal; $($view:ident . $index:tt),+) => {
        paste! {
            impl<$($view: View),+> View for Zip<($($view,)+)> {
                type Cursor = ZipCursor<($($view::Cursor,)+)>;

                fn begin(&self) -> Self::Cursor {
                    ZipCursor {
                        cursors: ($(self.views.$index.begin(),)+),
                    }
                }

                fn end(&self) -> Self::Cursor {
                    ZipCursor {
                        cursors: ($(self.views.$index.end(),)+),
                    }
                }
            }

            impl<$([<$view Cursor>]: Cursor),+> ZipCursor<($([<$view Cursor>],)+)> {
                #[inline]
                fn any_equal(&self, other: &Self) -> bool {
                    false $(|| self.cursors.$index.is_equal(&other.cursors.$index))+
                }

                fn shortest_hint(&self, end: &Self) -> Option<usize> {
                    let hints = [$(self.cursors.$index.distance_hint(&end.cursors.$index)),+];
                    hints.into_iter().try_fold(usize::MAX, |shortest, hint| {
                        hint.map(|remaining| shortest.min(remaining))
                    })
                }
            }

            impl<$([<$view Cursor>]: Cursor),+> Cursor for ZipCursor<($([<$view Cursor>],)+)> {
                type Item = ($([<$view Cursor>]::Item,)+);

                const CATEGORY: Category =
                    Category::Forward $(.weaker([<$view Cursor>]::CATEGORY))+;

                #[inline]
                fn get(&self) -> Self::Item {
                    ($(self.cursors.$index.get(),)+)
                }

                #[inline]
                fn inc(&mut self) {
                    $(self.cursors.$index.inc();)+
                }

                #[inline]
                fn is_equal(&self, other: &Self) -> bool {
                    self.any_equal(other)
                }

                #[inline]
                fn distance_hint(&self, end: &Self) -> Option<usize> {
                    self.shortest_hint(end)
                }
            }

            impl<Function, $($view: View),+> View for ZipTransform<Function, ($($view,)+)>
            where
                ZipTransformCursor<Function, ($($view::Cursor,)+)>: Cursor,
                Function: Clone,
            {
                type Cursor = ZipTransformCursor<Function, ($($view::Cursor,)+)>;

                fn begin(&self) -> Self::Cursor {
                    ZipTransformCursor {
                        function: self.function.clone(),
                        zipped: ZipCursor {
                            cursors: ($(self.views.$index.begin(),)+),
                        },
                    }
                }

                fn end(&self) -> Self::Cursor {
                    ZipTransformCursor {
                        function: self.function.clone(),
                        zipped: ZipCursor {
                            cursors: ($(self.views.$index.end(),)+),
                        },
                    }
                }
            }

            impl<Function, Output, $([<$view Cursor>]: Cursor),+> Cursor
                for ZipTransformCursor<Function, ($([<$view Cursor>],)+)>
            where
                Function: Fn($([<$view Cursor>]::Item),+) -> Output + Clone,
            {
                type Item = Output;

                const CATEGORY: Category =
                    Category::Forward $(.weaker([<$view Cursor>]::CATEGORY))+;

                #[inline]
                fn get(&self) -> Output {
                    (self.function)($(self.zipped.cursors.$index.get()),+)
                }

                #[inline]
                fn inc(&mut self) {
                    self.zipped.inc();
                }

                #[inline]
                fn is_equal(&self, other: &Self) -> bool {
                    self.zipped.any_equal(&other.zipped)
                }

                #[inline]
                fn distance_hint(&self, end: &Self) -> Option<usize> {
                    self.zipped.shortest_hint(&end.zipped)
                }
            }

            #[doc = "Zips " $arity " views; the result is as long as the shortest."]
            pub fn [<zip $arity>]<$($view: IntoView),+>(
                $([<$view:snake>]: $view),+
            ) -> Zip<($($view::View,)+)> {
                Zip::new(($([<$view:snake>].into_view(),)+))
            }

            #[doc = "Applies `function` to the elements of " $arity " views in lockstep."]
            pub fn [<zip_transform $arity>]<Function, Output, $($view: IntoView),+>(
                function: Function,
                $([<$view:snake>]: $view),+
            ) -> ZipTransform<Function, ($($view::View,)+)>
            where
                Function: Fn($(ViewItem<$view::View>),+) -> Output + Clone,
            {
                ZipTransform::new(function, ($([<$view:snake>].into_view(),)+))
            }
        }
    };
}

impl_zip!(2; First.0, Second.1);
impl_zip!(3; First.0, Second.1, Third.2);
impl_zip!(4; First.0, Second.1, Third.2, Fourth.3);

/// Zips two views; the result is as long as the shorter.
#[inline]
pub fn zip<First: IntoView, Second: IntoView>(
    first: First,
    second: Second,
) -> Zip<(First::View, Second::View)> {
    zip2(first, second)
}

/// Applies `function` to the elements of two views in lockstep.
#[inline]
pub fn zip_transform<Function, Output, First: IntoView, Second: IntoView>(
    function: Function,
    first: First,
    second: Second,
) -> ZipTransform<Function, (First::View, Second::View)>
where
    Function: Fn(ViewItem<First::View>, ViewItem<Second::View>) -> Output + Clone,
{
    zip_transform2(function, first, second)
}

/// Zips two to four views.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
/// use pipeview::zip;
///
/// let triples: Vec<(i32, char, bool)> =
///     zip!(vec![1, 2], all("xyz"), vec![true, false, true]).to();
/// assert_eq!(triples, vec![(1, 'x', true), (2, 'y', false)]);
/// ```
#[macro_export]
macro_rules! zip {
    ($first:expr, $second:expr $(,)?) => {
        $crate::adapter::zip2($first, $second)
    };
    ($first:expr, $second:expr, $third:expr $(,)?) => {
        $crate::adapter::zip3($first, $second, $third)
    };
    ($first:expr, $second:expr, $third:expr, $fourth:expr $(,)?) => {
        $crate::adapter::zip4($first, $second, $third, $fourth)
    };
}

/// Applies a function to two to four views in lockstep.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
/// use pipeview::zip_transform;
///
/// let volumes: Vec<i32> = zip_transform!(
///     |width: i32, height: i32, depth: i32| width * height * depth,
///     vec![1, 2],
///     vec![3, 4],
///     vec![5, 6],
/// )
/// .to();
/// assert_eq!(volumes, vec![15, 48]);
/// ```
#[macro_export]
macro_rules! zip_transform {
    ($function:expr, $first:expr, $second:expr $(,)?) => {
        $crate::adapter::zip_transform2($function, $first, $second)
    };
    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {
        $crate::adapter::zip_transform3($function, $first, $second, $third)
    };
    ($function:expr, $first:expr, $second:expr, $third:expr, $fourth:expr $(,)?) => {
        $crate::adapter::zip_transform4($function, $first, $second, $third, $fourth)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{all, iota};
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3], vec![4, 5], 2)]
    #[case(vec![1], vec![4, 5, 6], 1)]
    #[case(vec![], vec![4, 5, 6], 0)]
    #[case(vec![1, 2], vec![3, 4], 2)]
    fn test_zip_length_is_minimum(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: usize,
    ) {
        assert_eq!(zip(left, right).count(), expected);
    }

    #[test]
    fn test_zip_with_infinite_source() {
        let labelled: Vec<(u32, char)> = zip(iota(1_u32), "abc").to();
        assert_eq!(labelled, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[test]
    fn test_zip_category_is_at_most_forward() {
        let view = zip(vec![1], vec![2]);
        assert_eq!(view.positions().0.category(), Category::Forward);
    }

    #[test]
    fn test_zip_size_hint_uses_shortest() {
        let view = zip(vec![1, 2, 3], vec![4, 5]);
        assert_eq!(view.iter().size_hint(), (2, Some(2)));
        let unbounded = zip(vec![1, 2, 3], iota(0_u8));
        assert_eq!(unbounded.iter().size_hint(), (0, None));
    }

    #[test]
    fn test_zip_four() {
        let rows: Vec<(i32, i32, i32, i32)> =
            crate::zip!(vec![1, 2], vec![3, 4], vec![5, 6], vec![7]).to();
        assert_eq!(rows, vec![(1, 3, 5, 7)]);
    }

    #[test]
    fn test_zip_transform_borrowed() {
        let prices = vec![3, 5];
        let counts = vec![2, 4];
        let totals: Vec<i32> =
            zip_transform(|price: &i32, count: &i32| price * count, &prices, &counts).to();
        assert_eq!(totals, vec![6, 20]);
    }

    #[test]
    fn test_zip_with_method() {
        let words = all(vec!["one", "two"]).zip_with(vec![1, 2, 3]);
        assert_eq!(words.to::<Vec<_>>(), vec![("one", 1), ("two", 2)]);
    }
}
