//! Random-access storage that views can borrow or own.

use std::collections::VecDeque;
use std::rc::Rc;

/// A contiguous-index container.
///
/// Implemented for slices, arrays, vectors, boxed slices and deques.
pub trait Storage {
    /// The stored element type.
    type Element;

    /// The number of stored elements.
    fn size(&self) -> usize;

    /// Borrows the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Storage::size`].
    fn element(&self, index: usize) -> &Self::Element;
}

impl<T> Storage for [T] {
    type Element = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> Storage for [T; N] {
    type Element = T;

    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Storage for Vec<T> {
    type Element = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Storage for Box<[T]> {
    type Element = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Storage for VecDeque<T> {
    type Element = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

/// How an index cursor reaches its storage.
///
/// A borrowed holder (`&'a S`) yields references that live as long as the
/// borrow. A shared owning holder (`Rc<S>`) yields clones, since its cursors
/// may outlive any single borrow of the storage.
pub trait Holder: Clone {
    /// The element type produced by [`Holder::fetch`].
    type Item;

    /// The number of stored elements.
    fn size(&self) -> usize;

    /// Produces the element at `index`.
    fn fetch(&self, index: usize) -> Self::Item;
}

impl<'a, S> Holder for &'a S
where
    S: Storage + ?Sized,
{
    type Item = &'a S::Element;

    #[inline]
    fn size(&self) -> usize {
        Storage::size(*self)
    }

    #[inline]
    fn fetch(&self, index: usize) -> &'a S::Element {
        let storage: &'a S = *self;
        storage.element(index)
    }
}

impl<S> Holder for Rc<S>
where
    S: Storage,
    S::Element: Clone,
{
    type Item = S::Element;

    #[inline]
    fn size(&self) -> usize {
        Storage::size(&**self)
    }

    #[inline]
    fn fetch(&self, index: usize) -> S::Element {
        self.element(index).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_storage() {
        let data: &[i32] = &[1, 2, 3];
        assert_eq!(Storage::size(data), 3);
        assert_eq!(*data.element(1), 2);
    }

    #[test]
    fn test_deque_storage() {
        let mut deque = VecDeque::new();
        deque.push_back(2);
        deque.push_front(1);
        assert_eq!(Storage::size(&deque), 2);
        assert_eq!(*deque.element(0), 1);
    }

    #[test]
    fn test_borrowed_holder_yields_references() {
        let data = vec![String::from("a"), String::from("b")];
        let holder = &data;
        let item: &String = holder.fetch(1);
        assert!(std::ptr::eq(item, &data[1]));
    }

    #[test]
    fn test_rc_holder_yields_clones() {
        let holder = Rc::new(vec![String::from("a")]);
        let item: String = holder.fetch(0);
        assert_eq!(item, "a");
        assert_eq!(Holder::size(&holder), 1);
    }
}
