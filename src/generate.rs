//! Generator views: sequences produced by calling a function.
//!
//! A generator view calls its function lazily, one element ahead: the
//! first value is computed when a begin cursor is created and the next one
//! when a cursor first steps past the newest value. A sequence of `N`
//! elements therefore calls a finite generator `N + 1` times per walk, the
//! last call returning `None` to signal the end. A generator with side
//! effects observes that extra call.
//!
//! The values of one walk are shared by every cursor that walk hands out,
//! so copies made by `take`, `chunk` or `slide` read the stored values
//! instead of calling the function again. Only the values between the
//! oldest live cursor and the newest call are kept.
//!
//! Generated cursors are [`Category::Input`]. Every call to `begin()`
//! starts a new walk from a fresh clone of the function.
//!
//! Infinite generators never produce `None`; bound them with `take` or
//! `take_while` before collecting.
//!
//! # Examples
//!
//! ```rust
//! use pipeview::prelude::*;
//!
//! let mut value = 1;
//! let powers: Vec<String> = generate(move || {
//!     value *= 2;
//!     (value <= 100).then(|| value.to_string())
//! })
//! .to();
//! assert_eq!(powers, vec!["2", "4", "8", "16", "32", "64"]);
//!
//! let collatz: Vec<u64> = unfold(6_u64, |current| {
//!     (current != 1).then(|| {
//!         let next = if current % 2 == 0 { current / 2 } else { 3 * current + 1 };
//!         (current, next)
//!     })
//! })
//! .to();
//! assert_eq!(collatz, vec![6, 3, 10, 5, 16, 8, 4, 2]);
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::rc::Rc;

use crate::cursor::{Category, Cursor};
use crate::source::{Owning, owning};
use crate::view::View;

/// A view over the values returned by a function until it returns `None`.
///
/// See the [module documentation](self) for the call-count contract.
#[derive(Debug, Clone)]
pub struct Generate<F> {
    function: F,
}

impl<F> Generate<F> {
    /// Creates the view.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F, T> View for Generate<F>
where
    F: FnMut() -> Option<T> + Clone,
    T: Clone,
{
    type Cursor = GenerateCursor<F, T>;

    fn begin(&self) -> Self::Cursor {
        let mut walk = Walked {
            function: self.function.clone(),
            values: VecDeque::new(),
            first: 0,
            finished: false,
            live: BTreeMap::new(),
        };
        walk.enter(0);
        walk.fill(0);
        GenerateCursor {
            walk: Some(Rc::new(RefCell::new(walk))),
            position: 0,
        }
    }

    fn end(&self) -> Self::Cursor {
        GenerateCursor {
            walk: None,
            position: 0,
        }
    }
}

// =============================================================================
// Shared walk state
// =============================================================================

/// The values produced so far by one walk of a generator.
///
/// `values[0]` sits at position `first`. `live` counts the cursors at each
/// position; values before the lowest live position are released.
struct Walked<F, T> {
    function: F,
    values: VecDeque<T>,
    first: usize,
    finished: bool,
    live: BTreeMap<usize, usize>,
}

impl<F, T> Walked<F, T> {
    fn value(&self, position: usize) -> Option<&T> {
        position
            .checked_sub(self.first)
            .and_then(|offset| self.values.get(offset))
    }

    fn enter(&mut self, position: usize) {
        *self.live.entry(position).or_insert(0) += 1;
    }

    fn leave(&mut self, position: usize) {
        if let Some(count) = self.live.get_mut(&position) {
            *count -= 1;
            if *count == 0 {
                self.live.remove(&position);
            }
        }
        let keep_from = self
            .live
            .keys()
            .next()
            .copied()
            .unwrap_or(self.first + self.values.len());
        while self.first < keep_from && self.values.pop_front().is_some() {
            self.first += 1;
        }
    }
}

impl<F, T> Walked<F, T>
where
    F: FnMut() -> Option<T>,
{
    /// Calls the function until `position` holds a value or it returns
    /// `None`.
    fn fill(&mut self, position: usize) {
        while !self.finished && self.first + self.values.len() <= position {
            match (self.function)() {
                Some(value) => self.values.push_back(value),
                None => self.finished = true,
            }
        }
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// The cursor of a [`Generate`].
///
/// Two cursors are equal when both are exhausted, or when neither is and
/// they have taken the same number of steps. The end cursor belongs to no
/// walk and is always exhausted.
pub struct GenerateCursor<F, T> {
    walk: Option<Rc<RefCell<Walked<F, T>>>>,
    position: usize,
}

impl<F, T> GenerateCursor<F, T> {
    /// Returns `true` once the function has returned `None` at or before
    /// this position.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.walk
            .as_ref()
            .is_none_or(|walk| walk.borrow().value(self.position).is_none())
    }
}

impl<F, T> Clone for GenerateCursor<F, T> {
    fn clone(&self) -> Self {
        if let Some(walk) = &self.walk {
            walk.borrow_mut().enter(self.position);
        }
        Self {
            walk: self.walk.clone(),
            position: self.position,
        }
    }
}

impl<F, T> Drop for GenerateCursor<F, T> {
    fn drop(&mut self) {
        if let Some(walk) = &self.walk {
            walk.borrow_mut().leave(self.position);
        }
    }
}

impl<F, T> fmt::Debug for GenerateCursor<F, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GenerateCursor")
            .field("position", &self.position)
            .field("exhausted", &self.is_exhausted())
            .finish_non_exhaustive()
    }
}

impl<F, T> Cursor for GenerateCursor<F, T>
where
    F: FnMut() -> Option<T> + Clone,
    T: Clone,
{
    type Item = T;

    const CATEGORY: Category = Category::Input;

    fn get(&self) -> T {
        self.walk
            .as_ref()
            .and_then(|walk| walk.borrow().value(self.position).cloned())
            .unwrap_or_else(|| panic!("dereferenced the end of a generated view"))
    }

    fn inc(&mut self) {
        let Some(walk) = &self.walk else {
            return;
        };
        let mut walk = walk.borrow_mut();
        if walk.value(self.position).is_none() {
            return;
        }
        let next = self.position + 1;
        walk.enter(next);
        walk.leave(self.position);
        walk.fill(next);
        drop(walk);
        self.position = next;
    }

    fn is_equal(&self, other: &Self) -> bool {
        match (self.is_exhausted(), other.is_exhausted()) {
            (true, true) => true,
            (false, false) => self.position == other.position,
            _ => false,
        }
    }
}

/// Creates a view over the values `function` returns until it returns
/// `None`.
///
/// # Arguments
///
/// * `function` - Called once per element plus once more to detect the end
#[inline]
pub const fn generate<F, T>(function: F) -> Generate<F>
where
    F: FnMut() -> Option<T> + Clone,
{
    Generate::new(function)
}

/// Creates an endless view over the values `function` returns.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let mut next = 0;
/// let squares = generate_infinite(move || {
///     next += 1;
///     next * next
/// });
/// assert_eq!(squares.take(4).to::<Vec<i32>>(), vec![1, 4, 9, 16]);
/// ```
pub fn generate_infinite<F, T>(mut function: F) -> Generate<impl FnMut() -> Option<T> + Clone>
where
    F: FnMut() -> T + Clone,
{
    Generate::new(move || Some(function()))
}

/// Creates a view by threading a state through `function` until it returns
/// `None`.
///
/// # Arguments
///
/// * `initial` - The state passed to the first call
/// * `function` - Maps a state to the next element and the next state
pub fn unfold<S, F, T>(initial: S, mut function: F) -> Generate<impl FnMut() -> Option<T> + Clone>
where
    S: Clone,
    F: FnMut(S) -> Option<(T, S)> + Clone,
{
    let mut state = Some(initial);
    Generate::new(move || {
        let (value, next) = function(state.take()?)?;
        state = Some(next);
        Some(value)
    })
}

/// Creates an endless view by threading a state through `function`.
pub fn unfold_infinite<S, F, T>(
    initial: S,
    mut function: F,
) -> Generate<impl FnMut() -> Option<T> + Clone>
where
    S: Clone,
    F: FnMut(S) -> (T, S) + Clone,
{
    unfold(initial, move |state| Some(function(state)))
}

/// Creates an endless view repeating `value`.
pub fn repeat<T: Clone>(value: T) -> Generate<impl FnMut() -> Option<T> + Clone> {
    generate_infinite(move || value.clone())
}

/// Creates a view with exactly one element.
#[inline]
pub fn single<T: Clone>(value: T) -> Owning<[T; 1]> {
    owning([value])
}

/// Creates a view with no elements.
#[inline]
pub fn empty<T: Clone>() -> Owning<[T; 0]> {
    owning([])
}

/// Bridges a cloneable standard iterator into a view.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let evens = from_iter((1..).filter(|value| value % 2 == 0));
/// assert_eq!(evens.take(3).to::<Vec<i32>>(), vec![2, 4, 6]);
/// ```
pub fn from_iter<I>(mut iterator: I) -> Generate<impl FnMut() -> Option<I::Item> + Clone>
where
    I: Iterator + Clone,
{
    Generate::new(move || iterator.next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_generate_doubling_until_limit() {
        let mut value = 1;
        let produced: Vec<String> = generate(move || {
            value *= 2;
            (value <= 100).then(|| value.to_string())
        })
        .to();
        assert_eq!(produced, vec!["2", "4", "8", "16", "32", "64"]);
    }

    #[test]
    fn test_generate_calls_function_once_more_than_it_yields() {
        let calls = Cell::new(0);
        let counter = &calls;
        let mut remaining = 3;
        let view = generate(move || {
            counter.set(counter.get() + 1);
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            Some(remaining)
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(view.to::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_each_begin_restarts() {
        let mut next = 0;
        let view = generate(move || {
            next += 1;
            (next <= 2).then_some(next)
        });
        assert_eq!(view.to::<Vec<_>>(), vec![1, 2]);
        assert_eq!(view.to::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_empty_generator() {
        let view = generate(|| None::<i32>);
        assert!(view.is_empty());
        assert!(view.begin().is_exhausted());
    }

    #[test]
    #[should_panic(expected = "dereferenced the end of a generated view")]
    fn test_dereferencing_end_panics() {
        let view = generate(|| None::<i32>);
        let _ = view.end().get();
    }

    #[test]
    fn test_generated_category_is_input() {
        let view = generate(|| Some(1));
        assert_eq!(view.positions().0.category(), Category::Input);
    }

    #[test]
    fn test_unfold_powers_as_strings() {
        let produced: Vec<String> =
            unfold(1, |value| (value <= 100).then(|| (value.to_string(), value * 2))).to();
        assert_eq!(produced, vec!["1", "2", "4", "8", "16", "32", "64"]);
    }

    #[test]
    fn test_unfold_infinite_fibonacci() {
        let fibonacci = unfold_infinite((0_u64, 1_u64), |(current, next)| {
            (current, (next, current + next))
        });
        assert_eq!(
            fibonacci.take(8).to::<Vec<_>>(),
            vec![0, 1, 1, 2, 3, 5, 8, 13]
        );
    }

    #[test]
    fn test_repeat_single_empty() {
        assert_eq!(repeat('x').take(3).to::<String>(), "xxx");
        assert_eq!(single(7).to::<Vec<_>>(), vec![7]);
        assert!(empty::<u8>().is_empty());
    }

    #[test]
    fn test_from_iter_finite() {
        let view = from_iter("a,b".split(','));
        assert_eq!(view.to::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_take_while_on_infinite_generator() {
        let view = iota_like();
        let prefix = view.take_while(|value| *value < 4);
        assert_eq!(prefix.to::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_reads_shared_state_once_per_element() {
        let state = Rc::new(Cell::new(0));
        let shared = Rc::clone(&state);
        let view = generate_infinite(move || {
            shared.set(shared.get() + 1);
            shared.get()
        });
        assert_eq!(view.take(3).to::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(state.get(), 4);
    }

    #[test]
    fn test_take_past_the_end_of_a_finite_generator() {
        let state = Rc::new(Cell::new(0));
        let shared = Rc::clone(&state);
        let view = generate(move || {
            shared.set(shared.get() + 1);
            (shared.get() <= 5).then(|| shared.get())
        });
        let prefix = view.take(8);
        assert_eq!(prefix.count(), 5);
        assert_eq!(prefix.to::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(state.get(), 6);
    }

    #[test]
    fn test_inc_past_the_end_is_a_no_op() {
        let view = generate(|| None::<i32>);
        let mut cursor = view.begin();
        cursor.inc();
        assert!(cursor.is_exhausted());
        assert!(cursor.is_equal(&view.end()));
    }

    #[test]
    fn test_copies_share_the_values_of_their_walk() {
        let calls = Cell::new(0);
        let counter = &calls;
        let view = generate_infinite(move || {
            counter.set(counter.get() + 1);
            counter.get() * 10
        });
        let mut ahead = view.begin();
        let behind = ahead.clone();
        ahead.inc();
        ahead.inc();
        assert_eq!(ahead.get(), 30);
        assert_eq!(behind.get(), 10);
        assert_eq!(behind.clone().get(), 10);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_walk_releases_values_behind_the_oldest_cursor() {
        let view = iota_like();
        let mut cursor = view.begin();
        let anchor = cursor.clone();
        for _ in 0..100 {
            cursor.inc();
        }
        assert_eq!(kept(&cursor), Some(101));
        drop(anchor);
        assert_eq!(kept(&cursor), Some(1));
        assert_eq!(cursor.get(), 101);
    }

    fn kept<F, T>(cursor: &GenerateCursor<F, T>) -> Option<usize> {
        cursor.walk.as_ref().map(|walk| walk.borrow().values.len())
    }

    fn iota_like() -> Generate<impl FnMut() -> Option<u32> + Clone> {
        let mut next: u32 = 0;
        generate_infinite(move || {
            next += 1;
            next
        })
    }
}
