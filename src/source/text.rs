//! Character views over string data.

use std::ops::Deref;

use crate::cursor::{BidirectionalCursor, Category, Cursor, OrderedCursor};
use crate::view::View;

/// A view over the characters of a string.
///
/// `H` is the text holder: `&str` for a referencing view, `Rc<str>` for an
/// owning one.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let shouted: String = all("héllo").transform(|c: char| c.to_ascii_uppercase()).to();
/// assert_eq!(shouted, "HéLLO");
/// assert_eq!(all("abc").back(), Ok('c'));
/// ```
#[derive(Debug, Clone)]
pub struct Text<H> {
    text: H,
}

impl<H: Deref<Target = str> + Clone> Text<H> {
    /// Creates a character view over `text`.
    #[inline]
    pub const fn new(text: H) -> Self {
        Self { text }
    }

    /// The underlying string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl<H: Deref<Target = str> + Clone> View for Text<H> {
    type Cursor = TextCursor<H>;

    fn begin(&self) -> TextCursor<H> {
        TextCursor {
            text: self.text.clone(),
            offset: 0,
        }
    }

    fn end(&self) -> TextCursor<H> {
        TextCursor {
            offset: self.text.len(),
            text: self.text.clone(),
        }
    }
}

/// A bidirectional cursor over a string, positioned at a byte offset that
/// is always a character boundary.
#[derive(Debug, Clone)]
pub struct TextCursor<H> {
    text: H,
    offset: usize,
}

impl<H: Deref<Target = str>> TextCursor<H> {
    /// The byte offset of the current character.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    fn current(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }
}

impl<H: Deref<Target = str> + Clone> Cursor for TextCursor<H> {
    type Item = char;

    const CATEGORY: Category = Category::Bidirectional;

    fn get(&self) -> char {
        self.current()
            .unwrap_or_else(|| panic!("dereferenced the end of a text view"))
    }

    fn inc(&mut self) {
        self.offset += self.current().map_or(1, char::len_utf8);
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl<H: Deref<Target = str> + Clone> BidirectionalCursor for TextCursor<H> {
    fn dec(&mut self) {
        let width = self.text[..self.offset]
            .chars()
            .next_back()
            .map_or(1, char::len_utf8);
        self.offset -= width;
    }
}

impl<H: Deref<Target = str> + Clone> OrderedCursor for TextCursor<H> {
    fn is_less(&self, other: &Self) -> bool {
        self.offset < other.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_multibyte_forward() {
        let view = Text::new("añb");
        let collected: Vec<char> = view.iter().collect();
        assert_eq!(collected, vec!['a', 'ñ', 'b']);
    }

    #[test]
    fn test_multibyte_backward() {
        let view = Text::new("añb");
        let collected: String = view.iter().rev().collect();
        assert_eq!(collected, "bña");
    }

    #[test]
    fn test_offsets_are_boundaries() {
        let view = Text::new("ñx");
        let mut cursor = view.begin();
        cursor.inc();
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.get(), 'x');
    }

    #[test]
    fn test_owned_text() {
        let view = Text::new(Rc::<str>::from(String::from("hey")));
        assert_eq!(view.count(), 3);
        assert_eq!(view.as_str(), "hey");
    }

    #[test]
    #[should_panic(expected = "end of a text view")]
    fn test_deref_end_panics() {
        let view = Text::new("");
        let _ = view.begin().get();
    }
}
