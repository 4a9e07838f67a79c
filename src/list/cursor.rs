//! Explicit forward-iteration cursor over a list.
//!
//! A `Cursor` borrows the list's entries and tracks its own position, so
//! manual cursor stepping never shares state with the list or with other
//! iterators. While a cursor is alive the list cannot be mutated.

use indexmap::IndexMap;

use crate::list::types::Key;

/// A position within an `ObjectList`, stepped with `advance` and reset with
/// `rewind`.
///
/// # Example
///
/// ```rust
/// use object_list::ObjectList;
///
/// let list: ObjectList<&str> = ["a", "b"].into_iter().collect();
/// let mut cursor = list.cursor();
/// let mut seen = Vec::new();
/// while cursor.valid() {
///     seen.push(*cursor.current().unwrap());
///     cursor.advance();
/// }
/// assert_eq!(seen, ["a", "b"]);
/// ```
#[derive(Debug)]
pub struct Cursor<'a, V> {
    entries: &'a IndexMap<Key, V>,
    position: usize,
}

impl<'a, V> Cursor<'a, V> {
    pub(crate) fn new(entries: &'a IndexMap<Key, V>) -> Self {
        Cursor {
            entries,
            position: 0,
        }
    }

    /// The value under the cursor, or `None` past the end.
    pub fn current(&self) -> Option<&'a V> {
        self.entries.get_index(self.position).map(|(_, value)| value)
    }

    /// The key under the cursor, or `None` past the end.
    pub fn key(&self) -> Option<&'a Key> {
        self.entries.get_index(self.position).map(|(key, _)| key)
    }

    /// Moves to the next entry and returns its value.
    pub fn advance(&mut self) -> Option<&'a V> {
        if self.position < self.entries.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Moves back to the first entry and returns its value.
    pub fn rewind(&mut self) -> Option<&'a V> {
        self.position = 0;
        self.current()
    }

    /// True while the cursor references an existing entry.
    pub fn valid(&self) -> bool {
        self.position < self.entries.len()
    }

    /// Zero-based position of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<V> Clone for Cursor<'_, V> {
    fn clone(&self) -> Self {
        Cursor {
            entries: self.entries,
            position: self.position,
        }
    }
}
