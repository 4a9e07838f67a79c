//! The capability set shared by ordered-list containers.
//!
//! Code that only needs list behaviour can be written against `OrderedList`
//! instead of a concrete container:
//!
//! ```rust
//! use object_list::{ObjectList, OrderedList};
//!
//! fn fill<L: OrderedList<Value = u32>>(list: &mut L, n: u32) {
//!     for i in 0..n {
//!         list.append(i);
//!     }
//! }
//!
//! let mut list = ObjectList::new();
//! fill(&mut list, 3);
//! assert_eq!(OrderedList::count(&list), 3);
//! ```
//!
//! Implementations are not synchronized. Sharing one across threads needs
//! external locking by the caller.

use crate::list::each::EachOutcome;
use crate::list::types::Key;

/// An ordered key/value collection with array-style list operations.
pub trait OrderedList: Sized {
    /// The stored value type
    type Value;

    /// Forward iterator over `(key, value)` pairs in order
    type Iter<'a>: Iterator<Item = (&'a Key, &'a Self::Value)>
    where
        Self: 'a;

    /// The list type produced by `map`
    type Mapped<U>: OrderedList<Value = U>;

    /// Number of entries.
    fn count(&self) -> usize;

    /// Iterates entries in order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Value of the first entry.
    fn first(&self) -> Option<&Self::Value>;

    /// Value of the last entry.
    fn last(&self) -> Option<&Self::Value>;

    /// Adds a value at the end under the next auto-index.
    fn append(&mut self, value: Self::Value) -> &mut Self;

    /// Removes and returns the first value, renumbering integer keys from 0.
    fn shift(&mut self) -> Option<Self::Value>;

    /// Inserts a value at the front, renumbering integer keys from 0.
    fn unshift(&mut self, value: Self::Value) -> &mut Self;

    /// Removes and returns the last value.
    fn pop(&mut self) -> Option<Self::Value>;

    /// Copies out a sub-sequence without touching this list.
    fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Self
    where
        Self::Value: Clone;

    /// Removes a sub-sequence, puts `replacement` in its place and returns
    /// the removed entries.
    fn splice<I>(&mut self, offset: isize, length: isize, replacement: I) -> Self
    where
        I: IntoIterator<Item = Self::Value>;

    /// Calls `callback` on each value in order until it asks to stop.
    fn each<F, R>(&self, callback: F) -> &Self
    where
        F: FnMut(&Self::Value) -> R,
        R: EachOutcome;

    /// Builds a new list of transformed values under the same keys.
    fn map<U, F>(&self, callback: F) -> Self::Mapped<U>
    where
        F: FnMut(&Self::Value) -> U;

    /// Randomizes the order, replacing all keys with `0..count`.
    fn shuffle(&mut self) -> &mut Self;

    /// Returns an independent copy.
    fn duplicate(&self) -> Self
    where
        Self::Value: Clone;

    /// Removes every entry.
    fn clear(&mut self) -> &mut Self;
}
