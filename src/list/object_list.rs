//! Core list container implementation.
//!
//! This module contains the `ObjectList` struct: an ordered mapping from `Key`
//! to value with array-style list operations layered on top.

use std::iter;
use std::mem;

use indexmap::IndexMap;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use crate::list::cursor::Cursor;
use crate::list::each::EachOutcome;
use crate::list::interface::OrderedList;
use crate::list::range;
use crate::list::types::Key;

/// Forward iterator over `(key, value)` pairs of an `ObjectList`.
pub type Iter<'a, V> = indexmap::map::Iter<'a, Key, V>;

/// An ordered key/value list.
///
/// Entries keep insertion order. Appending without a key assigns the next
/// auto-index: one past the largest integer key ever stored. Removing that key
/// with `unset` does not lower it; `pop` of the newest auto-indexed entry
/// does. Key-renumbering operations and `clear` reset it. Operations split
/// into two groups by what they do to keys:
///
/// - key-preserving: `set`, `insert`, `unset`, `pop`, `map`, and `slice` with
///   `preserve_keys`
/// - key-renumbering: `shift`, `unshift`, `splice` and `slice` renumber integer
///   keys from 0 while leaving string keys alone; `shuffle` replaces every key
///
/// # Concurrency
///
/// `ObjectList` does no internal locking. Callers that share one between
/// threads must wrap it in their own lock.
pub struct ObjectList<V> {
    /// The ordered entries
    pub(crate) entries: IndexMap<Key, V>,
    /// Key for the next keyless append
    next_index: u64,
}

/// One past the largest integer key in `entries`, or 0.
fn index_after<V>(entries: &IndexMap<Key, V>) -> u64 {
    entries
        .keys()
        .filter_map(Key::as_int)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

/// Renumbers integer keys to `0..` in order, keeping string keys.
fn renumber<V>(entries: impl IntoIterator<Item = (Key, V)>) -> IndexMap<Key, V> {
    let mut next = 0u64;
    entries
        .into_iter()
        .map(|(key, value)| match key {
            Key::Int(_) => {
                let key = Key::Int(next);
                next += 1;
                (key, value)
            }
            named => (named, value),
        })
        .collect()
}

impl<V> ObjectList<V> {
    /// Creates an empty list.
    pub fn new() -> Self {
        ObjectList {
            entries: IndexMap::new(),
            next_index: 0,
        }
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        ObjectList {
            entries: IndexMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Builds a list from explicit `(key, value)` pairs. A repeated key keeps
    /// its first position and takes the last value.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        ObjectList::from_map(
            entries
                .into_iter()
                .map(|(key, value)| (Key::normalize(key.into()), value))
                .collect(),
        )
    }

    /// Wraps an already-built map, deriving the auto-index from its keys.
    pub(crate) fn from_map(entries: IndexMap<Key, V>) -> Self {
        let next_index = index_after(&entries);
        ObjectList {
            entries,
            next_index,
        }
    }

    /// Replaces the entries after a bulk rebuild of the keys.
    fn replace_entries(&mut self, entries: IndexMap<Key, V>) {
        self.next_index = index_after(&entries);
        self.entries = entries;
    }

    /// Records an integer key so later appends land after it.
    fn track_key(&mut self, key: &Key) {
        if let Key::Int(index) = key {
            self.next_index = self.next_index.max(index.saturating_add(1));
        }
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is present.
    pub fn exists(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&Key::normalize(key.into()))
    }

    /// Value stored under `key`, or `None` if absent.
    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.entries.get(&Key::normalize(key.into()))
    }

    /// Mutable access to the value stored under `key`, if present.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut V> {
        self.entries.get_mut(&Key::normalize(key.into()))
    }

    /// Stores `value` under `key`, or under the next auto-index when `key` is
    /// `None`. Overwriting keeps the entry's position.
    ///
    /// Returns the stored value in both forms, not the new count; use `count`
    /// after a keyless `set` for that.
    pub fn set(&mut self, key: Option<Key>, value: V) -> &V {
        let key = match key {
            Some(key) => key.normalize(),
            None => Key::Int(self.next_index),
        };
        self.track_key(&key);
        let (index, _) = self.entries.insert_full(key, value);
        &self.entries[index]
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        let key = Key::normalize(key.into());
        self.track_key(&key);
        self.entries.insert(key, value)
    }

    /// Removes `key` without renumbering the remaining keys. Absent keys are
    /// a no-op.
    pub fn unset(&mut self, key: impl Into<Key>) -> Option<V> {
        self.entries.shift_remove(&Key::normalize(key.into()))
    }

    /// The key the next keyless append will use.
    ///
    /// When the largest key is `u64::MAX` the next append overwrites that entry.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Value of the first entry.
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, value)| value)
    }

    /// Value of the last entry.
    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, value)| value)
    }

    /// Adds `value` at the end under the next auto-index.
    pub fn append(&mut self, value: V) -> &mut Self {
        let key = Key::Int(self.next_index);
        self.track_key(&key);
        self.entries.insert(key, value);
        self
    }

    /// Removes and returns the first value. Remaining integer keys are
    /// renumbered from 0.
    pub fn shift(&mut self) -> Option<V> {
        let (_, value) = self.entries.shift_remove_index(0)?;
        let entries = renumber(mem::take(&mut self.entries));
        self.replace_entries(entries);
        Some(value)
    }

    /// Inserts `value` at the front under key 0, renumbering the other integer
    /// keys after it.
    pub fn unshift(&mut self, value: V) -> &mut Self {
        let entries = mem::take(&mut self.entries);
        self.replace_entries(renumber(iter::once((Key::Int(0), value)).chain(entries)));
        self
    }

    /// Removes and returns the last value. Popping the most recent
    /// auto-index hands that index back to the next append.
    pub fn pop(&mut self) -> Option<V> {
        let (key, value) = self.entries.pop()?;
        if key.as_int().map(|index| index.saturating_add(1)) == Some(self.next_index) {
            self.next_index -= 1;
        }
        Some(value)
    }

    /// Copies out the entries selected by `offset` and `length`.
    ///
    /// A negative `offset` counts back from the end; `None` for `length` runs
    /// to the end and a negative `length` stops that many entries before it.
    /// Integer keys are renumbered from 0 unless `preserve_keys` is set.
    pub fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Self
    where
        V: Clone,
    {
        let range = range::resolve(self.entries.len(), offset, length);
        let selected = self
            .entries
            .iter()
            .skip(range.start)
            .take(range.len())
            .map(|(key, value)| (key.clone(), value.clone()));

        let entries = if preserve_keys {
            selected.collect()
        } else {
            renumber(selected)
        };
        ObjectList::from_map(entries)
    }

    /// Removes `length` entries starting at `offset`, inserts `replacement` in
    /// their place and returns the removed entries.
    ///
    /// Offsets and lengths follow `slice`, with an offset past the end
    /// inserting at the end. Integer keys are renumbered from 0 in both the
    /// list and the returned entries.
    pub fn splice<I>(&mut self, offset: isize, length: isize, replacement: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let range = range::resolve(self.entries.len(), offset, Some(length));
        let mut entries: Vec<(Key, V)> = mem::take(&mut self.entries).into_iter().collect();

        // Placeholder keys; renumbering assigns the real ones.
        let inserted = replacement.into_iter().map(|value| (Key::Int(0), value));
        let removed: Vec<(Key, V)> = entries.splice(range.clone(), inserted).collect();

        self.replace_entries(renumber(entries));
        trace!(
            start = range.start,
            removed = removed.len(),
            count = self.entries.len(),
            "Spliced list"
        );

        ObjectList::from_map(renumber(removed))
    }

    /// Calls `callback` on each value in order. Iteration stops early only when
    /// the callback returns `false` (or `ControlFlow::Break`).
    pub fn each<F, R>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&V) -> R,
        R: EachOutcome,
    {
        for value in self.entries.values() {
            if callback(value).should_stop() {
                break;
            }
        }
        self
    }

    /// Like `each`, but the first error returned by `callback` ends iteration
    /// and is handed back unchanged.
    pub fn try_each<F, R, E>(&self, mut callback: F) -> Result<&Self, E>
    where
        F: FnMut(&V) -> Result<R, E>,
        R: EachOutcome,
    {
        for value in self.entries.values() {
            if callback(value)?.should_stop() {
                break;
            }
        }
        Ok(self)
    }

    /// Builds a new list of transformed values under the same keys.
    pub fn map<U, F>(&self, mut callback: F) -> ObjectList<U>
    where
        F: FnMut(&V) -> U,
    {
        ObjectList {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), callback(value)))
                .collect(),
            next_index: self.next_index,
        }
    }

    /// Like `map`, but stops at and returns the first error from `callback`.
    pub fn try_map<U, E, F>(&self, mut callback: F) -> Result<ObjectList<U>, E>
    where
        F: FnMut(&V) -> Result<U, E>,
    {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| Ok((key.clone(), callback(value)?)))
            .collect::<Result<_, E>>()?;
        Ok(ObjectList {
            entries,
            next_index: self.next_index,
        })
    }

    /// The raw ordered mapping.
    pub fn entries(&self) -> &IndexMap<Key, V> {
        &self.entries
    }

    /// Consumes the list, returning its ordered mapping.
    pub fn into_entries(self) -> IndexMap<Key, V> {
        self.entries
    }

    /// Randomizes the order using the thread-local generator. Every key,
    /// string keys included, is replaced by its new position.
    pub fn shuffle(&mut self) -> &mut Self {
        self.shuffle_with(&mut rand::rng())
    }

    /// Randomizes the order using `rng`. See `shuffle`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let mut values: Vec<V> = mem::take(&mut self.entries).into_values().collect();
        values.shuffle(rng);

        self.next_index = values.len() as u64;
        self.entries = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (Key::from(index), value))
            .collect();
        trace!(count = self.entries.len(), "Shuffled list");
        self
    }

    /// Returns an independent copy of the list.
    pub fn duplicate(&self) -> Self
    where
        V: Clone,
    {
        self.clone()
    }

    /// Removes every entry.
    pub fn clear(&mut self) -> &mut Self {
        trace!(count = self.entries.len(), "Clearing list");
        self.entries.clear();
        self.next_index = 0;
        self
    }

    /// A cursor positioned at the first entry.
    pub fn cursor(&self) -> Cursor<'_, V> {
        Cursor::new(&self.entries)
    }

    /// Iterates `(key, value)` pairs in order.
    pub fn iter(&self) -> Iter<'_, V> {
        self.entries.iter()
    }

    /// Iterates keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Iterates values in order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }
}

impl<V> OrderedList for ObjectList<V> {
    type Value = V;
    type Iter<'a>
        = indexmap::map::Iter<'a, Key, V>
    where
        Self: 'a;
    type Mapped<U> = ObjectList<U>;

    fn count(&self) -> usize {
        ObjectList::count(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        ObjectList::iter(self)
    }

    fn first(&self) -> Option<&V> {
        ObjectList::first(self)
    }

    fn last(&self) -> Option<&V> {
        ObjectList::last(self)
    }

    fn append(&mut self, value: V) -> &mut Self {
        ObjectList::append(self, value)
    }

    fn shift(&mut self) -> Option<V> {
        ObjectList::shift(self)
    }

    fn unshift(&mut self, value: V) -> &mut Self {
        ObjectList::unshift(self, value)
    }

    fn pop(&mut self) -> Option<V> {
        ObjectList::pop(self)
    }

    fn slice(&self, offset: isize, length: Option<isize>, preserve_keys: bool) -> Self
    where
        V: Clone,
    {
        ObjectList::slice(self, offset, length, preserve_keys)
    }

    fn splice<I>(&mut self, offset: isize, length: isize, replacement: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        ObjectList::splice(self, offset, length, replacement)
    }

    fn each<F, R>(&self, callback: F) -> &Self
    where
        F: FnMut(&V) -> R,
        R: EachOutcome,
    {
        ObjectList::each(self, callback)
    }

    fn map<U, F>(&self, callback: F) -> ObjectList<U>
    where
        F: FnMut(&V) -> U,
    {
        ObjectList::map(self, callback)
    }

    fn shuffle(&mut self) -> &mut Self {
        ObjectList::shuffle(self)
    }

    fn duplicate(&self) -> Self
    where
        V: Clone,
    {
        ObjectList::duplicate(self)
    }

    fn clear(&mut self) -> &mut Self {
        ObjectList::clear(self)
    }
}

impl<V> Default for ObjectList<V> {
    fn default() -> Self {
        ObjectList::new()
    }
}

impl<V: Clone> Clone for ObjectList<V> {
    fn clone(&self) -> Self {
        ObjectList {
            entries: self.entries.clone(),
            next_index: self.next_index,
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for ObjectList<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// Lists are equal when they hold the same `(key, value)` pairs in the same
/// order.
impl<V: PartialEq> PartialEq for ObjectList<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<V: Eq> Eq for ObjectList<V> {}

impl<V> FromIterator<V> for ObjectList<V> {
    fn from_iter<I: IntoIterator<Item = V>>(values: I) -> Self {
        let entries: IndexMap<Key, V> = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (Key::from(index), value))
            .collect();
        ObjectList {
            next_index: entries.len() as u64,
            entries,
        }
    }
}

impl<V> From<Vec<V>> for ObjectList<V> {
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl<V> Extend<V> for ObjectList<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, values: I) {
        for value in values {
            self.append(value);
        }
    }
}

impl<V> IntoIterator for ObjectList<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a ObjectList<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
