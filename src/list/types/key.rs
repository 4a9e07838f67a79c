//! Key type for list entries.
//!
//! This module contains the Key enum, which identifies an entry within an
//! `ObjectList`. Keys are either non-negative integers (assigned automatically
//! on append, renumbered by shift/unshift/splice/shuffle) or strings (kept as-is
//! by every operation except shuffle).

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A key identifying one entry in an `ObjectList`.
///
/// Integer and string keys never compare equal: `Key::Int(1)` and
/// `Key::Str("one".into())` are distinct. Strings that spell a canonical
/// non-negative integer are normalized to `Key::Int` when converted with
/// `From`, so `Key::from("3") == Key::Int(3)`. The list normalizes every key
/// it is handed, so a hand-built `Key::Str("3".into())` also lands on
/// `Key::Int(3)`.
///
/// # Serialization
///
/// The key is written untagged: integer keys as JSON numbers, string keys as
/// JSON strings. Decoding applies the same normalization as `From`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Key {
    /// An integer (auto-index) key
    Int(u64),
    /// A named key
    Str(String),
}

impl Key {
    /// Returns the integer value if this is an integer key.
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Key::Int(index) => Some(*index),
            Key::Str(_) => None,
        }
    }

    /// Returns the string value if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(name) => Some(name),
        }
    }

    /// Returns true for integer keys.
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Turns a string key spelling a canonical integer into that integer key.
    pub fn normalize(self) -> Self {
        match self {
            Key::Str(name) => Key::from(name),
            int => int,
        }
    }
}

/// Parses `name` as a canonical decimal integer: no sign, no leading zeros,
/// no surrounding whitespace, and within `u64` range.
fn canonical_index(name: &str) -> Option<u64> {
    let bytes = name.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    name.parse().ok()
}

impl From<u64> for Key {
    fn from(index: u64) -> Self {
        Key::Int(index)
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Key::Int(u64::from(index))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Int(index as u64)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match canonical_index(name) {
            Some(index) => Key::Int(index),
            None => Key::Str(name.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        match canonical_index(&name) {
            Some(index) => Key::Int(index),
            None => Key::Str(name),
        }
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a string")
    }

    fn visit_u64<E: de::Error>(self, index: u64) -> Result<Key, E> {
        Ok(Key::Int(index))
    }

    fn visit_i64<E: de::Error>(self, index: i64) -> Result<Key, E> {
        u64::try_from(index)
            .map(Key::Int)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(index), &self))
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<Key, E> {
        Ok(Key::from(name))
    }

    fn visit_string<E: de::Error>(self, name: String) -> Result<Key, E> {
        Ok(Key::from(name))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(index) => write!(f, "{index}"),
            Key::Str(name) => f.write_str(name),
        }
    }
}
