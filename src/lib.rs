//! # Object List - ordered key/value list container
//!
//! An array-like container that layers a uniform set of list operations
//! (append, shift, unshift, pop, slice, splice, map, each, shuffle, duplicate,
//! clear, first/last) plus keyed access and string serialization over an
//! ordered key/value mapping.
//!
//! ## Features
//!
//! - **Ordered**: entries iterate in insertion order
//! - **Mixed keys**: integer auto-index keys alongside string keys
//! - **Array-style renumbering**: shift/unshift/splice renumber integer keys,
//!   string keys stay put
//! - **Round-trippable**: `serialize`/`deserialize` keep key order and key types
//!
//! ## Example
//!
//! ```rust
//! use object_list::{Key, ObjectList};
//!
//! let mut list = ObjectList::new();
//! list.append("a").append("b");
//! list.insert("name", "c");
//!
//! assert_eq!(list.shift(), Some("a"));
//! assert_eq!(list.get(0u64), Some(&"b"));
//! assert_eq!(list.keys().collect::<Vec<_>>(), [&Key::Int(0), &Key::from("name")]);
//!
//! let blob = list.serialize().unwrap();
//! let restored = ObjectList::<String>::from_serialized(&blob).unwrap();
//! assert_eq!(restored.get("name").map(String::as_str), Some("c"));
//! ```

pub mod list;

// Re-export the main public API from the list module
pub use list::{Cursor, EachOutcome, Iter, Key, ListError, ObjectList, OrderedList, Result};
