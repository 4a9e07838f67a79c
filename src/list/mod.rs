//! Ordered list container module.
//!
//! This module contains the `ObjectList` container, the `OrderedList`
//! capability trait it implements, and its supporting types.

mod codec;
pub mod cursor;
pub mod each;
pub mod interface;
pub mod object_list;
mod range;
pub mod types;

// Re-export the main public API
pub use cursor::Cursor;
pub use each::EachOutcome;
pub use interface::OrderedList;
pub use object_list::{Iter, ObjectList};
pub use types::{Key, ListError, Result};
