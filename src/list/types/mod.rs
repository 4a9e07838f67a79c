//! Type definitions for the list.
//!
//! This module contains the key and error types shared by the container,
//! its cursor and its codec.

pub mod error;
pub mod key;

pub use error::{ListError, Result};
pub use key::Key;
