//! Offset/length resolution for slice and splice.
//!
//! Both operations accept a signed offset and an optional signed length, with
//! the conventional array meaning:
//!
//! - a negative offset counts back from the end (clamped to the start)
//! - an offset past the end selects nothing (splice inserts at the end)
//! - no length runs to the end
//! - a negative length stops that many entries before the end

use std::ops::Range;

/// Resolves `offset`/`length` against a sequence of `len` entries into the
/// positional range they select. The returned range is always within `0..len`.
pub(crate) fn resolve(len: usize, offset: isize, length: Option<isize>) -> Range<usize> {
    let len_signed = len as isize;

    let start = if offset < 0 {
        (len_signed + offset).max(0)
    } else {
        offset.min(len_signed)
    };
    let remaining = len_signed - start;

    let count = match length {
        None => remaining,
        Some(length) if length < 0 => (remaining + length).max(0),
        Some(length) => length.min(remaining),
    };

    let start = start as usize;
    start..start + count as usize
}
