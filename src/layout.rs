//! Block arithmetic shared by the container operations.
//!
//! A block position `bn` covers the byte range
//! `bn * block_size .. (bn + 1) * block_size`. All helpers here are pure.

use core::ops::Range;

/// Number of blocks needed to store `length` payload bytes plus the
/// terminator.
#[must_use]
pub fn blocks_required(length: usize, block_size: usize) -> usize {
    (length + 1).div_ceil(block_size)
}

/// Byte range covered by the blocks `[first, last)`.
#[must_use]
pub fn block_range(first: usize, last: usize, block_size: usize) -> Range<usize> {
    first * block_size..last * block_size
}

/// Length of the payload at the start of `run`, i.e. the offset of the
/// first terminator.
#[must_use]
pub fn payload_len(run: &[u8]) -> usize {
    run.iter().position(|&b| b == 0).unwrap_or(run.len())
}

/// Whether the final byte of `block` is a terminator.
#[must_use]
pub fn is_terminal(block: &[u8]) -> bool {
    block.last().is_some_and(|&b| b == 0)
}

/// First occurrence of `needle` in `haystack`.
pub(crate) fn find_seq(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
