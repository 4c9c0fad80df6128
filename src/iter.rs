use crate::core::BlockVec;
use crate::layout;

/// Offset of the string following the one that starts at `pos`: whole blocks
/// are skipped until the block just crossed ends with a terminator.
fn next_string_start(used: &[u8], block_size: usize, pos: usize) -> usize {
    let mut pos = pos;
    loop {
        pos += block_size;
        if pos >= used.len() || layout::is_terminal(&used[pos - block_size..pos]) {
            return pos.min(used.len());
        }
    }
}

/// Offset of the string that ends right before `pos`.
fn prev_string_start(used: &[u8], block_size: usize, pos: usize) -> usize {
    let mut start = pos - block_size;
    while start > 0 && !layout::is_terminal(&used[start - block_size..start]) {
        start -= block_size;
    }
    start
}

fn payload(run: &[u8]) -> &[u8] {
    &run[..layout::payload_len(run)]
}

/// Cursor-style traversal over byte offsets. A cursor is the offset of the
/// first byte of a string and is only meaningful until the next mutation.
impl BlockVec<'_> {
    /// Cursor of the first string. Equals [`BlockVec::end`] when empty.
    #[must_use]
    pub fn begin(&self) -> usize {
        0
    }

    /// One-past-the-last used byte. Never names a string.
    #[must_use]
    pub fn end(&self) -> usize {
        self.used_bytes()
    }

    /// Advances `pos` to the start of the next string, stepping over all
    /// blocks of a multi-block string at once. Never returns more than
    /// [`BlockVec::end`].
    ///
    /// A `pos` inside a block is first moved back to the start of that block.
    #[must_use]
    pub fn next_position(&self, pos: usize) -> usize {
        if pos >= self.end() {
            return self.end();
        }
        let pos = pos - pos % self.block_size;
        next_string_start(&self.buffer[..self.end()], self.block_size, pos)
    }

    /// The string starting at cursor `pos`, or `None` if `pos` is not a
    /// block boundary inside the used region.
    #[must_use]
    pub fn string_at(&self, pos: usize) -> Option<&[u8]> {
        if pos >= self.end() || pos % self.block_size != 0 {
            return None;
        }
        Some(payload(&self.buffer[pos..self.end()]))
    }
}

/// Iterator over strings in a `BlockVec`
///
/// This iterator implements `Clone` and can run from both ends.
#[derive(Clone)]
pub struct BlockVecIter<'a> {
    used: &'a [u8],
    block_size: usize,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a> Iterator for BlockVecIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let start = self.front;
        self.front = next_string_start(self.used, self.block_size, start);
        self.remaining -= 1;
        Some(payload(&self.used[start..self.front]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for BlockVecIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let end = self.back;
        self.back = prev_string_start(self.used, self.block_size, end);
        self.remaining -= 1;
        Some(payload(&self.used[self.back..end]))
    }
}

impl ExactSizeIterator for BlockVecIter<'_> {}

impl<'a> IntoIterator for &'a BlockVec<'_> {
    type Item = &'a [u8];
    type IntoIter = BlockVecIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        let used = &self.buffer[..self.used_bytes()];
        BlockVecIter {
            used,
            block_size: self.block_size,
            front: 0,
            back: used.len(),
            remaining: self.count,
        }
    }
}
