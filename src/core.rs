use crate::error::BlockVecError;
use crate::iter::BlockVecIter;
use crate::layout;

const DEFAULT_BLOCK_SIZE: usize = 16;

/// A zero-allocation string vector storing NUL-terminated strings in
/// fixed-size blocks of a client-provided buffer
#[derive(Debug)]
pub struct BlockVec<'a> {
    pub(crate) buffer: &'a mut [u8],
    pub(crate) block_size: usize,
    pub(crate) block_total: usize,
    pub(crate) block_used: usize,
    pub(crate) count: usize,
}

impl<'a> BlockVec<'a> {
    /// Creates a new `BlockVec` over `buffer` with blocks of `block_size`
    /// bytes. The whole buffer is zeroed.
    ///
    /// Trailing bytes that do not make up a whole block are never used.
    ///
    /// # Errors
    ///
    /// Returns `BlockVecError::InvalidInitialization` if:
    /// - the buffer is shorter than 2 bytes
    /// - `block_size` is less than 2 (one payload byte plus the terminator)
    /// - `block_size` is larger than the buffer
    pub fn new(buffer: &'a mut [u8], block_size: usize) -> Result<Self, BlockVecError> {
        if buffer.len() <= 1 {
            return Err(BlockVecError::InvalidInitialization {
                reason: "buffer must be at least 2 bytes long",
            });
        }
        if block_size <= 1 {
            return Err(BlockVecError::InvalidInitialization {
                reason: "block size must be at least 2",
            });
        }
        if block_size > buffer.len() {
            return Err(BlockVecError::InvalidInitialization {
                reason: "block size exceeds buffer length",
            });
        }

        buffer.fill(0);
        let block_total = buffer.len() / block_size;

        Ok(Self {
            buffer,
            block_size,
            block_total,
            block_used: 0,
            count: 0,
        })
    }

    /// Creates a new `BlockVec` with the default block size (16).
    ///
    /// # Errors
    ///
    /// Returns `BlockVecError::InvalidInitialization` if the buffer is too small.
    pub fn with_default_block_size(buffer: &'a mut [u8]) -> Result<Self, BlockVecError> {
        Self::new(buffer, DEFAULT_BLOCK_SIZE)
    }

    /// Number of strings stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    #[must_use]
    pub fn block_total(&self) -> usize {
        self.block_total
    }

    #[must_use]
    pub fn block_used(&self) -> usize {
        self.block_used
    }

    #[must_use]
    pub fn block_free(&self) -> usize {
        self.block_total - self.block_used
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.block_used == self.block_total
    }

    /// Returns `true` when every string occupies exactly one block. Lookups
    /// are O(1) in this state and O(`block_used`) otherwise.
    #[must_use]
    pub fn is_one_to_one(&self) -> bool {
        self.count == self.block_used
    }

    /// Number of blocks a string of `length` bytes would occupy.
    #[must_use]
    pub fn blocks_required(&self, length: usize) -> usize {
        layout::blocks_required(length, self.block_size)
    }

    /// The block region of the buffer, used and unused.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.block_total * self.block_size]
    }

    pub(crate) fn used_bytes(&self) -> usize {
        self.block_used * self.block_size
    }

    /// Zeroes the buffer and forgets all strings.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
        self.block_used = 0;
        self.count = 0;
    }

    /// Gets the string at the specified index, without its terminator.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.count {
            return None;
        }
        Some(self.payload_at(self.string_block(index)))
    }

    /// Tries to get the string at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `BlockVecError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&[u8], BlockVecError> {
        self.get(index).ok_or(BlockVecError::IndexOutOfBounds {
            index,
            length: self.count,
        })
    }

    #[must_use]
    pub fn first(&self) -> Option<&[u8]> {
        self.get(0)
    }

    #[must_use]
    pub fn last(&self) -> Option<&[u8]> {
        self.count.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Appends a string and returns a view of the stored copy.
    ///
    /// # Errors
    ///
    /// - `EmptyString` if `data` is empty
    /// - `InteriorNul` if `data` contains a zero byte
    /// - `InsufficientCapacity` if the free blocks cannot hold `data`
    pub fn push_back(&mut self, data: &[u8]) -> Result<&[u8], BlockVecError> {
        let blocks = self.reserve(data)?;
        let first = self.block_used;
        Ok(self.write_string(data, first, blocks))
    }

    /// Prepends a string, making it the string at index 0.
    ///
    /// # Errors
    ///
    /// Same as [`BlockVec::insert`].
    pub fn push_front(&mut self, data: &[u8]) -> Result<&[u8], BlockVecError> {
        self.insert(0, data)
    }

    /// Inserts a string so that it ends up at `index`, shifting the strings
    /// from `index` onwards towards the end of the buffer.
    ///
    /// `index == len()` is an append.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if `index > len()`
    /// - otherwise the same as [`BlockVec::push_back`]
    pub fn insert(&mut self, index: usize, data: &[u8]) -> Result<&[u8], BlockVecError> {
        if index > self.count {
            return Err(BlockVecError::IndexOutOfBounds {
                index,
                length: self.count,
            });
        }
        if index == self.count {
            return self.push_back(data);
        }

        let blocks = self.reserve(data)?;
        let first = self.string_block(index);
        self.shift_right(first, blocks);
        Ok(self.write_string(data, first, blocks))
    }

    /// Removes the string at `index`, closing the gap it leaves.
    ///
    /// # Errors
    ///
    /// Returns `BlockVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<(), BlockVecError> {
        if index >= self.count {
            return Err(BlockVecError::IndexOutOfBounds {
                index,
                length: self.count,
            });
        }
        if self.count == 1 {
            self.clear();
            return Ok(());
        }

        let first = self.string_block(index);

        // Tail strings only need their blocks zeroed
        if index == self.count - 1 {
            self.zero_blocks(first, self.block_used);
            self.block_used = first;
            self.count -= 1;
            return Ok(());
        }

        let offset = self.run_blocks(first);
        self.shift_left(first + offset, offset);
        let block_used = self.block_used - offset;
        self.zero_blocks(block_used, self.block_used);
        self.block_used = block_used;
        self.count -= 1;

        Ok(())
    }

    /// Removes the last string.
    ///
    /// # Errors
    ///
    /// Returns `BlockVecError::EmptyVector` if there is nothing to remove.
    pub fn pop_back(&mut self) -> Result<(), BlockVecError> {
        if self.count == 0 {
            return Err(BlockVecError::EmptyVector);
        }
        self.remove(self.count - 1)
    }

    /// Keeps the first `len` strings and drops the rest. Does nothing if
    /// `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.count {
            return;
        }
        if len == 0 {
            self.clear();
            return;
        }
        let first = self.string_block(len);
        self.zero_blocks(first, self.block_used);
        self.block_used = first;
        self.count = len;
    }

    /// Returns an iterator over the stored strings.
    #[must_use]
    pub fn iter(&self) -> BlockVecIter<'_> {
        self.into_iter()
    }

    fn validate(data: &[u8]) -> Result<(), BlockVecError> {
        if data.is_empty() {
            return Err(BlockVecError::EmptyString);
        }
        if let Some(position) = data.iter().position(|&b| b == 0) {
            return Err(BlockVecError::InteriorNul { position });
        }
        Ok(())
    }

    /// Validates `data` and checks that it fits, returning its block count.
    fn reserve(&self, data: &[u8]) -> Result<usize, BlockVecError> {
        Self::validate(data)?;
        let required = self.blocks_required(data.len());
        if required > self.block_free() {
            log::debug!(
                "blockvec full: {} blocks requested, {} of {} free",
                required,
                self.block_free(),
                self.block_total
            );
            return Err(BlockVecError::InsufficientCapacity {
                required,
                available: self.block_free(),
            });
        }
        Ok(required)
    }

    /// Block position of the string at `index`, for `index <= len()`.
    pub(crate) fn string_block(&self, index: usize) -> usize {
        debug_assert!(index <= self.count);
        if index == 0 || self.is_one_to_one() {
            return index;
        }

        let mut remaining = index;
        let mut bn = 0;
        while remaining > 0 {
            if self.is_block_terminal(bn) {
                remaining -= 1;
            }
            bn += 1;
        }
        bn
    }

    pub(crate) fn block(&self, bn: usize) -> &[u8] {
        &self.buffer[layout::block_range(bn, bn + 1, self.block_size)]
    }

    pub(crate) fn is_block_terminal(&self, bn: usize) -> bool {
        debug_assert!(bn < self.block_used);
        self.is_one_to_one() || layout::is_terminal(self.block(bn))
    }

    /// Number of blocks of the string starting at block `first`.
    pub(crate) fn run_blocks(&self, first: usize) -> usize {
        if self.is_one_to_one() {
            return 1;
        }
        let mut last = first;
        while !self.is_block_terminal(last) {
            last += 1;
        }
        last - first + 1
    }

    /// Payload of the string starting at block `first`.
    pub(crate) fn payload_at(&self, first: usize) -> &[u8] {
        let run = &self.buffer[first * self.block_size..self.used_bytes()];
        &run[..layout::payload_len(run)]
    }

    /// Copies `data` to block `first` and accounts for `blocks` new blocks.
    /// The target blocks must be zero and free.
    pub(crate) fn write_string(&mut self, data: &[u8], first: usize, blocks: usize) -> &[u8] {
        debug_assert!(first + blocks <= self.block_total);
        debug_assert!(data.len() < blocks * self.block_size);

        let start = first * self.block_size;
        let end = start + data.len();
        self.buffer[start..end].copy_from_slice(data);
        self.block_used += blocks;
        self.count += 1;
        &self.buffer[start..end]
    }

    pub(crate) fn zero_blocks(&mut self, first: usize, last: usize) {
        self.buffer[layout::block_range(first, last, self.block_size)].fill(0);
    }

    /// Moves blocks `[first, block_used)` right by `offset` blocks and zeroes
    /// the gap. Leaves zero blocks inside the used region, which the caller
    /// must fill immediately.
    fn shift_right(&mut self, first: usize, offset: usize) {
        debug_assert!(self.block_used + offset <= self.block_total);
        let source = layout::block_range(first, self.block_used, self.block_size);
        self.buffer
            .copy_within(source, (first + offset) * self.block_size);
        self.zero_blocks(first, first + offset);
    }

    /// Moves blocks `[first, block_used)` left by `offset` blocks. Leaves
    /// stale copies in the last `offset` used blocks.
    fn shift_left(&mut self, first: usize, offset: usize) {
        debug_assert!(offset <= first);
        let source = layout::block_range(first, self.block_used, self.block_size);
        self.buffer
            .copy_within(source, (first - offset) * self.block_size);
    }
}
