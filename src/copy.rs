use crate::core::BlockVec;
use crate::error::BlockVecError;
use crate::layout;

/// Algorithm used by [`BlockVec::copy_from`], from cheapest to most general.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStrategy {
    /// Same block size and enough destination blocks: one bulk copy of the
    /// used region.
    Bijective,
    /// One-to-one source into blocks at least as large: one copy per block,
    /// no length computation.
    Injective,
    /// Per-string copy with block counts recomputed in the destination's
    /// block size. The only strategy that may stop early.
    Stringwise,
}

impl CopyStrategy {
    /// Picks the cheapest strategy that is valid for copying `source` into
    /// `dest` once `dest` is cleared.
    #[must_use]
    pub fn select(dest: &BlockVec<'_>, source: &BlockVec<'_>) -> Self {
        let fits = dest.block_total >= source.block_used;
        if dest.block_size == source.block_size && fits {
            Self::Bijective
        } else if dest.block_size >= source.block_size && source.is_one_to_one() && fits {
            Self::Injective
        } else {
            Self::Stringwise
        }
    }
}

impl BlockVec<'_> {
    /// Replaces the content with as many strings of `source` as fit,
    /// keeping this vector's block size. Returns the number of strings copied.
    ///
    /// The vector is cleared even when nothing can be copied.
    pub fn copy_from(&mut self, source: &BlockVec<'_>) -> usize {
        self.clear();
        if source.is_empty() {
            return 0;
        }

        let strategy = CopyStrategy::select(self, source);
        log::trace!(
            "copy {} strings ({} -> {} byte blocks) using {:?}",
            source.count,
            source.block_size,
            self.block_size,
            strategy
        );

        match strategy {
            CopyStrategy::Bijective => self.copy_bijective(source),
            CopyStrategy::Injective => self.copy_injective(source),
            CopyStrategy::Stringwise => self.copy_stringwise(source),
        }
        self.count
    }

    /// Copies all of `source` or nothing.
    ///
    /// # Errors
    ///
    /// Returns `BlockVecError::CapacityMismatch` without touching this vector
    /// if `source` needs more blocks of this vector's size than it has.
    pub fn try_copy_from(&mut self, source: &BlockVec<'_>) -> Result<usize, BlockVecError> {
        let required = self.blocks_needed_for(source);
        if required > self.block_total {
            return Err(BlockVecError::CapacityMismatch {
                required,
                available: self.block_total,
            });
        }
        Ok(self.copy_from(source))
    }

    /// Blocks of this vector's size needed to hold every string of `source`.
    #[must_use]
    pub fn blocks_needed_for(&self, source: &BlockVec<'_>) -> usize {
        if self.block_size == source.block_size {
            return source.block_used;
        }
        source
            .iter()
            .map(|s| layout::blocks_required(s.len(), self.block_size))
            .sum()
    }

    fn copy_bijective(&mut self, source: &BlockVec<'_>) {
        let used = source.used_bytes();
        self.buffer[..used].copy_from_slice(&source.buffer[..used]);
        self.block_used = source.block_used;
        self.count = source.count;
    }

    fn copy_injective(&mut self, source: &BlockVec<'_>) {
        // The last byte of every source block is its terminator
        let width = source.block_size - 1;
        for bn in 0..source.count {
            let from = bn * source.block_size;
            let to = bn * self.block_size;
            self.buffer[to..to + width].copy_from_slice(&source.buffer[from..from + width]);
        }
        self.block_used = source.count;
        self.count = source.count;
    }

    fn copy_stringwise(&mut self, source: &BlockVec<'_>) {
        for string in source {
            let required = self.blocks_required(string.len());
            if required > self.block_free() {
                log::debug!(
                    "copy stopped after {} of {} strings: {} blocks needed, {} free",
                    self.count,
                    source.count,
                    required,
                    self.block_free()
                );
                break;
            }
            let first = self.block_used;
            self.write_string(string, first, required);
        }
    }
}
