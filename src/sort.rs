use core::cmp::Ordering;

use crate::core::BlockVec;
use crate::layout;

impl BlockVec<'_> {
    /// Sorts the strings in byte-lexicographic order.
    pub fn sort(&mut self) {
        self.sort_by(|a, b| a.cmp(b));
    }

    /// Sorts the strings with `compare`, in place and without scratch memory.
    ///
    /// Selection sort: the smallest remaining string is rotated into place in
    /// front of the unsorted blocks, so the sort is stable and the strings in
    /// between keep their order. O(n²) comparisons.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        let mut target = 0;
        for sorted in 0..self.count {
            let mut min = (target, self.run_blocks(target));
            let mut bn = target + min.1;
            for _ in sorted + 1..self.count {
                let blocks = self.run_blocks(bn);
                if compare(self.payload_at(bn), self.payload_at(min.0)) == Ordering::Less {
                    min = (bn, blocks);
                }
                bn += blocks;
            }

            let (min_block, min_blocks) = min;
            if min_block != target {
                let range = layout::block_range(target, min_block + min_blocks, self.block_size);
                self.buffer[range].rotate_right(min_blocks * self.block_size);
            }
            target += min_blocks;
        }
    }
}
