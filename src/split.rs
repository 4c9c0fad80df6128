use crate::core::BlockVec;
use crate::error::BlockVecError;
use crate::layout;

impl BlockVec<'_> {
    /// Appends every non-empty segment of `input` delimited by `separator`.
    ///
    /// Returns `input.len()` when everything was stored. When a segment does
    /// not fit, stops and returns the offset of that segment's first byte;
    /// the segments stored before it are kept.
    ///
    /// Unless `separator` is 0, `input` ends at its first zero byte, so a
    /// trailing terminator may be passed or left out. Splitting a
    /// NUL-delimited blob with `separator == 0` loads it string by string.
    pub fn split(&mut self, input: &[u8], separator: u8) -> usize {
        let text = if separator == 0 {
            input
        } else {
            &input[..layout::payload_len(input)]
        };

        let mut offset = 0;
        for segment in text.split(|&b| b == separator) {
            if !self.push_segment(segment) {
                return offset;
            }
            offset += segment.len() + 1;
        }
        input.len()
    }

    /// Like [`BlockVec::split`] with a multi-byte separator. Overlapping
    /// occurrences are matched left to right.
    ///
    /// `input` ends at its first zero byte, as for a non-NUL separator of
    /// [`BlockVec::split`]. A separator of two or more bytes that contains a
    /// zero byte therefore never matches.
    ///
    /// # Errors
    ///
    /// Returns `BlockVecError::EmptySeparator` if `separator` is empty.
    pub fn split_seq(&mut self, input: &[u8], separator: &[u8]) -> Result<usize, BlockVecError> {
        match separator {
            [] => return Err(BlockVecError::EmptySeparator),
            [byte] => return Ok(self.split(input, *byte)),
            _ => {}
        }

        let text = &input[..layout::payload_len(input)];
        let mut first = 0;
        loop {
            let rest = &text[first..];
            let (segment, next) = match layout::find_seq(rest, separator) {
                Some(at) => (&rest[..at], Some(first + at + separator.len())),
                None => (rest, None),
            };
            if !self.push_segment(segment) {
                return Ok(first);
            }
            match next {
                Some(next) => first = next,
                None => return Ok(input.len()),
            }
        }
    }

    /// Stores a segment, skipping empty ones. `false` means it did not fit.
    fn push_segment(&mut self, segment: &[u8]) -> bool {
        // Segments hold no zero byte, so only capacity can refuse them
        debug_assert!(!segment.contains(&0));
        segment.is_empty() || self.push_back(segment).is_ok()
    }
}
