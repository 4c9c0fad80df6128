use thiserror::Error;

/// Error types for `BlockVec` operations
///
/// Capacity figures are measured in blocks, not bytes.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BlockVecError {
    /// Invalid buffer or block size provided to `BlockVec::new`
    #[error("Invalid BlockVec initialization: {reason}")]
    InvalidInitialization {
        /// Description of why initialization failed
        reason: &'static str,
    },
    /// Zero-length strings cannot be stored
    #[error("Empty string: strings must contain at least one byte")]
    EmptyString,
    /// The string contains the terminator byte
    #[error("Interior NUL byte at position {position}")]
    InteriorNul {
        /// Offset of the first zero byte in the rejected string
        position: usize,
    },
    /// A multi-byte split was requested with an empty separator
    #[error("Empty separator")]
    EmptySeparator,
    /// Index is beyond the valid range for the operation
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current number of strings
        length: usize,
    },
    /// Operation attempted on an empty vector
    #[error("Operation on empty vector")]
    EmptyVector,
    /// Not enough free blocks for the requested insertion
    #[error("Insufficient capacity: requested {required} blocks, but only {available} blocks available")]
    InsufficientCapacity {
        /// Number of blocks the string needs
        required: usize,
        /// Number of free blocks
        available: usize,
    },
    /// The destination cannot hold every string of the copy source
    #[error("Capacity mismatch: source needs {required} blocks, destination has {available}")]
    CapacityMismatch {
        /// Blocks needed in the destination's block size
        required: usize,
        /// Total blocks of the destination
        available: usize,
    },
}
