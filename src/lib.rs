#![no_std]

//! `BlockVec`: a zero-allocation string vector stored in fixed-size blocks of
//! a single client-provided buffer.
//!
//! Strings are opaque non-empty byte sequences without zero bytes. Each one
//! is stored NUL-terminated at the start of a block and occupies as many
//! whole blocks as its payload plus terminator needs. Strings are packed in
//! order with no gaps, and every byte that is not payload is zero.
//!
//! This crate is `no_std` compatible and never allocates; capacity is fixed
//! when the vector is created.
//!
//! Buffer layout with a block size of 4:
//!
//! ```text
//! | a b c 0 | d e f g | h 0 0 0 | x 0 0 0 | 0 0 0 0 |
//!  string 0  string 1 (2 blocks)  string 2   free
//! ```
//!
//! # Performance Characteristics
//!
//! Choosing the block size is the main tuning knob. When every string fits
//! in one block (`len() == block_used()`), the vector is *one-to-one* and a
//! string index is also its block index.
//!
//! ## Time Complexity
//! - `push_back()`: O(length)
//! - `get()`: O(1) when one-to-one, O(`block_used`) otherwise
//! - `insert()`, `remove()`: O(used bytes), one overlapping move
//! - `clear()`: O(buffer length), the buffer is zeroed
//! - `copy_from()`: O(used bytes), see [`CopyStrategy`]
//! - Iterator operations: O(`block_used`) for a full traversal
//!
//! ## `no_std` Compatibility
//!
//! Enable the optional `std` feature to get `std::error::Error` for
//! [`BlockVecError`]:
//! ```toml
//! [dependencies]
//! blockvec = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Vector Interface
//!
//! ```
//! # use blockvec::BlockVec;
//! let mut buffer = [0u8; 12];
//! let mut strings = BlockVec::new(&mut buffer, 3).unwrap();
//! assert_eq!(strings.block_total(), 4);
//!
//! assert_eq!(strings.push_back(b"ab").unwrap(), b"ab");
//! strings.push_back(b"cde").unwrap(); // 4 bytes with the terminator: 2 blocks
//! strings.push_front(b"x").unwrap();
//!
//! assert_eq!(strings.len(), 3);
//! assert_eq!(strings.block_used(), 4);
//! assert_eq!(strings.get(0), Some(&b"x"[..]));
//! assert_eq!(strings.get(2), Some(&b"cde"[..]));
//! assert!(strings.push_back(b"y").is_err()); // all blocks used
//!
//! strings.remove(1).unwrap();
//! assert_eq!(strings.get(1), Some(&b"cde"[..]));
//! ```
//!
//! # Bulk Loading
//!
//! ```
//! # use blockvec::BlockVec;
//! let mut buffer = [0u8; 64];
//! let mut strings = BlockVec::new(&mut buffer, 8).unwrap();
//!
//! let input = b"abc,,def,ghi,";
//! assert_eq!(strings.split(input, b','), input.len());
//!
//! let collected: Vec<&[u8]> = strings.iter().collect();
//! assert_eq!(collected, [&b"abc"[..], b"def", b"ghi"]);
//! ```
//!
//! # Copying Between Layouts
//!
//! ```
//! # use blockvec::{BlockVec, CopyStrategy};
//! let mut small = [0u8; 32];
//! let mut source = BlockVec::new(&mut small, 4).unwrap();
//! source.push_back(b"abc").unwrap();
//! source.push_back(b"defgh").unwrap();
//!
//! let mut large = [0u8; 32];
//! let mut dest = BlockVec::new(&mut large, 8).unwrap();
//! assert_eq!(CopyStrategy::select(&dest, &source), CopyStrategy::Stringwise);
//! assert_eq!(dest.copy_from(&source), 2);
//! assert!(dest.is_one_to_one());
//! assert_eq!(dest.get(1), Some(&b"defgh"[..]));
//! ```

mod copy;
mod core;
mod error;
mod iter;
mod layout;
mod sort;
mod split;

// Re-export public types
pub use crate::copy::CopyStrategy;
pub use crate::core::BlockVec;
pub use crate::error::BlockVecError;
pub use crate::iter::BlockVecIter;
pub use crate::layout::blocks_required;
