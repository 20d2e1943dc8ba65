// Copyright (c) The Growbuf Project Authors.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Growable contiguous byte storage with bounds-checked typed access.
//!
//! A [`GrowBuf`] owns a single contiguous region of memory and tracks two quantities:
//!
//! * `len` - the number of logically valid bytes, which grows when a write lands past it.
//! * `capacity` - the number of allocated bytes, which grows ("inflates") when a write
//!   lands past it.
//!
//! The buffer is a low-level substrate for serialization formats: it offers random access
//! at absolute offsets plus sequential cursors, and imposes no format of its own.
//!
//! # Random access
//!
//! Positional reading and writing is expressed through the [`ReadAt`] and [`WriteAt`]
//! capability traits, both implemented by [`GrowBuf`]. Typed access covers any fixed-width
//! number via [`ToBytes`]/[`FromBytes`], plus arbitrary byte ranges:
//!
//! ```
//! use growbuf::{GrowBuf, ReadAt, WriteAt};
//!
//! let mut buf = GrowBuf::new();
//!
//! // Writes past the current capacity grow the buffer transparently.
//! buf.write_num_ne(0, 0xDDCC_BBAA_u32);
//! buf.write_slice(4, *b"tail");
//!
//! assert_eq!(buf.len(), 8);
//! assert!(buf.capacity() >= 8);
//!
//! assert_eq!(buf.read_num_ne::<u32>(0), 0xDDCC_BBAA);
//! assert_eq!(buf.read_slice(4, 4), b"tail");
//! ```
//!
//! Reads never grow the buffer. A read that would touch bytes past `len` is a contract
//! violation and panics before any memory is accessed:
//!
//! ```should_panic
//! use growbuf::{GrowBuf, ReadAt};
//!
//! let buf = GrowBuf::copied_from_slice(b"1234");
//! let _ = buf.read_num_ne::<u64>(0); // Only 4 valid bytes - panics.
//! ```
//!
//! # Sequential access
//!
//! A cursor layers auto-advancing sequential access on top of the positional primitives,
//! so multi-field encode/decode sequences need no manual offset bookkeeping. Cursors are
//! acquired for one direction at a time and borrow the buffer for their whole life, so a
//! cursor can never outlive or alias the storage it points into:
//!
//! ```
//! use growbuf::GrowBuf;
//!
//! let mut buf = GrowBuf::zeroed(7);
//!
//! buf.write_at(0, |cursor| {
//!     cursor.write_num_ne(0x34_u8);
//!     cursor.write_num_ne(0x4545_u16);
//!     cursor.write_num_ne(0x5656_5656_u32);
//! });
//!
//! buf.read_at(0, |cursor| {
//!     assert_eq!(cursor.read_num_ne::<u8>(), 0x34);
//!     assert_eq!(cursor.read_num_ne::<u16>(), 0x4545);
//!     assert_eq!(cursor.read_num_ne::<u32>(), 0x5656_5656);
//! });
//! ```
//!
//! Cursors hold an integer offset plus a borrow of their target - never a pointer into
//! the storage - so buffer reallocation during growth cannot invalidate them.
//!
//! The cursor types are generic over the capability traits, so they can drive any
//! positional reader or writer, not just [`GrowBuf`]. See [`WriteCursor`] and
//! [`ReadCursor`].
//!
//! # Growth
//!
//! When a write ends past the current capacity, the buffer allocates a fresh zero-filled
//! region of `(capacity + overflow) * 2` bytes, copies the valid prefix over, and drops
//! the old region. Doubling past the strictly needed size amortizes repeated appends to
//! O(1) per byte. All allocations are zero-filled, so bytes between the old `len` and a
//! sparse write's offset always read as zero.
//!
//! # Diagnostics
//!
//! [`GrowBuf::visualize()`] renders the valid bytes as rows of uppercase hex, and the
//! `Debug` implementation prints the same layout.
//!
//! [`ToBytes`]: num_traits::ToBytes
//! [`FromBytes`]: num_traits::FromBytes

mod buf;
mod cursor;
mod read_at;
mod visualize;
mod write_at;

pub use buf::GrowBuf;
pub use cursor::{ReadCursor, WriteCursor};
pub use read_at::ReadAt;
pub use write_at::WriteAt;
