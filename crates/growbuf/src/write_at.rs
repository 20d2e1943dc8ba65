// Copyright (c) The Growbuf Project Authors.
// Licensed under the MIT License.

use std::borrow::Borrow;

use num_traits::ToBytes;

/// The capability to write bytes at caller-chosen offsets.
///
/// This is the write half of the positional access contract. [`GrowBuf`] implements it
/// directly and [`WriteCursor`] layers sequential access on top of any implementation,
/// so format encoders can be written against this trait without caring whether their
/// target is a real buffer or something else entirely.
///
/// Only [`write_slice()`] is required; the typed numeric methods are built on it.
///
/// Implementations decide what an out-of-range `offset` means. [`GrowBuf`] grows to
/// accommodate any write, but a fixed-size implementation may panic instead.
///
/// [`GrowBuf`]: crate::GrowBuf
/// [`WriteCursor`]: crate::WriteCursor
/// [`write_slice()`]: Self::write_slice
pub trait WriteAt {
    /// Writes a slice of bytes starting at `offset`.
    ///
    /// An empty `src` writes no bytes; whether it still triggers the implementation's
    /// out-of-range policy for `offset` is up to the implementation.
    fn write_slice(&mut self, offset: usize, src: impl Borrow<[u8]>);

    /// Writes a number of type `T` in native-endian representation at `offset`.
    ///
    /// This is a raw copy of the value's in-memory representation - no byte-order
    /// conversion is performed. Use [`write_num_le()`] or [`write_num_be()`] when the
    /// bytes need a defined order across platforms.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::{GrowBuf, ReadAt, WriteAt};
    ///
    /// let mut buf = GrowBuf::new();
    /// buf.write_num_ne(0, 0x1234_u16);
    ///
    /// assert_eq!(buf.read_num_ne::<u16>(0), 0x1234);
    /// ```
    ///
    /// [`write_num_le()`]: Self::write_num_le
    /// [`write_num_be()`]: Self::write_num_be
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    fn write_num_ne<T: ToBytes>(&mut self, offset: usize, value: T) {
        self.write_slice(offset, value.to_ne_bytes());
    }

    /// Writes a number of type `T` in little-endian representation at `offset`.
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    fn write_num_le<T: ToBytes>(&mut self, offset: usize, value: T) {
        self.write_slice(offset, value.to_le_bytes());
    }

    /// Writes a number of type `T` in big-endian representation at `offset`.
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    fn write_num_be<T: ToBytes>(&mut self, offset: usize, value: T) {
        self.write_slice(offset, value.to_be_bytes());
    }
}
