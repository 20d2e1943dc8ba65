// Copyright (c) The Growbuf Project Authors.
// Licensed under the MIT License.

use std::borrow::Borrow;
use std::fmt;

use num_traits::{FromBytes, ToBytes};

use crate::{GrowBuf, ReadAt, WriteAt};

/// A sequential writing position over a positional write target.
///
/// Every operation delegates to the target at the cursor's current offset and then
/// advances the offset by the number of bytes the value occupies, so multi-field encode
/// sequences need no manual offset bookkeeping. The offset only ever moves forward.
///
/// The cursor holds an integer offset plus an exclusive borrow of its target - never a
/// pointer into the target's storage - so target reallocation during growth cannot
/// invalidate it, and the borrow checker prevents it from outliving the target.
///
/// Acquired from a buffer via [`GrowBuf::write_cursor()`] or [`GrowBuf::write_at()`],
/// or created over any [`WriteAt`] implementation via [`new()`][Self::new].
///
/// # Example
///
/// ```
/// use growbuf::{GrowBuf, ReadAt};
///
/// let mut buf = GrowBuf::zeroed(7);
///
/// buf.write_at(0, |cursor| {
///     cursor.write_num_ne(0x34_u8);
///     cursor.write_num_ne(0x4545_u16);
///     cursor.write_num_ne(0x5656_5656_u32);
///     assert_eq!(cursor.offset(), 7);
/// });
///
/// assert_eq!(buf.read_num_ne::<u16>(1), 0x4545);
/// ```
pub struct WriteCursor<'a, W: WriteAt + ?Sized = GrowBuf> {
    target: &'a mut W,

    /// Current absolute position. Monotonically non-decreasing.
    offset: usize,

    /// The extent granted at acquisition. Fixed; informational only - the target
    /// decides whether writes past it grow the storage or panic.
    len: usize,
}

impl<'a, W: WriteAt + ?Sized> WriteCursor<'a, W> {
    /// Creates a cursor over any positional write target.
    ///
    /// `offset` is the starting position; `len` records the extent the cursor is
    /// granted, typically the remaining valid bytes from `offset`.
    #[must_use]
    pub fn new(target: &'a mut W, offset: usize, len: usize) -> Self {
        Self { target, offset, len }
    }

    /// The current absolute position.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The extent granted when the cursor was acquired.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the cursor was granted a zero-byte extent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves the position forward without writing.
    ///
    /// # Panics
    ///
    /// Panics if the resulting offset would exceed `usize::MAX`.
    pub fn skip(&mut self, count: usize) {
        self.advance(count);
    }

    fn advance(&mut self, count: usize) {
        self.offset = self.offset.checked_add(count).expect("cursor offset cannot exceed usize::MAX");
    }

    fn offset_at(&self, relative_offset: usize) -> usize {
        self.offset.checked_add(relative_offset).expect("cursor offset cannot exceed usize::MAX")
    }

    /// Writes a number in native-endian representation at the current position,
    /// then advances past it.
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    pub fn write_num_ne<T: ToBytes>(&mut self, value: T) {
        self.target.write_num_ne(self.offset, value);
        self.advance(size_of::<T::Bytes>());
    }

    /// Writes a number in little-endian representation at the current position,
    /// then advances past it.
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    pub fn write_num_le<T: ToBytes>(&mut self, value: T) {
        self.target.write_num_le(self.offset, value);
        self.advance(size_of::<T::Bytes>());
    }

    /// Writes a number in big-endian representation at the current position,
    /// then advances past it.
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    pub fn write_num_be<T: ToBytes>(&mut self, value: T) {
        self.target.write_num_be(self.offset, value);
        self.advance(size_of::<T::Bytes>());
    }

    /// Writes a number in native-endian representation `relative_offset` bytes past the
    /// current position, then advances by the value's width only.
    ///
    /// The skipped-over bytes are not written; on a [`GrowBuf`] target they read as zero
    /// if nothing was written there before.
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    pub fn write_num_ne_at<T: ToBytes>(&mut self, relative_offset: usize, value: T) {
        self.target.write_num_ne(self.offset_at(relative_offset), value);
        self.advance(size_of::<T::Bytes>());
    }

    /// Writes a slice of bytes at the current position, then advances past it.
    pub fn write_slice(&mut self, src: impl Borrow<[u8]>) {
        let src = src.borrow();

        self.target.write_slice(self.offset, src);
        self.advance(src.len());
    }

    /// Writes a slice of bytes `relative_offset` bytes past the current position, then
    /// advances by the slice's length only.
    pub fn write_slice_at(&mut self, relative_offset: usize, src: impl Borrow<[u8]>) {
        let src = src.borrow();

        self.target.write_slice(self.offset_at(relative_offset), src);
        self.advance(src.len());
    }

    /// Writes the UTF-8 bytes of `text` at the current position, then advances by the
    /// encoded length.
    pub fn write_str(&mut self, text: &str) {
        self.write_slice(text.as_bytes());
    }
}

impl<W: WriteAt + ?Sized> fmt::Debug for WriteCursor<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteCursor")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// A sequential reading position over a positional read target.
///
/// The mirror image of [`WriteCursor`]: every operation delegates to the target at the
/// cursor's current offset and then advances past the bytes it consumed. All reads are
/// bounds-checked by the target and never grow it.
///
/// Acquired from a buffer via [`GrowBuf::read_cursor()`] or [`GrowBuf::read_at()`], or
/// created over any [`ReadAt`] implementation via [`new()`][Self::new].
///
/// # Example
///
/// ```
/// use growbuf::GrowBuf;
///
/// let buf = GrowBuf::copied_from_slice(&[0x34, 0x45, 0x45, 0x56, 0x56, 0x56, 0x56]);
///
/// buf.read_at(0, |cursor| {
///     assert_eq!(cursor.read_num_ne::<u8>(), 0x34);
///     assert_eq!(cursor.read_num_ne::<u16>(), 0x4545);
///     assert_eq!(cursor.read_num_ne::<u32>(), 0x5656_5656);
/// });
/// ```
pub struct ReadCursor<'a, R: ReadAt + ?Sized = GrowBuf> {
    target: &'a R,

    /// Current absolute position. Monotonically non-decreasing.
    offset: usize,

    /// The extent granted at acquisition. Fixed.
    len: usize,
}

impl<'a, R: ReadAt + ?Sized> ReadCursor<'a, R> {
    /// Creates a cursor over any positional read target.
    ///
    /// `offset` is the starting position; `len` records the extent the cursor is
    /// granted, typically the remaining valid bytes from `offset`.
    #[must_use]
    pub fn new(target: &'a R, offset: usize, len: usize) -> Self {
        Self { target, offset, len }
    }

    /// The current absolute position.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The extent granted when the cursor was acquired.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the cursor was granted a zero-byte extent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves the position forward without reading.
    ///
    /// # Panics
    ///
    /// Panics if the resulting offset would exceed `usize::MAX`.
    pub fn skip(&mut self, count: usize) {
        self.advance(count);
    }

    fn advance(&mut self, count: usize) {
        self.offset = self.offset.checked_add(count).expect("cursor offset cannot exceed usize::MAX");
    }

    fn offset_at(&self, relative_offset: usize) -> usize {
        self.offset.checked_add(relative_offset).expect("cursor offset cannot exceed usize::MAX")
    }

    /// Reads a number in native-endian representation at the current position,
    /// then advances past it.
    ///
    /// # Panics
    ///
    /// Panics if the value would extend past the target's valid bytes.
    #[must_use]
    pub fn read_num_ne<T: FromBytes>(&mut self) -> T
    where
        T::Bytes: Sized,
    {
        let value = self.target.read_num_ne(self.offset);
        self.advance(size_of::<T::Bytes>());
        value
    }

    /// Reads a number in little-endian representation at the current position,
    /// then advances past it.
    ///
    /// # Panics
    ///
    /// Panics if the value would extend past the target's valid bytes.
    #[must_use]
    pub fn read_num_le<T: FromBytes>(&mut self) -> T
    where
        T::Bytes: Sized,
    {
        let value = self.target.read_num_le(self.offset);
        self.advance(size_of::<T::Bytes>());
        value
    }

    /// Reads a number in big-endian representation at the current position,
    /// then advances past it.
    ///
    /// # Panics
    ///
    /// Panics if the value would extend past the target's valid bytes.
    #[must_use]
    pub fn read_num_be<T: FromBytes>(&mut self) -> T
    where
        T::Bytes: Sized,
    {
        let value = self.target.read_num_be(self.offset);
        self.advance(size_of::<T::Bytes>());
        value
    }

    /// Reads a number in native-endian representation `relative_offset` bytes past the
    /// current position, then advances by the value's width only.
    ///
    /// # Panics
    ///
    /// Panics if the value would extend past the target's valid bytes.
    #[must_use]
    pub fn read_num_ne_at<T: FromBytes>(&mut self, relative_offset: usize) -> T
    where
        T::Bytes: Sized,
    {
        let value = self.target.read_num_ne(self.offset_at(relative_offset));
        self.advance(size_of::<T::Bytes>());
        value
    }

    /// Reads a copy of `len` bytes at the current position, then advances past them.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or the range would extend past the target's valid bytes.
    #[must_use]
    pub fn read_slice(&mut self, len: usize) -> Vec<u8> {
        let bytes = self.target.read_slice(self.offset, len);
        self.advance(len);
        bytes
    }

    /// Reads a copy of `len` bytes `relative_offset` bytes past the current position,
    /// then advances by `len` only.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or the range would extend past the target's valid bytes.
    #[must_use]
    pub fn read_slice_at(&mut self, relative_offset: usize, len: usize) -> Vec<u8> {
        let bytes = self.target.read_slice(self.offset_at(relative_offset), len);
        self.advance(len);
        bytes
    }

    /// Decodes `len` bytes at the current position as UTF-8 text, then advances past
    /// them.
    ///
    /// Returns `None` when the bytes are not valid UTF-8. The cursor advances either
    /// way - the bytes were consumed, they just failed to decode.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or the range would extend past the target's valid bytes.
    #[must_use]
    pub fn read_str(&mut self, len: usize) -> Option<String> {
        String::from_utf8(self.read_slice(len)).ok()
    }
}

impl<R: ReadAt + ?Sized> fmt::Debug for ReadCursor<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadCursor")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl GrowBuf {
    /// Acquires a cursor for sequential writing starting at `offset`.
    ///
    /// The cursor is granted the extent `[offset, len)`, though writes through it past
    /// the end simply grow the buffer like any other write.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len`.
    #[must_use]
    pub fn write_cursor(&mut self, offset: usize) -> WriteCursor<'_, Self> {
        assert!(
            offset <= self.len(),
            "cursor offset ({offset}) is past the end of the buffer ({} bytes)",
            self.len()
        );

        let remaining = self.len() - offset;
        WriteCursor::new(self, offset, remaining)
    }

    /// Hands a writing cursor starting at `offset` to `block` and returns the block's
    /// result.
    ///
    /// The cursor lives only for the duration of the call, which keeps sequential
    /// encoding visually scoped:
    ///
    /// ```
    /// use growbuf::{GrowBuf, ReadAt};
    ///
    /// let mut buf = GrowBuf::new();
    ///
    /// buf.write_at(0, |cursor| {
    ///     cursor.write_str("sensor/");
    ///     cursor.write_num_be(7_u16);
    /// });
    ///
    /// assert_eq!(buf.len(), 9);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `offset > len`.
    pub fn write_at<T>(&mut self, offset: usize, block: impl FnOnce(&mut WriteCursor<'_, Self>) -> T) -> T {
        block(&mut self.write_cursor(offset))
    }

    /// Acquires a cursor for sequential reading starting at `offset`.
    ///
    /// The cursor is granted the extent `[offset, len)`; reads through it past the end
    /// panic, as all reads do.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len`.
    #[must_use]
    pub fn read_cursor(&self, offset: usize) -> ReadCursor<'_, Self> {
        assert!(
            offset <= self.len(),
            "cursor offset ({offset}) is past the end of the buffer ({} bytes)",
            self.len()
        );

        let remaining = self.len() - offset;
        ReadCursor::new(self, offset, remaining)
    }

    /// Hands a reading cursor starting at `offset` to `block` and returns the block's
    /// result.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len`.
    pub fn read_at<T>(&self, offset: usize, block: impl FnOnce(&mut ReadCursor<'_, Self>) -> T) -> T {
        block(&mut self.read_cursor(offset))
    }
}
