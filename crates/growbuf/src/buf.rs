// Copyright (c) The Growbuf Project Authors.
// Licensed under the MIT License.

use std::borrow::Borrow;
use std::mem::MaybeUninit;
use std::ops::{Index, IndexMut};
use std::ptr;

use crate::{ReadAt, WriteAt};

/// A growable, contiguous, exclusively owned region of bytes.
///
/// The buffer tracks the number of logically valid bytes (`len`) separately from the
/// number of allocated bytes (`capacity`), with `len <= capacity` always. Every byte in
/// `[0, capacity)` is zero-initialized at allocation time, so there is never a window in
/// which uninitialized memory can be observed.
///
/// Writes may land at any offset. A write ending past the current capacity grows the
/// backing store first (see [Growth]); a write ending past `len` extends `len` to cover
/// it, with any gap bytes left at zero. Reads are strictly bounds-checked against `len`
/// and never grow the buffer.
///
/// Positional access is expressed through the [`ReadAt`] and [`WriteAt`] traits;
/// sequential access through cursors acquired via [`write_cursor()`] / [`read_cursor()`]
/// or their closure-scoped forms [`write_at()`] / [`read_at()`].
///
/// Equality compares `len` and the valid bytes only; capacity does not participate.
///
/// # Example
///
/// ```
/// use growbuf::{GrowBuf, ReadAt, WriteAt};
///
/// let mut packet = GrowBuf::new();
///
/// packet.write_slice(0, *b"GROW");
/// packet.write_num_be(4, 1_u16); // Version
/// packet.write_num_be(6, 42_u32); // Payload length
///
/// assert_eq!(packet.len(), 10);
/// assert_eq!(packet.read_slice(0, 4), b"GROW");
/// assert_eq!(packet.read_num_be::<u32>(6), 42);
/// ```
///
/// [Growth]: crate#growth
/// [`write_cursor()`]: Self::write_cursor
/// [`read_cursor()`]: Self::read_cursor
/// [`write_at()`]: Self::write_at
/// [`read_at()`]: Self::read_at
#[derive(Clone, Default)]
pub struct GrowBuf {
    /// The backing store. Its full length is the buffer's capacity.
    store: Box<[u8]>,

    /// Number of logically valid bytes. Invariant: `len <= store.len()`.
    len: usize,
}

impl GrowBuf {
    /// Creates an empty buffer with no allocated capacity.
    ///
    /// The first write allocates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer of `len` zero bytes, with `capacity == len`.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::{GrowBuf, ReadAt};
    ///
    /// let buf = GrowBuf::zeroed(64);
    ///
    /// assert_eq!(buf.len(), 64);
    /// assert_eq!(buf.capacity(), 64);
    /// assert_eq!(buf.read_slice(0, 64), vec![0_u8; 64]);
    /// ```
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self {
            store: vec![0_u8; len].into_boxed_slice(),
            len,
        }
    }

    /// Creates a buffer containing a copy of `src`, with `capacity == src.len()`.
    #[must_use]
    pub fn copied_from_slice(src: &[u8]) -> Self {
        Self {
            store: src.to_vec().into_boxed_slice(),
            len: src.len(),
        }
    }

    /// Creates a buffer containing a copy of `src` with extra capacity slack,
    /// so the first few writes past the end do not reallocate.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::GrowBuf;
    ///
    /// let buf = GrowBuf::copied_from_slice_with_capacity(b"hdr", 16);
    ///
    /// assert_eq!(buf.len(), 3);
    /// assert_eq!(buf.capacity(), 16);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `capacity < src.len()`.
    #[must_use]
    pub fn copied_from_slice_with_capacity(src: &[u8], capacity: usize) -> Self {
        assert!(
            capacity >= src.len(),
            "buffer capacity ({capacity}) cannot be smaller than the source length ({})",
            src.len()
        );

        let mut store = vec![0_u8; capacity].into_boxed_slice();
        store[..src.len()].copy_from_slice(src);

        Self { store, len: src.len() }
    }

    /// The number of logically valid bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer contains no valid bytes.
    ///
    /// This does not imply that the buffer has no allocated capacity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of allocated bytes backing the buffer.
    ///
    /// Always at least [`len()`][Self::len]. The next write ending past this grows the store.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// The valid bytes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.store[..self.len]
    }

    /// The valid bytes as a mutable slice.
    ///
    /// Mutation through the slice cannot change `len` or `capacity`.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.store[..self.len]
    }

    /// Returns the byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not within the valid bytes.
    #[must_use]
    pub fn get(&self, index: usize) -> u8 {
        self.assert_within_bounds(index, 1);
        self.store[index]
    }

    /// Replaces the byte at `index`.
    ///
    /// Unlike the write methods, this never grows the buffer - the byte must
    /// already be within the valid range.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not within the valid bytes.
    pub fn set(&mut self, index: usize, byte: u8) {
        self.assert_within_bounds(index, 1);
        self.store[index] = byte;
    }

    /// Verifies that `[offset, offset + size)` lies entirely within the valid bytes
    /// and that the span is non-empty, panicking otherwise.
    ///
    /// Every read-style operation funnels through this before touching memory.
    #[inline]
    #[track_caller]
    pub(crate) fn assert_within_bounds(&self, offset: usize, size: usize) {
        assert!(size > 0, "buffer access size must be positive");

        let end = offset.checked_add(size).expect("buffer access range exceeds usize::MAX");

        assert!(
            end <= self.len,
            "buffer ({} bytes) access out of bounds [offset: {offset}, size: {size}]",
            self.len
        );
    }

    /// Grows the backing store if a write of `insertion_len` bytes at `offset` would
    /// end past the current capacity.
    ///
    /// The new capacity is `(capacity + overflow) * 2` - doubling past the point
    /// strictly needed, which amortizes repeated appends to O(1) per byte.
    fn inflate_if_overflowing(&mut self, offset: usize, insertion_len: usize) {
        let end = offset.checked_add(insertion_len).expect("buffer write range exceeds usize::MAX");

        if end <= self.capacity() {
            return;
        }

        // Cannot wrap: we just checked `end > capacity`.
        let overflow = end.wrapping_sub(self.capacity());

        let inflated_capacity = self
            .capacity()
            .checked_add(overflow)
            .and_then(|needed| needed.checked_mul(2))
            .expect("inflated buffer capacity exceeds usize::MAX");

        let mut store = vec![0_u8; inflated_capacity].into_boxed_slice();
        store[..self.len].copy_from_slice(&self.store[..self.len]);

        // The swap happens only after the copy completed, so no intermediate
        // state is ever observable.
        self.store = store;

        // Sanity check: the write that triggered inflation must now fit.
        debug_assert!(end <= self.capacity());
    }

    /// Extends `len` if a write of `insertion_len` bytes at `offset` ends past it.
    ///
    /// Gap bytes between the old `len` and `offset`, if any, remain zero - they were
    /// zero-initialized when their region was allocated and have never been written.
    fn increment_if_overflowing(&mut self, offset: usize, insertion_len: usize) {
        // Cannot overflow: `inflate_if_overflowing()` already checked this sum.
        let end = offset.wrapping_add(insertion_len);

        if end > self.len {
            self.len = end;
        }
    }
}

impl WriteAt for GrowBuf {
    /// An empty `src` carries no bytes but still applies the growth and length-extension
    /// policy: a zero-length write at an offset past `len` extends the buffer to `offset`,
    /// with the new bytes at zero.
    fn write_slice(&mut self, offset: usize, src: impl Borrow<[u8]>) {
        let src = src.borrow();

        self.inflate_if_overflowing(offset, src.len());
        self.increment_if_overflowing(offset, src.len());

        // In bounds: inflation guaranteed capacity and incrementing moved `len` past the end.
        self.store[offset..offset + src.len()].copy_from_slice(src);
    }
}

impl ReadAt for GrowBuf {
    fn read_into_uninit(&self, offset: usize, dst: &mut [MaybeUninit<u8>]) {
        self.assert_within_bounds(offset, dst.len());

        // SAFETY: The bounds check above guarantees `offset + dst.len() <= len <= capacity`.
        let src = unsafe { self.store.as_ptr().add(offset) };

        // SAFETY: Both are byte ranges, so no alignment concerns; they cannot overlap
        // because `dst` is exclusively borrowed while `self` is shared.
        unsafe {
            ptr::copy_nonoverlapping(src, dst.as_mut_ptr().cast::<u8>(), dst.len());
        }
    }
}

impl From<&[u8]> for GrowBuf {
    fn from(value: &[u8]) -> Self {
        Self::copied_from_slice(value)
    }
}

impl<const LEN: usize> From<&[u8; LEN]> for GrowBuf {
    fn from(value: &[u8; LEN]) -> Self {
        Self::copied_from_slice(value)
    }
}

impl From<Vec<u8>> for GrowBuf {
    /// Reuses the vector's allocation rather than copying.
    fn from(value: Vec<u8>) -> Self {
        let len = value.len();

        Self {
            store: value.into_boxed_slice(),
            len,
        }
    }
}

impl FromIterator<u8> for GrowBuf {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<u8>>().into()
    }
}

impl Index<usize> for GrowBuf {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        self.assert_within_bounds(index, 1);
        &self.store[index]
    }
}

impl IndexMut<usize> for GrowBuf {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        self.assert_within_bounds(index, 1);
        &mut self.store[index]
    }
}

impl PartialEq for GrowBuf {
    fn eq(&self, other: &Self) -> bool {
        // Capacity deliberately does not participate - only the valid bytes do.
        self.as_slice() == other.as_slice()
    }
}

impl Eq for GrowBuf {}

impl PartialEq<&[u8]> for GrowBuf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}

impl PartialEq<GrowBuf> for &[u8] {
    fn eq(&self, other: &GrowBuf) -> bool {
        other.eq(self)
    }
}

impl<const LEN: usize> PartialEq<&[u8; LEN]> for GrowBuf {
    fn eq(&self, other: &&[u8; LEN]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const LEN: usize> PartialEq<GrowBuf> for &[u8; LEN] {
    fn eq(&self, other: &GrowBuf) -> bool {
        other.eq(self)
    }
}
