// Copyright (c) The Growbuf Project Authors.
// Licensed under the MIT License.

use std::mem::MaybeUninit;
use std::slice;

use num_traits::FromBytes;

/// The capability to read bytes at caller-chosen offsets.
///
/// This is the read half of the positional access contract. [`GrowBuf`] implements it
/// directly and [`ReadCursor`] layers sequential access on top of any implementation.
///
/// Only [`read_into_uninit()`] is required; every other method is built on it. All reads
/// copy - no method hands out a pointer or reference into the underlying storage, so the
/// results stay valid even if the source is later mutated or reallocated.
///
/// Reading outside the valid range is a contract violation. Implementations must verify
/// bounds before touching any memory and panic on violation; they must never grow the
/// underlying storage to satisfy a read.
///
/// [`GrowBuf`]: crate::GrowBuf
/// [`ReadCursor`]: crate::ReadCursor
/// [`read_into_uninit()`]: Self::read_into_uninit
pub trait ReadAt {
    /// Copies `dst.len()` bytes starting at `offset` into a possibly uninitialized
    /// destination, fully initializing it.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is empty or the range `[offset, offset + dst.len())` is not
    /// entirely within the valid bytes.
    fn read_into_uninit(&self, offset: usize, dst: &mut [MaybeUninit<u8>]);

    /// Copies `dst.len()` bytes starting at `offset` into an initialized destination.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is empty or the range `[offset, offset + dst.len())` is not
    /// entirely within the valid bytes.
    fn read_into(&self, offset: usize, dst: &mut [u8]) {
        let len = dst.len();

        // SAFETY: `u8` and `MaybeUninit<u8>` have identical layout, and the callee only
        // stores initialized bytes through the slice.
        let dst = unsafe { slice::from_raw_parts_mut(dst.as_mut_ptr().cast::<MaybeUninit<u8>>(), len) };

        self.read_into_uninit(offset, dst);
    }

    /// Returns a copy of the `len` bytes starting at `offset`.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::{GrowBuf, ReadAt};
    ///
    /// let buf = GrowBuf::copied_from_slice(&[0xAB, 0xCD, 0xEF, 0xED]);
    ///
    /// assert_eq!(buf.read_slice(1, 2), [0xCD, 0xEF]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or the range `[offset, offset + len)` is not entirely
    /// within the valid bytes.
    #[must_use]
    fn read_slice(&self, offset: usize, len: usize) -> Vec<u8> {
        let mut dst = vec![0_u8; len];
        self.read_into(offset, &mut dst);
        dst
    }

    /// Reads a number of type `T` in native-endian representation at `offset`.
    ///
    /// This reinterprets the value's raw in-memory representation - no byte-order
    /// conversion is performed. Use [`read_num_le()`] or [`read_num_be()`] when the
    /// bytes have a defined order across platforms.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::{GrowBuf, ReadAt, WriteAt};
    ///
    /// let mut buf = GrowBuf::zeroed(8);
    /// buf.write_num_ne(2, 0xDEAD_BEEF_u32);
    ///
    /// assert_eq!(buf.read_num_ne::<u32>(2), 0xDEAD_BEEF);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the range `[offset, offset + size_of::<T>())` is not entirely within
    /// the valid bytes.
    ///
    /// [`read_num_le()`]: Self::read_num_le
    /// [`read_num_be()`]: Self::read_num_be
    #[must_use]
    fn read_num_ne<T: FromBytes>(&self, offset: usize) -> T
    where
        T::Bytes: Sized,
    {
        T::from_ne_bytes(&read_bytes_of::<T, Self>(self, offset))
    }

    /// Reads a number of type `T` in little-endian representation at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range `[offset, offset + size_of::<T>())` is not entirely within
    /// the valid bytes.
    #[must_use]
    fn read_num_le<T: FromBytes>(&self, offset: usize) -> T
    where
        T::Bytes: Sized,
    {
        T::from_le_bytes(&read_bytes_of::<T, Self>(self, offset))
    }

    /// Reads a number of type `T` in big-endian representation at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range `[offset, offset + size_of::<T>())` is not entirely within
    /// the valid bytes.
    #[must_use]
    fn read_num_be<T: FromBytes>(&self, offset: usize) -> T
    where
        T::Bytes: Sized,
    {
        T::from_be_bytes(&read_bytes_of::<T, Self>(self, offset))
    }

    /// Decodes the `len` bytes starting at `offset` as UTF-8 text.
    ///
    /// Returns `None` when the bytes are not valid UTF-8. This is the one recoverable
    /// failure in the crate - the caller is expected to branch on it.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::{GrowBuf, ReadAt};
    ///
    /// let buf = GrowBuf::copied_from_slice(b"hello");
    ///
    /// assert_eq!(buf.read_str(0, 5), Some("hello".to_string()));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or the range `[offset, offset + len)` is not entirely
    /// within the valid bytes.
    #[must_use]
    fn read_str(&self, offset: usize, len: usize) -> Option<String> {
        String::from_utf8(self.read_slice(offset, len)).ok()
    }
}

/// Reads the raw byte array backing a number of type `T`, using only the host's
/// `read_into_uninit()` capability.
fn read_bytes_of<T, R>(reader: &R, offset: usize) -> T::Bytes
where
    T: FromBytes,
    T::Bytes: Sized,
    R: ReadAt + ?Sized,
{
    let mut raw = MaybeUninit::<T::Bytes>::uninit();

    // SAFETY: `T::Bytes` is a plain byte array with no alignment requirements and no
    // invalid bit patterns, so its storage can be viewed as a slice of uninitialized bytes.
    let dst = unsafe { slice::from_raw_parts_mut(raw.as_mut_ptr().cast::<MaybeUninit<u8>>(), size_of::<T::Bytes>()) };

    reader.read_into_uninit(offset, dst);

    // SAFETY: `read_into_uninit()` fully initialized the destination (or panicked).
    unsafe { raw.assume_init() }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal capability provider, to prove the provided methods only
    /// need `read_into_uninit()` from their host.
    struct SliceReader {
        bytes: Vec<u8>,
    }

    impl ReadAt for SliceReader {
        fn read_into_uninit(&self, offset: usize, dst: &mut [MaybeUninit<u8>]) {
            assert!(!dst.is_empty());
            assert!(offset + dst.len() <= self.bytes.len());

            for (dst_byte, src_byte) in dst.iter_mut().zip(&self.bytes[offset..]) {
                dst_byte.write(*src_byte);
            }
        }
    }

    #[test]
    fn read_into() {
        let reader = SliceReader {
            bytes: vec![1, 2, 3, 4, 5],
        };

        let mut dst = [0_u8; 3];
        reader.read_into(1, &mut dst);

        assert_eq!(dst, [2, 3, 4]);
    }

    #[test]
    fn read_slice() {
        let reader = SliceReader {
            bytes: vec![0xAB, 0xCD, 0xEF, 0xED],
        };

        assert_eq!(reader.read_slice(0, 4), [0xAB, 0xCD, 0xEF, 0xED]);
        assert_eq!(reader.read_slice(2, 1), [0xEF]);
    }

    #[test]
    fn read_num_ne() {
        let reader = SliceReader {
            bytes: vec![0x34, 0x12],
        };

        if cfg!(target_endian = "big") {
            assert_eq!(reader.read_num_ne::<u16>(0), 0x3412);
        } else {
            assert_eq!(reader.read_num_ne::<u16>(0), 0x1234);
        }
    }

    #[test]
    fn read_num_le() {
        let reader = SliceReader {
            bytes: vec![0x78, 0x56, 0x34, 0x12],
        };

        assert_eq!(reader.read_num_le::<u32>(0), 0x1234_5678);
    }

    #[test]
    fn read_num_be() {
        let reader = SliceReader {
            bytes: vec![0x12, 0x34, 0x56, 0x78],
        };

        assert_eq!(reader.read_num_be::<u32>(0), 0x1234_5678);
        assert_eq!(reader.read_num_be::<u16>(2), 0x5678);
    }

    #[test]
    fn read_str_valid_utf8() {
        let reader = SliceReader {
            bytes: b"hello, world".to_vec(),
        };

        assert_eq!(reader.read_str(7, 5), Some("world".to_string()));
    }

    #[test]
    fn read_str_invalid_utf8() {
        let reader = SliceReader {
            bytes: vec![0xFF, 0xFE, 0xFD],
        };

        assert_eq!(reader.read_str(0, 3), None);
    }

    #[test]
    #[should_panic]
    fn read_past_end_panics() {
        let reader = SliceReader { bytes: vec![1, 2] };

        _ = reader.read_num_ne::<u32>(0);
    }
}
