// Copyright (c) The Growbuf Project Authors.
// Licensed under the MIT License.

use std::fmt;
use std::fmt::Write;

use crate::GrowBuf;

const BANNER: &str = "------- Buffer --------";
const BYTES_PER_ROW: usize = 8;

impl GrowBuf {
    /// Renders the valid bytes as rows of uppercase hex for troubleshooting.
    ///
    /// Each row holds up to eight space-separated bytes and ends with a newline. Spare
    /// capacity past `len` is not shown.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::GrowBuf;
    ///
    /// let buf = GrowBuf::copied_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    ///
    /// assert_eq!(buf.visualize(), "------- Buffer --------\nDE AD BE EF\n");
    /// ```
    #[must_use]
    pub fn visualize(&self) -> String {
        let mut output = String::new();

        writeln!(output, "{BANNER}").expect("writing to a String cannot fail");

        for row in self.as_slice().chunks(BYTES_PER_ROW) {
            for (index, byte) in row.iter().enumerate() {
                let separator = if index == 0 { "" } else { " " };
                write!(output, "{separator}{byte:02X}").expect("writing to a String cannot fail");
            }

            writeln!(output).expect("writing to a String cannot fail");
        }

        output
    }
}

impl fmt::Debug for GrowBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.visualize())
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::WriteAt;

    #[test]
    fn visualize_full_rows() {
        let mut buf = GrowBuf::zeroed(64);
        buf.write_num_ne(0, 0x34_u8);
        buf.write_num_ne(1, 0x4545_u16);
        buf.write_num_ne(3, 0x5656_5656_u32);

        let expected = "------- Buffer --------\n\
                        34 45 45 56 56 56 56 00\n\
                        00 00 00 00 00 00 00 00\n\
                        00 00 00 00 00 00 00 00\n\
                        00 00 00 00 00 00 00 00\n\
                        00 00 00 00 00 00 00 00\n\
                        00 00 00 00 00 00 00 00\n\
                        00 00 00 00 00 00 00 00\n\
                        00 00 00 00 00 00 00 00\n";

        assert_eq!(buf.visualize(), expected);
    }

    #[test]
    fn visualize_short_row() {
        let mut buf = GrowBuf::zeroed(4);
        buf.write_num_be(0, 0x1234_5678_u32);

        assert_eq!(buf.visualize(), "------- Buffer --------\n12 34 56 78\n");
    }

    #[test]
    fn visualize_partial_trailing_row() {
        let buf = GrowBuf::copied_from_slice(&[0xAA; 11]);

        let expected = "------- Buffer --------\n\
                        AA AA AA AA AA AA AA AA\n\
                        AA AA AA\n";

        assert_eq!(buf.visualize(), expected);
    }

    #[test]
    fn visualize_empty() {
        let buf = GrowBuf::new();

        assert_eq!(buf.visualize(), "------- Buffer --------\n");
    }

    #[test]
    fn visualize_ignores_spare_capacity() {
        let buf = GrowBuf::copied_from_slice_with_capacity(&[0x01, 0x02], 32);

        assert_eq!(buf.visualize(), "------- Buffer --------\n01 02\n");
    }

    #[test]
    fn debug_matches_visualize() {
        let buf = GrowBuf::copied_from_slice(&[0xDE, 0xAD]);

        assert_eq!(format!("{buf:?}"), buf.visualize());
    }
}
