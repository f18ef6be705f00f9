use core::iter;

use crate::matrix::bits::Bits;

/// Horizontal run of set bits inside one matrix row, in module units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub row: u32,
    pub col: u32,
    pub len: u32,
}

/// Groups row-major bits into runs of set bits. A run ends on a clear bit or
/// at the end of its row; runs never wrap to the next row.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    bits: Bits<'a>,
    width: u32,
    row: u32,
    col: u32,
}

impl<'a> Runs<'a> {
    pub fn new(bits: Bits<'a>, width: u32) -> Self {
        debug_assert!(width > 0, "width must be positive");
        Self { bits, width, row: 0, col: 0 }
    }
}

impl<'a> iter::Iterator for Runs<'a> {
    type Item = Run;

    fn next(&mut self) -> Option<Self::Item> {
        let mut start: Option<u32> = None;

        for bit in self.bits.by_ref() {
            let (row, col) = (self.row, self.col);
            self.col += 1;
            if self.col == self.width {
                self.col = 0;
                self.row += 1;
            }

            match (bit, start) {
                (true, None) => start = Some(col),
                (false, Some(s)) => return Some(Run { row, col: s, len: col - s }),
                _ => (),
            }

            // row end
            if self.col == 0 {
                if let Some(s) = start {
                    return Some(Run { row, col: s, len: col + 1 - s });
                }
            }
        }

        // stream ended mid-row
        start.map(|s| Run { row: self.row, col: s, len: self.col - s })
    }
}

impl<'a> iter::FusedIterator for Runs<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::bits::Bitstream;

    fn runs(hex: &[u8], width: u32, height: u32) -> Vec<Run> {
        let bits = Bitstream::Hex(hex).bits(width as u64 * height as u64);
        Runs::new(bits, width).collect()
    }

    #[test]
    fn test_full_rows() {
        assert_eq!(runs(b"F0F0", 4, 4), [
            Run { row: 0, col: 0, len: 4 },
            Run { row: 2, col: 0, len: 4 },
        ]);
    }

    #[test]
    fn test_runs_split_at_row_end() {
        // 3 wide: 111 111 000 ...
        let r = runs(b"FC0", 3, 4);
        assert_eq!(r, [Run { row: 0, col: 0, len: 3 }, Run { row: 1, col: 0, len: 3 }]);
    }

    #[test]
    fn test_multiple_runs_in_row() {
        // 1011 0111
        let r = runs(b"B7", 8, 1);
        assert_eq!(r, [
            Run { row: 0, col: 0, len: 1 },
            Run { row: 0, col: 2, len: 2 },
            Run { row: 0, col: 5, len: 3 },
        ]);
    }

    #[test]
    fn test_trailing_bits_ignored() {
        // 2x2 uses only the first nibble of "9F"
        assert_eq!(runs(b"9F", 2, 2), [
            Run { row: 0, col: 0, len: 1 },
            Run { row: 1, col: 1, len: 1 },
        ]);
    }

    #[test]
    fn test_empty_matrix() {
        assert!(runs(b"0000", 4, 4).is_empty());
    }
}
