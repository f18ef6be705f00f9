//! Code 128 encoding, subsets B and C.
//!
//! Subset selection is a fixed rule rather than a cost-optimal mixed-mode
//! encoder: an all-digit input uses subset C, anything else subset B. Code 39
//! and EAN-13 cards are drawn through this encoder too, which approximates
//! their look without producing true Code 39 or EAN-13 symbols.

use core::iter;

use crate::error::EncodeError;
use crate::tables::{self, START_B, START_C, STOP_MODULES, STOP_PATTERN, SYMBOL_MODULES};

/// Modulus of the Code 128 check symbol.
pub const CHECKSUM_MODULUS: usize = 103;

/// Code 128 operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subset {
    /// One printable ASCII character per symbol.
    B,
    /// One pair of digits per symbol.
    C,
}

impl Subset {
    /// Picks subset C when every byte is an ASCII digit, subset B otherwise.
    pub fn select(data: &[u8]) -> Self {
        if data.iter().all(u8::is_ascii_digit) {
            Subset::C
        } else {
            Subset::B
        }
    }

    /// Symbol value of this subset's start code, which also seeds the checksum.
    #[inline]
    pub const fn start(self) -> u8 {
        match self {
            Subset::B => START_B,
            Subset::C => START_C,
        }
    }
}

/// Subset B value of `c`. Bytes outside 32..=127 silently map to 0 (space).
#[inline]
pub const fn value_b(c: u8) -> u8 {
    match c {
        32..=127 => c - 32,
        _ => 0,
    }
}

/// Computes the check symbol for `data` (start and check symbols excluded).
/// Weights start at 1 for the first data symbol.
pub fn checksum(subset: Subset, data: &[u8]) -> u8 {
    let sum = data.iter().enumerate().fold(subset.start() as usize, |acc, (i, &v)| {
        (acc + v as usize * ((i + 1) % CHECKSUM_MODULUS)) % CHECKSUM_MODULUS
    });
    (sum % CHECKSUM_MODULUS) as u8
}

/// An encoded Code 128 symbol stream: start, data, checksum, then the stop
/// pattern implied at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128 {
    subset: Subset,
    /// start, data..., checksum
    symbols: Vec<u8>,
}

/// Encodes `data` into a Code 128 symbol stream.
///
/// Odd-length numeric input is padded with a leading `'0'` before pairing,
/// which changes the encoded value: `"123"` encodes as the pairs `01 23`.
pub fn encode_code128(data: &[u8], max_len: usize) -> Result<Code128, EncodeError> {
    if data.is_empty() || data.len() > max_len {
        return Err(EncodeError::InvalidLength { len: data.len(), max: max_len });
    }

    let subset = Subset::select(data);
    let mut symbols = Vec::with_capacity(data.len() + 2);
    symbols.push(subset.start());

    match subset {
        Subset::B => symbols.extend(data.iter().map(|&c| value_b(c))),
        Subset::C => {
            let rest = if data.len() % 2 == 1 {
                symbols.push(data[0] - b'0');
                &data[1..]
            } else {
                data
            };
            symbols.extend(rest.chunks_exact(2).map(|p| (p[0] - b'0') * 10 + (p[1] - b'0')));
        }
    }

    let check = checksum(subset, &symbols[1..]);
    symbols.push(check);

    Ok(Code128 { subset, symbols })
}

impl Code128 {
    #[inline]
    pub const fn subset(&self) -> Subset {
        self.subset
    }

    /// All symbol values in drawing order, stop code excluded.
    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Data symbols only (no start, no checksum).
    #[inline]
    pub fn data_symbols(&self) -> &[u8] {
        &self.symbols[1..self.symbols.len() - 1]
    }

    #[inline]
    pub fn checksum(&self) -> u8 {
        self.symbols[self.symbols.len() - 1]
    }

    /// Total width of the stream in modules, stop pattern included.
    pub fn module_count(&self) -> u32 {
        self.symbols.len() as u32 * SYMBOL_MODULES + STOP_MODULES
    }

    /// One width pattern per symbol, the 7-element stop pattern last. Every
    /// pattern starts with a bar.
    pub fn segments(&self) -> impl Iterator<Item = &'static [u8]> + '_ {
        self.symbols
            .iter()
            .filter_map(|&s| tables::pattern(s))
            .chain(iter::once(&STOP_PATTERN[..]))
    }

    /// Flattened `(width, is_bar)` elements of the whole stream.
    pub fn modules(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
        self.segments()
            .flat_map(|widths| widths.iter().enumerate().map(|(i, &w)| (w, i % 2 == 0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_DATA_LEN;

    #[test]
    fn test_subset_selection() {
        assert_eq!(Subset::select(b"0123456789"), Subset::C);
        assert_eq!(Subset::select(b"12 34"), Subset::B);
        assert_eq!(Subset::select(b"M1DOE/JOHN"), Subset::B);
    }

    #[test]
    fn test_encode_subset_b() {
        let code = encode_code128(b"PJJ123C", MAX_DATA_LEN).unwrap();
        assert_eq!(code.subset(), Subset::B);
        assert_eq!(code.symbols()[0], START_B);
        assert_eq!(code.data_symbols(), &[48, 42, 42, 17, 18, 19, 35]);
        assert_eq!(code.checksum(), 55);
    }

    #[test]
    fn test_encode_subset_c_even() {
        let code = encode_code128(b"1234", MAX_DATA_LEN).unwrap();
        assert_eq!(code.subset(), Subset::C);
        assert_eq!(code.symbols(), &[START_C, 12, 34, 82]);
    }

    #[test]
    fn test_encode_subset_c_odd_is_zero_padded() {
        let code = encode_code128(b"4012345678901", MAX_DATA_LEN).unwrap();
        assert_eq!(code.data_symbols(), &[4, 1, 23, 45, 67, 89, 1]);
        assert_eq!(code.checksum(), 0);
    }

    #[test]
    fn test_out_of_range_bytes_map_to_space() {
        let code = encode_code128(&[b'A', 0x07, 0xC3], MAX_DATA_LEN).unwrap();
        assert_eq!(code.data_symbols(), &[33, 0, 0]);
        assert_eq!(value_b(127), 95);
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            encode_code128(b"", MAX_DATA_LEN),
            Err(EncodeError::InvalidLength { len: 0, max: MAX_DATA_LEN })
        );
        assert_eq!(
            encode_code128(b"12345", 4),
            Err(EncodeError::InvalidLength { len: 5, max: 4 })
        );
        assert!(encode_code128(b"1234", 4).is_ok());
    }

    #[test]
    fn test_segments_and_modules() {
        let code = encode_code128(b"29857341", MAX_DATA_LEN).unwrap();
        let segments: Vec<_> = code.segments().collect();
        assert_eq!(segments.len(), 1 + 4 + 1 + 1);
        assert_eq!(segments[0], &[2, 1, 1, 2, 3, 2]);
        assert_eq!(*segments.last().unwrap(), &STOP_PATTERN[..]);

        let total: u32 = code.modules().map(|(w, _)| w as u32).sum();
        assert_eq!(total, code.module_count());
        assert_eq!(code.module_count(), 6 * 11 + 13);

        // bars and spaces alternate inside every segment, starting with a bar
        let first: Vec<_> = code.modules().take(6).map(|(_, bar)| bar).collect();
        assert_eq!(first, [true, false, true, false, true, false]);
        assert_eq!(code.modules().last(), Some((2, true)));
    }
}
