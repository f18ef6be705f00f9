use core::iter;

/// Raw bits of a matrix, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bitstream<'a> {
    /// Hex text, 4 bits per character.
    Hex(&'a [u8]),
    /// Packed bytes, 8 bits per byte.
    Packed(&'a [u8]),
}

/// Value of an ASCII hex digit (either case).
#[inline]
pub const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

impl<'a> Bitstream<'a> {
    /// Number of bits the stream can provide.
    #[inline]
    pub const fn len_bits(&self) -> u64 {
        match self {
            Bitstream::Hex(hex) => hex.len() as u64 * 4,
            Bitstream::Packed(bytes) => bytes.len() as u64 * 8,
        }
    }

    /// Bit at `pos`. Positions past the end read as clear.
    pub fn bit(&self, pos: usize) -> bool {
        match self {
            Bitstream::Hex(hex) => hex
                .get(pos / 4)
                .and_then(|&c| hex_value(c))
                .map_or(false, |nibble| (nibble >> (3 - pos % 4)) & 1 != 0),
            Bitstream::Packed(bytes) => bytes
                .get(pos / 8)
                .map_or(false, |&b| (b >> (7 - pos % 8)) & 1 != 0),
        }
    }

    /// Iterates over the first `count` bits (or fewer if the stream is shorter).
    pub fn bits(self, count: u64) -> Bits<'a> {
        let end = count.min(self.len_bits()) as usize;
        Bits { stream: self, pos: 0, end }
    }
}

#[derive(Debug, Clone)]
pub struct Bits<'a> {
    stream: Bitstream<'a>,
    pos: usize,
    end: usize,
}

impl<'a> iter::Iterator for Bits<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.end {
            let bit = self.stream.bit(self.pos);
            self.pos += 1;
            Some(bit)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.end - self.pos;
        (count, Some(count))
    }
}

impl<'a> iter::ExactSizeIterator for Bits<'a> {}
impl<'a> iter::FusedIterator for Bits<'a> {}
