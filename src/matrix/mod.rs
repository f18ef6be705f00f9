//! Precomputed 2D matrices (Aztec, PDF417, phone-rendered QR).
//!
//! A matrix arrives either as `"width,height,hexdata"` text or, once the
//! storage layer has undone its own compression, as raw packed bytes with the
//! dimensions carried next to them. Both forms are row-major, most
//! significant bit first, wrapping after `width` bits.

pub mod bits;
pub mod runs;

use crate::error::{ParseError, RenderError, Result};
use crate::MAX_BITS_LEN;

pub use bits::{hex_value, Bits, Bitstream};
pub use runs::{Run, Runs};

/// Longest accepted hex payload, in characters.
pub const MAX_HEX_LEN: usize = MAX_BITS_LEN * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixDescriptor<'a> {
    width: u32,
    height: u32,
    stream: Bitstream<'a>,
}

/// Reads one `digits,` field and returns the value with the remaining input.
fn dimension(input: &[u8]) -> core::result::Result<(u32, &[u8]), ParseError> {
    let comma = input.iter().position(|&c| c == b',').ok_or(ParseError::MissingSeparator)?;
    let field = &input[..comma];
    if field.is_empty() {
        return Err(ParseError::InvalidDimension);
    }

    let mut value: u32 = 0;
    for &c in field {
        if !c.is_ascii_digit() {
            return Err(ParseError::InvalidDimension);
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((c - b'0') as u32))
            .ok_or(ParseError::InvalidDimension)?;
    }

    if value == 0 {
        return Err(ParseError::ZeroDimension);
    }
    Ok((value, &input[comma + 1..]))
}

impl<'a> MatrixDescriptor<'a> {
    /// Parses a `"width,height,hexdata"` descriptor. Truncation is not an
    /// error here, see [MatrixDescriptor::unpack].
    pub fn parse(text: &'a [u8]) -> Result<Self> {
        let (width, rest) = dimension(text)?;
        let (height, hex) = dimension(rest)?;

        if hex.len() > MAX_HEX_LEN {
            return Err(RenderError::InvalidLength { len: hex.len(), max: MAX_HEX_LEN });
        }
        if let Some(i) = hex.iter().position(|&c| hex_value(c).is_none()) {
            let position = text.len() - hex.len() + i;
            return Err(ParseError::InvalidHexDigit { position, byte: hex[i] }.into());
        }

        Ok(Self { width, height, stream: Bitstream::Hex(hex) })
    }

    /// Wraps raw packed bytes (8 bits per byte) of a `width × height` matrix.
    pub fn packed(width: u32, height: u32, bytes: &'a [u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ParseError::ZeroDimension.into());
        }
        if bytes.len() > MAX_BITS_LEN {
            return Err(RenderError::InvalidLength { len: bytes.len(), max: MAX_BITS_LEN });
        }

        Ok(Self { width, height, stream: Bitstream::Packed(bytes) })
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub const fn stream(&self) -> Bitstream<'a> {
        self.stream
    }

    /// Bits needed to cover every module.
    #[inline]
    pub const fn required_bits(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub const fn available_bits(&self) -> u64 {
        self.stream.len_bits()
    }

    #[inline]
    pub const fn is_truncated(&self) -> bool {
        self.available_bits() < self.required_bits()
    }

    /// Module at `(x, y)`. Out of range or missing bits read as clear.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let pos = y as u64 * self.width as u64 + x as u64;
        self.stream.bit(pos as usize)
    }

    /// Runs of set modules, row by row. A truncated matrix yields no partial
    /// output.
    pub fn unpack(&self) -> Result<Runs<'a>> {
        if self.is_truncated() {
            return Err(RenderError::TruncatedData {
                required: self.required_bits(),
                available: self.available_bits(),
            });
        }
        Ok(Runs::new(self.stream.bits(self.required_bits()), self.width))
    }
}
