//! Error taxonomy of the rendering engine.
//!
//! None of these are fatal: [`Renderer::render_frame`](crate::Renderer::render_frame)
//! turns every one of them into a blank panel so the caller can keep cycling
//! through cards.

/// Failure of the Code 128 encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("invalid data length: {len} (expected 1 to {max} bytes)")]
    InvalidLength { len: usize, max: usize },
}

/// Malformed `width,height,hex` matrix descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing ',' after a matrix dimension")]
    MissingSeparator,
    #[error("matrix dimension is not an unsigned decimal integer")]
    InvalidDimension,
    #[error("matrix dimension is zero")]
    ZeroDimension,
    #[error("invalid hex digit {byte:#04x} at offset {position}")]
    InvalidHexDigit { position: usize, byte: u8 },
}

/// Any failure to turn a payload into rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid data length: {len} (expected 1 to {max})")]
    InvalidLength { len: usize, max: usize },
    #[error("malformed matrix descriptor: {0}")]
    Parse(#[from] ParseError),
    #[error("data truncated: {available} bits available, {required} required")]
    TruncatedData { required: u64, available: u64 },
    #[error("QR generation failed")]
    GenerationFailure,
    #[error("unknown barcode format {0}")]
    UnknownFormat(u32),
}

impl From<EncodeError> for RenderError {
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::InvalidLength { len, max } => RenderError::InvalidLength { len, max },
        }
    }
}

pub type Result<T> = core::result::Result<T, RenderError>;
