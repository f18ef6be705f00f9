//! Routing of `(format, payload)` pairs to a rendering path.
//!
//! Wire contract for QR payloads: text whose first byte is an ASCII digit and
//! which contains a comma is a precomputed `"width,height,hex"` matrix;
//! anything else is raw text handed to the [QrGenerator]. A QR text such as
//! `"123,Main St"` is therefore misrouted and fails to parse. Transports that
//! can carry dimensions out of band should send [Payload::Packed] instead.

use core::fmt;

use crate::code128::encode_code128;
use crate::error::{RenderError, Result};
use crate::matrix::MatrixDescriptor;
use crate::render::{paint_code128, paint_matrix, Bounds, Canvas, RenderOptions, RenderRect};

/// Barcode format tag, as carried by card records (`0..=5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Format {
    Code128 = 0,
    /// Drawn as Code 128, not a true Code 39 encoding.
    Code39 = 1,
    /// Drawn as Code 128, not a true EAN-13 encoding.
    Ean13 = 2,
    Qr = 3,
    Aztec = 4,
    Pdf417 = 5,
}

/// Rendering family of a [Format].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Encoded on the device with the Code 128 encoder.
    Linear,
    /// Always precomputed by the phone.
    Matrix,
    /// Precomputed or generated on the device, depending on the payload.
    Qr,
}

impl Format {
    pub const ALL: [Format; 6] = [
        Format::Code128,
        Format::Code39,
        Format::Ean13,
        Format::Qr,
        Format::Aztec,
        Format::Pdf417,
    ];

    /// Human readable name, used as a subtitle for cards without description.
    pub const fn name(self) -> &'static str {
        match self {
            Format::Code128 => "Code 128",
            Format::Code39 => "Code 39",
            Format::Ean13 => "EAN-13",
            Format::Qr => "QR Code",
            Format::Aztec => "Aztec",
            Format::Pdf417 => "PDF417",
        }
    }

    pub const fn family(self) -> Family {
        match self {
            Format::Code128 | Format::Code39 | Format::Ean13 => Family::Linear,
            Format::Aztec | Format::Pdf417 => Family::Matrix,
            Format::Qr => Family::Qr,
        }
    }
}

impl TryFrom<u32> for Format {
    type Error = RenderError;

    fn try_from(value: u32) -> Result<Self> {
        Format::ALL
            .get(value as usize)
            .copied()
            .ok_or(RenderError::UnknownFormat(value))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Barcode data of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    /// ASCII text, or a `"width,height,hex"` matrix descriptor.
    Text(&'a [u8]),
    /// Packed matrix bits (MSB first, row-major) with explicit dimensions.
    Packed { width: u32, height: u32, bytes: &'a [u8] },
}

impl<'a> Payload<'a> {
    /// Builds the payload of a stored card record. Records of text cards
    /// carry `0 × 0` dimensions.
    pub fn from_record(width: u32, height: u32, bytes: &'a [u8]) -> Self {
        if width > 0 && height > 0 {
            Payload::Packed { width, height, bytes }
        } else {
            Payload::Text(bytes)
        }
    }
}

/// Rendering path selected for a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Code128(&'a [u8]),
    Matrix(Payload<'a>),
    QrText(&'a [u8]),
}

/// Whether a QR text payload is a precomputed matrix descriptor.
pub fn is_matrix_descriptor(text: &[u8]) -> bool {
    text.first().map_or(false, u8::is_ascii_digit) && text.contains(&b',')
}

/// Selects the rendering path. Packed payloads always go to the matrix path.
pub fn route(format: Format, payload: Payload<'_>) -> Route<'_> {
    let text = match payload {
        Payload::Text(text) => text,
        Payload::Packed { .. } => return Route::Matrix(payload),
    };

    match format.family() {
        Family::Linear => Route::Code128(text),
        Family::Matrix => Route::Matrix(payload),
        Family::Qr if is_matrix_descriptor(text) => Route::Matrix(payload),
        Family::Qr => Route::QrText(text),
    }
}

/// Square QR module grid produced by a [QrGenerator], packed MSB first and
/// row-major in `⌈size² / 8⌉` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrGrid {
    size: u32,
    bits: Vec<u8>,
}

impl QrGrid {
    pub fn new(size: u32, bits: Vec<u8>) -> Self {
        Self { size, bits }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Views the grid as a matrix. A grid that is empty, too large or whose
    /// buffer does not cover every module counts as a generation failure.
    pub fn as_matrix(&self) -> Result<MatrixDescriptor<'_>> {
        let matrix = MatrixDescriptor::packed(self.size, self.size, &self.bits)
            .map_err(|_| RenderError::GenerationFailure)?;
        if matrix.is_truncated() {
            return Err(RenderError::GenerationFailure);
        }
        Ok(matrix)
    }
}

/// On-device QR generation collaborator.
pub trait QrGenerator {
    /// Generates the module grid of `text`, or `None` when the text does not
    /// fit the generator's buffers.
    fn generate_qr(&self, text: &[u8]) -> Option<QrGrid>;
}

impl<F> QrGenerator for F
where
    F: Fn(&[u8]) -> Option<QrGrid>,
{
    fn generate_qr(&self, text: &[u8]) -> Option<QrGrid> {
        self(text)
    }
}

/// Generator for devices without on-board QR support: always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQr;

impl QrGenerator for NoQr {
    fn generate_qr(&self, _text: &[u8]) -> Option<QrGrid> {
        None
    }
}

/// Output of [Renderer::render_frame]. On failure `rects` is a blank panel
/// and `error` tells the UI what to caption it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rects: Vec<RenderRect>,
    pub error: Option<RenderError>,
}

impl Frame {
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.error.is_some()
    }
}

/// Renders card payloads into a fixed-size box.
#[derive(Debug, Clone)]
pub struct Renderer<Q> {
    bounds: Bounds,
    options: RenderOptions,
    qr: Q,
}

impl<Q: QrGenerator> Renderer<Q> {
    pub fn new(bounds: Bounds, qr: Q) -> Self {
        Self { bounds, options: RenderOptions::new(), qr }
    }

    pub fn set_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn set_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    #[inline]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Renders `payload` as `format`. The first rectangle always clears the
    /// whole bounds to white.
    #[tracing::instrument(level = "trace", skip_all, fields(%format))]
    pub fn render(&self, format: Format, payload: Payload<'_>) -> Result<Vec<RenderRect>> {
        let options = &self.options;
        let mut canvas = Canvas::new(options.inverted());
        canvas.clear(self.bounds);

        let route = route(format, payload);
        tracing::debug!(?route, "routing payload");

        match route {
            Route::Code128(text) => {
                let code = encode_code128(text, options.max_data_len())?;
                paint_code128(&code, self.bounds, options, &mut canvas);
            }
            Route::Matrix(Payload::Text(text)) => {
                let matrix = MatrixDescriptor::parse(text)?;
                paint_matrix(&matrix, self.bounds, options, 1, &mut canvas)?;
            }
            Route::Matrix(Payload::Packed { width, height, bytes }) => {
                let matrix = MatrixDescriptor::packed(width, height, bytes)?;
                paint_matrix(&matrix, self.bounds, options, 1, &mut canvas)?;
            }
            Route::QrText(text) => {
                if text.is_empty() || text.len() > options.max_data_len() {
                    return Err(RenderError::InvalidLength {
                        len: text.len(),
                        max: options.max_data_len(),
                    });
                }
                let grid = self.qr.generate_qr(text).ok_or(RenderError::GenerationFailure)?;
                let matrix = grid.as_matrix()?;
                paint_matrix(&matrix, self.bounds, options, options.qr_min_scale(), &mut canvas)?;
            }
        }

        tracing::debug!(rects = canvas.len(), "rendered");
        Ok(canvas.into_rects())
    }

    /// Like [Renderer::render], but never fails: errors become a blank panel.
    pub fn render_frame(&self, format: Format, payload: Payload<'_>) -> Frame {
        match self.render(format, payload) {
            Ok(rects) => Frame { rects, error: None },
            Err(error) => {
                tracing::warn!(%format, %error, "rendering failed, showing placeholder");
                let mut canvas = Canvas::new(self.options.inverted());
                canvas.clear(self.bounds);
                Frame { rects: canvas.into_rects(), error: Some(error) }
            }
        }
    }
}
