//! Barcode rendering for small wallet displays.
//!
//! Card payloads come in two flavours: text encoded on the device (Code 128,
//! or QR through an external [QrGenerator]) and matrices precomputed by the
//! phone (Aztec, PDF417, QR). Either way the result is an ordered list of
//! [RenderRect]s; painting them is left to the caller, or to the
//! `embedded-graphics` integration when that feature is enabled.
//!
//! ```
//! use wallet_barcode::{Bounds, Format, NoQr, Payload, Renderer};
//!
//! let renderer = Renderer::new(Bounds::new(144, 168), NoQr);
//! let frame = renderer.render_frame(Format::Code128, Payload::Text(b"29857341"));
//! assert!(!frame.is_placeholder());
//! let bars = frame.rects.iter().filter(|r| r.is_black()).count();
//! assert!(bars > 0);
//! ```

pub mod code128;
pub mod dispatch;
pub mod error;
pub mod geometry;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;
pub mod matrix;
pub mod render;
pub mod tables;

/// Longest text payload, in bytes.
pub const MAX_DATA_LEN: usize = 1024;
/// Longest packed bitmap payload, in bytes (8000 modules).
pub const MAX_BITS_LEN: usize = 1000;

pub use code128::{encode_code128, Code128, Subset};
pub use dispatch::{Format, Frame, NoQr, Payload, QrGenerator, QrGrid, Renderer};
pub use error::{EncodeError, ParseError, RenderError};
pub use geometry::{fit_to_box, Fit};
pub use matrix::MatrixDescriptor;
pub use render::{render_code128, render_matrix, Bounds, Color, RenderOptions, RenderRect};
