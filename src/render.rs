//! Rectangle painters for the linear and matrix paths.

use crate::code128::{encode_code128, Code128};
use crate::error::Result;
use crate::geometry::{fit_to_box, fit_to_box_min};
use crate::matrix::MatrixDescriptor;
use crate::MAX_DATA_LEN;

/// Binary color of a filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub const fn invert(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Axis-aligned filled rectangle, the only shape the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub color: Color,
}

impl RenderRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32, color: Color) -> Self {
        Self { x, y, width, height, color }
    }

    #[inline]
    pub const fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }
}

/// Size of the target surface. Its origin is `(0, 0)`.
///
/// Painters address pixels with `i32` coordinates, so both sides are capped
/// at `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const MAX_SIDE: u32 = i32::MAX as u32;

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }.clamped()
    }

    /// Caps both sides at [Bounds::MAX_SIDE].
    pub const fn clamped(self) -> Self {
        let width = if self.width > Self::MAX_SIDE { Self::MAX_SIDE } else { self.width };
        let height = if self.height > Self::MAX_SIDE { Self::MAX_SIDE } else { self.height };
        Self { width, height }
    }
}

/// Converts a pixel length to a coordinate, saturating at `i32::MAX`.
#[inline]
fn coord(len: u32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Layout configuration of both rendering paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    linear_margin: u32,
    bar_inset: u32,
    bar_padding: u32,
    matrix_margin: u32,
    quiet_zone: u32,
    qr_min_scale: u32,
    max_data_len: usize,
    inverted: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOptions {
    pub const fn new() -> Self {
        Self {
            linear_margin: 6,
            bar_inset: 25,
            bar_padding: 5,
            matrix_margin: 5,
            quiet_zone: 4,
            qr_min_scale: 2,
            max_data_len: MAX_DATA_LEN,
            inverted: false,
        }
    }

    /// Side margin of the Code 128 path, in pixels.
    pub const fn linear_margin(&self) -> u32 {
        self.linear_margin
    }

    pub const fn set_linear_margin(mut self, margin: u32) -> Self {
        self.linear_margin = margin;
        self
    }

    /// Distance between the bar band and the top (and bottom) edge.
    pub const fn bar_inset(&self) -> u32 {
        self.bar_inset
    }

    pub const fn set_bar_inset(mut self, inset: u32) -> Self {
        self.bar_inset = inset;
        self
    }

    /// White padding drawn above and below the bar band.
    pub const fn bar_padding(&self) -> u32 {
        self.bar_padding
    }

    pub const fn set_bar_padding(mut self, padding: u32) -> Self {
        self.bar_padding = padding;
        self
    }

    /// Margin of the matrix and QR paths, in pixels.
    pub const fn matrix_margin(&self) -> u32 {
        self.matrix_margin
    }

    pub const fn set_matrix_margin(mut self, margin: u32) -> Self {
        self.matrix_margin = margin;
        self
    }

    /// White border drawn around scaled matrix content.
    pub const fn quiet_zone(&self) -> u32 {
        self.quiet_zone
    }

    pub const fn set_quiet_zone(mut self, quiet_zone: u32) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Smallest scale used for QR grids generated on the device.
    pub const fn qr_min_scale(&self) -> u32 {
        self.qr_min_scale
    }

    pub const fn set_qr_min_scale(mut self, scale: u32) -> Self {
        self.qr_min_scale = scale;
        self
    }

    /// Longest accepted text payload, in bytes.
    pub const fn max_data_len(&self) -> usize {
        self.max_data_len
    }

    pub const fn set_max_data_len(mut self, len: usize) -> Self {
        self.max_data_len = len;
        self
    }

    /// Returns if the output is rendered with inverted colors.
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// Marks whether black and white should be swapped in the output.
    pub const fn set_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

/// Ordered rectangle sink. Later rectangles paint over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    rects: Vec<RenderRect>,
    inverted: bool,
}

impl Canvas {
    pub fn new(inverted: bool) -> Self {
        Self { rects: Vec::new(), inverted }
    }

    /// Appends a rectangle. Empty rectangles are dropped.
    pub fn fill(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        if width == 0 || height == 0 {
            return;
        }
        let color = if self.inverted { color.invert() } else { color };
        self.rects.push(RenderRect { x, y, width, height, color });
    }

    pub fn clear(&mut self, bounds: Bounds) {
        let bounds = bounds.clamped();
        self.fill(0, 0, bounds.width, bounds.height, Color::White);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn into_rects(self) -> Vec<RenderRect> {
        self.rects
    }
}

/// Lays out a Code 128 stream as a horizontal band of bars.
///
/// Only bars are emitted: the white band painted first already covers the
/// spaces. A bar crossing `bounds.width - linear_margin` is clipped to that
/// limit and nothing is drawn past it.
pub fn paint_code128(code: &Code128, bounds: Bounds, options: &RenderOptions, canvas: &mut Canvas) {
    let bounds = bounds.clamped();
    let margin = options.linear_margin;
    let inset = options.bar_inset.min(bounds.height / 4);
    let padding = options.bar_padding.min(inset);

    let fit = fit_to_box(code.module_count(), 1, bounds.width, bounds.height, margin);
    let avail_w = bounds.width.saturating_sub(margin.saturating_mul(2));
    let bar_height = bounds.height.saturating_sub(inset * 2).max(1);
    let bar_y = coord(inset);
    let right_limit = coord(bounds.width.saturating_sub(margin));

    tracing::debug!(
        modules = code.module_count(),
        scale = fit.scale,
        offset_x = fit.offset_x,
        "code128 layout"
    );

    canvas.fill(
        coord(margin),
        bar_y - coord(padding),
        avail_w,
        bar_height + padding * 2,
        Color::White,
    );

    let mut x = fit.offset_x;
    for (width, bar) in code.modules() {
        if x >= right_limit {
            break;
        }
        let px = (width as u32).saturating_mul(fit.scale).min(right_limit.abs_diff(x));
        if bar {
            canvas.fill(x, bar_y, px, bar_height, Color::Black);
        }
        x = x.saturating_add(coord(px));
    }
}

/// Lays out a matrix centered in `bounds`, scaled by at least `min_scale`,
/// inside a white quiet zone. A truncated matrix paints nothing.
pub fn paint_matrix(
    matrix: &MatrixDescriptor<'_>,
    bounds: Bounds,
    options: &RenderOptions,
    min_scale: u32,
    canvas: &mut Canvas,
) -> Result<()> {
    let runs = matrix.unpack()?;
    let bounds = bounds.clamped();

    let (w, h) = (matrix.width(), matrix.height());
    let fit = fit_to_box_min(w, h, bounds.width, bounds.height, options.matrix_margin, min_scale);
    let scale = fit.scale;
    let quiet = options.quiet_zone;

    tracing::debug!(width = w, height = h, scale, offset_x = fit.offset_x, offset_y = fit.offset_y, "matrix layout");

    canvas.fill(
        fit.offset_x.saturating_sub(coord(quiet)),
        fit.offset_y.saturating_sub(coord(quiet)),
        w.saturating_mul(scale).saturating_add(quiet * 2),
        h.saturating_mul(scale).saturating_add(quiet * 2),
        Color::White,
    );

    for run in runs {
        canvas.fill(
            fit.offset_x.saturating_add(coord(run.col.saturating_mul(scale))),
            fit.offset_y.saturating_add(coord(run.row.saturating_mul(scale))),
            run.len.saturating_mul(scale),
            scale,
            Color::Black,
        );
    }
    Ok(())
}

/// Encodes `data` as Code 128 and lays it out in `bounds` with default options.
pub fn render_code128(data: &[u8], bounds: Bounds) -> Result<Vec<RenderRect>> {
    let options = RenderOptions::new();
    let code = encode_code128(data, options.max_data_len)?;
    let mut canvas = Canvas::new(options.inverted);
    paint_code128(&code, bounds, &options, &mut canvas);
    Ok(canvas.into_rects())
}

/// Parses a `"width,height,hexdata"` descriptor and lays it out in `bounds`
/// with default options.
pub fn render_matrix(descriptor: &[u8], bounds: Bounds) -> Result<Vec<RenderRect>> {
    let options = RenderOptions::new();
    let matrix = MatrixDescriptor::parse(descriptor)?;
    let mut canvas = Canvas::new(options.inverted);
    paint_matrix(&matrix, bounds, &options, 1, &mut canvas)?;
    Ok(canvas.into_rects())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    const PEBBLE: Bounds = Bounds::new(144, 168);

    fn black(rects: &[RenderRect]) -> Vec<RenderRect> {
        rects.iter().copied().filter(RenderRect::is_black).collect()
    }

    #[test]
    fn test_matrix_rle() {
        let rects = render_matrix(b"4,4,F0F0", Bounds::new(50, 50)).unwrap();
        // avail 40 -> scale 10, content 40x40 centered at 5
        assert_eq!(rects[0], RenderRect::new(1, 1, 48, 48, Color::White));
        assert_eq!(black(&rects), [
            RenderRect::new(5, 5, 40, 10, Color::Black),
            RenderRect::new(5, 25, 40, 10, Color::Black),
        ]);
    }

    #[test]
    fn test_matrix_truncated_paints_nothing() {
        let err = render_matrix(b"8,8,0123456789ABCDE", PEBBLE).unwrap_err();
        assert_eq!(err, RenderError::TruncatedData { required: 64, available: 60 });
    }

    #[test]
    fn test_code128_layout() {
        let rects = render_code128(b"1234", PEBBLE).unwrap();
        // 4 symbols + stop = 57 modules, avail 132 -> scale 2, 114 px wide
        assert_eq!(rects[0], RenderRect::new(6, 20, 132, 128, Color::White));

        let bars = black(&rects);
        assert_eq!(bars.len(), 4 * 3 + 4);
        assert_eq!(bars[0], RenderRect::new((144 - 114) / 2, 25, 4, 118, Color::Black));
        let last = bars.last().unwrap();
        assert_eq!(last.x + last.width as i32, 15 + 114);
    }

    #[test]
    fn test_code128_clips_at_right_limit() {
        let data = [b'A'; 40];
        let bounds = Bounds::new(100, 168);
        let rects = render_code128(&data, bounds).unwrap();
        let bars = black(&rects);
        assert!(!bars.is_empty());
        for bar in &bars {
            assert!(bar.x >= 6);
            assert!(bar.x + bar.width as i32 <= 94, "{bar:?}");
        }
    }

    #[test]
    fn test_code128_huge_bounds() {
        let rects = render_code128(b"1234", Bounds { width: u32::MAX, height: 200 }).unwrap();
        let bars = black(&rects);
        assert_eq!(bars.len(), 4 * 3 + 4);
        for bar in &bars {
            assert!(bar.x > 6);
            assert!(bar.x.checked_add(bar.width as i32).is_some(), "{bar:?}");
        }
    }

    #[test]
    fn test_matrix_huge_bounds() {
        let bounds = Bounds::new(u32::MAX, u32::MAX);
        assert_eq!(bounds, Bounds::new(Bounds::MAX_SIDE, Bounds::MAX_SIDE));

        let rects = render_matrix(b"4,4,F0F0", bounds).unwrap();
        let bars = black(&rects);
        assert_eq!(bars.len(), 2);
        assert!(bars.iter().all(|r| r.x > 0 && r.y > 0));
        assert!(bars[1].y > bars[0].y);
    }

    #[test]
    fn test_canvas_drops_empty_rects() {
        let mut canvas = Canvas::new(false);
        canvas.fill(0, 0, 0, 10, Color::Black);
        canvas.fill(0, 0, 10, 0, Color::Black);
        assert!(canvas.is_empty());
        canvas.clear(Bounds::new(8, 8));
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_inverted_canvas() {
        let options = RenderOptions::new().set_inverted(true);
        let matrix = MatrixDescriptor::parse(b"2,2,9").unwrap();
        let mut canvas = Canvas::new(options.inverted());
        paint_matrix(&matrix, Bounds::new(30, 30), &options, 1, &mut canvas).unwrap();
        let rects = canvas.into_rects();
        assert_eq!(rects[0].color, Color::Black);
        assert!(rects[1..].iter().all(|r| r.color == Color::White));
        assert_eq!(rects.len(), 3);
    }

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new()
            .set_linear_margin(2)
            .set_quiet_zone(0)
            .set_qr_min_scale(3)
            .set_max_data_len(16);
        assert_eq!(options.linear_margin(), 2);
        assert_eq!(options.quiet_zone(), 0);
        assert_eq!(options.qr_min_scale(), 3);
        assert_eq!(options.max_data_len(), 16);
        assert_eq!(options.matrix_margin(), 5);
        assert!(!options.inverted());
    }
}
