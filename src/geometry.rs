//! Integer scaling and centering shared by the linear and matrix paths.

/// Placement of scaled content inside a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fit {
    /// Pixels per content unit, never zero.
    pub scale: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Fits `content_w × content_h` units into a `box_w × box_h` box keeping
/// `margin` pixels free on every side. The scale is floored at 1 so tiny
/// displays still get (clipped) output.
#[inline]
pub fn fit_to_box(content_w: u32, content_h: u32, box_w: u32, box_h: u32, margin: u32) -> Fit {
    fit_to_box_min(content_w, content_h, box_w, box_h, margin, 1)
}

/// Same as [fit_to_box] with a scale floor of `min_scale` (itself at least 1).
pub fn fit_to_box_min(
    content_w: u32,
    content_h: u32,
    box_w: u32,
    box_h: u32,
    margin: u32,
    min_scale: u32,
) -> Fit {
    let avail_w = box_w.saturating_sub(margin.saturating_mul(2));
    let avail_h = box_h.saturating_sub(margin.saturating_mul(2));
    let scale = (avail_w / content_w.max(1))
        .min(avail_h / content_h.max(1))
        .max(min_scale)
        .max(1);

    Fit {
        scale,
        offset_x: center(content_w.saturating_mul(scale), box_w, margin),
        offset_y: center(content_h.saturating_mul(scale), box_h, margin),
    }
}

/// Offset centering `extent` pixels in `size`, never less than `margin`.
pub fn center(extent: u32, size: u32, margin: u32) -> i32 {
    let centered = (size as i64 - extent as i64) / 2;
    centered.max(margin as i64).min(i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_min_of_axes() {
        // 144x168 display, 25x25 matrix, margin 5
        let fit = fit_to_box(25, 25, 144, 168, 5);
        assert_eq!(fit.scale, 5);
        assert_eq!(fit.offset_x, (144 - 125) / 2);
        assert_eq!(fit.offset_y, (168 - 125) / 2);
    }

    #[test]
    fn test_scale_never_zero() {
        let fit = fit_to_box(200, 1, 50, 50, 0);
        assert_eq!(fit.scale, 1);
        assert_eq!(fit.offset_x, 0);

        let fit = fit_to_box(10, 10, 4, 4, 6);
        assert_eq!(fit.scale, 1);
    }

    #[test]
    fn test_overflowing_content_clamps_to_margin() {
        let fit = fit_to_box(200, 1, 50, 50, 6);
        assert_eq!(fit.offset_x, 6);
    }

    #[test]
    fn test_zero_content_units() {
        let fit = fit_to_box(0, 0, 20, 20, 0);
        assert_eq!(fit.scale, 20);
        assert_eq!(fit.offset_x, 10);
    }

    #[test]
    fn test_min_scale_recenters() {
        let fit = fit_to_box_min(40, 40, 60, 60, 5, 2);
        assert_eq!(fit.scale, 2);
        // 80 pixels do not fit in 60, clamp to margin
        assert_eq!(fit.offset_x, 5);

        let fit = fit_to_box_min(21, 21, 144, 168, 5, 2);
        assert_eq!(fit.scale, 6);
        assert_eq!(fit.offset_x, (144 - 126) / 2);
    }
}
